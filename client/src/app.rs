//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{nav_bar::NavBar, toast_host::ToastHost};
use crate::pages::{chat::ChatPage, generator::GeneratorPage, notices::NoticesPage};
use crate::state::catalog::SystemCatalog;
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="ko">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the toast slot and the system catalog, refreshes the catalog
/// from the backend once, and routes between the three pages.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let toasts = RwSignal::new(ToastState::default());
    let catalog = RwSignal::new(SystemCatalog::default());

    provide_context(toasts);
    provide_context(catalog);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_template_structure().await {
            Ok(template) => catalog.update(|c| c.apply_template(&template)),
            Err(e) => leptos::logging::warn!("system catalog refresh failed, keeping defaults: {e}"),
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/notice-desk.css"/>
        <Title text="전산 공지 어시스턴트"/>

        <Router>
            <NavBar/>
            <main class="app-main">
                <Routes fallback=|| "페이지를 찾을 수 없습니다.".into_view()>
                    <Route path=StaticSegment("") view=ChatPage/>
                    <Route path=StaticSegment("notices") view=NoticesPage/>
                    <Route path=StaticSegment("generator") view=GeneratorPage/>
                </Routes>
            </main>
        </Router>
        <ToastHost/>
    }
}
