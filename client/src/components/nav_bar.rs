//! Top navigation between the three pages.

use leptos::prelude::*;
use leptos_router::components::A;

/// Header with links to chat, notice management, and the generator.
///
/// The router marks the active link with `aria-current="page"`.
#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <header class="nav-bar">
            <span class="nav-bar__brand">"📢 전산 공지 어시스턴트"</span>
            <nav class="nav-bar__links">
                <A href="/">"💬 AI 채팅"</A>
                <A href="/notices">"📋 공지 관리"</A>
                <A href="/generator">"📝 공지 생성기"</A>
            </nav>
        </header>
    }
}
