//! Notice management page: searchable card grid with detail and edit dialogs.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page-scoped `NoticesState` holds the last fetched collection. One
//! effect watches `reload_seq` and refetches everything; mutations never
//! patch the cache, they bump the sequence instead.

use leptos::prelude::*;

use crate::components::notice_card::NoticeCard;
use crate::components::notice_detail_modal::NoticeDetailModal;
use crate::components::notice_edit_modal::NoticeEditModal;
use crate::state::catalog::SystemCatalog;
use crate::state::notices::{NoticesState, reload_trigger};
use crate::state::toast::{ToastKind, ToastState};
use crate::util::browser::confirm;
use crate::util::notify::notify;

/// Notice management page.
#[component]
pub fn NoticesPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let catalog = expect_context::<RwSignal<SystemCatalog>>();
    let state = RwSignal::new(NoticesState { loading: true, ..NoticesState::default() });

    // Full reload on mount and after every successful mutation.
    let reload = reload_trigger(state);
    Effect::new(move || {
        let _seq = reload.get();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_notices().await {
                Ok(items) => state.update(|s| s.apply_loaded(items)),
                Err(e) => {
                    leptos::logging::error!("notice list load failed: {e}");
                    state.update(|s| s.loading = false);
                    notify(toasts, ToastKind::Error, "공지 목록을 불러오는데 실패했습니다.");
                }
            }
        });
    });

    let on_open = Callback::new(move |id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_notice(&id).await {
                Ok(notice) => state.update(|s| s.open_detail(notice)),
                Err(e) => {
                    leptos::logging::error!("notice {id} load failed: {e}");
                    notify(toasts, ToastKind::Error, "공지를 불러오는데 실패했습니다.");
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    let close_detail = Callback::new(move |()| state.update(NoticesState::close_detail));

    let on_edit = Callback::new(move |()| {
        if !state.try_update(NoticesState::begin_edit).unwrap_or(false) {
            notify(toasts, ToastKind::Error, "공지를 불러오는데 실패했습니다.");
        }
    });

    let on_save = Callback::new(move |()| {
        let Some(form) = state.with_untracked(|s| if s.saving { None } else { s.edit.clone() }) else {
            return;
        };
        let fields = match form.validate() {
            Ok(fields) => fields,
            Err(e) => {
                notify(toasts, ToastKind::Warning, e.to_string());
                return;
            }
        };
        state.update(|s| s.saving = true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_notice(&form.id, fields).await {
                Ok(_) => {
                    state.update(NoticesState::mutation_succeeded);
                    notify(toasts, ToastKind::Success, "공지가 수정되었습니다!");
                }
                Err(e) => {
                    leptos::logging::error!("notice {} update failed: {e}", form.id);
                    state.update(|s| s.saving = false);
                    notify(toasts, ToastKind::Error, format!("수정 실패: {e}"));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (form, fields);
    });

    let on_delete = Callback::new(move |id: String| {
        if !confirm("정말로 이 공지를 삭제하시겠습니까?") {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_notice(&id).await {
                Ok(_) => {
                    state.update(NoticesState::mutation_succeeded);
                    notify(toasts, ToastKind::Success, "공지가 삭제되었습니다.");
                }
                Err(e) => {
                    leptos::logging::error!("notice {id} delete failed: {e}");
                    notify(toasts, ToastKind::Error, format!("삭제 실패: {e}"));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    view! {
        <div class="notices-page">
            <div class="notices-page__header">
                <h1>"📋 공지 관리"</h1>
                <div class="notices-page__filters">
                    <input
                        class="notices-page__search"
                        type="search"
                        placeholder="🔍 제목 또는 내용으로 검색..."
                        prop:value=move || state.with(|s| s.search.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.search = value);
                        }
                    />
                    <select
                        class="notices-page__system-filter"
                        prop:value=move || state.with(|s| s.system_filter.clone())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.system_filter = value);
                        }
                    >
                        <option value="">"전체 시스템"</option>
                        {move || {
                            catalog
                                .get()
                                .systems
                                .into_iter()
                                .map(|name| {
                                    let value = name.clone();
                                    view! { <option value=value>{name}</option> }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </div>
            </div>

            {move || {
                if state.with(|s| s.loading) {
                    return view! { <p class="notices-page__loading">"공지 목록을 불러오는 중..."</p> }.into_any();
                }
                let visible = state.with(NoticesState::visible);
                if visible.is_empty() {
                    return view! {
                        <div class="empty-state">
                            <div class="empty-state__icon">"📭"</div>
                            <p>"등록된 공지가 없습니다."</p>
                        </div>
                    }
                        .into_any();
                }
                view! {
                    <div class="notices-page__grid">
                        {visible
                            .into_iter()
                            .map(|notice| view! { <NoticeCard notice=notice on_open=on_open/> })
                            .collect::<Vec<_>>()}
                    </div>
                }
                    .into_any()
            }}

            {move || {
                state
                    .with(|s| s.detail.clone())
                    .map(|notice| {
                        view! {
                            <NoticeDetailModal
                                notice=notice
                                on_close=close_detail
                                on_edit=on_edit
                                on_delete=on_delete
                            />
                        }
                    })
            }}

            <Show when=move || state.with(|s| s.edit.is_some())>
                <NoticeEditModal state=state on_submit=on_save/>
            </Show>
        </div>
    }
}
