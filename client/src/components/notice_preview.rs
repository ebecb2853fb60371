//! Side panel showing the notice drafted by the last chat turn.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::NoticeDraft;
use crate::state::toast::ToastState;
use crate::util::format::notice_filename;
use crate::util::notify::{copy_with_toast, download_with_toast};

/// Preview of a generated draft with copy, download and close actions.
#[component]
pub fn NoticePreview(draft: NoticeDraft, on_close: Callback<()>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let text = draft.full_text();
    let filename = notice_filename(&draft.title);
    let copy_text = text.clone();
    let download_text = text.clone();

    view! {
        <aside class="notice-preview">
            <div class="notice-preview__header">
                <h3>"📄 생성된 공지"</h3>
                <button class="btn btn--icon" title="닫기" on:click=move |_| on_close.run(())>
                    "✕"
                </button>
            </div>
            <div class="notice-preview__content">{text}</div>
            <div class="notice-preview__actions">
                <button class="btn" on:click=move |_| copy_with_toast(toasts, copy_text.clone())>
                    "📋 복사"
                </button>
                <button class="btn" on:click=move |_| download_with_toast(toasts, &filename, &download_text)>
                    "💾 다운로드"
                </button>
                <A href="/notices" attr:class="btn btn--primary">
                    "📋 전체 공지 보기"
                </A>
            </div>
        </aside>
    }
}
