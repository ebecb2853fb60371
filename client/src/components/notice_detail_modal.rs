//! Read-only detail dialog for a single notice.

use leptos::prelude::*;

use super::notice_card::SystemBadges;
use crate::net::types::Notice;
use crate::state::toast::ToastState;
use crate::util::format::{format_date, format_date_time, notice_filename};
use crate::util::notify::{copy_with_toast, download_with_toast};

/// Detail dialog with copy, download, edit and delete actions.
///
/// Clicking the backdrop closes it; clicks inside the dialog do not bubble.
#[component]
pub fn NoticeDetailModal(
    notice: Notice,
    on_close: Callback<()>,
    on_edit: Callback<()>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let full_text = notice.full_text();
    let filename = notice_filename(&notice.title);
    let copy_text = full_text.clone();
    let id = notice.id.clone();

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <div class="dialog__header">
                    <h2>{notice.title.clone()}</h2>
                    <button class="btn btn--icon" title="닫기" on:click=move |_| on_close.run(())>
                        "✕"
                    </button>
                </div>
                <div class="notice-detail__meta">
                    <span>{format!("📅 {}", format_date(&notice.date))}</span>
                    <SystemBadges systems=notice.systems.clone()/>
                </div>
                <div class="notice-detail__content">{notice.content.clone()}</div>
                <div class="notice-detail__stamps">
                    <span>{format!("생성: {}", format_date_time(&notice.created_at))}</span>
                    <span>{format!("수정: {}", format_date_time(&notice.updated_at))}</span>
                </div>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| copy_with_toast(toasts, copy_text.clone())>
                        "📋 복사"
                    </button>
                    <button class="btn" on:click=move |_| download_with_toast(toasts, &filename, &full_text)>
                        "💾 다운로드"
                    </button>
                    <button class="btn" on:click=move |_| on_edit.run(())>
                        "✏️ 수정"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| on_delete.run(id.clone())>
                        "🗑️ 삭제"
                    </button>
                </div>
            </div>
        </div>
    }
}
