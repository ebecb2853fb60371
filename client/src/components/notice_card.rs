//! Card for one notice in the management grid.

use leptos::prelude::*;

use crate::net::types::Notice;
use crate::util::format::{PREVIEW_CHARS, format_date, format_date_time, preview};

/// Clickable summary card; `on_open` receives the notice id.
#[component]
pub fn NoticeCard(notice: Notice, on_open: Callback<String>) -> impl IntoView {
    let id = notice.id.clone();

    view! {
        <div class="notice-card" on:click=move |_| on_open.run(id.clone())>
            <div class="notice-card__header">
                <div class="notice-card__title">{notice.title.clone()}</div>
                <div class="notice-card__date">{format!("📅 {}", format_date(&notice.date))}</div>
            </div>
            <SystemBadges systems=notice.systems.clone()/>
            <div class="notice-card__preview">{preview(&notice.content, PREVIEW_CHARS)}</div>
            <div class="notice-card__footer">
                {format!("생성: {}", format_date_time(&notice.created_at))}
            </div>
        </div>
    }
}

/// Row of system tags.
#[component]
pub fn SystemBadges(systems: Vec<String>) -> impl IntoView {
    view! {
        <div class="system-badges">
            {systems
                .into_iter()
                .map(|s| view! { <span class="system-badge">{s}</span> })
                .collect::<Vec<_>>()}
        </div>
    }
}
