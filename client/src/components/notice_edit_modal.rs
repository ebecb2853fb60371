//! Edit dialog bound to the notices page's edit form.

use leptos::prelude::*;

use super::systems_picker::SystemsPicker;
use crate::state::notices::{EditForm, NoticesState};

/// Read one field of the open edit form, or an empty string.
fn field(state: RwSignal<NoticesState>, get: fn(&EditForm) -> &String) -> String {
    state.with(|s| s.edit.as_ref().map(|f| get(f).clone()).unwrap_or_default())
}

/// Write one field of the open edit form.
fn set_field(state: RwSignal<NoticesState>, value: String, get: fn(&mut EditForm) -> &mut String) {
    state.update(|s| {
        if let Some(form) = s.edit.as_mut() {
            *get(form) = value;
        }
    });
}

/// Edit dialog. `on_submit` validates and sends; the dialog only edits the
/// form held in `state`.
#[component]
pub fn NoticeEditModal(state: RwSignal<NoticesState>, on_submit: Callback<()>) -> impl IntoView {
    let close = move || state.update(NoticesState::close_edit);
    let saving = move || state.with(|s| s.saving);

    let selected = Signal::derive(move || state.with(|s| s.edit.as_ref().map(|f| f.systems.clone()).unwrap_or_default()));
    let on_toggle = Callback::new(move |system: String| {
        state.update(|s| {
            if let Some(form) = s.edit.as_mut() {
                form.toggle_system(&system);
            }
        });
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| close()>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <div class="dialog__header">
                    <h2>"공지 수정"</h2>
                    <button class="btn btn--icon" title="닫기" on:click=move |_| close()>
                        "✕"
                    </button>
                </div>
                <form
                    class="dialog__form"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        on_submit.run(());
                    }
                >
                    <label class="dialog__label">
                        "제목"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || field(state, |f| &f.title)
                            on:input=move |ev| set_field(state, event_target_value(&ev), |f| &mut f.title)
                        />
                    </label>
                    <label class="dialog__label">
                        "날짜"
                        <input
                            class="dialog__input"
                            type="date"
                            prop:value=move || field(state, |f| &f.date)
                            on:input=move |ev| set_field(state, event_target_value(&ev), |f| &mut f.date)
                        />
                    </label>
                    <div class="dialog__label">
                        "적용 시스템"
                        <SystemsPicker selected=selected on_toggle=on_toggle/>
                    </div>
                    <label class="dialog__label">
                        "내용"
                        <textarea
                            class="dialog__input dialog__textarea"
                            rows="14"
                            prop:value=move || field(state, |f| &f.content)
                            on:input=move |ev| set_field(state, event_target_value(&ev), |f| &mut f.content)
                        ></textarea>
                    </label>
                    <div class="dialog__actions">
                        <button type="button" class="btn" on:click=move |_| close()>
                            "취소"
                        </button>
                        <button type="submit" class="btn btn--primary" disabled=saving>
                            {move || if saving() { "저장 중..." } else { "💾 저장" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
