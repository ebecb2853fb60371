//! Conversational drafting page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the page-scoped `ChatState`. Each submit runs one `begin_turn` /
//! `finish_turn` pair around a single `POST /api/chat`; the transcript
//! component handles scrolling and the preview panel shows any draft the
//! backend produced.

use leptos::prelude::*;

use crate::components::chat_transcript::ChatTranscript;
use crate::components::notice_preview::NoticePreview;
use crate::state::chat::{ChatState, new_session_id, preview_memo};
#[cfg(feature = "hydrate")]
use crate::state::chat::TurnOutcome;
#[cfg(feature = "hydrate")]
use crate::state::toast::{ToastKind, ToastState};
use crate::util::browser::{clock_now, confirm};
#[cfg(feature = "hydrate")]
use crate::util::notify::notify;

/// Chat page with transcript, input row, and draft preview.
#[component]
pub fn ChatPage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let toasts = expect_context::<RwSignal<ToastState>>();
    let chat = RwSignal::new(ChatState::new(new_session_id()));
    let input = RwSignal::new(String::new());
    let input_ref = NodeRef::<leptos::html::Textarea>::new();

    let send = move || {
        let Some(message) = chat
            .try_update(|c| c.begin_turn(&input.get_untracked(), clock_now()))
            .flatten()
        else {
            return;
        };
        input.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = input_ref.get_untracked() {
                crate::util::browser::reset_height(&el);
            }
            let session_id = chat.with_untracked(|c| c.session_id.clone());
            leptos::task::spawn_local(async move {
                let result = crate::net::api::send_chat(&message, &session_id).await;
                if let Err(e) = &result {
                    leptos::logging::error!("chat turn failed: {e}");
                }
                match chat.try_update(|c| c.finish_turn(result, clock_now())) {
                    Some(TurnOutcome::NoticeGenerated) => {
                        notify(toasts, ToastKind::Success, "✅ 공지가 생성되어 저장되었습니다!");
                    }
                    Some(TurnOutcome::Failed(msg)) => notify(toasts, ToastKind::Error, format!("오류: {msg}")),
                    Some(TurnOutcome::Replied) | None => {}
                }
                if let Some(el) = input_ref.get_untracked() {
                    let _ = el.focus();
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = message;
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        send();
    };

    // Enter sends, Shift+Enter breaks the line. Ignore Enter while an IME
    // composition (Hangul) is still open.
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() && !ev.is_composing() {
            ev.prevent_default();
            send();
        }
    };

    let on_input = move |ev: leptos::ev::Event| {
        input.set(event_target_value(&ev));
        #[cfg(feature = "hydrate")]
        if let Some(el) = input_ref.get_untracked() {
            crate::util::browser::autosize(&el);
        }
    };

    let on_clear = move |_| {
        if !confirm("대화 내용을 모두 삭제하시겠습니까?") {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let session_id = chat.with_untracked(|c| c.session_id.clone());
            leptos::task::spawn_local(async move {
                match crate::net::api::clear_chat_session(&session_id).await {
                    Ok(()) => {
                        chat.update(ChatState::reset);
                        notify(toasts, ToastKind::Info, "대화가 초기화되었습니다.");
                    }
                    Err(e) => {
                        leptos::logging::error!("chat reset failed: {e}");
                        notify(toasts, ToastKind::Error, format!("초기화 실패: {e}"));
                    }
                }
            });
        }
    };

    let sending = move || chat.with(|c| c.sending);
    let close_preview = Callback::new(move |()| chat.update(ChatState::close_preview));
    let preview = preview_memo(chat);

    view! {
        <div class="chat-page">
            <section class="chat-page__main">
                <div class="chat-page__header">
                    <div>
                        <h1>"💬 AI 공지 작성 도우미"</h1>
                        <p class="chat-page__subtitle">"대화로 전산 공지문을 작성하세요"</p>
                    </div>
                    <button class="btn" on:click=on_clear>
                        "🗑️ 대화 초기화"
                    </button>
                </div>

                <ChatTranscript chat=chat/>

                <form class="chat-page__input-row" on:submit=on_submit>
                    <textarea
                        class="chat-page__input"
                        rows="1"
                        placeholder="메시지를 입력하세요... (Shift+Enter로 줄바꿈)"
                        node_ref=input_ref
                        prop:value=move || input.get()
                        on:input=on_input
                        on:keydown=on_keydown
                    ></textarea>
                    <button type="submit" class="btn btn--primary chat-page__send" disabled=sending>
                        {move || if sending() { "전송 중..." } else { "보내기" }}
                    </button>
                </form>
            </section>

            {move || {
                preview.get().map(|draft| view! { <NoticePreview draft=draft on_close=close_preview/> })
            }}
        </div>
    }
}
