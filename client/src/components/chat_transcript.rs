//! Scrolling chat transcript with avatars and timestamps.

use leptos::prelude::*;

use crate::state::chat::ChatState;
use crate::util::format::text_to_html;

/// Message list for the chat page.
///
/// One effect reacts to every append; on first run it installs the resize
/// observer that keeps the list pinned after late reflow, afterwards it
/// scrolls directly. The observer is disconnected when the transcript
/// unmounts.
#[component]
pub fn ChatTranscript(chat: RwSignal<ChatState>) -> impl IntoView {
    let container_ref = NodeRef::<leptos::html::Div>::new();
    let content_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        let pin = crate::util::scroll::release_on_cleanup::<crate::util::scroll::BottomPin>();
        let pinned = StoredValue::new(false);
        Effect::new(move || {
            let _ = chat.with(|c| c.messages.len());
            let (Some(container), Some(content)) = (container_ref.get(), content_ref.get()) else {
                return;
            };
            if pinned.get_value() {
                crate::util::scroll::scroll_to_bottom(&container);
            } else {
                pinned.set_value(true);
                pin.set_value(crate::util::scroll::pin_to_bottom(container.into(), &content));
            }
        });
    }

    view! {
        <div class="chat-transcript" node_ref=container_ref>
            <div class="chat-transcript__content" node_ref=content_ref>
                {move || {
                    chat.get()
                        .messages
                        .into_iter()
                        .map(|msg| {
                            view! {
                                <div class=format!("message {}", msg.role.class())>
                                    <div class="message__avatar">{msg.role.avatar()}</div>
                                    <div class="message__body">
                                        <div class="message__text" inner_html=text_to_html(&msg.text)></div>
                                        <div class="message__time">{msg.timestamp}</div>
                                    </div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                <Show when=move || chat.with(|c| c.sending)>
                    <div class="message message--assistant message--pending">
                        <div class="message__avatar">"🤖"</div>
                        <div class="message__body">
                            <div class="typing-dots">
                                <span></span>
                                <span></span>
                                <span></span>
                            </div>
                        </div>
                    </div>
                </Show>
            </div>
        </div>
    }
}
