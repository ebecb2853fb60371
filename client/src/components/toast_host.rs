//! Fixed-position slot for the single visible toast.

use leptos::prelude::*;

use crate::state::toast::ToastState;

/// Renders the current toast, if any. Clicking it dismisses early.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host" aria-live="polite">
            {move || {
                toasts
                    .get()
                    .current
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div
                                class=format!("toast {}", toast.kind.class())
                                role="status"
                                on:click=move |_| toasts.update(|t| t.dismiss(id))
                            >
                                {toast.message}
                            </div>
                        }
                    })
            }}
        </div>
    }
}
