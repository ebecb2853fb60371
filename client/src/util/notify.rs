//! Raise toasts from page handlers.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

/// Show a toast and schedule its dismissal.
pub fn notify(toasts: RwSignal<ToastState>, kind: ToastKind, message: impl Into<String>) {
    let mut id = 0;
    toasts.update(|t| id = t.show(kind, message));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(crate::state::toast::TOAST_DURATION_MS).await;
        toasts.update(|t| t.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

/// Copy text and report the outcome as a toast.
pub fn copy_with_toast(toasts: RwSignal<ToastState>, text: String) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::util::browser::copy_text(&text).await {
            Ok(()) => notify(toasts, ToastKind::Success, "클립보드에 복사되었습니다!"),
            Err(e) => notify(toasts, ToastKind::Error, format!("복사 실패: {e}")),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (toasts, text);
}

/// Download text and report the outcome as a toast.
pub fn download_with_toast(toasts: RwSignal<ToastState>, filename: &str, text: &str) {
    match crate::util::browser::download_text(filename, text) {
        Ok(()) => notify(toasts, ToastKind::Success, "파일이 다운로드되었습니다!"),
        Err(e) => notify(toasts, ToastKind::Error, format!("다운로드 실패: {e}")),
    }
}
