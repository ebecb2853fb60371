//! Keep a scroll container pinned to its bottom edge.
//!
//! DESIGN
//! ======
//! A `ResizeObserver` on the container's content fires after layout has
//! settled, including late reflow from long text or images. Scrolling from
//! that callback replaces racing timers against the render pipeline.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;
#[cfg(feature = "hydrate")]
use wasm_bindgen::closure::Closure;

/// Slot whose contents are dropped when the current owner is cleaned up.
///
/// Holds browser handles that are not `Send` for exactly as long as the
/// component that created them stays mounted.
pub fn release_on_cleanup<T: 'static>() -> StoredValue<Option<T>, LocalStorage> {
    let slot = StoredValue::new_local(None);
    on_cleanup(move || {
        let _ = slot.try_update_value(Option::take);
    });
    slot
}

/// Scroll `container` so its last line is visible.
#[cfg(feature = "hydrate")]
pub fn scroll_to_bottom(container: &web_sys::Element) {
    container.set_scroll_top(container.scroll_height());
}

/// Active bottom pin; dropping it disconnects the observer.
#[cfg(feature = "hydrate")]
pub struct BottomPin {
    observer: web_sys::ResizeObserver,
    _callback: Closure<dyn FnMut()>,
}

#[cfg(feature = "hydrate")]
impl Drop for BottomPin {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Observe `content` and scroll `container` to the bottom on every size change.
///
/// The observer runs until the returned pin is dropped, so the caller must
/// hold it for as long as `container` is mounted. Returns `None` when the
/// browser has no `ResizeObserver`; the container is still scrolled once.
#[cfg(feature = "hydrate")]
pub fn pin_to_bottom(container: web_sys::Element, content: &web_sys::Element) -> Option<BottomPin> {
    scroll_to_bottom(&container);
    let target = container;
    let callback = Closure::<dyn FnMut()>::new(move || scroll_to_bottom(&target));
    match web_sys::ResizeObserver::new(callback.as_ref().unchecked_ref()) {
        Ok(observer) => {
            observer.observe(content);
            Some(BottomPin { observer, _callback: callback })
        }
        Err(e) => {
            leptos::logging::warn!(
                "resize observer unavailable: {}",
                crate::util::browser::js_error_message(&e)
            );
            None
        }
    }
}
