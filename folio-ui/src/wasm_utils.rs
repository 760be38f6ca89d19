//! WASM utilities for browser interop
//!
//! # Listener Cleanup Pattern
//!
//! A JavaScript callback created from a Rust `Closure` must live as long as the
//! browser may call it. Instead of `closure.forget()`, which leaks and leaves
//! the callback attached forever, each wrapper here owns its closure and
//! detaches it in `Drop`:
//!
//! ```ignore
//! // Listener is attached when WindowEventListener is created
//! let listener = WindowEventListener::new(window, "hashchange", callback);
//!
//! // Listener is removed when `listener` is dropped
//! drop(listener);
//! ```
//!
//! Views hand these wrappers to their trigger scope, so unmounting the view
//! detaches every observer and listener it created.

use tracing::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// A window event listener that removes itself when dropped.
pub struct WindowEventListener {
    window: web_sys::Window,
    event_name: &'static str,
    callback: Closure<dyn FnMut(JsValue)>,
}

impl WindowEventListener {
    /// Attaches an event listener to the window.
    ///
    /// The listener is removed when this struct is dropped.
    pub fn new(
        window: web_sys::Window,
        event_name: &'static str,
        callback: impl FnMut(JsValue) + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut(JsValue)> = Closure::wrap(Box::new(callback));

        window
            .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
            .ok();

        Self {
            window,
            event_name,
            callback,
        }
    }
}

impl Drop for WindowEventListener {
    fn drop(&mut self) {
        let _ = self.window.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>;

/// An `IntersectionObserver` watching one element. Disconnects when dropped.
pub struct ViewportObserver {
    observer: web_sys::IntersectionObserver,
    _callback: ObserverCallback,
}

impl ViewportObserver {
    /// Report whether `element` is at least `threshold` (0..=1) visible, on every crossing.
    pub fn observe(
        element: &web_sys::Element,
        threshold: f64,
        mut on_change: impl FnMut(bool) + 'static,
    ) -> Result<Self, JsValue> {
        let callback: ObserverCallback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
                let visible = entries.iter().any(|entry| {
                    entry
                        .unchecked_into::<web_sys::IntersectionObserverEntry>()
                        .is_intersecting()
                });
                on_change(visible);
            },
        )
            as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

        let options = web_sys::IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold.clamp(0.0, 1.0)));

        let observer = web_sys::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        observer.observe(element);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn disconnect(&self) {
        self.observer.disconnect();
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Smoothly scroll the window back to the top
pub fn scroll_to_top() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = web_sys::ScrollToOptions::new();
    options.set_top(0.0);
    options.set_left(0.0);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Current `location.hash`, including the leading `#` (empty when unset)
pub fn location_hash() -> Option<String> {
    web_sys::window()?.location().hash().ok()
}

/// Rewrite `location.hash` through `history.replaceState`. No `hashchange` fires
/// and no history entry is added.
pub fn replace_location_hash(hash: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let result = window
        .history()
        .and_then(|history| history.replace_state_with_url(&JsValue::NULL, "", Some(hash)));
    if let Err(e) = result {
        warn!("Failed to replace location hash {hash:?}: {e:?}");
    }
}

/// Assign `location.hash`, which fires `hashchange` when the value differs
pub fn set_location_hash(hash: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().set_hash(hash) {
        warn!("Failed to set location hash {hash:?}: {e:?}");
    }
}
