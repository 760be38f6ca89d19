//! Site layout view component
//!
//! Provides the overall page structure with slots for the background scene,
//! header, main content, footer and extra elements.

use dioxus::prelude::*;

/// Site layout view (pure, props-based)
#[component]
pub fn SiteLayoutView(
    /// Main content (the active page)
    children: Element,
    /// Fixed decorative layer behind everything
    #[props(default)]
    background: Option<Element>,
    #[props(default)] header: Option<Element>,
    #[props(default)] footer: Option<Element>,
    /// Optional extra elements (toasts, etc.)
    #[props(default)]
    extra: Option<Element>,
) -> Element {
    rsx! {
        div { class: "min-h-screen bg-gradient-to-br from-white to-blue-50 text-gray-900 overflow-hidden relative font-body",
            if let Some(bg) = background {
                {bg}
            }
            if let Some(h) = header {
                {h}
            }
            main { {children} }
            if let Some(f) = footer {
                {f}
            }
            if let Some(ex) = extra {
                {ex}
            }
        }
    }
}
