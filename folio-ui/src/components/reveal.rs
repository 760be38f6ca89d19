//! Animated wrapper that plays a [`Motion`] when its trigger fires

use crate::animation::use_reveal;
use dioxus::prelude::*;
use folio_common::Motion;

/// Wraps children in a div that starts hidden (for entrance motions) and
/// animates once the motion's trigger fires.
#[component]
pub fn Reveal(
    motion: Motion,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let reveal = use_reveal(motion.trigger);
    let style = motion.style(reveal.fired());

    rsx! {
        div {
            class: class.as_deref(),
            style: "{style}",
            onmounted: reveal.onmounted(),
            {children}
        }
    }
}

/// Prepend fixed inline style to an animation declaration
pub(crate) fn join_style(base: Option<&str>, animation: &str) -> String {
    match base {
        Some(base) if !base.is_empty() => format!("{base} {animation}").trim_end().to_string(),
        _ => animation.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_style() {
        assert_eq!(join_style(None, "opacity: 0;"), "opacity: 0;");
        assert_eq!(
            join_style(Some("width: 90%;"), "opacity: 0;"),
            "width: 90%; opacity: 0;"
        );
        assert_eq!(join_style(Some("top: 5%;"), ""), "top: 5%;");
    }
}
