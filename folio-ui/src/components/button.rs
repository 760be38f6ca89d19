//! Reusable button component

use dioxus::prelude::*;

/// Chromeless button component - provides accessibility and base functionality
/// without visual styling. Used internally by Button and for special cases.
#[component]
pub fn ChromelessButton(
    #[props(default)] disabled: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] r#type: Option<&'static str>,
    #[props(default)] aria_label: Option<String>,
    #[props(default)] aria_expanded: Option<bool>,
    #[props(default)] onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: class.as_deref(),
            r#type: r#type.unwrap_or("button"),
            disabled,
            aria_label: aria_label.as_deref(),
            aria_expanded: aria_expanded.map(|open| if open { "true" } else { "false" }),
            aria_disabled: if disabled { Some("true") } else { None },
            onclick: move |e| {
                if !disabled {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Blue-to-purple gradient - for primary calls to action
    Gradient,
    /// Bordered, transparent background - for secondary actions
    Outline,
    /// Solid white - for use on gradient backgrounds
    Inverse,
}

/// Button size
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonSize {
    Medium,
    Large,
}

pub(crate) fn button_class(variant: ButtonVariant, size: ButtonSize, extra: Option<&str>) -> String {
    let base = "relative overflow-hidden rounded-lg transition-all duration-300 hover:-translate-y-0.5 active:scale-95 font-heading";

    let padding = match size {
        ButtonSize::Medium => "px-6 py-2",
        ButtonSize::Large => "px-8 py-3",
    };

    let variant_class = match variant {
        ButtonVariant::Gradient => {
            "bg-gradient-to-r from-blue-600 to-purple-600 text-white shadow-lg hover:shadow-xl"
        }
        ButtonVariant::Outline => {
            "border border-gray-300 text-gray-700 shadow-sm hover:shadow-md hover:border-blue-400"
        }
        ButtonVariant::Inverse => "bg-white text-blue-600 font-semibold shadow-lg hover:shadow-xl",
    };

    match extra {
        Some(extra) => format!("{base} {padding} {variant_class} {extra}"),
        None => format!("{base} {padding} {variant_class}"),
    }
}

/// Reusable button component with consistent styling
#[component]
pub fn Button(
    variant: ButtonVariant,
    size: ButtonSize,
    #[props(default)] disabled: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] r#type: Option<&'static str>,
    #[props(default)] onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let computed_class = button_class(variant, size, class.as_deref());

    rsx! {
        ChromelessButton {
            disabled,
            r#type,
            class: Some(computed_class),
            onclick,
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_class_includes_variant_and_size() {
        let class = button_class(ButtonVariant::Gradient, ButtonSize::Large, None);
        assert!(class.contains("px-8 py-3"));
        assert!(class.contains("from-blue-600"));
    }

    #[test]
    fn test_button_class_appends_extra() {
        let class = button_class(ButtonVariant::Outline, ButtonSize::Medium, Some("w-full"));
        assert!(class.ends_with(" w-full"));
        assert!(class.contains("border-gray-300"));
    }
}
