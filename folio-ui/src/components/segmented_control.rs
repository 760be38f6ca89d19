//! Segmented control: a row of pill buttons where exactly one is selected

use crate::components::ChromelessButton;
use dioxus::prelude::*;
use folio_common::CategoryFilter;

pub(crate) fn segment_class(selected: bool) -> &'static str {
    if selected {
        "px-4 py-2 rounded-full transition-colors bg-blue-600 text-white"
    } else {
        "px-4 py-2 rounded-full transition-colors bg-gray-100 text-gray-700 hover:bg-gray-200"
    }
}

/// Project category filter buttons; exactly one is selected
#[component]
pub fn CategoryFilterControl(
    selected: CategoryFilter,
    on_select: EventHandler<CategoryFilter>,
) -> Element {
    rsx! {
        div { class: "flex flex-wrap justify-center gap-4 mb-12",
            for filter in CategoryFilter::OPTIONS {
                ChromelessButton {
                    key: "{filter.id()}",
                    class: Some(segment_class(filter == selected).to_string()),
                    aria_label: Some(format!("Show {}", filter.label())),
                    onclick: move |_| on_select.call(filter),
                    "{filter.label()}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_class() {
        assert!(segment_class(true).contains("bg-blue-600"));
        assert!(segment_class(false).contains("bg-gray-100"));
    }
}
