//! Contact acknowledgment toast

use crate::animation::{sleep_ms, use_trigger_scope};
use crate::components::icons::XIcon;
use crate::components::{ChromelessButton, Reveal};
use dioxus::prelude::*;
use folio_common::animation::presets;

/// How long the toast stays up without interaction
pub const AUTO_DISMISS_MS: u64 = 6_000;

/// Acknowledgment shown after the contact form is accepted. Dismissed by the
/// close button or after [`AUTO_DISMISS_MS`]; the timer dies with the toast.
#[component]
pub fn SuccessToast(message: String, on_dismiss: EventHandler<()>) -> Element {
    let scope = use_trigger_scope();
    use_hook(move || {
        scope.spawn(async move {
            sleep_ms(AUTO_DISMISS_MS).await;
            on_dismiss.call(());
        });
    });

    rsx! {
        Reveal {
            motion: presets::HEADER_DROP,
            class: Some("fixed bottom-6 right-4 z-50 max-w-md".to_string()),
            div {
                class: "bg-gradient-to-r from-blue-600 to-purple-600 text-white px-6 py-4 rounded-lg shadow-lg flex items-start gap-4",
                role: "status",
                p { class: "flex-1", "{message}" }
                ChromelessButton {
                    class: Some("text-white/80 hover:text-white".to_string()),
                    aria_label: Some("Close".to_string()),
                    onclick: move |_| on_dismiss.call(()),
                    XIcon { class: "w-4 h-4" }
                }
            }
        }
    }
}
