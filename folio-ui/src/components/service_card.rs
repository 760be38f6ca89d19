//! Service card shared by the home preview and the services page

use crate::components::Reveal;
use dioxus::prelude::*;
use folio_common::animation::presets;
use folio_common::content::Service;
use folio_common::Trigger;

#[component]
pub fn ServiceCard(service: Service, index: usize, trigger: Trigger) -> Element {
    let motion = presets::FADE_IN.with_trigger(trigger).staggered(index, 100);

    rsx! {
        Reveal {
            motion,
            class: Some("bg-white p-8 rounded-2xl shadow-sm hover:shadow-lg transition-all duration-300 border border-gray-100 hover:border-blue-100 relative overflow-hidden group hover:-translate-y-2".to_string()),
            div { class: "absolute -top-4 -right-4 w-20 h-20 bg-blue-100 rounded-full opacity-0 group-hover:opacity-100 transition-opacity duration-300" }
            div { class: "flex justify-between items-start mb-6 relative z-10",
                h3 { class: "text-xl font-semibold font-heading text-gray-800 group-hover:text-blue-600 transition-colors",
                    "{service.title}"
                }
                span { class: "text-gray-400 text-sm bg-gray-100 px-3 py-1 rounded-full group-hover:bg-blue-100 group-hover:text-blue-600 transition-colors",
                    "{service.number}"
                }
            }
            p { class: "text-gray-600 mb-6 relative z-10", "{service.description}" }
            div { class: "text-blue-500 font-medium flex items-center gap-2 relative z-10 transition-transform hover:translate-x-1",
                span { "Learn more" }
                span { "→" }
            }
            div { class: "absolute bottom-0 left-0 w-0 h-1 bg-gradient-to-r from-blue-500 to-purple-500 transition-all duration-300 group-hover:w-full" }
        }
    }
}
