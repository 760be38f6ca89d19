//! Services page: every service plus the four-step process

use crate::components::{Reveal, ServiceCard};
use dioxus::prelude::*;
use folio_common::animation::presets;
use folio_common::content::{PROCESS, SERVICES};
use folio_common::Trigger;

#[component]
pub fn ServicesView() -> Element {
    rsx! {
        section { class: "container mx-auto px-6 py-16",
            Reveal {
                motion: presets::PAGE_ENTER,
                class: Some("mb-16 text-center".to_string()),
                h1 { class: "text-4xl md:text-5xl font-bold font-heading mb-6", "Services" }
                p { class: "text-lg text-gray-700 max-w-2xl mx-auto",
                    "I offer a range of services to help bring your digital ideas to life with technical excellence and creative design."
                }
            }

            div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8",
                for (index , service) in SERVICES.iter().enumerate() {
                    ServiceCard {
                        key: "{service.number}",
                        service: *service,
                        index,
                        trigger: Trigger::Mount,
                    }
                }
            }

            Reveal {
                motion: presets::PAGE_ENTER.with_delay(300),
                class: Some("mt-24".to_string()),
                h2 { class: "text-3xl font-bold font-heading text-center mb-16", "My Process" }
                div { class: "grid grid-cols-1 md:grid-cols-4 gap-8",
                    for item in PROCESS.iter() {
                        div { key: "{item.step}", class: "text-center",
                            div { class: "w-16 h-16 bg-blue-100 rounded-full flex items-center justify-center text-blue-600 font-bold text-xl mb-4 mx-auto",
                                "{item.step}"
                            }
                            h3 { class: "text-xl font-semibold font-heading mb-2", "{item.title}" }
                            p { class: "text-gray-600", "{item.description}" }
                        }
                    }
                }
            }
        }
    }
}
