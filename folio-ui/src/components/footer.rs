//! Site footer view component

use crate::components::Reveal;
use chrono::Datelike;
use dioxus::prelude::*;
use folio_common::animation::presets;
use folio_common::SocialLink;

/// Copyright line for `year`
pub(crate) fn copyright(owner_name: &str, year: i32) -> String {
    format!("© {year} {owner_name}")
}

/// Footer shown under every page except contact
#[component]
pub fn SiteFooterView(
    owner_name: String,
    owner_title: String,
    social_links: Vec<SocialLink>,
) -> Element {
    let year = chrono::Local::now().year();
    let copyright = copyright(&owner_name, year);

    rsx! {
        Reveal { motion: presets::FADE,
            footer { class: "bg-white py-16 border-t border-gray-100 relative",
                div { class: "container mx-auto px-6",
                    div { class: "flex flex-col md:flex-row justify-between items-center gap-8",
                        div {
                            h3 { class: "text-2xl font-bold font-heading bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent mb-2",
                                "{owner_name}"
                            }
                            p { class: "text-gray-600", "{owner_title}" }
                        }
                        div { class: "flex space-x-6",
                            for link in social_links.iter() {
                                a {
                                    key: "{link.label}",
                                    href: "{link.url}",
                                    class: "text-gray-600 hover:text-blue-600 transition-all hover:-translate-y-1",
                                    onclick: {
                                        let placeholder = link.is_placeholder();
                                        move |evt: MouseEvent| {
                                            if placeholder {
                                                evt.prevent_default();
                                            }
                                        }
                                    },
                                    "{link.label}"
                                }
                            }
                        }
                        div { class: "text-center md:text-right",
                            p { class: "text-gray-600", "{copyright}" }
                            p { class: "text-gray-500 text-sm", "All rights reserved" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright() {
        assert_eq!(copyright("Varad Lokare", 2026), "© 2026 Varad Lokare");
    }
}
