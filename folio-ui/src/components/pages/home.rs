//! Home page: hero, stats, services preview, testimonial and call to action

use crate::components::icons::ArrowDownIcon;
use crate::components::{Button, ButtonSize, ButtonVariant, Reveal, ServiceCard, StatCounter};
use crate::wasm_utils;
use dioxus::prelude::*;
use folio_common::animation::presets;
use folio_common::content::{self, STATS, TESTIMONIAL};
use folio_common::{Page, Trigger};

#[component]
pub fn HomeView(
    owner_name: String,
    owner_title: String,
    tagline: String,
    /// Portrait image URL
    portrait: String,
    on_navigate: EventHandler<Page>,
) -> Element {
    rsx! {
        HeroSection {
            owner_name,
            owner_title,
            tagline,
            portrait,
            on_navigate,
        }
        StatsSection {}
        ServicesPreview { on_navigate }
        TestimonialSection {}
        CallToAction { on_navigate }
    }
}

#[component]
fn HeroSection(
    owner_name: String,
    owner_title: String,
    tagline: String,
    portrait: String,
    on_navigate: EventHandler<Page>,
) -> Element {
    rsx! {
        section { class: "relative w-full h-screen flex items-center justify-center overflow-hidden",
            // Oversized name behind the portrait
            Reveal {
                motion: presets::HERO_TITLE,
                class: Some("absolute w-full text-center z-0".to_string()),
                h1 {
                    class: "text-7xl md:text-9xl font-bold font-heading uppercase tracking-tight opacity-10 bg-gradient-to-r from-gray-900 to-blue-900 bg-clip-text text-transparent",
                    style: "line-height: 0.9;",
                    "{owner_name}"
                }
            }

            div { class: "relative z-10 flex flex-col items-center",
                Reveal { motion: presets::HERO_AVATAR,
                    div { class: "w-64 h-64 md:w-80 md:h-80 rounded-full overflow-hidden border-8 border-white shadow-2xl relative",
                        img {
                            src: "{portrait}",
                            alt: "{owner_name}",
                            class: "w-full h-full object-cover",
                        }
                        div { class: "absolute inset-0 bg-gradient-to-br from-blue-400/20 to-purple-500/20 rounded-full" }
                    }
                }

                Reveal {
                    motion: presets::HERO_TEXT,
                    class: Some("mt-8 text-center".to_string()),
                    h2 { class: "text-3xl md:text-4xl font-bold font-heading text-gray-900 mb-4",
                        "{owner_title}"
                    }
                    p { class: "text-lg text-gray-700 max-w-2xl mx-auto", "{tagline}" }

                    Reveal {
                        motion: presets::HERO_ACTIONS,
                        class: Some("flex justify-center gap-4 mt-8".to_string()),
                        Button {
                            variant: ButtonVariant::Gradient,
                            size: ButtonSize::Large,
                            onclick: move |_| on_navigate.call(Page::Work),
                            "View Work"
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            size: ButtonSize::Large,
                            onclick: move |_| on_navigate.call(Page::Contact),
                            "Contact Me"
                        }
                    }
                }
            }

            Reveal {
                motion: presets::FADE.with_trigger(Trigger::Mount).with_delay(1_500),
                class: Some("absolute bottom-10 left-1/2 -translate-x-1/2".to_string()),
                div { class: "flex flex-col items-center",
                    span { class: "text-gray-600 text-sm mb-2", "Scroll down" }
                    div { style: "{presets::SCROLL_HINT.style(true)}",
                        ArrowDownIcon { class: "w-6 h-6 text-gray-600" }
                    }
                }
            }
        }
    }
}

#[component]
fn StatsSection() -> Element {
    rsx! {
        Reveal {
            motion: presets::FADE,
            class: Some("bg-white py-16 border-y border-gray-100 relative".to_string()),
            div { class: "absolute -top-20 right-10 w-40 h-40 bg-blue-100 rounded-full filter blur-3xl opacity-30" }
            div { class: "absolute -bottom-20 left-10 w-40 h-40 bg-purple-100 rounded-full filter blur-3xl opacity-30" }
            div { class: "container mx-auto px-6 relative z-10",
                div { class: "grid grid-cols-2 md:grid-cols-4 gap-8",
                    for (index , stat) in STATS.iter().enumerate() {
                        StatCounter { key: "{stat.label}", stat: *stat, index }
                    }
                }
            }
        }
    }
}

#[component]
fn ServicesPreview(on_navigate: EventHandler<Page>) -> Element {
    rsx! {
        section { class: "container mx-auto px-6 py-24 relative",
            div { class: "absolute -top-20 -left-20 w-60 h-60 bg-yellow-100 rounded-full filter blur-3xl opacity-20" }
            div { class: "absolute -bottom-20 -right-20 w-60 h-60 bg-pink-100 rounded-full filter blur-3xl opacity-20" }

            Reveal {
                motion: presets::FADE_IN,
                class: Some("mb-16 relative z-10".to_string()),
                span { class: "text-blue-500 text-sm mb-2 block", "// SERVICES" }
                h2 { class: "text-4xl md:text-5xl font-bold font-heading mb-6 max-w-2xl",
                    "Development & Design Solutions"
                }
                p { class: "text-lg text-gray-700 max-w-2xl",
                    "Creating digital experiences that combine technical excellence with beautiful design, delivering solutions that users love."
                }
            }

            div { class: "grid grid-cols-1 md:grid-cols-3 gap-8 relative z-10",
                for (index , service) in content::service_preview().iter().enumerate() {
                    ServiceCard {
                        key: "{service.number}",
                        service: *service,
                        index,
                        trigger: Trigger::in_view(0.3),
                    }
                }
            }

            Reveal {
                motion: presets::FADE_IN.with_delay(300),
                class: Some("text-center mt-12".to_string()),
                Button {
                    variant: ButtonVariant::Gradient,
                    size: ButtonSize::Large,
                    onclick: move |_| on_navigate.call(Page::Services),
                    "View All Services"
                }
            }
        }
    }
}

#[component]
fn TestimonialSection() -> Element {
    rsx! {
        Reveal {
            motion: presets::FADE,
            class: Some("bg-gray-50 py-24 relative overflow-hidden".to_string()),
            div { class: "absolute top-0 left-0 w-full h-full -z-10",
                div { class: "absolute top-1/4 left-1/4 w-80 h-80 bg-blue-100 rounded-full filter blur-3xl opacity-20" }
                div { class: "absolute bottom-1/4 right-1/4 w-80 h-80 bg-purple-100 rounded-full filter blur-3xl opacity-20" }
            }
            div { class: "container mx-auto px-6",
                div { class: "max-w-4xl mx-auto text-center",
                    Reveal {
                        motion: presets::SCALE_IN,
                        class: Some("text-5xl text-gray-300 mb-8".to_string()),
                        "\""
                    }
                    Reveal { motion: presets::FADE_IN.with_delay(200),
                        p { class: "text-2xl font-light text-gray-800 mb-8 leading-relaxed",
                            "{TESTIMONIAL.quote}"
                        }
                    }
                    Reveal { motion: presets::FADE.with_delay(400),
                        p { class: "font-semibold font-heading text-gray-900", "{TESTIMONIAL.author}" }
                        p { class: "text-gray-600 text-sm", "{TESTIMONIAL.role}" }
                    }
                }
            }
        }
    }
}

/// Follow the `#contact` link. When the hash already points there no
/// `hashchange` fires, so navigate directly.
fn start_project(on_navigate: EventHandler<Page>) {
    let target = Page::Contact.fragment();
    if wasm_utils::location_hash().as_deref() == Some(target.as_str()) {
        on_navigate.call(Page::Contact);
    } else {
        wasm_utils::set_location_hash(&target);
    }
}

#[component]
fn CallToAction(on_navigate: EventHandler<Page>) -> Element {
    rsx! {
        Reveal {
            motion: presets::FADE,
            class: Some("py-24 bg-gradient-to-r from-blue-600 to-purple-600 text-white relative overflow-hidden".to_string()),
            div { class: "absolute top-0 left-0 w-full h-full pointer-events-none",
                div { class: "absolute -top-20 -left-20 w-60 h-60 bg-white rounded-full opacity-10" }
                div { class: "absolute -bottom-20 -right-20 w-60 h-60 bg-white rounded-full opacity-10" }
            }
            div { class: "container mx-auto px-6 text-center",
                Reveal { motion: presets::FADE_IN,
                    h2 { class: "text-4xl md:text-5xl font-bold font-heading mb-6",
                        "Ready to bring your vision to life?"
                    }
                }
                Reveal { motion: presets::FADE_IN.with_delay(200),
                    p { class: "text-xl opacity-90 max-w-2xl mx-auto mb-10",
                        "Let's collaborate to create something extraordinary that resonates with your audience."
                    }
                }
                Reveal { motion: presets::FADE_IN.with_delay(400),
                    Button {
                        variant: ButtonVariant::Inverse,
                        size: ButtonSize::Large,
                        onclick: move |_| start_project(on_navigate),
                        "Start a Project"
                    }
                }
            }
        }
    }
}
