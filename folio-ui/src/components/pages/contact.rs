//! Contact page: message form and contact details

use crate::components::icons::{MailIcon, MapPinIcon, PhoneIcon};
use crate::components::{Button, ButtonSize, ButtonVariant, FormField, Reveal};
use dioxus::prelude::*;
use folio_common::animation::presets;
use folio_common::{ContactField, ContactForm, SocialLink};

/// Contact page view (pure, props-based)
///
/// The form is controlled: every keystroke goes through `on_field_input` and
/// comes back in `form`. Submitting never leaves the page.
#[component]
pub fn ContactView(
    email: String,
    phone: String,
    location: String,
    social_links: Vec<SocialLink>,
    form: ContactForm,
    on_field_input: EventHandler<(ContactField, String)>,
    on_submit: EventHandler<()>,
) -> Element {
    let [name, email_field, subject, message] = ContactField::ALL;

    rsx! {
        section { class: "container mx-auto px-6 py-16",
            Reveal {
                motion: presets::PAGE_ENTER,
                class: Some("mb-16 text-center".to_string()),
                h1 { class: "text-4xl md:text-5xl font-bold font-heading mb-6", "Get In Touch" }
                p { class: "text-lg text-gray-700 max-w-2xl mx-auto",
                    "Have a project in mind or want to discuss potential collaboration? I'd love to hear from you."
                }
            }

            div { class: "grid grid-cols-1 lg:grid-cols-2 gap-16",
                Reveal {
                    motion: presets::PAGE_ENTER.with_delay(100),
                    class: Some("bg-white p-8 rounded-2xl shadow-sm border border-gray-100".to_string()),
                    h2 { class: "text-2xl font-bold font-heading mb-6", "Send a Message" }
                    form {
                        class: "space-y-6",
                        onsubmit: move |evt: FormEvent| {
                            evt.prevent_default();
                            on_submit.call(());
                        },
                        div { class: "grid grid-cols-1 md:grid-cols-2 gap-6",
                            ContactInput { field: name, form: form.clone(), on_field_input }
                            ContactInput { field: email_field, form: form.clone(), on_field_input }
                        }
                        ContactInput { field: subject, form: form.clone(), on_field_input }
                        ContactInput { field: message, form: form.clone(), on_field_input }
                        Button {
                            variant: ButtonVariant::Gradient,
                            size: ButtonSize::Large,
                            r#type: Some("submit"),
                            class: Some("w-full font-semibold".to_string()),
                            "Send Message"
                        }
                    }
                }

                Reveal { motion: presets::PAGE_ENTER.with_delay(200),
                    h2 { class: "text-2xl font-bold font-heading mb-6", "Contact Information" }
                    div { class: "space-y-6",
                        ContactDetail { title: "Email", value: email,
                            MailIcon {}
                        }
                        ContactDetail { title: "Phone", value: phone,
                            PhoneIcon {}
                        }
                        ContactDetail { title: "Location", value: location,
                            MapPinIcon {}
                        }
                    }
                    div { class: "mt-12",
                        h3 { class: "font-semibold font-heading text-lg mb-4", "Connect With Me" }
                        div { class: "flex space-x-4",
                            for link in social_links.iter() {
                                a {
                                    key: "{link.label}",
                                    href: "{link.url}",
                                    title: "{link.label}",
                                    onclick: {
                                        let placeholder = link.is_placeholder();
                                        move |evt: MouseEvent| {
                                            if placeholder {
                                                evt.prevent_default();
                                            }
                                        }
                                    },
                                    class: "w-12 h-12 bg-gray-100 rounded-lg flex items-center justify-center text-gray-600 hover:bg-blue-100 hover:text-blue-600 transition-all hover:-translate-y-1 active:scale-95",
                                    "{link.initial()}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ContactInput(
    field: ContactField,
    form: ContactForm,
    on_field_input: EventHandler<(ContactField, String)>,
) -> Element {
    rsx! {
        FormField {
            field,
            value: form.get(field).to_string(),
            on_input: move |value: String| on_field_input.call((field, value)),
        }
    }
}

#[component]
fn ContactDetail(title: &'static str, value: String, children: Element) -> Element {
    rsx! {
        div { class: "flex items-start",
            div { class: "w-12 h-12 bg-blue-100 rounded-lg flex items-center justify-center text-blue-600 mr-4",
                {children}
            }
            div {
                h3 { class: "font-semibold font-heading text-lg", "{title}" }
                p { class: "text-gray-600", "{value}" }
            }
        }
    }
}
