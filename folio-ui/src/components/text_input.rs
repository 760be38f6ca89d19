//! Labelled contact form controls

use dioxus::prelude::*;
use folio_common::ContactField;

const FIELD_CLASS: &str = "w-full px-4 py-3 rounded-lg border border-gray-300 focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent transition-all";

/// A required, labelled input (or textarea for the message field)
#[component]
pub fn FormField(field: ContactField, value: String, on_input: EventHandler<String>) -> Element {
    let name = field.name();

    rsx! {
        div {
            label { r#for: name, class: "block text-gray-700 mb-2", "{field.label()}" }
            if field == ContactField::Message {
                textarea {
                    id: name,
                    name,
                    class: FIELD_CLASS,
                    rows: "5",
                    required: true,
                    value: "{value}",
                    oninput: move |e| on_input.call(e.value()),
                }
            } else {
                input {
                    r#type: input_type(field),
                    id: name,
                    name,
                    class: FIELD_CLASS,
                    required: true,
                    value: "{value}",
                    oninput: move |e| on_input.call(e.value()),
                }
            }
        }
    }
}

pub(crate) fn input_type(field: ContactField) -> &'static str {
    match field {
        ContactField::Email => "email",
        _ => "text",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_type() {
        assert_eq!(input_type(ContactField::Email), "email");
        assert_eq!(input_type(ContactField::Name), "text");
        assert_eq!(input_type(ContactField::Subject), "text");
    }
}
