use std::str::FromStr;
use thiserror::Error;
use tracing::info;

/// Text shown after a message is "sent". Nothing leaves the browser.
pub const ACKNOWLEDGMENT: &str = "Thank you for your message! I will get back to you soon.";

/// Fields of the contact form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown contact form field: {0:?}")]
pub struct UnknownField(pub String);

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    /// The `name` attribute of the form control
    pub fn name(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Subject => "Subject",
            ContactField::Message => "Message",
        }
    }
}

impl FromStr for ContactField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContactField::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Local acknowledgment produced by a submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgment {
    pub message: String,
}

/// Contents of the contact form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    /// Store the raw input value. No trimming or validation.
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Required fields that are still empty
    pub fn missing_fields(&self) -> Vec<ContactField> {
        ContactField::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        ContactField::ALL
            .into_iter()
            .all(|field| self.get(field).is_empty())
    }

    /// Accept the message locally and clear every field.
    pub fn submit(&mut self) -> Acknowledgment {
        info!(
            "Contact form submitted ({} chars of message)",
            self.message.chars().count()
        );
        *self = ContactForm::default();
        Acknowledgment {
            message: ACKNOWLEDGMENT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.set(ContactField::Name, "Ada");
        form.set(ContactField::Email, "ada@example.com");
        form.set(ContactField::Subject, "Hello");
        form.set(ContactField::Message, "Let's build something.");
        form
    }

    #[test]
    fn test_starts_empty() {
        let form = ContactForm::default();
        assert!(form.is_empty());
        assert_eq!(form.missing_fields(), ContactField::ALL.to_vec());
    }

    #[test]
    fn test_set_then_get_each_field() {
        let mut form = ContactForm::default();
        for (i, field) in ContactField::ALL.into_iter().enumerate() {
            let value = format!("value {i}");
            form.set(field, value.clone());
            assert_eq!(form.get(field), value);
        }
    }

    #[test]
    fn test_set_keeps_raw_value() {
        let mut form = ContactForm::default();
        form.set(ContactField::Name, "  spaced  ");
        assert_eq!(form.get(ContactField::Name), "  spaced  ");
        form.set(ContactField::Name, "");
        assert_eq!(form.get(ContactField::Name), "");
    }

    #[test]
    fn test_set_only_touches_one_field() {
        let mut form = filled();
        form.set(ContactField::Subject, "Other");
        assert_eq!(form.name, "Ada");
        assert_eq!(form.subject, "Other");
        assert_eq!(form.message, "Let's build something.");
    }

    #[test]
    fn test_submit_clears_all_fields() {
        let mut form = filled();
        let ack = form.submit();
        assert_eq!(ack.message, ACKNOWLEDGMENT);
        for field in ContactField::ALL {
            assert_eq!(form.get(field), "");
        }
    }

    #[test]
    fn test_submit_empty_form_still_acknowledges() {
        let mut form = ContactForm::default();
        assert_eq!(form.submit().message, ACKNOWLEDGMENT);
        assert!(form.is_empty());
    }

    #[test]
    fn test_missing_fields() {
        let mut form = filled();
        form.set(ContactField::Email, "");
        assert_eq!(form.missing_fields(), vec![ContactField::Email]);
    }

    #[test]
    fn test_field_names_parse() {
        for field in ContactField::ALL {
            assert_eq!(field.name().parse::<ContactField>(), Ok(field));
        }
        assert_eq!(
            "phone".parse::<ContactField>(),
            Err(UnknownField("phone".to_string()))
        );
    }
}
