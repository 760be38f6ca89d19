//! folio-common - pure site logic shared by the UI crates
//!
//! No I/O and no UI framework: page selection, the contact form, project
//! filtering, content tables, animation specs and site configuration.

pub mod animation;
pub mod config;
pub mod contact_form;
pub mod content;
mod navigation;
mod page;
pub mod projects;
pub mod triggers;

pub use animation::{CountUp, Easing, Motion, Repeat, Trigger};
pub use config::{ConfigError, SiteConfig, SocialLink};
pub use contact_form::{Acknowledgment, ContactField, ContactForm, UnknownField};
pub use navigation::{NavEffect, SiteNav};
pub use page::{Page, UnknownPage};
pub use projects::{CategoryFilter, ProjectCategory, UnknownCategory};
pub use triggers::{Cancel, TriggerSet};
