//! Store types for UI state management
//!
//! `SiteState` derives `Store` for fine-grained reactivity via lensing: the
//! header subscribes to `nav`, the contact page to `contact`.

pub mod site;

pub use site::*;
