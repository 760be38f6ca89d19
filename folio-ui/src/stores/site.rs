//! Top-level site state store

use dioxus::prelude::*;
use folio_common::{ContactField, ContactForm, NavEffect, Page, SiteNav};
use tracing::info;

use crate::wasm_utils;

/// Session state for the whole site. Lives in memory only.
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct SiteState {
    /// Active page and mobile menu visibility
    pub nav: SiteNav,
    /// Contact form contents
    pub contact: ContactForm,
    /// Acknowledgment shown after the contact form is submitted
    pub acknowledgment: Option<String>,
    /// Accepted submissions this session. Keys the toast so a resubmit restarts it.
    pub submissions: u32,
}

impl SiteState {
    pub fn starting_at(page: Page) -> Self {
        Self {
            nav: SiteNav::starting_at(page),
            ..Default::default()
        }
    }

    /// Accept the contact form: clear it and replace any shown acknowledgment.
    pub fn accept_contact(&mut self) {
        let ack = self.contact.submit();
        self.submissions += 1;
        self.acknowledgment = Some(ack.message);
    }
}

/// Switch to `page`, close the menu and scroll back to the top. The URL
/// fragment follows the active page so reloads and shared links land there.
pub fn navigate(state: Store<SiteState>, page: Page) {
    let effect = state.nav().write().navigate(page);
    wasm_utils::replace_location_hash(&page.fragment());
    match effect {
        NavEffect::ScrollToTop => wasm_utils::scroll_to_top(),
    }
}

pub fn toggle_menu(state: Store<SiteState>) {
    state.nav().write().toggle_menu();
}

pub fn update_contact_field(state: Store<SiteState>, field: ContactField, value: String) {
    state.contact().write().set(field, value);
}

/// Accept the contact form locally and show the acknowledgment.
pub fn submit_contact(mut state: Store<SiteState>) {
    state.write().accept_contact();
    info!("Showing contact acknowledgment");
}

pub fn dismiss_acknowledgment(state: Store<SiteState>) {
    state.acknowledgment().set(None);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resubmitting_replaces_acknowledgment() {
        let mut state = SiteState::starting_at(Page::Contact);
        state.contact.set(ContactField::Name, "Ada".to_string());
        state.accept_contact();
        let first = state.acknowledgment.clone();

        state.contact.set(ContactField::Name, "Grace".to_string());
        state.accept_contact();

        assert_eq!(state.submissions, 2);
        assert!(state.contact.is_empty());
        assert_eq!(state.acknowledgment, first);
        assert_eq!(state.nav.active_page(), Page::Contact);
    }
}
