//! Root component: owns the site store and wires it into the views

use dioxus::prelude::*;
use folio_common::{ContactField, Page, SiteConfig};
use folio_ui::animation::{use_trigger_scope, TriggerHandle};
use folio_ui::stores::{
    dismiss_acknowledgment, navigate, submit_contact, toggle_menu, update_contact_field,
    SiteState, SiteStateStoreExt,
};
use folio_ui::wasm_utils::{self, WindowEventListener};
use folio_ui::{
    nav_items, BackgroundScene, PageView, SiteFooterView, SiteHeaderView, SiteLayoutView,
    SuccessToast,
};
use tracing::{info, warn};

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");
const PORTRAIT: Asset = asset!("/assets/portrait.svg");
const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";
const FONTS_CSS: &str = "https://fonts.googleapis.com/css2?family=Open+Sans:wght@300;400;600&family=Poppins:wght@400;600;700&display=swap";

/// Page for a URL fragment; unknown fragments land on the home page
pub(crate) fn page_for_fragment(fragment: &str) -> Page {
    match Page::from_fragment(fragment) {
        Ok(page) => page,
        Err(e) => {
            warn!("{e}, showing home");
            Page::Home
        }
    }
}

/// Page to show after a `hashchange`. An emptied fragment comes from a
/// placeholder link, not navigation, so the active page stays.
pub(crate) fn page_for_hashchange(fragment: &str) -> Option<Page> {
    match fragment.trim().trim_start_matches('#') {
        "" => None,
        _ => Some(page_for_fragment(fragment)),
    }
}

fn page_from_location() -> Page {
    wasm_utils::location_hash()
        .map(|hash| page_for_fragment(&hash))
        .unwrap_or_default()
}

#[component]
pub fn App() -> Element {
    let config: SiteConfig = use_context();
    let state = use_store(|| {
        let page = page_from_location();
        info!("Session starts on {page}");
        SiteState::starting_at(page)
    });

    // Deep links for the lifetime of the site
    let scope = use_trigger_scope();
    use_hook(move || {
        let Some(window) = web_sys::window() else {
            return;
        };
        let listener = WindowEventListener::new(window, "hashchange", move |_| {
            let hash = wasm_utils::location_hash().unwrap_or_default();
            if let Some(page) = page_for_hashchange(&hash) {
                navigate(state, page);
            }
        });
        scope.register(TriggerHandle::Listener(listener));
    });

    let (page, menu_open) = {
        let nav = state.nav();
        let nav = nav.read();
        (nav.active_page(), nav.menu_open())
    };
    let contact = state.contact().cloned();
    let acknowledgment = state.acknowledgment().cloned();
    let submissions = state.submissions().cloned();

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: FONTS_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Script { src: TAILWIND_CDN }

        SiteLayoutView {
            background: rsx! {
                BackgroundScene {}
            },
            header: rsx! {
                SiteHeaderView {
                    owner_name: config.owner_name.clone(),
                    owner_title: config.owner_title.clone(),
                    nav_items: nav_items(page),
                    on_nav_click: move |page: Page| navigate(state, page),
                    menu_open,
                    on_menu_toggle: move |_| toggle_menu(state),
                }
            },
            footer: rsx! {
                if page != Page::Contact {
                    SiteFooterView {
                        owner_name: config.owner_name.clone(),
                        owner_title: config.owner_title.clone(),
                        social_links: config.social_links.clone(),
                    }
                }
            },
            extra: rsx! {
                if let Some(message) = acknowledgment {
                    SuccessToast {
                        key: "{submissions}",
                        message,
                        on_dismiss: move |_| dismiss_acknowledgment(state),
                    }
                }
            },
            PageView {
                key: "{page}",
                page,
                config: config.clone(),
                portrait: PORTRAIT.to_string(),
                contact,
                on_navigate: move |page: Page| navigate(state, page),
                on_contact_input: move |(field, value): (ContactField, String)| {
                    update_contact_field(state, field, value)
                },
                on_contact_submit: move |_| submit_contact(state),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_for_fragment_known_pages() {
        assert_eq!(page_for_fragment(""), Page::Home);
        assert_eq!(page_for_fragment("#work"), Page::Work);
        assert_eq!(page_for_fragment("#contact"), Page::Contact);
    }

    #[test]
    fn test_page_for_fragment_unknown_falls_back_home() {
        assert_eq!(page_for_fragment("#blog"), Page::Home);
    }

    #[test]
    fn test_hashchange_to_empty_fragment_keeps_page() {
        assert_eq!(page_for_hashchange(""), None);
        assert_eq!(page_for_hashchange("#"), None);
        assert_eq!(page_for_hashchange("#work"), Some(Page::Work));
        assert_eq!(page_for_hashchange("#blog"), Some(Page::Home));
    }
}
