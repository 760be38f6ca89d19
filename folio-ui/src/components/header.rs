//! Site header view component
//!
//! Pure, props-based component for the brand, desktop navigation and the
//! collapsible mobile menu.

use crate::components::icons::{MenuIcon, XIcon};
use crate::components::{ChromelessButton, Reveal};
use dioxus::prelude::*;
use folio_common::animation::presets;
use folio_common::Page;

/// Navigation item for the header
#[derive(Clone, PartialEq, Debug)]
pub struct NavItem {
    pub page: Page,
    pub label: &'static str,
    pub is_active: bool,
}

/// Header links for the current page
pub fn nav_items(active: Page) -> Vec<NavItem> {
    Page::NAV
        .into_iter()
        .map(|page| NavItem {
            page,
            label: page.label(),
            is_active: page == active,
        })
        .collect()
}

/// Site header view (pure, props-based)
/// Renders the visual structure with callbacks for all interactions.
#[component]
pub fn SiteHeaderView(
    owner_name: String,
    owner_title: String,
    nav_items: Vec<NavItem>,
    on_nav_click: EventHandler<Page>,
    menu_open: bool,
    on_menu_toggle: EventHandler<()>,
) -> Element {
    rsx! {
        Reveal { motion: presets::HEADER_DROP,
            header { class: "container mx-auto px-6 py-8",
                div { class: "flex justify-between items-center",
                    // Brand returns home
                    div {
                        class: "cursor-pointer transition-transform hover:scale-105",
                        onclick: move |_| on_nav_click.call(Page::Home),
                        h1 { class: "text-3xl font-bold font-heading bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent",
                            "{owner_name}"
                        }
                        p { class: "text-xs text-gray-500 mt-1", "{owner_title}" }
                    }

                    nav { class: "hidden md:flex space-x-8",
                        for item in nav_items.iter() {
                            DesktopNavLink {
                                key: "{item.page}",
                                item: item.clone(),
                                on_click: move |page: Page| on_nav_click.call(page),
                            }
                        }
                    }

                    ChromelessButton {
                        class: Some("md:hidden text-gray-700 active:scale-95".to_string()),
                        aria_label: Some("Toggle menu".to_string()),
                        aria_expanded: Some(menu_open),
                        onclick: move |_| on_menu_toggle.call(()),
                        if menu_open {
                            XIcon {}
                        } else {
                            MenuIcon {}
                        }
                    }
                }

                if menu_open {
                    Reveal {
                        motion: presets::MENU_EXPAND,
                        class: Some("md:hidden mt-4 bg-white p-4 rounded-lg shadow-lg overflow-hidden".to_string()),
                        div { class: "flex flex-col space-y-4",
                            for item in nav_items.iter() {
                                a {
                                    key: "{item.page}",
                                    href: "{item.page.fragment()}",
                                    class: mobile_link_class(item.is_active),
                                    onclick: {
                                        let page = item.page;
                                        move |evt: MouseEvent| {
                                            evt.prevent_default();
                                            on_nav_click.call(page);
                                        }
                                    },
                                    "{item.label}"
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
fn DesktopNavLink(item: NavItem, on_click: EventHandler<Page>) -> Element {
    let page = item.page;
    rsx! {
        a {
            href: "{page.fragment()}",
            class: desktop_link_class(item.is_active),
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                on_click.call(page);
            },
            "{item.label}"
            span { class: underline_class(item.is_active) }
        }
    }
}

pub(crate) fn desktop_link_class(is_active: bool) -> &'static str {
    if is_active {
        "text-blue-600 hover:text-blue-600 transition-all relative group hover:-translate-y-0.5"
    } else {
        "text-gray-600 hover:text-blue-600 transition-all relative group hover:-translate-y-0.5"
    }
}

fn underline_class(is_active: bool) -> &'static str {
    if is_active {
        "absolute -bottom-1 left-0 w-full h-0.5 bg-blue-600 transition-all"
    } else {
        "absolute -bottom-1 left-0 w-0 h-0.5 bg-blue-600 transition-all group-hover:w-full"
    }
}

pub(crate) fn mobile_link_class(is_active: bool) -> &'static str {
    if is_active {
        "text-blue-600 font-semibold hover:text-blue-600 transition-colors"
    } else {
        "text-gray-600 hover:text-blue-600 transition-colors"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_items_mark_only_active_page() {
        let items = nav_items(Page::About);
        assert_eq!(items.len(), 4);
        let active: Vec<Page> = items.iter().filter(|i| i.is_active).map(|i| i.page).collect();
        assert_eq!(active, vec![Page::About]);
    }

    #[test]
    fn test_nav_items_on_home_have_no_active_link() {
        assert!(nav_items(Page::Home).iter().all(|i| !i.is_active));
    }

    #[test]
    fn test_nav_items_order_and_labels() {
        let labels: Vec<&str> = nav_items(Page::Home).iter().map(|i| i.label).collect();
        assert_eq!(labels, vec!["Work", "About", "Services", "Contact"]);
    }

    #[test]
    fn test_link_classes_highlight_active() {
        assert!(desktop_link_class(true).starts_with("text-blue-600"));
        assert!(desktop_link_class(false).starts_with("text-gray-600"));
        assert!(mobile_link_class(true).contains("font-semibold"));
    }
}
