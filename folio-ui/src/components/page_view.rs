//! Active page dispatch

use crate::components::pages::{AboutView, ContactView, HomeView, ServicesView, WorkView};
use dioxus::prelude::*;
use folio_common::{ContactField, ContactForm, Page, SiteConfig};

/// Renders exactly one view for `page`. Switching pages unmounts the old view,
/// which cancels every trigger it started.
#[component]
pub fn PageView(
    page: Page,
    config: SiteConfig,
    /// Portrait image URL for the home hero
    portrait: String,
    contact: ContactForm,
    on_navigate: EventHandler<Page>,
    on_contact_input: EventHandler<(ContactField, String)>,
    on_contact_submit: EventHandler<()>,
) -> Element {
    match page {
        Page::Home => rsx! {
            HomeView {
                owner_name: config.owner_name,
                owner_title: config.owner_title,
                tagline: config.tagline,
                portrait,
                on_navigate,
            }
        },
        Page::Work => rsx! {
            WorkView {}
        },
        Page::About => rsx! {
            AboutView {}
        },
        Page::Services => rsx! {
            ServicesView {}
        },
        Page::Contact => rsx! {
            ContactView {
                email: config.email,
                phone: config.phone,
                location: config.location,
                social_links: config.social_links,
                form: contact,
                on_field_input: on_contact_input,
                on_submit: on_contact_submit,
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_common::content::PROJECTS;

    const HEADINGS: [(Page, &str); 5] = [
        (Page::Home, "Ready to bring your vision to life?"),
        (Page::Work, "My Work"),
        (Page::About, "About Me"),
        (Page::Services, "My Process"),
        (Page::Contact, "Get In Touch"),
    ];

    #[component]
    fn Harness(page: Page) -> Element {
        rsx! {
            PageView {
                page,
                config: SiteConfig::default(),
                portrait: String::new(),
                contact: ContactForm::default(),
                on_navigate: move |_: Page| {},
                on_contact_input: move |_: (ContactField, String)| {},
                on_contact_submit: move |_: ()| {},
            }
        }
    }

    fn render(page: Page) -> String {
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { page });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_each_page_renders_only_its_view() {
        for (page, _) in HEADINGS {
            let html = render(page);
            for (other, heading) in HEADINGS {
                assert_eq!(
                    html.contains(heading),
                    other == page,
                    "rendering {page}, heading {heading:?}"
                );
            }
        }
    }

    #[test]
    fn test_work_lists_all_projects() {
        let html = render(Page::Work);
        assert_eq!(PROJECTS.len(), 6);
        assert_eq!(html.matches("View Project").count(), PROJECTS.len());
        for project in PROJECTS {
            assert!(html.contains(project.title), "missing {}", project.title);
        }
    }
}
