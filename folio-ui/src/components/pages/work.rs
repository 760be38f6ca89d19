//! Work page: project grid with a category filter

use crate::components::{CategoryFilterControl, Reveal};
use dioxus::prelude::*;
use folio_common::animation::presets;
use folio_common::content::Project;
use folio_common::CategoryFilter;
use tracing::debug;

#[component]
pub fn WorkView() -> Element {
    // Local to the page: leaving and coming back starts from "All Projects"
    let mut filter = use_signal(CategoryFilter::default);
    let projects = filter().projects();

    rsx! {
        section { class: "container mx-auto px-6 py-16",
            Reveal { motion: presets::PAGE_ENTER,
                h1 { class: "text-4xl md:text-5xl font-bold font-heading mb-6", "My Work" }
                p { class: "text-lg text-gray-700 max-w-2xl mb-10",
                    "A selection of projects I've worked on, showcasing my skills in development and design."
                }
            }

            Reveal { motion: presets::PAGE_ENTER.with_delay(100),
                CategoryFilterControl {
                    selected: filter(),
                    on_select: move |selected: CategoryFilter| {
                        debug!("Filtering projects by {}", selected.id());
                        filter.set(selected);
                    },
                }
            }

            div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8",
                for (index , project) in projects.into_iter().enumerate() {
                    ProjectCard { key: "{project.id}", project: *project, index }
                }
            }
        }
    }
}

#[component]
fn ProjectCard(project: Project, index: usize) -> Element {
    rsx! {
        Reveal {
            motion: presets::PAGE_ENTER.staggered(index, 100),
            class: Some("bg-white rounded-2xl overflow-hidden shadow-sm hover:shadow-lg transition-all border border-gray-100 hover:-translate-y-1".to_string()),
            div { class: "h-48 bg-gradient-to-br from-blue-400 to-purple-500 flex items-center justify-center text-white text-xl font-bold",
                "{project.title}"
            }
            div { class: "p-6",
                h3 { class: "text-xl font-semibold font-heading mb-2", "{project.title}" }
                p { class: "text-gray-600 mb-4", "{project.description}" }
                div { class: "flex flex-wrap gap-2 mb-4",
                    for tech in project.technologies.iter() {
                        span {
                            key: "{tech}",
                            class: "text-xs bg-blue-100 text-blue-800 px-3 py-1 rounded-full",
                            "{tech}"
                        }
                    }
                }
                div { class: "text-blue-600 font-medium flex items-center gap-2 transition-transform hover:translate-x-1",
                    span { "View Project" }
                    span { "→" }
                }
            }
        }
    }
}
