//! About page: bio, skill bars, experience and education timelines

use crate::animation::use_reveal;
use crate::components::{join_style, Reveal};
use dioxus::prelude::*;
use folio_common::animation::presets;
use folio_common::Trigger;
use folio_common::content::{Skill, EDUCATION, EXPERIENCE, SKILLS};

const BIO: &str = "I'm a passionate software engineer with over 5 years of experience creating digital solutions that combine technical excellence with user-centered design. My approach focuses on writing clean, maintainable code while delivering exceptional user experiences.";

/// Width of a filled skill bar
pub(crate) fn bar_width(level: u8) -> String {
    format!("width: {}%;", level.min(100))
}

#[component]
pub fn AboutView() -> Element {
    rsx! {
        section { class: "container mx-auto px-6 py-16",
            Reveal {
                motion: presets::PAGE_ENTER,
                class: Some("mb-16".to_string()),
                h1 { class: "text-4xl md:text-5xl font-bold font-heading mb-6", "About Me" }
                p { class: "text-lg text-gray-700 max-w-3xl", "{BIO}" }
            }

            div { class: "grid grid-cols-1 lg:grid-cols-2 gap-16",
                Reveal { motion: presets::PAGE_ENTER.with_delay(100),
                    h2 { class: "text-2xl font-bold font-heading mb-8", "Skills & Expertise" }
                    div { class: "space-y-6",
                        for (index , skill) in SKILLS.iter().enumerate() {
                            SkillBar { key: "{skill.name}", skill: *skill, index }
                        }
                    }
                }

                Reveal { motion: presets::PAGE_ENTER.with_delay(200),
                    h2 { class: "text-2xl font-bold font-heading mb-8", "Experience" }
                    div { class: "space-y-8",
                        for exp in EXPERIENCE.iter() {
                            TimelineEntry {
                                key: "{exp.company}",
                                title: exp.role,
                                subtitle: format!("{} • {}", exp.company, exp.period),
                                body: Some(exp.description),
                            }
                        }
                    }

                    h2 { class: "text-2xl font-bold font-heading mt-12 mb-8", "Education" }
                    div { class: "space-y-8",
                        for edu in EDUCATION.iter() {
                            TimelineEntry {
                                key: "{edu.degree}",
                                title: edu.degree,
                                subtitle: format!("{} • {}", edu.institution, edu.period),
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SkillBar(skill: Skill, index: usize) -> Element {
    let motion = presets::GROW_X
        .with_trigger(Trigger::Mount)
        .staggered(index, 100);
    let reveal = use_reveal(motion.trigger);
    let style = join_style(Some(bar_width(skill.level).as_str()), &motion.style(reveal.fired()));

    rsx! {
        div {
            div { class: "flex justify-between mb-2",
                span { "{skill.name}" }
                span { "{skill.level}%" }
            }
            div { class: "h-2 bg-gray-200 rounded-full overflow-hidden",
                div {
                    class: "h-full bg-gradient-to-r from-blue-500 to-purple-500 origin-left",
                    style: "{style}",
                    onmounted: reveal.onmounted(),
                }
            }
        }
    }
}

#[component]
fn TimelineEntry(
    title: &'static str,
    subtitle: String,
    #[props(default)] body: Option<&'static str>,
) -> Element {
    rsx! {
        div { class: "relative pl-8 border-l-2 border-blue-200",
            div { class: "absolute -left-1.5 top-0 w-3 h-3 bg-blue-500 rounded-full" }
            h3 { class: "text-xl font-semibold font-heading", "{title}" }
            p { class: "text-gray-600 mb-1", "{subtitle}" }
            if let Some(body) = body {
                p { class: "text-gray-700", "{body}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_width() {
        assert_eq!(bar_width(90), "width: 90%;");
        assert_eq!(bar_width(150), "width: 100%;");
    }
}
