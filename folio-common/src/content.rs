//! Static content tables rendered by the page views
//!
//! Everything here is fixture data baked into the build. Order matters: views
//! render records in table order.

use crate::projects::ProjectCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: u32,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub category: ProjectCategory,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
}

/// Skill with a proficiency percentage (0-100)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessStep {
    pub step: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

/// Number of services previewed on the home page
pub const HOME_SERVICE_PREVIEW: usize = 3;

pub static SERVICES: &[Service] = &[
    Service {
        number: "01",
        title: "Web Development",
        description: "Building responsive, modern web applications with the latest technologies and frameworks.",
    },
    Service {
        number: "02",
        title: "UI/UX Design",
        description: "Creating intuitive user interfaces and experiences that delight users and drive engagement.",
    },
    Service {
        number: "03",
        title: "Mobile Apps",
        description: "Developing cross-platform mobile applications that work seamlessly on iOS and Android.",
    },
    Service {
        number: "04",
        title: "API Development",
        description: "Designing and building robust RESTful APIs and GraphQL endpoints for your applications.",
    },
    Service {
        number: "05",
        title: "DevOps & Deployment",
        description: "Setting up CI/CD pipelines and deploying applications to cloud platforms with best practices.",
    },
    Service {
        number: "06",
        title: "Technical Consulting",
        description: "Providing expert advice on technology stack, architecture, and implementation strategies.",
    },
];

pub static STATS: &[Stat] = &[
    Stat {
        value: 50,
        label: "Projects Completed",
    },
    Stat {
        value: 5,
        label: "Years Experience",
    },
    Stat {
        value: 25,
        label: "Happy Clients",
    },
    Stat {
        value: 15,
        label: "Technologies",
    },
];

pub static PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "E-Commerce Platform",
        category: ProjectCategory::Web,
        description: "A full-featured online shopping platform with payment integration and inventory management.",
        technologies: &["React", "Node.js", "MongoDB"],
    },
    Project {
        id: 2,
        title: "Fitness Tracking App",
        category: ProjectCategory::Mobile,
        description: "Mobile application for tracking workouts, nutrition, and health metrics.",
        technologies: &["React Native", "Firebase", "Redux"],
    },
    Project {
        id: 3,
        title: "Corporate Website Redesign",
        category: ProjectCategory::Design,
        description: "Complete redesign of corporate website with improved UX and modern aesthetics.",
        technologies: &["Figma", "Adobe XD", "Illustrator"],
    },
    Project {
        id: 4,
        title: "Task Management System",
        category: ProjectCategory::Web,
        description: "Project management tool with team collaboration features and real-time updates.",
        technologies: &["Vue.js", "Express", "PostgreSQL"],
    },
    Project {
        id: 5,
        title: "Travel Companion App",
        category: ProjectCategory::Mobile,
        description: "Mobile guide for travelers with offline maps and local recommendations.",
        technologies: &["Flutter", "Google Maps API", "SQLite"],
    },
    Project {
        id: 6,
        title: "Brand Identity Design",
        category: ProjectCategory::Design,
        description: "Complete brand identity package including logo, style guide, and marketing materials.",
        technologies: &["Illustrator", "Photoshop", "InDesign"],
    },
];

pub static SKILLS: &[Skill] = &[
    Skill {
        name: "React",
        level: 90,
    },
    Skill {
        name: "JavaScript",
        level: 85,
    },
    Skill {
        name: "Node.js",
        level: 80,
    },
    Skill {
        name: "UI/UX Design",
        level: 75,
    },
    Skill {
        name: "Python",
        level: 70,
    },
    Skill {
        name: "AWS",
        level: 65,
    },
];

pub static EXPERIENCE: &[Experience] = &[
    Experience {
        role: "Senior Frontend Developer",
        company: "Tech Innovations Inc.",
        period: "2021 - Present",
        description: "Leading frontend development for various client projects, implementing modern frameworks and best practices.",
    },
    Experience {
        role: "Web Developer",
        company: "Digital Solutions LLC",
        period: "2019 - 2021",
        description: "Developed and maintained web applications for clients across various industries.",
    },
    Experience {
        role: "UI/UX Designer",
        company: "Creative Minds Agency",
        period: "2017 - 2019",
        description: "Created user-centered designs for websites and mobile applications, focusing on usability and aesthetics.",
    },
];

pub static EDUCATION: &[Education] = &[
    Education {
        degree: "Bachelor of Computer Science",
        institution: "University of Technology",
        period: "2013 - 2017",
    },
    Education {
        degree: "Web Development Bootcamp",
        institution: "Code Academy",
        period: "2016",
    },
];

pub static PROCESS: &[ProcessStep] = &[
    ProcessStep {
        step: "01",
        title: "Discovery",
        description: "Understanding your goals, audience, and requirements.",
    },
    ProcessStep {
        step: "02",
        title: "Planning",
        description: "Creating a detailed project roadmap and architecture.",
    },
    ProcessStep {
        step: "03",
        title: "Execution",
        description: "Developing the solution with regular updates and feedback.",
    },
    ProcessStep {
        step: "04",
        title: "Delivery",
        description: "Launching and maintaining the finished product.",
    },
];

pub static TESTIMONIAL: Testimonial = Testimonial {
    quote: "Varad transformed our web application with incredible technical expertise and creative vision. The results exceeded our expectations and helped us stand out in a crowded market.",
    author: "Sarah Johnson",
    role: "CEO, Nexus Technologies",
};

/// Services shown on the home page
pub fn service_preview() -> &'static [Service] {
    &SERVICES[..HOME_SERVICE_PREVIEW.min(SERVICES.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_sizes() {
        assert_eq!(SERVICES.len(), 6);
        assert_eq!(STATS.len(), 4);
        assert_eq!(PROJECTS.len(), 6);
        assert_eq!(SKILLS.len(), 6);
        assert_eq!(EXPERIENCE.len(), 3);
        assert_eq!(EDUCATION.len(), 2);
        assert_eq!(PROCESS.len(), 4);
    }

    #[test]
    fn test_project_ids_unique() {
        let ids: HashSet<u32> = PROJECTS.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), PROJECTS.len());
    }

    #[test]
    fn test_skill_levels_are_percentages() {
        assert!(SKILLS.iter().all(|s| s.level <= 100));
    }

    #[test]
    fn test_service_numbers_follow_order() {
        for (i, service) in SERVICES.iter().enumerate() {
            assert_eq!(service.number, format!("{:02}", i + 1));
        }
    }

    #[test]
    fn test_service_preview_is_first_three() {
        let preview = service_preview();
        assert_eq!(preview.len(), 3);
        assert_eq!(preview[0].title, "Web Development");
        assert_eq!(preview[2].title, "Mobile Apps");
    }

    #[test]
    fn test_every_project_lists_technologies() {
        assert!(PROJECTS.iter().all(|p| !p.technologies.is_empty()));
    }
}
