//! Project categories and the work-page filter

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::content::{Project, PROJECTS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectCategory {
    Web,
    Mobile,
    Design,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown project category: {0:?}")]
pub struct UnknownCategory(pub String);

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 3] = [
        ProjectCategory::Web,
        ProjectCategory::Mobile,
        ProjectCategory::Design,
    ];

    pub fn id(self) -> &'static str {
        match self {
            ProjectCategory::Web => "web",
            ProjectCategory::Mobile => "mobile",
            ProjectCategory::Design => "design",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProjectCategory::Web => "Web Development",
            ProjectCategory::Mobile => "Mobile Apps",
            ProjectCategory::Design => "UI/UX Design",
        }
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Which projects the work page lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ProjectCategory),
}

impl CategoryFilter {
    /// Filter buttons in display order
    pub const OPTIONS: [CategoryFilter; 4] = [
        CategoryFilter::All,
        CategoryFilter::Only(ProjectCategory::Web),
        CategoryFilter::Only(ProjectCategory::Mobile),
        CategoryFilter::Only(ProjectCategory::Design),
    ];

    pub fn id(self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.id(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All Projects",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    pub fn matches(self, project: &Project) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => project.category == category,
        }
    }

    /// Apply to an arbitrary project table, keeping its order
    pub fn apply<'a>(self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects.iter().filter(|p| self.matches(p)).collect()
    }

    /// Apply to the site's project table
    pub fn projects(self) -> Vec<&'static Project> {
        self.apply(PROJECTS)
    }
}

impl FromStr for CategoryFilter {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryFilter::OPTIONS
            .into_iter()
            .find(|filter| filter.id() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_lists_every_project() {
        let projects = CategoryFilter::All.projects();
        assert_eq!(projects.len(), 6);
        let ids: Vec<u32> = projects.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_mobile_lists_two_projects() {
        let projects = CategoryFilter::Only(ProjectCategory::Mobile).projects();
        assert_eq!(projects.len(), 2);
        assert!(projects
            .iter()
            .all(|p| p.category == ProjectCategory::Mobile));
        let titles: Vec<&str> = projects.iter().map(|p| p.title).collect();
        assert_eq!(titles, vec!["Fitness Tracking App", "Travel Companion App"]);
    }

    #[test]
    fn test_each_category_partitions_projects() {
        let total: usize = ProjectCategory::ALL
            .into_iter()
            .map(|c| CategoryFilter::Only(c).projects().len())
            .sum();
        assert_eq!(total, PROJECTS.len());
    }

    #[test]
    fn test_parse_filter_ids() {
        for filter in CategoryFilter::OPTIONS {
            assert_eq!(filter.id().parse::<CategoryFilter>(), Ok(filter));
        }
        assert!("games".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn test_labels() {
        assert_eq!(CategoryFilter::All.label(), "All Projects");
        assert_eq!(
            CategoryFilter::Only(ProjectCategory::Design).label(),
            "UI/UX Design"
        );
    }
}
