use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the five views the site can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    Work,
    About,
    Services,
    Contact,
}

/// Identifier that doesn't name any page
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown page: {0:?}")]
pub struct UnknownPage(pub String);

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::Work,
        Page::About,
        Page::Services,
        Page::Contact,
    ];

    /// Pages linked from the header, in display order. Home is reached via the brand.
    pub const NAV: [Page; 4] = [Page::Work, Page::About, Page::Services, Page::Contact];

    pub fn id(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Work => "work",
            Page::About => "about",
            Page::Services => "services",
            Page::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Work => "Work",
            Page::About => "About",
            Page::Services => "Services",
            Page::Contact => "Contact",
        }
    }

    /// Parse a URL fragment such as `#work`. An empty fragment is the home page.
    pub fn from_fragment(fragment: &str) -> Result<Page, UnknownPage> {
        let id = fragment.trim().trim_start_matches('#');
        if id.is_empty() {
            return Ok(Page::Home);
        }
        id.parse()
    }

    pub fn fragment(self) -> String {
        format!("#{}", self.id())
    }
}

impl FromStr for Page {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .into_iter()
            .find(|page| page.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownPage(s.to_string()))
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_home() {
        assert_eq!(Page::default(), Page::Home);
    }

    #[test]
    fn test_ids_parse_back() {
        for page in Page::ALL {
            assert_eq!(page.id().parse::<Page>(), Ok(page));
        }
    }

    #[test]
    fn test_parse_ignores_case() {
        assert_eq!("Services".parse::<Page>(), Ok(Page::Services));
    }

    #[test]
    fn test_unknown_id() {
        let err = "blog".parse::<Page>().unwrap_err();
        assert_eq!(err, UnknownPage("blog".to_string()));
        assert_eq!(err.to_string(), "unknown page: \"blog\"");
    }

    #[test]
    fn test_from_fragment() {
        assert_eq!(Page::from_fragment("#contact"), Ok(Page::Contact));
        assert_eq!(Page::from_fragment("about"), Ok(Page::About));
        assert_eq!(Page::from_fragment(""), Ok(Page::Home));
        assert_eq!(Page::from_fragment("#"), Ok(Page::Home));
        assert!(Page::from_fragment("#nope").is_err());
    }

    #[test]
    fn test_fragment() {
        assert_eq!(Page::Work.fragment(), "#work");
        assert_eq!(Page::from_fragment(&Page::Work.fragment()), Ok(Page::Work));
    }

    #[test]
    fn test_nav_excludes_home() {
        assert!(!Page::NAV.contains(&Page::Home));
        assert_eq!(Page::NAV.len(), 4);
    }
}
