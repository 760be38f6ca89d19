use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::Level;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse site config: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Invalid site config: {0}")]
    Invalid(String),
}

/// A profile link shown in the footer and on the contact page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    #[serde(default = "default_href")]
    pub url: String,
}

impl SocialLink {
    /// First letter of the label, used for the round contact-page badges
    pub fn initial(&self) -> String {
        self.label.chars().next().map(String::from).unwrap_or_default()
    }

    /// `#` or empty: the link has no destination yet and must not touch the URL
    pub fn is_placeholder(&self) -> bool {
        let url = self.url.trim();
        url.is_empty() || url == "#"
    }
}

fn default_href() -> String {
    "#".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Site owner details and runtime settings (YAML)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub owner_name: String,
    pub owner_title: String,
    /// Hero paragraph on the home page
    pub tagline: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
    /// Log filter: trace, debug, info, warn or error
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        let social = |label: &str| SocialLink {
            label: label.to_string(),
            url: default_href(),
        };
        Self {
            owner_name: "Varad Lokare".to_string(),
            owner_title: "Software Engineer".to_string(),
            tagline: "I'm passionate about building creative digital solutions, from websites and applications to innovative platforms that solve real-world challenges.".to_string(),
            email: "varad@example.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            location: "San Francisco, California".to_string(),
            social_links: vec![
                social("LinkedIn"),
                social("GitHub"),
                social("Twitter"),
                social("Instagram"),
            ],
            log_level: default_log_level(),
        }
    }
}

impl SiteConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.owner_name.trim().is_empty() {
            return Err(ConfigError::Invalid("owner_name must not be empty".into()));
        }
        if !self.email.contains('@') {
            return Err(ConfigError::Invalid(format!(
                "email {:?} is not an address",
                self.email
            )));
        }
        if let Some(link) = self.social_links.iter().find(|l| l.label.trim().is_empty()) {
            return Err(ConfigError::Invalid(format!(
                "social link {:?} has no label",
                link.url
            )));
        }
        self.level()?;
        Ok(())
    }

    pub fn level(&self) -> Result<Level, ConfigError> {
        self.log_level
            .parse::<Level>()
            .map_err(|_| ConfigError::Invalid(format!("unknown log level {:?}", self.log_level)))
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
owner_name: Ada Lovelace
owner_title: Analyst
tagline: Notes on the engine.
email: ada@example.com
phone: "+44 20 0000 0000"
location: London
social_links:
  - label: GitHub
    url: https://github.com/ada
  - label: Mastodon
log_level: debug
"#;

    #[test]
    fn test_parse_sample() {
        let config = SiteConfig::from_yaml_str(SAMPLE).unwrap();
        assert_eq!(config.owner_name, "Ada Lovelace");
        assert_eq!(config.social_links.len(), 2);
        assert_eq!(config.social_links[0].url, "https://github.com/ada");
        assert_eq!(config.social_links[1].url, "#");
        assert_eq!(config.level().unwrap(), Level::DEBUG);
        assert_eq!(config.mailto(), "mailto:ada@example.com");
    }

    #[test]
    fn test_log_level_defaults_to_info() {
        let yaml = SAMPLE.replace("log_level: debug\n", "");
        let config = SiteConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(config.level().unwrap(), Level::INFO);
    }

    #[test]
    fn test_default_is_valid() {
        let config = SiteConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.social_links.len(), 4);
    }

    #[test]
    fn test_malformed_yaml() {
        let err = SiteConfig::from_yaml_str("owner_name: [unclosed").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_required_field() {
        let err = SiteConfig::from_yaml_str("owner_name: Ada\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_bad_level() {
        let yaml = SAMPLE.replace("log_level: debug", "log_level: loud");
        let err = SiteConfig::from_yaml_str(&yaml).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_bad_email() {
        let yaml = SAMPLE.replace("ada@example.com", "nobody");
        assert!(matches!(
            SiteConfig::from_yaml_str(&yaml),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_social_initial() {
        let link = SocialLink {
            label: "LinkedIn".into(),
            url: "#".into(),
        };
        assert_eq!(link.initial(), "L");
    }

    #[test]
    fn test_placeholder_links() {
        let link = |url: &str| SocialLink {
            label: "GitHub".into(),
            url: url.into(),
        };
        assert!(link("#").is_placeholder());
        assert!(link(" ").is_placeholder());
        assert!(!link("https://github.com/varad").is_placeholder());
        assert!(SiteConfig::default()
            .social_links
            .iter()
            .all(SocialLink::is_placeholder));
    }
}
