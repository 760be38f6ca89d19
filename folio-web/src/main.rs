//! folio - single-page portfolio site

mod app;

use dioxus::prelude::*;
use folio_common::SiteConfig;
use tracing::{info, warn, Level};

/// Embedded site configuration
const SITE_YAML: &str = include_str!("../site.yaml");

fn main() {
    let (config, load_error) = match SiteConfig::from_yaml_str(SITE_YAML) {
        Ok(config) => (config, None),
        Err(e) => (SiteConfig::default(), Some(e)),
    };

    let level = config.level().unwrap_or(Level::INFO);
    if let Err(e) = dioxus::logger::init(level) {
        eprintln!("Failed to initialize logger: {e}");
    }
    if let Some(e) = load_error {
        warn!("Invalid site.yaml, using built-in defaults: {e}");
    }
    info!("Starting folio for {}", config.owner_name);

    LaunchBuilder::web().with_context(config).launch(app::App);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_site_config_is_valid() {
        let config = SiteConfig::from_yaml_str(SITE_YAML).unwrap();
        assert_eq!(config.owner_name, "Varad Lokare");
        assert_eq!(config.social_links.len(), 4);
        assert!(config.social_links.iter().all(|link| link.url == "#"));
        assert_eq!(config.level().unwrap(), Level::INFO);
    }
}
