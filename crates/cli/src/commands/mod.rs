pub mod build;
pub mod init;
pub mod preview;
pub mod validate;

use anyhow::{Context, Result};
use folio_core::config::CONFIG_FILE;
use folio_core::{ContentStore, SiteConfig, parse_site_toml};
use std::path::Path;

/// Load site.toml and the content store for a site directory
pub(crate) fn load_site(path: &Path) -> Result<(SiteConfig, ContentStore)> {
    if !path.exists() {
        anyhow::bail!(
            "Site directory does not exist: {}\nRun 'folio init {}' first",
            path.display(),
            path.display()
        );
    }

    let config_path = path.join(CONFIG_FILE);
    if !config_path.exists() {
        anyhow::bail!(
            "{} not found in {}\nRun 'folio init {}' first",
            CONFIG_FILE,
            path.display(),
            path.display()
        );
    }

    let config = parse_site_toml(&config_path).context("Failed to parse site.toml")?;
    let store = folio_generator::load_store(path, &config).context("Failed to load content")?;

    Ok((config, store))
}
