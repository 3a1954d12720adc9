use crate::error::{Error, Result};
use crate::types::Category;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "site.toml";
const DEFAULT_ASSETS_DIR: &str = "assets";

/// Complete site configuration
#[derive(Debug, Clone, Serialize)]
pub struct SiteConfig {
    pub site: SiteMeta,
    pub home: HomeConfig,
    pub content: ContentConfig,
}

/// Site-wide metadata shown in the header, footer and page titles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteMeta {
    pub title: String,
    pub author: String,
    pub tagline: String,
    pub email: String,
    pub domain: String,
    pub accent_color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
}

impl SiteMeta {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HomeConfig {
    pub default_tab: Category,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContentConfig {
    /// Directory of Markdown articles, relative to the site directory
    pub articles_dir: Option<PathBuf>,
    pub assets_dir: PathBuf,
}

/// Raw TOML configuration structure
/// This matches the site.toml file structure exactly
#[derive(Debug, Deserialize)]
struct RawConfig {
    site: SiteMeta,
    #[serde(default)]
    home: RawHome,
    #[serde(default)]
    content: RawContent,
}

#[derive(Debug, Default, Deserialize)]
struct RawHome {
    default_tab: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawContent {
    articles_dir: Option<String>,
    assets_dir: Option<String>,
}

/// Parse site.toml from a file path
pub fn parse_site_toml<P: AsRef<Path>>(path: P) -> Result<SiteConfig> {
    let content = fs::read_to_string(path)?;
    parse_site_toml_str(&content)
}

/// Parse site.toml from a string (useful for testing)
pub fn parse_site_toml_str(content: &str) -> Result<SiteConfig> {
    let raw: RawConfig = toml::from_str(content)?;

    if raw.site.title.trim().is_empty() {
        return Err(Error::ConfigParse("site.title must not be empty".into()));
    }
    if raw.site.author.trim().is_empty() {
        return Err(Error::ConfigParse("site.author must not be empty".into()));
    }

    let default_tab = match raw.home.default_tab.as_deref() {
        Some(slug) => Category::from_slug(slug).ok_or_else(|| {
            let known: Vec<&str> = Category::ALL.iter().map(|c| c.slug()).collect();
            Error::ConfigParse(format!(
                "Unknown home.default_tab '{}', expected one of: {}",
                slug,
                known.join(", ")
            ))
        })?,
        None => Category::default(),
    };

    let articles_dir = match raw.content.articles_dir {
        Some(dir) => Some(validate_path(&dir, "content.articles_dir")?),
        None => None,
    };

    let assets_dir = validate_path(
        raw.content.assets_dir.as_deref().unwrap_or(DEFAULT_ASSETS_DIR),
        "content.assets_dir",
    )?;

    Ok(SiteConfig {
        site: raw.site,
        home: HomeConfig { default_tab },
        content: ContentConfig {
            articles_dir,
            assets_dir,
        },
    })
}

/// Validate and convert a path string to PathBuf.
///
/// Rejects absolute paths and parent directory references (`..`) so a
/// site.toml can only point at files inside the site directory.
fn validate_path(path_str: &str, field_name: &str) -> Result<PathBuf> {
    let path = Path::new(path_str);

    if path.is_absolute() {
        return Err(Error::ConfigParse(format!(
            "Absolute paths not allowed in '{}': '{}'. Use relative paths only.",
            field_name, path_str
        )));
    }

    for component in path.components() {
        if component == std::path::Component::ParentDir {
            return Err(Error::ConfigParse(format!(
                "Parent directory references (..) not allowed in '{}': '{}'",
                field_name, path_str
            )));
        }
    }

    if path_str.trim().is_empty() {
        return Err(Error::ConfigParse(format!(
            "Empty path in '{}' field",
            field_name
        )));
    }

    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r##"
[site]
title = "Field Notes"
author = "Rowan Vale"
tagline = "Product designer who prototypes in code"
email = "hello@example.com"
domain = "example.com"
accent_color = "#ff6b35"
"##;

    #[test]
    fn test_validate_path_valid_relative() {
        assert!(validate_path("articles", "dir").is_ok());
        assert!(validate_path("content/articles", "dir").is_ok());
        assert!(validate_path("assets/img", "dir").is_ok());
    }

    #[test]
    fn test_validate_path_rejects_absolute_unix() {
        let result = validate_path("/etc", "content.articles_dir");
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Absolute paths not allowed")
        );
    }

    #[test]
    fn test_validate_path_rejects_parent_dir() {
        let result = validate_path("../outside", "content.assets_dir");
        assert!(result.is_err());
        let msg = result.unwrap_err().to_string();
        assert!(msg.contains("Parent directory references"));
        assert!(msg.contains("content.assets_dir"));

        assert!(validate_path("assets/../../etc", "dir").is_err());
    }

    #[test]
    fn test_validate_path_rejects_empty() {
        let result = validate_path("   ", "dir");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Empty path"));
    }

    #[test]
    fn test_parse_minimal_config() {
        let config = parse_site_toml_str(MINIMAL).unwrap();
        assert_eq!(config.site.title, "Field Notes");
        assert_eq!(config.site.author, "Rowan Vale");
        assert_eq!(config.site.mailto(), "mailto:hello@example.com");
        assert_eq!(config.site.resume_url, None);
        assert_eq!(config.home.default_tab, Category::Prototype);
        assert_eq!(config.content.articles_dir, None);
        assert_eq!(config.content.assets_dir, PathBuf::from("assets"));
    }

    #[test]
    fn test_parse_full_config() {
        let toml = format!(
            r##"{}
resume_url = "https://example.com/resume.pdf"

[home]
default_tab = "design-docs"

[content]
articles_dir = "articles"
assets_dir = "static"
"##,
            MINIMAL.trim_end()
        );

        let config = parse_site_toml_str(&toml).unwrap();
        assert_eq!(
            config.site.resume_url.as_deref(),
            Some("https://example.com/resume.pdf")
        );
        assert_eq!(config.home.default_tab, Category::DesignDocs);
        assert_eq!(config.content.articles_dir, Some(PathBuf::from("articles")));
        assert_eq!(config.content.assets_dir, PathBuf::from("static"));
    }

    #[test]
    fn test_parse_config_rejects_unknown_tab() {
        let toml = format!("{}\n[home]\ndefault_tab = \"sketches\"\n", MINIMAL);
        let result = parse_site_toml_str(&toml);
        assert!(result.is_err());
        let msg = result.unwrap_err().to_string();
        assert!(msg.contains("sketches"));
        assert!(msg.contains("figma"));
    }

    #[test]
    fn test_parse_config_rejects_path_traversal() {
        let toml = format!("{}\n[content]\narticles_dir = \"../../etc\"\n", MINIMAL);
        let result = parse_site_toml_str(&toml);
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Parent directory references")
        );
    }

    #[test]
    fn test_parse_config_rejects_missing_site_table() {
        let result = parse_site_toml_str("[home]\ndefault_tab = \"figma\"\n");
        assert!(matches!(result, Err(Error::ConfigParse(_))));
    }

    #[test]
    fn test_parse_config_rejects_blank_author() {
        let toml = MINIMAL.replace("Rowan Vale", " ");
        let result = parse_site_toml_str(&toml);
        assert!(result.unwrap_err().to_string().contains("site.author"));
    }
}
