use anyhow::{Context, Result};
use chrono::Local;
use folio_core::Category;
use folio_core::config::{CONFIG_FILE, parse_site_toml_str};
use std::fs;
use std::path::{Path, PathBuf};

const ARTICLES_DIR: &str = "articles";
const ASSETS_DIR: &str = "assets";
const SAMPLE_ARTICLE: &str = "hello-world.md";

/// Escape a string for a TOML basic string.
///
/// The scaffold is written by hand to keep its comments, so values are
/// escaped here rather than serialized through the toml crate.
///
/// See: https://toml.io/en/v1.0.0#string
fn toml_escape_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\x08', "\\b")
        .replace('\x0C', "\\f")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

/// Basic shape check: one `@`, non-empty local part, dotted domain with a TLD
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if domain.contains('@') || local.is_empty() || local.len() > 64 {
        return false;
    }
    if domain.is_empty() || domain.len() > 255 || !domain.contains('.') {
        return false;
    }
    if domain.starts_with(['.', '-']) || domain.ends_with(['.', '-']) || domain.contains("..") {
        return false;
    }

    domain.rsplit_once('.').is_some_and(|(_, tld)| tld.len() >= 2)
}

/// Scaffold a new site directory: site.toml, an assets directory and one
/// sample Markdown article.
pub async fn run(path: PathBuf, author: Option<String>, email: Option<String>) -> Result<()> {
    println!("Initializing site directory: {}", path.display());

    let config_path = path.join(CONFIG_FILE);
    if config_path.exists() {
        anyhow::bail!(
            "{} already exists at {}\nHint: Delete it first or use a different directory",
            CONFIG_FILE,
            config_path.display()
        );
    }

    fs::create_dir_all(&path).with_context(|| format!("Failed to create {}", path.display()))?;
    create_directory_structure(&path)?;
    generate_site_toml(&path, author.as_deref(), email.as_deref())?;
    generate_sample_article(&path)?;

    println!("\n✓ Initialization complete!");
    println!("\nGenerated structure:");
    println!("  {}/", path.display());
    println!("  ├── {}            ← Edit this to set your name, email, etc.", CONFIG_FILE);
    println!("  ├── {}/", ASSETS_DIR);
    println!("  └── {}/", ARTICLES_DIR);
    println!("      └── {}    ← Markdown articles go here", SAMPLE_ARTICLE);

    println!("\nNext steps:");
    println!("  1. Edit {} (title, tagline, domain)", CONFIG_FILE);
    println!("  2. Add images to {}/ and reference them as /assets/<file>", ASSETS_DIR);
    println!("  3. Preview: folio preview {}", path.display());

    Ok(())
}

fn create_directory_structure(base: &Path) -> Result<()> {
    fs::create_dir_all(base.join(ASSETS_DIR))?;
    fs::create_dir_all(base.join(ARTICLES_DIR))?;
    Ok(())
}

fn generate_site_toml(base: &Path, author: Option<&str>, email: Option<&str>) -> Result<()> {
    if author.is_some_and(|a| a.trim().is_empty()) {
        anyhow::bail!("Author name must not be blank");
    }
    if let Some(e) = email {
        if !is_valid_email(e) {
            anyhow::bail!("Invalid email format: '{}'", e);
        }
    }

    let author_name = toml_escape_string(author.unwrap_or("Your Name"));
    let contact_email = toml_escape_string(email.unwrap_or("you@example.com"));

    let author_comment = if author.is_some() {
        ""
    } else {
        "  # TODO: Set your name"
    };
    let email_comment = if email.is_some() {
        ""
    } else {
        "  # TODO: Set contact email"
    };
    let tabs: Vec<&str> = Category::ALL.iter().map(|c| c.slug()).collect();
    let default_tab = Category::default().slug();

    let toml = format!(
        "# Generated by folio init\n\
# Edit this file to customize your site\n\
\n\
[site]\n\
title = \"{author_name}\"{author_comment}\n\
author = \"{author_name}\"{author_comment}\n\
tagline = \"Designer and prototyper\"  # TODO: Set tagline\n\
email = \"{contact_email}\"{email_comment}\n\
domain = \"example.com\"  # TODO: Set domain\n\
accent_color = \"#ff6b35\"\n\
# resume_url = \"https://example.com/resume.pdf\"\n\
\n\
[home]\n\
# One of: {tab_list}\n\
default_tab = \"{default_tab}\"\n\
\n\
[content]\n\
articles_dir = \"{ARTICLES_DIR}\"\n\
assets_dir = \"{ASSETS_DIR}\"\n",
        tab_list = tabs.join(", "),
    );

    parse_site_toml_str(&toml)
        .context("Generated site.toml is invalid - this is a bug in the scaffold")?;

    fs::write(base.join(CONFIG_FILE), toml)?;

    Ok(())
}

fn generate_sample_article(base: &Path) -> Result<()> {
    let today = Local::now().format("%Y-%m-%d");
    let article = format!(
        r##"+++
title = "Hello, World"
date = "{today}"
tags = ["meta"]
+++

This article lives in `{ARTICLES_DIR}/{SAMPLE_ARTICLE}`. The file name becomes
its URL: `/article/hello-world`.

## Writing

Articles are plain Markdown. Paragraphs, headings, lists, code and quotes
all render:

- Keep it short
- Link related articles with `related = ["slug"]`

> Delete this file once you have written your own.
"##
    );

    fs::write(base.join(ARTICLES_DIR).join(SAMPLE_ARTICLE), article)?;

    Ok(())
}
