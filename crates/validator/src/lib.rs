// Content validation: link integrity, slug uniqueness and asset checks

use anyhow::Context;
use folio_core::{Category, ContentBlock, ContentStore, Link, NavTarget, Route, SiteConfig};
use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// URL prefix under which the assets directory is published
pub const ASSETS_URL_PREFIX: &str = "/assets/";

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp"];

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub info: Vec<String>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Check the content store for authoring defects.
///
/// Broken internal links and duplicate identifiers are errors. Missing or
/// unreadable image assets are warnings, since the site still renders.
pub fn validate_site(
    site_dir: &Path,
    config: &SiteConfig,
    store: &ContentStore,
) -> ValidationReport {
    let mut report = ValidationReport::default();

    check_identifiers(store, &mut report);
    check_articles(store, &mut report);
    check_links(store, &mut report);
    check_categories(store, &mut report);
    check_assets(&site_dir.join(&config.content.assets_dir), store, &mut report);

    report.info.push(format!(
        "{} articles, {} projects, {} case studies",
        store.articles().len(),
        store.projects().len(),
        store.studies().len()
    ));

    report
}

fn duplicates<'a>(values: impl IntoIterator<Item = &'a str>) -> BTreeSet<&'a str> {
    let mut seen = HashSet::new();
    values.into_iter().filter(|v| !seen.insert(*v)).collect()
}

fn check_identifiers(store: &ContentStore, report: &mut ValidationReport) {
    for slug in duplicates(store.articles().iter().map(|a| a.slug.as_str())) {
        report.errors.push(format!("Duplicate article slug '{}'", slug));
    }
    for slug in duplicates(store.studies().iter().map(|s| s.slug.as_str())) {
        report.errors.push(format!("Duplicate case study slug '{}'", slug));
    }

    let mut ids = HashSet::new();
    for project in store.projects() {
        if !ids.insert(project.id) {
            report
                .errors
                .push(format!("Duplicate project id {} ('{}')", project.id, project.title));
        }
    }
}

fn check_articles(store: &ContentStore, report: &mut ValidationReport) {
    for article in store.articles() {
        if article.title.trim().is_empty() {
            report.errors.push(format!("Article '{}' has no title", article.slug));
        }
        if article.content.is_empty() {
            report.errors.push(format!("Article '{}' has no content", article.slug));
        }
        let unknown = article
            .content
            .iter()
            .filter(|b| matches!(b, ContentBlock::Unknown))
            .count();
        if unknown > 0 {
            report.warnings.push(format!(
                "Article '{}' has {} block(s) of unknown kind that will not render",
                article.slug, unknown
            ));
        }
    }
}

fn internal_target_exists(path: &str, store: &ContentStore) -> bool {
    Route::resolve(path).exists_in(store)
}

fn check_links(store: &ContentStore, report: &mut ValidationReport) {
    for article in store.articles() {
        for related in &article.related {
            if store.article(related).is_none() {
                report.errors.push(format!(
                    "Article '{}' lists unknown related article '{}'",
                    article.slug, related
                ));
            }
        }
    }

    for project in store.projects() {
        if let Some(Link::Internal(path)) = &project.link {
            if !internal_target_exists(path, store) {
                report.errors.push(format!(
                    "Project {} ('{}') links to missing page {}",
                    project.id, project.title, path
                ));
            }
        }
    }

    for option in store.nav() {
        if let NavTarget::Route(path) = &option.target {
            if !internal_target_exists(path, store) {
                report.errors.push(format!(
                    "Nav option '{}' points at missing page {}",
                    option.name, path
                ));
            }
        }
    }
}

fn check_categories(store: &ContentStore, report: &mut ValidationReport) {
    for category in Category::ALL {
        if store.projects_in(category).is_empty() {
            report.warnings.push(format!("Tab '{}' has no projects", category.label()));
        }
    }
}

/// Every image reference in the store, deduplicated
fn image_references(store: &ContentStore) -> BTreeSet<&str> {
    let mut refs = BTreeSet::new();
    refs.insert(store.profile().portrait.as_str());
    for article in store.articles() {
        refs.insert(article.hero_image.as_str());
        collect_block_images(&article.content, &mut refs);
    }
    for study in store.studies() {
        refs.insert(study.hero_image.as_str());
        collect_block_images(&study.sections, &mut refs);
    }
    for project in store.projects() {
        refs.insert(project.image.as_str());
    }
    refs.remove("");
    refs
}

fn collect_block_images<'a>(blocks: &'a [ContentBlock], refs: &mut BTreeSet<&'a str>) {
    for block in blocks {
        if let ContentBlock::Image { src, .. } = block {
            refs.insert(src.as_str());
        }
    }
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}

/// Read just enough of an image to learn its dimensions
fn image_size(path: &Path) -> anyhow::Result<(u32, u32)> {
    image::image_dimensions(path).with_context(|| format!("cannot decode {}", path.display()))
}

fn check_assets(assets_dir: &Path, store: &ContentStore, report: &mut ValidationReport) {
    let mut referenced: HashSet<PathBuf> = HashSet::new();

    for reference in image_references(store) {
        let Some(relative) = reference.strip_prefix(ASSETS_URL_PREFIX) else {
            // Remote or otherwise opaque references are not ours to check
            continue;
        };
        let path = assets_dir.join(relative);

        if !path.is_file() {
            report.warnings.push(format!("Missing asset {} ({})", reference, path.display()));
            continue;
        }

        if is_image(&path) {
            if let Err(err) = image_size(&path) {
                report.warnings.push(format!("{:#}", err));
            }
        }
        referenced.insert(path);
    }

    if !assets_dir.is_dir() {
        return;
    }

    let unreferenced = WalkDir::new(assets_dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            let name = entry.file_name().to_string_lossy();
            !name.starts_with('.')
        })
        .filter(|entry| is_image(entry.path()) && !referenced.contains(entry.path()))
        .count();

    if unreferenced > 0 {
        report.info.push(format!(
            "{} image(s) in {} are not referenced by any content",
            unreferenced,
            assets_dir.display()
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use folio_core::config::parse_site_toml_str;
    use folio_core::{Article, NavOption, ProjectCard};
    use std::fs;
    use tempfile::TempDir;

    fn config() -> SiteConfig {
        parse_site_toml_str(
            r##"
[site]
title = "Field Notes"
author = "Rowan Vale"
tagline = "Designer"
email = "hello@example.com"
domain = "example.com"
accent_color = "#ff6b35"
"##,
        )
        .unwrap()
    }

    fn article(slug: &str, related: &[&str], content: Vec<ContentBlock>) -> Article {
        Article {
            slug: slug.into(),
            title: "Title".into(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            read_time: "1 min read".into(),
            author: "Rowan Vale".into(),
            hero_image: String::new(),
            content,
            tags: vec![],
            related: related.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn project(id: u32, link: Option<Link>) -> ProjectCard {
        ProjectCard {
            id,
            title: format!("Project {}", id),
            subtitle: String::new(),
            tags: vec![],
            image: "https://cdn.example.com/p.png".into(),
            link,
            category: Category::Prototype,
        }
    }

    fn store_with(
        articles: Vec<Article>,
        projects: Vec<ProjectCard>,
        nav: Vec<NavOption>,
    ) -> ContentStore {
        let builtin = ContentStore::builtin();
        ContentStore::new(
            builtin.profile().clone(),
            articles,
            projects,
            builtin.studies().to_vec(),
            builtin.experience().to_vec(),
            nav,
        )
    }

    /// 1x1 PNG
    fn write_png(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        image::RgbImage::new(1, 1).save(path).unwrap();
    }

    #[test]
    fn test_builtin_content_has_no_errors() {
        let dir = TempDir::new().unwrap();
        let report = validate_site(dir.path(), &config(), &ContentStore::builtin());
        assert!(report.is_ok(), "{:?}", report.errors);
        // No assets directory, so every local image is missing
        assert!(report.warnings.iter().any(|w| w.starts_with("Missing asset")));
        assert!(report.info[0].contains("articles"));
    }

    #[test]
    fn test_dangling_related_slug_is_error() {
        let store = store_with(
            vec![article("a", &["ghost"], vec![ContentBlock::paragraph("x")])],
            vec![],
            vec![],
        );
        let report = validate_site(Path::new("."), &config(), &store);
        assert!(!report.is_ok());
        assert!(report.errors.iter().any(|e| e.contains("'ghost'")));
    }

    #[test]
    fn test_broken_internal_links_are_errors() {
        let store = store_with(
            vec![],
            vec![
                project(1, Some(Link::Internal("/article/missing".into()))),
                project(2, Some(Link::Internal("/nowhere".into()))),
                project(3, Some(Link::External("https://example.com".into()))),
            ],
            vec![NavOption::route("Blog", "pen", "/blog")],
        );
        let report = validate_site(Path::new("."), &config(), &store);
        assert_eq!(report.errors.len(), 3, "{:?}", report.errors);
        assert!(report.errors.iter().any(|e| e.contains("/article/missing")));
        assert!(report.errors.iter().any(|e| e.contains("Nav option 'Blog'")));
    }

    #[test]
    fn test_duplicates_and_empty_articles_are_errors() {
        let store = store_with(
            vec![
                article("same", &[], vec![ContentBlock::paragraph("x")]),
                article("same", &[], vec![]),
            ],
            vec![project(1, None), project(1, None)],
            vec![],
        );
        let report = validate_site(Path::new("."), &config(), &store);
        assert!(report.errors.iter().any(|e| e.contains("Duplicate article slug 'same'")));
        assert!(report.errors.iter().any(|e| e.contains("Duplicate project id 1")));
        assert!(report.errors.iter().any(|e| e.contains("has no content")));
    }

    #[test]
    fn test_unknown_blocks_and_empty_tabs_warn() {
        let store = store_with(
            vec![article(
                "a",
                &[],
                vec![ContentBlock::paragraph("x"), ContentBlock::Unknown],
            )],
            vec![project(1, None)],
            vec![],
        );
        let report = validate_site(Path::new("."), &config(), &store);
        assert!(report.is_ok());
        assert!(report.warnings.iter().any(|w| w.contains("unknown kind")));
        assert!(report.warnings.iter().any(|w| w == "Tab 'Figma' has no projects"));
    }

    #[test]
    fn test_asset_checks() {
        let dir = TempDir::new().unwrap();
        let assets = dir.path().join("assets");
        write_png(&assets.join("good.png"));
        write_png(&assets.join("orphan.png"));
        fs::write(assets.join("broken.png"), b"not a png").unwrap();

        let store = store_with(
            vec![article(
                "a",
                &[],
                vec![
                    ContentBlock::image("/assets/good.png", "good", None),
                    ContentBlock::image("/assets/broken.png", "broken", None),
                    ContentBlock::image("/assets/missing.png", "missing", None),
                    ContentBlock::image("https://cdn.example.com/remote.png", "remote", None),
                ],
            )],
            vec![],
            vec![],
        );

        let report = validate_site(dir.path(), &config(), &store);
        let asset_warnings: Vec<&String> = report
            .warnings
            .iter()
            .filter(|w| w.contains(".png"))
            .collect();

        assert!(
            asset_warnings
                .iter()
                .any(|w| w.contains("cannot decode") && w.contains("broken.png"))
        );
        assert!(asset_warnings.iter().any(|w| w.contains("Missing asset /assets/missing.png")));
        assert!(!asset_warnings.iter().any(|w| w.contains("good.png")));
        assert!(!asset_warnings.iter().any(|w| w.contains("remote.png")));
        assert!(report.info.iter().any(|i| i.starts_with("1 image(s)")));
    }
}
