use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use folio_core::Route;
use folio_generator::{GeneratedSite, RenderOptions, generate_site};
use folio_validator::validate_site;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use super::load_site;

const ASSETS_OUTPUT_DIR: &str = "assets";
const MANIFEST_FILE: &str = "manifest.json";

#[derive(Debug, Serialize)]
struct Manifest {
    title: String,
    domain: String,
    generated_at: DateTime<Utc>,
    routes: Vec<String>,
    assets: Vec<AssetEntry>,
}

#[derive(Debug, Serialize)]
struct AssetEntry {
    path: String,
    bytes: u64,
    sha256: String,
}

/// Build static site into `output`
pub async fn run(path: PathBuf, output: PathBuf) -> Result<()> {
    println!("🔨 Building static site...");
    println!("   Source: {}", path.display());
    println!("   Output: {}", output.display());
    println!();

    let (config, store) = load_site(&path)?;

    println!("✓ Loaded: {}", config.site.title);
    println!("  Articles: {}", store.articles().len());
    println!("  Projects: {}", store.projects().len());
    println!("  Case studies: {}", store.studies().len());
    println!();

    let report = validate_site(&path, &config, &store);
    for warning in &report.warnings {
        eprintln!("   ⚠ Warning: {}", warning);
    }
    if !report.is_ok() {
        for error in &report.errors {
            eprintln!("   ✗ {}", error);
        }
        anyhow::bail!(
            "Content has {} error(s)\nRun 'folio validate {}' for details",
            report.errors.len(),
            path.display()
        );
    }

    println!("📁 Creating output directory...");
    fs::create_dir_all(&output).context("Failed to create output directory")?;

    println!("📄 Rendering pages...");
    let site = generate_site(&config, &store, RenderOptions::default());
    write_site(&site, &output)?;
    println!("   ✓ Wrote {} pages", site.pages.len());

    println!("🎨 Copying assets...");
    let assets_src = path.join(&config.content.assets_dir);
    let assets = copy_assets(&assets_src, &output.join(ASSETS_OUTPUT_DIR))?;
    println!("   ✓ Copied {} asset files", assets.len());

    println!("🧾 Writing {}...", MANIFEST_FILE);
    let manifest = Manifest {
        title: config.site.title.clone(),
        domain: config.site.domain.clone(),
        generated_at: Utc::now(),
        routes: Route::static_routes(&store).iter().map(Route::path).collect(),
        assets,
    };
    let json = serde_json::to_string_pretty(&manifest).context("Failed to serialize manifest")?;
    fs::write(output.join(MANIFEST_FILE), json).context("Failed to write manifest.json")?;

    println!();
    println!("✅ Build complete!");
    println!("   Output: {}", output.display());
    println!();
    println!("To test locally:");
    println!("   cd {} && python3 -m http.server 8000", output.display());
    println!();

    Ok(())
}

/// Write rendered pages and generated static files under `output`
fn write_site(site: &GeneratedSite, output: &Path) -> Result<()> {
    let files = site
        .pages
        .iter()
        .map(|(path, html)| (path, html.as_bytes()))
        .chain(site.assets.iter().map(|(path, data)| (path, data.as_slice())));

    for (relative, data) in files {
        let dst = output.join(relative);
        if let Some(parent) = dst.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&dst, data).with_context(|| format!("Failed to write {}", dst.display()))?;
        debug!(file = %dst.display(), bytes = data.len(), "wrote file");
    }

    Ok(())
}

fn sha256_hex(data: &[u8]) -> String {
    Sha256::digest(data)
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

/// Copy every non-hidden file under `src` into `dst`, keeping the layout.
///
/// A missing source directory copies nothing. Entries come back sorted by
/// path so the manifest is stable between builds.
fn copy_assets(src: &Path, dst: &Path) -> Result<Vec<AssetEntry>> {
    let mut entries = Vec::new();
    if !src.is_dir() {
        debug!(dir = %src.display(), "no assets directory");
        return Ok(entries);
    }

    for entry in WalkDir::new(src).sort_by_file_name() {
        let entry = entry.context("Failed to read assets directory")?;
        if !entry.file_type().is_file() || entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(src)
            .context("Asset outside assets directory")?;
        let target = dst.join(relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }

        let data = fs::read(entry.path())
            .with_context(|| format!("Failed to read {}", entry.path().display()))?;
        fs::write(&target, &data)
            .with_context(|| format!("Failed to copy {}", entry.path().display()))?;

        let url_path = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        entries.push(AssetEntry {
            path: format!("/{}/{}", ASSETS_OUTPUT_DIR, url_path),
            bytes: data.len() as u64,
            sha256: sha256_hex(&data),
        });
    }

    Ok(entries)
}
