use anyhow::Result;
use folio_validator::{ValidationReport, validate_site};
use std::path::PathBuf;

use super::load_site;

pub async fn run(path: PathBuf) -> Result<()> {
    println!("🔍 Validating site: {}", path.display());

    let (config, store) = load_site(&path)?;
    println!("✓ Loaded: {}", config.site.title);

    let report = validate_site(&path, &config, &store);
    print_report(&report);

    if !report.is_ok() {
        anyhow::bail!("Validation failed with {} error(s)", report.errors.len());
    }

    println!("\n✅ Site is valid");
    Ok(())
}

fn print_report(report: &ValidationReport) {
    for line in &report.info {
        println!("   ℹ {}", line);
    }
    for warning in &report.warnings {
        println!("   ⚠ {}", warning);
    }
    for error in &report.errors {
        eprintln!("   ✗ {}", error);
    }
}
