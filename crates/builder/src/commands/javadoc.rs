//! Unified API documentation build and landing-page promotion.
//!
//! The generator writes frame-based output where `index.html` is the
//! frameset and `overview-summary.html` is the "all packages" overview.
//! After generation the overview becomes the landing page: `index.html`
//! is moved aside to `overview-frames.html`, then
//! `overview-summary.html` is copied over `index.html`. The promotion is
//! not idempotent; regenerate the documentation before re-running it.

use anyhow::{bail, Context, Result};
use std::path::Path;
use std::process::Command;

/// Package excluded from the unified documentation set.
const EXCLUDED_PACKAGE: &str = "org.graalvm.polyglot.tck";

/// Output directory under the suite root.
const JAVADOC_DIR: &str = "javadoc";

/// Build the API documentation for all packages, then promote the
/// overview page to be the site landing page.
pub fn run(suite_dir: &Path, extra_args: &[String]) -> Result<()> {
    generate(suite_dir, extra_args)?;
    promote_landing_page(&suite_dir.join(JAVADOC_DIR))
}

/// Invoke the host build tool's unified documentation generation.
fn generate(suite_dir: &Path, extra_args: &[String]) -> Result<()> {
    println!("=== Building unified javadoc ===");

    let status = Command::new("mx")
        .args(["javadoc", "--unified", "--exclude-packages", EXCLUDED_PACKAGE])
        .args(extra_args)
        .current_dir(suite_dir)
        .status()
        .context("Failed to run mx javadoc")?;

    if !status.success() {
        bail!("mx javadoc failed");
    }
    Ok(())
}

/// Make the "all packages" overview serve as the landing page.
///
/// The original frame-based index stays available as
/// `overview-frames.html`.
pub fn promote_landing_page(javadoc_dir: &Path) -> Result<()> {
    let index = javadoc_dir.join("index.html");
    let frames = javadoc_dir.join("overview-frames.html");
    let summary = javadoc_dir.join("overview-summary.html");

    std::fs::rename(&index, &frames).with_context(|| {
        format!("Failed to move {} to {}", index.display(), frames.display())
    })?;
    std::fs::copy(&summary, &index).with_context(|| {
        format!("Failed to copy {} to {}", summary.display(), index.display())
    })?;

    println!("  Landing page: {}", index.display());
    Ok(())
}
