//! Preflight checks for the host environment.

use anyhow::{bail, Result};
use std::path::Path;

/// Check that the tools and directories a build needs are present.
pub fn run(suite_dir: &Path) -> Result<()> {
    let mut ok = true;

    if which::which("mx").is_err() {
        eprintln!("[FAIL] missing `mx` in PATH");
        ok = false;
    } else {
        eprintln!("[OK] mx");
    }

    if suite_dir.is_dir() {
        eprintln!("[OK] {}", suite_dir.display());
    } else {
        eprintln!("[FAIL] missing suite directory: {}", suite_dir.display());
        ok = false;
    }

    let manifest_dir = suite_dir.join(super::COMPONENTS_DIR);
    if manifest_dir.is_dir() {
        eprintln!("[OK] {}", manifest_dir.display());
    } else {
        eprintln!(
            "[FAIL] missing component manifest directory: {}",
            manifest_dir.display()
        );
        ok = false;
    }

    if !ok {
        bail!("doctor checks failed");
    }
    Ok(())
}
