//! Build commands for the CLI.
//!
//! Structure:
//! - `javadoc` - unified API documentation build + landing-page promotion
//! - `components` - registry listings
//! - `doctor` - host tool preflight checks

pub mod components;
pub mod doctor;
pub mod javadoc;

use anyhow::{Context, Result};
use clap::Subcommand;
use sdk::ComponentRegistry;
use std::path::Path;

/// Directory under the suite root holding component manifests.
pub const COMPONENTS_DIR: &str = "components";

#[derive(Subcommand)]
pub enum Commands {
    /// Build the API documentation for all packages.
    #[command(override_usage = "builder javadoc [SL args|@VM options]")]
    Javadoc {
        /// Arguments passed through to the documentation generator.
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Component registry queries.
    Components {
        #[command(subcommand)]
        cmd: ComponentsCmd,
    },
    /// Check that the host tools needed for a build are available.
    Doctor,
}

#[derive(Subcommand)]
pub enum ComponentsCmd {
    /// List registered components in registration order.
    List,
    /// Show the files each component bundles into the distribution.
    Files,
}

/// Configuration phase: load all component manifests and register them.
///
/// Every failure here is a build-configuration authoring mistake; the
/// error propagates out and aborts the run.
pub fn configure(suite_dir: &Path) -> Result<ComponentRegistry> {
    let manifest_dir = suite_dir.join(COMPONENTS_DIR);
    let mut registry = ComponentRegistry::new();
    for component in sdk::manifest::load_dir(&manifest_dir)? {
        registry
            .register(component)
            .context("invalid component configuration")?;
    }
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_manifest(dir: &Path, file: &str, kind: &str, name: &str, id: &str) {
        let json = format!(
            r#"{{
                "kind": "{kind}",
                "name": "{name}",
                "id": "{id}",
                "documentation_files": [],
                "license_files": [],
                "third_party_license_files": [],
                "truffle_jars": ["{id}_DIST"]
            }}"#
        );
        std::fs::write(dir.join(file), json).unwrap();
    }

    #[test]
    fn configure_registers_manifests_in_order() {
        let suite = tempfile::tempdir().unwrap();
        let manifests = suite.path().join(COMPONENTS_DIR);
        std::fs::create_dir(&manifests).unwrap();
        write_manifest(&manifests, "js.json", "language", "Graal.js", "js");
        write_manifest(&manifests, "inspector.json", "tool", "Chrome Inspector", "inspector");

        let registry = configure(suite.path()).unwrap();
        let ids: Vec<_> = registry.components().iter().map(sdk::Component::id).collect();
        assert_eq!(ids, vec!["inspector", "js"]);
    }

    #[test]
    fn configure_aborts_on_duplicate_registration() {
        let suite = tempfile::tempdir().unwrap();
        let manifests = suite.path().join(COMPONENTS_DIR);
        std::fs::create_dir(&manifests).unwrap();
        write_manifest(&manifests, "ruby-a.json", "language", "Ruby", "ruby");
        write_manifest(&manifests, "ruby-b.json", "language", "Ruby", "ruby2");

        assert!(configure(suite.path()).is_err());
    }

    #[test]
    fn configure_fails_without_manifest_dir() {
        let suite = tempfile::tempdir().unwrap();
        assert!(configure(suite.path()).is_err());
    }
}
