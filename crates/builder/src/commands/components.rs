//! Registry listings.
//!
//! Later build phases branch on the component kind to decide packaging;
//! these commands only enumerate what the configuration phase
//! registered.

use anyhow::Result;
use sdk::ComponentRegistry;

/// Print all registered components in registration order.
pub fn list(registry: &ComponentRegistry) -> Result<()> {
    if registry.is_empty() {
        println!("No components registered");
        return Ok(());
    }

    println!("Registered components:\n");
    for component in registry.components() {
        println!(
            "  {:16} {:10} {}",
            component.id(),
            component.kind(),
            component.name()
        );
    }

    println!();
    println!("  Total: {}", registry.len());
    Ok(())
}

/// Print the files each component bundles into the distribution.
///
/// Generic traversal: only the shared base fields are consulted, so
/// every kind is handled uniformly.
pub fn files(registry: &ComponentRegistry) -> Result<()> {
    for component in registry.components() {
        println!("{} ({})", component.name(), component.kind());
        let base = component.base();
        print_group("documentation", &base.documentation_files);
        print_group("licenses", &base.license_files);
        print_group("third-party licenses", &base.third_party_license_files);
        println!();
    }
    Ok(())
}

fn print_group(label: &str, paths: &[String]) {
    if paths.is_empty() {
        return;
    }
    println!("  {label}:");
    for path in paths {
        println!("    {path}");
    }
}
