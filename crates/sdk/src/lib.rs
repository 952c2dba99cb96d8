//! Component metadata and registry for GraalVM distributions.
//!
//! A distribution is assembled out of independently built components:
//! languages and tools built on the embeddable-language framework, JVMCI
//! compiler extensions, and JDK-level additions. This crate holds the
//! descriptor model for those components, the registry the configuration
//! phase populates, and the JSON manifest loader that feeds it.
//!
//! ```text
//! <suite>/components/
//! ├── graal.json            <- one manifest per component
//! ├── inspector.json
//! └── ruby.json
//! ```
//!
//! Descriptors are passive data. Packaging code matches on [`Component`]
//! to pick a strategy per kind; generic traversal (collecting
//! documentation or license files) goes through [`Component::base`]
//! without knowing the kind.

pub mod component;
pub mod manifest;
pub mod registry;

pub use component::{
    Component, ComponentBase, ComponentKind, JvmciComponent, LauncherConfig, TruffleComponent,
};
pub use manifest::ManifestError;
pub use registry::{ComponentRegistry, RegistryError};
