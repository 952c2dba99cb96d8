//! Component descriptors for the assembled distribution.
//!
//! Every distributable unit is described by one [`Component`] value. The
//! kind tag decides the packaging strategy downstream; the shared
//! [`ComponentBase`] fields support generic traversal without matching
//! on the kind.

use serde::Deserialize;
use std::fmt;

/// How to assemble a runnable launcher for a component.
#[derive(Debug, Clone, Deserialize)]
pub struct LauncherConfig {
    /// Distributions placed on the launcher's classpath.
    pub jar_distributions: Vec<String>,
    /// Fully qualified class name the launcher invokes.
    pub main_class: String,
    /// Extra arguments for the launcher-building step.
    pub build_args: Vec<String>,
}

/// Fields shared by every component kind.
#[derive(Debug, Clone, Deserialize)]
pub struct ComponentBase {
    /// Human-readable display name (e.g. "Graal.js").
    pub name: String,
    /// Short identifier used for cross-referencing (e.g. "js").
    pub id: String,
    /// Relative paths of documentation files bundled into the distribution.
    pub documentation_files: Vec<String>,
    /// Relative paths of license files bundled into the distribution.
    pub license_files: Vec<String>,
    /// Relative paths of third-party license files.
    pub third_party_license_files: Vec<String>,
    /// Executable names this component contributes.
    #[serde(default)]
    pub provided_executables: Vec<String>,
    /// Distributions placed on the boot classpath.
    #[serde(default)]
    pub boot_jars: Vec<String>,
}

/// A component built on the embeddable-language framework.
///
/// Languages and tools share this shape; only the kind tag tells them
/// apart.
#[derive(Debug, Clone, Deserialize)]
pub struct TruffleComponent {
    #[serde(flatten)]
    pub base: ComponentBase,
    /// Distributions required by the framework runtime.
    pub truffle_jars: Vec<String>,
    /// Auxiliary distributions bundled alongside.
    #[serde(default)]
    pub support_distributions: Vec<String>,
    /// Launchers this component provides.
    #[serde(default)]
    pub launcher_configs: Vec<LauncherConfig>,
    /// Extra arguments for building the shared polyglot library.
    #[serde(default)]
    pub polyglot_library_build_args: Vec<String>,
}

/// A component extending the JVM's compiler interface.
#[derive(Debug, Clone, Deserialize)]
pub struct JvmciComponent {
    #[serde(flatten)]
    pub base: ComponentBase,
    /// Jars injected into the JVMCI classpath.
    #[serde(default)]
    pub jvmci_jars: Vec<String>,
}

/// A distributable unit of the assembled distribution.
///
/// Closed set of kinds; packaging code matches exhaustively. The
/// manifest tag is `kind`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Component {
    /// Generic component with no framework or JVM hooks.
    #[serde(rename = "component")]
    Base(ComponentBase),
    /// A language runtime built on the framework.
    Language(TruffleComponent),
    /// A diagnostic or instrumentation tool built on the framework.
    Tool(TruffleComponent),
    /// A JVMCI compiler extension.
    Jvmci(JvmciComponent),
    /// A component shipped as part of the JDK image itself.
    Jdk(ComponentBase),
}

/// Component kind tag, used for registry uniqueness scoping and listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    Component,
    Language,
    Tool,
    Jvmci,
    Jdk,
}

impl ComponentKind {
    /// Stable lowercase name, matching the manifest tag.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Component => "component",
            Self::Language => "language",
            Self::Tool => "tool",
            Self::Jvmci => "jvmci",
            Self::Jdk => "jdk",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.id())
    }
}

impl Component {
    /// Fields shared by every kind.
    #[must_use]
    pub fn base(&self) -> &ComponentBase {
        match self {
            Self::Base(base) | Self::Jdk(base) => base,
            Self::Language(truffle) | Self::Tool(truffle) => &truffle.base,
            Self::Jvmci(jvmci) => &jvmci.base,
        }
    }

    #[must_use]
    pub fn kind(&self) -> ComponentKind {
        match self {
            Self::Base(_) => ComponentKind::Component,
            Self::Language(_) => ComponentKind::Language,
            Self::Tool(_) => ComponentKind::Tool,
            Self::Jvmci(_) => ComponentKind::Jvmci,
            Self::Jdk(_) => ComponentKind::Jdk,
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.base().name
    }

    /// Short identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.base().id
    }
}
