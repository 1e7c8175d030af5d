//! python-new-project library
//!
//! Resolves a project name or path into a [`ResolvedProject`] and materializes a
//! Python project skeleton for it with [`NewCommand`], rolling back on failure.

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::cognitive_complexity)]
#![allow(clippy::multiple_crate_versions)]

pub mod commands;
pub mod config;
pub mod error;
pub mod observability;
pub mod resolver;
pub mod rollback;
pub mod templates;

use serde::{Deserialize, Serialize};

pub use commands::NewCommand;
pub use config::Settings;
pub use error::{Result, ScaffoldError};
pub use resolver::{Invocation, ResolvedProject};
pub use rollback::RollbackGuard;
pub use templates::{ProjectTemplate, ResourceDir, TemplateManifest};

/// Layout of the generated project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectKind {
    /// Deployable application: `app/` package and a `Pipfile`
    App,
    /// Distributable library: `<name>/` package and a `setup.py`
    Lib,
}

impl ProjectKind {
    /// Name of the main source directory for a project called `project_name`
    #[must_use]
    pub fn source_dir(self, project_name: &str) -> &str {
        match self {
            Self::App => "app",
            Self::Lib => project_name,
        }
    }
}

impl std::fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::App => f.write_str("app"),
            Self::Lib => f.write_str("lib"),
        }
    }
}
