//! Scaffolding error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for scaffolding operations.
pub type Result<T> = std::result::Result<T, ScaffoldError>;

/// Errors that can occur while resolving or generating a project.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// No project name or path was given.
    #[error("Missing arguments")]
    MissingArgument,

    /// Zero or both of `--app` / `--lib` were given.
    #[error("A project must be specified as one of app or lib.")]
    InvalidModeSelection,

    /// The path argument has no final component to name the project after.
    #[error("Cannot derive a project name from '{0}'")]
    InvalidProjectName(String),

    /// The target directory exists and `--force` was not given.
    #[error(
        "Project directory {} already exists - remove and try again or use --force",
        .0.display()
    )]
    DirectoryExists(PathBuf),

    /// A template resource could not be found.
    #[error("Template resource '{name}' not found at {}", .path.display())]
    ResourceMissing {
        /// Resource file name
        name: String,
        /// Where it was looked for
        path: PathBuf,
    },

    /// A filesystem mutation failed.
    #[error("Failed to {action} {}: {source}", .path.display())]
    Mutation {
        /// What was being done, e.g. "create directory"
        action: &'static str,
        /// Path the operation targeted
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Rendering a generated file failed.
    #[error("Failed to render {name}: {source}")]
    Render {
        /// Generated file name
        name: &'static str,
        /// Underlying template error
        #[source]
        source: handlebars::RenderError,
    },
}

impl ScaffoldError {
    /// Build a [`ScaffoldError::Mutation`] from an I/O error.
    pub fn mutation(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Mutation {
            action,
            path: path.into(),
            source,
        }
    }

    /// Whether this error was raised before any filesystem change.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingArgument
                | Self::InvalidModeSelection
                | Self::InvalidProjectName(_)
                | Self::DirectoryExists(_)
        )
    }
}
