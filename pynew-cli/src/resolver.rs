//! Argument resolution
//!
//! Turns the raw command-line intent into a [`ResolvedProject`]: where the project
//! goes, what it is called, which layout it gets and whether the target existed
//! before this run. All validation happens here, before anything touches disk.

use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use tracing::debug;

use crate::error::{Result, ScaffoldError};
use crate::ProjectKind;

/// Parsed command-line intent, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    /// Project name (relative to the working directory) or path
    pub target: Option<String>,
    /// `--app` was given
    pub app: bool,
    /// `--lib` was given
    pub lib: bool,
    /// `--force` was given
    pub force: bool,
}

/// A validated project target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedProject {
    name: String,
    dir: PathBuf,
    kind: ProjectKind,
    force: bool,
    already_existed: bool,
}

impl Invocation {
    /// Resolve against `cwd`.
    ///
    /// `default_kind` is used when neither `--app` nor `--lib` is present; without
    /// it exactly one of the two is required.
    ///
    /// # Errors
    ///
    /// Returns a validation error ([`ScaffoldError::is_validation`]) if the target
    /// is missing or unusable, the mode selection is ambiguous, or the directory
    /// exists and `--force` was not given.
    pub fn resolve(&self, cwd: &Path, default_kind: Option<ProjectKind>) -> Result<ResolvedProject> {
        let target = self.target.as_deref().ok_or(ScaffoldError::MissingArgument)?;

        let kind = match (self.app, self.lib, default_kind) {
            (true, false, _) => ProjectKind::App,
            (false, true, _) => ProjectKind::Lib,
            (false, false, Some(kind)) => kind,
            _ => return Err(ScaffoldError::InvalidModeSelection),
        };

        let (name, dir) = if is_path(target) {
            let dir = PathBuf::from(target);
            let name = dir
                .file_name()
                .and_then(|n| n.to_str())
                .ok_or_else(|| ScaffoldError::InvalidProjectName(target.to_string()))?
                .to_string();
            (name, dir)
        } else {
            if matches!(target, "" | "." | "..") {
                return Err(ScaffoldError::InvalidProjectName(target.to_string()));
            }
            (target.to_string(), cwd.join(target))
        };

        let already_existed = dir.exists();
        if already_existed && !self.force {
            return Err(ScaffoldError::DirectoryExists(dir));
        }

        debug!(name = %name, dir = %dir.display(), %kind, already_existed, "resolved project");

        Ok(ResolvedProject {
            name,
            dir,
            kind,
            force: self.force,
            already_existed,
        })
    }
}

impl ResolvedProject {
    /// Project name: the bare name, or the final component of the path
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Project root directory
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Layout to generate
    #[must_use]
    pub const fn kind(&self) -> ProjectKind {
        self.kind
    }

    /// Whether `--force` was given
    #[must_use]
    pub const fn force(&self) -> bool {
        self.force
    }

    /// Whether the project directory existed before this run
    #[must_use]
    pub const fn already_existed(&self) -> bool {
        self.already_existed
    }
}

/// A target containing a separator is a path, anything else a bare name
fn is_path(target: &str) -> bool {
    target.contains('/') || target.contains(MAIN_SEPARATOR)
}
