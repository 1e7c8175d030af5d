//! Shipped template resources
//!
//! Resources live in a directory installed alongside the binary. Lookup order:
//!
//! 1. The configured `resources_dir`, if any
//! 2. `<exe dir>/resources`
//! 3. `<exe dir>/../share/python-new-project/resources`
//! 4. The `resources/` directory bundled with this crate's sources
//!
//! The directory is only ever read.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, ScaffoldError};

/// Directory holding the template resources
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceDir {
    path: PathBuf,
}

impl ResourceDir {
    /// Use `path` as the resource directory
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resources bundled with the crate sources
    #[must_use]
    pub fn bundled() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("resources"))
    }

    /// Pick the first existing candidate directory.
    ///
    /// A configured directory is authoritative: it is used even if missing, so a
    /// typo surfaces as [`ScaffoldError::ResourceMissing`] rather than silently
    /// falling back. Otherwise, if nothing exists, the bundled path is returned.
    #[must_use]
    pub fn locate(configured: Option<&Path>) -> Self {
        if let Some(dir) = configured {
            return Self::new(dir);
        }

        let found = Self::install_candidates()
            .into_iter()
            .find(|dir| dir.is_dir())
            .map_or_else(Self::bundled, Self::new);

        debug!(dir = %found.path.display(), "using template resources");
        found
    }

    /// Install-relative candidate directories
    fn install_candidates() -> Vec<PathBuf> {
        let mut candidates = Vec::new();

        if let Some(exe_dir) = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
        {
            candidates.push(exe_dir.join("resources"));
            if let Some(prefix) = exe_dir.parent() {
                candidates.push(
                    prefix
                        .join("share")
                        .join("python-new-project")
                        .join("resources"),
                );
            }
        }

        candidates
    }

    /// Directory path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of resource `name`
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::ResourceMissing`] if it is not a file.
    pub fn resolve(&self, name: &str) -> Result<PathBuf> {
        let path = self.path.join(name);
        if path.is_file() {
            Ok(path)
        } else {
            Err(ScaffoldError::ResourceMissing {
                name: name.to_string(),
                path,
            })
        }
    }

    /// Copy resource `name` byte-for-byte to `dest`, returning bytes written
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::ResourceMissing`] if the resource is absent, or
    /// [`ScaffoldError::Mutation`] if the copy fails.
    pub fn copy_to(&self, name: &str, dest: &Path) -> Result<u64> {
        let source = self.resolve(name)?;
        let bytes = fs::copy(&source, dest)
            .map_err(|err| ScaffoldError::mutation("copy template to", dest, err))?;

        debug!(resource = name, dest = %dest.display(), bytes, "copied template");
        Ok(bytes)
    }
}
