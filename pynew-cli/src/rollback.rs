//! Scoped rollback for a partially generated project
//!
//! A [`RollbackGuard`] is taken before the project root is created. Unless it is
//! committed, dropping it deletes the project tree, but only when the tree did
//! not exist before this run. A directory entered with `--force` is never
//! removed, whatever state it is left in.

use std::fs;
use std::path::PathBuf;

use tracing::{info, warn};

/// Deletes a freshly created project tree on drop unless committed
#[derive(Debug)]
#[must_use = "dropping the guard immediately rolls the project back"]
pub struct RollbackGuard {
    root: PathBuf,
    owned: bool,
    armed: bool,
}

impl RollbackGuard {
    /// Guard `root`. `already_existed` must be captured before any mutation.
    pub fn new(root: impl Into<PathBuf>, already_existed: bool) -> Self {
        Self {
            root: root.into(),
            owned: !already_existed,
            armed: true,
        }
    }

    /// Keep everything that was generated.
    pub fn commit(mut self) {
        self.armed = false;
    }

    /// Whether dropping the guard now would delete the tree
    #[must_use]
    pub const fn removes_on_drop(&self) -> bool {
        self.armed && self.owned
    }
}

impl Drop for RollbackGuard {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }

        if !self.owned {
            warn!(
                dir = %self.root.display(),
                "leaving pre-existing project directory in place; it may be partially written"
            );
            return;
        }

        if !self.root.exists() {
            return;
        }

        info!(dir = %self.root.display(), "rolling back project directory");
        if let Err(err) = fs::remove_dir_all(&self.root) {
            warn!(dir = %self.root.display(), error = %err, "rollback failed");
        }
    }
}
