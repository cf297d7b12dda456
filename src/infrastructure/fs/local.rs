//! Local Source Tree
//!
//! Implements the SourceTree port against a quest root on local disk.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::ports::SourceTree;

/// Quest root on the local file system
#[derive(Debug, Clone)]
pub struct LocalSourceTree {
    root: PathBuf,
}

impl LocalSourceTree {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, relative: &Path) -> PathBuf {
        self.root.join(relative)
    }
}

impl SourceTree for LocalSourceTree {
    fn is_file(&self, relative: &Path) -> bool {
        self.resolve(relative).is_file()
    }

    fn is_readable(&self, relative: &Path) -> bool {
        let path = self.resolve(relative);
        path.is_file() && File::open(&path).is_ok()
    }

    fn ensure_dir(&self, relative: &Path) -> io::Result<()> {
        std::fs::create_dir_all(self.resolve(relative))
    }

    fn remove_file(&self, relative: &Path) -> io::Result<()> {
        match std::fs::remove_file(self.resolve(relative)) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}
