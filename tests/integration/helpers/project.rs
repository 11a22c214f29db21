use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub struct Project {
    pub root: TempDir,
}

impl Project {
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    pub fn url(&self) -> String {
        self.path().display().to_string()
    }

    pub fn read(&self, path: &str) -> String {
        let path = self.path().join(path);
        fs::read_to_string(&path).unwrap_or_else(|_| panic!("couldn't read file {path:?}"))
    }

    pub fn exists(&self, path: &str) -> bool {
        self.path().join(path).exists()
    }

    pub fn target_path(&self, path: &str) -> PathBuf {
        self.path().join(path)
    }

    pub fn is_empty(&self) -> bool {
        fs::read_dir(self.path())
            .map(|mut entries| entries.next().is_none())
            .unwrap_or(false)
    }
}
