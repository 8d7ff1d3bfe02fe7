//! Workspace detection

use crate::core::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Tag database written by `gtags` at the root of an indexed tree
pub const GTAGS_FILE: &str = "GTAGS";

/// The source tree both external tools run in
#[derive(Debug, Clone)]
pub struct Workspace {
    /// Absolute path used as the tools' working directory
    pub root: PathBuf,
    /// Whether a `GTAGS` database was found at `root`
    pub indexed: bool,
}

impl Workspace {
    /// Detect the workspace from a path (searches upward for `GTAGS`)
    ///
    /// Falls back to `start_path` itself when no database exists anywhere
    /// above it, so `doctor` can still report the missing index.
    pub fn detect(start_path: &Path) -> Result<Self> {
        let start = start_path.canonicalize().map_err(|_| Error::NoWorkspace {
            path: start_path.to_path_buf(),
        })?;

        if !start.is_dir() {
            return Err(Error::NoWorkspace { path: start });
        }

        let mut current = start.as_path();
        loop {
            if current.join(GTAGS_FILE).is_file() {
                return Ok(Self {
                    root: current.to_path_buf(),
                    indexed: true,
                });
            }
            match current.parent() {
                Some(parent) => current = parent,
                None => break,
            }
        }

        Ok(Self {
            root: start,
            indexed: false,
        })
    }

    /// Resolve a tool-relative filename against the workspace root
    pub fn resolve(&self, filename: &str) -> PathBuf {
        let path = Path::new(filename);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_detect_finds_gtags_above() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(GTAGS_FILE), b"").unwrap();
        let nested = temp.path().join("src").join("lib");
        std::fs::create_dir_all(&nested).unwrap();

        let ws = Workspace::detect(&nested).unwrap();
        assert!(ws.indexed);
        assert_eq!(ws.root, temp.path().canonicalize().unwrap());
    }

    #[test]
    fn test_detect_without_gtags() {
        let temp = TempDir::new().unwrap();
        let ws = Workspace::detect(temp.path()).unwrap();
        assert!(!ws.indexed);
        assert_eq!(ws.root, temp.path().canonicalize().unwrap());
    }

    #[test]
    fn test_detect_missing_dir() {
        let temp = TempDir::new().unwrap();
        let result = Workspace::detect(&temp.path().join("nope"));
        assert!(matches!(result, Err(Error::NoWorkspace { .. })));
    }

    #[test]
    fn test_resolve_relative() {
        let ws = Workspace {
            root: PathBuf::from("/src/tree"),
            indexed: true,
        };
        assert_eq!(ws.resolve("a/b.c"), PathBuf::from("/src/tree/a/b.c"));
        assert_eq!(ws.resolve("/abs/x.c"), PathBuf::from("/abs/x.c"));
    }
}
