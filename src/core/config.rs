//! Configuration management

use crate::core::error::{Error, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Raw match count at which fuzzy workspace search stops enriching results
pub const FUZZY_ENRICH_LIMIT: usize = 512;

/// Shortest fuzzy query that is sent to the indexer
pub const FUZZY_MIN_QUERY: usize = 2;

/// Engine configuration
///
/// Passed explicitly into [`crate::engine::Engine::new`]; nothing in the
/// engine reads configuration on its own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Cross-reference indexer executable (GNU Global)
    pub indexer: String,
    /// Tagging tool executable (Universal Ctags)
    pub tagger: String,
    /// Fill the completion snapshot in the background
    pub completion: bool,
    /// Silence advisory notifications
    pub suppress_warnings: bool,
    /// Fuzzy search skips enrichment at or above this many raw matches
    pub fuzzy_enrich_limit: usize,
    /// Fuzzy queries shorter than this return nothing
    pub fuzzy_min_query: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indexer: "global".to_string(),
            tagger: "ctags".to_string(),
            completion: false,
            suppress_warnings: false,
            fuzzy_enrich_limit: FUZZY_ENRICH_LIMIT,
            fuzzy_min_query: FUZZY_MIN_QUERY,
        }
    }
}

impl Config {
    /// Load configuration from default location, then apply env overrides
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_path()?)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Load configuration from an explicit file (missing file means defaults)
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Apply `REFGRAPH_INDEXER` / `REFGRAPH_TAGGER` style overrides
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(indexer) = lookup("REFGRAPH_INDEXER").filter(|v| !v.is_empty()) {
            self.indexer = indexer;
        }
        if let Some(tagger) = lookup("REFGRAPH_TAGGER").filter(|v| !v.is_empty()) {
            self.tagger = tagger;
        }
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::refgraph_home()?.join("config.toml"))
    }

    /// Get the refgraph home directory
    pub fn refgraph_home() -> Result<PathBuf> {
        // Check REFGRAPH_HOME env var first
        if let Ok(home) = std::env::var("REFGRAPH_HOME") {
            return Ok(PathBuf::from(home));
        }

        ProjectDirs::from("dev", "refgraph", "refgraph")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or_else(|| Error::ConfigError {
                message: "Could not determine refgraph home directory".to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load_from(&temp.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.indexer, "global");
        assert_eq!(config.tagger, "ctags");
        assert_eq!(config.fuzzy_enrich_limit, 512);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "tagger = \"uctags\"\ncompletion = true\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.tagger, "uctags");
        assert!(config.completion);
        assert_eq!(config.indexer, "global");
        assert!(!config.suppress_warnings);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "indexer = [").unwrap();
        assert!(matches!(Config::load_from(&path), Err(Error::TomlParse(_))));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config.apply_overrides(|key| match key {
            "REFGRAPH_INDEXER" => Some("/opt/global/bin/global".to_string()),
            "REFGRAPH_TAGGER" => Some(String::new()),
            _ => None,
        });
        assert_eq!(config.indexer, "/opt/global/bin/global");
        assert_eq!(config.tagger, "ctags", "empty override is ignored");
    }
}
