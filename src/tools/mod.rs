//! External tool invocation
//!
//! The engine never spawns processes directly; it goes through a
//! [`ToolRunner`] so tests can script tool output.
//!
//! @module tools

pub mod stream;

#[cfg(test)]
pub mod fake;

use crate::core::error::{Error, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::debug;

// =============================================================================
// RUNNER
// =============================================================================

/// Runs an external program to completion and returns its stdout
pub trait ToolRunner: Send + Sync {
    fn run(&self, program: &str, args: &[String]) -> Result<String>;
}

/// Blocking runner backed by `std::process::Command`
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    cwd: PathBuf,
}

impl ProcessRunner {
    /// Run tools with `cwd` as working directory (the workspace root)
    pub fn new(cwd: impl AsRef<Path>) -> Self {
        Self {
            cwd: cwd.as_ref().to_path_buf(),
        }
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }
}

impl ToolRunner for ProcessRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<String> {
        debug!(program, ?args, cwd = %self.cwd.display(), "Running tool");

        let output = Command::new(program)
            .args(args)
            .current_dir(&self.cwd)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| Error::ToolSpawn {
                program: program.to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(Error::ToolFailed {
                program: program.to_string(),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

// =============================================================================
// INDEXER QUERIES
// =============================================================================

/// The cross-reference queries the engine issues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexerQuery<'a> {
    /// `-x <symbol>`: definitions
    Definitions(&'a str),
    /// `-rx <symbol>`: references
    References(&'a str),
    /// `-sx <symbol>`: symbols matching anywhere (catches macro-like names)
    Symbols(&'a str),
    /// `-ix <pattern>`: case-insensitive definitions by pattern
    Fuzzy(&'a str),
    /// `-xf <filename>`: every definition in one file
    FileSymbols(&'a str),
    /// `-cT`: every tag name, for completion
    Completions,
}

impl IndexerQuery<'_> {
    pub fn args(&self) -> Vec<String> {
        let (flag, operand) = match self {
            IndexerQuery::Definitions(s) => ("-x", Some(*s)),
            IndexerQuery::References(s) => ("-rx", Some(*s)),
            IndexerQuery::Symbols(s) => ("-sx", Some(*s)),
            IndexerQuery::Fuzzy(p) => ("-ix", Some(*p)),
            IndexerQuery::FileSymbols(f) => ("-xf", Some(*f)),
            IndexerQuery::Completions => ("-cT", None),
        };
        let mut args = vec![flag.to_string()];
        args.extend(operand.map(str::to_string));
        args
    }
}

/// Tagging tool arguments for one file's declarations, in emission order
pub fn tagger_args(filename: &str) -> Vec<String> {
    ["--fields=+neK", "-o", "-", "--sort=no", filename]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
