//! Installation and index presence checks
//!
//! None of these stop the engine: a failing check produces an advisory
//! and the queries simply return less.
//!
//! @module check

use crate::core::config::Config;
use crate::core::error::Error;
use crate::core::workspace::GTAGS_FILE;
use crate::tools::ToolRunner;
use parking_lot::Mutex;
use serde::Serialize;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{info, warn};

pub const INDEXER_REQUIRED: &str = "GNU Global is required.";
pub const TAGGER_REQUIRED: &str = "Universal Ctags is required.";
pub const INDEX_MISSING: &str = "GTAGS is not generated, use \"gtags\" to generate tag files for global.";

/// Delivers advisories unless warnings are suppressed
pub struct Notifier {
    suppressed: bool,
    delivered: Mutex<Vec<String>>,
}

impl Notifier {
    pub fn new(suppressed: bool) -> Self {
        Self {
            suppressed,
            delivered: Mutex::new(Vec::new()),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.suppress_warnings)
    }

    pub fn notify(&self, message: impl Into<String>) {
        let message = message.into();
        if self.suppressed {
            info!(%message, "Advisory suppressed");
            return;
        }
        warn!("{}", message);
        self.delivered.lock().push(message);
    }

    /// Advisories delivered so far
    pub fn delivered(&self) -> Vec<String> {
        self.delivered.lock().clone()
    }
}

/// Outcome of one check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub name: &'static str,
    pub ok: bool,
    /// Version line or advisory text
    pub detail: String,
}

fn first_line(s: &str) -> String {
    s.lines().next().unwrap_or_default().trim().to_string()
}

fn stderr_of(err: &Error) -> String {
    match err {
        Error::ToolFailed { stderr, .. } => stderr.clone(),
        other => other.to_string(),
    }
}

fn advisory(base: &str, extra: &str) -> String {
    if extra.is_empty() {
        base.to_string()
    } else {
        format!("{base} {extra}")
    }
}

pub fn check_indexer(runner: &dyn ToolRunner, config: &Config, notifier: &Notifier) -> CheckReport {
    match runner.run(&config.indexer, &["--version".to_string()]) {
        Ok(stdout) => CheckReport {
            name: "indexer",
            ok: true,
            detail: first_line(&stdout),
        },
        Err(e) => {
            let message = advisory(INDEXER_REQUIRED, &stderr_of(&e));
            notifier.notify(message.clone());
            CheckReport {
                name: "indexer",
                ok: false,
                detail: message,
            }
        }
    }
}

pub fn check_tagger(runner: &dyn ToolRunner, config: &Config, notifier: &Notifier) -> CheckReport {
    let message = match runner.run(&config.tagger, &["--version".to_string()]) {
        Ok(stdout) if stdout.contains("Universal Ctags") => {
            return CheckReport {
                name: "tagger",
                ok: true,
                detail: first_line(&stdout),
            }
        }
        Ok(_) => TAGGER_REQUIRED.to_string(),
        Err(e) => advisory(TAGGER_REQUIRED, &stderr_of(&e)),
    };

    notifier.notify(message.clone());
    CheckReport {
        name: "tagger",
        ok: false,
        detail: message,
    }
}

/// A missing index is advised; an unreadable one triggers an incremental update
pub fn check_index(runner: &dyn ToolRunner, config: &Config, root: &Path, notifier: &Notifier) -> CheckReport {
    let path = root.join(GTAGS_FILE);
    match std::fs::metadata(&path) {
        Ok(_) => CheckReport {
            name: "index",
            ok: true,
            detail: path.display().to_string(),
        },
        Err(e) if e.kind() == ErrorKind::NotFound => {
            notifier.notify(INDEX_MISSING);
            CheckReport {
                name: "index",
                ok: false,
                detail: INDEX_MISSING.to_string(),
            }
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Index unreadable, updating");
            let updated = runner.run(&config.indexer, &["-u".to_string()]);
            CheckReport {
                name: "index",
                ok: updated.is_ok(),
                detail: e.to_string(),
            }
        }
    }
}

/// Run every check in order
pub fn precheck(runner: &dyn ToolRunner, config: &Config, root: &Path, notifier: &Notifier) -> Vec<CheckReport> {
    vec![
        check_indexer(runner, config, notifier),
        check_tagger(runner, config, notifier),
        check_index(runner, config, root, notifier),
    ]
}
