//! Scripted tool runner for tests

use super::ToolRunner;
use crate::core::error::{Error, Result};
use parking_lot::Mutex;
use std::collections::HashMap;

/// Answers invocations from a table; unknown invocations print nothing
#[derive(Default)]
pub struct ScriptedRunner {
    outputs: HashMap<Vec<String>, String>,
    failures: HashMap<Vec<String>, String>,
    calls: Mutex<Vec<Vec<String>>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script `program args...` to print `stdout`
    pub fn on(mut self, program: &str, args: &[String], stdout: &str) -> Self {
        self.outputs.insert(key(program, args), stdout.to_string());
        self
    }

    /// Script `program args...` to exit with status 1 and `stderr`
    pub fn fail(mut self, program: &str, args: &[String], stderr: &str) -> Self {
        self.failures.insert(key(program, args), stderr.to_string());
        self
    }

    /// Every invocation so far, as `[program, args...]`
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().clone()
    }

    /// Number of invocations of `program` whose first argument is `flag`
    pub fn count(&self, program: &str, flag: &str) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|c| c[0] == program && c.get(1).map(String::as_str) == Some(flag))
            .count()
    }
}

impl ToolRunner for ScriptedRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<String> {
        let key = key(program, args);
        self.calls.lock().push(key.clone());
        if let Some(stderr) = self.failures.get(&key) {
            return Err(Error::ToolFailed {
                program: program.to_string(),
                code: Some(1),
                stderr: stderr.clone(),
            });
        }
        Ok(self.outputs.get(&key).cloned().unwrap_or_default())
    }
}

fn key(program: &str, args: &[String]) -> Vec<String> {
    std::iter::once(program.to_string())
        .chain(args.iter().cloned())
        .collect()
}
