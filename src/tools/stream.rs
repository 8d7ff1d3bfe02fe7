//! Streamed tool invocation
//!
//! Used for long listings (completion tags) where results should become
//! visible batch by batch instead of after the process exits.

use crate::core::error::{Error, Result};
use crate::parse::LineSplitter;
use std::path::Path;
use std::process::Stdio;
use tokio::io::AsyncReadExt;
use tokio::process::Command;
use tracing::debug;

const CHUNK_SIZE: usize = 8 * 1024;

/// How a streamed invocation ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamOutcome {
    /// Exit code (`None` if killed by a signal)
    pub code: Option<i32>,
    /// Everything written to stderr
    pub stderr: String,
    /// Partial line left after the last newline
    pub trailing: Option<String>,
}

impl StreamOutcome {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Run `program`, handing each batch of completed stdout lines to `on_lines`
///
/// The child is killed if the returned future is dropped, so aborting the
/// task that awaits it cancels the invocation.
pub async fn stream_lines<F>(
    program: &str,
    args: &[String],
    cwd: &Path,
    mut on_lines: F,
) -> Result<StreamOutcome>
where
    F: FnMut(Vec<String>),
{
    debug!(program, ?args, "Streaming tool output");

    let mut child = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|source| Error::ToolSpawn {
            program: program.to_string(),
            source,
        })?;

    let mut stdout = child.stdout.take().ok_or_else(|| Error::ToolFailed {
        program: program.to_string(),
        code: None,
        stderr: "stdout not captured".to_string(),
    })?;
    let stderr_pipe = child.stderr.take();

    let stderr_task = tokio::spawn(async move {
        let mut stderr = String::new();
        if let Some(mut pipe) = stderr_pipe {
            // A read error just truncates the captured text
            let _ = pipe.read_to_string(&mut stderr).await;
        }
        stderr
    });

    let mut splitter = LineSplitter::new();
    let mut buf = vec![0u8; CHUNK_SIZE];
    loop {
        let n = stdout.read(&mut buf).await?;
        if n == 0 {
            break;
        }
        let lines = splitter.push_bytes(&buf[..n]);
        if !lines.is_empty() {
            on_lines(lines);
        }
    }

    let status = child.wait().await?;
    let stderr = stderr_task.await.unwrap_or_default();

    Ok(StreamOutcome {
        code: status.code(),
        stderr,
        trailing: splitter.finish(),
    })
}
