//! Completion tag snapshot
//!
//! Streams `<indexer> -cT` in a background task. Batches become visible in
//! the snapshot as soon as their lines are complete, so completion works
//! (partially) before the listing finishes.
//!
//! @module complete

use crate::core::config::Config;
use crate::tools::stream::stream_lines;
use crate::tools::IndexerQuery;
use parking_lot::{Mutex, RwLock};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Where the background listing stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionStatus {
    Idle,
    Running,
    Ready,
    Cancelled,
    /// The listing could not be started or exited non-zero
    Failed(String),
}

#[derive(Debug)]
struct Shared {
    tags: Vec<String>,
    status: CompletionStatus,
    /// Bumped by every start and cancel; a task only writes while it owns the current one
    generation: u64,
}

impl Shared {
    /// Run `f` only if `generation` is still current
    fn update<F: FnOnce(&mut Shared)>(lock: &RwLock<Shared>, generation: u64, f: F) -> bool {
        let mut guard = lock.write();
        if guard.generation != generation {
            return false;
        }
        f(&mut guard);
        true
    }
}

pub struct CompletionCache {
    shared: Arc<RwLock<Shared>>,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl Default for CompletionCache {
    fn default() -> Self {
        Self::new()
    }
}

impl CompletionCache {
    pub fn new() -> Self {
        Self {
            shared: Arc::new(RwLock::new(Shared {
                tags: Vec::new(),
                status: CompletionStatus::Idle,
                generation: 0,
            })),
            task: Mutex::new(None),
        }
    }

    /// Start the listing when `config.completion` is on; returns whether it started
    pub fn start(&self, config: &Config, cwd: &Path) -> bool {
        if !config.completion {
            debug!("Completion disabled");
            return false;
        }
        self.start_with(&config.indexer, IndexerQuery::Completions.args(), cwd);
        true
    }

    /// Start streaming `program args`, replacing any running listing
    pub fn start_with(&self, program: &str, args: Vec<String>, cwd: &Path) {
        self.cancel();
        let generation = {
            let mut shared = self.shared.write();
            shared.generation += 1;
            shared.tags.clear();
            shared.status = CompletionStatus::Running;
            shared.generation
        };

        let shared = Arc::clone(&self.shared);
        let program = program.to_string();
        let cwd: PathBuf = cwd.to_path_buf();

        let handle = tokio::spawn(async move {
            let sink = Arc::clone(&shared);
            let result = stream_lines(&program, &args, &cwd, move |lines| {
                Shared::update(&sink, generation, |s| s.tags.extend(lines));
            })
            .await;

            let current = Shared::update(&shared, generation, |s| match result {
                Ok(outcome) if outcome.success() => {
                    if let Some(last) = outcome.trailing {
                        s.tags.push(last);
                    }
                    info!(tags = s.tags.len(), "Completion list ready");
                    s.status = CompletionStatus::Ready;
                }
                Ok(outcome) => {
                    let stderr = outcome.stderr.trim().to_string();
                    warn!(program = %program, code = ?outcome.code, %stderr, "Completion listing failed");
                    s.status = CompletionStatus::Failed(stderr);
                }
                Err(e) => {
                    warn!(program = %program, error = %e, "Completion listing failed");
                    s.status = CompletionStatus::Failed(e.to_string());
                }
            });
            if !current {
                debug!(generation, "Superseded completion listing discarded");
            }
        });

        *self.task.lock() = Some(handle);
    }

    /// Abort the running listing; the child process is killed with it
    pub fn cancel(&self) {
        if let Some(handle) = self.task.lock().take() {
            if !handle.is_finished() {
                handle.abort();
                let mut shared = self.shared.write();
                shared.generation += 1;
                shared.status = CompletionStatus::Cancelled;
                debug!("Completion listing cancelled");
            }
        }
    }

    /// Wait for the running listing to end
    pub async fn wait(&self) {
        let handle = self.task.lock().take();
        if let Some(handle) = handle {
            // JoinError only means the task was aborted
            let _ = handle.await;
        }
    }

    pub fn status(&self) -> CompletionStatus {
        self.shared.read().status.clone()
    }

    /// Tags collected so far
    pub fn snapshot(&self) -> Vec<String> {
        self.shared.read().tags.clone()
    }

    /// Collected tags starting with `prefix`
    pub fn matching(&self, prefix: &str) -> Vec<String> {
        self.shared
            .read()
            .tags
            .iter()
            .filter(|t| t.starts_with(prefix))
            .cloned()
            .collect()
    }
}

impl Drop for CompletionCache {
    fn drop(&mut self) {
        if let Some(handle) = self.task.get_mut().take() {
            handle.abort();
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn sh(script: &str) -> Vec<String> {
        vec!["-c".to_string(), script.to_string()]
    }

    #[tokio::test]
    async fn test_listing_flushes_trailing_on_success() {
        let cache = CompletionCache::new();
        cache.start_with("sh", sh("printf 'foo\\nfoo_init\\nbar'"), &std::env::temp_dir());
        cache.wait().await;

        assert_eq!(cache.status(), CompletionStatus::Ready);
        assert_eq!(cache.snapshot(), vec!["foo", "foo_init", "bar"]);
        assert_eq!(cache.matching("foo"), vec!["foo", "foo_init"]);
    }

    #[tokio::test]
    async fn test_failure_keeps_partial_lines_without_trailing() {
        let cache = CompletionCache::new();
        cache.start_with("sh", sh("printf 'foo\\nhalf'; echo 'no GTAGS' >&2; exit 1"), &std::env::temp_dir());
        cache.wait().await;

        assert_eq!(cache.status(), CompletionStatus::Failed("no GTAGS".to_string()));
        assert_eq!(cache.snapshot(), vec!["foo"]);
    }

    #[tokio::test]
    async fn test_cancel_stops_listing() {
        let cache = CompletionCache::new();
        cache.start_with("sh", sh("sleep 5; echo late"), &std::env::temp_dir());
        cache.cancel();
        cache.wait().await;

        assert_eq!(cache.status(), CompletionStatus::Cancelled);
        assert!(cache.snapshot().is_empty());
    }

    #[test]
    fn test_stale_generation_cannot_write() {
        let cache = CompletionCache::new();
        cache.shared.write().generation = 2;

        assert!(!Shared::update(&cache.shared, 1, |s| {
            s.tags.push("old".into());
            s.status = CompletionStatus::Ready;
        }));
        assert!(cache.snapshot().is_empty());
        assert_eq!(cache.status(), CompletionStatus::Idle);

        assert!(Shared::update(&cache.shared, 2, |s| s.tags.push("new".into())));
        assert_eq!(cache.snapshot(), vec!["new"]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_restart_discards_previous_listing() {
        let cache = CompletionCache::new();
        cache.start_with("sh", sh("while true; do echo old; sleep 0.01; done"), &std::env::temp_dir());
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;

        cache.start_with("sh", sh("printf 'new\\n'"), &std::env::temp_dir());
        cache.wait().await;
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;

        assert_eq!(cache.status(), CompletionStatus::Ready);
        assert_eq!(cache.snapshot(), vec!["new"]);
    }

    #[tokio::test]
    async fn test_disabled_by_config() {
        let cache = CompletionCache::new();
        assert!(!cache.start(&Config::default(), &std::env::temp_dir()));
        assert_eq!(cache.status(), CompletionStatus::Idle);
    }

    #[tokio::test]
    async fn test_missing_program_fails() {
        let cache = CompletionCache::new();
        cache.start_with("refgraph-no-such-indexer", Vec::new(), &std::env::temp_dir());
        cache.wait().await;
        assert!(matches!(cache.status(), CompletionStatus::Failed(_)));
    }
}
