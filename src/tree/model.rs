//! Reference tree model
//!
//! Owns the session's root list. Readers take a snapshot (an `Arc` of the
//! list) and never observe a half-applied mutation; writers build the new
//! list and swap it in under the write lock. Expansion runs the external
//! tools outside the lock.
//!
//! @module tree/model

use super::events::{TreeEvent, TreeEvents};
use super::expand::{expand, ExpandTarget};
use super::node::{NodeKey, ReferenceNode};
use crate::core::error::Result;
use crate::engine::Engine;
use parking_lot::RwLock;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::info;

/// Result of tracking a new symbol
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppendOutcome {
    /// New roots, now at the front of the list
    Added(Vec<ReferenceNode>),
    /// Every resulting root was already tracked; nothing changed
    AlreadyTracked,
    /// The symbol produced no nodes; nothing changed
    NoReferences,
}

impl AppendOutcome {
    /// The node a UI would reveal after the append
    pub fn first(&self) -> Option<&ReferenceNode> {
        match self {
            AppendOutcome::Added(nodes) => nodes.first(),
            _ => None,
        }
    }
}

pub struct ReferenceTree {
    engine: Engine,
    roots: RwLock<Arc<Vec<ReferenceNode>>>,
    events: TreeEvents,
}

impl ReferenceTree {
    pub fn new(engine: Engine) -> Self {
        Self {
            engine,
            roots: RwLock::new(Arc::new(Vec::new())),
            events: TreeEvents::default(),
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Current roots, most recently added first
    pub fn roots(&self) -> Arc<Vec<ReferenceNode>> {
        Arc::clone(&self.roots.read())
    }

    pub fn subscribe(&self) -> broadcast::Receiver<TreeEvent> {
        self.events.subscribe()
    }

    /// Children of `node`, computed on demand
    pub fn children(&self, node: &ReferenceNode) -> Result<Vec<ReferenceNode>> {
        expand(&self.engine, ExpandTarget::Node(node), false)
    }

    /// Track `symbol` as new root(s)
    pub fn append_root(&self, symbol: &str) -> Result<AppendOutcome> {
        let new_roots = expand(&self.engine, ExpandTarget::Symbol(symbol), true)?;
        if new_roots.is_empty() {
            info!(symbol, "No references found");
            return Ok(AppendOutcome::NoReferences);
        }

        let added = {
            let mut guard = self.roots.write();
            let tracked: HashSet<NodeKey> = guard.iter().map(ReferenceNode::key).collect();
            let fresh: Vec<ReferenceNode> = new_roots
                .into_iter()
                .filter(|n| !tracked.contains(&n.key()))
                .collect();

            if fresh.is_empty() {
                return Ok(AppendOutcome::AlreadyTracked);
            }

            let mut next = Vec::with_capacity(fresh.len() + guard.len());
            next.extend(fresh.iter().cloned());
            next.extend(guard.iter().cloned());
            *guard = Arc::new(next);
            fresh
        };

        self.events.broadcast(TreeEvent::RootsAdded { count: added.len() });
        Ok(AppendOutcome::Added(added))
    }

    /// Drop the root(s) at `node`'s position; returns how many were removed
    pub fn remove_root(&self, node: &ReferenceNode) -> usize {
        let key = node.key();
        let removed = {
            let mut guard = self.roots.write();
            let before = guard.len();
            let next: Vec<ReferenceNode> = guard.iter().filter(|n| n.key() != key).cloned().collect();
            let removed = before - next.len();
            *guard = Arc::new(next);
            removed
        };

        self.events.broadcast(TreeEvent::RootRemoved);
        removed
    }

    /// Forget every root
    pub fn clear(&self) {
        *self.roots.write() = Arc::new(Vec::new());
        self.events.broadcast(TreeEvent::Cleared);
    }
}
