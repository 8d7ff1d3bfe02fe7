//! Lazily expanded tree of references
//!
//! @module tree

pub mod events;
pub mod expand;
pub mod model;
pub mod node;

pub use events::{TreeEvent, TreeEvents};
pub use expand::{build_nodes, determine_label, expand, has_wildcard, ExpandTarget};
pub use model::{AppendOutcome, ReferenceTree};
pub use node::{NodeKey, ReferenceNode, PLACEHOLDER_KIND};
