//! refgraph - reference correlation on top of GNU Global and Universal Ctags
//!
//! Cross-reference lines from the indexer say where a tag occurs, not what
//! surrounds it. This crate correlates each line with the declarations the
//! tagging tool reports for its file, classifies it as definition,
//! reference or other, and serves the results as a lazily expanded
//! reference tree plus flat query front-ends.

pub mod check;
pub mod cli;
pub mod complete;
pub mod core;
pub mod engine;
pub mod output;
pub mod parse;
pub mod present;
pub mod tools;
pub mod tree;

pub use core::config::Config;
pub use core::error::{Error, Result};
pub use core::workspace::Workspace;
pub use engine::Engine;
pub use tree::ReferenceTree;
