//! Ambient plumbing shared by every component

pub mod config;
pub mod error;
pub mod workspace;

pub use config::Config;
pub use error::{Error, Result};
pub use workspace::Workspace;
