//! Parsers for the two external tools' text output
//!
//! Both grammars are permissive-drop: a line that does not fit is skipped,
//! never reported.

pub mod lines;
pub mod tags;
pub mod xref;

pub use lines::LineSplitter;
pub use tags::parse_tags;
pub use xref::parse_xref;
