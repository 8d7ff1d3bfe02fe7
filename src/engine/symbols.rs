//! Per-file declared-symbol tables
//!
//! One tagging-tool invocation per distinct file per correlation pass. The
//! cache lives only as long as the pass that built it.
//!
//! @module engine/symbols

use super::types::DeclaredSymbol;
use crate::parse::parse_tags;
use crate::tools::{tagger_args, ToolRunner};
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

/// filename -> declarations in tool emission order
pub type SymbolTables = HashMap<String, Vec<DeclaredSymbol>>;

/// Pass-scoped cache of tagging-tool output
pub struct FileSymbolCache<'a> {
    runner: &'a dyn ToolRunner,
    tagger: &'a str,
    tables: SymbolTables,
    /// Files the tagger failed on this pass; never retried
    failed: HashSet<String>,
}

impl<'a> FileSymbolCache<'a> {
    pub fn new(runner: &'a dyn ToolRunner, tagger: &'a str) -> Self {
        Self {
            runner,
            tagger,
            tables: HashMap::new(),
            failed: HashSet::new(),
        }
    }

    /// Fetch the table for `filename`, invoking the tagger only on first use
    ///
    /// A failed invocation leaves the file without a table, so its matches
    /// stay unenriched rather than failing the whole pass.
    pub fn get_or_fetch(&mut self, filename: &str) -> Option<&[DeclaredSymbol]> {
        if self.failed.contains(filename) {
            return None;
        }
        if !self.tables.contains_key(filename) {
            match self.runner.run(self.tagger, &tagger_args(filename)) {
                Ok(output) => {
                    let symbols = parse_tags(&output);
                    debug!(filename, symbols = symbols.len(), "Built symbol table");
                    self.tables.insert(filename.to_string(), symbols);
                }
                Err(e) => {
                    warn!(filename, error = %e, "Tagging tool failed, leaving file unenriched");
                    self.failed.insert(filename.to_string());
                    return None;
                }
            }
        }
        self.tables.get(filename).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn into_tables(self) -> SymbolTables {
        self.tables
    }
}

/// Build tables for every distinct filename (first occurrence order)
pub fn build_symbol_table<'f, I>(runner: &dyn ToolRunner, tagger: &str, filenames: I) -> SymbolTables
where
    I: IntoIterator<Item = &'f str>,
{
    let mut cache = FileSymbolCache::new(runner, tagger);
    for filename in filenames {
        cache.get_or_fetch(filename);
    }
    cache.into_tables()
}
