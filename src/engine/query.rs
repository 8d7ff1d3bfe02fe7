//! Query front-ends
//!
//! Every entry point shares the parsers and the correlator; they differ in
//! which indexer query they issue and whether enrichment is worth its cost.
//!
//! @module engine/query

use super::correlate::correlate;
use super::fuzzy::fuzzy_pattern;
use super::range::{Position, TextRange};
use super::symbols::build_symbol_table;
use super::types::{RawMatch, Relation};
use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::workspace::Workspace;
use crate::parse::{parse_tags, parse_xref};
use crate::present::{DocumentSymbol, Location, SymbolCategory, SymbolInformation};
use crate::tools::{tagger_args, IndexerQuery, ProcessRunner, ToolRunner};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Logged when a tag is missing from its own line
pub const STALE_INDEX_WARNING: &str =
    "index might be out of date, run `global -u` to update it";

/// Drives the external tools and the correlation pipeline
#[derive(Clone)]
pub struct Engine {
    config: Config,
    runner: Arc<dyn ToolRunner>,
    root: PathBuf,
}

impl Engine {
    pub fn new(config: Config, runner: Arc<dyn ToolRunner>, root: impl Into<PathBuf>) -> Self {
        Self {
            config,
            runner,
            root: root.into(),
        }
    }

    /// Engine spawning real processes inside `workspace`
    pub fn for_workspace(config: Config, workspace: &Workspace) -> Self {
        let runner = Arc::new(ProcessRunner::new(&workspace.root));
        Self::new(config, runner, workspace.root.clone())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, filename: &str) -> PathBuf {
        let path = Path::new(filename);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    fn query(&self, query: IndexerQuery<'_>, relation: Relation) -> Result<Vec<RawMatch>> {
        let output = self.runner.run(&self.config.indexer, &query.args())?;
        Ok(parse_xref(&output, relation))
    }

    /// One correlation pass: fresh tables, then in-place enrichment
    fn enrich(&self, matches: &mut [RawMatch]) {
        let tables = build_symbol_table(
            self.runner.as_ref(),
            &self.config.tagger,
            matches.iter().map(|m| m.filename.as_str()),
        );
        correlate(matches, &tables);
    }

    // =========================================================================
    // EXACT SYMBOL
    // =========================================================================

    /// Definitions of `symbol`, unenriched
    pub fn raw_definitions(&self, symbol: &str) -> Result<Vec<RawMatch>> {
        self.query(IndexerQuery::Definitions(symbol), Relation::Definition)
    }

    /// Everything known about `symbol`, correlated
    ///
    /// Definitions first; with at least one, references follow. With none,
    /// the looser symbol query stands in so macro-like names still show up.
    pub fn references(&self, symbol: &str) -> Result<Vec<RawMatch>> {
        let mut matches = self.raw_definitions(symbol)?;

        let follow_up = if matches.is_empty() {
            IndexerQuery::Symbols(symbol)
        } else {
            IndexerQuery::References(symbol)
        };
        matches.extend(self.query(follow_up, Relation::ReferencedBy)?);

        self.enrich(&mut matches);
        debug!(symbol, matches = matches.len(), "Correlated references");
        Ok(matches)
    }

    /// Go-to-definition targets for `symbol`
    pub fn definitions(&self, symbol: &str) -> Result<Vec<Location>> {
        Ok(self
            .raw_definitions(symbol)?
            .into_iter()
            .map(|m| {
                let (range, found) = TextRange::locate(&m.content, &m.tag, m.line);
                if !found {
                    warn!(tag = %m.tag, file = %m.filename, line = m.line, "{}", STALE_INDEX_WARNING);
                }
                Location {
                    path: self.resolve(&m.filename),
                    range,
                }
            })
            .collect())
    }

    // =========================================================================
    // FILE SCOPED
    // =========================================================================

    /// All symbols defined in `filename`, correlated
    pub fn file_symbols(&self, filename: &str) -> Result<Vec<RawMatch>> {
        // Every -xf line is a definition site, so reclassification leaves it as is
        let mut matches = self.query(IndexerQuery::FileSymbols(filename), Relation::Definition)?;
        self.enrich(&mut matches);
        Ok(matches)
    }

    /// Outline straight from the tagging tool, struct members skipped
    pub fn outline(&self, filename: &str) -> Result<Vec<DocumentSymbol>> {
        let output = self.runner.run(&self.config.tagger, &tagger_args(filename))?;

        Ok(parse_tags(&output)
            .into_iter()
            .filter(|s| !s.is_struct_member())
            .map(|s| {
                let (range, _) = TextRange::locate(&s.declaration_text, &s.name, s.start_line);
                DocumentSymbol {
                    category: SymbolCategory::from_kind(&s.kind),
                    name: s.name,
                    detail: s.declaration_text,
                    kind: s.kind,
                    range,
                }
            })
            .collect())
    }

    // =========================================================================
    // FUZZY WORKSPACE SEARCH
    // =========================================================================

    /// Loose case-insensitive search
    ///
    /// Broad queries skip enrichment once the raw match count reaches
    /// `fuzzy_enrich_limit`.
    pub fn search(&self, query: &str) -> Result<Vec<RawMatch>> {
        let Some(pattern) = fuzzy_pattern(query, self.config.fuzzy_min_query) else {
            return Ok(Vec::new());
        };

        // -ix lists definitions only; tagged as such so reclassification keeps them
        let mut matches = self.query(IndexerQuery::Fuzzy(&pattern), Relation::Definition)?;
        if matches.len() < self.config.fuzzy_enrich_limit {
            self.enrich(&mut matches);
        } else {
            info!(query, matches = matches.len(), "Skipping enrichment for broad query");
        }
        Ok(matches)
    }

    /// Workspace symbol results for `query`
    pub fn workspace_symbols(&self, query: &str) -> Result<Vec<SymbolInformation>> {
        Ok(self
            .search(query)?
            .into_iter()
            .map(|m| {
                let character = m
                    .content
                    .find(&m.tag)
                    .map(|idx| m.content[..idx].chars().count() as u32)
                    .unwrap_or(0);
                SymbolInformation {
                    category: SymbolCategory::from_kind(&m.kind),
                    container: format!("line {}", m.line),
                    path: self.resolve(&m.filename),
                    position: Position {
                        line: m.line.saturating_sub(1),
                        character,
                    },
                    name: m.tag,
                }
            })
            .collect())
    }
}
