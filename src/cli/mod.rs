//! CLI command definitions and handlers
//!
//! @module cli

pub mod complete;
pub mod def;
pub mod doctor;
pub mod outline;
pub mod refs;
pub mod search;
pub mod symbols;
pub mod tree;

use crate::core::config::Config;
use crate::core::workspace::Workspace;
use crate::engine::Engine;
use crate::output::OutputFormat;
use anyhow::Context as _;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, warn};

const LONG_ABOUT: &str = r#"
Reference correlation for C-family code indexed by GNU Global.

Cross-reference matches from `global` are correlated with the declarations
Universal Ctags reports for each file, so every match knows the function
(or struct, or enum) it sits in and whether it defines or uses the tag.

QUICK START:
    1. gtags                     Build the index at the project root
    2. refgraph doctor           Check that global, ctags and GTAGS are present
    3. refgraph refs <symbol>    Definitions and references, correlated

EXAMPLES:
    refgraph refs foo            Where foo is defined and who uses it
    refgraph tree foo --depth 3  Expand the reference tree three levels
    refgraph search init         Fuzzy workspace symbol search
    refgraph outline src/a.c     Declarations of one file
    refgraph refs foo --json     JSON output for scripting
"#;

/// Reference correlation on top of GNU Global and Universal Ctags
#[derive(Parser, Debug)]
#[command(name = "refgraph")]
#[command(author, version)]
#[command(about = "Reference correlation on top of GNU Global and Universal Ctags")]
#[command(long_about = LONG_ABOUT)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Workspace path (default: current directory)
    #[arg(short, long, global = true)]
    pub workspace: Option<PathBuf>,

    /// JSON output
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Definitions and references of a symbol, correlated
    #[command(visible_alias = "r")]
    Refs(refs::RefsArgs),

    /// Definition locations of a symbol
    #[command(visible_alias = "d")]
    Def(def::DefArgs),

    /// Symbols defined in a file, correlated
    Symbols(symbols::SymbolsArgs),

    /// Outline of a file from the tagging tool
    Outline(outline::OutlineArgs),

    /// Fuzzy workspace symbol search
    #[command(visible_alias = "s")]
    Search(search::SearchArgs),

    /// Reference tree of one or more symbols
    #[command(visible_alias = "t")]
    Tree(tree::TreeArgs),

    /// Completion candidates from the indexer's tag listing
    Complete(complete::CompleteArgs),

    /// Check the indexer, the tagging tool and the index
    Doctor,
}

/// Everything a subcommand needs
pub struct Context {
    pub workspace: Workspace,
    pub config: Config,
    pub format: OutputFormat,
}

impl Context {
    pub fn from_cli(cli: &Cli) -> anyhow::Result<Self> {
        let start = match &cli.workspace {
            Some(path) => path.clone(),
            None => std::env::current_dir().context("Failed to get current directory")?,
        };

        let workspace = Workspace::detect(&start)?;
        let config = Config::load().context("Failed to load configuration")?;
        debug!(root = %workspace.root.display(), indexed = workspace.indexed, "Detected workspace");
        if !workspace.indexed {
            warn!(root = %workspace.root.display(), "No GTAGS found; run `gtags` first");
        }

        Ok(Self {
            workspace,
            config,
            format: OutputFormat::from_flag(cli.json),
        })
    }

    pub fn engine(&self) -> Engine {
        Engine::for_workspace(self.config.clone(), &self.workspace)
    }

    /// Print `value` as JSON or through `human`
    pub fn emit<T, F>(&self, value: &T, human: F)
    where
        T: Serialize + ?Sized,
        F: FnOnce(&T) -> String,
    {
        let output = match self.format {
            OutputFormat::Json => crate::output::json::format(value) + "\n",
            OutputFormat::Human => human(value),
        };
        print!("{}", output);
    }
}

/// Dispatch a parsed command line
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let ctx = Context::from_cli(&cli)?;

    match cli.command {
        Commands::Refs(args) => refs::run(args, &ctx),
        Commands::Def(args) => def::run(args, &ctx),
        Commands::Symbols(args) => symbols::run(args, &ctx),
        Commands::Outline(args) => outline::run(args, &ctx),
        Commands::Search(args) => search::run(args, &ctx),
        Commands::Tree(args) => tree::run(args, &ctx),
        Commands::Complete(args) => complete::run(args, &ctx).await,
        Commands::Doctor => doctor::run(&ctx),
    }
}
