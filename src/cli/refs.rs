//! Refs command implementation

use crate::cli::Context;
use crate::output::human;
use clap::Args;
use tracing::info;

#[derive(Args, Debug)]
#[command(after_help = "EXAMPLES:
    refgraph refs foo            Definitions of foo, then its references
    refgraph refs MAX            Macro-like names fall back to a symbol query")]
pub struct RefsArgs {
    /// Symbol to look up
    pub symbol: String,
}

pub fn run(args: RefsArgs, ctx: &Context) -> anyhow::Result<()> {
    let matches = ctx.engine().references(&args.symbol)?;
    info!(symbol = %args.symbol, matches = matches.len(), "References resolved");
    ctx.emit(&matches, |m| human::format_matches(&args.symbol, m));
    Ok(())
}
