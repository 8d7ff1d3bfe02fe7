//! Symbols command implementation

use crate::cli::Context;
use crate::output::human;
use clap::Args;

#[derive(Args, Debug)]
pub struct SymbolsArgs {
    /// File path relative to the workspace root
    pub file: String,
}

pub fn run(args: SymbolsArgs, ctx: &Context) -> anyhow::Result<()> {
    let matches = ctx.engine().file_symbols(&args.file)?;
    ctx.emit(&matches, |m| human::format_matches(&args.file, m));
    Ok(())
}
