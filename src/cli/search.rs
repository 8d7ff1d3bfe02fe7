//! Search command implementation

use crate::cli::Context;
use crate::output::human;
use clap::Args;

#[derive(Args, Debug)]
#[command(after_help = "EXAMPLES:
    refgraph search init         Matches foo_init, initAll, ...
    refgraph search f            Too short, nothing is searched")]
pub struct SearchArgs {
    /// Fuzzy query; only letters and digits count
    pub query: String,
}

pub fn run(args: SearchArgs, ctx: &Context) -> anyhow::Result<()> {
    let symbols = ctx.engine().workspace_symbols(&args.query)?;
    ctx.emit(&symbols, |s| human::format_symbols(&args.query, s));
    Ok(())
}
