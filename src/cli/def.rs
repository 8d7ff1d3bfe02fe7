//! Def command implementation

use crate::cli::Context;
use crate::output::human;
use clap::Args;

#[derive(Args, Debug)]
pub struct DefArgs {
    /// Symbol to jump to
    pub symbol: String,
}

pub fn run(args: DefArgs, ctx: &Context) -> anyhow::Result<()> {
    let locations = ctx.engine().definitions(&args.symbol)?;
    ctx.emit(&locations, |l| human::format_locations(&args.symbol, l));
    Ok(())
}
