//! Outline command implementation

use crate::cli::Context;
use crate::output::human;
use clap::Args;

#[derive(Args, Debug)]
pub struct OutlineArgs {
    /// File path relative to the workspace root
    pub file: String,
}

pub fn run(args: OutlineArgs, ctx: &Context) -> anyhow::Result<()> {
    let outline = ctx.engine().outline(&args.file)?;
    ctx.emit(&outline, |o| human::format_outline(o));
    Ok(())
}
