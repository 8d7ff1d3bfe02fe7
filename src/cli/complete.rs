//! Complete command implementation

use crate::cli::Context;
use crate::complete::{CompletionCache, CompletionStatus};
use clap::Args;

#[derive(Args, Debug)]
pub struct CompleteArgs {
    /// Only list tags starting with this prefix
    #[arg(default_value = "")]
    pub prefix: String,
}

pub async fn run(args: CompleteArgs, ctx: &Context) -> anyhow::Result<()> {
    let cache = CompletionCache::new();
    if !cache.start(&ctx.config, &ctx.workspace.root) {
        anyhow::bail!("Completion is disabled; set `completion = true` in the configuration");
    }
    cache.wait().await;

    if let CompletionStatus::Failed(stderr) = cache.status() {
        anyhow::bail!("Completion listing failed: {}", stderr);
    }

    let tags = cache.matching(&args.prefix);
    ctx.emit(&tags, |t| t.iter().map(|tag| format!("{}\n", tag)).collect());
    Ok(())
}
