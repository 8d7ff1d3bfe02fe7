//! Doctor command implementation

use crate::check::{precheck, Notifier};
use crate::cli::Context;
use crate::output::human;
use crate::tools::ProcessRunner;

pub fn run(ctx: &Context) -> anyhow::Result<()> {
    let runner = ProcessRunner::new(&ctx.workspace.root);
    let notifier = Notifier::from_config(&ctx.config);

    let reports = precheck(&runner, &ctx.config, &ctx.workspace.root, &notifier);
    ctx.emit(&reports, |r| human::format_checks(r));

    if reports.iter().any(|r| !r.ok) {
        anyhow::bail!("{} check(s) failed", reports.iter().filter(|r| !r.ok).count());
    }
    Ok(())
}
