use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Handle `profs dashboard`: totals plus per-month, per-state and
/// per-university mail counts.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let client = ctx.logged_in_client()?;
    let progress = Progress::spinner("Loading dashboard...");
    let stats = client.dashboard_stats().await;
    progress.finish_clear();
    output(&stats?, flags.format)
}
