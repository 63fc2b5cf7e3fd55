use prof_query::facets::{interest_options, university_options};

use crate::cli::GlobalFlags;
use crate::commands::shared::load;
use crate::context::AppContext;
use crate::output::output;

pub async fn universities(
    search: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let client = ctx.logged_in_client()?;
    let view = load::professors(ctx, &client).await?;
    let options = university_options(view.store().items(), search.unwrap_or_default());
    output(&options, flags.format)
}

pub async fn interests(
    search: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let client = ctx.logged_in_client()?;
    let view = load::professors(ctx, &client).await?;
    let options = interest_options(view.store().items(), search.unwrap_or_default());
    output(&options, flags.format)
}
