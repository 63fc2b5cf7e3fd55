use prof_client::ApiClient;
use prof_core::entities::UniversityInput;
use prof_query::intake::{existing_for_faculty_url, university_name_from_url};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProcessArgs;
use crate::commands::shared::load;
use crate::commands::shared::processing::{finish_progress, report_outcome};
use crate::context::AppContext;
use crate::progress::Progress;

/// Submit a faculty listing URL for extraction.
///
/// Pages already scraped are refused locally unless `--force` is given, and
/// `--force` is passed on so the backend re-runs extraction too.
pub async fn run(args: &ProcessArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let url = args.url.trim();
    if url.is_empty() {
        anyhow::bail!("faculty URL is required");
    }

    let client = ctx.logged_in_client()?;
    let mut view = load::professors(ctx, &client).await?;

    check_existing(
        existing_for_faculty_url(view.store().items(), url).len(),
        args.force,
    )?;

    if !args.skip_university {
        register_university(&client, url).await;
    }

    let progress = Progress::spinner("Extracting professors (this can take a few minutes)...");
    let outcome = view
        .mutate_then_reload(client.process_faculty_url(url, args.force), || {
            client.list_professors()
        })
        .await;
    finish_progress(&progress, &outcome);
    load::warn_if_stale(view.error_banner());

    report_outcome(&outcome?, flags)
}

fn check_existing(existing: usize, force: bool) -> anyhow::Result<()> {
    if existing > 0 && !force {
        anyhow::bail!(
            "{existing} professor(s) already recorded from this site; pass --force to process it again"
        );
    }
    Ok(())
}

/// Record the university behind the URL. Failure never blocks processing.
async fn register_university(client: &ApiClient, url: &str) {
    let Some(name) = university_name_from_url(url) else {
        tracing::debug!(url, "no university name derivable from URL");
        return;
    };
    let input = UniversityInput {
        name: name.clone(),
        cs_faculty_website_url: Some(url.to_string()),
        ..UniversityInput::default()
    };
    if let Err(error) = client.create_university(input).await {
        tracing::warn!(university = %name, %error, "could not save university; continuing");
    }
}
