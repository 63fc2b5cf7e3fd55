use prof_core::entities::University;
use prof_core::enums::TriState;
use prof_core::ids::RecordId;
use prof_query::facets::{state_options, with_faculty_url};
use prof_query::{SortDirection, SortKey, UniversityFilter, UniversitySort, ViewState};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{
    UniversityCommands, UniversityListArgs, UniversityProcessArgs, UniversitySaveArgs,
};
use crate::commands::shared::load;
use crate::commands::shared::paging::{apply_page_flag, print_page};
use crate::commands::shared::parse::{parse_choice, parse_clearable_date};
use crate::commands::shared::processing::{finish_progress, report_outcome};
use crate::commands::shared::rows::UniversityRow;
use crate::context::AppContext;
use crate::output::{notice, output};
use crate::progress::Progress;

#[derive(Serialize)]
struct DeleteResponse {
    deleted: String,
}

/// Handle `profs university`.
pub async fn handle(
    action: &UniversityCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        UniversityCommands::List(args) => list(args, ctx, flags).await,
        UniversityCommands::States => states(ctx, flags).await,
        UniversityCommands::Save(args) => save(args, ctx, flags).await,
        UniversityCommands::Delete { id } => delete(id, ctx, flags).await,
        UniversityCommands::Process(args) => process(args, ctx, flags).await,
    }
}

async fn list(args: &UniversityListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let sort = UniversitySort::new(
        parse_choice::<SortKey>(&args.sort, "sort")?,
        if args.desc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        },
    );
    let filter = UniversityFilter {
        name: args.name.clone().unwrap_or_default(),
        state: args.state.clone().unwrap_or_default(),
        min_ranking: args.min_rank,
        max_ranking: args.max_rank,
    };

    let client = ctx.logged_in_client()?;
    let mut view = load::roster(ctx, &client).await?;
    load::warn_if_stale(view.universities().error());

    view.set_filter(filter);
    view.set_sort(sort);
    apply_page_flag(|page| view.goto_page(page), flags);

    if view.state() == ViewState::NoResults {
        notice("No universities match the current filters.", flags);
    }
    print_page(&view.page(), |u: &University| UniversityRow::from(u), "universities", flags)?;

    let roster = view.roster();
    notice(
        &format!(
            "{} of {} universities have a faculty URL",
            with_faculty_url(&roster),
            roster.len()
        ),
        flags,
    );
    Ok(())
}

async fn states(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let client = ctx.logged_in_client()?;
    let view = load::roster(ctx, &client).await?;
    output(&state_options(&view.roster()), flags.format)
}

/// Create or update a roster entry. Flags overlay the current record, so
/// fields left out keep their saved values.
async fn save(args: &UniversitySaveArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let client = ctx.logged_in_client()?;
    let mut view = load::roster(ctx, &client).await?;

    let current = current_entry(&view.roster(), args)?;
    let university = overlay(current, args)?;
    let name_key = university.name_key();

    view.mutate_then_reload(client.save_university(&university), || {
        client.list_universities()
    })
    .await?;
    load::warn_if_stale(view.universities().error());

    match view.roster().into_iter().find(|u| u.name_key() == name_key) {
        Some(saved) => output(&saved, flags.format),
        None => output(&university, flags.format),
    }
}

async fn delete(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let record = RecordId::parse(id);
    let client = ctx.logged_in_client()?;
    let mut view = ctx.university_view();
    view.mutate_then_reload(client.delete_university(&record), || {
        client.list_universities()
    })
    .await?;
    load::warn_if_stale(view.universities().error());
    output(
        &DeleteResponse {
            deleted: record.to_string(),
        },
        flags.format,
    )
}

/// Submit a roster entry's faculty page, then re-fetch both lists so new
/// professors and any inferred university show up in the roster.
async fn process(
    args: &UniversityProcessArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let client = ctx.logged_in_client()?;
    let mut view = load::roster(ctx, &client).await?;

    let roster = view.roster();
    let entry = resolve_entry(&roster, &args.target)?;
    let url = faculty_url(entry)?;
    tracing::debug!(university = %entry.name, url, force = args.force, "processing faculty page");

    let progress = Progress::spinner(&format!(
        "Extracting professors for {} (this can take a few minutes)...",
        entry.name
    ));
    let outcome = client.process_faculty_url(url, args.force).await;
    finish_progress(&progress, &outcome);
    let outcome = outcome?;

    view.load(client.list_universities(), client.list_professors())
        .await;
    load::warn_if_stale(view.error_banner());

    report_outcome(&outcome, flags)
}

/// Id match first, then a case-insensitive name match over the merged roster.
fn resolve_entry<'a>(roster: &'a [University], target: &str) -> anyhow::Result<&'a University> {
    let target = target.trim();
    if target.is_empty() {
        anyhow::bail!("university id or name is required");
    }
    let key = target.to_lowercase();
    roster
        .iter()
        .find(|u| u.id.as_ref().is_some_and(|known| known.matches(target)))
        .or_else(|| roster.iter().find(|u| u.name_key() == key))
        .ok_or_else(|| anyhow::anyhow!("university '{target}' not found"))
}

fn faculty_url(university: &University) -> anyhow::Result<&str> {
    university
        .cs_faculty_website_url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .ok_or_else(|| {
            anyhow::anyhow!(
                "{} has no faculty URL; set one with `profs university save --faculty-url`",
                university.name
            )
        })
}

/// `--id` must name a saved university; otherwise the name picks an existing
/// roster entry (saved or placeholder), or starts a new one.
fn current_entry(roster: &[University], args: &UniversitySaveArgs) -> anyhow::Result<University> {
    if let Some(id) = &args.id {
        return roster
            .iter()
            .find(|u| u.id.as_ref().is_some_and(|known| known.matches(id)))
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("university '{id}' not found"));
    }
    let key = args.name.trim().to_lowercase();
    Ok(roster
        .iter()
        .find(|u| u.name_key() == key)
        .cloned()
        .unwrap_or_else(|| University::placeholder(args.name.trim())))
}

fn overlay(mut university: University, args: &UniversitySaveArgs) -> anyhow::Result<University> {
    let name = args.name.trim();
    if name.is_empty() {
        anyhow::bail!("university name is required");
    }
    university.name = name.to_string();
    if let Some(url) = &args.faculty_url {
        university.cs_faculty_website_url = non_blank(url);
    }
    if let Some(url) = &args.website {
        university.main_website_url = non_blank(url);
    }
    if let Some(ranking) = args.ranking {
        university.ranking = Some(ranking);
    }
    if let Some(state) = &args.state {
        university.state = non_blank(state);
    }
    if let Some(raw) = &args.gre_required {
        university.gre_required = parse_choice::<TriState>(raw, "gre-required")?;
    }
    if let Some(raw) = &args.deadline {
        university.deadline = parse_clearable_date(raw, "deadline")?;
    }
    if let Some(notes) = &args.notes {
        university.notes = non_blank(notes);
    }
    Ok(university)
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
