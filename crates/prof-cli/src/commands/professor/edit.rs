use prof_core::entities::{NewProfessor, Professor};
use prof_core::enums::TriState;
use prof_core::ids::RecordId;
use prof_core::updates::{ProfessorUpdate, ProfessorUpdateBuilder};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{ProfessorCreateArgs, ProfessorUpdateArgs};
use crate::commands::shared::load;
use crate::commands::shared::parse::{
    parse_choice, parse_clearable_date, parse_clearable_semester,
};
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct DeleteResponse {
    deleted: String,
}

pub async fn create(
    args: &ProfessorCreateArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let professor = new_professor(args)?;
    let name = professor.name.trim().to_string();
    let university = professor.university_name.trim().to_string();

    let client = ctx.logged_in_client()?;
    let mut view = ctx.professor_view();
    view.mutate_then_reload(client.create_professor(professor), || {
        client.list_professors()
    })
    .await?;
    load::warn_if_stale(view.error_banner());

    // The backend does not echo the new id; the newest record with this
    // name and university is the one just created.
    match latest_named(view.store().items(), &name, &university) {
        Some(created) => output(created, flags.format),
        None => output(&serde_json::json!({ "created": name }), flags.format),
    }
}

pub async fn update(
    args: &ProfessorUpdateArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let update = update_from_args(args)?;
    if update.is_empty() {
        anyhow::bail!("nothing to update: pass at least one field flag");
    }
    let id = RecordId::parse(&args.id);

    let client = ctx.logged_in_client()?;
    let mut view = ctx.professor_view();
    view.mutate_then_reload(client.update_professor(&id, &update), || {
        client.list_professors()
    })
    .await?;
    load::warn_if_stale(view.error_banner());

    let updated = load::find_professor(view.store().items(), &args.id)?;
    output(updated, flags.format)
}

pub async fn delete(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let record = RecordId::parse(id);
    let client = ctx.logged_in_client()?;
    let mut view = ctx.professor_view();
    view.mutate_then_reload(client.delete_professor(&record), || {
        client.list_professors()
    })
    .await?;
    load::warn_if_stale(view.error_banner());
    output(
        &DeleteResponse {
            deleted: record.to_string(),
        },
        flags.format,
    )
}

fn latest_named<'a>(
    professors: &'a [Professor],
    name: &str,
    university: &str,
) -> Option<&'a Professor> {
    professors.iter().rev().find(|p| {
        p.name.as_deref().map(str::trim) == Some(name)
            && p.university_name.as_deref().map(str::trim) == Some(university)
    })
}

fn tri_state(raw: Option<&str>, field: &str) -> anyhow::Result<Option<TriState>> {
    raw.map(|raw| parse_choice::<TriState>(raw, field)).transpose()
}

fn new_professor(args: &ProfessorCreateArgs) -> anyhow::Result<NewProfessor> {
    let text = |value: &Option<String>| value.clone().unwrap_or_default();
    Ok(NewProfessor {
        name: args.name.clone(),
        university_name: args.university.clone(),
        email: text(&args.email),
        designation: text(&args.designation),
        portfolio_website: text(&args.portfolio),
        source_url: text(&args.source),
        lab_website: text(&args.lab),
        research_interests: text(&args.interests),
        google_scholar_url: text(&args.scholar),
        recruiting_phd_students: tri_state(args.recruiting_phd.as_deref(), "recruiting-phd")?
            .unwrap_or_default(),
        currently_recruiting: tri_state(
            args.currently_recruiting.as_deref(),
            "currently-recruiting",
        )?
        .unwrap_or_default(),
        hiring_semester: args
            .semester
            .as_deref()
            .map(parse_clearable_semester)
            .transpose()?
            .flatten(),
        comments: text(&args.comments),
        priority: args.priority,
        deadline: args
            .deadline
            .as_deref()
            .map(|raw| parse_clearable_date(raw, "deadline"))
            .transpose()?
            .flatten(),
        gre_required: args.gre_required,
    })
}

fn update_from_args(args: &ProfessorUpdateArgs) -> anyhow::Result<ProfessorUpdate> {
    let mut builder = ProfessorUpdateBuilder::new();
    if let Some(name) = &args.name {
        builder = builder.name(name);
    }
    if let Some(university) = &args.university {
        builder = builder.university_name(university);
    }
    if let Some(email) = &args.email {
        builder = builder.email(email);
    }
    if let Some(designation) = &args.designation {
        builder = builder.designation(designation);
    }
    if let Some(interests) = &args.interests {
        builder = builder.research_interests(interests);
    }
    if let Some(url) = &args.portfolio {
        builder = builder.portfolio_website(url);
    }
    if let Some(url) = &args.lab {
        builder = builder.lab_website(url);
    }
    if let Some(url) = &args.scholar {
        builder = builder.google_scholar_url(url);
    }
    if let Some(value) = tri_state(args.recruiting_phd.as_deref(), "recruiting-phd")? {
        builder = builder.recruiting_phd_students(value);
    }
    if let Some(value) = tri_state(
        args.currently_recruiting.as_deref(),
        "currently-recruiting",
    )? {
        builder = builder.currently_recruiting(value);
    }
    if let Some(raw) = &args.semester {
        builder = builder.hiring_semester(parse_clearable_semester(raw)?);
    }
    if let Some(comments) = &args.comments {
        builder = builder.comments(comments);
    }
    if let Some(priority) = args.priority {
        builder = builder.priority(priority);
    }
    if let Some(raw) = &args.deadline {
        builder = builder.deadline(parse_clearable_date(raw, "deadline")?);
    }
    if let Some(required) = args.gre_required {
        builder = builder.gre_required(required);
    }
    Ok(builder.build())
}
