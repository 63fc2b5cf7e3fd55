mod edit;
mod export;
mod facets;
mod list;
mod outreach;
mod process;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProfessorCommands;
use crate::context::AppContext;

/// Handle `profs professor`.
pub async fn handle(
    action: &ProfessorCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ProfessorCommands::List(args) => list::run(args, ctx, flags).await,
        ProfessorCommands::Get { id } => list::get(id, ctx, flags).await,
        ProfessorCommands::Create(args) => edit::create(args, ctx, flags).await,
        ProfessorCommands::Update(args) => edit::update(args, ctx, flags).await,
        ProfessorCommands::Delete { id } => edit::delete(id, ctx, flags).await,
        ProfessorCommands::Mailed { id, date, undo } => {
            outreach::mailed(id, date.as_deref(), *undo, ctx, flags).await
        }
        ProfessorCommands::FollowUp { id, date, undo } => {
            outreach::follow_up(id, date.as_deref(), *undo, ctx, flags).await
        }
        ProfessorCommands::Due => outreach::due(ctx, flags).await,
        ProfessorCommands::Process(args) => process::run(args, ctx, flags).await,
        ProfessorCommands::Export { university, dir } => {
            export::run(university.as_deref(), dir.as_deref(), ctx, flags).await
        }
        ProfessorCommands::Universities { search } => {
            facets::universities(search.as_deref(), ctx, flags).await
        }
        ProfessorCommands::Interests { search } => {
            facets::interests(search.as_deref(), ctx, flags).await
        }
    }
}
