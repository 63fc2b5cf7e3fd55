use chrono::Utc;
use prof_client::ApiClient;
use prof_core::entities::Professor;
use prof_core::ids::RecordId;
use prof_core::updates::{ProfessorUpdate, ProfessorUpdateBuilder};
use prof_query::ListStore;
use prof_query::tasks::sort_tasks;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TaskCommands;
use crate::commands::shared::load;
use crate::commands::shared::parse::parse_clearable_date;
use crate::commands::shared::rows::TaskRow;
use crate::context::AppContext;
use crate::output::{notice, output};

/// Handle `profs task`: the priority list, ordered by deadline.
pub async fn handle(action: &TaskCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let client = ctx.logged_in_client()?;
    let tasks = match action {
        TaskCommands::List => load::list("tasks", client.priority_professors()).await?,
        TaskCommands::Add { id, deadline } => {
            let mut update = ProfessorUpdateBuilder::new().priority(true);
            if let Some(raw) = deadline {
                update = update.deadline(parse_clearable_date(raw, "deadline")?);
            }
            apply(&client, id, &update.build()).await?
        }
        TaskCommands::Remove { id } => {
            let update = ProfessorUpdateBuilder::new().priority(false).build();
            apply(&client, id, &update).await?
        }
    };
    print_tasks(&tasks, flags)
}

async fn apply(
    client: &ApiClient,
    id: &str,
    update: &ProfessorUpdate,
) -> anyhow::Result<ListStore<Professor>> {
    let mut store = ListStore::new();
    store
        .mutate_then_reload(
            client.update_professor(&RecordId::parse(id), update),
            || client.priority_professors(),
        )
        .await?;
    load::warn_if_stale(store.error());
    Ok(store)
}

fn print_tasks(tasks: &ListStore<Professor>, flags: &GlobalFlags) -> anyhow::Result<()> {
    let now = Utc::now();
    let ordered = sort_tasks(tasks.items().to_vec());
    let rows: Vec<TaskRow> = ordered.iter().map(|p| TaskRow::new(p, now)).collect();
    let overdue = rows.iter().filter(|row| row.status == "overdue").count();
    if overdue > 0 {
        notice(&format!("{overdue} task(s) past their deadline"), flags);
    }
    output(&rows, flags.format)
}
