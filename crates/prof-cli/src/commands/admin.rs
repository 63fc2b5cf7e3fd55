use prof_client::ApiClient;
use prof_core::entities::User;
use prof_core::enums::UserStatus;
use prof_core::ids::RecordId;
use prof_query::ListStore;
use prof_query::users::status_counts;
use serde::Serialize;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::cli::subcommands::AdminCommands;
use crate::commands::shared::load;
use crate::commands::shared::parse::parse_choice;
use crate::commands::shared::rows::UserRow;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct StatusCount {
    status: UserStatus,
    users: usize,
}

/// Handle `profs admin`: user approval and access management.
pub async fn handle(action: &AdminCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let client = ctx.logged_in_client()?;
    match action {
        AdminCommands::Users { status } => {
            let status = status
                .as_deref()
                .map(|raw| parse_choice::<UserStatus>(raw, "status"))
                .transpose()?;
            let users = load::list("users", client.list_users(status)).await?;
            print_users(&users, flags)
        }
        AdminCommands::Counts => {
            let users = load::list("users", client.list_users(None)).await?;
            let counts: Vec<StatusCount> = status_counts(users.items())
                .into_iter()
                .map(|(status, users)| StatusCount { status, users })
                .collect();
            output(&counts, flags.format)
        }
        AdminCommands::Approve { id, days } => {
            let id = RecordId::parse(id);
            let users = reload_after(&client, client.approve_user(&id, *days)).await?;
            print_users(&users, flags)
        }
        AdminCommands::Hold { id } => {
            let id = RecordId::parse(id);
            let users = reload_after(&client, client.hold_user(&id)).await?;
            print_users(&users, flags)
        }
        AdminCommands::Remove { id } => {
            let id = RecordId::parse(id);
            let users = reload_after(&client, client.remove_user(&id)).await?;
            print_users(&users, flags)
        }
        AdminCommands::Access { id, days } => {
            if *days < 1 {
                anyhow::bail!("access days must be at least 1");
            }
            let id = RecordId::parse(id);
            let users = reload_after(&client, client.set_user_access(&id, *days)).await?;
            print_users(&users, flags)
        }
        AdminCommands::Delete { id, delete_data } => {
            let id = RecordId::parse(id);
            let users = reload_after(&client, client.delete_user(&id, *delete_data)).await?;
            print_users(&users, flags)
        }
    }
}

async fn reload_after<M>(client: &ApiClient, mutation: M) -> anyhow::Result<ListStore<User>>
where
    M: Future<Output = Result<(), prof_client::ClientError>>,
{
    let mut users = ListStore::new();
    users
        .mutate_then_reload(mutation, || client.list_users(None))
        .await?;
    load::warn_if_stale(users.error());
    Ok(users)
}

fn print_users(users: &ListStore<User>, flags: &GlobalFlags) -> anyhow::Result<()> {
    if flags.format == OutputFormat::Table {
        let rows: Vec<UserRow> = users.items().iter().map(UserRow::from).collect();
        return output(&rows, flags.format);
    }
    output(&users.items(), flags.format)
}
