use chrono::Utc;
use prof_client::ApiClient;
use prof_core::entities::VisitorPassword;
use prof_core::ids::RecordId;
use prof_query::ListStore;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::cli::subcommands::VisitorCommands;
use crate::commands::shared::load;
use crate::commands::shared::rows::VisitorPasswordRow;
use crate::context::AppContext;
use crate::output::{notice, output};

/// Handle `profs visitor`: one-off passwords for read-only visitors.
pub async fn handle(
    action: &VisitorCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let client = ctx.logged_in_client()?;
    match action {
        VisitorCommands::List => {
            let passwords = load::list("visitor passwords", client.list_visitor_passwords()).await?;
            print_passwords(&passwords, flags)
        }
        VisitorCommands::Generate { days } => {
            if days.is_some_and(|d| d == 0) {
                anyhow::bail!("expiration days must be at least 1");
            }
            let mut passwords = ListStore::new();
            let generated = passwords
                .mutate_then_reload(client.generate_visitor_password(*days), || {
                    client.list_visitor_passwords()
                })
                .await?;
            load::warn_if_stale(passwords.error());
            notice(
                &format!(
                    "Generated a visitor password valid for {} day(s).",
                    generated.expiration_days
                ),
                flags,
            );
            output(&generated, flags.format)
        }
        VisitorCommands::Delete { id } => {
            let passwords = delete(&client, &RecordId::parse(id)).await?;
            print_passwords(&passwords, flags)
        }
    }
}

async fn delete(client: &ApiClient, id: &RecordId) -> anyhow::Result<ListStore<VisitorPassword>> {
    let mut passwords = ListStore::new();
    passwords
        .mutate_then_reload(client.delete_visitor_password(id), || {
            client.list_visitor_passwords()
        })
        .await?;
    load::warn_if_stale(passwords.error());
    Ok(passwords)
}

fn print_passwords(passwords: &ListStore<VisitorPassword>, flags: &GlobalFlags) -> anyhow::Result<()> {
    if flags.format == OutputFormat::Table {
        let now = Utc::now();
        let rows: Vec<VisitorPasswordRow> = passwords
            .items()
            .iter()
            .map(|p| VisitorPasswordRow::new(p, now))
            .collect();
        return output(&rows, flags.format);
    }
    output(&passwords.items(), flags.format)
}
