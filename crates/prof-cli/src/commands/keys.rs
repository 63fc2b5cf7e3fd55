use prof_client::{ApiClient, ClientError};
use prof_core::entities::ApiKey;
use prof_core::ids::RecordId;
use prof_core::updates::{ApiKeyUpdate, NewApiKey};
use prof_query::ListStore;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::cli::subcommands::KeyCommands;
use crate::commands::shared::load;
use crate::commands::shared::rows::ApiKeyRow;
use crate::context::AppContext;
use crate::output::output;

/// Handle `profs keys`: the Gemini key pool used for extraction.
pub async fn handle(action: &KeyCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let client = ctx.logged_in_client()?;
    let keys = match action {
        KeyCommands::List => load::list("API keys", client.list_api_keys()).await?,
        KeyCommands::Create {
            name,
            key,
            inactive,
        } => {
            let new_key = NewApiKey {
                key_name: name.trim().to_string(),
                api_key: key.trim().to_string(),
                is_active: !inactive,
            };
            reload_after(&client, client.create_api_key(new_key)).await?
        }
        KeyCommands::Update {
            id,
            name,
            key,
            active,
        } => {
            let mut update = ApiKeyUpdate::new(key.clone(), *active);
            update.key_name = name.as_deref().map(str::trim).map(str::to_string);
            if update == ApiKeyUpdate::default() {
                anyhow::bail!("nothing to update: pass --name, --key, or --active");
            }
            let id = RecordId::parse(id);
            reload_after(&client, client.update_api_key(&id, &update)).await?
        }
        KeyCommands::Toggle { id } => {
            let current = load::list("API keys", client.list_api_keys()).await?;
            let key = find_key(current.items(), id)?.clone();
            reload_after(&client, client.toggle_api_key(&key)).await?
        }
        KeyCommands::Delete { id } => {
            let id = RecordId::parse(id);
            reload_after(&client, client.delete_api_key(&id)).await?
        }
    };
    print_keys(&keys, flags)
}

async fn reload_after<M>(client: &ApiClient, mutation: M) -> anyhow::Result<ListStore<ApiKey>>
where
    M: Future<Output = Result<(), ClientError>>,
{
    let mut keys = ListStore::new();
    keys.mutate_then_reload(mutation, || client.list_api_keys())
        .await?;
    load::warn_if_stale(keys.error());
    Ok(keys)
}

fn find_key<'a>(keys: &'a [ApiKey], id: &str) -> anyhow::Result<&'a ApiKey> {
    keys.iter()
        .find(|k| k.id.matches(id))
        .ok_or_else(|| anyhow::anyhow!("API key '{id}' not found"))
}

fn print_keys(keys: &ListStore<ApiKey>, flags: &GlobalFlags) -> anyhow::Result<()> {
    if flags.format == OutputFormat::Table {
        let rows: Vec<ApiKeyRow> = keys.items().iter().map(ApiKeyRow::from).collect();
        return output(&rows, flags.format);
    }
    output(&keys.items(), flags.format)
}
