use prof_client::auth::Verification;
use prof_core::entities::Permissions;
use prof_core::enums::Role;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{AuthCommands, AuthLoginArgs};
use crate::commands::shared::parse::password_or_stdin;
use crate::context::AppContext;
use crate::output::{notice, output};

#[derive(Serialize)]
struct LoginResponse {
    role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_id: Option<String>,
    store: &'static str,
}

#[derive(Serialize)]
struct StatusResponse {
    authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    permissions: Option<Permissions>,
    store: &'static str,
}

/// Handle `profs auth`.
pub async fn handle(action: &AuthCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        AuthCommands::Login(args) => login(args, ctx, flags).await,
        AuthCommands::Logout => logout(ctx, flags),
        AuthCommands::Status => status(ctx, flags).await,
    }
}

async fn login(args: &AuthLoginArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let email = if args.visitor {
        None
    } else {
        args.email.as_deref()
    };
    let password = password_or_stdin(args.password.as_deref())?;

    let client = ctx.client()?;
    let state = client.login(email, &password).await?;
    output(
        &LoginResponse {
            role: state.effective_role(),
            user_id: state.user_id,
            store: ctx.session.store_name(),
        },
        flags.format,
    )
}

/// Works without a configured backend: only the local session is touched.
fn logout(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.session.clear()?;
    notice("Logged out.", flags);
    Ok(())
}

async fn status(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let store = ctx.session.store_name();
    let client = ctx.client()?;
    let response = match client.verify().await? {
        Verification::Valid(role) => StatusResponse {
            authenticated: true,
            role: Some(role),
            user_id: ctx.session.get().user_id,
            permissions: Some(client.permissions().await),
            store,
        },
        Verification::NoToken => StatusResponse {
            authenticated: false,
            role: None,
            user_id: None,
            permissions: None,
            store,
        },
        Verification::Rejected => {
            notice("Stored session was rejected by the backend; log in again.", flags);
            StatusResponse {
                authenticated: false,
                role: None,
                user_id: None,
                permissions: None,
                store,
            }
        }
    };
    output(&response, flags.format)
}
