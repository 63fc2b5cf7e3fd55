use prof_core::entities::{ProfileUpdate, Registration};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{ProfileArgs, RegisterArgs, UserCommands};
use crate::context::AppContext;
use crate::output::{notice, output};

#[derive(Serialize)]
struct RegisterResponse {
    registered: String,
    status: &'static str,
}

/// Handle `profs user`.
pub async fn handle(action: &UserCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        UserCommands::Profile => {
            let client = ctx.logged_in_client()?;
            output(&client.profile().await?, flags.format)
        }
        UserCommands::UpdateProfile(args) => update_profile(args, ctx, flags).await,
        UserCommands::Register(args) => register(args, ctx, flags).await,
    }
}

async fn update_profile(args: &ProfileArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let update = ProfileUpdate {
        name: args.name.clone(),
        university: args.university.clone(),
        phone_number: args.phone.clone(),
        subject: args.subject.clone(),
        country: args.country.clone(),
        gemini_api_key: args.gemini_key.clone(),
        password: args.password.clone(),
    };
    if update == ProfileUpdate::default() {
        anyhow::bail!("nothing to update: pass at least one field flag");
    }

    let client = ctx.logged_in_client()?;
    client
        .update_profile(update, args.confirm.as_deref())
        .await?;
    // Re-read so the output reflects what the backend stored.
    output(&client.profile().await?, flags.format)
}

/// Self-service sign-up. Accounts start pending until an admin approves them.
async fn register(args: &RegisterArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registration = Registration {
        name: args.name.clone(),
        email: args.email.clone(),
        university: args.university.clone(),
        phone_number: args.phone.clone(),
        subject: args.subject.clone(),
        country: args.country.clone(),
        password: args.password.clone(),
    };

    let client = ctx.client()?;
    client.register(registration, &args.confirm).await?;
    notice("Registration submitted; an administrator must approve the account.", flags);
    output(
        &RegisterResponse {
            registered: args.email.trim().to_string(),
            status: "pending",
        },
        flags.format,
    )
}
