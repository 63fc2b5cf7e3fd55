use clap::{Args, Subcommand};

/// Own-account commands.
#[derive(Clone, Debug, Subcommand)]
pub enum UserCommands {
    /// Show the logged-in user's profile.
    Profile,
    /// Update the logged-in user's profile.
    UpdateProfile(ProfileArgs),
    /// Request an account (needs administrator approval).
    Register(RegisterArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ProfileArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub university: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub subject: Option<String>,
    #[arg(long)]
    pub country: Option<String>,
    #[arg(long)]
    pub gemini_key: Option<String>,
    /// New password (at least 6 characters).
    #[arg(long, requires = "confirm")]
    pub password: Option<String>,
    #[arg(long)]
    pub confirm: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct RegisterArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub university: String,
    #[arg(long)]
    pub phone: String,
    #[arg(long)]
    pub subject: String,
    #[arg(long)]
    pub country: String,
    #[arg(long)]
    pub password: String,
    #[arg(long)]
    pub confirm: String,
}
