use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Log in with email and password, or with a visitor password.
    Login(AuthLoginArgs),
    /// Clear the stored session.
    Logout,
    /// Verify the stored token and show role and permissions.
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    /// Account email (omit with --visitor).
    #[arg(long, required_unless_present = "visitor", conflicts_with = "visitor")]
    pub email: Option<String>,
    /// Password; read from stdin when omitted.
    #[arg(long)]
    pub password: Option<String>,
    /// Log in with a visitor password.
    #[arg(long)]
    pub visitor: bool,
}
