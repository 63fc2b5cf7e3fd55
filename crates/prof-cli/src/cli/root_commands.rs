use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    AdminCommands, AuthCommands, KeyCommands, ProfessorCommands, TaskCommands,
    UniversityCommands, UserCommands, VisitorCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Log in, log out, and check the stored session.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Professor records: search, edit, outreach tracking, URL processing.
    Professor {
        #[command(subcommand)]
        action: ProfessorCommands,
    },
    /// Priority professors ordered by deadline.
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },
    /// University roster.
    University {
        #[command(subcommand)]
        action: UniversityCommands,
    },
    /// Own profile and registration.
    User {
        #[command(subcommand)]
        action: UserCommands,
    },
    /// Account approval and access management.
    Admin {
        #[command(subcommand)]
        action: AdminCommands,
    },
    /// Gemini API keys.
    Keys {
        #[command(subcommand)]
        action: KeyCommands,
    },
    /// Visitor passwords.
    Visitor {
        #[command(subcommand)]
        action: VisitorCommands,
    },
    /// Dashboard statistics.
    Dashboard,
    /// Dump JSON schema for a payload type.
    Schema(SchemaArgs),
}

/// Arguments for `profs schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// One of: professor, new-professor, university, university-input, user,
    /// registration, profile-update, api-key, visitor-password, dashboard-stats
    pub type_name: String,
}
