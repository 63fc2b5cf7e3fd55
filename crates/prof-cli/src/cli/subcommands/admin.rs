use clap::Subcommand;

/// Administrator commands for user accounts.
#[derive(Clone, Debug, Subcommand)]
pub enum AdminCommands {
    /// List accounts, optionally by status.
    Users {
        /// pending, active, hold, or removed
        #[arg(long)]
        status: Option<String>,
    },
    /// Number of accounts in each status.
    Counts,
    /// Approve a pending account.
    Approve {
        id: String,
        /// Access period in days; unlimited when omitted.
        #[arg(long)]
        days: Option<i64>,
    },
    /// Put an account on hold.
    Hold { id: String },
    /// Mark an account removed.
    Remove { id: String },
    /// Change an account's access period.
    Access {
        id: String,
        #[arg(long)]
        days: i64,
    },
    /// Delete an account.
    Delete {
        id: String,
        /// Also delete the professors this user added.
        #[arg(long)]
        delete_data: bool,
    },
}
