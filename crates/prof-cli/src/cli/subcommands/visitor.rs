use clap::Subcommand;

/// Visitor password commands.
#[derive(Clone, Debug, Subcommand)]
pub enum VisitorCommands {
    List,
    /// Generate a new visitor password.
    Generate {
        /// Days until expiry.
        #[arg(long)]
        days: Option<u32>,
    },
    Delete { id: String },
}
