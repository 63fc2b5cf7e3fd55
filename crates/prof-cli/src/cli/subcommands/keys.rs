use clap::Subcommand;

/// Gemini API key commands.
#[derive(Clone, Debug, Subcommand)]
pub enum KeyCommands {
    List,
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        key: String,
        /// Store the key disabled.
        #[arg(long)]
        inactive: bool,
    },
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        /// Replacement key; left unchanged when omitted.
        #[arg(long)]
        key: Option<String>,
        #[arg(long)]
        active: Option<bool>,
    },
    /// Flip a key between active and inactive.
    Toggle { id: String },
    Delete { id: String },
}
