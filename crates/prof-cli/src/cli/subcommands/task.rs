use clap::Subcommand;

/// Priority task list commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TaskCommands {
    /// Priority professors, soonest deadline first.
    List,
    /// Flag a professor as a priority, optionally with a deadline.
    Add {
        id: String,
        #[arg(long)]
        deadline: Option<String>,
    },
    /// Drop a professor from the priority list.
    Remove { id: String },
}
