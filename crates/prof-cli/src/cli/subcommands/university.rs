use clap::{Args, Subcommand};

/// University roster commands.
#[derive(Clone, Debug, Subcommand)]
pub enum UniversityCommands {
    /// Roster of saved universities plus names found on professor records.
    List(UniversityListArgs),
    /// States present on the roster.
    States,
    /// Save a university (creates when no id is given).
    Save(UniversitySaveArgs),
    /// Delete a saved university.
    Delete { id: String },
    /// Extract professors from a roster entry's faculty page.
    Process(UniversityProcessArgs),
}

#[derive(Clone, Debug, Args)]
pub struct UniversityProcessArgs {
    /// University id or name.
    pub target: String,
    /// Process again even if the backend has seen this page.
    #[arg(long)]
    pub force: bool,
}

#[derive(Clone, Debug, Args)]
pub struct UniversityListArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub state: Option<String>,
    #[arg(long)]
    pub min_rank: Option<i64>,
    #[arg(long)]
    pub max_rank: Option<i64>,
    /// name or ranking
    #[arg(long, default_value = "name")]
    pub sort: String,
    #[arg(long)]
    pub desc: bool,
}

#[derive(Clone, Debug, Args)]
pub struct UniversitySaveArgs {
    /// Existing university id; omit to create.
    #[arg(long)]
    pub id: Option<String>,
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub faculty_url: Option<String>,
    #[arg(long)]
    pub website: Option<String>,
    #[arg(long)]
    pub ranking: Option<i64>,
    #[arg(long)]
    pub state: Option<String>,
    /// yes, no, or unset
    #[arg(long)]
    pub gre_required: Option<String>,
    #[arg(long)]
    pub deadline: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
}
