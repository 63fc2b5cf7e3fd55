use clap::{Args, Subcommand};

/// Professor record commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProfessorCommands {
    /// Search professors (filters combine with AND).
    List(ProfessorListArgs),
    /// Show one professor.
    Get { id: String },
    /// Add a professor by hand.
    Create(ProfessorCreateArgs),
    /// Change fields on a professor.
    Update(ProfessorUpdateArgs),
    /// Delete a professor.
    Delete { id: String },
    /// Record the first outreach mail (or clear it with --undo).
    Mailed {
        id: String,
        /// Mail date (YYYY-MM-DD or RFC 3339); defaults to now.
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        undo: bool,
    },
    /// Record the follow-up mail (or clear it with --undo).
    FollowUp {
        id: String,
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        undo: bool,
    },
    /// Mailed professors whose follow-up is due.
    Due,
    /// Submit a faculty listing URL for extraction.
    Process(ProcessArgs),
    /// Download the Excel export.
    Export {
        /// Limit to one university.
        #[arg(long)]
        university: Option<String>,
        /// Output directory (defaults to general.export_dir, then ".").
        #[arg(long)]
        dir: Option<String>,
    },
    /// University names present on professor records.
    Universities {
        #[arg(long)]
        search: Option<String>,
    },
    /// Research-interest tokens present on professor records.
    Interests {
        #[arg(long)]
        search: Option<String>,
    },
}

#[derive(Clone, Debug, Args)]
pub struct ProfessorListArgs {
    /// Name fragment (case-insensitive).
    #[arg(long)]
    pub name: Option<String>,
    /// Exact university name.
    #[arg(long)]
    pub university: Option<String>,
    /// Research interest; repeat to match any of several.
    #[arg(long)]
    pub interest: Vec<String>,
    /// yes, no, or all
    #[arg(long)]
    pub recruiting: Option<String>,
    /// mailed, not_mailed, or all
    #[arg(long)]
    pub mailed: Option<String>,
    /// fall, spring, both, or all
    #[arg(long)]
    pub semester: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ProfessorCreateArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub university: String,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub designation: Option<String>,
    #[arg(long)]
    pub interests: Option<String>,
    #[arg(long)]
    pub portfolio: Option<String>,
    #[arg(long)]
    pub lab: Option<String>,
    #[arg(long)]
    pub source: Option<String>,
    #[arg(long)]
    pub scholar: Option<String>,
    /// yes, no, or unset
    #[arg(long)]
    pub recruiting_phd: Option<String>,
    /// yes, no, or unset
    #[arg(long)]
    pub currently_recruiting: Option<String>,
    /// Fall, Spring, or Both
    #[arg(long)]
    pub semester: Option<String>,
    #[arg(long)]
    pub comments: Option<String>,
    #[arg(long)]
    pub priority: bool,
    #[arg(long)]
    pub deadline: Option<String>,
    #[arg(long)]
    pub gre_required: bool,
}

#[derive(Clone, Debug, Args)]
pub struct ProfessorUpdateArgs {
    pub id: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub university: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub designation: Option<String>,
    #[arg(long)]
    pub interests: Option<String>,
    #[arg(long)]
    pub portfolio: Option<String>,
    #[arg(long)]
    pub lab: Option<String>,
    #[arg(long)]
    pub scholar: Option<String>,
    /// yes, no, or unset (yes also sets currently-recruiting)
    #[arg(long)]
    pub recruiting_phd: Option<String>,
    #[arg(long)]
    pub currently_recruiting: Option<String>,
    /// Fall, Spring, Both, or none
    #[arg(long)]
    pub semester: Option<String>,
    #[arg(long)]
    pub comments: Option<String>,
    #[arg(long)]
    pub priority: Option<bool>,
    /// Deadline date, or "none" to clear.
    #[arg(long)]
    pub deadline: Option<String>,
    #[arg(long)]
    pub gre_required: Option<bool>,
}

#[derive(Clone, Debug, Args)]
pub struct ProcessArgs {
    /// Faculty listing page URL.
    pub url: String,
    /// Process again even when professors from this site are recorded or
    /// the backend has seen this URL.
    #[arg(long)]
    pub force: bool,
    /// Do not register the university before processing.
    #[arg(long)]
    pub skip_university: bool,
}
