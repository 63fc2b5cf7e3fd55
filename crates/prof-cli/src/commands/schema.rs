use anyhow::bail;
use schemars::schema_for;

use prof_core::entities::{
    ApiKey, DashboardStats, NewProfessor, Permissions, Professor, ProfileUpdate, Registration,
    University, UniversityInput, User, VisitorPassword,
};

use crate::cli::{GlobalFlags, OutputFormat};
use crate::cli::root_commands::SchemaArgs;
use crate::output::render;

pub const SCHEMA_TYPES: &[&str] = &[
    "professor",
    "new-professor",
    "university",
    "university-input",
    "user",
    "permissions",
    "registration",
    "profile-update",
    "api-key",
    "visitor-password",
    "dashboard-stats",
];

/// Handle `profs schema`: print the JSON Schema of a backend record type.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = match args.type_name.trim().to_ascii_lowercase().replace('_', "-").as_str() {
        "professor" => schema_for!(Professor),
        "new-professor" => schema_for!(NewProfessor),
        "university" => schema_for!(University),
        "university-input" => schema_for!(UniversityInput),
        "user" => schema_for!(User),
        "permissions" => schema_for!(Permissions),
        "registration" => schema_for!(Registration),
        "profile-update" => schema_for!(ProfileUpdate),
        "api-key" => schema_for!(ApiKey),
        "visitor-password" => schema_for!(VisitorPassword),
        "dashboard-stats" => schema_for!(DashboardStats),
        other => bail!(
            "unknown schema type '{other}'; expected one of: {}",
            SCHEMA_TYPES.join(", ")
        ),
    };

    // Schemas are JSON either way; table output prints them pretty.
    let format = match flags.format {
        OutputFormat::Raw => OutputFormat::Raw,
        OutputFormat::Json | OutputFormat::Table => OutputFormat::Json,
    };
    println!("{}", render(&schema, format)?);
    Ok(())
}
