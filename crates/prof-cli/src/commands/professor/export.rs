use std::path::PathBuf;

use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

#[derive(Serialize)]
struct ExportResponse {
    path: String,
    university: Option<String>,
}

/// Download the Excel export into `--dir`, else `general.export_dir`, else `.`.
pub async fn run(
    university: Option<&str>,
    dir: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let dir = dir
        .map(PathBuf::from)
        .or_else(|| ctx.config.general.export_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));
    let university = university.map(str::trim).filter(|u| !u.is_empty());

    let client = ctx.logged_in_client()?;
    let progress = Progress::spinner("Exporting professors...");
    let saved = client.download_export(university, &dir).await;
    match &saved {
        Ok(_) => progress.finish_clear(),
        Err(_) => progress.finish_err("export failed"),
    }
    let path = saved?;

    output(
        &ExportResponse {
            path: path.display().to_string(),
            university: university.map(str::to_string),
        },
        flags.format,
    )
}
