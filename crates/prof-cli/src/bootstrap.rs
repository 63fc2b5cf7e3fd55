use std::path::Path;

use anyhow::Context;
use prof_config::ProfConfig;

/// Read `.env` (working directory first, then `.profsearch/.env`) and load
/// the layered configuration.
pub fn load_config() -> anyhow::Result<ProfConfig> {
    load_dotenv()?;
    ProfConfig::load().context("failed to load profsearch configuration")
}

fn load_dotenv() -> anyhow::Result<()> {
    if Path::new(".env").exists() {
        dotenvy::dotenv().context("failed to load .env")?;
        return Ok(());
    }

    let project_env = Path::new(".profsearch").join(".env");
    if project_env.exists() {
        dotenvy::from_path(&project_env)
            .with_context(|| format!("failed to load dotenv file at {}", project_env.display()))?;
    }
    Ok(())
}
