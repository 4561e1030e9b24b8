use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Optional on-disk configuration (`docket.toml`)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DocketConfig {
    pub database: Option<String>,
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("docket.toml")
}

pub fn default_database_path() -> PathBuf {
    PathBuf::from("docket.db")
}

/// Load the config file if it exists; a missing file is not an error
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<DocketConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: DocketConfig = toml::from_str(&contents)?;
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &DocketConfig, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "config already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}

/// Effective database path: CLI flag wins, then the config file, then the
/// default next to the working directory
pub fn resolve_database(cli: Option<&Path>, config: Option<&DocketConfig>) -> PathBuf {
    if let Some(path) = cli {
        return path.to_path_buf();
    }
    if let Some(database) = config.and_then(|c| c.database.as_deref()) {
        return PathBuf::from(database);
    }
    default_database_path()
}

pub fn ensure_db_dir(db_path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
