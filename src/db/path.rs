use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::BaseDirs;

static DEFAULT_FILE_NAME: &str = ".done.sqlite";

pub fn resolve_store_path(override_path: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = override_path {
        return Ok(path);
    }

    let base_dirs = BaseDirs::new().ok_or_else(|| anyhow!("unable to resolve home directory"))?;
    Ok(base_dirs.home_dir().join(DEFAULT_FILE_NAME))
}
