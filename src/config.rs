use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

const DATA_DIR_NAME: &str = "cl";
const DATA_FILE_NAME: &str = "current";
const LOGS_DIR_NAME: &str = "logs";

/// Filesystem layout for the journal.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub data_file: PathBuf,
    pub logs_dir: PathBuf,
}

impl Config {
    /// Resolve the layout under the current user's home directory.
    pub fn from_home() -> Result<Self> {
        let home = dirs::home_dir().context("Can't find current user information.")?;
        Ok(Self::with_data_dir(home.join(DATA_DIR_NAME)))
    }

    pub fn with_data_dir(data_dir: impl AsRef<Path>) -> Self {
        let data_dir = data_dir.as_ref().to_path_buf();
        Self {
            data_file: data_dir.join(DATA_FILE_NAME),
            logs_dir: data_dir.join(LOGS_DIR_NAME),
            data_dir,
        }
    }

    /// Create the data and log directories if they don't exist.
    pub fn ensure_dirs(&self) -> Result<()> {
        std::fs::create_dir_all(&self.data_dir)
            .with_context(|| format!("Error creating {}", self.data_dir.display()))?;
        std::fs::create_dir_all(&self.logs_dir)
            .with_context(|| format!("Error creating {}", self.logs_dir.display()))?;
        Ok(())
    }
}
