use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use applier::ManagedAccount;

/// Get the config directory path
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("steward"))
}

/// Process-wide settings: which account is managed, where its tree
/// lives, and where logrotate drop-in files go.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_username")]
    pub username: String,

    #[serde(default = "default_base_dir")]
    pub base_dir: String,

    #[serde(default = "default_logrotate_dir")]
    pub logrotate_dir: String,
}

fn default_username() -> String {
    "vcap".to_string()
}

fn default_base_dir() -> String {
    "/var/vcap".to_string()
}

fn default_logrotate_dir() -> String {
    "/etc/logrotate.d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            username: default_username(),
            base_dir: default_base_dir(),
            logrotate_dir: default_logrotate_dir(),
        }
    }
}

impl Settings {
    /// Load settings from an explicit path, or from
    /// `~/.config/steward/config.toml` when no path is given. A missing
    /// default config file is not an error; defaults apply.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                let path = config_dir()?.join("config.toml");
                if path.exists() {
                    Self::load_from(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Could not read {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Invalid settings format in {}", path.display()))
    }

    /// Managed account view consumed by the applier.
    pub fn managed_account(&self) -> ManagedAccount {
        ManagedAccount {
            username: self.username.clone(),
            base_dir: self.base_dir_path(),
        }
    }

    /// Get expanded base directory path
    pub fn base_dir_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.base_dir).as_ref())
    }

    /// Get expanded logrotate drop-in directory path
    pub fn logrotate_dir_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.logrotate_dir).as_ref())
    }
}
