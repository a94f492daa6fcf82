//! Logrotate delegate - renders drop-in rotation config

use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use applier::LogrotateDelegate;

/// Writes a logrotate drop-in file for the managed account's log
/// directories. The file is named after the account and placed in the
/// configured `logrotate.d` directory, overwriting any previous version.
pub struct LogrotateWriter {
    conf_dir: PathBuf,
}

impl LogrotateWriter {
    pub fn new(conf_dir: &Path) -> Self {
        Self {
            conf_dir: conf_dir.to_path_buf(),
        }
    }
}

impl LogrotateDelegate for LogrotateWriter {
    fn setup_logrotate(
        &self,
        username: &str,
        base_dir: &Path,
        max_log_file_size: &str,
    ) -> Result<()> {
        fs::create_dir_all(&self.conf_dir)
            .with_context(|| format!("Could not create {}", self.conf_dir.display()))?;

        let path = self.conf_dir.join(username);
        let content = render(base_dir, max_log_file_size);
        fs::write(&path, content)
            .with_context(|| format!("Could not write {}", path.display()))?;

        debug!("wrote logrotate config for '{}' to {}", username, path.display());
        Ok(())
    }
}

/// Render the rotation stanza covering the account's log tree up to
/// three levels deep.
fn render(base_dir: &Path, max_log_file_size: &str) -> String {
    let logs = base_dir.join("sys").join("log");
    let logs = logs.display();

    format!(
        "\
# Generated by steward; do not edit.
{logs}/*.log {logs}/*/*.log {logs}/*/*/*.log {{
  missingok
  rotate 7
  compress
  delaycompress
  copytruncate
  size={max_log_file_size}
}}
"
    )
}
