//! `steward apply` - run the desired-state pipeline

use anyhow::{Context as AnyhowContext, Result};
use log::info;
use std::path::Path;

use applier::{Applier, ApplySpec};

use crate::Context;
use crate::config::Settings;
use crate::host::{DirectoryJobApplier, LogrotateWriter, TarballPackageApplier};
use crate::spec::DesiredState;
use crate::ui;

pub fn run(ctx: &Context, spec_path: &Path, config_path: Option<&Path>) -> Result<()> {
    let settings = Settings::load(config_path)?;
    let spec = DesiredState::load(spec_path)
        .with_context(|| format!("Could not load spec {}", spec_path.display()))?;

    let account = settings.managed_account();
    info!(
        "applying {} jobs and {} packages for '{}' under {}",
        spec.jobs().len(),
        spec.packages().len(),
        account.username,
        account.base_dir.display()
    );

    if ctx.verbose > 0 && !ctx.quiet {
        ui::kv("account", &account.username);
        ui::kv("base dir", &account.base_dir.display().to_string());
        ui::kv("logrotate dir", &settings.logrotate_dir_path().display().to_string());
    }

    let applier = Applier::new(
        Box::new(DirectoryJobApplier::new(&account.base_dir)),
        Box::new(TarballPackageApplier::new(&account.base_dir)),
        Box::new(LogrotateWriter::new(&settings.logrotate_dir_path())),
        account,
    );

    match applier.apply(&spec) {
        Ok(()) => {
            if !ctx.quiet {
                ui::success(&format!(
                    "Applied {} jobs, {} packages, log rotation at {}",
                    spec.jobs().len(),
                    spec.packages().len(),
                    spec.max_log_file_size()
                ));
            }
            Ok(())
        }
        Err(err) => {
            ui::error("Apply failed");
            Err(err)
        }
    }
}
