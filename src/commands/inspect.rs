//! `steward inspect` - show what a spec would apply

use anyhow::{Context as AnyhowContext, Result};
use std::path::Path;

use applier::ApplySpec;

use crate::Context;
use crate::spec::DesiredState;
use crate::ui;

pub fn run(_ctx: &Context, spec_path: &Path) -> Result<()> {
    let spec = DesiredState::load(spec_path)
        .with_context(|| format!("Could not load spec {}", spec_path.display()))?;

    ui::header("Desired state");
    ui::kv("spec", &spec_path.display().to_string());
    ui::kv("max log file size", spec.max_log_file_size());

    ui::header(&format!("Jobs ({})", spec.jobs().len()));
    for (i, job) in spec.jobs().iter().enumerate() {
        ui::step(
            i + 1,
            spec.jobs().len(),
            &format!("{}/{} from {}", job.name, job.version, job.source.display()),
        );
    }

    ui::header(&format!("Packages ({})", spec.packages().len()));
    for (i, package) in spec.packages().iter().enumerate() {
        ui::step(
            i + 1,
            spec.packages().len(),
            &format!(
                "{}/{} from {}",
                package.name,
                package.version,
                package.source.display()
            ),
        );
    }

    println!();
    Ok(())
}
