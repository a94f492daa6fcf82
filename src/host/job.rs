//! Job applier - installs job bundles as directories

use anyhow::{Context, Result, bail};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use applier::{Job, JobApplier};

use crate::runner;

/// Installs a job by copying its bundle directory into
/// `{base_dir}/jobs/{name}` and running the bundle's optional
/// `bin/post-install` hook.
///
/// Re-applying a job replaces the installed copy wholesale; there is no
/// merge with a previous version.
pub struct DirectoryJobApplier {
    jobs_dir: PathBuf,
}

impl DirectoryJobApplier {
    pub fn new(base_dir: &Path) -> Self {
        Self {
            jobs_dir: base_dir.join("jobs"),
        }
    }

    fn install_dir(&self, job: &Job) -> PathBuf {
        self.jobs_dir.join(&job.name)
    }
}

impl JobApplier for DirectoryJobApplier {
    fn apply(&self, job: &Job) -> Result<()> {
        if !job.source.is_dir() {
            bail!("job bundle not found: {}", job.source.display());
        }

        let target = self.install_dir(job);
        if target.exists() {
            fs::remove_dir_all(&target)
                .with_context(|| format!("Could not remove old job at {}", target.display()))?;
        }

        copy_dir(&job.source, &target)
            .with_context(|| format!("Could not install job '{}'", job.name))?;

        mark_scripts_executable(&target.join("bin"))?;

        let hook = target.join("bin").join("post-install");
        if hook.is_file() {
            debug!("running post-install hook for job '{}'", job.name);
            runner::run_capture(&hook.to_string_lossy(), &[])
                .with_context(|| format!("post-install hook failed for job '{}'", job.name))?;
        }

        debug!("installed job '{}/{}'", job.name, job.version);
        Ok(())
    }
}

/// Recursively copy a directory tree
fn copy_dir(source: &Path, target: &Path) -> Result<()> {
    fs::create_dir_all(target)
        .with_context(|| format!("Could not create {}", target.display()))?;

    for entry in fs::read_dir(source)
        .with_context(|| format!("Could not read {}", source.display()))?
    {
        let entry = entry?;
        let dest = target.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir(&entry.path(), &dest)?;
        } else {
            fs::copy(entry.path(), &dest)
                .with_context(|| format!("Could not copy {}", entry.path().display()))?;
        }
    }

    Ok(())
}

/// Job control scripts must be runnable after install
#[cfg(unix)]
fn mark_scripts_executable(bin_dir: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    if !bin_dir.is_dir() {
        return Ok(());
    }

    for entry in fs::read_dir(bin_dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            fs::set_permissions(entry.path(), fs::Permissions::from_mode(0o755))?;
        }
    }

    Ok(())
}

#[cfg(not(unix))]
fn mark_scripts_executable(_bin_dir: &Path) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundle(dir: &Path, name: &str) -> Job {
        let source = dir.join("bundles").join(name);
        fs::create_dir_all(source.join("config")).unwrap();
        fs::write(source.join("config").join("app.conf"), "listen 8080\n").unwrap();

        Job {
            name: name.to_string(),
            version: "1".to_string(),
            source,
        }
    }

    #[test]
    fn installs_bundle_into_jobs_dir() {
        let dir = tempfile::tempdir().unwrap();
        let job = bundle(dir.path(), "router");
        let applier = DirectoryJobApplier::new(dir.path());

        applier.apply(&job).unwrap();

        let conf = dir.path().join("jobs/router/config/app.conf");
        assert_eq!(fs::read_to_string(conf).unwrap(), "listen 8080\n");
    }

    #[test]
    fn reapply_replaces_previous_install() {
        let dir = tempfile::tempdir().unwrap();
        let job = bundle(dir.path(), "router");
        let applier = DirectoryJobApplier::new(dir.path());

        applier.apply(&job).unwrap();

        // A file from an older version must not survive a re-apply
        let stale = dir.path().join("jobs/router/stale.txt");
        fs::write(&stale, "old").unwrap();

        applier.apply(&job).unwrap();
        assert!(!stale.exists());
    }

    #[test]
    fn missing_bundle_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let job = Job {
            name: "ghost".to_string(),
            version: "1".to_string(),
            source: dir.path().join("nope"),
        };
        let applier = DirectoryJobApplier::new(dir.path());

        let err = applier.apply(&job).unwrap_err();
        assert!(err.to_string().contains("job bundle not found"));
    }

    #[cfg(unix)]
    #[test]
    fn runs_post_install_hook() {
        let dir = tempfile::tempdir().unwrap();
        let job = bundle(dir.path(), "router");

        let marker = dir.path().join("hook-ran");
        fs::create_dir_all(job.source.join("bin")).unwrap();
        fs::write(
            job.source.join("bin").join("post-install"),
            format!("#!/bin/sh\ntouch {}\n", marker.display()),
        )
        .unwrap();

        let applier = DirectoryJobApplier::new(dir.path());
        applier.apply(&job).unwrap();

        assert!(marker.exists());
    }

    #[cfg(unix)]
    #[test]
    fn failing_hook_fails_the_apply() {
        let dir = tempfile::tempdir().unwrap();
        let job = bundle(dir.path(), "router");

        fs::create_dir_all(job.source.join("bin")).unwrap();
        fs::write(
            job.source.join("bin").join("post-install"),
            "#!/bin/sh\nexit 1\n",
        )
        .unwrap();

        let applier = DirectoryJobApplier::new(dir.path());
        let err = applier.apply(&job).unwrap_err();
        assert!(err.to_string().contains("post-install hook failed"));
    }
}
