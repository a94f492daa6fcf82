//! Apply orchestrator - drives jobs, packages, and log rotation in strict order
//!
//! The orchestrator is a pure control-flow coordinator: it performs no
//! I/O of its own and delegates every side effect to the three
//! collaborator traits. Execution order is always jobs → packages →
//! logrotate, and a failure at any stage prevents all later stages from
//! starting.

use anyhow::{Context, Result};
use std::path::Path;

use crate::spec::{ApplySpec, Job, ManagedAccount, Package};

/// Applies one job's desired configuration to the host.
pub trait JobApplier: Send + Sync {
    fn apply(&self, job: &Job) -> Result<()>;
}

/// Applies one package's desired installation state to the host.
pub trait PackageApplier: Send + Sync {
    fn apply(&self, package: &Package) -> Result<()>;
}

/// Configures log rotation for an account's log directories.
pub trait LogrotateDelegate: Send + Sync {
    fn setup_logrotate(
        &self,
        username: &str,
        base_dir: &Path,
        max_log_file_size: &str,
    ) -> Result<()>;
}

/// The apply pipeline.
///
/// Constructed once with its three collaborators and the managed
/// account; immutable and stateless thereafter, so a single instance can
/// be reused for repeated applies (and shared across threads, each apply
/// with its own spec).
pub struct Applier {
    job_applier: Box<dyn JobApplier>,
    package_applier: Box<dyn PackageApplier>,
    logrotate: Box<dyn LogrotateDelegate>,
    account: ManagedAccount,
}

impl Applier {
    pub fn new(
        job_applier: Box<dyn JobApplier>,
        package_applier: Box<dyn PackageApplier>,
        logrotate: Box<dyn LogrotateDelegate>,
        account: ManagedAccount,
    ) -> Self {
        Self {
            job_applier,
            package_applier,
            logrotate,
            account,
        }
    }

    /// Apply `spec` to the host.
    ///
    /// Every job in spec order, then every package in spec order, then
    /// exactly one log-rotation setup call. Stops at the first failure;
    /// side effects already made stay in place (no rollback).
    ///
    /// Job and package errors propagate verbatim - reporting which job
    /// or package failed is the collaborator's responsibility. Only a
    /// log-rotation failure is tagged with extra context, so callers can
    /// tell the final stage apart from the first two.
    pub fn apply(&self, spec: &dyn ApplySpec) -> Result<()> {
        for job in spec.jobs() {
            self.job_applier.apply(job)?;
        }

        for package in spec.packages() {
            self.package_applier.apply(package)?;
        }

        self.setup_logrotate(spec)
    }

    fn setup_logrotate(&self, spec: &dyn ApplySpec) -> Result<()> {
        self.logrotate
            .setup_logrotate(
                &self.account.username,
                &self.account.base_dir,
                spec.max_log_file_size(),
            )
            .context("logrotate setup failed")
    }
}
