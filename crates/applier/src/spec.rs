//! Desired-state specification types
//!
//! These types describe *what* a host should converge to. The
//! orchestrator treats job and package descriptors as opaque and passes
//! them through to the collaborator that knows how to apply them.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A named runnable service configuration to be applied to the host.
///
/// Opaque to the orchestrator; interpreted by the [`JobApplier`]
/// implementation.
///
/// [`JobApplier`]: crate::JobApplier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub name: String,
    pub version: String,
    /// Where the job bundle lives on disk
    pub source: PathBuf,
}

/// An installable software artifact to be applied to the host.
///
/// Opaque to the orchestrator; interpreted by the [`PackageApplier`]
/// implementation.
///
/// [`PackageApplier`]: crate::PackageApplier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    pub name: String,
    pub version: String,
    /// Where the package archive lives on disk
    pub source: PathBuf,
}

/// The account whose jobs, packages, and logs are being managed.
///
/// Both values come from process-wide configuration, not from the
/// desired-state spec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagedAccount {
    pub username: String,
    pub base_dir: PathBuf,
}

/// Read-only view of the desired state for one host.
///
/// Owned by the caller and borrowed for the duration of one apply; the
/// orchestrator never mutates or retains it.
pub trait ApplySpec {
    /// Jobs to apply, in order.
    fn jobs(&self) -> &[Job];

    /// Packages to apply, in order.
    fn packages(&self) -> &[Package];

    /// Maximum log file size as a logrotate `size` directive literal
    /// (e.g. `"50M"`). Passed through unparsed.
    fn max_log_file_size(&self) -> &str;
}
