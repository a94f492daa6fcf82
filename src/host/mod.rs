//! Host-facing collaborator implementations for the apply pipeline
//!
//! The `applier` crate defines the pipeline and its collaborator traits;
//! this module provides the implementations that touch the host:
//! - Jobs are installed as directories under `{base_dir}/jobs`
//! - Packages are extracted from tarballs under `{base_dir}/packages`
//! - Log rotation is a rendered drop-in file in a `logrotate.d` directory

pub mod job;
pub mod logrotate;
pub mod package;

pub use job::DirectoryJobApplier;
pub use logrotate::LogrotateWriter;
pub use package::TarballPackageApplier;
