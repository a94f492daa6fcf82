//! # Applier
//!
//! The desired-state application pipeline for a managed host.
//!
//! Given a [`ApplySpec`] describing which jobs and packages a host should
//! run and how large its log files may grow, the [`Applier`] drives three
//! collaborators in a fixed order:
//!
//! 1. Every job, in spec order, through a [`JobApplier`]
//! 2. Every package, in spec order, through a [`PackageApplier`]
//! 3. One log-rotation setup call through a [`LogrotateDelegate`]
//!
//! The pipeline is fail-fast: the first error at any stage aborts the
//! apply, and side effects already made are left in place. There is no
//! rollback and no retry.
//!
//! ## Example
//!
//! ```ignore
//! use applier::{Applier, ManagedAccount};
//!
//! let applier = Applier::new(
//!     Box::new(my_job_applier),
//!     Box::new(my_package_applier),
//!     Box::new(my_logrotate),
//!     ManagedAccount {
//!         username: "vcap".into(),
//!         base_dir: "/var/vcap".into(),
//!     },
//! );
//!
//! applier.apply(&desired_state)?;
//! ```
//!
//! The collaborators are traits, so callers substitute test doubles
//! without any runtime type inspection. The [`Applier`] itself holds no
//! mutable state and may be shared across threads and reused for
//! repeated applies.

pub mod orchestrator;
pub mod spec;

// Re-export main types at crate root
pub use orchestrator::{Applier, JobApplier, LogrotateDelegate, PackageApplier};
pub use spec::{ApplySpec, Job, ManagedAccount, Package};
