//! # stackdetectlib
//!
//! Detects Pulumi stack definition files in a directory tree and builds a
//! deployment matrix of (project, stack) pairs for CI pipelines.
//!
//! ## Overview
//!
//! Pulumi projects declare their deployment targets through per-stack config
//! files named `Pulumi.<stack>.yaml` (or `.yml`). This library walks a
//! directory tree, extracts one [`StackEntry`] per stack file it finds,
//! deduplicates `.yaml`/`.yml` twins, and optionally filters the result by
//! stack name. The final list serializes to the compact JSON matrix that a
//! pipeline fans out over.
//!
//! ## Features
//!
//! - **Recursive discovery**: finds stack files anywhere under a search root
//! - **Name filtering**: comma-separated include/exclude lists, whitelist
//!   applied before blacklist
//! - **Pure data types**: discovery takes the root as a parameter and the
//!   reporter is an explicit value, so nothing reads ambient process state
//!
//! ## Example
//!
//! ```rust
//! use stackdetectlib::{discover_stacks, MatrixReport, StackFilter};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! // Set up a repository with one project and two stacks
//! let dir = tempdir().unwrap();
//! fs::create_dir(dir.path().join("infra")).unwrap();
//! fs::write(dir.path().join("infra/Pulumi.dev.yaml"), "name: infra\n").unwrap();
//! fs::write(dir.path().join("infra/Pulumi.prod.yaml"), "name: infra\n").unwrap();
//!
//! let stacks = discover_stacks(dir.path()).unwrap();
//! assert_eq!(stacks.len(), 2);
//!
//! // Keep only the dev stack
//! let filter = StackFilter::new().include_names("dev");
//! let stacks = filter.apply(stacks);
//! assert_eq!(stacks.len(), 1);
//! assert_eq!(stacks[0].stack, "dev");
//! assert_eq!(stacks[0].project, "infra");
//!
//! // Summarize for the pipeline
//! let report = MatrixReport::from_entries(&stacks).unwrap();
//! assert!(report.has_stacks());
//! assert_eq!(report.count, 1);
//! ```

pub mod discover;
pub mod entry;
pub mod error;
pub mod filter;
pub mod report;

pub use discover::discover_stacks;
pub use entry::{stack_name, StackEntry};
pub use error::DetectError;
pub use filter::StackFilter;
pub use report::MatrixReport;

/// Result type for stackdetectlib operations
pub type Result<T> = std::result::Result<T, DetectError>;
