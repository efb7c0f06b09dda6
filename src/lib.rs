//! strata-core - project-definition and profile-merge core for the strata
//! build tool.
//!
//! This library turns a raw project definition plus a set of named profiles
//! into one deterministic, fully-resolved project. It provides:
//! - Type-directed recursive merging: maps merge deeply, sets union,
//!   sequences concatenate, scalars override
//! - Per-value `displace`/`replace` hints that bypass the default rule
//! - A profile registry layering built-ins, the user-level store, and
//!   project declarations, with alias indirection
//! - Built-in defaults, including the default repository list
//! - Path normalization against the project root
//!
//! # Example
//!
//! ```no_run
//! use std::path::PathBuf;
//! use strata_core::diagnostics::Diagnostics;
//! use strata_core::project::{AssembleOptions, assemble};
//! use strata_core::source::project_from_toml_str;
//!
//! let raw = project_from_toml_str(
//!     r#"
//! name = "widget"
//! group = "acme"
//! version = "1.0.0"
//! source-paths = ["src"]
//! "#,
//! )
//! .unwrap();
//!
//! let mut diagnostics = Diagnostics::new();
//! let project = assemble(
//!     raw,
//!     PathBuf::from("/home/acme/widget"),
//!     &AssembleOptions::default(),
//!     &mut diagnostics,
//! )
//! .unwrap();
//!
//! println!("{:?}", project.get("source-paths"));
//! ```

pub mod diagnostics;
pub mod error;
pub mod merge;
pub mod profiles;
pub mod project;
pub mod source;
pub mod value;

pub use error::{Result, StrataError};
