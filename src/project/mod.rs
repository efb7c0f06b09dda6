//! Project construction and the assembly pipeline.
//!
//! This module handles:
//! - Validated construction of a project from the raw definition map
//! - Built-in default injection, with the bespoke repository rules
//! - Path normalization against the project root
//! - Orchestration of the whole pipeline

pub mod assemble;
pub mod defaults;
pub mod normalize;
pub mod types;

pub use assemble::{AssembleOptions, DEFAULT_PROFILE_NAMES, assemble};
pub use defaults::inject_defaults;
pub use normalize::normalize_paths;
pub use types::Project;
