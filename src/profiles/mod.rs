//! Named profile registry and resolution.
//!
//! This module handles:
//! - Building the effective set of named profiles from built-ins, the
//!   user-level store, and project declarations
//! - Alias indirection with cycle detection
//! - Ordering selected profiles for precedence-correct folding

pub mod registry;
pub mod resolver;

pub use registry::{ProfileEntry, ProfileRegistry, ProfileStore};
pub use resolver::{resolve, select_and_order};

/// A named profile is a partial project: any subset of configuration keys,
/// merged onto the project when the profile is selected.
pub type Profile = crate::value::ConfigMap;
