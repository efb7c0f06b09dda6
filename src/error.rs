use std::path::PathBuf;

/// Library-level structured errors for strata-core.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// Only fatal conditions live here; recoverable conditions are surfaced as
/// [`crate::diagnostics::Diagnostic`] warnings and never abort assembly.
#[derive(Debug, thiserror::Error)]
pub enum StrataError {
	#[error("Project definition is missing required fields: {}", fields.join(", "))]
	MissingProjectFields { fields: Vec<String> },

	#[error("Project root must be an absolute path: {path}")]
	RootNotAbsolute { path: PathBuf },

	#[error("Profile alias chain does not terminate: {}", chain.join(" -> "))]
	ProfileAliasCycle { chain: Vec<String> },

	#[error("Failed to parse project definition")]
	DefinitionParse {
		#[source]
		source: toml::de::Error,
	},
}

/// Result type alias using StrataError.
pub type Result<T> = std::result::Result<T, StrataError>;
