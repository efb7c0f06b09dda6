use serde::Serialize;
use std::fmt;

/// A recoverable condition raised during assembly.
///
/// Diagnostics never interrupt assembly; they are collected in a
/// [`Diagnostics`] sink and mirrored to the host's logger via `log::warn!`.
/// Fatal conditions live in [`crate::error::StrataError`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Diagnostic {
	/// A requested or aliased profile name has no registry entry.
	UnknownProfile { name: String },

	/// Two values of different shapes collided during a merge; the
	/// overlaying value won.
	MergeTypeMismatch {
		base_kind: &'static str,
		overlay_kind: &'static str,
	},

	/// A user-level profile declares its own repositories, which can break
	/// build reproducibility across machines.
	UserProfileRepositories { profile: String },

	/// A profile declaration is neither a map of overrides nor the name of
	/// another profile; the entry is ignored.
	MalformedProfile { name: String },
}

impl fmt::Display for Diagnostic {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Diagnostic::UnknownProfile { name } => {
				write!(f, "Profile {name} not found, treating it as empty")
			}
			Diagnostic::MergeTypeMismatch {
				base_kind,
				overlay_kind,
			} => {
				write!(
					f,
					"{base_kind} and {overlay_kind} have a type mismatch merging profiles"
				)
			}
			Diagnostic::UserProfileRepositories { profile } => {
				write!(
					f,
					"User-level profile {profile} overrides repositories; builds may not be reproducible elsewhere"
				)
			}
			Diagnostic::MalformedProfile { name } => {
				write!(
					f,
					"Ignoring profile {name}: expected a map of overrides or another profile's name"
				)
			}
		}
	}
}

/// Sink for recoverable warnings raised during one assembly invocation.
///
/// Each invocation owns its sink, so concurrent assemblies never contend.
#[derive(Debug, Default)]
pub struct Diagnostics {
	entries: Vec<Diagnostic>,
}

impl Diagnostics {
	pub fn new() -> Self {
		Diagnostics::default()
	}

	/// Record a diagnostic and forward it to the logging facade.
	pub fn warn(&mut self, diagnostic: Diagnostic) {
		log::warn!("{diagnostic}");
		self.entries.push(diagnostic);
	}

	/// All diagnostics recorded so far, in emission order.
	pub fn entries(&self) -> &[Diagnostic] {
		&self.entries
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}
}
