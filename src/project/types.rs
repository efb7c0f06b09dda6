use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::error::{Result, StrataError};
use crate::profiles::ProfileEntry;
use crate::value::{ConfigMap, ConfigValue};
use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::path::{Path, PathBuf};

/// Identity fields every project definition must carry.
const REQUIRED_FIELDS: [&str; 3] = ["name", "group", "version"];

/// The build configuration for one invocation.
///
/// Constructed once from the raw map the definition loader produced, then
/// threaded through the assembly pipeline. The finished value is immutable;
/// downstream collaborators (plugin loader, dependency resolver, task
/// runner) only read it.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
	root: PathBuf,
	config: ConfigMap,
	profiles: IndexMap<String, ProfileEntry>,
	without_profiles: Option<Box<Project>>,
}

impl Project {
	/// Construct a project from the raw definition map.
	///
	/// Fails if any identity field is missing (all absences are reported at
	/// once) or if `root` is not absolute. The `profiles` key is lifted out
	/// of the configuration into typed entries; a declaration that is
	/// neither a map nor a profile name is reported and ignored.
	pub fn from_raw(
		mut raw: ConfigMap,
		root: PathBuf,
		diagnostics: &mut Diagnostics,
	) -> Result<Project> {
		let missing: Vec<String> = REQUIRED_FIELDS
			.iter()
			.filter(|field| !raw.contains_key(**field))
			.map(|field| field.to_string())
			.collect();
		if !missing.is_empty() {
			return Err(StrataError::MissingProjectFields { fields: missing });
		}
		if !root.is_absolute() {
			return Err(StrataError::RootNotAbsolute { path: root });
		}

		let profiles = match raw.shift_remove("profiles") {
			None => IndexMap::new(),
			Some(ConfigValue::Map(declared)) => profile_entries(declared, diagnostics),
			Some(_) => {
				diagnostics.warn(Diagnostic::MalformedProfile {
					name: "profiles".to_string(),
				});
				IndexMap::new()
			}
		};

		Ok(Project {
			root,
			config: raw,
			profiles,
			without_profiles: None,
		})
	}

	/// Absolute base directory relative paths resolve against.
	pub fn root(&self) -> &Path {
		&self.root
	}

	pub fn config(&self) -> &ConfigMap {
		&self.config
	}

	pub fn get(&self, key: &str) -> Option<&ConfigValue> {
		self.config.get(key)
	}

	pub fn name(&self) -> Option<&str> {
		self.get("name").and_then(ConfigValue::as_str)
	}

	pub fn group(&self) -> Option<&str> {
		self.get("group").and_then(ConfigValue::as_str)
	}

	pub fn version(&self) -> Option<&str> {
		self.get("version").and_then(ConfigValue::as_str)
	}

	/// Profiles declared in the project definition itself.
	pub fn profiles(&self) -> &IndexMap<String, ProfileEntry> {
		&self.profiles
	}

	/// The post-default, pre-profile state of this project, normalized on
	/// its own. Collaborators use it to distinguish declared from effective
	/// configuration. Only set on an assembled project.
	pub fn without_profiles(&self) -> Option<&Project> {
		self.without_profiles.as_deref()
	}

	pub(crate) fn config_mut(&mut self) -> &mut ConfigMap {
		&mut self.config
	}

	pub(crate) fn set_without_profiles(&mut self, snapshot: Project) {
		self.without_profiles = Some(Box::new(snapshot));
	}
}

fn profile_entries(
	declared: ConfigMap,
	diagnostics: &mut Diagnostics,
) -> IndexMap<String, ProfileEntry> {
	let mut entries = IndexMap::new();
	for (name, value) in declared {
		match value.into_payload() {
			ConfigValue::Map(overrides) => {
				entries.insert(name, ProfileEntry::Concrete(overrides));
			}
			ConfigValue::String(alias) => {
				entries.insert(name, ProfileEntry::Alias(alias));
			}
			_ => diagnostics.warn(Diagnostic::MalformedProfile { name }),
		}
	}
	entries
}

/// Serializes as the effective configuration: `root` first, then every
/// configuration key in order. Profile declarations and the attached
/// snapshot are bookkeeping, not configuration, and are skipped.
impl Serialize for Project {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		let mut state = serializer.serialize_map(Some(self.config.len() + 1))?;
		state.serialize_entry("root", &self.root)?;
		for (key, value) in &self.config {
			state.serialize_entry(key, value)?;
		}
		state.end()
	}
}
