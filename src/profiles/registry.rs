use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::profiles::Profile;
use crate::value::{ConfigMap, ConfigValue};
use indexmap::IndexMap;

/// A registry entry: either a concrete profile or an alias to another name.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileEntry {
	Concrete(Profile),
	Alias(String),
}

/// The user-level profile store, loaded from a user-scoped location by a
/// collaborator and consumed read-only here.
pub type ProfileStore = IndexMap<String, ProfileEntry>;

/// The effective set of named profiles for one assembly.
///
/// Built as an explicit value rather than process-wide state: hosts
/// construct one at start-up (optionally inserting extra built-ins), then
/// share it read-only across concurrent assemblies.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileRegistry {
	entries: IndexMap<String, ProfileEntry>,
}

impl ProfileRegistry {
	pub fn empty() -> Self {
		ProfileRegistry::default()
	}

	/// Registry seeded with the built-in profiles: `default` (adds a
	/// dev-resources path and the preparatory build steps), `test` (empty),
	/// and `debug` (turns the debug flag on).
	pub fn with_builtins() -> Self {
		let mut registry = ProfileRegistry::empty();
		registry.insert("default", ProfileEntry::Concrete(default_profile()));
		registry.insert("test", ProfileEntry::Concrete(Profile::new()));
		registry.insert("debug", ProfileEntry::Concrete(debug_profile()));
		registry
	}

	/// Register a profile under a name. Last write wins.
	pub fn insert(&mut self, name: impl Into<String>, entry: ProfileEntry) {
		self.entries.insert(name.into(), entry);
	}

	pub fn get(&self, name: &str) -> Option<&ProfileEntry> {
		self.entries.get(name)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.entries.contains_key(name)
	}

	/// Overlay the user-level profile store.
	///
	/// Profile definitions replace wholesale per name; only profile
	/// application onto a project merges recursively. A user-level profile
	/// that declares its own repositories is applied but flagged, since it
	/// silently changes where dependencies come from on this machine only.
	pub fn overlay_user(&mut self, store: &ProfileStore, diagnostics: &mut Diagnostics) {
		for (name, entry) in store {
			if let ProfileEntry::Concrete(profile) = entry
				&& profile.contains_key("repositories")
			{
				diagnostics.warn(Diagnostic::UserProfileRepositories {
					profile: name.clone(),
				});
			}
			self.entries.insert(name.clone(), entry.clone());
		}
	}

	/// Overlay project-declared profiles. These take precedence over both
	/// built-ins and the user store, again wholesale per name.
	pub fn overlay_project(&mut self, profiles: &IndexMap<String, ProfileEntry>) {
		for (name, entry) in profiles {
			self.entries.insert(name.clone(), entry.clone());
		}
	}
}

fn default_profile() -> Profile {
	ConfigMap::from([
		(
			"resource-paths".to_string(),
			ConfigValue::Seq(vec![ConfigValue::from("dev-resources")]),
		),
		(
			"prep-tasks".to_string(),
			ConfigValue::Seq(vec![ConfigValue::from("compile")]),
		),
	])
}

fn debug_profile() -> Profile {
	ConfigMap::from([("debug".to_string(), ConfigValue::from(true))])
}
