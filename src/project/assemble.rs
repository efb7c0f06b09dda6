use crate::diagnostics::Diagnostics;
use crate::error::Result;
use crate::merge;
use crate::profiles::{ProfileRegistry, ProfileStore, resolver};
use crate::project::{Project, defaults, normalize};
use crate::value::ConfigMap;
use std::path::PathBuf;

/// Profile selection applied when the caller requests none.
pub const DEFAULT_PROFILE_NAMES: [&str; 3] = ["dev", "user", "default"];

/// Inputs to assembly beyond the raw project itself.
#[derive(Debug, Clone)]
pub struct AssembleOptions {
	/// Base registry of named profiles. Hosts may insert additional
	/// built-ins at start-up; the value is only read during assembly, so
	/// one registry can back any number of concurrent invocations.
	pub registry: ProfileRegistry,

	/// User-level profile store, loaded by a collaborator from the user's
	/// configuration location.
	pub user_profiles: ProfileStore,

	/// Requested profile names, highest precedence first. `None` selects
	/// [`DEFAULT_PROFILE_NAMES`].
	pub profiles: Option<Vec<String>>,
}

impl Default for AssembleOptions {
	fn default() -> Self {
		AssembleOptions {
			registry: ProfileRegistry::with_builtins(),
			user_profiles: ProfileStore::new(),
			profiles: None,
		}
	}
}

/// Assemble the effective project for one build invocation.
///
/// The pipeline is linear and single-pass: construct and validate, inject
/// defaults, resolve and fold the selected profiles, strip merge hints,
/// normalize paths. The returned project carries a separately-normalized
/// snapshot of its pre-profile state under
/// [`Project::without_profiles`].
pub fn assemble(
	raw: ConfigMap,
	root: PathBuf,
	options: &AssembleOptions,
	diagnostics: &mut Diagnostics,
) -> Result<Project> {
	let project = Project::from_raw(raw, root, diagnostics)?;
	let defaulted = defaults::inject_defaults(project, diagnostics);

	// The snapshot is normalized on its own; the working copy keeps its
	// hints so profile folds still honor displace/replace.
	let snapshot = normalize::normalize_paths(strip_hints(defaulted.clone()));

	let mut registry = options.registry.clone();
	registry.overlay_user(&options.user_profiles, diagnostics);
	registry.overlay_project(defaulted.profiles());

	let requested: Vec<&str> = match &options.profiles {
		Some(names) => names.iter().map(String::as_str).collect(),
		None => DEFAULT_PROFILE_NAMES.to_vec(),
	};
	let ordered = resolver::select_and_order(&registry, &requested, diagnostics)?;

	let mut assembled = defaulted;
	let mut config = std::mem::take(assembled.config_mut());
	for profile in ordered {
		config = merge::merge_maps(config, profile, diagnostics);
	}
	*assembled.config_mut() = config;

	let mut assembled = normalize::normalize_paths(strip_hints(assembled));
	assembled.set_without_profiles(snapshot);
	Ok(assembled)
}

/// Remove every merge hint; annotations do not survive assembly.
fn strip_hints(mut project: Project) -> Project {
	let config = std::mem::take(project.config_mut());
	*project.config_mut() = config
		.into_iter()
		.map(|(key, value)| (key, value.strip_hints()))
		.collect();
	project
}
