use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::merge;
use crate::project::Project;
use crate::value::{ConfigMap, ConfigValue};

/// Key that suppresses injection of the default repository list.
const OMIT_DEFAULT_REPOSITORIES: &str = "omit-default-repositories";

const REPOSITORIES: &str = "repositories";

/// Built-in defaults merged beneath every raw project.
fn default_config() -> ConfigMap {
	ConfigMap::from([
		("source-paths".to_string(), paths(["src"])),
		("resource-paths".to_string(), paths(["resources"])),
		("test-paths".to_string(), paths(["test"])),
		("compile-path".to_string(), ConfigValue::from("target/build")),
		("target-path".to_string(), ConfigValue::from("target")),
		("archive-exclusions".to_string(), paths([r"^\."])),
		(
			"bundle-exclusions".to_string(),
			paths([r"(?i)^meta/.*\.(sig|sum)$"]),
		),
	])
}

/// The well-known repositories every project resolves against unless it
/// opts out.
fn default_repositories() -> ConfigMap {
	ConfigMap::from([
		(
			"central".to_string(),
			repository_record("https://repo.strata.build/releases/"),
		),
		(
			"community".to_string(),
			repository_record("https://repo.strata.build/community/"),
		),
	])
}

fn repository_record(url: &str) -> ConfigValue {
	ConfigValue::Map(ConfigMap::from([(
		"url".to_string(),
		ConfigValue::from(url),
	)]))
}

fn paths<const N: usize>(entries: [&str; N]) -> ConfigValue {
	ConfigValue::Seq(entries.into_iter().map(ConfigValue::from).collect())
}

/// Merge the built-in defaults beneath the project configuration.
///
/// Every key follows the engine's recursive rule except `repositories`:
/// declared repositories add to the default list rather than concatenating
/// or replacing it, keyed by id, unless `omit-default-repositories` is
/// truthy, in which case only the declared list survives.
pub fn inject_defaults(mut project: Project, diagnostics: &mut Diagnostics) -> Project {
	let mut config = std::mem::take(project.config_mut());

	let declared = config.shift_remove(REPOSITORIES).map(ConfigValue::into_payload);
	let omit = config
		.get(OMIT_DEFAULT_REPOSITORIES)
		.is_some_and(ConfigValue::is_truthy);

	let mut merged = merge::merge_maps(default_config(), config, diagnostics);
	if let Some(repositories) = layer_repositories(omit, declared, diagnostics) {
		merged.insert(REPOSITORIES.to_string(), repositories);
	}

	*project.config_mut() = merged;
	project
}

/// Layer declared repositories over the defaults by id.
///
/// A re-declared id replaces the default entry's value wholesale while the
/// id keeps its original position in the list; new ids append in
/// declaration order.
fn layer_repositories(
	omit: bool,
	declared: Option<ConfigValue>,
	diagnostics: &mut Diagnostics,
) -> Option<ConfigValue> {
	let base = if omit {
		ConfigMap::new()
	} else {
		default_repositories()
	};

	match declared {
		None if omit => None,
		None => Some(ConfigValue::Map(base)),
		Some(ConfigValue::Map(entries)) => {
			let mut layered = base;
			for (id, value) in entries {
				layered.insert(id, normalize_repository(value));
			}
			Some(ConfigValue::Map(layered))
		}
		Some(other) => {
			diagnostics.warn(Diagnostic::MergeTypeMismatch {
				base_kind: "map",
				overlay_kind: other.kind(),
			});
			Some(other)
		}
	}
}

/// A plain-string repository declaration is shorthand for `{url = ...}`.
fn normalize_repository(value: ConfigValue) -> ConfigValue {
	match value {
		ConfigValue::String(url) => repository_record(&url),
		other => other,
	}
}
