use crate::project::Project;
use crate::value::ConfigValue;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Keys naming a single filesystem location.
static SINGLE_PATH_KEY: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"-path$").expect("pattern is valid"));

/// Keys naming a list of filesystem locations.
static MULTI_PATH_KEY: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"-paths$").expect("pattern is valid"));

/// Rewrite every path-valued key from project-root-relative to absolute.
///
/// Keys matching `-path$` hold a single location; keys matching `-paths$`
/// hold a sequence of locations, rewritten element-wise. Values that are
/// already absolute, and values that are not strings, pass through
/// untouched, which makes this a no-op on an already-normalized project.
pub fn normalize_paths(mut project: Project) -> Project {
	let root = project.root().to_path_buf();

	for (key, value) in project.config_mut().iter_mut() {
		if MULTI_PATH_KEY.is_match(key) {
			if let ConfigValue::Seq(entries) = value {
				for entry in entries.iter_mut() {
					absolutize(&root, entry);
				}
			}
		} else if SINGLE_PATH_KEY.is_match(key) {
			absolutize(&root, value);
		}
	}

	project
}

/// Join a relative string value onto the root; leave everything else alone.
fn absolutize(root: &Path, value: &mut ConfigValue) {
	if let ConfigValue::String(path) = value
		&& !Path::new(path).is_absolute()
	{
		*path = root.join(path.as_str()).to_string_lossy().into_owned();
	}
}
