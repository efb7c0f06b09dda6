use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// Ordered mapping from configuration key to value.
///
/// `IndexMap` gives the two properties every keyed collection in a project
/// needs: iteration order is insertion order, and `insert` on an existing
/// key replaces the value while the key keeps its original position.
pub type ConfigMap = IndexMap<String, ConfigValue>;

/// Per-value merge hint overriding the type-directed merge rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeHint {
	/// The annotated value yields to whatever merges on top of it,
	/// regardless of either value's shape.
	Displace,

	/// The annotated value wins verbatim when merged onto something;
	/// recursion, union, and concatenation are skipped.
	Replace,
}

/// A single configuration value: scalar, ordered map, set, or sequence.
///
/// A value may carry at most one [`MergeHint`] via the `Annotated` wrapper.
/// Hints are consulted only when the annotated value itself becomes a merge
/// operand; they are stripped once assembly completes, so a finished
/// [`crate::project::Project`] never exposes them.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
	Bool(bool),
	Int(i64),
	Float(f64),
	String(String),
	Map(ConfigMap),

	/// Order-preserving set, deduplicated by equality. Backed by a `Vec`
	/// because values contain floats, which have no coherent hash.
	Set(Vec<ConfigValue>),

	Seq(Vec<ConfigValue>),
	Annotated(MergeHint, Box<ConfigValue>),
}

impl ConfigValue {
	/// Build a set value, dropping duplicate members (first occurrence wins).
	pub fn set(members: impl IntoIterator<Item = ConfigValue>) -> ConfigValue {
		let mut deduped: Vec<ConfigValue> = Vec::new();
		for member in members {
			if !deduped.contains(&member) {
				deduped.push(member);
			}
		}
		ConfigValue::Set(deduped)
	}

	/// Mark a value as displaceable: any merge on top of it supersedes it.
	pub fn displace(value: ConfigValue) -> ConfigValue {
		ConfigValue::annotate(MergeHint::Displace, value)
	}

	/// Mark a value as replacing: it wins verbatim when merged onto a base.
	pub fn replace(value: ConfigValue) -> ConfigValue {
		ConfigValue::annotate(MergeHint::Replace, value)
	}

	fn annotate(hint: MergeHint, value: ConfigValue) -> ConfigValue {
		// Hints are mutually exclusive; re-annotating swaps the hint rather
		// than nesting wrappers.
		match value {
			ConfigValue::Annotated(_, inner) => ConfigValue::Annotated(hint, inner),
			plain => ConfigValue::Annotated(hint, Box::new(plain)),
		}
	}

	/// The merge hint carried by this value, if any.
	pub fn hint(&self) -> Option<MergeHint> {
		match self {
			ConfigValue::Annotated(hint, _) => Some(*hint),
			_ => None,
		}
	}

	/// The value beneath an annotation, or the value itself.
	pub fn payload(&self) -> &ConfigValue {
		match self {
			ConfigValue::Annotated(_, inner) => inner,
			other => other,
		}
	}

	/// Consume the annotation wrapper, if any.
	pub fn into_payload(self) -> ConfigValue {
		match self {
			ConfigValue::Annotated(_, inner) => *inner,
			other => other,
		}
	}

	/// Shape name used in mismatch diagnostics. Annotations are transparent.
	pub fn kind(&self) -> &'static str {
		match self {
			ConfigValue::Bool(_) => "boolean",
			ConfigValue::Int(_) => "integer",
			ConfigValue::Float(_) => "float",
			ConfigValue::String(_) => "string",
			ConfigValue::Map(_) => "map",
			ConfigValue::Set(_) => "set",
			ConfigValue::Seq(_) => "sequence",
			ConfigValue::Annotated(_, inner) => inner.kind(),
		}
	}

	/// Everything except `false` counts as truthy, including empty
	/// collections and empty strings.
	pub fn is_truthy(&self) -> bool {
		!matches!(self.payload(), ConfigValue::Bool(false))
	}

	/// Recursively remove annotation wrappers at every depth.
	pub fn strip_hints(self) -> ConfigValue {
		match self {
			ConfigValue::Annotated(_, inner) => inner.strip_hints(),
			ConfigValue::Map(map) => ConfigValue::Map(
				map.into_iter().map(|(key, value)| (key, value.strip_hints())).collect(),
			),
			ConfigValue::Set(members) => {
				ConfigValue::Set(members.into_iter().map(ConfigValue::strip_hints).collect())
			}
			ConfigValue::Seq(entries) => {
				ConfigValue::Seq(entries.into_iter().map(ConfigValue::strip_hints).collect())
			}
			scalar => scalar,
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match self.payload() {
			ConfigValue::String(value) => Some(value),
			_ => None,
		}
	}

	pub fn as_map(&self) -> Option<&ConfigMap> {
		match self.payload() {
			ConfigValue::Map(map) => Some(map),
			_ => None,
		}
	}

	pub fn as_seq(&self) -> Option<&[ConfigValue]> {
		match self.payload() {
			ConfigValue::Seq(entries) => Some(entries),
			_ => None,
		}
	}
}

impl From<bool> for ConfigValue {
	fn from(value: bool) -> Self {
		ConfigValue::Bool(value)
	}
}

impl From<i64> for ConfigValue {
	fn from(value: i64) -> Self {
		ConfigValue::Int(value)
	}
}

impl From<f64> for ConfigValue {
	fn from(value: f64) -> Self {
		ConfigValue::Float(value)
	}
}

impl From<&str> for ConfigValue {
	fn from(value: &str) -> Self {
		ConfigValue::String(value.to_string())
	}
}

impl From<String> for ConfigValue {
	fn from(value: String) -> Self {
		ConfigValue::String(value)
	}
}

impl From<Vec<ConfigValue>> for ConfigValue {
	fn from(entries: Vec<ConfigValue>) -> Self {
		ConfigValue::Seq(entries)
	}
}

impl From<ConfigMap> for ConfigValue {
	fn from(map: ConfigMap) -> Self {
		ConfigValue::Map(map)
	}
}

/// Serialization renders the plain data tree: sets and sequences both come
/// out as arrays, and annotations serialize as their payload.
impl Serialize for ConfigValue {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self {
			ConfigValue::Bool(value) => serializer.serialize_bool(*value),
			ConfigValue::Int(value) => serializer.serialize_i64(*value),
			ConfigValue::Float(value) => serializer.serialize_f64(*value),
			ConfigValue::String(value) => serializer.serialize_str(value),
			ConfigValue::Map(map) => {
				let mut state = serializer.serialize_map(Some(map.len()))?;
				for (key, value) in map {
					state.serialize_entry(key, value)?;
				}
				state.end()
			}
			ConfigValue::Set(members) => serialize_elements(members, serializer),
			ConfigValue::Seq(entries) => serialize_elements(entries, serializer),
			ConfigValue::Annotated(_, inner) => inner.serialize(serializer),
		}
	}
}

fn serialize_elements<S: Serializer>(
	elements: &[ConfigValue],
	serializer: S,
) -> Result<S::Ok, S::Error> {
	let mut state = serializer.serialize_seq(Some(elements.len()))?;
	for element in elements {
		state.serialize_element(element)?;
	}
	state.end()
}
