//! Boundary adapter from a TOML project manifest to the raw value domain.
//!
//! The core consumes an already-built map; this module builds one from the
//! definition format the surrounding tool uses. It is a plain tree mapping
//! with no evaluation semantics. Merge hints have no manifest syntax: they
//! are programmatic, set by hosts that construct maps directly.

use crate::error::{Result, StrataError};
use crate::value::{ConfigMap, ConfigValue};

/// Parse a TOML project definition into the raw configuration map.
pub fn project_from_toml_str(content: &str) -> Result<ConfigMap> {
	let table: toml::Table =
		toml::from_str(content).map_err(|source| StrataError::DefinitionParse { source })?;
	Ok(map_from_table(table))
}

fn map_from_table(table: toml::Table) -> ConfigMap {
	table
		.into_iter()
		.map(|(key, value)| (key, value_from_toml(value)))
		.collect()
}

/// Map a TOML value onto the configuration value domain.
///
/// TOML has no set syntax, so arrays always become sequences; datetimes are
/// carried as strings.
fn value_from_toml(value: toml::Value) -> ConfigValue {
	match value {
		toml::Value::String(text) => ConfigValue::String(text),
		toml::Value::Integer(number) => ConfigValue::Int(number),
		toml::Value::Float(number) => ConfigValue::Float(number),
		toml::Value::Boolean(flag) => ConfigValue::Bool(flag),
		toml::Value::Datetime(datetime) => ConfigValue::String(datetime.to_string()),
		toml::Value::Array(entries) => {
			ConfigValue::Seq(entries.into_iter().map(value_from_toml).collect())
		}
		toml::Value::Table(table) => ConfigValue::Map(map_from_table(table)),
	}
}
