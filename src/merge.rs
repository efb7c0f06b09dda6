//! Type-directed recursive merge of configuration values.
//!
//! This is the heart of profile application: every layered source (built-in
//! defaults, the project itself, each selected profile) is folded into one
//! effective configuration through [`merge`].

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::value::{ConfigMap, ConfigValue, MergeHint};

/// Combine two configuration values, with `overlay` taking precedence.
///
/// Dispatch order:
/// 1. A `displace`-hinted base always yields to the overlay, whatever the
///    shapes involved. The overlay keeps its own hint, so it still governs
///    later folds.
/// 2. A `replace`-hinted overlay wins verbatim; no recursion, union, or
///    concatenation happens.
/// 3. Two maps merge recursively key by key. One-sided keys pass through
///    untouched, hints included.
/// 4. Two sets union; base members keep their positions and unseen overlay
///    members are appended.
/// 5. Two sequences concatenate as overlay followed by base, so first-match
///    lookups over the result see the overlay first.
/// 6. Two scalars of the same kind resolve to the overlay, silently.
/// 7. Anything else is a shape mismatch: the overlay wins and one
///    [`Diagnostic::MergeTypeMismatch`] is recorded. Profile authors may
///    legitimately redefine a key's shape, so this is forgiving by design.
pub fn merge(base: ConfigValue, overlay: ConfigValue, diagnostics: &mut Diagnostics) -> ConfigValue {
	if base.hint() == Some(MergeHint::Displace) {
		return overlay;
	}
	if overlay.hint() == Some(MergeHint::Replace) {
		return overlay;
	}

	// Any remaining hint is not consulted at this level; peel both operands
	// before structural dispatch.
	let base = base.into_payload();
	let overlay = overlay.into_payload();

	match (base, overlay) {
		(ConfigValue::Map(base), ConfigValue::Map(overlay)) => {
			ConfigValue::Map(merge_maps(base, overlay, diagnostics))
		}
		(ConfigValue::Set(base), ConfigValue::Set(overlay)) => {
			ConfigValue::Set(union(base, overlay))
		}
		(ConfigValue::Seq(base), ConfigValue::Seq(overlay)) => {
			let mut merged = overlay;
			merged.extend(base);
			ConfigValue::Seq(merged)
		}
		(base, overlay) => {
			if base.kind() != overlay.kind() {
				diagnostics.warn(Diagnostic::MergeTypeMismatch {
					base_kind: base.kind(),
					overlay_kind: overlay.kind(),
				});
			}
			overlay
		}
	}
}

/// Merge two ordered maps key by key.
///
/// Keys already in `base` keep their original insertion position; keys only
/// in `overlay` are appended in overlay order.
pub fn merge_maps(
	base: ConfigMap,
	overlay: ConfigMap,
	diagnostics: &mut Diagnostics,
) -> ConfigMap {
	let mut merged = base;
	for (key, value) in overlay {
		let combined = match merged.get(&key) {
			Some(existing) => merge(existing.clone(), value, diagnostics),
			None => value,
		};
		merged.insert(key, combined);
	}
	merged
}

/// Union of two sets. Commutative over membership; order is base-first.
fn union(base: Vec<ConfigValue>, overlay: Vec<ConfigValue>) -> Vec<ConfigValue> {
	let mut merged = base;
	for member in overlay {
		if !merged.contains(&member) {
			merged.push(member);
		}
	}
	merged
}

#[cfg(test)]
mod tests {
	use super::*;

	fn map(entries: Vec<(&str, ConfigValue)>) -> ConfigValue {
		ConfigValue::Map(
			entries
				.into_iter()
				.map(|(key, value)| (key.to_string(), value))
				.collect(),
		)
	}

	#[test]
	fn test_maps_merge_recursively() {
		let mut diagnostics = Diagnostics::new();
		let base = map(vec![
			("a", ConfigValue::from(1)),
			("b", map(vec![("x", ConfigValue::from(1))])),
		]);
		let overlay = map(vec![
			("b", map(vec![("y", ConfigValue::from(2))])),
			("c", ConfigValue::from(3)),
		]);

		let merged = merge(base, overlay, &mut diagnostics);
		assert_eq!(
			merged,
			map(vec![
				("a", ConfigValue::from(1)),
				(
					"b",
					map(vec![
						("x", ConfigValue::from(1)),
						("y", ConfigValue::from(2)),
					])
				),
				("c", ConfigValue::from(3)),
			])
		);
		assert!(diagnostics.is_empty());
	}

	#[test]
	fn test_sets_union() {
		let mut diagnostics = Diagnostics::new();
		let base = ConfigValue::set(vec![ConfigValue::from(1), ConfigValue::from(2)]);
		let overlay = ConfigValue::set(vec![ConfigValue::from(2), ConfigValue::from(3)]);

		let merged = merge(base, overlay, &mut diagnostics);
		assert_eq!(
			merged,
			ConfigValue::Set(vec![
				ConfigValue::from(1),
				ConfigValue::from(2),
				ConfigValue::from(3),
			])
		);
	}

	#[test]
	fn test_sequences_concatenate_overlay_first() {
		let mut diagnostics = Diagnostics::new();
		let base = ConfigValue::Seq(vec![ConfigValue::from(3), ConfigValue::from(4)]);
		let overlay = ConfigValue::Seq(vec![ConfigValue::from(1), ConfigValue::from(2)]);

		let merged = merge(base, overlay, &mut diagnostics);
		assert_eq!(
			merged,
			ConfigValue::Seq(vec![
				ConfigValue::from(1),
				ConfigValue::from(2),
				ConfigValue::from(3),
				ConfigValue::from(4),
			])
		);
	}

	#[test]
	fn test_replace_overlay_wins_verbatim() {
		let mut diagnostics = Diagnostics::new();
		let base = map(vec![("a", ConfigValue::from(1))]);
		let overlay = ConfigValue::replace(map(vec![("b", ConfigValue::from(2))]));

		let merged = merge(base, overlay, &mut diagnostics);
		assert_eq!(
			merged,
			ConfigValue::replace(map(vec![("b", ConfigValue::from(2))]))
		);
		assert!(diagnostics.is_empty());
	}

	#[test]
	fn test_displaced_base_is_discarded() {
		let mut diagnostics = Diagnostics::new();
		let base = ConfigValue::displace(ConfigValue::from(5));
		let overlay = ConfigValue::from("x");

		let merged = merge(base, overlay, &mut diagnostics);
		assert_eq!(merged, ConfigValue::from("x"));
		assert!(diagnostics.is_empty());
	}

	#[test]
	fn test_same_kind_scalars_resolve_silently() {
		let mut diagnostics = Diagnostics::new();
		let merged = merge(ConfigValue::from(1), ConfigValue::from(2), &mut diagnostics);
		assert_eq!(merged, ConfigValue::from(2));
		assert!(diagnostics.is_empty());
	}

	#[test]
	fn test_kind_mismatch_warns_and_overlay_wins() {
		let mut diagnostics = Diagnostics::new();
		let overlay = map(vec![("a", ConfigValue::from(1))]);

		let merged = merge(ConfigValue::from(5), overlay.clone(), &mut diagnostics);
		assert_eq!(merged, overlay);
		assert_eq!(diagnostics.len(), 1);
		assert_eq!(
			diagnostics.entries()[0],
			Diagnostic::MergeTypeMismatch {
				base_kind: "integer",
				overlay_kind: "map",
			}
		);
	}

	#[test]
	fn test_nested_annotation_applies_during_recursion() {
		let mut diagnostics = Diagnostics::new();
		let base = map(vec![(
			"paths",
			ConfigValue::Seq(vec![ConfigValue::from("src")]),
		)]);
		let overlay = map(vec![(
			"paths",
			ConfigValue::replace(ConfigValue::Seq(vec![ConfigValue::from("only")])),
		)]);

		let merged = merge(base, overlay, &mut diagnostics);
		let paths = merged.as_map().unwrap().get("paths").unwrap();
		assert_eq!(
			paths.payload(),
			&ConfigValue::Seq(vec![ConfigValue::from("only")])
		);
	}

	#[test]
	fn test_one_sided_keys_keep_their_hints() {
		let mut diagnostics = Diagnostics::new();
		let base = map(vec![(
			"paths",
			ConfigValue::displace(ConfigValue::Seq(vec![ConfigValue::from("src")])),
		)]);
		let overlay = map(vec![("other", ConfigValue::from(1))]);

		let merged = merge(base, overlay, &mut diagnostics);
		let paths = merged.as_map().unwrap().get("paths").unwrap();
		assert_eq!(paths.hint(), Some(MergeHint::Displace));
	}

	#[test]
	fn test_int_vs_string_is_a_mismatch() {
		let mut diagnostics = Diagnostics::new();
		let merged = merge(
			ConfigValue::from(5),
			ConfigValue::from("five"),
			&mut diagnostics,
		);
		assert_eq!(merged, ConfigValue::from("five"));
		assert_eq!(diagnostics.len(), 1);
	}
}
