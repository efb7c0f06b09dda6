use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::error::{Result, StrataError};
use crate::profiles::registry::{ProfileEntry, ProfileRegistry};
use crate::profiles::Profile;

/// Profile names that are consulted on every build and may legitimately be
/// unset; their absence from the registry is not worth a warning.
const IMPLICIT_PROFILES: [&str; 4] = ["default", "dev", "user", "test"];

/// Resolve a profile name to a concrete profile, following alias
/// indirection.
///
/// An alias chain that revisits a name is unterminated and fails with
/// [`StrataError::ProfileAliasCycle`]. A name absent from the registry
/// resolves to the empty profile, with an [`Diagnostic::UnknownProfile`]
/// warning unless the name is one of the implicit built-ins.
pub fn resolve(
	registry: &ProfileRegistry,
	name: &str,
	diagnostics: &mut Diagnostics,
) -> Result<Profile> {
	let mut chain = vec![name.to_string()];
	let mut current = name.to_string();

	loop {
		match registry.get(&current) {
			Some(ProfileEntry::Concrete(profile)) => return Ok(profile.clone()),
			Some(ProfileEntry::Alias(target)) => {
				if chain.iter().any(|seen| seen == target) {
					chain.push(target.clone());
					return Err(StrataError::ProfileAliasCycle { chain });
				}
				chain.push(target.clone());
				current = target.clone();
			}
			None => {
				if !IMPLICIT_PROFILES.contains(&current.as_str()) {
					diagnostics.warn(Diagnostic::UnknownProfile {
						name: current.clone(),
					});
				}
				return Ok(Profile::new());
			}
		}
	}
}

/// Resolve the requested names and order the profiles for a left fold.
///
/// The first requested name has the highest precedence. The assembly fold
/// lets the last-folded value win conflicts, so profiles come back in
/// reverse request order: the first-requested profile is folded in last and
/// wins.
pub fn select_and_order(
	registry: &ProfileRegistry,
	requested: &[&str],
	diagnostics: &mut Diagnostics,
) -> Result<Vec<Profile>> {
	let mut ordered = Vec::with_capacity(requested.len());
	for name in requested.iter().rev() {
		ordered.push(resolve(registry, name, diagnostics)?);
	}
	Ok(ordered)
}
