//! Canonical end-user identity resolved from a provider profile.

// self
use crate::_prelude::*;

/// Minimal canonical identity returned by a successful fetch.
///
/// Created fresh per call; carries no lifecycle beyond the call that produced it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
	/// Email address reported by the provider.
	///
	/// Guaranteed non-empty by the fetch pipeline, but not syntax-validated; RFC-level email
	/// checking, if desired, is a caller concern.
	pub email: String,
}
impl Identity {
	/// Creates an identity around the provider-reported email address.
	pub fn new(email: impl Into<String>) -> Self {
		Self { email: email.into() }
	}
}
impl Display for Identity {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.email)
	}
}
