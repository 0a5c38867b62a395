//! Opaque bearer credential wrapper that redacts sensitive material.

// self
use crate::_prelude::*;

/// Error returned when access-token validation fails.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum AccessTokenError {
	/// The supplied credential was empty.
	#[error("Access token cannot be empty.")]
	Empty,
	/// The supplied credential contains whitespace characters.
	#[error("Access token contains whitespace.")]
	ContainsWhitespace,
}

/// Opaque bearer credential presented to prove an authenticated session.
///
/// The wrapper keeps the raw value out of logs: `Debug` and `Display` both print
/// `<redacted>`. Construction rejects empty and whitespace-bearing values, so adapters never
/// observe a blank credential. The crate never persists or serializes the token; it is owned
/// by the caller's session record and supplied per fetch.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);
impl AccessToken {
	/// Wraps a new credential after validation.
	pub fn new(value: impl Into<String>) -> Result<Self, AccessTokenError> {
		let value = value.into();

		if value.is_empty() {
			return Err(AccessTokenError::Empty);
		}
		if value.chars().any(char::is_whitespace) {
			return Err(AccessTokenError::ContainsWhitespace);
		}

		Ok(Self(value))
	}

	/// Returns the inner credential value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl AsRef<str> for AccessToken {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl Debug for AccessToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("AccessToken").field(&"<redacted>").finish()
	}
}
impl Display for AccessToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}
