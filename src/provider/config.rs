//! Per-provider configuration and its defaulting contract.
//!
//! External setup supplies a partially populated [`ProviderOverrides`]; each adapter carries
//! a constant [`ProviderDefaults`] record; [`ProviderConfiguration::resolve`] merges the two
//! at construction time. The resolved bundle is immutable thereafter and owned exclusively
//! by its adapter.

// self
use crate::_prelude::*;

/// Immutable per-provider settings, fully resolved against the adapter's defaults.
///
/// The login, redeem, and profile endpoints are configuration passed through to the
/// (externally handled) authorization flow; only the validate endpoint is dereferenced by
/// this crate. A provider that authenticates via profile lookup always has one, so the field
/// is not optional here; [`ProviderConfiguration::resolve`] enforces the invariant when the
/// adapter is constructed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfiguration {
	/// Display name of the upstream service.
	pub name: String,
	/// Authorization endpoint opening the (externally handled) login flow.
	pub login_url: Option<Url>,
	/// Token endpoint used by the (externally handled) code redemption.
	pub redeem_url: Option<Url>,
	/// Optional profile endpoint for provider families that resolve identity there.
	pub profile_url: Option<Url>,
	/// Endpoint queried with the access token to retrieve the authenticated user's profile.
	pub validate_url: Url,
	/// Scope requested during the (externally handled) authorization step.
	pub scope: String,
}
impl ProviderConfiguration {
	/// Merges caller-supplied overrides with the adapter's hard-coded defaults.
	///
	/// Every field follows the same rule: a non-empty caller value is retained unchanged, an
	/// unset (or empty-string) value is replaced by the default. The operation is pure and
	/// never fails at runtime.
	///
	/// # Panics
	///
	/// Panics when neither the overrides nor the defaults supply a validate endpoint, or when
	/// a hard-coded default URL does not parse. Both are construction-time programming errors
	/// in the adapter's defaults record, not runtime conditions.
	pub fn resolve(overrides: ProviderOverrides, defaults: &ProviderDefaults) -> Self {
		let name = overrides
			.name
			.filter(|value| !value.is_empty())
			.unwrap_or_else(|| defaults.name.to_owned());
		let login_url = overrides.login_url.or_else(|| defaults.login_url.map(parse_default));
		let redeem_url = overrides.redeem_url.or_else(|| defaults.redeem_url.map(parse_default));
		let profile_url = overrides.profile_url.or_else(|| defaults.profile_url.map(parse_default));
		let validate_url = overrides
			.validate_url
			.or_else(|| defaults.validate_url.map(parse_default))
			.expect("Provider defaults must supply a validate endpoint.");
		let scope = overrides
			.scope
			.filter(|value| !value.is_empty())
			.unwrap_or_else(|| defaults.scope.to_owned());

		Self { name, login_url, redeem_url, profile_url, validate_url, scope }
	}
}

/// Endpoint and scope overrides supplied by external configuration.
///
/// Every field is optional; anything left unset falls back to the adapter's defaults when
/// the provider is constructed. The struct deserializes from the host's configuration layer
/// as-is.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderOverrides {
	/// Overrides the display name.
	pub name: Option<String>,
	/// Overrides the login (authorization) endpoint.
	pub login_url: Option<Url>,
	/// Overrides the redeem (token) endpoint.
	pub redeem_url: Option<Url>,
	/// Overrides the profile endpoint.
	pub profile_url: Option<Url>,
	/// Overrides the validate endpoint.
	pub validate_url: Option<Url>,
	/// Overrides the requested scope.
	pub scope: Option<String>,
}
impl ProviderOverrides {
	/// Creates an empty override set; every field falls back to the adapter's defaults.
	pub fn new() -> Self {
		Self::default()
	}

	/// Overrides the display name.
	pub fn name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());

		self
	}

	/// Overrides the login endpoint.
	pub fn login_url(mut self, url: Url) -> Self {
		self.login_url = Some(url);

		self
	}

	/// Overrides the redeem endpoint.
	pub fn redeem_url(mut self, url: Url) -> Self {
		self.redeem_url = Some(url);

		self
	}

	/// Overrides the profile endpoint.
	pub fn profile_url(mut self, url: Url) -> Self {
		self.profile_url = Some(url);

		self
	}

	/// Overrides the validate endpoint.
	pub fn validate_url(mut self, url: Url) -> Self {
		self.validate_url = Some(url);

		self
	}

	/// Overrides the requested scope.
	pub fn scope(mut self, scope: impl Into<String>) -> Self {
		self.scope = Some(scope.into());

		self
	}
}

/// Hard-coded per-service defaults applied when external configuration leaves a field unset.
///
/// Each adapter defines one constant record and passes it into
/// [`ProviderConfiguration::resolve`] at construction time; no process-wide state is
/// involved. Every adapter owns its own record, scope constant included; defaults are never
/// borrowed across adapters.
#[derive(Clone, Copy, Debug)]
pub struct ProviderDefaults {
	/// Default display name.
	pub name: &'static str,
	/// Default login (authorization) endpoint.
	pub login_url: Option<&'static str>,
	/// Default redeem (token) endpoint.
	pub redeem_url: Option<&'static str>,
	/// Default profile endpoint, for provider families that use one.
	pub profile_url: Option<&'static str>,
	/// Default validate endpoint; required for profile-lookup providers.
	pub validate_url: Option<&'static str>,
	/// Default requested scope.
	pub scope: &'static str,
}

fn parse_default(raw: &'static str) -> Url {
	Url::parse(raw).expect("Hard-coded provider default URLs must be valid absolute URLs.")
}
