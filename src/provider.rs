//! Identity-provider adapters and the uniform contract they implement.
//!
//! `config` exposes the per-provider settings bundle ([`ProviderConfiguration`]) and its
//! defaulting contract. The adapters (`bitbucket`, `cobot`) each compose a resolved
//! configuration with their service-specific identity-extraction routine; everything else
//! (issuing the authenticated GET, checking the status, decoding the body, classifying and
//! logging failures) is shared plumbing.

pub mod config;

mod profile;

mod bitbucket;
mod cobot;

pub use bitbucket::*;
pub use cobot::*;
pub use config::*;

// self
use crate::{
	_prelude::*,
	auth::{AccessToken, Identity},
	http::{CallContext, ProfileHttpClient},
};

/// Future returned by [`IdentityProvider::fetch_identity`].
pub type IdentityFuture<'a> = Pin<Box<dyn Future<Output = Result<Identity>> + 'a + Send>>;

/// Built-in upstream services with a shipped adapter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
	/// Bitbucket Cloud.
	Bitbucket,
	/// Cobot coworking platform.
	Cobot,
}
impl ProviderKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			ProviderKind::Bitbucket => "bitbucket",
			ProviderKind::Cobot => "cobot",
		}
	}
}
impl Display for ProviderKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// The polymorphic capability implemented once per upstream service: resolve a bearer access
/// token into the authenticated user's canonical identity.
///
/// Implementations are stateless across calls except for their immutable configuration, so
/// concurrent fetches against the same adapter share no mutable state and need no locking.
pub trait IdentityProvider
where
	Self: Send + Sync,
{
	/// Returns the resolved configuration owned by this adapter.
	fn configuration(&self) -> &ProviderConfiguration;

	/// Resolves `token` into the authenticated user's identity.
	///
	/// Issues exactly one HTTP GET to the configured validate endpoint, with the token
	/// attached per provider convention, decodes the JSON response, and extracts the email
	/// address. Failures are logged once at the point of detection and returned as the crate
	/// [`Error`] taxonomy; no retries or fallback endpoints are attempted here. An
	/// [`AccessToken`] is non-empty by construction, so adapters never observe a blank
	/// credential. Cancellation follows `ctx`: an elapsed deadline resolves promptly with a
	/// cancellation-classified transport error, and dropping the returned future aborts the
	/// in-flight request.
	fn fetch_identity<'a>(
		&'a self,
		ctx: &'a CallContext,
		token: &'a AccessToken,
	) -> IdentityFuture<'a>;
}

/// Constructs a built-in adapter backed by the crate's default reqwest transport.
#[cfg(feature = "reqwest")]
pub fn new_provider(kind: ProviderKind, overrides: ProviderOverrides) -> Arc<dyn IdentityProvider> {
	match kind {
		ProviderKind::Bitbucket => Arc::new(BitbucketProvider::new(overrides)),
		ProviderKind::Cobot => Arc::new(CobotProvider::new(overrides)),
	}
}

/// Constructs a built-in adapter that reuses the caller-provided transport.
pub fn new_provider_with_http_client<C>(
	kind: ProviderKind,
	overrides: ProviderOverrides,
	http_client: impl Into<Arc<C>>,
) -> Arc<dyn IdentityProvider>
where
	C: ?Sized + ProfileHttpClient,
{
	match kind {
		ProviderKind::Bitbucket =>
			Arc::new(BitbucketProvider::with_http_client(overrides, http_client)),
		ProviderKind::Cobot => Arc::new(CobotProvider::with_http_client(overrides, http_client)),
	}
}
