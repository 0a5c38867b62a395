//! Transport primitives for profile lookups.
//!
//! The module exposes [`ProfileHttpClient`], the crate's only dependency on an HTTP stack.
//! Adapters describe each lookup as a [`ProfileRequest`] (endpoint, credential, placement,
//! deadline) and receive a [`ProfileResponse`] (status, raw body) back; everything above this
//! boundary is HTTP-client agnostic. A reqwest-backed reference implementation ships behind
//! the `reqwest` feature.

// std
use std::ops::Deref;
// self
use crate::{_prelude::*, auth::AccessToken, error::TransportError};

/// Future returned by [`ProfileHttpClient::get`].
pub type ProfileFuture<'a> =
	Pin<Box<dyn Future<Output = Result<ProfileResponse, TransportError>> + 'a + Send>>;

/// Abstraction over HTTP transports capable of executing profile lookups.
///
/// Implementations must be `Send + Sync + 'static` so adapters can share them behind
/// `Arc<C>` without additional wrappers, and the returned future must be `Send` so fetches
/// can hop executors. Exactly one outbound request is issued per call; retry policy, if any,
/// belongs to the caller.
pub trait ProfileHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Executes one HTTP GET described by `request`.
	///
	/// The transport must honor [`ProfileRequest::timeout`]: when the deadline elapses while
	/// the request is outstanding, the future must resolve promptly with
	/// [`TransportError::Cancelled`] rather than hang. Dropping the future aborts the
	/// in-flight request.
	fn get(&self, request: ProfileRequest) -> ProfileFuture<'_>;
}

/// Where the bearer credential is attached on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenPlacement {
	/// Append the token as a query parameter with the given name.
	QueryParameter(&'static str),
	/// Send the token as an `Authorization: Bearer` header.
	BearerHeader,
}

/// One profile lookup, described transport-agnostically.
///
/// `Debug` output is safe to log: the credential is an [`AccessToken`] and redacts itself.
#[derive(Clone, Debug)]
pub struct ProfileRequest {
	/// Endpoint to call, without the credential attached.
	pub endpoint: Url,
	/// Bearer credential proving the authenticated session.
	pub token: AccessToken,
	/// Provider convention for attaching the credential.
	pub placement: TokenPlacement,
	/// Upper bound on the round trip, taken from the caller's [`CallContext`].
	pub timeout: Option<Duration>,
}
impl ProfileRequest {
	/// Creates a request for the given endpoint and credential.
	pub fn new(endpoint: Url, token: AccessToken, placement: TokenPlacement) -> Self {
		Self { endpoint, token, placement, timeout: None }
	}

	/// Attaches the optional round-trip deadline.
	pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
		self.timeout = timeout;

		self
	}

	/// Returns the URL to dispatch, with the credential attached for query placements.
	///
	/// Header placements leave the endpoint untouched; the transport sends the credential as
	/// an `Authorization` header instead.
	pub fn request_url(&self) -> Url {
		match self.placement {
			TokenPlacement::QueryParameter(name) => {
				let mut url = self.endpoint.clone();

				url.query_pairs_mut().append_pair(name, self.token.expose());

				url
			},
			TokenPlacement::BearerHeader => self.endpoint.clone(),
		}
	}
}

/// Raw outcome of a profile lookup, prior to decoding.
#[derive(Clone, Debug)]
pub struct ProfileResponse {
	/// HTTP status code returned by the provider.
	pub status: u16,
	/// Response body bytes.
	pub body: Vec<u8>,
}

/// Per-call settings threaded through an identity fetch.
///
/// The context carries the caller's cancellation signal: an optional deadline enforced by the
/// transport. Dropping the future returned by
/// [`IdentityProvider::fetch_identity`](crate::provider::IdentityProvider::fetch_identity)
/// also aborts the in-flight request, matching ordinary Rust future semantics.
#[derive(Clone, Debug, Default)]
pub struct CallContext {
	timeout: Option<Duration>,
}
impl CallContext {
	/// Creates a context with no deadline.
	pub fn new() -> Self {
		Self::default()
	}

	/// Bounds the whole fetch by the given deadline.
	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout = Some(timeout);

		self
	}

	/// Returns the configured deadline, if any.
	pub fn timeout(&self) -> Option<Duration> {
		self.timeout
	}
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
///
/// Profile lookups are plain GETs; configure any custom [`ReqwestClient`] with the TLS and
/// proxy settings your deployment needs and hand it to [`ReqwestProfileClient::with_client`].
#[cfg(feature = "reqwest")]
#[derive(Clone, Default)]
pub struct ReqwestProfileClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestProfileClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestProfileClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestProfileClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl ProfileHttpClient for ReqwestProfileClient {
	fn get(&self, request: ProfileRequest) -> ProfileFuture<'_> {
		let client = self.0.clone();

		Box::pin(async move {
			let mut builder = client.get(request.request_url());

			if let TokenPlacement::BearerHeader = request.placement {
				builder = builder.bearer_auth(request.token.expose());
			}
			if let Some(timeout) = request.timeout {
				builder = builder.timeout(timeout);
			}

			let response = builder.send().await.map_err(TransportError::from)?;
			let status = response.status().as_u16();
			let body = response.bytes().await.map_err(TransportError::from)?.to_vec();

			Ok(ProfileResponse { status, body })
		})
	}
}
