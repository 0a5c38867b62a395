//! Shared request→decode pipeline behind every adapter.
//!
//! Adapters contribute endpoints and extraction; this module owns the single authenticated
//! GET, the status check, the JSON decode, and the one log entry per detected failure.

// crates.io
use serde::de::DeserializeOwned;
// self
use crate::{
	_prelude::*,
	auth::{AccessToken, Identity},
	http::{CallContext, ProfileHttpClient, ProfileRequest, TokenPlacement},
	obs::{self, FetchOutcome, FetchSpan},
	provider::{IdentityFuture, ProviderKind},
};

/// Wraps an adapter's extraction future with span instrumentation and outcome accounting.
pub(crate) fn instrumented_fetch<'a, F>(
	kind: ProviderKind,
	endpoint: &Url,
	fut: F,
) -> IdentityFuture<'a>
where
	F: 'a + Future<Output = Result<Identity>> + Send,
{
	let span = FetchSpan::new(kind, endpoint);

	Box::pin(span.instrument(async move {
		obs::record_fetch_outcome(kind, FetchOutcome::Attempt);

		let result = fut.await;
		let outcome = if result.is_ok() { FetchOutcome::Success } else { FetchOutcome::Failure };

		obs::record_fetch_outcome(kind, outcome);

		result
	}))
}

/// Issues the single authenticated GET and decodes the success body into `T`.
///
/// Exactly one outbound request per invocation; 2xx is success (providers answer 200 in
/// practice), anything else classifies as [`Error::UpstreamStatus`].
pub(crate) async fn fetch_profile<C, T>(
	http_client: &C,
	ctx: &CallContext,
	kind: ProviderKind,
	endpoint: &Url,
	token: &AccessToken,
	placement: TokenPlacement,
) -> Result<T>
where
	C: ?Sized + ProfileHttpClient,
	T: DeserializeOwned,
{
	let request =
		ProfileRequest::new(endpoint.clone(), token.clone(), placement).with_timeout(ctx.timeout());
	let response = match http_client.get(request).await {
		Ok(response) => response,
		Err(err) => return Err(fail(kind, endpoint, err.into())),
	};

	if !(200..300).contains(&response.status) {
		return Err(fail(kind, endpoint, Error::UpstreamStatus { status: response.status }));
	}

	let mut deserializer = serde_json::Deserializer::from_slice(&response.body);

	serde_path_to_error::deserialize(&mut deserializer)
		.map_err(|source| fail(kind, endpoint, Error::Decode { source }))
}

/// Logs a failure once at the point of detection, then hands it back for propagation.
///
/// The log entry carries the provider and configured endpoint, never the raw token.
pub(crate) fn fail(kind: ProviderKind, endpoint: &Url, error: Error) -> Error {
	obs::fetch_failure(kind, endpoint, &error);

	error
}
