// self
use crate::{_prelude::*, provider::ProviderKind};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedFetch<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedFetch<F> = F;

/// A span builder wrapping one identity fetch.
#[derive(Clone, Debug)]
pub struct FetchSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl FetchSpan {
	/// Creates a new span tagged with the provider kind and validate endpoint.
	pub fn new(kind: ProviderKind, endpoint: &Url) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!(
				"identity_relay.fetch",
				provider = kind.as_str(),
				endpoint = %endpoint,
			);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (kind, endpoint);

			Self {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedFetch<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// Emits one structured error event for a failed fetch (when tracing is enabled).
///
/// The event carries the provider, the configured endpoint, and the error; the access token
/// never reaches the endpoint value because transports attach it at dispatch time.
pub fn fetch_failure(kind: ProviderKind, endpoint: &Url, error: &Error) {
	#[cfg(feature = "tracing")]
	{
		tracing::error!(
			provider = kind.as_str(),
			endpoint = %endpoint,
			error = %error,
			"Identity fetch failed."
		);
	}

	#[cfg(not(feature = "tracing"))]
	{
		let _ = (kind, endpoint, error);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn fetch_span_noop_without_tracing() {
		let endpoint = Url::parse("https://www.cobot.me/api/user")
			.expect("Endpoint fixture should parse successfully.");
		let _span = FetchSpan::new(ProviderKind::Cobot, &endpoint);
	}

	#[cfg(feature = "tracing")]
	#[tokio::test]
	async fn instrument_wraps_future() {
		let endpoint = Url::parse("https://www.cobot.me/api/user")
			.expect("Endpoint fixture should parse successfully.");
		let span = FetchSpan::new(ProviderKind::Cobot, &endpoint);
		let value = span.instrument(async { 42 }).await;

		assert_eq!(value, 42);
	}
}
