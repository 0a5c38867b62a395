// std
use std::{
	error::Error as StdError,
	fmt::{Display, Formatter, Result as FmtResult},
	sync::{Arc, Mutex},
};
// crates.io
use url::Url;
// self
use identity_relay::{
	auth::AccessToken,
	error::{Error, TransportError},
	http::{CallContext, ProfileFuture, ProfileHttpClient, ProfileRequest, ProfileResponse},
	provider::{self, CobotProvider, IdentityProvider, ProviderKind, ProviderOverrides},
};

#[derive(Debug)]
enum FakeTransportError {
	Unreachable,
}
impl Display for FakeTransportError {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		match self {
			Self::Unreachable => write!(f, "Provider unreachable."),
		}
	}
}
impl StdError for FakeTransportError {}

struct CannedProfileClient {
	status: u16,
	body: &'static str,
	requests: Mutex<Vec<Url>>,
}
impl CannedProfileClient {
	fn new(status: u16, body: &'static str) -> Self {
		Self { status, body, requests: Mutex::new(Vec::new()) }
	}

	fn recorded_requests(&self) -> Vec<Url> {
		self.requests.lock().expect("Request log mutex should not be poisoned.").clone()
	}
}
impl ProfileHttpClient for CannedProfileClient {
	fn get(&self, request: ProfileRequest) -> ProfileFuture<'_> {
		Box::pin(async move {
			self.requests
				.lock()
				.expect("Request log mutex should not be poisoned.")
				.push(request.request_url());

			Ok(ProfileResponse { status: self.status, body: self.body.as_bytes().to_vec() })
		})
	}
}

struct FailingProfileClient {
	cancelled: bool,
}
impl ProfileHttpClient for FailingProfileClient {
	fn get(&self, _request: ProfileRequest) -> ProfileFuture<'_> {
		let cancelled = self.cancelled;

		Box::pin(async move {
			if cancelled {
				Err(TransportError::Cancelled)
			} else {
				Err(TransportError::network(FakeTransportError::Unreachable))
			}
		})
	}
}

fn token() -> AccessToken {
	AccessToken::new("fake-token").expect("Token fixture should be valid.")
}

fn overrides() -> ProviderOverrides {
	ProviderOverrides::new().validate_url(
		Url::parse("https://sso.example.test/api/user")
			.expect("Override endpoint should parse successfully."),
	)
}

#[tokio::test]
async fn adapters_run_against_any_transport_implementation() {
	let client = Arc::new(CannedProfileClient::new(200, "{\"email\":\"alice@example.com\"}"));
	let provider = CobotProvider::<CannedProfileClient>::with_http_client(overrides(), client.clone());
	let identity = provider
		.fetch_identity(&CallContext::new(), &token())
		.await
		.expect("Fetch should succeed through the canned transport.");

	assert_eq!(identity.email, "alice@example.com");

	let recorded = client.recorded_requests();

	assert_eq!(recorded.len(), 1, "Exactly one outbound request per invocation.");
	assert_eq!(
		recorded[0].as_str(),
		"https://sso.example.test/api/user?access_token=fake-token",
	);
}

#[tokio::test]
async fn network_failures_classify_as_retryable_transport_errors() {
	let provider =
		CobotProvider::with_http_client(overrides(), FailingProfileClient { cancelled: false });
	let err = provider
		.fetch_identity(&CallContext::new(), &token())
		.await
		.expect_err("An unreachable provider should fail identity resolution.");

	assert!(matches!(err, Error::Transport(TransportError::Network { .. })));
	assert!(err.is_retryable());
}

#[tokio::test]
async fn transport_cancellations_keep_their_classification() {
	let provider =
		CobotProvider::with_http_client(overrides(), FailingProfileClient { cancelled: true });
	let err = provider
		.fetch_identity(&CallContext::new(), &token())
		.await
		.expect_err("A cancelled transport call should fail identity resolution.");

	assert!(matches!(err, Error::Transport(TransportError::Cancelled)));
	assert!(err.is_retryable());
}

#[tokio::test]
async fn factory_accepts_caller_provided_transports() {
	let body = "{\"values\":[{\"email\":\"bob@example.com\",\"is_primary\":true}]}";
	let client = Arc::new(CannedProfileClient::new(200, body));
	let provider =
		provider::new_provider_with_http_client::<CannedProfileClient>(ProviderKind::Bitbucket, overrides(), client);
	let identity = provider
		.fetch_identity(&CallContext::new(), &token())
		.await
		.expect("Fetch should succeed through the factory-built adapter.");

	assert_eq!(identity.email, "bob@example.com");
	assert_eq!(provider.configuration().name, "Bitbucket");
}
