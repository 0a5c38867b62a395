// std
use std::time::{Duration, Instant};
// crates.io
use httpmock::prelude::*;
use url::Url;
// self
use identity_relay::{
	auth::AccessToken,
	error::{Error, TransportError},
	http::CallContext,
	provider::{BitbucketProvider, CobotProvider, IdentityProvider, ProviderOverrides},
};

fn token() -> AccessToken {
	AccessToken::new("sekrit-token").expect("Token fixture should be valid.")
}

fn cobot(server: &MockServer) -> CobotProvider<identity_relay::http::ReqwestProfileClient> {
	let overrides = ProviderOverrides::new().validate_url(
		Url::parse(&server.url("/api/user")).expect("Mock validate endpoint should parse."),
	);

	CobotProvider::new(overrides)
}

fn bitbucket(server: &MockServer) -> BitbucketProvider<identity_relay::http::ReqwestProfileClient> {
	let overrides = ProviderOverrides::new().validate_url(
		Url::parse(&server.url("/2.0/user/emails"))
			.expect("Mock validate endpoint should parse."),
	);

	BitbucketProvider::new(overrides)
}

#[tokio::test]
async fn fetch_identity_returns_the_decoded_email() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/user").query_param("access_token", "sekrit-token");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"email\":\"alice@example.com\"}");
		})
		.await;
	let provider = cobot(&server);
	let identity = provider
		.fetch_identity(&CallContext::new(), &token())
		.await
		.expect("Fetch should succeed against a healthy mock provider.");

	assert_eq!(identity.email, "alice@example.com");

	// Exactly one outbound request per invocation.
	mock.assert_async().await;
}

#[tokio::test]
async fn upstream_status_surfaces_the_code_and_is_permanent() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/user");
			then.status(401)
				.header("content-type", "application/json")
				.body("{\"error\":\"token revoked\"}");
		})
		.await;
	let provider = cobot(&server);
	let err = provider
		.fetch_identity(&CallContext::new(), &token())
		.await
		.expect_err("Revoked tokens should fail identity resolution.");

	assert!(matches!(err, Error::UpstreamStatus { status: 401 }));
	assert!(!err.is_retryable());

	mock.assert_async().await;
}

#[tokio::test]
async fn malformed_bodies_classify_as_decode_failures() {
	let server = MockServer::start_async().await;
	let _mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/user");
			then.status(200).header("content-type", "application/json").body("not json");
		})
		.await;
	let provider = cobot(&server);
	let err = provider
		.fetch_identity(&CallContext::new(), &token())
		.await
		.expect_err("A non-JSON body should fail identity resolution.");

	assert!(matches!(err, Error::Decode { .. }));
	assert!(!err.is_retryable());
}

#[tokio::test]
async fn empty_email_is_a_missing_field_not_a_success() {
	let server = MockServer::start_async().await;
	let _mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/user");
			then.status(200).header("content-type", "application/json").body("{\"email\":\"\"}");
		})
		.await;
	let provider = cobot(&server);
	let err = provider
		.fetch_identity(&CallContext::new(), &token())
		.await
		.expect_err("An empty email must never resolve to an identity.");

	assert!(matches!(err, Error::MissingEmail));
}

#[tokio::test]
async fn elapsed_deadline_cancels_the_fetch_promptly() {
	let server = MockServer::start_async().await;
	let _mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/user");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"email\":\"late@example.com\"}")
				.delay(Duration::from_secs(5));
		})
		.await;
	let provider = cobot(&server);
	let ctx = CallContext::new().with_timeout(Duration::from_millis(100));
	let started = Instant::now();
	let err = provider
		.fetch_identity(&ctx, &token())
		.await
		.expect_err("An elapsed deadline should abort the fetch.");

	assert!(started.elapsed() < Duration::from_secs(2), "Cancellation must be prompt.");
	assert!(matches!(err, Error::Transport(TransportError::Cancelled)));
	assert!(err.is_retryable());
}

#[tokio::test]
async fn bitbucket_selects_the_primary_address() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/2.0/user/emails").query_param("access_token", "sekrit-token");
			then.status(200).header("content-type", "application/json").body(
				"{\"values\":[\
					{\"email\":\"ci@example.com\",\"is_primary\":false},\
					{\"email\":\"bob@example.com\",\"is_primary\":true}\
				]}",
			);
		})
		.await;
	let provider = bitbucket(&server);
	let identity = provider
		.fetch_identity(&CallContext::new(), &token())
		.await
		.expect("Fetch should succeed when a primary address exists.");

	assert_eq!(identity.email, "bob@example.com");

	mock.assert_async().await;
}

#[tokio::test]
async fn bitbucket_without_a_primary_address_is_a_missing_field() {
	let server = MockServer::start_async().await;
	let _mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/2.0/user/emails");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"values\":[{\"email\":\"ci@example.com\",\"is_primary\":false}]}");
		})
		.await;
	let provider = bitbucket(&server);
	let err = provider
		.fetch_identity(&CallContext::new(), &token())
		.await
		.expect_err("An account without a primary address must not resolve.");

	assert!(matches!(err, Error::MissingEmail));
}
