//! Demonstrates resolving a user identity from a bearer access token against a mock
//! provider using the default reqwest transport.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
use url::Url;
// self
use identity_relay::{
	auth::AccessToken,
	http::CallContext,
	provider::{self, IdentityProvider, ProviderKind, ProviderOverrides},
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let user_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/user").query_param("access_token", "demo-token");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"email\":\"member@example.com\"}");
		})
		.await;
	let overrides = ProviderOverrides::new().validate_url(Url::parse(&server.url("/api/user"))?);
	let cobot = provider::new_provider(ProviderKind::Cobot, overrides);
	let token = AccessToken::new("demo-token")?;
	let identity = cobot.fetch_identity(&CallContext::new(), &token).await?;

	println!("Resolved identity: {identity}.");

	user_mock.assert_async().await;

	Ok(())
}
