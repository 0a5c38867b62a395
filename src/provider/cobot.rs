//! Cobot identity-provider adapter.

// self
use crate::{
	_prelude::*,
	auth::{AccessToken, Identity},
	http::{CallContext, ProfileHttpClient, TokenPlacement},
	provider::{
		IdentityFuture, IdentityProvider, ProviderConfiguration, ProviderDefaults, ProviderKind,
		ProviderOverrides, profile,
	},
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestProfileClient;

/// Default endpoints and scope for the Cobot coworking platform.
const COBOT_DEFAULTS: ProviderDefaults = ProviderDefaults {
	name: "Cobot",
	login_url: Some("https://www.cobot.me/oauth2/authorize"),
	redeem_url: Some("https://www.cobot.me/oauth2/access_token"),
	profile_url: None,
	validate_url: Some("https://www.cobot.me/api/user"),
	scope: "email",
};

/// Expected JSON shape of the Cobot user endpoint.
#[derive(Debug, Deserialize)]
struct CobotProfile {
	#[serde(default)]
	email: String,
}

/// Adapter resolving identities against the Cobot coworking platform.
///
/// The validate endpoint is `GET https://www.cobot.me/api/user?access_token=<token>`; a
/// success response carries at least `{"email": "..."}`.
pub struct CobotProvider<C>
where
	C: ?Sized + ProfileHttpClient,
{
	configuration: ProviderConfiguration,
	http_client: Arc<C>,
}
impl<C> CobotProvider<C>
where
	C: ?Sized + ProfileHttpClient,
{
	/// Creates an adapter that reuses the caller-provided transport.
	pub fn with_http_client(overrides: ProviderOverrides, http_client: impl Into<Arc<C>>) -> Self {
		Self {
			configuration: ProviderConfiguration::resolve(overrides, &COBOT_DEFAULTS),
			http_client: http_client.into(),
		}
	}

	async fn resolve_email(&self, ctx: &CallContext, token: &AccessToken) -> Result<Identity> {
		let endpoint = &self.configuration.validate_url;
		let response: CobotProfile = profile::fetch_profile(
			self.http_client.as_ref(),
			ctx,
			ProviderKind::Cobot,
			endpoint,
			token,
			TokenPlacement::QueryParameter("access_token"),
		)
		.await?;

		if response.email.is_empty() {
			return Err(profile::fail(ProviderKind::Cobot, endpoint, Error::MissingEmail));
		}

		Ok(Identity::new(response.email))
	}
}
#[cfg(feature = "reqwest")]
impl CobotProvider<ReqwestProfileClient> {
	/// Creates an adapter backed by the crate's default reqwest transport.
	pub fn new(overrides: ProviderOverrides) -> Self {
		Self::with_http_client(overrides, ReqwestProfileClient::default())
	}
}
impl<C> IdentityProvider for CobotProvider<C>
where
	C: ?Sized + ProfileHttpClient,
{
	fn configuration(&self) -> &ProviderConfiguration {
		&self.configuration
	}

	fn fetch_identity<'a>(
		&'a self,
		ctx: &'a CallContext,
		token: &'a AccessToken,
	) -> IdentityFuture<'a> {
		profile::instrumented_fetch(
			ProviderKind::Cobot,
			&self.configuration.validate_url,
			self.resolve_email(ctx, token),
		)
	}
}
impl<C> Debug for CobotProvider<C>
where
	C: ?Sized + ProfileHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("CobotProvider").field("configuration", &self.configuration).finish()
	}
}
