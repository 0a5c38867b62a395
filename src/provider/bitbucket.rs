//! Bitbucket Cloud identity-provider adapter.

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

/// Default endpoints and scope for Bitbucket Cloud.
const BITBUCKET_DEFAULTS: ProviderDefaults = ProviderDefaults {
	name: "Bitbucket",
	login_url: Some("https://bitbucket.org/site/oauth2/authorize"),
	redeem_url: Some("https://bitbucket.org/site/oauth2/access_token"),
	profile_url: None,
	validate_url: Some("https://api.bitbucket.org/2.0/user/emails"),
	scope: "email",
};

/// Expected JSON shape of the Bitbucket email collection endpoint.
#[derive(Debug, Deserialize)]
struct BitbucketEmailList {
	#[serde(default)]
	values: Vec<BitbucketEmail>,
}

#[derive(Debug, Deserialize)]
struct BitbucketEmail {
	#[serde(default)]
	email: String,
	#[serde(default, rename = "is_primary")]
	primary: bool,
}

/// Adapter resolving identities against Bitbucket Cloud.
///
/// The validate endpoint is `https://api.bitbucket.org/2.0/user/emails`, queried with
/// `?access_token=<token>`; the response lists every address on the account and the adapter
/// selects the primary one. An account without a primary address resolves to a
/// missing-field failure, never to a placeholder.
pub struct BitbucketProvider<C>
where
	C: ?Sized + ProfileHttpClient,
{
	configuration: ProviderConfiguration,
	http_client: Arc<C>,
}
impl<C> BitbucketProvider<C>
where
	C: ?Sized + ProfileHttpClient,
{
	/// Creates an adapter that reuses the caller-provided transport.
	pub fn with_http_client(overrides: ProviderOverrides, http_client: impl Into<Arc<C>>) -> Self {
		Self {
			configuration: ProviderConfiguration::resolve(overrides, &BITBUCKET_DEFAULTS),
			http_client: http_client.into(),
		}
	}

	async fn resolve_email(&self, ctx: &CallContext, token: &AccessToken) -> Result<Identity> {
		let endpoint = &self.configuration.validate_url;
		let response: BitbucketEmailList = profile::fetch_profile(
			self.http_client.as_ref(),
			ctx,
			ProviderKind::Bitbucket,
			endpoint,
			token,
			TokenPlacement::QueryParameter("access_token"),
		)
		.await?;
		let primary = response
			.values
			.into_iter()
			.find(|entry| entry.primary && !entry.email.is_empty())
			.map(|entry| entry.email);

		match primary {
			Some(email) => Ok(Identity::new(email)),
			None => Err(profile::fail(ProviderKind::Bitbucket, endpoint, Error::MissingEmail)),
		}
	}
}
#[cfg(feature = "reqwest")]
impl BitbucketProvider<ReqwestProfileClient> {
	/// Creates an adapter backed by the crate's default reqwest transport.
	pub fn new(overrides: ProviderOverrides) -> Self {
		Self::with_http_client(overrides, ReqwestProfileClient::default())
	}
}
impl<C> IdentityProvider for BitbucketProvider<C>
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
			ProviderKind::Bitbucket,
			&self.configuration.validate_url,
			self.resolve_email(ctx, token),
		)
	}
}
impl<C> Debug for BitbucketProvider<C>
where
	C: ?Sized + ProfileHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("BitbucketProvider").field("configuration", &self.configuration).finish()
	}
}
