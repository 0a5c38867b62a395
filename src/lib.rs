//! Pluggable OAuth 2.0 identity-provider adapters: resolve bearer access tokens to verified
//! user identities behind one uniform, transport-agnostic contract.
//!
//! The crate covers the post-authentication "resolve identity from a token" step of a
//! reverse proxy: each upstream service contributes an adapter bundling its endpoint
//! defaults with its identity-extraction routine, while the OAuth 2.0 handshake itself,
//! session storage, and HTTP serving stay with the host.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod error;
pub mod http;
pub mod obs;
pub mod provider;

mod _prelude {
	pub use std::{
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
		time::Duration,
	};

	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _, tokio as _};
