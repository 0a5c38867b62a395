//! Failure taxonomy shared by every identity-provider adapter.
//!
//! The four kinds mirror the ways a profile lookup can fail: the transport broke, the
//! provider answered with a non-success status, the body did not decode, or the decoded
//! profile carried no usable email. Callers branch on the variant (or on
//! [`Error::is_retryable`]) instead of string-matching messages.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical identity-resolution error exposed by public APIs.
///
/// Every variant except [`Error::Transport`] is permanent for the failing call: retrying
/// without changing configuration or credentials will not help.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Network-level failure (DNS, connection, cancellation); safe to retry.
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Profile endpoint answered with a non-success HTTP status.
	#[error("Profile endpoint returned HTTP status {status}.")]
	UpstreamStatus {
		/// Status code returned by the provider.
		status: u16,
	},
	/// Profile endpoint body is not the expected JSON shape.
	#[error("Profile endpoint returned a malformed response.")]
	Decode {
		/// Structured parsing failure, including the JSON path that failed.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// Decode succeeded but the profile carries no usable email address.
	#[error("Profile response is missing an email address.")]
	MissingEmail,
}
impl Error {
	/// Indicates whether retrying the fetch may succeed.
	///
	/// Only transport failures qualify; status, decode, and missing-field failures point at
	/// configuration or upstream problems a retry cannot fix.
	pub fn is_retryable(&self) -> bool {
		matches!(self, Self::Transport(_))
	}
}

/// Transport-level failures (network, IO, cancellation).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the profile endpoint.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// The call context deadline elapsed or the request was aborted in flight.
	#[error("Profile request was cancelled before the provider responded.")]
	Cancelled,
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the profile endpoint.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		if e.is_timeout() { Self::Cancelled } else { Self::network(e) }
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn only_transport_failures_are_retryable() {
		assert!(Error::from(TransportError::Cancelled).is_retryable());
		assert!(
			Error::from(TransportError::Io(std::io::Error::other("connection reset")))
				.is_retryable()
		);
		assert!(!Error::UpstreamStatus { status: 401 }.is_retryable());
		assert!(!Error::MissingEmail.is_retryable());
	}

	#[test]
	fn status_failures_report_the_code() {
		let err = Error::UpstreamStatus { status: 503 };

		assert_eq!(err.to_string(), "Profile endpoint returned HTTP status 503.");
	}
}
