//! Optional observability helpers for identity fetches.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `identity_relay.fetch` with the
//!   `provider` and `endpoint` fields, plus one error event per failed fetch.
//! - Enable `metrics` to increment the `identity_relay_fetch_total` counter for every
//!   attempt/success/failure, labeled by `provider` + `outcome`.
//!
//! Failure events carry the endpoint and the error, never the raw access token.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Outcome labels recorded for each fetch attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FetchOutcome {
	/// Entry to an adapter's fetch operation.
	Attempt,
	/// Successful identity resolution.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl FetchOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			FetchOutcome::Attempt => "attempt",
			FetchOutcome::Success => "success",
			FetchOutcome::Failure => "failure",
		}
	}
}
impl Display for FetchOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
