//! Credential and identity types shared by the provider adapters.

pub mod identity;
pub mod token;

pub use identity::*;
pub use token::*;
