//! Komet - client for the Git-Komet team metrics service
//!
//! [`client::KometClient`] exposes one async method per service operation.
//! List reads degrade to an empty list when the service fails; every other
//! operation returns an [`error::Error`] carrying a user-facing message.

pub mod client;
pub mod config;
pub mod error;

pub use client::{KometApi, KometClient};
pub use config::Config;
pub use error::{ApiError, Error, Result};
