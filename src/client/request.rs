//! Request description and failure policy shared by every operation
//!
//! Each public operation is a thin template: it describes one HTTP call with
//! an [`ApiRequest`] and picks a [`FailurePolicy`]. The client executes the
//! request and applies the policy in one place.

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;

/// Default trailing window for metrics reports, in days
pub const DEFAULT_PERIOD_DAYS: u32 = 30;

/// Default minimum review time for the attention list, in hours
pub const DEFAULT_MIN_HOURS: f64 = 0.0;

/// Default number of pull requests in the attention list
pub const DEFAULT_ATTENTION_LIMIT: u32 = 5;

/// What an operation does when its request fails.
///
/// Whatever the policy, the failure is logged exactly once by the client.
#[derive(Debug, Clone, PartialEq)]
pub enum FailurePolicy<T> {
    /// Swallow the failure and return the given value instead.
    Degrade(T),
    /// Propagate the failure to the caller.
    Raise,
}

impl<T> FailurePolicy<Vec<T>> {
    /// Degrade to an empty collection, used by list reads.
    pub fn empty_list() -> Self {
        FailurePolicy::Degrade(Vec::new())
    }
}

/// One HTTP call against the metrics service.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub(crate) method: Method,
    pub(crate) path: String,
    pub(crate) query: Vec<(&'static str, String)>,
    pub(crate) body: Option<Value>,
    pub(crate) fallback: &'static str,
}

impl ApiRequest {
    /// Describe a request. `fallback` is the message raised when the service
    /// gives no usable `detail`.
    pub fn new(method: Method, path: impl Into<String>, fallback: &'static str) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            fallback,
        }
    }

    pub fn get(path: impl Into<String>, fallback: &'static str) -> Self {
        Self::new(Method::GET, path, fallback)
    }

    pub fn post(path: impl Into<String>, fallback: &'static str) -> Self {
        Self::new(Method::POST, path, fallback)
    }

    pub fn delete(path: impl Into<String>, fallback: &'static str) -> Self {
        Self::new(Method::DELETE, path, fallback)
    }

    /// Append a query parameter
    pub fn query(mut self, key: &'static str, value: impl ToString) -> Self {
        self.query.push((key, value.to_string()));
        self
    }

    /// Append a query parameter when a value is present
    pub fn query_opt<V: ToString>(self, key: &'static str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.query(key, v),
            None => self,
        }
    }

    /// Attach a JSON body
    pub fn json<B: Serialize>(mut self, body: &B) -> Result<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Path relative to the base address
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query pairs in the order they will be sent
    pub fn query_pairs(&self) -> &[(&'static str, String)] {
        &self.query
    }

    /// Message used when the failure carries no detail
    pub fn fallback(&self) -> &'static str {
        self.fallback
    }
}
