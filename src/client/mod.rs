//! Metrics service API client

pub mod api;
pub mod komet;
pub mod models;
pub mod request;

pub use api::{MetricsApi, MockDataApi, ResourceApi};
pub use komet::KometClient;
pub use request::{
    ApiRequest, DEFAULT_ATTENTION_LIMIT, DEFAULT_MIN_HOURS, DEFAULT_PERIOD_DAYS, FailurePolicy,
};

/// Full metrics service surface
///
/// Blanket-implemented for anything that implements the three sub-traits.
pub trait KometApi: ResourceApi + MetricsApi + MockDataApi {}

impl<T: ResourceApi + MetricsApi + MockDataApi> KometApi for T {}
