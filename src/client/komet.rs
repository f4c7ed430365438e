//! Metrics service client implementation

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client as HttpClient;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::api::{MetricsApi, MockDataApi, ResourceApi};
use super::models::{
    ActiveContributors, AddTeamMemberRequest, BottleneckReport, CommitsPerPerson,
    CreateProjectRequest, CreateRepositoryRequest, CreateTeamRequest, EmployeeCareReport,
    MockDataSummary, Project, ProjectEffectiveness, PrsNeedingAttention, Repository,
    RepositoryEffectiveness, StatusMessage, Team, TeamEffectiveness, TeamMember,
    TechnicalDebtReport,
};
use super::request::{
    ApiRequest, DEFAULT_ATTENTION_LIMIT, DEFAULT_MIN_HOURS, DEFAULT_PERIOD_DAYS, FailurePolicy,
};
use crate::config::Config;
use crate::error::{ApiError, Result};

/// Scope a metrics report is computed over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MetricScope {
    Project,
    Repository,
    Team,
}

impl MetricScope {
    fn as_path(self) -> &'static str {
        match self {
            MetricScope::Project => "project",
            MetricScope::Repository => "repository",
            MetricScope::Team => "team",
        }
    }
}

/// Build the request for a windowed metrics report
fn metric_request(
    scope: MetricScope,
    id: i64,
    metric: &str,
    period_days: Option<u32>,
    fallback: &'static str,
) -> ApiRequest {
    ApiRequest::get(
        format!("/metrics/{}/{}/{}", scope.as_path(), id, metric),
        fallback,
    )
    .query("period_days", period_days.unwrap_or(DEFAULT_PERIOD_DAYS))
}

/// Extract a usable `detail` string from an error body
fn error_detail(body: &[u8]) -> Option<String> {
    #[derive(Deserialize)]
    struct ErrorBody {
        #[serde(default)]
        detail: Option<Value>,
    }

    let parsed: ErrorBody = serde_json::from_slice(body).ok()?;
    match parsed.detail? {
        Value::String(detail) if !detail.is_empty() => Some(detail),
        _ => None,
    }
}

fn describe_transport_error(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        "Request timed out".to_string()
    } else if err.is_connect() {
        format!("Failed to connect to API: {}", err)
    } else {
        err.to_string()
    }
}

/// Metrics service client
///
/// Stateless apart from the HTTP connection handle and the base address fixed
/// at construction. Calls are independent and may run concurrently.
#[derive(Debug, Clone)]
pub struct KometClient {
    http: HttpClient,
    base_url: String,
}

impl KometClient {
    /// Create a client for the service at `base_url`
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Client(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        })
    }

    /// Create a client from a validated configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        Self::new(&config.api_base, Duration::from_secs(config.timeout_secs))
    }

    /// Base address all paths are appended to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Execute one request and apply the failure policy.
    ///
    /// Success bodies are decoded into `T` and returned as-is. On failure the
    /// error has already been logged; `Degrade` swaps in its value and
    /// `Raise` hands the error back.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
        policy: FailurePolicy<T>,
    ) -> Result<T> {
        match self.send(&request).await {
            Ok(data) => Ok(data),
            Err(err) => match policy {
                FailurePolicy::Degrade(substitute) => {
                    debug!("{} {}: returning substitute result", request.method, request.path);
                    Ok(substitute)
                }
                FailurePolicy::Raise => Err(err.into()),
            },
        }
    }

    /// Run a list read, degrading to an empty list on failure
    async fn list<T: DeserializeOwned>(&self, request: ApiRequest) -> Vec<T> {
        self.execute(request, FailurePolicy::empty_list())
            .await
            .unwrap_or_default()
    }

    /// Run a read or mutation whose failure goes back to the caller
    async fn fetch<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        self.execute(request, FailurePolicy::Raise).await
    }

    /// Issue the HTTP call and normalize the outcome.
    ///
    /// Every failure is logged here, once.
    async fn send<T: DeserializeOwned>(
        &self,
        request: &ApiRequest,
    ) -> std::result::Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, request.path);
        debug!("{} {} {:?}", request.method, url, request.query);

        let mut builder = self.http.request(request.method.clone(), &url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(err) => {
                warn!("{}: {}", request.fallback, describe_transport_error(&err));
                return Err(ApiError::Request(request.fallback.to_string()));
            }
        };

        let status = response.status();
        let body = match response.bytes().await {
            Ok(body) => body,
            Err(err) => {
                warn!(
                    "{}: failed to read response body: {}",
                    request.fallback,
                    describe_transport_error(&err)
                );
                return Err(ApiError::Request(request.fallback.to_string()));
            }
        };

        if !status.is_success() {
            let message = error_detail(&body).unwrap_or_else(|| request.fallback.to_string());
            warn!("{}: HTTP {}: {}", request.fallback, status, message);
            return Err(ApiError::Request(message));
        }

        serde_json::from_slice(&body).map_err(|e| {
            warn!("{}: failed to parse response: {}", request.fallback, e);
            ApiError::InvalidResponse(format!("{}: {}", request.fallback, e))
        })
    }
}

#[async_trait]
impl ResourceApi for KometClient {
    async fn list_projects(&self) -> Vec<Project> {
        self.list(ApiRequest::get("/projects", "Failed to fetch projects"))
            .await
    }

    async fn get_project(&self, project_id: i64) -> Result<Project> {
        self.fetch(ApiRequest::get(
            format!("/projects/{}", project_id),
            "Failed to fetch project",
        ))
        .await
    }

    async fn create_project(&self, request: &CreateProjectRequest) -> Result<Project> {
        let request = ApiRequest::post("/projects", "Failed to create project").json(request)?;
        self.fetch(request).await
    }

    async fn delete_project(&self, project_id: i64) -> Result<StatusMessage> {
        self.fetch(ApiRequest::delete(
            format!("/projects/{}", project_id),
            "Failed to delete project",
        ))
        .await
    }

    async fn list_repositories(&self) -> Vec<Repository> {
        self.list(ApiRequest::get("/repositories", "Failed to fetch repositories"))
            .await
    }

    async fn list_project_repositories(&self, project_id: i64) -> Vec<Repository> {
        self.list(ApiRequest::get(
            format!("/projects/{}/repositories", project_id),
            "Failed to fetch project repositories",
        ))
        .await
    }

    async fn create_repository(&self, request: &CreateRepositoryRequest) -> Result<Repository> {
        let request =
            ApiRequest::post("/repositories", "Failed to create repository").json(request)?;
        self.fetch(request).await
    }

    async fn sync_repository(&self, repository_id: i64) -> Result<StatusMessage> {
        self.fetch(ApiRequest::post(
            format!("/repositories/{}/sync", repository_id),
            "Failed to sync repository",
        ))
        .await
    }

    async fn list_teams(&self) -> Vec<Team> {
        self.list(ApiRequest::get("/teams", "Failed to fetch teams"))
            .await
    }

    async fn get_team(&self, team_id: i64) -> Result<Team> {
        self.fetch(ApiRequest::get(
            format!("/teams/{}", team_id),
            "Failed to fetch team",
        ))
        .await
    }

    async fn create_team(&self, request: &CreateTeamRequest) -> Result<Team> {
        let request = ApiRequest::post("/teams", "Failed to create team").json(request)?;
        self.fetch(request).await
    }

    async fn delete_team(&self, team_id: i64) -> Result<StatusMessage> {
        self.fetch(ApiRequest::delete(
            format!("/teams/{}", team_id),
            "Failed to delete team",
        ))
        .await
    }

    async fn list_team_members(&self, team_id: i64) -> Vec<TeamMember> {
        self.list(ApiRequest::get(
            format!("/teams/{}/members", team_id),
            "Failed to fetch team members",
        ))
        .await
    }

    async fn add_team_member(&self, request: &AddTeamMemberRequest) -> Result<TeamMember> {
        let request =
            ApiRequest::post("/teams/members", "Failed to add team member").json(request)?;
        self.fetch(request).await
    }

    async fn remove_team_member(&self, member_id: i64) -> Result<StatusMessage> {
        self.fetch(ApiRequest::delete(
            format!("/teams/members/{}", member_id),
            "Failed to remove team member",
        ))
        .await
    }
}

#[async_trait]
impl MetricsApi for KometClient {
    async fn project_effectiveness(
        &self,
        project_id: i64,
        period_days: Option<u32>,
    ) -> Result<ProjectEffectiveness> {
        self.fetch(metric_request(
            MetricScope::Project,
            project_id,
            "effectiveness",
            period_days,
            "Failed to fetch project metrics",
        ))
        .await
    }

    async fn project_technical_debt(
        &self,
        project_id: i64,
        period_days: Option<u32>,
    ) -> Result<TechnicalDebtReport> {
        self.fetch(metric_request(
            MetricScope::Project,
            project_id,
            "technical-debt",
            period_days,
            "Failed to fetch technical debt",
        ))
        .await
    }

    async fn project_bottlenecks(
        &self,
        project_id: i64,
        period_days: Option<u32>,
    ) -> Result<BottleneckReport> {
        self.fetch(metric_request(
            MetricScope::Project,
            project_id,
            "bottlenecks",
            period_days,
            "Failed to fetch bottlenecks",
        ))
        .await
    }

    async fn project_employee_care(
        &self,
        project_id: i64,
        period_days: Option<u32>,
    ) -> Result<EmployeeCareReport> {
        self.fetch(metric_request(
            MetricScope::Project,
            project_id,
            "employee-care",
            period_days,
            "Failed to fetch employee care metrics",
        ))
        .await
    }

    async fn prs_needing_attention(
        &self,
        project_id: i64,
        min_hours: Option<f64>,
        limit: Option<u32>,
    ) -> Result<PrsNeedingAttention> {
        let request = ApiRequest::get(
            format!("/metrics/project/{}/prs-needing-attention", project_id),
            "Failed to fetch PRs needing attention",
        )
        .query("min_hours", min_hours.unwrap_or(DEFAULT_MIN_HOURS))
        .query("limit", limit.unwrap_or(DEFAULT_ATTENTION_LIMIT));

        self.fetch(request).await
    }

    async fn active_contributors(
        &self,
        project_id: i64,
        period_days: Option<u32>,
    ) -> Result<ActiveContributors> {
        self.fetch(metric_request(
            MetricScope::Project,
            project_id,
            "active-contributors",
            period_days,
            "Failed to fetch active contributors",
        ))
        .await
    }

    async fn commits_per_person(
        &self,
        project_id: i64,
        period_days: Option<u32>,
    ) -> Result<CommitsPerPerson> {
        self.fetch(metric_request(
            MetricScope::Project,
            project_id,
            "commits-per-person",
            period_days,
            "Failed to fetch commits per person",
        ))
        .await
    }

    async fn repository_effectiveness(
        &self,
        repository_id: i64,
        period_days: Option<u32>,
    ) -> Result<RepositoryEffectiveness> {
        self.fetch(metric_request(
            MetricScope::Repository,
            repository_id,
            "effectiveness",
            period_days,
            "Failed to fetch repository metrics",
        ))
        .await
    }

    async fn repository_technical_debt(
        &self,
        repository_id: i64,
        period_days: Option<u32>,
    ) -> Result<TechnicalDebtReport> {
        self.fetch(metric_request(
            MetricScope::Repository,
            repository_id,
            "technical-debt",
            period_days,
            "Failed to fetch repository technical debt",
        ))
        .await
    }

    async fn repository_bottlenecks(
        &self,
        repository_id: i64,
        period_days: Option<u32>,
    ) -> Result<BottleneckReport> {
        self.fetch(metric_request(
            MetricScope::Repository,
            repository_id,
            "bottlenecks",
            period_days,
            "Failed to fetch repository bottlenecks",
        ))
        .await
    }

    async fn repository_employee_care(
        &self,
        repository_id: i64,
        period_days: Option<u32>,
    ) -> Result<EmployeeCareReport> {
        self.fetch(metric_request(
            MetricScope::Repository,
            repository_id,
            "employee-care",
            period_days,
            "Failed to fetch repository employee care metrics",
        ))
        .await
    }

    async fn team_effectiveness(
        &self,
        team_id: i64,
        period_days: Option<u32>,
    ) -> Result<TeamEffectiveness> {
        self.fetch(metric_request(
            MetricScope::Team,
            team_id,
            "effectiveness",
            period_days,
            "Failed to fetch team metrics",
        ))
        .await
    }

    async fn team_technical_debt(
        &self,
        team_id: i64,
        period_days: Option<u32>,
    ) -> Result<TechnicalDebtReport> {
        self.fetch(metric_request(
            MetricScope::Team,
            team_id,
            "technical-debt",
            period_days,
            "Failed to fetch team technical debt",
        ))
        .await
    }

    async fn team_bottlenecks(
        &self,
        team_id: i64,
        period_days: Option<u32>,
    ) -> Result<BottleneckReport> {
        self.fetch(metric_request(
            MetricScope::Team,
            team_id,
            "bottlenecks",
            period_days,
            "Failed to fetch team bottlenecks",
        ))
        .await
    }
}

#[async_trait]
impl MockDataApi for KometClient {
    async fn generate_mock_data(&self) -> Result<MockDataSummary> {
        self.fetch(ApiRequest::post("/mock/generate", "Failed to generate mock data"))
            .await
    }

    async fn generate_project_mock_data(
        &self,
        project_id: i64,
        team_id: Option<i64>,
    ) -> Result<MockDataSummary> {
        let request = ApiRequest::post(
            format!("/projects/{}/generate-mock-data", project_id),
            "Failed to generate mock data",
        )
        .query_opt("team_id", team_id);

        self.fetch(request).await
    }

    async fn clear_mock_data(&self) -> Result<StatusMessage> {
        self.fetch(ApiRequest::delete("/mock/clear", "Failed to clear mock data"))
            .await
    }
}
