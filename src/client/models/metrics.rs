//! Metrics report models
//!
//! Reports are computed server-side over a trailing window and scoped to a
//! project, a repository, or a team. The same report kind comes back with a
//! different scope key depending on the endpoint (`project_id`,
//! `repository_id` or `team_id`), so every scope key is optional here.
//!
//! All report fields are optional: a report decodes from whatever subset the
//! service sends, and anything not modelled lands in `extra`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Aggregated effectiveness of a project across its repositories
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectEffectiveness {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository_count: Option<u32>,

    /// 0-100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_effectiveness_score: Option<f64>,

    /// 0-100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_technical_debt: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_active_contributors: Option<u32>,

    /// improving, stable or declining
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_alert: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_severity: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_start: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_end: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Effectiveness of a single repository
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepositoryEffectiveness {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository_name: Option<String>,

    /// 0-100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effectiveness_score: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_commits: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_contributors: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_hours_percentage: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekend_percentage: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub churn_rate: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_alert: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_severity: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_start: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_end: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Effectiveness of a team
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamEffectiveness {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effectiveness_score: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_commits: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_prs: Option<u32>,

    /// Hours
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_pr_review_time: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_contributors: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_alert: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_severity: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_start: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_end: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Technical debt derived from TODO markers in commit diffs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TechnicalDebtReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub todo_count: Option<u32>,

    /// up, down or stable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub todo_trend: Option<String>,

    /// 0-100, lower is better
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technical_debt_score: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_start: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_end: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Workflow stage where tasks spend the most time
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BottleneckReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<i64>,

    /// review, development, testing, todo or none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottleneck_stage: Option<String>,

    /// Hours
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_time_in_stage: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affected_tasks_count: Option<u32>,

    /// 0-100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact_score: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<String>>,

    /// Average hours per stage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage_times: Option<BTreeMap<String, f64>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_start: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_end: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Work-life balance signals from commit timing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeCareReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository_name: Option<String>,

    /// 0-100, higher is better
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_care_score: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_hours_percentage: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekend_percentage: Option<f64>,

    /// excellent, good, needs_attention or critical
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_start: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_end: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Pull request that has been waiting on review
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrNeedingAttention {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pr_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_in_review_hours: Option<f64>,

    /// Weather-style urgency marker chosen by the service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indicator: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_reviews: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_cycles: Option<u32>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Pull requests sorted by time spent in review
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrsNeedingAttention {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prs: Option<Vec<PrNeedingAttention>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u32>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Unique commit authors within the window
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActiveContributors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_contributors: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_commits: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_commits_per_contributor: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_start: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_end: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Commit statistics of one contributor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContributorCommitStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit_count: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lines_changed: Option<u64>,

    /// beginner, intermediate, advanced or expert
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expertise_level: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Commit counts per contributor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommitsPerPerson {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contributors: Option<Vec<ContributorCommitStats>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_contributors: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_start: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_end: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unmodelled_report_passes_through() {
        let doc = json!({"score": 0.8});
        let report: ProjectEffectiveness = serde_json::from_value(doc.clone()).unwrap();

        assert!(report.avg_effectiveness_score.is_none());
        assert_eq!(report.extra.get("score"), Some(&json!(0.8)));
        assert_eq!(serde_json::to_value(&report).unwrap(), doc);
    }

    #[test]
    fn test_bottleneck_report() {
        let doc = json!({
            "project_id": 3,
            "bottleneck_stage": "review",
            "avg_time_in_stage": 41.5,
            "affected_tasks_count": 9,
            "impact_score": 62.0,
            "recommendations": ["Add a second reviewer rotation"],
            "stage_times": {"todo": 3.0, "development": 20.25, "review": 41.5, "testing": 6.0},
            "period_start": "2025-05-01T00:00:00",
            "period_end": "2025-05-31T00:00:00"
        });
        let report: BottleneckReport = serde_json::from_value(doc.clone()).unwrap();

        assert_eq!(report.bottleneck_stage.as_deref(), Some("review"));
        assert_eq!(report.stage_times.as_ref().map(|s| s.len()), Some(4));
        assert!(report.repository_id.is_none());
        assert_eq!(serde_json::to_value(&report).unwrap(), doc);
    }

    #[test]
    fn test_prs_needing_attention_nested_items() {
        let doc = json!({
            "project_id": 42,
            "prs": [
                {"pr_id": 5, "title": "Fix flaky test", "time_in_review_hours": 30.0, "indicator": "🌩️", "has_reviews": false, "review_cycles": 0},
                {"pr_id": 8, "title": "Bump deps", "time_in_review_hours": 2.5, "indicator": "☀️", "has_reviews": true, "review_cycles": 1}
            ],
            "total_count": 2
        });
        let report: PrsNeedingAttention = serde_json::from_value(doc.clone()).unwrap();

        let prs = report.prs.as_ref().unwrap();
        assert_eq!(prs.len(), 2);
        assert_eq!(prs[0].pr_id, Some(5));
        assert_eq!(prs[1].title.as_deref(), Some("Bump deps"));
        assert_eq!(serde_json::to_value(&report).unwrap(), doc);
    }

    #[test]
    fn test_commits_per_person() {
        let doc = json!({
            "project_id": 1,
            "project_name": "Alpha",
            "contributors": [
                {"author_id": 1, "author_name": "Ann", "author_email": "ann@example.com", "commit_count": 40, "lines_changed": 5200, "expertise_level": "expert"}
            ],
            "total_contributors": 1
        });
        let report: CommitsPerPerson = serde_json::from_value(doc.clone()).unwrap();

        let contributors = report.contributors.as_ref().unwrap();
        assert_eq!(contributors[0].expertise_level.as_deref(), Some("expert"));
        assert_eq!(serde_json::to_value(&report).unwrap(), doc);
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let doc = json!({"todo_count": "many"});
        assert!(serde_json::from_value::<TechnicalDebtReport>(doc).is_err());
    }
}
