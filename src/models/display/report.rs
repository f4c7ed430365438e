//! Display models for analytics reports
//!
//! Reports are flat key/value documents, so they render as FIELD/VALUE rows
//! rather than one struct per report type. Nested lists (pull requests,
//! contributors) get their own tables.

use serde::Serialize;
use serde_json::Value;
use tabled::Tabled;

use super::common::{MISSING, format_hours, format_timestamp, or_missing, truncate_string};
use komet::client::models::{ContributorCommitStats, PrNeedingAttention};

/// One field of a report.
#[derive(Debug, Clone, PartialEq, Tabled, Serialize)]
pub struct ReportRow {
    #[tabled(rename = "FIELD")]
    pub field: String,

    #[tabled(rename = "VALUE")]
    pub value: String,
}

/// Flatten a report into rows, sorted by field name.
///
/// Keys listed in `skip` are left out; callers use it for nested lists
/// rendered separately.
pub fn report_rows<T: Serialize>(report: &T, skip: &[&str]) -> serde_json::Result<Vec<ReportRow>> {
    let rows = match serde_json::to_value(report)? {
        Value::Object(fields) => fields
            .into_iter()
            .filter(|(key, _)| !skip.contains(&key.as_str()))
            .map(|(key, value)| ReportRow {
                value: render_value(&key, &value),
                field: key,
            })
            .collect(),
        other => vec![ReportRow {
            field: "value".to_string(),
            value: render_value("value", &other),
        }],
    };

    Ok(rows)
}

fn render_value(key: &str, value: &Value) -> String {
    match value {
        Value::Null => MISSING.to_string(),
        Value::Bool(b) => (if *b { "yes" } else { "no" }).to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => format!("{:.2}", f),
            _ => n.to_string(),
        },
        Value::String(s) if key.starts_with("period_") || key.ends_with("_at") => {
            format_timestamp(s)
        }
        Value::String(s) => s.clone(),
        Value::Array(items) if items.is_empty() => MISSING.to_string(),
        Value::Array(items) => items
            .iter()
            .map(|item| render_value(key, item))
            .collect::<Vec<_>>()
            .join("; "),
        Value::Object(map) => map
            .iter()
            .map(|(k, v)| format!("{}={}", k, render_value(k, v)))
            .collect::<Vec<_>>()
            .join(", "),
    }
}

/// Pull request awaiting review, for the attention table.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct PrDisplay {
    #[tabled(rename = "PR")]
    pub id: String,

    #[tabled(rename = "TITLE")]
    pub title: String,

    #[tabled(rename = "IN REVIEW")]
    pub in_review: String,

    #[tabled(rename = "REVIEWS")]
    pub reviews: String,

    #[tabled(rename = "INDICATOR")]
    pub indicator: String,
}

impl From<&PrNeedingAttention> for PrDisplay {
    fn from(pr: &PrNeedingAttention) -> Self {
        let id = pr
            .external_id
            .clone()
            .or_else(|| pr.pr_id.map(|id| id.to_string()))
            .unwrap_or_else(|| MISSING.to_string());

        let reviews = match (pr.has_reviews, pr.review_cycles) {
            (_, Some(cycles)) => cycles.to_string(),
            (Some(false), None) => "0".to_string(),
            _ => MISSING.to_string(),
        };

        Self {
            id,
            title: pr
                .title
                .as_deref()
                .map(|t| truncate_string(t, 50))
                .unwrap_or_else(|| MISSING.to_string()),
            in_review: pr
                .time_in_review_hours
                .map(format_hours)
                .unwrap_or_else(|| MISSING.to_string()),
            reviews,
            indicator: or_missing(pr.indicator.as_deref()),
        }
    }
}

/// Per-contributor commit statistics.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ContributorDisplay {
    #[tabled(rename = "AUTHOR")]
    pub author: String,

    #[tabled(rename = "EMAIL")]
    pub email: String,

    #[tabled(rename = "COMMITS")]
    pub commits: String,

    #[tabled(rename = "LINES")]
    pub lines_changed: String,

    #[tabled(rename = "EXPERTISE")]
    pub expertise: String,
}

impl From<&ContributorCommitStats> for ContributorDisplay {
    fn from(stats: &ContributorCommitStats) -> Self {
        Self {
            author: stats
                .author_name
                .clone()
                .or_else(|| stats.author_id.map(|id| format!("#{}", id)))
                .unwrap_or_else(|| MISSING.to_string()),
            email: or_missing(stats.author_email.as_deref()),
            commits: or_missing(stats.commit_count),
            lines_changed: or_missing(stats.lines_changed),
            expertise: or_missing(stats.expertise_level.as_deref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row<'a>(rows: &'a [ReportRow], field: &str) -> &'a str {
        rows.iter()
            .find(|r| r.field == field)
            .map(|r| r.value.as_str())
            .unwrap_or_else(|| panic!("missing row {}", field))
    }

    #[test]
    fn test_report_rows_render_scalars() {
        let report = json!({
            "effectiveness_score": 0.8,
            "total_commits": 42,
            "has_alert": false,
            "trend": "up",
            "period_start": "2025-03-01T00:00:00"
        });

        let rows = report_rows(&report, &[]).unwrap();
        assert_eq!(row(&rows, "effectiveness_score"), "0.80");
        assert_eq!(row(&rows, "total_commits"), "42");
        assert_eq!(row(&rows, "has_alert"), "no");
        assert_eq!(row(&rows, "trend"), "up");
        assert_eq!(row(&rows, "period_start"), "2025-03-01 00:00");
    }

    #[test]
    fn test_report_rows_render_nested_values() {
        let report = json!({
            "recommendations": ["Review stale PRs", "Pair on hotspots"],
            "stage_times": {"review": 12.5, "testing": 3.0}
        });

        let rows = report_rows(&report, &[]).unwrap();
        assert_eq!(row(&rows, "recommendations"), "Review stale PRs; Pair on hotspots");
        assert_eq!(row(&rows, "stage_times"), "review=12.50, testing=3.00");
    }

    #[test]
    fn test_report_rows_skip_fields() {
        let report = json!({"total_count": 2, "prs": [{"pr_id": 1}]});

        let rows = report_rows(&report, &["prs"]).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].field, "total_count");
    }

    #[test]
    fn test_pr_display() {
        let pr: PrNeedingAttention = serde_json::from_value(json!({
            "pr_id": 9,
            "external_id": "PR-9",
            "title": "Split invoice generator",
            "time_in_review_hours": 60.0,
            "indicator": "red",
            "has_reviews": false
        }))
        .unwrap();

        let display = PrDisplay::from(&pr);
        assert_eq!(display.id, "PR-9");
        assert_eq!(display.in_review, "2d 12h");
        assert_eq!(display.reviews, "0");
        assert_eq!(display.indicator, "red");
    }

    #[test]
    fn test_contributor_display_uses_author_id_without_name() {
        let stats: ContributorCommitStats = serde_json::from_value(json!({
            "author_id": 5,
            "commit_count": 17
        }))
        .unwrap();

        let display = ContributorDisplay::from(&stats);
        assert_eq!(display.author, "#5");
        assert_eq!(display.commits, "17");
        assert_eq!(display.email, "--");
    }
}
