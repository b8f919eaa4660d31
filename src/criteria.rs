//! Caller-supplied report parameters, distinct from the tabular data rows.

use serde::Deserialize;

/// Fixed notice appended to the metadata line for truncated row-sets.
const TRUNCATED_NOTICE: &str = "(PDF에는 최대 행수만 포함)";

/// Report parameters sent alongside the row data.
///
/// Every field is optional on the wire; the criteria object is constructed
/// per request, read only, and discarded after rendering.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReportCriteria {
    pub title: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub view_by: Option<String>,
    pub row_count: Option<u64>,
    pub total_count: Option<u64>,
    pub truncated: bool,
}

impl ReportCriteria {
    /// Resolves the view mode from `viewBy`.
    ///
    /// Anything other than exactly `"MONTH"` (case-insensitive) selects the
    /// daily layout, including absent and malformed values.  The asymmetric
    /// fallback is deliberate; callers relying on it include the admin UI's
    /// weekly views.
    pub fn is_daily(&self) -> bool {
        match &self.view_by {
            Some(value) => !value.eq_ignore_ascii_case("MONTH"),
            None => true,
        }
    }

    /// Returns the report title, falling back to the given default.
    pub fn title_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.title.as_deref().unwrap_or(fallback)
    }

    /// Builds the metadata line shown under the title.
    ///
    /// Format: `기간: {start} ~ {end}`, optionally extended with a
    /// `Rows: {rowCount}/{totalCount}` annotation and the truncation notice.
    pub fn period_line(&self) -> String {
        let start = self.start_date.as_deref().unwrap_or("");
        let end = self.end_date.as_deref().unwrap_or("");
        let mut line = format!("기간: {start} ~ {end}");

        let mut extras = Vec::new();
        if let (Some(rows), Some(total)) = (self.row_count, self.total_count) {
            extras.push(format!("Rows: {rows}/{total}"));
        }
        if self.truncated {
            extras.push(TRUNCATED_NOTICE.to_string());
        }
        if !extras.is_empty() {
            line.push_str("  |  ");
            line.push_str(&extras.join(" "));
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_view_by(value: Option<&str>) -> ReportCriteria {
        ReportCriteria {
            view_by: value.map(str::to_string),
            ..ReportCriteria::default()
        }
    }

    #[test]
    fn only_month_selects_the_monthly_layout() {
        assert!(with_view_by(None).is_daily());
        assert!(with_view_by(Some("DAY")).is_daily());
        assert!(with_view_by(Some("day")).is_daily());
        assert!(with_view_by(Some("WEEK")).is_daily());
        assert!(with_view_by(Some("anything")).is_daily());
        assert!(!with_view_by(Some("MONTH")).is_daily());
        assert!(!with_view_by(Some("month")).is_daily());
    }

    #[test]
    fn period_line_without_extras() {
        let criteria = ReportCriteria {
            start_date: Some("2024-01-01".into()),
            end_date: Some("2024-01-31".into()),
            ..ReportCriteria::default()
        };
        assert_eq!(criteria.period_line(), "기간: 2024-01-01 ~ 2024-01-31");
    }

    #[test]
    fn period_line_with_row_counts_and_truncation() {
        let criteria = ReportCriteria {
            start_date: Some("2024-01-01".into()),
            end_date: Some("2024-01-31".into()),
            row_count: Some(500),
            total_count: Some(1200),
            truncated: true,
            ..ReportCriteria::default()
        };
        assert_eq!(
            criteria.period_line(),
            "기간: 2024-01-01 ~ 2024-01-31  |  Rows: 500/1200 (PDF에는 최대 행수만 포함)"
        );
    }

    #[test]
    fn row_annotation_requires_both_counts() {
        let criteria = ReportCriteria {
            row_count: Some(500),
            ..ReportCriteria::default()
        };
        assert_eq!(criteria.period_line(), "기간:  ~ ");
    }

    #[test]
    fn criteria_deserializes_from_camel_case() {
        let criteria: ReportCriteria = serde_json::from_str(
            r#"{"title":"T","startDate":"2024-01-01","endDate":"2024-01-31",
                "viewBy":"MONTH","rowCount":10,"totalCount":20,"truncated":true}"#,
        )
        .expect("criteria parses");
        assert_eq!(criteria.title.as_deref(), Some("T"));
        assert!(!criteria.is_daily());
        assert!(criteria.truncated);
    }
}
