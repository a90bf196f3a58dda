use serde::{Deserialize, Serialize};
use std::fmt;
use time::OffsetDateTime;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Safety Concern")]
    Safety,
    #[serde(rename = "Lost & Found")]
    LostFound,
    #[serde(rename = "Infrastructure")]
    Infrastructure,
    #[serde(rename = "Suspicious Activity")]
    Suspicious,
    #[serde(rename = "Community Event")]
    Community,
    #[serde(rename = "Other")]
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Safety,
        Category::LostFound,
        Category::Infrastructure,
        Category::Suspicious,
        Category::Community,
        Category::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Safety => "Safety Concern",
            Category::LostFound => "Lost & Found",
            Category::Infrastructure => "Infrastructure",
            Category::Suspicious => "Suspicious Activity",
            Category::Community => "Community Event",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered from least to most urgent, so `Severity::High > Severity::Medium`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Low,
        Severity::Medium,
        Severity::High,
        Severity::Critical,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportStatus {
    #[default]
    Open,
    Investigating,
    Resolved,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub severity: Severity,
    pub location: String,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub votes: u32,
    pub status: ReportStatus,
    pub author: String,
}

/// The fields a user supplies when filing a report. Everything else is
/// assigned by the store.
#[derive(Clone, Debug, PartialEq)]
pub struct ReportDraft {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub severity: Severity,
    pub location: String,
}

/// Suggested title, category and severity for an incident description.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub title: String,
    pub category: Category,
    pub severity: Severity,
}

impl Classification {
    pub const FALLBACK_TITLE: &'static str = "New Report";

    /// Low-confidence default used whenever analysis fails.
    pub fn fallback() -> Self {
        Self {
            title: Self::FALLBACK_TITLE.to_string(),
            category: Category::Other,
            severity: Severity::Low,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub text: String,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn category_serializes_as_display_label() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.label()));
        }
    }

    #[test]
    fn severity_is_ordered() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
        assert!(Severity::High < Severity::Critical);
    }

    #[test]
    fn report_timestamp_serializes_as_rfc3339() {
        let report = Report {
            id: "42".to_string(),
            title: "Pothole".to_string(),
            description: "Deep pothole near the clinic".to_string(),
            category: Category::Infrastructure,
            severity: Severity::Medium,
            location: "Chitepo Ave".to_string(),
            timestamp: datetime!(2025-03-01 08:30:00 UTC),
            votes: 3,
            status: ReportStatus::Investigating,
            author: "Rudo".to_string(),
        };

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["timestamp"], "2025-03-01T08:30:00Z");
        assert_eq!(value["category"], "Infrastructure");
        assert_eq!(value["status"], "Investigating");
    }

    #[test]
    fn classification_rejects_unknown_category() {
        let parsed = serde_json::from_str::<Classification>(
            r#"{"title":"x","category":"Weather","severity":"Low"}"#,
        );
        assert!(parsed.is_err());
    }
}
