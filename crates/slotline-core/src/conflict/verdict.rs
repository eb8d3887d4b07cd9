//! Conflict verdicts from the remote decision service.

use serde::{Deserialize, Serialize};

/// Severity classification returned by the remote service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ConflictType {
    #[default]
    None,
    Soft,
    Hard,
    Other(String),
}

impl ConflictType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::None => "NONE",
            Self::Soft => "SOFT",
            Self::Hard => "HARD",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for ConflictType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "NONE" => Self::None,
            "SOFT" => Self::Soft,
            "HARD" => Self::Hard,
            _ => Self::Other(raw),
        }
    }
}

impl From<&str> for ConflictType {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_string())
    }
}

impl From<ConflictType> for String {
    fn from(kind: ConflictType) -> Self {
        kind.as_str().to_string()
    }
}

/// Verdict for one candidate interval against a resource's existing bookings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictVerdict {
    #[serde(default)]
    pub has_conflict: bool,
    #[serde(rename = "type", default)]
    pub kind: ConflictType,
    #[serde(default)]
    pub message: String,
}

impl ConflictVerdict {
    pub fn presentation(&self) -> Presentation {
        presentation(self)
    }
}

/// Notification severity shown to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "SUCCESS",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Presentation {
    pub severity: Severity,
    pub message: String,
}

/// HARD is an error, SOFT a warning, anything else a success. The message
/// passes through untouched.
pub fn presentation(verdict: &ConflictVerdict) -> Presentation {
    let severity = match verdict.kind {
        ConflictType::Hard => Severity::Error,
        ConflictType::Soft => Severity::Warning,
        ConflictType::None | ConflictType::Other(_) => Severity::Success,
    };
    Presentation {
        severity,
        message: verdict.message.clone(),
    }
}

/// Request body for the remote conflict check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateCheck {
    pub resource_id: i64,
    pub start_time: String,
    pub end_time: String,
}

impl CandidateCheck {
    /// Returns `None` until a resource is chosen and both instants are filled
    /// in; the caller then asks the operator to complete the form instead of
    /// sending a request.
    pub fn new(resource_id: Option<i64>, start_time: &str, end_time: &str) -> Option<Self> {
        let resource_id = resource_id?;
        if start_time.trim().is_empty() || end_time.trim().is_empty() {
            return None;
        }
        Some(Self {
            resource_id,
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
        })
    }

    /// Build from separate date and time form fields.
    pub fn from_fields(
        resource_id: Option<i64>,
        start_date: &str,
        start_time: &str,
        end_date: &str,
        end_time: &str,
    ) -> Option<Self> {
        let start = crate::time::combine(start_date, start_time);
        let end = crate::time::combine(end_date, end_time);
        Self::new(resource_id, &start, &end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict(kind: &str, message: &str) -> ConflictVerdict {
        ConflictVerdict {
            has_conflict: kind != "NONE",
            kind: ConflictType::from(kind),
            message: message.into(),
        }
    }

    #[test]
    fn hard_is_error() {
        let shown = presentation(&verdict("HARD", "occupied"));
        assert_eq!(shown.severity, Severity::Error);
        assert_eq!(shown.message, "occupied");
    }

    #[test]
    fn soft_is_warning() {
        assert_eq!(presentation(&verdict("SOFT", "advisory")).severity, Severity::Warning);
    }

    #[test]
    fn none_and_unknown_are_success() {
        assert_eq!(presentation(&verdict("NONE", "free")).severity, Severity::Success);
        assert_eq!(presentation(&verdict("PARTIAL", "?")).severity, Severity::Success);
    }

    #[test]
    fn verdict_is_left_untouched() {
        let original = ConflictVerdict {
            has_conflict: true,
            kind: ConflictType::Other("FUZZY".into()),
            message: "  spaced  ".into(),
        };
        let copy = original.clone();
        let shown = original.presentation();
        assert_eq!(original, copy);
        assert_eq!(shown.message, "  spaced  ");
    }

    #[test]
    fn verdict_reads_service_json() {
        let json = r#"{"hasConflict": true, "type": "SOFT", "message": "maintenance advised"}"#;
        let v: ConflictVerdict = serde_json::from_str(json).unwrap();
        assert!(v.has_conflict);
        assert_eq!(v.kind, ConflictType::Soft);

        let odd: ConflictVerdict = serde_json::from_str(r#"{"type": "QUARANTINE"}"#).unwrap();
        assert_eq!(odd.kind, ConflictType::Other("QUARANTINE".into()));
        assert!(!odd.has_conflict);
    }

    #[test]
    fn severity_serializes_upper_case() {
        let json = serde_json::to_value(presentation(&verdict("HARD", "x"))).unwrap();
        assert_eq!(json["severity"], "ERROR");
    }

    #[test]
    fn candidate_requires_complete_form() {
        let fields = |resource, start_time| {
            CandidateCheck::from_fields(resource, "2024-01-01", start_time, "2024-01-01", "10:00")
        };
        assert!(fields(None, "09:00").is_none());
        assert!(fields(Some(3), "").is_none());

        let check = fields(Some(3), "09:00").unwrap();
        assert_eq!(check.start_time, "2024-01-01T09:00:00");
        let json = serde_json::to_value(&check).unwrap();
        assert_eq!(json["resourceId"], 3);
        assert_eq!(json["endTime"], "2024-01-01T10:00:00");
    }
}
