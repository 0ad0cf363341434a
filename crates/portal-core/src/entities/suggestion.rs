//! Suggestion box entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::DomainError;

/// Review state of a suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionStatus {
    #[default]
    New,
    Reviewed,
    Actioned,
}

impl SuggestionStatus {
    /// String form used in storage
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Reviewed => "reviewed",
            Self::Actioned => "actioned",
        }
    }
}

impl fmt::Display for SuggestionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SuggestionStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(Self::New),
            "reviewed" => Ok(Self::Reviewed),
            "actioned" => Ok(Self::Actioned),
            other => Err(DomainError::ValidationError(format!(
                "Unknown suggestion status: {other}"
            ))),
        }
    }
}

/// A staff suggestion submitted through the suggestion box.
///
/// Anonymous submissions carry no `submitted_by` reference at all, so the
/// reviewer side cannot deanonymize them from the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub id: Uuid,
    pub subject: String,
    pub body: String,
    pub is_anonymous: bool,
    pub submitted_by: Option<Uuid>,
    pub status: SuggestionStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Suggestion {
    /// Create a new suggestion; the author reference is dropped when anonymous
    pub fn new(subject: String, body: String, is_anonymous: bool, submitted_by: Option<Uuid>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            subject,
            body,
            is_anonymous,
            submitted_by: if is_anonymous { None } else { submitted_by },
            status: SuggestionStatus::default(),
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_suggestion_drops_author() {
        let author = Uuid::new_v4();
        let suggestion =
            Suggestion::new("Canteen".to_string(), "More fufu".to_string(), true, Some(author));
        assert!(suggestion.submitted_by.is_none());

        let named =
            Suggestion::new("Canteen".to_string(), "More fufu".to_string(), false, Some(author));
        assert_eq!(named.submitted_by, Some(author));
    }

    #[test]
    fn test_status_round_trip() {
        for status in [
            SuggestionStatus::New,
            SuggestionStatus::Reviewed,
            SuggestionStatus::Actioned,
        ] {
            assert_eq!(status.as_str().parse::<SuggestionStatus>().unwrap(), status);
        }
    }
}
