use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A court case returned by one of the legal search adapters, normalized
/// into the common shape every source is mapped to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseHit {
    pub name: String,
    pub court: String,
    pub year: String,
    pub url: String,
    pub confidence: f32,
}

impl CaseHit {
    /// Error placeholder record carried inside a result list instead of
    /// failing the whole search (adapters never raise to the caller).
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            name: message.into(),
            court: String::new(),
            year: String::new(),
            url: String::new(),
            confidence: 0.0,
        }
    }

    /// A hit is usable when it carries either a real case name or a URL
    /// with non-zero confidence. Error placeholders fail this test.
    pub fn is_usable(&self) -> bool {
        self.confidence > 0.0 && (!self.url.is_empty() || !self.name.is_empty())
    }
}

/// Persisted precedent row, appended once per precedent-search invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Precedent {
    id: Uuid,
    user_id: Uuid,
    document_name: Option<String>,
    case_name: String,
    court: Option<String>,
    year: Option<String>,
    url: Option<String>,
    confidence: f32,
    ai_summary: Option<String>,
    raw_json: Option<serde_json::Value>,
    created_at: DateTime<Utc>,
}

impl Precedent {
    pub fn from_hit(
        user_id: Uuid,
        document_name: Option<String>,
        hit: &CaseHit,
        ai_summary: Option<String>,
    ) -> Self {
        let raw_json = serde_json::to_value(hit).ok();
        Self {
            id: Uuid::new_v4(),
            user_id,
            document_name,
            case_name: hit.name.clone(),
            court: Some(hit.court.clone()).filter(|c| !c.is_empty()),
            year: Some(hit.year.clone()).filter(|y| !y.is_empty()),
            url: Some(hit.url.clone()).filter(|u| !u.is_empty()),
            confidence: hit.confidence,
            ai_summary,
            raw_json,
            created_at: Utc::now(),
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        id: Uuid,
        user_id: Uuid,
        document_name: Option<String>,
        case_name: String,
        court: Option<String>,
        year: Option<String>,
        url: Option<String>,
        confidence: f32,
        ai_summary: Option<String>,
        raw_json: Option<serde_json::Value>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            document_name,
            case_name,
            court,
            year,
            url,
            confidence,
            ai_summary,
            raw_json,
            created_at,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn document_name(&self) -> Option<&str> {
        self.document_name.as_deref()
    }

    pub fn case_name(&self) -> &str {
        &self.case_name
    }

    pub fn court(&self) -> Option<&str> {
        self.court.as_deref()
    }

    pub fn year(&self) -> Option<&str> {
        self.year.as_deref()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn confidence(&self) -> f32 {
        self.confidence
    }

    pub fn ai_summary(&self) -> Option<&str> {
        self.ai_summary.as_deref()
    }

    pub fn raw_json(&self) -> Option<&serde_json::Value> {
        self.raw_json.as_ref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_hit_is_not_usable() {
        let hit = CaseHit::error("Indian Kanoon request timed out.");
        assert!(!hit.is_usable());
    }

    #[test]
    fn test_hit_with_url_is_usable() {
        let hit = CaseHit {
            name: "Kesavananda Bharati v. State of Kerala".to_string(),
            court: "Supreme Court of India".to_string(),
            year: "1973".to_string(),
            url: "https://indiankanoon.org/doc/257876/".to_string(),
            confidence: 1.0,
        };
        assert!(hit.is_usable());
    }

    #[test]
    fn test_precedent_from_hit_drops_empty_fields() {
        let hit = CaseHit {
            name: "Some Case".to_string(),
            court: String::new(),
            year: "2001".to_string(),
            url: String::new(),
            confidence: 0.75,
        };
        let precedent = Precedent::from_hit(Uuid::new_v4(), None, &hit, None);
        assert!(precedent.court().is_none());
        assert!(precedent.url().is_none());
        assert_eq!(precedent.year(), Some("2001"));
    }
}
