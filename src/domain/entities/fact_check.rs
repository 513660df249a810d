use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One claim-evidence-confidence tuple produced by the fact checker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactCheckRecord {
    id: Uuid,
    user_id: Uuid,
    statement: String,
    supported: bool,
    confidence: f32,
    evidence: Option<String>,
    created_at: DateTime<Utc>,
}

impl FactCheckRecord {
    pub fn new(
        user_id: Uuid,
        statement: String,
        supported: bool,
        confidence: f32,
        evidence: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            statement,
            supported,
            confidence,
            evidence,
            created_at: Utc::now(),
        }
    }

    pub fn from_parts(
        id: Uuid,
        user_id: Uuid,
        statement: String,
        supported: bool,
        confidence: f32,
        evidence: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            statement,
            supported,
            confidence,
            evidence,
            created_at,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn statement(&self) -> &str {
        &self.statement
    }

    pub fn supported(&self) -> bool {
        self.supported
    }

    pub fn confidence(&self) -> f32 {
        self.confidence
    }

    pub fn evidence(&self) -> Option<&str> {
        self.evidence.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
