use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::FactCheckRecord;

#[derive(Debug, Serialize)]
pub struct FactCheckRecordDto {
    pub statement: String,
    pub supported: bool,
    pub confidence: f32,
    pub evidence: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&FactCheckRecord> for FactCheckRecordDto {
    fn from(record: &FactCheckRecord) -> Self {
        Self {
            statement: record.statement().to_string(),
            supported: record.supported(),
            confidence: record.confidence(),
            evidence: record.evidence().map(str::to_string),
            created_at: record.created_at(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FactHistoryResponseDto {
    pub history: Vec<FactCheckRecordDto>,
}
