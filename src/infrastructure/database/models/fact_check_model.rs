use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::entities::FactCheckRecord;
use crate::infrastructure::database::schema::fact_checks;

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = fact_checks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct FactCheckModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub statement: String,
    pub supported: bool,
    pub confidence: f32,
    pub evidence: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = fact_checks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewFactCheckModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub statement: String,
    pub supported: bool,
    pub confidence: f32,
    pub evidence: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&FactCheckRecord> for NewFactCheckModel {
    fn from(record: &FactCheckRecord) -> Self {
        Self {
            id: record.id(),
            user_id: record.user_id(),
            statement: record.statement().to_string(),
            supported: record.supported(),
            confidence: record.confidence(),
            evidence: record.evidence().map(str::to_string),
            created_at: record.created_at(),
        }
    }
}

impl From<FactCheckModel> for FactCheckRecord {
    fn from(model: FactCheckModel) -> Self {
        FactCheckRecord::from_parts(
            model.id,
            model.user_id,
            model.statement,
            model.supported,
            model.confidence,
            model.evidence,
            model.created_at,
        )
    }
}
