use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::entities::Precedent;
use crate::infrastructure::database::schema::precedents;

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = precedents)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PrecedentModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub document_name: Option<String>,
    pub case_name: String,
    pub court: Option<String>,
    pub year: Option<String>,
    pub url: Option<String>,
    pub confidence: f32,
    pub ai_summary: Option<String>,
    pub raw_json: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = precedents)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewPrecedentModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub document_name: Option<String>,
    pub case_name: String,
    pub court: Option<String>,
    pub year: Option<String>,
    pub url: Option<String>,
    pub confidence: f32,
    pub ai_summary: Option<String>,
    pub raw_json: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

impl From<&Precedent> for NewPrecedentModel {
    fn from(precedent: &Precedent) -> Self {
        Self {
            id: precedent.id(),
            user_id: precedent.user_id(),
            document_name: precedent.document_name().map(str::to_string),
            case_name: precedent.case_name().to_string(),
            court: precedent.court().map(str::to_string),
            year: precedent.year().map(str::to_string),
            url: precedent.url().map(str::to_string),
            confidence: precedent.confidence(),
            ai_summary: precedent.ai_summary().map(str::to_string),
            raw_json: precedent.raw_json().cloned(),
            created_at: precedent.created_at(),
        }
    }
}

impl From<PrecedentModel> for Precedent {
    fn from(model: PrecedentModel) -> Self {
        Precedent::from_parts(
            model.id,
            model.user_id,
            model.document_name,
            model.case_name,
            model.court,
            model.year,
            model.url,
            model.confidence,
            model.ai_summary,
            model.raw_json,
            model.created_at,
        )
    }
}
