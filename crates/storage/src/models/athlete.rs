use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Athlete {
    pub id: i64,
    pub name: String,
    pub grade: i64,
    pub personal_record: Option<String>,
    pub events: Option<String>,
}
