use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Meet {
    pub id: i64,
    pub name: String,
    pub date: NaiveDate,
    pub time: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
}
