use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct EventType {
    pub id: i64,
    pub name: String,
    pub distance: Option<String>,
    pub description: Option<String>,
}
