use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A single finish recorded for an athlete at a meet. `place` is NULL
/// for unplaced finishes.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct RaceResult {
    pub id: i64,
    pub athlete_id: i64,
    pub meet_id: i64,
    pub event_type_id: Option<i64>,
    pub time: String,
    pub place: Option<i64>,
}
