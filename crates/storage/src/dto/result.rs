use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::models::RaceResult;

/// Response containing a stored result row. Nullable columns render as
/// zero / empty.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResultResponse {
    pub id: i64,
    pub athlete_id: i64,
    pub meet_id: i64,
    pub event_type_id: i64,
    pub time: String,
    pub place: i64,
}

impl From<RaceResult> for ResultResponse {
    fn from(result: RaceResult) -> Self {
        Self {
            id: result.id,
            athlete_id: result.athlete_id,
            meet_id: result.meet_id,
            event_type_id: result.event_type_id.unwrap_or_default(),
            time: result.time,
            place: result.place.unwrap_or_default(),
        }
    }
}

/// Request payload for recording a new result
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateResultRequest {
    #[validate(range(min = 1, message = "Athlete id is required"))]
    pub athlete_id: i64,

    #[validate(range(min = 1, message = "Meet id is required"))]
    pub meet_id: i64,

    pub event_type_id: Option<i64>,

    #[validate(length(min = 1, max = 32, message = "Time is required"))]
    pub time: String,

    pub place: Option<i64>,
}

/// Request payload for replacing an existing result
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResultRequest {
    #[validate(range(min = 1, message = "Athlete id is required"))]
    pub athlete_id: i64,

    #[validate(range(min = 1, message = "Meet id is required"))]
    pub meet_id: i64,

    pub event_type_id: Option<i64>,

    #[validate(length(min = 1, max = 32, message = "Time is required"))]
    pub time: String,

    pub place: Option<i64>,
}

/// One result within a meet, joined with the athlete's name
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MeetResultRow {
    pub id: i64,
    pub athlete_id: i64,
    pub athlete_name: String,
    pub meet_id: i64,
    pub time: String,
    pub place: i64,
}

/// One of an athlete's results, joined with meet and event names
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AthleteResultRow {
    pub id: i64,
    pub meet_id: i64,
    pub meet_name: String,
    pub meet_date: NaiveDate,
    pub event_name: String,
    pub time: String,
    pub place: i64,
}

/// Flat listing row with every display name joined in, for the admin
/// results table
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResultDetailRow {
    pub id: i64,
    pub athlete_id: i64,
    pub athlete_name: String,
    pub meet_id: i64,
    pub meet_name: String,
    pub event_type_id: i64,
    pub event_name: String,
    pub time: String,
    pub place: i64,
}

/// Leaderboard row for the fastest-times view
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopTimeRow {
    pub id: i64,
    pub time: String,
    pub place: i64,
    pub athlete_id: i64,
    pub athlete_name: String,
    pub athlete_grade: i64,
    pub meet_id: i64,
    pub meet_name: String,
    pub meet_date: NaiveDate,
}

/// A meet's results bundled under the meet heading
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MeetResultsGroup {
    pub meet_id: i64,
    pub meet_name: String,
    pub meet_date: NaiveDate,
    pub results: Vec<MeetResultRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_missing_athlete_id() {
        let req = CreateResultRequest {
            athlete_id: 0,
            meet_id: 1,
            event_type_id: None,
            time: "19:04.5".to_string(),
            place: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn rejects_empty_time() {
        let req = CreateResultRequest {
            athlete_id: 1,
            meet_id: 1,
            event_type_id: None,
            time: String::new(),
            place: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn null_place_renders_as_zero() {
        let response = ResultResponse::from(RaceResult {
            id: 7,
            athlete_id: 1,
            meet_id: 2,
            event_type_id: None,
            time: "19:04.5".to_string(),
            place: None,
        });
        assert_eq!(response.place, 0);
        assert_eq!(response.event_type_id, 0);
    }
}
