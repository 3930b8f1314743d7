use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::Meet;

/// Response containing a scheduled meet. Nullable columns render as
/// empty strings.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MeetResponse {
    pub id: i64,
    pub name: String,
    pub date: NaiveDate,
    pub time: String,
    pub location: String,
    pub description: String,
}

impl From<Meet> for MeetResponse {
    fn from(meet: Meet) -> Self {
        Self {
            id: meet.id,
            name: meet.name,
            date: meet.date,
            time: meet.time.unwrap_or_default(),
            location: meet.location.unwrap_or_default(),
            description: meet.description.unwrap_or_default(),
        }
    }
}

/// Request payload for creating a new meet
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMeetRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    pub date: NaiveDate,

    #[validate(length(max = 255))]
    pub time: Option<String>,

    #[validate(length(max = 255))]
    pub location: Option<String>,

    #[validate(length(max = 1000))]
    pub description: Option<String>,
}

/// Request payload for replacing an existing meet
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMeetRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    pub date: NaiveDate,

    #[validate(length(max = 255))]
    pub time: Option<String>,

    #[validate(length(max = 255))]
    pub location: Option<String>,

    #[validate(length(max = 1000))]
    pub description: Option<String>,
}
