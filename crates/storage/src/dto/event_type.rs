use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::EventType;

/// Response containing a race event type. Nullable columns render as
/// empty strings.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventTypeResponse {
    pub id: i64,
    pub name: String,
    pub distance: String,
    pub description: String,
}

impl From<EventType> for EventTypeResponse {
    fn from(event_type: EventType) -> Self {
        Self {
            id: event_type.id,
            name: event_type.name,
            distance: event_type.distance.unwrap_or_default(),
            description: event_type.description.unwrap_or_default(),
        }
    }
}

/// Request payload for creating a new event type
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventTypeRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(length(max = 255))]
    pub distance: Option<String>,

    #[validate(length(max = 1000))]
    pub description: Option<String>,
}

/// Request payload for replacing an existing event type
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventTypeRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(length(max = 255))]
    pub distance: Option<String>,

    #[validate(length(max = 1000))]
    pub description: Option<String>,
}
