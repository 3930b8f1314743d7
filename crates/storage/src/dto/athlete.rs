use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::Athlete;

/// Response containing a single roster entry. Nullable columns render
/// as empty strings.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AthleteResponse {
    pub id: i64,
    pub name: String,
    pub grade: i64,
    pub personal_record: String,
    pub events: String,
}

impl From<Athlete> for AthleteResponse {
    fn from(athlete: Athlete) -> Self {
        Self {
            id: athlete.id,
            name: athlete.name,
            grade: athlete.grade,
            personal_record: athlete.personal_record.unwrap_or_default(),
            events: athlete.events.unwrap_or_default(),
        }
    }
}

/// Request payload for creating a new athlete
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAthleteRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(range(min = 1, message = "Grade is required"))]
    pub grade: i64,

    #[validate(length(max = 255))]
    pub personal_record: Option<String>,

    #[validate(length(max = 255))]
    pub events: Option<String>,
}

/// Request payload for replacing an existing athlete
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAthleteRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(range(min = 1, message = "Grade is required"))]
    pub grade: i64,

    #[validate(length(max = 255))]
    pub personal_record: Option<String>,

    #[validate(length(max = 255))]
    pub events: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_minimal_request() {
        let req = CreateAthleteRequest {
            name: "Ava Brooks".to_string(),
            grade: 10,
            personal_record: None,
            events: None,
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn rejects_empty_name() {
        let req = CreateAthleteRequest {
            name: String::new(),
            grade: 10,
            personal_record: None,
            events: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn rejects_zero_grade() {
        let req = CreateAthleteRequest {
            name: "Ava Brooks".to_string(),
            grade: 0,
            personal_record: None,
            events: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn nullable_columns_render_as_empty_strings() {
        let response = AthleteResponse::from(Athlete {
            id: 1,
            name: "Ava Brooks".to_string(),
            grade: 10,
            personal_record: None,
            events: None,
        });
        assert_eq!(response.personal_record, "");
        assert_eq!(response.events, "");
    }
}
