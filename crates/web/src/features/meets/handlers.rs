use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::meet::{CreateMeetRequest, MeetResponse, UpdateMeetRequest},
    dto::result::MeetResultRow,
};
use validator::Validate;

use crate::error::WebError;

use super::services;

fn parse_id(raw: &str) -> Result<i64, WebError> {
    raw.parse()
        .map_err(|_| WebError::BadRequest("Invalid meet ID".to_string()))
}

#[utoipa::path(
    get,
    path = "/api/meets",
    responses(
        (status = 200, description = "List all meets", body = Vec<MeetResponse>)
    ),
    tag = "meets"
)]
pub async fn list_meets(State(db): State<Database>) -> Result<Response, WebError> {
    let meets = services::list_meets(db.pool()).await?;

    let response: Vec<MeetResponse> = meets.into_iter().map(MeetResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/meets/{id}",
    params(
        ("id" = i64, Path, description = "Meet id")
    ),
    responses(
        (status = 200, description = "Meet found", body = MeetResponse),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "Meet not found")
    ),
    tag = "meets"
)]
pub async fn get_meet(
    State(db): State<Database>,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    let id = parse_id(&id)?;
    let meet = services::get_meet(db.pool(), id).await?;

    Ok(Json(MeetResponse::from(meet)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/meets/{id}/results",
    params(
        ("id" = i64, Path, description = "Meet id")
    ),
    responses(
        (status = 200, description = "Meet results with athlete names", body = Vec<MeetResultRow>),
        (status = 400, description = "Malformed id")
    ),
    tag = "meets"
)]
pub async fn get_meet_results(
    State(db): State<Database>,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    let id = parse_id(&id)?;
    let results = services::get_meet_results(db.pool(), id).await?;

    Ok(Json(results).into_response())
}

#[utoipa::path(
    post,
    path = "/api/meets",
    request_body = CreateMeetRequest,
    responses(
        (status = 201, description = "Meet created", body = MeetResponse),
        (status = 400, description = "Validation error")
    ),
    tag = "meets"
)]
pub async fn create_meet(
    State(db): State<Database>,
    Json(req): Json<CreateMeetRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let meet = services::create_meet(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(MeetResponse::from(meet))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/meets/{id}",
    params(
        ("id" = i64, Path, description = "Meet id")
    ),
    request_body = UpdateMeetRequest,
    responses(
        (status = 200, description = "Meet updated", body = MeetResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Meet not found")
    ),
    tag = "meets"
)]
pub async fn update_meet(
    State(db): State<Database>,
    Path(id): Path<String>,
    Json(req): Json<UpdateMeetRequest>,
) -> Result<Response, WebError> {
    let id = parse_id(&id)?;
    req.validate()?;

    let updated = services::update_meet(db.pool(), id, &req).await?;

    Ok(Json(MeetResponse::from(updated)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/meets/{id}",
    params(
        ("id" = i64, Path, description = "Meet id")
    ),
    responses(
        (status = 204, description = "Meet deleted whether or not it existed"),
        (status = 400, description = "Malformed id")
    ),
    tag = "meets"
)]
pub async fn delete_meet(
    State(db): State<Database>,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    let id = parse_id(&id)?;
    services::delete_meet(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
