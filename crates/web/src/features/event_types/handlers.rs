use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::event_type::{CreateEventTypeRequest, EventTypeResponse, UpdateEventTypeRequest},
};
use validator::Validate;

use crate::error::WebError;

use super::services;

fn parse_id(raw: &str) -> Result<i64, WebError> {
    raw.parse()
        .map_err(|_| WebError::BadRequest("Invalid event type ID".to_string()))
}

#[utoipa::path(
    get,
    path = "/api/event-types",
    responses(
        (status = 200, description = "List all event types", body = Vec<EventTypeResponse>)
    ),
    tag = "event-types"
)]
pub async fn list_event_types(State(db): State<Database>) -> Result<Response, WebError> {
    let event_types = services::list_event_types(db.pool()).await?;

    let response: Vec<EventTypeResponse> = event_types
        .into_iter()
        .map(EventTypeResponse::from)
        .collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/event-types/{id}",
    params(
        ("id" = i64, Path, description = "Event type id")
    ),
    responses(
        (status = 200, description = "Event type found", body = EventTypeResponse),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "Event type not found")
    ),
    tag = "event-types"
)]
pub async fn get_event_type(
    State(db): State<Database>,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    let id = parse_id(&id)?;
    let event_type = services::get_event_type(db.pool(), id).await?;

    Ok(Json(EventTypeResponse::from(event_type)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/event-types",
    request_body = CreateEventTypeRequest,
    responses(
        (status = 201, description = "Event type created", body = EventTypeResponse),
        (status = 400, description = "Validation error")
    ),
    tag = "event-types"
)]
pub async fn create_event_type(
    State(db): State<Database>,
    Json(req): Json<CreateEventTypeRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let event_type = services::create_event_type(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(EventTypeResponse::from(event_type))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/event-types/{id}",
    params(
        ("id" = i64, Path, description = "Event type id")
    ),
    request_body = UpdateEventTypeRequest,
    responses(
        (status = 200, description = "Event type updated", body = EventTypeResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Event type not found")
    ),
    tag = "event-types"
)]
pub async fn update_event_type(
    State(db): State<Database>,
    Path(id): Path<String>,
    Json(req): Json<UpdateEventTypeRequest>,
) -> Result<Response, WebError> {
    let id = parse_id(&id)?;
    req.validate()?;

    let updated = services::update_event_type(db.pool(), id, &req).await?;

    Ok(Json(EventTypeResponse::from(updated)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/event-types/{id}",
    params(
        ("id" = i64, Path, description = "Event type id")
    ),
    responses(
        (status = 204, description = "Event type deleted whether or not it existed"),
        (status = 400, description = "Malformed id")
    ),
    tag = "event-types"
)]
pub async fn delete_event_type(
    State(db): State<Database>,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    let id = parse_id(&id)?;
    services::delete_event_type(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
