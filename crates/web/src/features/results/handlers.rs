use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::result::{
        CreateResultRequest, MeetResultsGroup, ResultDetailRow, ResultResponse, TopTimeRow,
        UpdateResultRequest,
    },
};
use validator::Validate;

use crate::error::WebError;

use super::services;

fn parse_id(raw: &str) -> Result<i64, WebError> {
    raw.parse()
        .map_err(|_| WebError::BadRequest("Invalid result ID".to_string()))
}

#[utoipa::path(
    get,
    path = "/api/results",
    responses(
        (status = 200, description = "All results grouped by meet", body = Vec<MeetResultsGroup>)
    ),
    tag = "results"
)]
pub async fn list_results_by_meet(State(db): State<Database>) -> Result<Response, WebError> {
    let groups = services::list_results_by_meet(db.pool()).await?;

    Ok(Json(groups).into_response())
}

#[utoipa::path(
    get,
    path = "/api/results/all",
    responses(
        (status = 200, description = "Flat listing with athlete, meet and event names", body = Vec<ResultDetailRow>)
    ),
    tag = "results"
)]
pub async fn list_results_detailed(State(db): State<Database>) -> Result<Response, WebError> {
    let rows = services::list_results_detailed(db.pool()).await?;

    Ok(Json(rows).into_response())
}

#[utoipa::path(
    get,
    path = "/api/results/top10",
    responses(
        (status = 200, description = "The ten fastest recorded times", body = Vec<TopTimeRow>)
    ),
    tag = "results"
)]
pub async fn top_ten_fastest(State(db): State<Database>) -> Result<Response, WebError> {
    let rows = services::top_fastest(db.pool(), 10).await?;

    Ok(Json(rows).into_response())
}

#[utoipa::path(
    get,
    path = "/api/results/{id}",
    params(
        ("id" = i64, Path, description = "Result id")
    ),
    responses(
        (status = 200, description = "Result found", body = ResultResponse),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "Result not found")
    ),
    tag = "results"
)]
pub async fn get_result(
    State(db): State<Database>,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    let id = parse_id(&id)?;
    let result = services::get_result(db.pool(), id).await?;

    Ok(Json(ResultResponse::from(result)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/results",
    request_body = CreateResultRequest,
    responses(
        (status = 201, description = "Result recorded", body = ResultResponse),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Unknown athlete or meet id")
    ),
    tag = "results"
)]
pub async fn create_result(
    State(db): State<Database>,
    Json(req): Json<CreateResultRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let result = services::create_result(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(ResultResponse::from(result))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/results/{id}",
    params(
        ("id" = i64, Path, description = "Result id")
    ),
    request_body = UpdateResultRequest,
    responses(
        (status = 200, description = "Result updated", body = ResultResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Result not found")
    ),
    tag = "results"
)]
pub async fn update_result(
    State(db): State<Database>,
    Path(id): Path<String>,
    Json(req): Json<UpdateResultRequest>,
) -> Result<Response, WebError> {
    let id = parse_id(&id)?;
    req.validate()?;

    let updated = services::update_result(db.pool(), id, &req).await?;

    Ok(Json(ResultResponse::from(updated)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/results/{id}",
    params(
        ("id" = i64, Path, description = "Result id")
    ),
    responses(
        (status = 204, description = "Result deleted whether or not it existed"),
        (status = 400, description = "Malformed id")
    ),
    tag = "results"
)]
pub async fn delete_result(
    State(db): State<Database>,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    let id = parse_id(&id)?;
    services::delete_result(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
