use axum::{Json, Router, routing::get};
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

pub mod config;
pub mod error;
pub mod features;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::health::health,
        features::athletes::handlers::list_athletes,
        features::athletes::handlers::get_athlete,
        features::athletes::handlers::get_athlete_results,
        features::athletes::handlers::create_athlete,
        features::athletes::handlers::update_athlete,
        features::athletes::handlers::delete_athlete,
        features::meets::handlers::list_meets,
        features::meets::handlers::get_meet,
        features::meets::handlers::get_meet_results,
        features::meets::handlers::create_meet,
        features::meets::handlers::update_meet,
        features::meets::handlers::delete_meet,
        features::event_types::handlers::list_event_types,
        features::event_types::handlers::get_event_type,
        features::event_types::handlers::create_event_type,
        features::event_types::handlers::update_event_type,
        features::event_types::handlers::delete_event_type,
        features::results::handlers::list_results_by_meet,
        features::results::handlers::list_results_detailed,
        features::results::handlers::top_ten_fastest,
        features::results::handlers::get_result,
        features::results::handlers::create_result,
        features::results::handlers::update_result,
        features::results::handlers::delete_result,
        features::auth::handlers::login,
    ),
    components(
        schemas(
            storage::dto::athlete::AthleteResponse,
            storage::dto::athlete::CreateAthleteRequest,
            storage::dto::athlete::UpdateAthleteRequest,
            storage::dto::meet::MeetResponse,
            storage::dto::meet::CreateMeetRequest,
            storage::dto::meet::UpdateMeetRequest,
            storage::dto::event_type::EventTypeResponse,
            storage::dto::event_type::CreateEventTypeRequest,
            storage::dto::event_type::UpdateEventTypeRequest,
            storage::dto::result::ResultResponse,
            storage::dto::result::CreateResultRequest,
            storage::dto::result::UpdateResultRequest,
            storage::dto::result::MeetResultRow,
            storage::dto::result::AthleteResultRow,
            storage::dto::result::ResultDetailRow,
            storage::dto::result::TopTimeRow,
            storage::dto::result::MeetResultsGroup,
            storage::dto::auth::LoginRequest,
            storage::dto::auth::LoginResponse,
        )
    ),
    tags(
        (name = "health", description = "Service health"),
        (name = "athletes", description = "Roster endpoints"),
        (name = "meets", description = "Meet schedule endpoints"),
        (name = "event-types", description = "Race event type endpoints"),
        (name = "results", description = "Race result endpoints"),
        (name = "auth", description = "Administration login"),
    )
)]
pub struct ApiDoc;

/// Assemble the application router around a shared database handle.
pub fn app(db: Database) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(features::health::health))
        .route("/api-docs/openapi.json", get(openapi))
        .nest("/api/athletes", features::athletes::routes::routes())
        .nest("/api/meets", features::meets::routes::routes())
        .nest("/api/event-types", features::event_types::routes::routes())
        .nest("/api/results", features::results::routes::routes())
        .nest("/api", features::auth::routes::routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
