use axum::{
    Router,
    routing::{delete, get, post, put},
};
use storage::Database;

use super::handlers::{
    create_event_type, delete_event_type, get_event_type, list_event_types, update_event_type,
};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_event_types))
        .route("/", post(create_event_type))
        .route("/:id", get(get_event_type))
        .route("/:id", put(update_event_type))
        .route("/:id", delete(delete_event_type))
}
