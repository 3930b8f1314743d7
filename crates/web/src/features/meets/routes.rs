use axum::{
    Router,
    routing::{delete, get, post, put},
};
use storage::Database;

use super::handlers::{create_meet, delete_meet, get_meet, get_meet_results, list_meets, update_meet};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_meets))
        .route("/", post(create_meet))
        .route("/:id", get(get_meet))
        .route("/:id", put(update_meet))
        .route("/:id", delete(delete_meet))
        .route("/:id/results", get(get_meet_results))
}
