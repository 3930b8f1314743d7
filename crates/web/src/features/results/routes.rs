use axum::{
    Router,
    routing::{delete, get, post, put},
};
use storage::Database;

use super::handlers::{
    create_result, delete_result, get_result, list_results_by_meet, list_results_detailed,
    top_ten_fastest, update_result,
};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_results_by_meet))
        .route("/", post(create_result))
        .route("/all", get(list_results_detailed))
        .route("/top10", get(top_ten_fastest))
        .route("/:id", get(get_result))
        .route("/:id", put(update_result))
        .route("/:id", delete(delete_result))
}
