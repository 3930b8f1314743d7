use axum::{Router, routing::post};
use storage::Database;

use super::handlers::login;

pub fn routes() -> Router<Database> {
    Router::new().route("/login", post(login))
}
