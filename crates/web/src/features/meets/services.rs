use sqlx::SqlitePool;
use storage::{
    dto::meet::{CreateMeetRequest, UpdateMeetRequest},
    dto::result::MeetResultRow,
    error::Result,
    models::Meet,
    repository::meet::MeetRepository,
};

/// List all meets
pub async fn list_meets(pool: &SqlitePool) -> Result<Vec<Meet>> {
    let repo = MeetRepository::new(pool);
    repo.list().await
}

/// Get meet by id
pub async fn get_meet(pool: &SqlitePool, id: i64) -> Result<Meet> {
    let repo = MeetRepository::new(pool);
    repo.find_by_id(id).await
}

/// Get a meet's results with athlete names
pub async fn get_meet_results(pool: &SqlitePool, id: i64) -> Result<Vec<MeetResultRow>> {
    let repo = MeetRepository::new(pool);
    repo.results(id).await
}

/// Create a new meet
pub async fn create_meet(pool: &SqlitePool, request: &CreateMeetRequest) -> Result<Meet> {
    let repo = MeetRepository::new(pool);
    repo.create(request).await
}

/// Replace a meet
pub async fn update_meet(pool: &SqlitePool, id: i64, request: &UpdateMeetRequest) -> Result<Meet> {
    let repo = MeetRepository::new(pool);
    repo.update(id, request).await
}

/// Delete a meet
pub async fn delete_meet(pool: &SqlitePool, id: i64) -> Result<()> {
    let repo = MeetRepository::new(pool);
    repo.delete(id).await
}
