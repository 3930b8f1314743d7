use sqlx::SqlitePool;
use storage::{
    dto::event_type::{CreateEventTypeRequest, UpdateEventTypeRequest},
    error::Result,
    models::EventType,
    repository::event_type::EventTypeRepository,
};

/// List all event types
pub async fn list_event_types(pool: &SqlitePool) -> Result<Vec<EventType>> {
    let repo = EventTypeRepository::new(pool);
    repo.list().await
}

/// Get event type by id
pub async fn get_event_type(pool: &SqlitePool, id: i64) -> Result<EventType> {
    let repo = EventTypeRepository::new(pool);
    repo.find_by_id(id).await
}

/// Create a new event type
pub async fn create_event_type(
    pool: &SqlitePool,
    request: &CreateEventTypeRequest,
) -> Result<EventType> {
    let repo = EventTypeRepository::new(pool);
    repo.create(request).await
}

/// Replace an event type
pub async fn update_event_type(
    pool: &SqlitePool,
    id: i64,
    request: &UpdateEventTypeRequest,
) -> Result<EventType> {
    let repo = EventTypeRepository::new(pool);
    repo.update(id, request).await
}

/// Delete an event type
pub async fn delete_event_type(pool: &SqlitePool, id: i64) -> Result<()> {
    let repo = EventTypeRepository::new(pool);
    repo.delete(id).await
}
