use sqlx::SqlitePool;

use crate::dto::event_type::{CreateEventTypeRequest, UpdateEventTypeRequest};
use crate::error::{Result, StorageError};
use crate::models::EventType;

pub struct EventTypeRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> EventTypeRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all event types
    pub async fn list(&self) -> Result<Vec<EventType>> {
        let event_types = sqlx::query_as::<_, EventType>(
            "SELECT id, name, distance, description FROM event_types ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(event_types)
    }

    /// Find event type by ID
    pub async fn find_by_id(&self, id: i64) -> Result<EventType> {
        let event_type = sqlx::query_as::<_, EventType>(
            "SELECT id, name, distance, description FROM event_types WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(event_type)
    }

    /// Create a new event type
    pub async fn create(&self, req: &CreateEventTypeRequest) -> Result<EventType> {
        let event_type = sqlx::query_as::<_, EventType>(
            r#"
            INSERT INTO event_types (name, distance, description)
            VALUES (?, ?, ?)
            RETURNING id, name, distance, description
            "#,
        )
        .bind(&req.name)
        .bind(&req.distance)
        .bind(&req.description)
        .fetch_one(self.pool)
        .await?;

        Ok(event_type)
    }

    /// Replace every mutable field of an event type
    pub async fn update(&self, id: i64, req: &UpdateEventTypeRequest) -> Result<EventType> {
        let event_type = sqlx::query_as::<_, EventType>(
            r#"
            UPDATE event_types
            SET name = ?, distance = ?, description = ?
            WHERE id = ?
            RETURNING id, name, distance, description
            "#,
        )
        .bind(&req.name)
        .bind(&req.distance)
        .bind(&req.description)
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(event_type)
    }

    /// Delete an event type by ID. Deleting an unknown id is not an error.
    pub async fn delete(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM event_types WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(())
    }
}
