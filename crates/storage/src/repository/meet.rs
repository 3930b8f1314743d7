use sqlx::SqlitePool;

use crate::dto::meet::{CreateMeetRequest, UpdateMeetRequest};
use crate::dto::result::MeetResultRow;
use crate::error::{Result, StorageError};
use crate::models::Meet;

pub struct MeetRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> MeetRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all meets
    pub async fn list(&self) -> Result<Vec<Meet>> {
        let meets = sqlx::query_as::<_, Meet>(
            "SELECT id, name, date, time, location, description FROM meets ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(meets)
    }

    /// Find meet by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Meet> {
        let meet = sqlx::query_as::<_, Meet>(
            "SELECT id, name, date, time, location, description FROM meets WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(meet)
    }

    /// Create a new meet
    pub async fn create(&self, req: &CreateMeetRequest) -> Result<Meet> {
        let meet = sqlx::query_as::<_, Meet>(
            r#"
            INSERT INTO meets (name, date, time, location, description)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, name, date, time, location, description
            "#,
        )
        .bind(&req.name)
        .bind(req.date)
        .bind(&req.time)
        .bind(&req.location)
        .bind(&req.description)
        .fetch_one(self.pool)
        .await?;

        Ok(meet)
    }

    /// Replace every mutable field of a meet
    pub async fn update(&self, id: i64, req: &UpdateMeetRequest) -> Result<Meet> {
        let meet = sqlx::query_as::<_, Meet>(
            r#"
            UPDATE meets
            SET name = ?, date = ?, time = ?, location = ?, description = ?
            WHERE id = ?
            RETURNING id, name, date, time, location, description
            "#,
        )
        .bind(&req.name)
        .bind(req.date)
        .bind(&req.time)
        .bind(&req.location)
        .bind(&req.description)
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(meet)
    }

    /// Delete a meet by ID. Deleting an unknown id is not an error.
    pub async fn delete(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM meets WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(())
    }

    /// A meet's results joined with athlete names, fastest first. An
    /// unknown meet yields an empty list.
    pub async fn results(&self, id: i64) -> Result<Vec<MeetResultRow>> {
        let rows = sqlx::query_as::<_, MeetResultRow>(
            r#"
            SELECT r.id,
                   r.athlete_id,
                   a.name AS athlete_name,
                   r.meet_id,
                   r.time,
                   COALESCE(r.place, 0) AS place
            FROM results r
            JOIN athletes a ON a.id = r.athlete_id
            WHERE r.meet_id = ?
            ORDER BY r.time, r.id
            "#,
        )
        .bind(id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }
}
