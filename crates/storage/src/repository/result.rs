use sqlx::SqlitePool;

use crate::dto::result::{CreateResultRequest, ResultDetailRow, TopTimeRow, UpdateResultRequest};
use crate::error::{Result, StorageError};
use crate::models::RaceResult;

pub struct ResultRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ResultRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Flat listing with athlete, meet and event names joined in
    pub async fn list_detailed(&self) -> Result<Vec<ResultDetailRow>> {
        let rows = sqlx::query_as::<_, ResultDetailRow>(
            r#"
            SELECT r.id,
                   r.athlete_id,
                   a.name AS athlete_name,
                   r.meet_id,
                   m.name AS meet_name,
                   COALESCE(r.event_type_id, 0) AS event_type_id,
                   COALESCE(et.name, '') AS event_name,
                   r.time,
                   COALESCE(r.place, 0) AS place
            FROM results r
            JOIN athletes a ON a.id = r.athlete_id
            JOIN meets m ON m.id = r.meet_id
            LEFT JOIN event_types et ON et.id = r.event_type_id
            ORDER BY m.date DESC, r.time, r.id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// The fastest recorded times across every meet, string-ordered on
    /// the time column.
    pub async fn top_fastest(&self, limit: i64) -> Result<Vec<TopTimeRow>> {
        let rows = sqlx::query_as::<_, TopTimeRow>(
            r#"
            SELECT r.id,
                   r.time,
                   COALESCE(r.place, 0) AS place,
                   r.athlete_id,
                   a.name AS athlete_name,
                   a.grade AS athlete_grade,
                   r.meet_id,
                   m.name AS meet_name,
                   m.date AS meet_date
            FROM results r
            JOIN athletes a ON a.id = r.athlete_id
            JOIN meets m ON m.id = r.meet_id
            ORDER BY r.time
            LIMIT ?
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Find result by ID
    pub async fn find_by_id(&self, id: i64) -> Result<RaceResult> {
        let result = sqlx::query_as::<_, RaceResult>(
            "SELECT id, athlete_id, meet_id, event_type_id, time, place FROM results WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(result)
    }

    /// Record a new result. A place of zero means unplaced and is
    /// stored as NULL, as is a zero event type id.
    pub async fn create(&self, req: &CreateResultRequest) -> Result<RaceResult> {
        let place = req.place.filter(|p| *p > 0);
        let event_type_id = req.event_type_id.filter(|id| *id > 0);

        let result = sqlx::query_as::<_, RaceResult>(
            r#"
            INSERT INTO results (athlete_id, meet_id, event_type_id, time, place)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, athlete_id, meet_id, event_type_id, time, place
            "#,
        )
        .bind(req.athlete_id)
        .bind(req.meet_id)
        .bind(event_type_id)
        .bind(&req.time)
        .bind(place)
        .fetch_one(self.pool)
        .await?;

        Ok(result)
    }

    /// Replace every mutable field of a result
    pub async fn update(&self, id: i64, req: &UpdateResultRequest) -> Result<RaceResult> {
        let place = req.place.filter(|p| *p > 0);
        let event_type_id = req.event_type_id.filter(|id| *id > 0);

        let result = sqlx::query_as::<_, RaceResult>(
            r#"
            UPDATE results
            SET athlete_id = ?, meet_id = ?, event_type_id = ?, time = ?, place = ?
            WHERE id = ?
            RETURNING id, athlete_id, meet_id, event_type_id, time, place
            "#,
        )
        .bind(req.athlete_id)
        .bind(req.meet_id)
        .bind(event_type_id)
        .bind(&req.time)
        .bind(place)
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(result)
    }

    /// Delete a result by ID. Deleting an unknown id is not an error.
    pub async fn delete(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM results WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(())
    }
}
