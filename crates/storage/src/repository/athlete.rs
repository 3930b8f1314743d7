use sqlx::SqlitePool;

use crate::dto::athlete::{CreateAthleteRequest, UpdateAthleteRequest};
use crate::dto::result::AthleteResultRow;
use crate::error::{Result, StorageError};
use crate::models::Athlete;

pub struct AthleteRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> AthleteRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all athletes
    pub async fn list(&self) -> Result<Vec<Athlete>> {
        let athletes = sqlx::query_as::<_, Athlete>(
            "SELECT id, name, grade, personal_record, events FROM athletes ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(athletes)
    }

    /// Find athlete by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Athlete> {
        let athlete = sqlx::query_as::<_, Athlete>(
            "SELECT id, name, grade, personal_record, events FROM athletes WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(athlete)
    }

    /// Create a new athlete
    pub async fn create(&self, req: &CreateAthleteRequest) -> Result<Athlete> {
        let athlete = sqlx::query_as::<_, Athlete>(
            r#"
            INSERT INTO athletes (name, grade, personal_record, events)
            VALUES (?, ?, ?, ?)
            RETURNING id, name, grade, personal_record, events
            "#,
        )
        .bind(&req.name)
        .bind(req.grade)
        .bind(&req.personal_record)
        .bind(&req.events)
        .fetch_one(self.pool)
        .await?;

        Ok(athlete)
    }

    /// Replace every mutable field of an athlete
    pub async fn update(&self, id: i64, req: &UpdateAthleteRequest) -> Result<Athlete> {
        let athlete = sqlx::query_as::<_, Athlete>(
            r#"
            UPDATE athletes
            SET name = ?, grade = ?, personal_record = ?, events = ?
            WHERE id = ?
            RETURNING id, name, grade, personal_record, events
            "#,
        )
        .bind(&req.name)
        .bind(req.grade)
        .bind(&req.personal_record)
        .bind(&req.events)
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(athlete)
    }

    /// Delete an athlete by ID. Deleting an unknown id is not an error.
    pub async fn delete(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM athletes WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(())
    }

    /// An athlete's results, joined with meet and event names. An
    /// unknown athlete yields an empty list.
    pub async fn results(&self, id: i64) -> Result<Vec<AthleteResultRow>> {
        let rows = sqlx::query_as::<_, AthleteResultRow>(
            r#"
            SELECT r.id,
                   r.meet_id,
                   m.name AS meet_name,
                   m.date AS meet_date,
                   COALESCE(et.name, '') AS event_name,
                   r.time,
                   COALESCE(r.place, 0) AS place
            FROM results r
            JOIN meets m ON m.id = r.meet_id
            LEFT JOIN event_types et ON et.id = r.event_type_id
            WHERE r.athlete_id = ?
            ORDER BY m.date DESC, r.id
            "#,
        )
        .bind(id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }
}
