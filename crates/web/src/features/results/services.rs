use sqlx::SqlitePool;
use storage::{
    dto::result::{
        CreateResultRequest, MeetResultsGroup, ResultDetailRow, TopTimeRow, UpdateResultRequest,
    },
    error::Result,
    models::RaceResult,
    repository::{meet::MeetRepository, result::ResultRepository},
};

/// All results grouped under their meet, one results query per meet. A
/// meet whose results cannot be loaded is skipped rather than failing
/// the whole listing.
pub async fn list_results_by_meet(pool: &SqlitePool) -> Result<Vec<MeetResultsGroup>> {
    let meets = MeetRepository::new(pool);
    let all = meets.list().await?;

    let mut groups = Vec::with_capacity(all.len());
    for meet in all {
        match meets.results(meet.id).await {
            Ok(results) => groups.push(MeetResultsGroup {
                meet_id: meet.id,
                meet_name: meet.name,
                meet_date: meet.date,
                results,
            }),
            Err(e) => {
                tracing::warn!(meet_id = meet.id, "Skipping results for meet: {}", e);
            }
        }
    }

    Ok(groups)
}

/// Flat listing with every display name joined in
pub async fn list_results_detailed(pool: &SqlitePool) -> Result<Vec<ResultDetailRow>> {
    let repo = ResultRepository::new(pool);
    repo.list_detailed().await
}

/// The fastest recorded times, at most `limit` rows
pub async fn top_fastest(pool: &SqlitePool, limit: i64) -> Result<Vec<TopTimeRow>> {
    let repo = ResultRepository::new(pool);
    repo.top_fastest(limit).await
}

/// Get result by id
pub async fn get_result(pool: &SqlitePool, id: i64) -> Result<RaceResult> {
    let repo = ResultRepository::new(pool);
    repo.find_by_id(id).await
}

/// Record a new result
pub async fn create_result(pool: &SqlitePool, request: &CreateResultRequest) -> Result<RaceResult> {
    let repo = ResultRepository::new(pool);
    repo.create(request).await
}

/// Replace a result
pub async fn update_result(
    pool: &SqlitePool,
    id: i64,
    request: &UpdateResultRequest,
) -> Result<RaceResult> {
    let repo = ResultRepository::new(pool);
    repo.update(id, request).await
}

/// Delete a result
pub async fn delete_result(pool: &SqlitePool, id: i64) -> Result<()> {
    let repo = ResultRepository::new(pool);
    repo.delete(id).await
}
