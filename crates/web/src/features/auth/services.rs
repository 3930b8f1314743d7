use sqlx::SqlitePool;
use storage::{dto::auth::LoginRequest, error::Result, models::User, repository::user::UserRepository};

/// Exact-match credential check. Returns None for an unknown user or a
/// wrong password; callers must not distinguish the two.
pub async fn verify_credentials(pool: &SqlitePool, req: &LoginRequest) -> Result<Option<User>> {
    let repo = UserRepository::new(pool);
    let user = repo.find_by_username(&req.username).await?;

    Ok(user.filter(|u| u.password == req.password))
}
