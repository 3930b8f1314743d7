use chrono::NaiveDate;
use storage::Database;
use storage::dto::athlete::{CreateAthleteRequest, UpdateAthleteRequest};
use storage::dto::meet::CreateMeetRequest;
use storage::dto::result::CreateResultRequest;
use storage::error::StorageError;
use storage::repository::athlete::AthleteRepository;
use storage::repository::meet::MeetRepository;
use storage::repository::result::ResultRepository;
use storage::repository::user::UserRepository;

async fn setup() -> Database {
    let db = Database::in_memory().await.expect("in-memory database");
    db.run_migrations().await.expect("migrations");
    db
}

fn athlete_request(name: &str) -> CreateAthleteRequest {
    CreateAthleteRequest {
        name: name.to_string(),
        grade: 10,
        personal_record: None,
        events: None,
    }
}

fn meet_request(name: &str, date: &str) -> CreateMeetRequest {
    CreateMeetRequest {
        name: name.to_string(),
        date: date.parse::<NaiveDate>().expect("date"),
        time: None,
        location: None,
        description: None,
    }
}

fn result_request(athlete_id: i64, meet_id: i64, time: &str, place: Option<i64>) -> CreateResultRequest {
    CreateResultRequest {
        athlete_id,
        meet_id,
        event_type_id: None,
        time: time.to_string(),
        place,
    }
}

#[tokio::test]
async fn athlete_create_and_find_round_trip() {
    let db = setup().await;
    let repo = AthleteRepository::new(db.pool());

    let created = repo
        .create(&CreateAthleteRequest {
            name: "Ava Brooks".to_string(),
            grade: 11,
            personal_record: Some("18:42.1".to_string()),
            events: Some("5K".to_string()),
        })
        .await
        .expect("create");

    let found = repo.find_by_id(created.id).await.expect("find");
    assert_eq!(found.name, "Ava Brooks");
    assert_eq!(found.grade, 11);
    assert_eq!(found.personal_record.as_deref(), Some("18:42.1"));
    assert_eq!(found.events.as_deref(), Some("5K"));
}

#[tokio::test]
async fn athlete_update_replaces_all_fields() {
    let db = setup().await;
    let repo = AthleteRepository::new(db.pool());

    let created = repo
        .create(&CreateAthleteRequest {
            name: "Ava Brooks".to_string(),
            grade: 11,
            personal_record: Some("18:42.1".to_string()),
            events: Some("5K".to_string()),
        })
        .await
        .expect("create");

    let updated = repo
        .update(
            created.id,
            &UpdateAthleteRequest {
                name: "Ava B. Brooks".to_string(),
                grade: 12,
                personal_record: None,
                events: None,
            },
        )
        .await
        .expect("update");

    assert_eq!(updated.name, "Ava B. Brooks");
    assert_eq!(updated.grade, 12);
    assert_eq!(updated.personal_record, None);
    assert_eq!(updated.events, None);
}

#[tokio::test]
async fn athlete_update_unknown_id_is_not_found() {
    let db = setup().await;
    let repo = AthleteRepository::new(db.pool());

    let err = repo
        .update(9999, &UpdateAthleteRequest {
            name: "Nobody".to_string(),
            grade: 9,
            personal_record: None,
            events: None,
        })
        .await
        .expect_err("should fail");

    assert!(matches!(err, StorageError::NotFound));
}

#[tokio::test]
async fn athlete_delete_unknown_id_is_a_noop() {
    let db = setup().await;
    let repo = AthleteRepository::new(db.pool());

    repo.delete(9999).await.expect("delete should not fail");
}

#[tokio::test]
async fn result_zero_place_is_stored_as_null() {
    let db = setup().await;
    let athlete = AthleteRepository::new(db.pool())
        .create(&athlete_request("Ava Brooks"))
        .await
        .expect("athlete");
    let meet = MeetRepository::new(db.pool())
        .create(&meet_request("Season Opener", "2025-09-06"))
        .await
        .expect("meet");

    let result = ResultRepository::new(db.pool())
        .create(&result_request(athlete.id, meet.id, "19:04.5", Some(0)))
        .await
        .expect("result");

    assert_eq!(result.place, None);
}

#[tokio::test]
async fn result_create_with_unknown_athlete_fails() {
    let db = setup().await;
    let meet = MeetRepository::new(db.pool())
        .create(&meet_request("Season Opener", "2025-09-06"))
        .await
        .expect("meet");

    let err = ResultRepository::new(db.pool())
        .create(&result_request(9999, meet.id, "19:04.5", None))
        .await
        .expect_err("foreign key should reject");

    assert!(matches!(err, StorageError::Database(_)));
}

#[tokio::test]
async fn top_fastest_orders_by_time_and_respects_limit() {
    let db = setup().await;
    let athlete = AthleteRepository::new(db.pool())
        .create(&athlete_request("Ava Brooks"))
        .await
        .expect("athlete");
    let meet = MeetRepository::new(db.pool())
        .create(&meet_request("Season Opener", "2025-09-06"))
        .await
        .expect("meet");

    let results = ResultRepository::new(db.pool());
    for time in ["19:30.0", "17:55.2", "18:10.9", "21:02.4"] {
        results
            .create(&result_request(athlete.id, meet.id, time, None))
            .await
            .expect("result");
    }

    let top = results.top_fastest(3).await.expect("top");
    let times: Vec<&str> = top.iter().map(|r| r.time.as_str()).collect();
    assert_eq!(times, vec!["17:55.2", "18:10.9", "19:30.0"]);
    assert_eq!(top[0].athlete_name, "Ava Brooks");
    assert_eq!(top[0].meet_name, "Season Opener");
}

#[tokio::test]
async fn meet_results_join_athlete_names() {
    let db = setup().await;
    let athletes = AthleteRepository::new(db.pool());
    let first = athletes.create(&athlete_request("Ava Brooks")).await.expect("athlete");
    let second = athletes.create(&athlete_request("Ben Ortiz")).await.expect("athlete");
    let meets = MeetRepository::new(db.pool());
    let meet = meets
        .create(&meet_request("County Championship", "2025-10-18"))
        .await
        .expect("meet");

    let results = ResultRepository::new(db.pool());
    results
        .create(&result_request(first.id, meet.id, "18:20.0", Some(1)))
        .await
        .expect("result");
    results
        .create(&result_request(second.id, meet.id, "18:45.7", Some(2)))
        .await
        .expect("result");

    let rows = meets.results(meet.id).await.expect("rows");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].athlete_name, "Ava Brooks");
    assert_eq!(rows[0].place, 1);
    assert_eq!(rows[1].athlete_name, "Ben Ortiz");
}

#[tokio::test]
async fn meet_results_for_unknown_meet_is_empty() {
    let db = setup().await;
    let rows = MeetRepository::new(db.pool())
        .results(9999)
        .await
        .expect("rows");
    assert!(rows.is_empty());
}

#[tokio::test]
async fn seeded_admin_user_is_present() {
    let db = setup().await;
    let user = UserRepository::new(db.pool())
        .find_by_username("admin")
        .await
        .expect("query")
        .expect("seeded user");
    assert_eq!(user.username, "admin");
}

#[tokio::test]
async fn unknown_username_is_none() {
    let db = setup().await;
    let user = UserRepository::new(db.pool())
        .find_by_username("nobody")
        .await
        .expect("query");
    assert!(user.is_none());
}
