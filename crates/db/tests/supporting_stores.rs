//! Integration tests for the user, ping result and status page stores.

use assert_matches::assert_matches;
use chrono::{Duration, TimeZone, Utc};
use sqlx::PgPool;
use uptime_core::credential::PasswordHash;
use uptime_core::id::generate_id;
use uptime_db::models::ping_result::CreatePingResult;
use uptime_db::models::status_page::CreateStatusPage;
use uptime_db::models::user::NewUser;
use uptime_db::repositories::{PingResultRepo, StatusPageRepo, UserRepo};
use uptime_db::StoreError;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_user(username: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        password_hash: PasswordHash::from("$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string()),
    }
}

fn new_ping(monitor_id: &str, status: &str) -> CreatePingResult {
    CreatePingResult {
        monitor_id: monitor_id.to_string(),
        status: status.to_string(),
        response_time: 120,
        timestamp: None,
    }
}

fn new_page(user_id: &str, slug: &str, monitor_ids: &[&str]) -> CreateStatusPage {
    CreateStatusPage {
        user_id: user_id.to_string(),
        name: "Public status".to_string(),
        slug: slug.to_string(),
        monitor_ids: monitor_ids.iter().map(|s| s.to_string()).collect(),
    }
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_user_round_trips(pool: PgPool) {
    let id = generate_id();
    let input = new_user("alice");
    let user = UserRepo::create(&pool, &id, &input).await.unwrap();
    assert_eq!(user.id, id);
    assert_eq!(user.username, "alice");
    assert_eq!(user.password_hash, input.password_hash);

    let found = UserRepo::find_by_id(&pool, &id).await.unwrap();
    assert_eq!(found.username, "alice");
    assert_eq!(found.created_at, user.created_at);

    let by_name = UserRepo::find_by_username(&pool, "alice").await.unwrap();
    assert_eq!(by_name.map(|u| u.id), Some(id));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_username_is_rejected(pool: PgPool) {
    UserRepo::create(&pool, &generate_id(), &new_user("bob"))
        .await
        .unwrap();
    let result = UserRepo::create(&pool, &generate_id(), &new_user("bob")).await;
    assert_matches!(result, Err(StoreError::Database(sqlx::Error::Database(db_err))) => {
        assert_eq!(db_err.constraint(), Some("uq_users_username"));
    });
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_user_lookups(pool: PgPool) {
    assert_matches!(
        UserRepo::find_by_id(&pool, "nobody").await,
        Err(StoreError::NotFound { entity: "User", .. })
    );
    assert!(UserRepo::find_by_username(&pool, "nobody")
        .await
        .unwrap()
        .is_none());
    assert!(UserRepo::list(&pool).await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Ping results
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_ping_result_defaults_timestamp(pool: PgPool) {
    let before = Utc::now() - Duration::seconds(5);
    let result = PingResultRepo::create(&pool, &generate_id(), &new_ping("m1", "up"))
        .await
        .unwrap();
    assert_eq!(result.monitor_id, "m1");
    assert_eq!(result.status, "up");
    assert_eq!(result.response_time, 120);
    assert!(result.timestamp >= before);

    let found = PingResultRepo::find_by_id(&pool, &result.id).await.unwrap();
    assert_eq!(found, result);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_ping_results_listed_newest_first_per_monitor(pool: PgPool) {
    let base = Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap();
    for (offset, status) in [(0, "up"), (60, "down"), (120, "up")] {
        let mut input = new_ping("m1", status);
        input.timestamp = Some(base + Duration::seconds(offset));
        PingResultRepo::create(&pool, &generate_id(), &input)
            .await
            .unwrap();
    }
    PingResultRepo::create(&pool, &generate_id(), &new_ping("m2", "up"))
        .await
        .unwrap();

    let results = PingResultRepo::list_by_monitor(&pool, "m1").await.unwrap();
    let stamps: Vec<_> = results.iter().map(|r| r.timestamp).collect();
    assert_eq!(
        stamps,
        vec![
            base + Duration::seconds(120),
            base + Duration::seconds(60),
            base
        ]
    );
    assert_eq!(PingResultRepo::list(&pool).await.unwrap().len(), 4);
    assert!(PingResultRepo::list_by_monitor(&pool, "m3")
        .await
        .unwrap()
        .is_empty());
}

// ---------------------------------------------------------------------------
// Status pages
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_status_page_keeps_monitor_order_without_duplicates(pool: PgPool) {
    let page = StatusPageRepo::create(
        &pool,
        &generate_id(),
        &new_page("u1", "main", &["m3", "m1", "m3", "m2"]),
    )
    .await
    .unwrap();
    assert_eq!(page.monitor_ids, vec!["m3", "m1", "m2"]);

    let found = StatusPageRepo::find_by_id(&pool, &page.id).await.unwrap();
    assert_eq!(found, page);

    let by_slug = StatusPageRepo::find_by_slug(&pool, "u1", "main")
        .await
        .unwrap();
    assert_eq!(by_slug, Some(page));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_slug_unique_per_user_only(pool: PgPool) {
    StatusPageRepo::create(&pool, &generate_id(), &new_page("u1", "main", &[]))
        .await
        .unwrap();

    let clash = StatusPageRepo::create(&pool, &generate_id(), &new_page("u1", "main", &[])).await;
    assert_matches!(clash, Err(StoreError::Database(_)));

    StatusPageRepo::create(&pool, &generate_id(), &new_page("u2", "main", &[]))
        .await
        .unwrap();

    assert_eq!(StatusPageRepo::list(&pool).await.unwrap().len(), 2);
    assert_eq!(StatusPageRepo::list_by_user(&pool, "u2").await.unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_status_page_is_not_found(pool: PgPool) {
    assert_matches!(
        StatusPageRepo::find_by_id(&pool, "missing").await,
        Err(StoreError::NotFound { entity: "StatusPage", .. })
    );
}
