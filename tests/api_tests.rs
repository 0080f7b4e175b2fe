// tests/api_tests.rs

use sqlx::sqlite::SqlitePoolOptions;
use tawjihi_backend::{config::Config, db, routes, state::AppState};

/// Helper function to spawn the app on a random port for testing.
/// Returns the base URL (e.g., "http://127.0.0.1:12345").
async fn spawn_app() -> String {
    // 1. Create an in-memory database. A single connection that never expires
    //    keeps the same database alive for the whole test.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory SQLite");

    // 2. Create tables
    db::init_schema(&pool)
        .await
        .expect("Failed to initialize schema");

    // 3. Create test configuration and state
    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        rust_log: "error".to_string(),
        ..Config::default()
    };

    let state = AppState { pool, config };

    // 4. Create the router with the app state
    let app = routes::create_router(state);

    // 5. Bind to port 0 to get a random available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    // 6. Spawn the server in the background
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    address
}

fn unique_id(prefix: &str) -> String {
    format!("{}_{}", prefix, &uuid::Uuid::new_v4().to_string()[..8])
}

async fn register(client: &reqwest::Client, address: &str, id: &str, password: &str) -> reqwest::Response {
    client
        .post(&format!("{}/api/auth/register", address))
        .json(&serde_json::json!({
            "id": id,
            "username": format!("name_{}", id),
            "email": format!("{}@example.com", id),
            "passwordHash": password,
            "role": "Student"
        }))
        .send()
        .await
        .expect("Failed to execute request")
}

#[tokio::test]
async fn health_check_404() {
    // Arrange
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    // Act
    let response = client
        .get(&format!("{}/random_path_that_does_not_exist", address))
        .send()
        .await
        .expect("Failed to execute request");

    // Assert
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn register_works() {
    // Arrange
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let id = unique_id("u");

    // Act
    let response = register(&client, &address, &id, "secret").await;

    // Assert
    assert_eq!(response.status().as_u16(), 201);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "success");
}

#[tokio::test]
async fn register_duplicate_id_fails() {
    // Arrange
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let id = unique_id("u");

    // Act
    let first = register(&client, &address, &id, "secret").await;
    let second = register(&client, &address, &id, "other").await;

    // Assert
    assert_eq!(first.status().as_u16(), 201);
    assert_eq!(second.status().as_u16(), 400);
    let body: serde_json::Value = second.json().await.unwrap();
    assert_eq!(body["status"], "error");
    assert!(
        body["message"].as_str().unwrap().contains("UNIQUE"),
        "message should carry the database error, got {}",
        body["message"]
    );
}

#[tokio::test]
async fn new_user_gets_default_progress() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let id = unique_id("u");
    register(&client, &address, &id, "secret").await;

    let user: serde_json::Value = client
        .post(&format!("{}/api/auth/login", address))
        .json(&serde_json::json!({ "username": format!("name_{}", id), "password": "secret" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(user["id"], id.as_str());
    assert_eq!(user["role"], "Student");
    assert_eq!(user["xp"], 0);
    assert_eq!(user["coins"], 50);
    assert_eq!(user["streak"], 0);
    assert_eq!(user["hints_count"], 3);
    assert_eq!(user["selected_theme"], "default");
    assert_eq!(user["inventory"], serde_json::json!(["theme_default"]));
    assert_eq!(user["password_hash"], "secret");
    assert!(user["last_active"].is_null());
}

#[tokio::test]
async fn login_accepts_username_or_email() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let id = unique_id("u");
    register(&client, &address, &id, "secret").await;

    for identifier in [format!("name_{}", id), format!("{}@example.com", id)] {
        let response = client
            .post(&format!("{}/api/auth/login", address))
            .json(&serde_json::json!({ "username": identifier, "password": "secret" }))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status().as_u16(), 200, "login with {}", identifier);
        let user: serde_json::Value = response.json().await.unwrap();
        assert_eq!(user["id"], id.as_str());
    }
}

#[tokio::test]
async fn login_rejects_wrong_password_and_unknown_user() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let id = unique_id("u");
    register(&client, &address, &id, "secret").await;

    let attempts = [
        (format!("name_{}", id), "Secret"),
        (format!("name_{}", id), ""),
        ("nobody".to_string(), "secret"),
    ];

    for (identifier, password) in attempts {
        let response = client
            .post(&format!("{}/api/auth/login", address))
            .json(&serde_json::json!({ "username": identifier, "password": password }))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status().as_u16(), 401);
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], "Invalid credentials");
    }
}

#[tokio::test]
async fn user_sync_is_visible_on_login() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let id = unique_id("u");
    register(&client, &address, &id, "secret").await;

    let response = client
        .post(&format!("{}/api/user/{}/sync", address, id))
        .json(&serde_json::json!({
            "xp": 1250,
            "coins": 15,
            "streak": 4,
            "hintsCount": 1,
            "selectedTheme": "theme_ocean",
            "inventory": ["theme_default", "theme_ocean", "badge_gold"],
            "lastActive": "2024-05-01T10:00:00.000Z"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "success");

    let user: serde_json::Value = client
        .post(&format!("{}/api/auth/login", address))
        .json(&serde_json::json!({ "username": format!("{}@example.com", id), "password": "secret" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(user["xp"], 1250);
    assert_eq!(user["coins"], 15);
    assert_eq!(user["streak"], 4);
    assert_eq!(user["hints_count"], 1);
    assert_eq!(user["selected_theme"], "theme_ocean");
    assert_eq!(
        user["inventory"],
        serde_json::json!(["theme_default", "theme_ocean", "badge_gold"])
    );
    assert_eq!(user["last_active"], "2024-05-01T10:00:00.000Z");
}

#[tokio::test]
async fn user_sync_for_unknown_user_is_accepted() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(&format!("{}/api/user/{}/sync", address, unique_id("ghost")))
        .json(&serde_json::json!({
            "xp": 1,
            "coins": 1,
            "streak": 1,
            "hintsCount": 1,
            "selectedTheme": "default",
            "inventory": [],
            "lastActive": "2024-05-01"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn results_round_trip() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let user_id = unique_id("u");
    let other_user = unique_id("u");

    let posted = serde_json::json!({
        "id": unique_id("r"),
        "subjectName": "الرياضيات",
        "unitName": "التفاضل",
        "score": 8,
        "totalPoints": 10,
        "percentage": 80.0,
        "date": "2024-05-01T10:00:00.000Z",
        "difficulty": "hard",
        "earnedXp": 120
    });

    let response = client
        .post(&format!("{}/api/results/{}", address, user_id))
        .json(&posted)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);

    let results: Vec<serde_json::Value> = client
        .get(&format!("{}/api/results/{}", address, user_id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(results.len(), 1);
    let r = &results[0];
    assert_eq!(r["id"], posted["id"]);
    assert_eq!(r["user_id"], user_id.as_str());
    assert_eq!(r["subject_name"], "الرياضيات");
    assert_eq!(r["unit_name"], "التفاضل");
    assert_eq!(r["score"], 8);
    assert_eq!(r["total_points"], 10);
    assert_eq!(r["percentage"], 80.0);
    assert_eq!(r["date"], "2024-05-01T10:00:00.000Z");
    assert_eq!(r["difficulty"], "hard");
    assert_eq!(r["earned_xp"], 120);

    // Results are scoped to the user in the path
    let others: Vec<serde_json::Value> = client
        .get(&format!("{}/api/results/{}", address, other_user))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(others.is_empty());
}

#[tokio::test]
async fn results_duplicate_id_fails() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let user_id = unique_id("u");

    let posted = serde_json::json!({
        "id": "r1",
        "subjectName": "Physics",
        "unitName": "Waves",
        "score": 3,
        "totalPoints": 5,
        "percentage": 60.0,
        "date": "2024-05-02"
    });

    for expected in [200, 400] {
        let response = client
            .post(&format!("{}/api/results/{}", address, user_id))
            .json(&posted)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), expected);
    }

    let results: Vec<serde_json::Value> = client
        .get(&format!("{}/api/results/{}", address, user_id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(results.len(), 1);
    assert!(results[0]["difficulty"].is_null());
    assert!(results[0]["earned_xp"].is_null());
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(&format!("{}/api/data", address))
        .header("Origin", "http://some-client.example")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}
