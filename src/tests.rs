//! Integration tests for the GreenSteps backend.

use reqwest::Client;
use serde_json::{json, Value};

use crate::config::Config;
use crate::{create_router, AppState};

/// Test fixture for integration tests.
struct TestFixture {
    client: Client,
    base_url: String,
}

impl TestFixture {
    async fn new() -> Self {
        Self::with_config(Config::default()).await
    }

    async fn with_config(config: Config) -> Self {
        let app = create_router(AppState::new(config));

        // Bind to random port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind");
        let addr = listener.local_addr().expect("Failed to get addr");
        let base_url = format!("http://{}", addr);

        // Spawn server
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Wait for server to start
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        TestFixture {
            client: Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get(&self, path: &str) -> (u16, Value) {
        let resp = self.client.get(self.url(path)).send().await.unwrap();
        let status = resp.status().as_u16();
        (status, resp.json().await.unwrap())
    }

    async fn post(&self, path: &str, body: Value) -> (u16, Value) {
        let resp = self
            .client
            .post(self.url(path))
            .json(&body)
            .send()
            .await
            .unwrap();
        let status = resp.status().as_u16();
        (status, resp.json().await.unwrap())
    }

    async fn delete(&self, path: &str) -> (u16, Value) {
        let resp = self.client.delete(self.url(path)).send().await.unwrap();
        let status = resp.status().as_u16();
        (status, resp.json().await.unwrap())
    }

    async fn login(&self, username: &str, password: &str, role: &str) -> (u16, Value) {
        self.post(
            "/api/session/login",
            json!({ "username": username, "password": password, "role": role }),
        )
        .await
    }
}

#[tokio::test]
async fn test_health_check() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .get(fixture.url("/health"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "OK");
}

#[tokio::test]
async fn test_store_snapshot_seeded() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture.get("/api/store").await;

    assert_eq!(status, 200);
    assert_eq!(body["success"], true);
    assert!(body["data"]["user"].is_null());
    assert_eq!(body["data"]["lessons"].as_array().unwrap().len(), 3);
    assert_eq!(body["data"]["projects"].as_array().unwrap().len(), 2);
    assert_eq!(body["data"]["resources"].as_array().unwrap().len(), 2);
    assert_eq!(body["data"]["completedLessons"], json!([]));
    assert_eq!(body["data"]["joinedProjects"], json!([]));
    assert_eq!(body["revisionId"], 0);
    assert_eq!(body["data"]["resources"][0]["type"], "PDF");
}

#[tokio::test]
async fn test_store_unseeded() {
    let fixture = TestFixture::with_config(Config {
        seed_content: false,
        ..Config::default()
    })
    .await;

    let (_, body) = fixture.get("/api/lessons").await;
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn test_student_login_and_logout() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture.login("alice", "secret", "student").await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["user"]["role"], "student");
    assert_eq!(body["data"]["user"]["name"], "Alex Green");
    assert_eq!(body["data"]["redirectTo"], "/dashboard");
    assert_eq!(body["notifications"][0]["title"], "Welcome back, alice!");
    assert_eq!(body["notifications"][0]["description"], "Logged in as student.");

    let (_, body) = fixture.get("/api/session").await;
    assert_eq!(body["data"]["username"], "alice");

    let (status, body) = fixture.post("/api/session/logout", json!({})).await;
    assert_eq!(status, 200);
    assert_eq!(body["notifications"][0]["title"], "Logged out");

    let (_, body) = fixture.get("/api/session").await;
    assert!(body["data"].is_null());

    // Logging out again is safe
    let (status, _) = fixture.post("/api/session/logout", json!({})).await;
    assert_eq!(status, 200);
}

#[tokio::test]
async fn test_admin_login() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture.login("adim123", "admin", "admin").await;

    assert_eq!(status, 200);
    assert_eq!(body["data"]["user"]["role"], "admin");
    assert_eq!(body["data"]["user"]["name"], "Admin User");
    assert_eq!(body["data"]["redirectTo"], "/admin");
}

#[tokio::test]
async fn test_admin_login_rejected() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture.login("adim123", "wrong-password", "admin").await;

    assert_eq!(status, 401);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");
    assert_eq!(body["notifications"][0]["title"], "Invalid Credentials");
    assert_eq!(body["notifications"][0]["variant"], "destructive");

    let (_, body) = fixture.get("/api/session").await;
    assert!(body["data"].is_null());
}

#[tokio::test]
async fn test_admin_credentials_from_config() {
    let fixture = TestFixture::with_config(Config {
        admin_username: "root".to_string(),
        admin_password: "hunter22".to_string(),
        ..Config::default()
    })
    .await;

    let (status, _) = fixture.login("adim123", "admin", "admin").await;
    assert_eq!(status, 401);

    let (status, _) = fixture.login("root", "hunter22", "admin").await;
    assert_eq!(status, 200);
}

#[tokio::test]
async fn test_login_form_rules() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture.login("a", "secret", "student").await;
    assert_eq!(status, 400);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert!(body.get("notifications").is_none());

    let (status, body) = fixture.login("alice", "abc", "student").await;
    assert_eq!(status, 400);
    assert!(body.get("notifications").is_none());

    // Admin logins failing the form rules do not raise the credentials notification either
    let (status, body) = fixture.login("adim123", "abc", "admin").await;
    assert_eq!(status, 400);
    assert!(body.get("notifications").is_none());
}

#[tokio::test]
async fn test_login_unknown_role() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture.login("alice", "secret", "superuser").await;

    assert_eq!(status, 400);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_lesson_lifecycle() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture
        .post(
            "/api/lessons",
            json!({
                "title": "Composting at Home",
                "description": "Turn kitchen scraps into rich soil",
                "category": "Waste Reduction",
                "difficulty": "Beginner",
                "duration": "12 min",
                "content": "Layer greens and browns, keep it moist and turn it weekly."
            }),
        )
        .await;

    assert_eq!(status, 200);
    let lesson_id = body["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(body["data"]["title"], "Composting at Home");
    assert_eq!(body["notifications"][0]["title"], "Lesson Added");
    assert_eq!(body["notifications"][0]["description"], "Composting at Home");
    let revision_after_create = body["revisionId"].as_i64().unwrap();
    assert!(revision_after_create > 0);

    let (status, body) = fixture.get(&format!("/api/lessons/{}", lesson_id)).await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["category"], "Waste Reduction");

    let (_, body) = fixture.get("/api/lessons").await;
    let lessons = body["data"].as_array().unwrap();
    assert_eq!(lessons.len(), 4);
    assert_eq!(lessons[3]["id"], lesson_id.as_str());

    let (status, body) = fixture.delete(&format!("/api/lessons/{}", lesson_id)).await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["removed"], true);
    assert_eq!(body["notifications"][0]["title"], "Lesson Removed");
    assert!(body["revisionId"].as_i64().unwrap() > revision_after_create);

    let (status, body) = fixture.get(&format!("/api/lessons/{}", lesson_id)).await;
    assert_eq!(status, 404);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_lesson_validation() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture
        .post(
            "/api/lessons",
            json!({
                "title": "Solar",
                "description": "Too short",
                "category": "Renewable Energy",
                "difficulty": "Beginner",
                "duration": "5 min",
                "content": "Sunlight becomes electricity in photovoltaic cells."
            }),
        )
        .await;

    assert_eq!(status, 400);
    assert_eq!(body["error"]["message"], "Description is required");

    let (_, body) = fixture.get("/api/lessons").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_lesson_bad_difficulty() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture
        .post(
            "/api/lessons",
            json!({
                "title": "Solar Power",
                "description": "How panels turn light into power",
                "category": "Renewable Energy",
                "difficulty": "Expert",
                "duration": "5 min",
                "content": "Sunlight becomes electricity in photovoltaic cells."
            }),
        )
        .await;

    assert_eq!(status, 400);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_complete_lesson_idempotent() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture.post("/api/lessons/2/complete", json!({})).await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["newlyAdded"], true);
    assert_eq!(body["data"]["ids"], json!(["2"]));
    assert_eq!(body["notifications"][0]["title"], "Lesson Completed!");
    assert_eq!(body["notifications"][0]["description"], "+50 Eco Points");

    let (status, body) = fixture.post("/api/lessons/2/complete", json!({})).await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["newlyAdded"], false);
    assert_eq!(body["data"]["ids"], json!(["2"]));
    assert!(body.get("notifications").is_none());
}

#[tokio::test]
async fn test_project_create_and_join() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture
        .post(
            "/api/projects",
            json!({
                "title": "Tree Planting",
                "difficulty": "Easy",
                "duration": "1 Day",
                "impact": "10 trees",
                "description": "Plant trees locally",
                "instructions": ["Pick a site", "Plant saplings"],
                "materials": ["Shovel", "Saplings"]
            }),
        )
        .await;

    assert_eq!(status, 200);
    assert_eq!(body["data"]["participants"], 0);
    assert_eq!(body["data"]["materials"], json!(["Shovel", "Saplings"]));
    let project_id = body["data"]["id"].as_str().unwrap().to_string();

    let (_, body) = fixture.get("/api/projects").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 3);

    let (_, body) = fixture
        .post(&format!("/api/projects/{}/join", project_id), json!({}))
        .await;
    assert_eq!(body["data"]["newlyAdded"], true);
    assert_eq!(body["notifications"][0]["title"], "Project Joined!");

    // Joining does not change the participant count
    let (_, body) = fixture.get(&format!("/api/projects/{}", project_id)).await;
    assert_eq!(body["data"]["participants"], 0);
}

#[tokio::test]
async fn test_project_placeholder_lists() {
    let fixture = TestFixture::new().await;

    let (_, body) = fixture
        .post(
            "/api/projects",
            json!({
                "title": "Beach Cleanup",
                "difficulty": "Medium",
                "duration": "1 Week",
                "impact": "Saves 10kg of litter",
                "description": "Collect litter along the shore"
            }),
        )
        .await;

    assert_eq!(
        body["data"]["instructions"],
        json!(["Step 1: Plan", "Step 2: Execute", "Step 3: Review"])
    );
    assert_eq!(
        body["data"]["materials"],
        json!(["Pen", "Paper", "Determination"])
    );
}

#[tokio::test]
async fn test_join_unknown_project() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture.post("/api/projects/ghost/join", json!({})).await;

    assert_eq!(status, 200);
    assert_eq!(body["data"]["ids"], json!(["ghost"]));
}

#[tokio::test]
async fn test_resource_lifecycle() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture
        .post(
            "/api/resources",
            json!({
                "title": "Solar Explained",
                "description": "A short video on photovoltaics",
                "type": "Video",
                "url": "https://example.org/solar",
                "tag": "Beginner"
            }),
        )
        .await;

    assert_eq!(status, 200);
    assert_eq!(body["data"]["type"], "Video");
    let resource_id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = fixture
        .delete(&format!("/api/resources/{}", resource_id))
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["removed"], true);

    let (_, body) = fixture.get("/api/resources").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_resource_invalid_url() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture
        .post(
            "/api/resources",
            json!({
                "title": "Broken Link",
                "description": "This link goes nowhere at all",
                "type": "Link",
                "url": "not-a-url",
                "tag": "Beginner"
            }),
        )
        .await;

    assert_eq!(status, 400);
    assert_eq!(body["error"]["message"], "Must be a valid URL");
}

#[tokio::test]
async fn test_remove_unknown_resource() {
    let fixture = TestFixture::new().await;

    let (_, before) = fixture.get("/api/resources").await;
    let (status, body) = fixture.delete("/api/resources/nonexistent-id").await;

    assert_eq!(status, 200);
    assert_eq!(body["data"]["removed"], false);
    assert_eq!(body["revisionId"], 0);

    let (_, after) = fixture.get("/api/resources").await;
    assert_eq!(before["data"], after["data"]);
}

#[tokio::test]
async fn test_dashboard() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture.get("/api/dashboard").await;
    assert_eq!(status, 401);
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");

    fixture.login("alice", "secret", "student").await;
    fixture.post("/api/lessons/1/complete", json!({})).await;
    fixture.post("/api/projects/2/join", json!({})).await;

    let (status, body) = fixture.get("/api/dashboard").await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["completedCount"], 1);
    assert_eq!(body["data"]["totalLessons"], 3);
    assert_eq!(body["data"]["nextLesson"]["id"], "2");
    assert_eq!(body["data"]["joinedProjects"][0]["title"], "Campus Energy Audit");
    assert_eq!(body["data"]["user"]["badges"], json!(["Eco-Starter", "Water Saver"]));
}

#[tokio::test]
async fn test_progress_survives_logout() {
    let fixture = TestFixture::new().await;

    fixture.login("alice", "secret", "student").await;
    fixture.post("/api/lessons/3/complete", json!({})).await;
    fixture.post("/api/session/logout", json!({})).await;
    fixture.login("bob", "secret", "student").await;

    let (_, body) = fixture.get("/api/store").await;
    assert_eq!(body["data"]["completedLessons"], json!(["3"]));
    assert_eq!(body["data"]["user"]["username"], "bob");
}

#[tokio::test]
async fn test_admin_overview() {
    let fixture = TestFixture::new().await;

    fixture.delete("/api/projects/1").await;

    let (status, body) = fixture.get("/api/admin/overview").await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["lessonCount"], 3);
    assert_eq!(body["data"]["projectCount"], 1);
    assert_eq!(body["data"]["resourceCount"], 2);
}

#[tokio::test]
async fn test_navigation() {
    let fixture = TestFixture::new().await;

    let (_, body) = fixture.get("/api/navigation").await;
    assert_eq!(body["data"]["account"]["href"], "/auth");
    assert_eq!(body["data"]["links"][1]["href"], "/lessons");

    fixture.login("adim123", "admin", "admin").await;
    let (_, body) = fixture.get("/api/navigation").await;
    assert_eq!(body["data"]["account"]["href"], "/admin");
    assert_eq!(body["data"]["account"]["label"], "Dashboard");
    assert_eq!(body["data"]["roleLabel"], "Administrator");
}
