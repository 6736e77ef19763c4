mod common;

use chrono::Duration;
use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::spawn().await;

    let response = app.register("alice", "alice@example.com", "correct-horse").await;

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status_code"], 200);
    assert_eq!(body["data"]["username"], "alice");
    assert_eq!(body["data"]["email"], "alice@example.com");
    assert!(body["data"]["id"].is_i64());
    assert!(body["data"].get("password").is_none());
    assert!(body["data"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = TestApp::spawn().await;

    app.register("alice", "alice@example.com", "correct-horse").await;
    let response = app.register("alice2", "alice@example.com", "correct-horse").await;

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("Email already exists"));
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let app = TestApp::spawn().await;

    app.register("alice", "alice@example.com", "correct-horse").await;
    let response = app.register("alice", "other@example.com", "correct-horse").await;

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("Username already exists"));
}

#[tokio::test]
async fn test_register_validation_errors() {
    let app = TestApp::spawn().await;

    let response = app.register("alice", "not-an-email", "correct-horse").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app.register("alice", "alice@example.com", "short").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app.register("al", "alice@example.com", "correct-horse").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body["data"]["message"],
        "Username must be at least 3 characters long"
    );
}

#[tokio::test]
async fn test_register_malformed_body() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/register")
        .json(&json!({ "username": "alice" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_with_email_and_username() {
    let app = TestApp::spawn().await;
    app.register("alice", "alice@example.com", "correct-horse").await;

    for identity in ["alice@example.com", "alice"] {
        let response = app.login(identity, "correct-horse").await;
        assert_eq!(response.status(), StatusCode::OK);

        let cookies: Vec<String> = response.cookies().map(|c| c.name().to_string()).collect();
        assert!(cookies.contains(&"access_token".to_string()));
        assert!(cookies.contains(&"refresh_token".to_string()));
        assert!(response.cookies().all(|c| c.http_only()));

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        assert_eq!(body["data"]["username"], "alice");
        assert_eq!(body["data"]["email"], "alice@example.com");

        let token = body["data"]["token"].as_str().unwrap();
        let claims = app.authenticator.validate_token(token).unwrap();
        assert_eq!(Some(claims.user_id), body["data"]["user_id"].as_i64());
    }
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::spawn().await;
    app.register("alice", "alice@example.com", "correct-horse").await;

    let wrong_password = app.login("alice@example.com", "wrong-password").await;
    let unknown_user = app.login("nobody@example.com", "correct-horse").await;

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status(), StatusCode::UNAUTHORIZED);

    let wrong_password = wrong_password.text().await.unwrap();
    let unknown_user = unknown_user.text().await.unwrap();
    assert_eq!(wrong_password, unknown_user);
    assert!(wrong_password.contains("Invalid identity or password"));
}

#[tokio::test]
async fn test_refresh_with_cookie() {
    let app = TestApp::spawn().await;
    app.register("alice", "alice@example.com", "correct-horse").await;
    let response = app.login("alice", "correct-horse").await;
    let body: serde_json::Value = response.json().await.unwrap();
    let user_id = body["data"]["user_id"].as_i64().unwrap();

    let response = app
        .get("/api/auth/refresh")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.cookies().any(|c| c.name() == "access_token"));

    let body: serde_json::Value = response.json().await.unwrap();
    let token = body["data"]["token"].as_str().unwrap();
    let claims = app.authenticator.validate_token(token).unwrap();
    assert_eq!(claims.user_id, user_id);
}

#[tokio::test]
async fn test_refresh_without_cookie() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/auth/refresh")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_refresh_rejects_access_token() {
    let app = TestApp::spawn().await;
    let access_token = app
        .register_and_login("alice", "alice@example.com", "correct-horse")
        .await;

    let response = app
        .fresh_client()
        .get(format!("{}/api/auth/refresh", app.address))
        .header("Cookie", format!("refresh_token={}", access_token))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["data"]["message"], "Invalid refresh token");
}

#[tokio::test]
async fn test_refresh_rejects_expired_token() {
    let app = TestApp::spawn().await;
    let expired = common::codec(Duration::minutes(15), Duration::seconds(-1))
        .issue_refresh(1, Some("alice"))
        .unwrap();

    let response = app
        .fresh_client()
        .get(format!("{}/api/auth/refresh", app.address))
        .header("Cookie", format!("refresh_token={}", expired))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_guard_without_token() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/logout")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["data"]["message"], "Missing or malformed JWT");
}

#[tokio::test]
async fn test_guard_rejects_invalid_tokens() {
    let app = TestApp::spawn().await;
    let access_token = app
        .register_and_login("alice", "alice@example.com", "correct-horse")
        .await;

    let expired = common::codec(Duration::seconds(-1), Duration::days(7))
        .issue_access(1, Some("alice"))
        .unwrap();
    let refresh = common::codec(Duration::minutes(15), Duration::days(7))
        .issue_refresh(1, Some("alice"))
        .unwrap();
    let mut tampered = access_token.clone();
    tampered.push('x');

    for token in [expired, refresh, tampered, "garbage".to_string()] {
        let response = app
            .fresh_client()
            .post(format!("{}/api/auth/logout", app.address))
            .bearer_auth(&token)
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["data"]["message"], "Invalid or expired JWT");
    }
}

#[tokio::test]
async fn test_logout_clears_cookies() {
    let app = TestApp::spawn().await;
    app.register_and_login("alice", "alice@example.com", "correct-horse")
        .await;

    // Authenticated through the access_token cookie alone.
    let response = app
        .post("/api/auth/logout")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["data"]["message"], "Logged out successfully");

    let response = app
        .post("/api/auth/logout")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .get("/api/auth/refresh")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
