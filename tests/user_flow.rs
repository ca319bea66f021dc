mod common;

use actix_web::{http::StatusCode, test};
use common::{bearer, client::TestClient, test_data, TestContext};
use serde_json::json;

#[actix_web::test]
async fn test_register_flow_success() {
    println!("\n\n[+] Running test: test_register_flow_success");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;
    println!("[+] Actix web app initialized.");

    let user_data = test_data::sample_user();
    println!("[>] Registering user: {:?}", user_data.username);

    let req = test::TestRequest::post()
        .uri("/api/users/register")
        .set_json(&user_data)
        .to_request();

    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["token_type"], "bearer");
    let token = body["access_token"].as_str().unwrap().to_string();
    assert!(!token.is_empty());

    println!("[>] Verifying user and starting progress in database.");
    let user = ctx.db.find_user_by_email(&user_data.email).await.unwrap().unwrap();
    assert_eq!(user.username, user_data.username);
    assert_ne!(user.password_hash, user_data.password);
    assert!(user.last_login.is_none());

    let progress = ctx.db.find_progress(user.id).await.unwrap();
    assert!(progress.is_some(), "registration should create a progress row");

    println!("[>] Using the token against /api/users/check");
    let req = test::TestRequest::get()
        .uri("/api/users/check")
        .insert_header(bearer(&token))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["authenticated"], true);
    assert_eq!(body["user_id"], user.id);
    assert_eq!(body["username"], user_data.username);
    println!("[/] Test passed: Registration flow successful.");
}

#[actix_web::test]
async fn test_register_flow_duplicate_email() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let first = test_data::sample_user();
    let req = test::TestRequest::post().uri("/api/users/register").set_json(&first).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let second = test_data::sample_user_with("SomeoneElse", &first.email);
    let req = test::TestRequest::post().uri("/api/users/register").set_json(&second).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "Email already registered");
}

#[actix_web::test]
async fn test_register_flow_duplicate_username() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let first = test_data::sample_user();
    let req = test::TestRequest::post().uri("/api/users/register").set_json(&first).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let second = test_data::sample_user_with(&first.username, "different@example.com");
    let req = test::TestRequest::post().uri("/api/users/register").set_json(&second).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "Username already taken");
}

#[actix_web::test]
async fn test_register_flow_rejects_bad_input() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let bad_email = test_data::sample_user_with("Crawler", "not-an-email");
    let req = test::TestRequest::post().uri("/api/users/register").set_json(&bad_email).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let long_name = test_data::sample_user_with(&"x".repeat(51), "long@example.com");
    let req = test::TestRequest::post().uri("/api/users/register").set_json(&long_name).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // missing password field entirely
    let req = test::TestRequest::post()
        .uri("/api/users/register")
        .set_json(json!({"username": "Crawler", "email": "c@example.com"}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNPROCESSABLE_ENTITY);

    assert!(ctx.db.find_user_by_email("long@example.com").await.unwrap().is_none());
}

#[actix_web::test]
async fn test_login_flow_success_updates_last_login() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let user_data = test_data::sample_user();
    let req = test::TestRequest::post().uri("/api/users/register").set_json(&user_data).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri("/api/users/login")
        .set_json(json!({"email": user_data.email, "password": user_data.password}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let token = body["access_token"].as_str().unwrap().to_string();

    let user = ctx.db.find_user_by_email(&user_data.email).await.unwrap().unwrap();
    assert!(user.last_login.is_some());

    let req = test::TestRequest::get()
        .uri("/api/users/profile")
        .insert_header(bearer(&token))
        .to_request();
    let profile: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(profile["id"], user.id);
    assert_eq!(profile["username"], user_data.username);
    assert_eq!(profile["email"], user_data.email);
    assert!(profile.get("password_hash").is_none());
    assert!(profile["created_at"].is_string());
}

#[actix_web::test]
async fn test_login_flow_wrong_credentials() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let user_data = test_data::sample_user();
    let req = test::TestRequest::post().uri("/api/users/register").set_json(&user_data).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    for (email, password) in [
        (user_data.email.as_str(), "wrong-password"),
        ("nobody@example.com", user_data.password.as_str()),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/users/login")
            .set_json(json!({"email": email, "password": password}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(resp.headers().get("WWW-Authenticate").unwrap(), "Bearer");

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "Incorrect email or password");
    }
}

#[actix_web::test]
async fn test_profile_flow_requires_valid_token() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::get().uri("/api/users/profile").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::get()
        .uri("/api/users/profile")
        .insert_header(bearer("garbage.token.value"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);

    // well-formed token whose user does not exist
    let orphan = dungeon_api::utils::token::create_access_token(9999, &common::get_test_config().jwt).unwrap();
    let req = test::TestRequest::get()
        .uri("/api/users/check")
        .insert_header(bearer(&orphan))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);
}
