mod common;

use axum::http::StatusCode;
use common::{create_note, register_new_user, send, setup_test_app};
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn test_notes_require_token() {
    let app = setup_test_app();

    for (method, uri) in [
        ("GET", "/notes".to_string()),
        ("POST", "/notes".to_string()),
        ("PUT", format!("/notes/{}", Uuid::new_v4())),
        ("DELETE", format!("/notes/{}", Uuid::new_v4())),
    ] {
        let response = send(&app, method, &uri, None, Some(json!({}))).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{method} {uri}");
    }
}

#[tokio::test]
async fn test_create_note_defaults_tag() {
    let app = setup_test_app();
    let token = register_new_user(&app).await;

    let note = create_note(&app, &token, "Groceries", "Milk and eggs").await;

    assert_eq!(note["title"], "Groceries");
    assert_eq!(note["description"], "Milk and eggs");
    assert_eq!(note["tag"], "General");
    assert!(note.get("id").is_some());
    assert!(note.get("user_id").is_some());
}

#[tokio::test]
async fn test_create_note_validation() {
    let app = setup_test_app();
    let token = register_new_user(&app).await;

    let response = send(
        &app,
        "POST",
        "/notes",
        Some(&token),
        Some(json!({ "title": "ab", "description": "abcd" })),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let messages: Vec<&str> = response.body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["message"].as_str().unwrap())
        .collect();
    assert_eq!(messages, vec!["Enter a valid description", "Enter a valid title"]);
}

#[tokio::test]
async fn test_list_notes_is_scoped_and_ordered() {
    let app = setup_test_app();
    let alice = register_new_user(&app).await;
    let bob = register_new_user(&app).await;

    create_note(&app, &alice, "First", "first note").await;
    create_note(&app, &bob, "Bob's", "not for alice").await;
    create_note(&app, &alice, "Second", "second note").await;

    let response = send(&app, "GET", "/notes", Some(&alice), None).await;

    assert_eq!(response.status, StatusCode::OK);
    let titles: Vec<&str> = response.body
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["First", "Second"]);
}

#[tokio::test]
async fn test_list_notes_empty() {
    let app = setup_test_app();
    let token = register_new_user(&app).await;

    let response = send(&app, "GET", "/notes", Some(&token), None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!([]));
}

#[tokio::test]
async fn test_partial_update() {
    let app = setup_test_app();
    let token = register_new_user(&app).await;
    let note = create_note(&app, &token, "Title", "Description").await;
    let id = note["id"].as_str().unwrap();

    let response = send(
        &app,
        "PUT",
        &format!("/notes/{id}"),
        Some(&token),
        Some(json!({ "title": "New title", "description": "" })),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["title"], "New title");
    assert_eq!(response.body["description"], "Description");
    assert_eq!(response.body["tag"], "General");
    assert_eq!(response.body["id"], note["id"]);
}

#[tokio::test]
async fn test_update_validation() {
    let app = setup_test_app();
    let token = register_new_user(&app).await;
    let note = create_note(&app, &token, "Title", "Description").await;
    let id = note["id"].as_str().unwrap();

    let response = send(
        &app,
        "PUT",
        &format!("/notes/{id}"),
        Some(&token),
        Some(json!({ "title": "x" })),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["errors"][0]["field"], "title");
}

#[tokio::test]
async fn test_update_unknown_note() {
    let app = setup_test_app();
    let token = register_new_user(&app).await;

    let response = send(
        &app,
        "PUT",
        &format!("/notes/{}", Uuid::new_v4()),
        Some(&token),
        Some(json!({ "title": "New title" })),
    )
    .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "Note not found");
}

#[tokio::test]
async fn test_update_unknown_note_without_body() {
    let app = setup_test_app();
    let token = register_new_user(&app).await;

    let response = send(
        &app,
        "PUT",
        &format!("/notes/{}", Uuid::new_v4()),
        Some(&token),
        None,
    )
    .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_foreign_note_with_bad_body_is_forbidden() {
    let app = setup_test_app();
    let owner = register_new_user(&app).await;
    let intruder = register_new_user(&app).await;
    let note = create_note(&app, &owner, "Private", "owner's secret").await;
    let uri = format!("/notes/{}", note["id"].as_str().unwrap());

    let response = send(&app, "PUT", &uri, Some(&intruder), Some(json!({ "title": 5 }))).await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["error"], "Not allowed");
}

#[tokio::test]
async fn test_update_own_note_with_bad_body() {
    let app = setup_test_app();
    let token = register_new_user(&app).await;
    let note = create_note(&app, &token, "Title", "Description").await;
    let uri = format!("/notes/{}", note["id"].as_str().unwrap());

    let response = send(&app, "PUT", &uri, Some(&token), Some(json!({ "title": 5 }))).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "Invalid field type in request");
}

#[tokio::test]
async fn test_update_without_body_returns_note_unchanged() {
    let app = setup_test_app();
    let token = register_new_user(&app).await;
    let note = create_note(&app, &token, "Title", "Description").await;
    let uri = format!("/notes/{}", note["id"].as_str().unwrap());

    let response = send(&app, "PUT", &uri, Some(&token), None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, note);
}

#[tokio::test]
async fn test_malformed_note_id_is_not_found() {
    let app = setup_test_app();
    let token = register_new_user(&app).await;

    let response = send(&app, "DELETE", "/notes/not-a-uuid", Some(&token), None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_foreign_note_is_forbidden_and_untouched() {
    let app = setup_test_app();
    let owner = register_new_user(&app).await;
    let intruder = register_new_user(&app).await;
    let note = create_note(&app, &owner, "Private", "owner's secret").await;
    let uri = format!("/notes/{}", note["id"].as_str().unwrap());

    let update = send(
        &app,
        "PUT",
        &uri,
        Some(&intruder),
        Some(json!({ "title": "Hijacked" })),
    )
    .await;
    assert_eq!(update.status, StatusCode::FORBIDDEN);
    assert_eq!(update.body["error"], "Not allowed");

    let delete = send(&app, "DELETE", &uri, Some(&intruder), None).await;
    assert_eq!(delete.status, StatusCode::FORBIDDEN);

    let listed = send(&app, "GET", "/notes", Some(&owner), None).await;
    assert_eq!(listed.body, json!([note]));
}

#[tokio::test]
async fn test_delete_note_twice() {
    let app = setup_test_app();
    let token = register_new_user(&app).await;
    let note = create_note(&app, &token, "Title", "Description").await;
    let uri = format!("/notes/{}", note["id"].as_str().unwrap());

    let first = send(&app, "DELETE", &uri, Some(&token), None).await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body["success"], true);
    assert_eq!(first.body["message"], "Note has been deleted");
    assert_eq!(first.body["note"], note);

    let second = send(&app, "DELETE", &uri, Some(&token), None).await;
    assert_eq!(second.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_full_note_lifecycle() {
    let app = setup_test_app();
    let token = register_new_user(&app).await;

    let created = send(
        &app,
        "POST",
        "/notes",
        Some(&token),
        Some(json!({ "title": "Groceries", "description": "Milk and eggs", "tag": "Home" })),
    )
    .await;
    assert_eq!(created.status, StatusCode::OK);
    assert_eq!(created.body["tag"], "Home");
    let uri = format!("/notes/{}", created.body["id"].as_str().unwrap());

    let updated = send(
        &app,
        "PUT",
        &uri,
        Some(&token),
        Some(json!({ "tag": "Errands" })),
    )
    .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["tag"], "Errands");
    assert_eq!(updated.body["title"], "Groceries");

    let listed = send(&app, "GET", "/notes", Some(&token), None).await;
    assert_eq!(listed.body, json!([updated.body]));

    let deleted = send(&app, "DELETE", &uri, Some(&token), None).await;
    assert_eq!(deleted.status, StatusCode::OK);

    let listed = send(&app, "GET", "/notes", Some(&token), None).await;
    assert_eq!(listed.body, json!([]));
}
