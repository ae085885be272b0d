// tests/api_tests.rs

use serde_json::{Value, json};
use trivia_api::{
    routes,
    state::AppState,
    store::MemoryStore,
    utils::random::IndexPicker,
};

/// Deterministic picker: always takes the first remaining candidate.
struct FirstPicker;

impl IndexPicker for FirstPicker {
    fn pick_index(&self, _len: usize) -> usize {
        0
    }
}

/// Helper function to spawn the app on a random port for testing.
/// Returns the base URL (e.g., "http://127.0.0.1:12345").
async fn spawn_app() -> String {
    // Every test gets its own freshly seeded store
    let state = AppState::new(MemoryStore::seeded()).with_picker(FirstPicker);
    let app = routes::create_router(state);

    // Bind to port 0 to get a random available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    // Spawn the server in the background
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    address
}

async fn all_questions(client: &reqwest::Client, address: &str) -> Vec<Value> {
    let mut questions = Vec::new();
    for page in 1.. {
        let body: Value = client
            .get(format!("{}/questions?page={}", address, page))
            .send()
            .await
            .expect("Failed to execute request")
            .json()
            .await
            .unwrap();
        let batch = body["questions"].as_array().unwrap().clone();
        if batch.is_empty() {
            break;
        }
        questions.extend(batch);
    }
    questions
}

#[tokio::test]
async fn unknown_route_returns_404_envelope() {
    // Arrange
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    // Act
    let response = client
        .get(format!("{}/random_path_that_does_not_exist", address))
        .send()
        .await
        .expect("Failed to execute request");

    // Assert
    assert_eq!(response.status().as_u16(), 404);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({"success": false, "error": 404, "message": "Not found"})
    );
}

#[tokio::test]
async fn get_categories_lists_all_six() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/categories", address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "*"
    );
    let body: Value = response.json().await.unwrap();
    let categories = body["categories"].as_array().unwrap();
    assert_eq!(categories.len(), 6);
    assert_eq!(categories[0], json!({"id": 1, "type": "Science"}));
}

#[tokio::test]
async fn get_questions_is_paginated() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let first: Value = client
        .get(format!("{}/questions?page=1", address))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .unwrap();

    assert_eq!(first["questions"].as_array().unwrap().len(), 10);
    assert_eq!(first["total_questions"], 19);
    assert_eq!(first["current_category"], "ALL");
    assert_eq!(first["categories"].as_array().unwrap().len(), 6);

    let second: Value = client
        .get(format!("{}/questions?page=2", address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(second["questions"].as_array().unwrap().len(), 9);
    assert_eq!(second["questions"][0]["id"], 15);

    let beyond: Value = client
        .get(format!("{}/questions?page=7", address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(beyond["questions"].as_array().unwrap().is_empty());
    assert_eq!(beyond["total_questions"], 19);
}

#[tokio::test]
async fn get_questions_defaults_to_first_page() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    for url in ["/questions", "/questions?page=abc"] {
        let response = client
            .get(format!("{}{}", address, url))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 200);

        let body: Value = response.json().await.unwrap();
        assert_eq!(body["questions"][0]["id"], 2);
    }
}

#[tokio::test]
async fn create_question_then_list_it() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/questions", address))
        .json(&json!({
            "question": "2+2",
            "answer": "5",
            "difficulty": 5,
            "category": 6
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "question added");

    let questions = all_questions(&client, &address).await;
    assert_eq!(questions.len(), 20);
    let created = questions
        .iter()
        .find(|q| q["question"] == "2+2")
        .expect("new question should be listed");
    assert_eq!(created["answer"], "5");
    assert_eq!(created["category"], 6);
}

#[tokio::test]
async fn create_question_missing_parameter_returns_422() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/questions", address))
        .json(&json!({
            "question": "2+2",
            "answer": "5",
            "difficulty": 5
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 422);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({"success": false, "error": 422, "message": "Unprocessable entity"})
    );

    // Nothing was persisted
    assert_eq!(all_questions(&client, &address).await.len(), 19);
}

#[tokio::test]
async fn create_question_with_malformed_body_returns_422() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/questions", address))
        .header("Content-Type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 422);
}

#[tokio::test]
async fn delete_question_removes_it() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .delete(format!("{}/questions/2", address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "deleted");

    let questions = all_questions(&client, &address).await;
    assert_eq!(questions.len(), 18);
    assert!(questions.iter().all(|q| q["id"] != 2));

    // Second delete of the same id is a 404
    let again = client
        .delete(format!("{}/questions/2", address))
        .send()
        .await
        .unwrap();
    assert_eq!(again.status().as_u16(), 404);
}

#[tokio::test]
async fn delete_non_existing_question_returns_404() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .delete(format!("{}/questions/100", address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 404);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Not found");
}

#[tokio::test]
async fn search_questions_finds_substring() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/questions-search", address))
        .json(&json!({"searchTerm": "Van Gogh"}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["questions"].as_array().unwrap().len(), 1);
    assert_eq!(body["questions"][0]["id"], 18);
    assert_eq!(body["total_questions"], 1);
    assert_eq!(body["current_category"], "ALL");
}

#[tokio::test]
async fn search_total_counts_current_page_only() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    // "?" appears in every seeded question
    let first: Value = client
        .post(format!("{}/questions-search", address))
        .json(&json!({"searchTerm": "?"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(first["total_questions"], 10);

    let second: Value = client
        .post(format!("{}/questions-search", address))
        .json(&json!({"searchTerm": "?", "page": 2}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(second["total_questions"], 9);
}

#[tokio::test]
async fn search_is_case_sensitive() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let body: Value = client
        .post(format!("{}/questions-search", address))
        .json(&json!({"searchTerm": "van gogh"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert!(body["questions"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn search_missing_search_term_returns_422() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/questions-search", address))
        .json(&json!({}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 422);
}

#[tokio::test]
async fn questions_by_category_lists_category_members() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/categories/2/questions", address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    let ids: Vec<i64> = body["questions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![16, 17, 18, 19]);
    assert_eq!(body["total_questions"], 4);
    assert_eq!(body["current_category"], json!({"id": 2, "type": "Art"}));
}

#[tokio::test]
async fn questions_by_unknown_category_returns_404() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    for url in ["/categories/9/questions", "/categories/art/questions"] {
        let response = client
            .get(format!("{}{}", address, url))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 404);
    }
}

#[tokio::test]
async fn quizzes_returns_remaining_question() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/quizzes", address))
        .json(&json!({
            "previous_questions": [16, 17, 19],
            "quiz_category": {"type": "Art", "id": 2}
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["question"]["id"], 18);
    assert_eq!(body["question"]["answer"], "One");
}

#[tokio::test]
async fn quizzes_exhausted_category_returns_null() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let body: Value = client
        .post(format!("{}/quizzes", address))
        .json(&json!({
            "previous_questions": [16, 17, 18, 19],
            "quiz_category": {"type": "Art", "id": 2}
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert!(body["question"].is_null());
}

#[tokio::test]
async fn quizzes_all_categories_skips_previous() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let body: Value = client
        .post(format!("{}/quizzes", address))
        .json(&json!({
            "previous_questions": [2],
            "quiz_category": {"type": "click", "id": 0}
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["question"]["id"], 4);
}

#[tokio::test]
async fn quizzes_invalid_category_returns_422() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/quizzes", address))
        .json(&json!({
            "previous_questions": [16, 17, 19],
            "quiz_category": {"type": "Programming", "id": 9}
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 422);
}

#[tokio::test]
async fn quizzes_missing_fields_returns_422() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/quizzes", address))
        .json(&json!({"quiz_category": {"id": 2}}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 422);
}
