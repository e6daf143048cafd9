use std::sync::Arc;

use axum::Router;
use sqlx::SqlitePool;

use crate::core::error::AppError;
use crate::features::categories::{routes as categories_routes, CategoryService};
use crate::features::questions::{routes as questions_routes, QuestionService};
use crate::features::quizzes::{routes as quizzes_routes, QuizService};

/// Build the application router over a connected pool.
///
/// This is the app factory: everything except config, listener setup, and the
/// outer observability layers lives here so tests can mount the real thing.
pub fn create_app(pool: SqlitePool) -> Router {
    let category_service = Arc::new(CategoryService::new(pool.clone()));
    let question_service = Arc::new(QuestionService::new(pool.clone()));
    let quiz_service = Arc::new(QuizService::new(pool));

    Router::new()
        .merge(categories_routes::routes(
            Arc::clone(&category_service),
            Arc::clone(&question_service),
        ))
        .merge(questions_routes::routes(question_service, category_service))
        .merge(quizzes_routes::routes(quiz_service))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
}

async fn not_found() -> AppError {
    AppError::NotFound("no such route".to_string())
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;
    use serde_json::{json, Value};

    use super::create_app;
    use crate::shared::constants::CATEGORY_COUNT;
    use crate::shared::test_helpers::{insert_fake_questions, insert_question, setup_db};

    async fn test_server() -> TestServer {
        let pool = setup_db().await;
        TestServer::new(create_app(pool)).expect("failed to start test server")
    }

    async fn seeded_server() -> (TestServer, sqlx::SqlitePool) {
        let pool = setup_db().await;
        let server = TestServer::new(create_app(pool.clone())).expect("failed to start test server");
        (server, pool)
    }

    // ------------------------------------------------------------------
    // GET /categories
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn get_categories_returns_all_six() {
        let server = test_server().await;

        let res = server.get("/categories").await;
        res.assert_status_ok();

        let body: Value = res.json();
        assert_eq!(body["success"], json!(true));
        assert_eq!(
            body["categories"].as_object().unwrap().len(),
            CATEGORY_COUNT
        );
        assert_eq!(body["categories"]["1"], json!("Science"));
        assert_eq!(body["categories"]["6"], json!("Sports"));
    }

    #[tokio::test]
    async fn post_categories_is_method_not_allowed() {
        let server = test_server().await;

        let res = server.post("/categories").json(&json!({"type": 3})).await;
        assert_eq!(res.status_code(), 405);

        let body: Value = res.json();
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["message"], json!("method not allowed"));
    }

    // ------------------------------------------------------------------
    // GET /questions
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn get_questions_returns_page_with_categories() {
        let (server, pool) = seeded_server().await;
        insert_question(&pool, "Q1?", "A1", 1, 1).await;

        let res = server.get("/questions").await;
        res.assert_status_ok();

        let body: Value = res.json();
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["questions"].as_array().unwrap().len(), 1);
        assert_eq!(body["total_questions"], json!(1));
        assert_eq!(
            body["categories"].as_object().unwrap().len(),
            CATEGORY_COUNT
        );
        assert_eq!(body["current_category"], json!([1]));
    }

    #[tokio::test]
    async fn get_questions_pages_are_ten_long() {
        let (server, pool) = seeded_server().await;
        insert_fake_questions(&pool, 12, 1).await;

        let first = server.get("/questions").add_query_param("page", "1").await;
        first.assert_status_ok();
        let body: Value = first.json();
        assert_eq!(body["questions"].as_array().unwrap().len(), 10);
        assert_eq!(body["total_questions"], json!(12));

        let second = server.get("/questions").add_query_param("page", "2").await;
        second.assert_status_ok();
        let body: Value = second.json();
        assert_eq!(body["questions"].as_array().unwrap().len(), 2);
        assert_eq!(body["total_questions"], json!(12));
    }

    #[tokio::test]
    async fn get_questions_past_the_end_is_not_found() {
        let (server, pool) = seeded_server().await;
        insert_question(&pool, "Q1?", "A1", 1, 1).await;

        let res = server
            .get("/questions")
            .add_query_param("page", "1000")
            .await;
        assert_eq!(res.status_code(), 404);

        let body: Value = res.json();
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["message"], json!("resource not found"));
    }

    #[tokio::test]
    async fn get_questions_on_empty_table_is_not_found() {
        let server = test_server().await;

        let res = server.get("/questions").await;
        assert_eq!(res.status_code(), 404);
    }

    #[tokio::test]
    async fn get_questions_with_malformed_page_is_bad_request() {
        let server = test_server().await;

        for bad in ["abc", "0", "-3"] {
            let res = server.get("/questions").add_query_param("page", bad).await;
            assert_eq!(res.status_code(), 400, "page={bad}");

            let body: Value = res.json();
            assert_eq!(body["success"], json!(false));
            assert_eq!(body["message"], json!("bad request"));
        }
    }

    // ------------------------------------------------------------------
    // DELETE /questions/{id}
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn delete_question_succeeds_once_then_404s() {
        let (server, pool) = seeded_server().await;
        let id = insert_question(&pool, "Q1?", "A1", 1, 1).await;

        let res = server.delete(&format!("/questions/{id}")).await;
        res.assert_status_ok();
        let body: Value = res.json();
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["message"], json!("question deleted"));

        // Same id a second time is gone
        let res = server.delete(&format!("/questions/{id}")).await;
        assert_eq!(res.status_code(), 404);
        let body: Value = res.json();
        assert_eq!(body["message"], json!("resource not found"));
    }

    #[tokio::test]
    async fn delete_unknown_question_is_not_found() {
        let server = test_server().await;

        let res = server.delete("/questions/1000000").await;
        assert_eq!(res.status_code(), 404);

        let body: Value = res.json();
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["message"], json!("resource not found"));
    }

    // ------------------------------------------------------------------
    // POST /questions (search)
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn search_matches_case_insensitively() {
        let (server, pool) = seeded_server().await;
        insert_question(&pool, "Q4?", "A4", 3, 3).await;
        insert_question(&pool, "Unrelated?", "A", 1, 1).await;

        let res = server.post("/questions").json(&json!({"searchTerm": "q4"})).await;
        res.assert_status_ok();

        let body: Value = res.json();
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["questions"][0]["question"], json!("Q4?"));
        assert_eq!(body["total_questions"], json!(1));
        assert_eq!(body["current_category"], json!([3]));
    }

    #[tokio::test]
    async fn search_with_no_matches_is_an_empty_success() {
        let (server, pool) = seeded_server().await;
        insert_question(&pool, "Q1?", "A1", 1, 1).await;

        let res = server
            .post("/questions")
            .json(&json!({"searchTerm": "zzz-no-match"}))
            .await;
        res.assert_status_ok();

        let body: Value = res.json();
        assert_eq!(body["total_questions"], json!(0));
        assert_eq!(body["questions"], json!([]));
        assert_eq!(body["current_category"], json!([]));
    }

    #[tokio::test]
    async fn search_with_null_term_is_bad_request() {
        let server = test_server().await;

        let res = server.post("/questions").json(&json!({"searchTerm": null})).await;
        assert_eq!(res.status_code(), 400);

        let body: Value = res.json();
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["message"], json!("bad request"));
    }

    // ------------------------------------------------------------------
    // POST /questions (create)
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn create_question_inserts_and_reports_total() {
        let server = test_server().await;

        let res = server
            .post("/questions")
            .json(&json!({
                "question": "What boils at 100C?",
                "answer": "Water",
                "difficulty": 1,
                "category": 1
            }))
            .await;
        res.assert_status_ok();

        let body: Value = res.json();
        assert_eq!(body["success"], json!(true));
        assert!(body["created"].as_i64().unwrap() >= 1);
        assert_eq!(body["total_questions"], json!(1));

        // The created question is now served
        let res = server.get("/questions").await;
        res.assert_status_ok();
        let body: Value = res.json();
        assert_eq!(body["questions"][0]["answer"], json!("Water"));
    }

    #[tokio::test]
    async fn create_question_with_bad_difficulty_is_rejected() {
        let server = test_server().await;

        let res = server
            .post("/questions")
            .json(&json!({
                "question": "Q?",
                "answer": "A",
                "difficulty": 9,
                "category": 1
            }))
            .await;
        assert_eq!(res.status_code(), 400);
    }

    #[tokio::test]
    async fn post_questions_with_neither_shape_is_bad_request() {
        let server = test_server().await;

        let res = server.post("/questions").json(&json!({})).await;
        assert_eq!(res.status_code(), 400);

        let body: Value = res.json();
        assert_eq!(body["message"], json!("bad request"));
    }

    // ------------------------------------------------------------------
    // GET /categories/{id}/questions
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn questions_by_category_returns_only_that_category() {
        let (server, pool) = seeded_server().await;
        insert_question(&pool, "Art Q?", "A", 1, 2).await;
        insert_question(&pool, "Science Q?", "A", 1, 1).await;

        let res = server.get("/categories/2/questions").await;
        res.assert_status_ok();

        let body: Value = res.json();
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["total_questions"], json!(1));
        assert_eq!(body["questions"][0]["question"], json!("Art Q?"));
        assert_eq!(body["current_category"], json!([2]));
        assert_eq!(
            body["categories"].as_object().unwrap().len(),
            CATEGORY_COUNT
        );
    }

    #[tokio::test]
    async fn questions_for_unknown_category_is_not_found() {
        let server = test_server().await;

        let res = server.get("/categories/1245/questions").await;
        assert_eq!(res.status_code(), 404);

        let body: Value = res.json();
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["message"], json!("resource not found"));
    }

    // ------------------------------------------------------------------
    // POST /quizzes
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn quiz_draws_until_exhausted_without_repeats() {
        let (server, pool) = seeded_server().await;
        let ids = vec![
            insert_question(&pool, "Q1?", "A1", 1, 1).await,
            insert_question(&pool, "Q2?", "A2", 2, 1).await,
        ];

        let mut previous: Vec<i64> = Vec::new();
        loop {
            let res = server
                .post("/quizzes")
                .json(&json!({
                    "previous_questions": previous,
                    "quiz_category": {"type": "Science", "id": "0"}
                }))
                .await;
            res.assert_status_ok();

            let body: Value = res.json();
            assert_eq!(body["success"], json!(true));
            assert_eq!(body["previous_questions"], json!(previous));

            if body["current_question"].is_null() {
                break;
            }
            let id = body["current_question"]["id"].as_i64().unwrap();
            assert!(!previous.contains(&id), "question {id} repeated");
            assert!(ids.contains(&id));
            previous.push(id);
        }

        assert_eq!(previous.len(), ids.len());
    }

    #[tokio::test]
    async fn quiz_respects_the_category_filter() {
        let (server, pool) = seeded_server().await;
        insert_question(&pool, "Science Q?", "A", 1, 1).await;
        let art = insert_question(&pool, "Art Q?", "A", 1, 2).await;

        let res = server
            .post("/quizzes")
            .json(&json!({
                "previous_questions": [],
                "quiz_category": {"type": "Art", "id": 2}
            }))
            .await;
        res.assert_status_ok();

        let body: Value = res.json();
        assert_eq!(body["current_question"]["id"], json!(art));
        assert_eq!(body["current_question"]["category"], json!(2));
    }

    #[tokio::test]
    async fn get_quizzes_is_method_not_allowed() {
        let server = test_server().await;

        let res = server.get("/quizzes").await;
        assert_eq!(res.status_code(), 405);

        let body: Value = res.json();
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["message"], json!("method not allowed"));
    }

    // ------------------------------------------------------------------
    // Fallbacks
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn unknown_route_gets_the_json_not_found_body() {
        let server = test_server().await;

        let res = server.get("/nope").await;
        assert_eq!(res.status_code(), 404);

        let body: Value = res.json();
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["message"], json!("resource not found"));
    }
}
