use chrono::Utc;
use fake::faker::lorem::en::Sentence;
use fake::Fake;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// Fresh in-memory database with migrations (and the six seeded categories)
/// applied. Single connection so every query sees the same :memory: db.
pub async fn setup_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .min_connections(1)
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory sqlite");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("failed to run migrations");

    pool
}

/// Insert one question directly, returning its id
pub async fn insert_question(
    pool: &SqlitePool,
    question: &str,
    answer: &str,
    difficulty: i64,
    category: i64,
) -> i64 {
    sqlx::query(
        r#"
        INSERT INTO questions (question, answer, difficulty, category, created_at)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(question)
    .bind(answer)
    .bind(difficulty)
    .bind(category)
    .bind(Utc::now())
    .execute(pool)
    .await
    .expect("failed to insert fixture question")
    .last_insert_rowid()
}

/// Insert `count` generated questions into one category, returning their ids
pub async fn insert_fake_questions(pool: &SqlitePool, count: usize, category: i64) -> Vec<i64> {
    let mut ids = Vec::with_capacity(count);
    for _ in 0..count {
        let text: String = Sentence(3..8).fake();
        let answer: String = Sentence(1..3).fake();
        ids.push(insert_question(pool, &text, &answer, 1, category).await);
    }
    ids
}
