pub mod question_handler;

pub use question_handler::{delete_question, list_questions, post_questions, QuestionsState};
