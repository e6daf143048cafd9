pub mod category_handler;

pub use category_handler::{list_categories, questions_by_category, CategoryQuestionsState};
