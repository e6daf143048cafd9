mod question_dto;

pub use question_dto::{
    current_categories, CreateQuestionDto, CreateQuestionResponse, DeleteQuestionResponse,
    QuestionDto, QuestionListResponse, QuestionPostDto, QuestionPostRequest, SearchResponse,
};
