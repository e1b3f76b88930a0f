pub mod requests;
pub mod responses;

pub use requests::{QuestionSubmission, QuizCategory, QuizRequest};
pub use responses::{
    CategoriesResponse, CategoryQuestionsResponse, CreatedResponse, DeletedResponse,
    QuestionListResponse, QuizResponse, SearchResponse,
};
