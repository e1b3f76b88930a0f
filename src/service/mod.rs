//! Question service: pagination, the repository seam and the request logic
//! behind every endpoint.

pub mod pagination;
pub mod question_service;
pub mod repository;

pub use pagination::{Page, Paged, Window};
pub use question_service::{ANY_CATEGORY, CategoryMap, QuestionService};
pub use repository::TriviaRepository;
