use crate::db::{Category, NewQuestion, Question};
use crate::error::TriviaError;
use crate::service::pagination::{Paged, Window};
use std::future::Future;

/// Named storage operations the question service is written against.
///
/// Every listing takes an explicit [`Window`] and orders questions by id.
pub trait TriviaRepository: Clone + Send + Sync + 'static {
    fn categories(&self) -> impl Future<Output = Result<Vec<Category>, TriviaError>> + Send;

    fn category_by_id(
        &self,
        id: i64,
    ) -> impl Future<Output = Result<Option<Category>, TriviaError>> + Send;

    fn list_all(
        &self,
        window: Window,
    ) -> impl Future<Output = Result<Paged<Question>, TriviaError>> + Send;

    fn filter_by_category(
        &self,
        category: i64,
        window: Window,
    ) -> impl Future<Output = Result<Paged<Question>, TriviaError>> + Send;

    /// Case-insensitive substring match on the question text.
    fn search_by_text(
        &self,
        term: &str,
        window: Window,
    ) -> impl Future<Output = Result<Paged<Question>, TriviaError>> + Send;

    fn by_id(&self, id: i64) -> impl Future<Output = Result<Option<Question>, TriviaError>> + Send;

    /// Returns `false` when no row had that id.
    fn delete(&self, id: i64) -> impl Future<Output = Result<bool, TriviaError>> + Send;

    /// Returns the generated id.
    fn insert(&self, question: NewQuestion) -> impl Future<Output = Result<i64, TriviaError>> + Send;
}
