use axum::{Json, extract::State};

use crate::middleware::{ApiPath, PageParam};
use crate::router::TriviaState;
use crate::service::TriviaRepository;
use crate::types::{CategoriesResponse, CategoryQuestionsResponse};
use crate::TriviaError;

/// GET /categories
pub async fn list_categories<R: TriviaRepository>(
    State(state): State<TriviaState<R>>,
) -> Result<Json<CategoriesResponse>, TriviaError> {
    let categories = state.service.categories().await?;
    Ok(Json(CategoriesResponse {
        success: true,
        categories,
    }))
}

/// GET /categories/{id}/questions
pub async fn questions_by_category<R: TriviaRepository>(
    State(state): State<TriviaState<R>>,
    ApiPath(category_id): ApiPath<i64>,
    PageParam(page): PageParam,
) -> Result<Json<CategoryQuestionsResponse>, TriviaError> {
    let found = state
        .service
        .questions_in_category(category_id, page)
        .await?;
    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions: found.page.items,
        current_category: found.category.kind,
        total_question: found.page.total,
    }))
}
