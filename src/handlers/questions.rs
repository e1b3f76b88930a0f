use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use tracing::info;

use crate::middleware::{ApiJson, ApiPath, PageParam};
use crate::router::TriviaState;
use crate::service::TriviaRepository;
use crate::types::{
    CreatedResponse, DeletedResponse, QuestionListResponse, QuestionSubmission, SearchResponse,
};
use crate::TriviaError;

/// GET /questions?page=N
pub async fn list_questions<R: TriviaRepository>(
    State(state): State<TriviaState<R>>,
    PageParam(page): PageParam,
) -> Result<Json<QuestionListResponse>, TriviaError> {
    let listing = state.service.list_questions(page).await?;
    Ok(Json(QuestionListResponse {
        success: true,
        questions: listing.page.items,
        total_questions: listing.page.total,
        current_category: None,
        categories: listing.categories,
    }))
}

/// DELETE /questions/{id}
pub async fn delete_question<R: TriviaRepository>(
    State(state): State<TriviaState<R>>,
    ApiPath(question_id): ApiPath<i64>,
    PageParam(page): PageParam,
) -> Result<Json<DeletedResponse>, TriviaError> {
    let deletion = state.service.delete_question(question_id, page).await?;
    Ok(Json(DeletedResponse {
        success: true,
        deleted: deletion.id,
        questions: deletion.page.items,
        total_questions: deletion.page.total,
    }))
}

/// POST /questions: search when the body carries a non-empty `searchTerm`,
/// create otherwise.
pub async fn submit_question<R: TriviaRepository>(
    State(state): State<TriviaState<R>>,
    PageParam(page): PageParam,
    ApiJson(body): ApiJson<QuestionSubmission>,
) -> Result<Response, TriviaError> {
    if let Some(term) = body.search_term() {
        let found = state.service.search_questions(term, page).await?;
        return Ok(Json(SearchResponse {
            success: true,
            questions: found.items,
            total_questions: found.total,
        })
        .into_response());
    }

    info!(category = ?body.category, "creating question");
    let created = state
        .service
        .create_question(body.into_new_question(), page)
        .await?;
    Ok(Json(CreatedResponse {
        success: true,
        created: created.id,
        questions: created.page.items,
        total_questions: created.page.total,
    })
    .into_response())
}
