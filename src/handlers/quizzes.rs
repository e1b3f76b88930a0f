use axum::{Json, extract::State};

use crate::middleware::ApiJson;
use crate::router::TriviaState;
use crate::service::TriviaRepository;
use crate::types::{QuizRequest, QuizResponse};
use crate::TriviaError;

/// POST /quizzes -> one random question the player has not seen yet, or
/// `null` when the category is exhausted.
pub async fn play_quiz<R: TriviaRepository>(
    State(state): State<TriviaState<R>>,
    ApiJson(body): ApiJson<QuizRequest>,
) -> Result<Json<QuizResponse>, TriviaError> {
    let question = state
        .service
        .next_quiz_question(body.previous(), body.category_id())
        .await?;
    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}
