use axum::{
    Router,
    http::{
        HeaderValue, Method,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    routing::{delete, get, post},
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::warn;

use crate::handlers::{
    categories::{list_categories, questions_by_category},
    fallback::{method_not_allowed, not_found},
    questions::{delete_question, list_questions, submit_question},
    quizzes::play_quiz,
};
use crate::service::{QuestionService, TriviaRepository};

#[derive(Clone)]
pub struct TriviaState<R> {
    pub service: QuestionService<R>,
}

impl<R: TriviaRepository> TriviaState<R> {
    pub fn new(repo: R, page_size: i64) -> Self {
        Self {
            service: QuestionService::new(repo, page_size),
        }
    }
}

/// CORS policy for the browser frontend. A `*` entry allows any origin;
/// entries that are not valid header values are skipped.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|o| {
                HeaderValue::from_str(o)
                    .inspect_err(|e| warn!(origin = %o, error = %e, "ignoring CORS origin"))
                    .ok()
            })
            .collect();
        AllowOrigin::list(parsed)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
}

pub fn trivia_router<R: TriviaRepository>(state: TriviaState<R>, cors: CorsLayer) -> Router {
    Router::new()
        .route("/categories", get(list_categories::<R>))
        .route(
            "/categories/{id}/questions",
            get(questions_by_category::<R>),
        )
        .route(
            "/questions",
            get(list_questions::<R>).post(submit_question::<R>),
        )
        .route("/questions/{id}", delete(delete_question::<R>))
        .route("/quizzes", post(play_quiz::<R>))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(cors)
        .with_state(state)
}
