use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;

use crate::TriviaError;

/// JSON body extractor whose rejections use the trivia error body.
///
/// Malformed JSON or a missing `application/json` content type is a 400;
/// well-formed JSON of the wrong shape is a 422.
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = TriviaError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(body)) => Ok(ApiJson(body)),
            Err(JsonRejection::JsonDataError(e)) => Err(TriviaError::Unprocessable(e.body_text())),
            Err(rejection) => Err(TriviaError::BadRequest(rejection.body_text())),
        }
    }
}
