use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use crate::TriviaError;
use crate::service::pagination::DEFAULT_PAGE;

/// Path extractor that answers 404 when a segment does not parse, the way an
/// `{id}` route restricted to integers would.
pub struct ApiPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = TriviaError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(ApiPath(value)),
            Err(rejection) => {
                tracing::debug!(reason = %rejection.body_text(), "unroutable path parameter");
                Err(TriviaError::NotFound)
            }
        }
    }
}

/// The `page` query parameter. Absent or non-integer values fall back to
/// page 1; the first `page` pair wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParam(pub i64);

impl PageParam {
    pub fn from_query(query: Option<&str>) -> Self {
        let page = query
            .and_then(|qs| {
                url::form_urlencoded::parse(qs.as_bytes())
                    .find(|(k, _)| k == "page")
                    .map(|(_, v)| v)
            })
            .and_then(|v| v.trim().parse::<i64>().ok())
            .unwrap_or(DEFAULT_PAGE);
        PageParam(page)
    }
}

impl<S> FromRequestParts<S> for PageParam
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_query(parts.uri.query()))
    }
}
