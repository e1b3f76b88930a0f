use crate::TriviaError;

/// Any path with no route.
pub async fn not_found() -> TriviaError {
    TriviaError::NotFound
}

/// A routed path hit with a method it does not serve.
pub async fn method_not_allowed() -> TriviaError {
    TriviaError::MethodNotAllowed
}
