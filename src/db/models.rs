use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the `questions` table, serialized in its wire form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Question {
    pub id: i64,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<i64>,
    pub difficulty: Option<i64>,
}

/// Field values for a question that has not been stored yet. Absent fields
/// are written as NULL.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewQuestion {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<i64>,
    pub difficulty: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}
