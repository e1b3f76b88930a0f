//! Success bodies. Key spellings (`total_questions`, `"total questions"`,
//! `"total question"`, `"current category"`) are what the quiz frontend reads.

use crate::db::Question;
use crate::service::CategoryMap;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
}

#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    /// Always null: the unfiltered listing has no active category.
    pub current_category: Option<String>,
    pub categories: CategoryMap,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: i64,
    pub questions: Vec<Question>,
    pub total_questions: i64,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub created: i64,
    pub questions: Vec<Question>,
    #[serde(rename = "total questions")]
    pub total_questions: i64,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    #[serde(rename = "total questions")]
    pub total_questions: i64,
}

#[derive(Debug, Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    #[serde(rename = "current category")]
    pub current_category: String,
    #[serde(rename = "total question")]
    pub total_question: i64,
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    /// Null once every candidate question has been played.
    pub question: Option<Question>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn sample() -> Question {
        Question {
            id: 4,
            question: Some("What boxer's original name is Cassius Clay?".into()),
            answer: Some("Muhammad Ali".into()),
            category: Some(4),
            difficulty: Some(1),
        }
    }

    #[test]
    fn listing_serializes_null_category_and_string_keys() {
        let mut categories = CategoryMap::new();
        categories.insert(1, "Science".into());
        let body = QuestionListResponse {
            success: true,
            questions: vec![sample()],
            total_questions: 1,
            current_category: None,
            categories,
        };
        let json = serde_json::to_value(&body).expect("encode");
        assert_eq!(json["current_category"], Value::Null);
        assert_eq!(json["categories"], json!({ "1": "Science" }));
        assert_eq!(json["questions"][0]["answer"], "Muhammad Ali");
    }

    #[test]
    fn legacy_key_spellings_are_kept() {
        let created = serde_json::to_value(CreatedResponse {
            success: true,
            created: 9,
            questions: vec![],
            total_questions: 9,
        })
        .expect("encode");
        assert_eq!(created["total questions"], 9);

        let by_category = serde_json::to_value(CategoryQuestionsResponse {
            success: true,
            questions: vec![sample()],
            current_category: "History".into(),
            total_question: 1,
        })
        .expect("encode");
        assert_eq!(by_category["current category"], "History");
        assert_eq!(by_category["total question"], 1);
    }
}
