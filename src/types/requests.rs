use crate::db::NewQuestion;
use crate::service::ANY_CATEGORY;
use serde::{Deserialize, Deserializer};

/// Integers posted from HTML forms arrive as strings; accept both.
#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i64),
    Str(String),
}

impl IntOrString {
    fn into_i64<E: serde::de::Error>(self) -> Result<i64, E> {
        match self {
            IntOrString::Int(n) => Ok(n),
            IntOrString::Str(s) => s
                .trim()
                .parse()
                .map_err(|_| E::custom(format!("invalid integer `{s}`"))),
        }
    }
}

fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    IntOrString::deserialize(deserializer)?.into_i64()
}

fn lenient_opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<IntOrString>::deserialize(deserializer)?
        .map(IntOrString::into_i64)
        .transpose()
}

/// Body of `POST /questions`: a search when `searchTerm` is non-empty,
/// otherwise a new question.
#[derive(Debug, Default, Deserialize)]
pub struct QuestionSubmission {
    #[serde(rename = "searchTerm", default)]
    pub search_term: Option<String>,
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_i64")]
    pub category: Option<i64>,
    #[serde(default, deserialize_with = "lenient_opt_i64")]
    pub difficulty: Option<i64>,
}

impl QuestionSubmission {
    /// The search term, treating an empty string as absent.
    pub fn search_term(&self) -> Option<&str> {
        self.search_term.as_deref().filter(|t| !t.is_empty())
    }

    pub fn into_new_question(self) -> NewQuestion {
        NewQuestion {
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    #[serde(deserialize_with = "lenient_i64")]
    pub id: i64,
}

/// Body of `POST /quizzes`.
#[derive(Debug, Default, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Option<Vec<i64>>,
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
}

impl QuizRequest {
    pub fn previous(&self) -> &[i64] {
        self.previous_questions.as_deref().unwrap_or_default()
    }

    pub fn category_id(&self) -> i64 {
        self.quiz_category
            .as_ref()
            .map_or(ANY_CATEGORY, |c| c.id)
    }
}
