use crate::db::{Category, NewQuestion, Question};
use crate::error::TriviaError;
use crate::service::pagination::{Page, Paged, Window};
use crate::service::repository::TriviaRepository;
use rand::seq::SliceRandom;
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, info};

/// Category id to label, keyed in id order.
pub type CategoryMap = BTreeMap<i64, String>;

/// Quiz category id meaning "draw from every category".
pub const ANY_CATEGORY: i64 = 0;

#[derive(Debug, Clone, PartialEq)]
pub struct QuestionListing {
    pub page: Paged<Question>,
    pub categories: CategoryMap,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryQuestions {
    pub page: Paged<Question>,
    pub category: Category,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Deletion {
    pub id: i64,
    pub page: Paged<Question>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Creation {
    pub id: i64,
    pub page: Paged<Question>,
}

/// Request logic for every trivia endpoint, written against a
/// [`TriviaRepository`] with an injected page size.
#[derive(Clone)]
pub struct QuestionService<R> {
    repo: R,
    page_size: i64,
}

impl<R: TriviaRepository> QuestionService<R> {
    pub fn new(repo: R, page_size: i64) -> Self {
        Self { repo, page_size }
    }

    fn window(&self, page: i64) -> Window {
        Window::Page(Page::new(page, self.page_size))
    }

    /// All categories; NotFound when none exist.
    pub async fn categories(&self) -> Result<CategoryMap, TriviaError> {
        let categories = self.category_map().await?;
        if categories.is_empty() {
            return Err(TriviaError::NotFound);
        }
        Ok(categories)
    }

    async fn category_map(&self) -> Result<CategoryMap, TriviaError> {
        let rows = self.repo.categories().await?;
        Ok(rows.into_iter().map(|c| (c.id, c.kind)).collect())
    }

    /// One page of every question. An empty page, including an empty table,
    /// is NotFound.
    pub async fn list_questions(&self, page: i64) -> Result<QuestionListing, TriviaError> {
        let listed = self.repo.list_all(self.window(page)).await?;
        if listed.is_empty() {
            debug!(page, total = listed.total, "question page is empty");
            return Err(TriviaError::NotFound);
        }
        let categories = self.category_map().await?;
        Ok(QuestionListing {
            page: listed,
            categories,
        })
    }

    /// Deleting an unknown id is Unprocessable rather than NotFound.
    pub async fn delete_question(&self, id: i64, page: i64) -> Result<Deletion, TriviaError> {
        let write = async {
            if self.repo.by_id(id).await?.is_none() {
                return Err(TriviaError::Unprocessable(format!(
                    "question {id} does not exist"
                )));
            }
            if !self.repo.delete(id).await? {
                return Err(TriviaError::Unprocessable(format!(
                    "question {id} was already deleted"
                )));
            }
            self.repo.list_all(self.window(page)).await
        };
        let remaining = write.await.map_err(TriviaError::into_unprocessable)?;

        info!(id, total = remaining.total, "deleted question");
        Ok(Deletion {
            id,
            page: remaining,
        })
    }

    pub async fn create_question(
        &self,
        question: NewQuestion,
        page: i64,
    ) -> Result<Creation, TriviaError> {
        let write = async {
            let id = self.repo.insert(question).await?;
            let listed = self.repo.list_all(self.window(page)).await?;
            Ok::<_, TriviaError>((id, listed))
        };
        let (id, listed) = write.await.map_err(TriviaError::into_unprocessable)?;

        info!(id, total = listed.total, "created question");
        Ok(Creation { id, page: listed })
    }

    /// Zero matches is a successful, empty result.
    pub async fn search_questions(
        &self,
        term: &str,
        page: i64,
    ) -> Result<Paged<Question>, TriviaError> {
        let found = self
            .repo
            .search_by_text(term, self.window(page))
            .await
            .map_err(TriviaError::into_unprocessable)?;
        debug!(term, matches = found.total, "searched questions");
        Ok(found)
    }

    /// NotFound when the page is empty or the category row does not exist.
    pub async fn questions_in_category(
        &self,
        category: i64,
        page: i64,
    ) -> Result<CategoryQuestions, TriviaError> {
        let listed = self
            .repo
            .filter_by_category(category, self.window(page))
            .await?;
        if listed.is_empty() {
            debug!(category, page, "category page is empty");
            return Err(TriviaError::NotFound);
        }
        let Some(found) = self.repo.category_by_id(category).await? else {
            debug!(category, "questions reference a missing category");
            return Err(TriviaError::NotFound);
        };
        Ok(CategoryQuestions {
            page: listed,
            category: found,
        })
    }

    /// Pick one question not in `previous`, uniformly at random. `None` once
    /// every candidate has been seen.
    pub async fn next_quiz_question(
        &self,
        previous: &[i64],
        category: i64,
    ) -> Result<Option<Question>, TriviaError> {
        let pool = if category == ANY_CATEGORY {
            self.repo.list_all(Window::All).await?
        } else {
            self.repo.filter_by_category(category, Window::All).await?
        };

        let seen: HashSet<i64> = previous.iter().copied().collect();
        let candidates: Vec<Question> = pool
            .items
            .into_iter()
            .filter(|q| !seen.contains(&q.id))
            .collect();

        let picked = candidates.choose(&mut rand::thread_rng()).cloned();
        match &picked {
            Some(q) => debug!(
                id = q.id,
                category,
                candidates = candidates.len(),
                "quiz question picked"
            ),
            None => info!(category, seen = seen.len(), "quiz candidates exhausted"),
        }
        Ok(picked)
    }
}
