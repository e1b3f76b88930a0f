use crate::db::models::{Category, NewQuestion, Question};
use crate::db::schema::{SQLITE_INIT, SQLITE_SEED_CATEGORIES};
use crate::error::TriviaError;
use crate::service::TriviaRepository;
use crate::service::pagination::{Paged, Window};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, QueryBuilder, Sqlite};
use std::str::FromStr;
use tracing::{debug, info};

pub type SqlitePool = Pool<Sqlite>;

const QUESTION_COLUMNS: &str = "SELECT id, question, answer, category, difficulty FROM questions";
const QUESTION_BY_ID: &str =
    "SELECT id, question, answer, category, difficulty FROM questions WHERE id = ?";

/// Open (creating if needed) the database, apply the schema and optionally
/// seed the stock categories.
pub async fn connect(
    database_url: &str,
    max_connections: u32,
    seed_categories: bool,
) -> Result<SqliteStorage, TriviaError> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    let storage = SqliteStorage::new(pool);
    storage.init_schema().await?;
    if seed_categories {
        storage.seed_categories().await?;
    }
    info!(database_url, max_connections, "trivia storage ready");
    Ok(storage)
}

/// Row filter applied to both the count and the page query.
#[derive(Debug, Clone, Copy)]
enum QuestionFilter {
    Any,
    Category(i64),
}

impl QuestionFilter {
    fn push_where(&self, qb: &mut QueryBuilder<'_, Sqlite>) {
        match *self {
            QuestionFilter::Any => {}
            QuestionFilter::Category(category) => {
                qb.push(" WHERE category = ").push_bind(category);
            }
        }
    }
}

/// Unicode-aware case-insensitive substring match. SQLite's `lower()` only
/// folds ASCII, so the comparison happens here instead of in SQL.
fn matches_term(question: &Question, needle: &str) -> bool {
    question
        .question
        .as_deref()
        .is_some_and(|text| text.to_lowercase().contains(needle))
}

#[derive(Clone)]
pub struct SqliteStorage {
    pool: SqlitePool,
}

impl SqliteStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), TriviaError> {
        self.execute_script(SQLITE_INIT).await
    }

    pub async fn seed_categories(&self) -> Result<(), TriviaError> {
        self.execute_script(SQLITE_SEED_CATEGORIES).await
    }

    async fn execute_script(&self, script: &str) -> Result<(), TriviaError> {
        // sqlx::query runs a single statement at a time
        for stmt in script.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    async fn select_questions(
        &self,
        filter: QuestionFilter,
        window: Window,
    ) -> Result<Paged<Question>, TriviaError> {
        let mut select = QueryBuilder::<Sqlite>::new(QUESTION_COLUMNS);
        filter.push_where(&mut select);
        select.push(" ORDER BY id");

        let page = match window {
            Window::All => {
                let items = select
                    .build_query_as::<Question>()
                    .fetch_all(&self.pool)
                    .await?;
                let total = items.len() as i64;
                return Ok(Paged { items, total });
            }
            Window::Page(page) => page,
        };

        let mut count = QueryBuilder::<Sqlite>::new("SELECT COUNT(*) FROM questions");
        filter.push_where(&mut count);
        let total: i64 = count
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await?;

        let Some(offset) = page.offset() else {
            debug!(page = page.number, "page cannot hold any rows");
            return Ok(Paged {
                items: Vec::new(),
                total,
            });
        };

        select
            .push(" LIMIT ")
            .push_bind(page.size)
            .push(" OFFSET ")
            .push_bind(offset);
        let items = select
            .build_query_as::<Question>()
            .fetch_all(&self.pool)
            .await?;
        Ok(Paged { items, total })
    }
}

impl TriviaRepository for SqliteStorage {
    async fn categories(&self) -> Result<Vec<Category>, TriviaError> {
        let rows = sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn category_by_id(&self, id: i64) -> Result<Option<Category>, TriviaError> {
        let row = sqlx::query_as::<_, Category>("SELECT id, type FROM categories WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn list_all(&self, window: Window) -> Result<Paged<Question>, TriviaError> {
        self.select_questions(QuestionFilter::Any, window).await
    }

    async fn filter_by_category(
        &self,
        category: i64,
        window: Window,
    ) -> Result<Paged<Question>, TriviaError> {
        self.select_questions(QuestionFilter::Category(category), window)
            .await
    }

    async fn search_by_text(
        &self,
        term: &str,
        window: Window,
    ) -> Result<Paged<Question>, TriviaError> {
        let all = self.select_questions(QuestionFilter::Any, Window::All).await?;
        let needle = term.to_lowercase();
        let matched: Vec<Question> = all
            .items
            .into_iter()
            .filter(|q| matches_term(q, &needle))
            .collect();
        Ok(Paged {
            items: window.slice(&matched),
            total: matched.len() as i64,
        })
    }

    async fn by_id(&self, id: i64) -> Result<Option<Question>, TriviaError> {
        let row = sqlx::query_as::<_, Question>(QUESTION_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete(&self, id: i64) -> Result<bool, TriviaError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn insert(&self, question: NewQuestion) -> Result<i64, TriviaError> {
        let result = sqlx::query(
            r#"INSERT INTO questions (question, answer, category, difficulty)
               VALUES (?, ?, ?, ?)"#,
        )
        .bind(question.question)
        .bind(question.answer)
        .bind(question.category)
        .bind(question.difficulty)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::pagination::Page;

    async fn storage() -> SqliteStorage {
        // A single connection keeps every query on the same in-memory database.
        connect("sqlite::memory:", 1, true)
            .await
            .expect("in-memory database should open")
    }

    fn new_question(text: &str, category: i64) -> NewQuestion {
        NewQuestion {
            question: Some(text.to_string()),
            answer: Some("answer".to_string()),
            category: Some(category),
            difficulty: Some(1),
        }
    }

    #[tokio::test]
    async fn seeds_stock_categories_once() {
        let storage = storage().await;
        storage.seed_categories().await.expect("reseed is idempotent");

        let categories = storage.categories().await.expect("categories");
        assert_eq!(categories.len(), 6);
        assert_eq!(categories[0].kind, "Science");
        assert_eq!(categories[5].kind, "Sports");
    }

    #[tokio::test]
    async fn pages_are_ordered_and_counted() {
        let storage = storage().await;
        for i in 0..5 {
            storage
                .insert(new_question(&format!("q{i}"), 1))
                .await
                .expect("insert");
        }

        let page = storage
            .list_all(Window::Page(Page::new(2, 2)))
            .await
            .expect("page 2");
        assert_eq!(page.total, 5);
        let texts: Vec<_> = page.items.iter().filter_map(|q| q.question.clone()).collect();
        assert_eq!(texts, vec!["q2", "q3"]);

        let beyond = storage
            .list_all(Window::Page(Page::new(9, 2)))
            .await
            .expect("page 9");
        assert!(beyond.is_empty());
        assert_eq!(beyond.total, 5);
    }

    #[tokio::test]
    async fn search_is_case_insensitive_and_literal() {
        let storage = storage().await;
        storage
            .insert(new_question("Who painted the Mona Lisa?", 2))
            .await
            .expect("insert");
        storage
            .insert(new_question("What is 50% of 10?", 1))
            .await
            .expect("insert");

        let found = storage
            .search_by_text("who", Window::All)
            .await
            .expect("search");
        assert_eq!(found.total, 1);

        let percent = storage
            .search_by_text("%", Window::All)
            .await
            .expect("search");
        assert_eq!(percent.total, 1);
        assert_eq!(
            percent.items[0].question.as_deref(),
            Some("What is 50% of 10?")
        );
    }

    #[tokio::test]
    async fn search_folds_non_ascii_case() {
        let storage = storage().await;
        storage
            .insert(new_question("Élan vital: who coined it?", 1))
            .await
            .expect("insert");
        storage
            .insert(new_question("ÜBER alles", 2))
            .await
            .expect("insert");

        let found = storage
            .search_by_text("élan", Window::All)
            .await
            .expect("search");
        assert_eq!(found.total, 1);
        assert_eq!(
            found.items[0].question.as_deref(),
            Some("Élan vital: who coined it?")
        );

        let upper = storage
            .search_by_text("über", Window::All)
            .await
            .expect("search");
        assert_eq!(upper.total, 1);
    }

    #[tokio::test]
    async fn search_pages_matches_and_keeps_total() {
        let storage = storage().await;
        for i in 0..5 {
            storage
                .insert(new_question(&format!("Who is number {i}?"), 1))
                .await
                .expect("insert");
        }
        storage.insert(new_question("unrelated", 1)).await.expect("insert");

        let second = storage
            .search_by_text("WHO", Window::Page(Page::new(2, 2)))
            .await
            .expect("search");
        assert_eq!(second.total, 5);
        let texts: Vec<_> = second.items.iter().filter_map(|q| q.question.clone()).collect();
        assert_eq!(texts, vec!["Who is number 2?", "Who is number 3?"]);

        let beyond = storage
            .search_by_text("who", Window::Page(Page::new(0, 2)))
            .await
            .expect("search");
        assert!(beyond.is_empty());
        assert_eq!(beyond.total, 5);
    }

    #[tokio::test]
    async fn insert_accepts_nulls_and_delete_reports_missing_rows() {
        let storage = storage().await;
        let id = storage
            .insert(NewQuestion::default())
            .await
            .expect("null fields are stored as-is");

        let stored = storage.by_id(id).await.expect("lookup").expect("row exists");
        assert_eq!(stored.question, None);
        assert_eq!(stored.category, None);

        assert!(storage.delete(id).await.expect("delete"));
        assert!(!storage.delete(id).await.expect("second delete"));
        assert!(storage.by_id(id).await.expect("lookup").is_none());
    }

    #[tokio::test]
    async fn filters_by_exact_category() {
        let storage = storage().await;
        storage.insert(new_question("a", 3)).await.expect("insert");
        storage.insert(new_question("b", 4)).await.expect("insert");
        storage.insert(new_question("c", 3)).await.expect("insert");

        let geography = storage
            .filter_by_category(3, Window::All)
            .await
            .expect("filter");
        assert_eq!(geography.total, 2);
        assert!(geography.items.iter().all(|q| q.category == Some(3)));

        assert!(storage.category_by_id(3).await.expect("lookup").is_some());
        assert!(storage.category_by_id(1000).await.expect("lookup").is_none());
    }
}
