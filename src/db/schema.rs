//! SQL DDL for initializing the trivia storage.

/// SQLite schema with:
/// - `categories(id, type)`, read-only through the API
/// - `questions` with nullable fields; a create request missing a field
///   stores NULL
/// - `questions.category` is a plain integer: dangling category ids are
///   tolerated, so there is no FOREIGN KEY clause
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS categories (
    id INTEGER PRIMARY KEY,
    type TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS questions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    question TEXT NULL,
    answer TEXT NULL,
    category INTEGER NULL,
    difficulty INTEGER NULL
);

CREATE INDEX IF NOT EXISTS idx_questions_category ON questions(category);
"#;

/// Stock category set shipped with the quiz frontend.
pub const SQLITE_SEED_CATEGORIES: &str = r#"
INSERT OR IGNORE INTO categories (id, type) VALUES
    (1, 'Science'),
    (2, 'Art'),
    (3, 'Geography'),
    (4, 'History'),
    (5, 'Entertainment'),
    (6, 'Sports');
"#;
