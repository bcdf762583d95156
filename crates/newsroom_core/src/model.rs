/// Backend identifier of an article.
pub type ArticleId = u64;

/// A date as the backend sent it: free-form text, epoch milliseconds, or nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DateValue {
    Text(String),
    EpochMillis(i64),
    #[default]
    Missing,
}

impl From<&str> for DateValue {
    fn from(value: &str) -> Self {
        DateValue::Text(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub date: DateValue,
    /// Carried from the backend; the front page links through the recommendations instead.
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    /// Carried from the backend when present; cards are keyed by position.
    pub id: Option<ArticleId>,
    pub title: String,
    pub date: DateValue,
    /// Cosine similarity in `[0, 1]`.
    pub score: f64,
    pub link: String,
}

/// The article a recommendation request was issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRef {
    pub id: ArticleId,
    pub title: String,
}
