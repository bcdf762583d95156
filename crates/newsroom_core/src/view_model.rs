use std::time::Duration;

use crate::{format, Article, ArticleId, NotificationId, NotificationSeverity, Recommendation};

/// Placeholder cards shown in the grid while featured articles load.
pub const LOADING_CARD_COUNT: usize = 5;
/// Entrance animation offset between consecutive cards.
pub const CARD_STAGGER: Duration = Duration::from_millis(100);

pub const NO_ARTICLES_MESSAGE: &str = "No articles found.";
pub const FEATURED_FAILED_MESSAGE: &str = "Failed to load articles.";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    /// Header date, set once the page has loaded.
    pub today: Option<String>,
    pub hero: HeroView,
    pub grid: GridView,
    pub modal: ModalView,
    pub scroll_locked: bool,
    pub newsletter: NewsletterView,
    pub notifications: Vec<NotificationView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum HeroView {
    #[default]
    Blank,
    Loading,
    Article(ArticleCardView),
    /// Backend returned no articles; offers a retry like the failure state.
    Empty,
    Failed,
}

impl HeroView {
    /// Message shown in place of the hero card, if any.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            HeroView::Empty => Some(NO_ARTICLES_MESSAGE),
            HeroView::Failed => Some(FEATURED_FAILED_MESSAGE),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GridView {
    #[default]
    Blank,
    Loading,
    Cards(Vec<ArticleCardView>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleCardView {
    pub article_id: ArticleId,
    pub title: String,
    pub date_label: String,
    pub animation_delay: Duration,
}

impl ArticleCardView {
    pub(crate) fn new(index: usize, article: &Article) -> Self {
        Self {
            article_id: article.id,
            title: article.title.clone(),
            date_label: format::format_date(&article.date),
            animation_delay: stagger(index),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalView {
    #[default]
    Hidden,
    Shown {
        /// Exit animation in progress.
        closing: bool,
        title: ModalTitleView,
        body: ModalBodyView,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalTitleView {
    Loading,
    SimilarTo { title_preview: String },
    /// Request finished without results.
    Settled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalBodyView {
    Loading,
    Recommendations(Vec<RecommendationCardView>),
    Empty { source_title: String },
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationCardView {
    pub title: String,
    pub date_label: String,
    pub match_percent: u32,
    pub link: String,
    pub animation_delay: Duration,
}

impl RecommendationCardView {
    pub(crate) fn new(index: usize, rec: &Recommendation) -> Self {
        Self {
            title: rec.title.clone(),
            date_label: format::format_date(&rec.date),
            match_percent: format::match_percent(rec.score),
            link: rec.link.clone(),
            animation_delay: stagger(index),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewsletterView {
    pub input: String,
    /// Signup in flight: control disabled, busy label shown.
    pub busy: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationView {
    pub id: NotificationId,
    pub message: String,
    pub severity: NotificationSeverity,
    pub leaving: bool,
}

fn stagger(index: usize) -> Duration {
    CARD_STAGGER * u32::try_from(index).unwrap_or(u32::MAX)
}
