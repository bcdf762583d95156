use chrono::NaiveDate;

use crate::{Article, ArticleId, NotificationSeverity, Recommendation, RequestToken, Timer};

/// Result of one backend call as seen by the state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome<T> {
    Loaded(T),
    /// Transport, HTTP status or decoding failure; `reason` is for the log only.
    Failed { reason: String },
}

/// How the user asked the modal to close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTrigger {
    Backdrop,
    EscapeKey,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Document is ready; `today` is the local date shown in the header.
    PageLoaded { today: NaiveDate },
    /// User clicked Retry on the featured panel.
    RetryClicked,
    /// User activated a hero or grid card.
    ArticleActivated { article_id: ArticleId, title: String },
    /// Backend answered the featured-articles request `token`.
    FeaturedLoaded {
        token: RequestToken,
        outcome: LoadOutcome<Vec<Article>>,
    },
    /// Backend answered the recommendations request `token`.
    RecommendationsLoaded {
        token: RequestToken,
        outcome: LoadOutcome<Vec<Recommendation>>,
    },
    ModalCloseRequested { trigger: CloseTrigger },
    NewsletterInputChanged(String),
    NewsletterSubmitted,
    NotificationRequested {
        message: String,
        severity: NotificationSeverity,
    },
    /// A timer started through [`crate::Effect::StartTimer`] fired.
    TimerElapsed(Timer),
    /// Fallback for events with no wiring.
    NoOp,
}
