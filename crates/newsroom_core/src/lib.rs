//! Newsroom core: pure front-page state machine and view-model helpers.
mod effect;
pub mod format;
mod model;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::{
    Effect, Timer, FEATURED_ARTICLE_COUNT, MODAL_EXIT_DURATION, NOTIFICATION_DISPLAY_DURATION,
    NOTIFICATION_EXIT_DURATION, RECOMMENDATION_COUNT, SIGNUP_DELAY,
};
pub use model::{Article, ArticleId, ArticleRef, DateValue, Recommendation};
pub use msg::{CloseTrigger, LoadOutcome, Msg};
pub use state::{
    AppState, FeaturedContent, ModalContent, ModalState, NewsletterState, Notification,
    NotificationId, NotificationSeverity, PanelState, RequestToken,
};
pub use update::{update, INVALID_EMAIL_MESSAGE, SUBSCRIBED_MESSAGE};
pub use view_model::{
    AppViewModel, ArticleCardView, GridView, HeroView, ModalBodyView, ModalTitleView, ModalView,
    NewsletterView, NotificationView, RecommendationCardView, CARD_STAGGER,
    FEATURED_FAILED_MESSAGE, LOADING_CARD_COUNT, NO_ARTICLES_MESSAGE,
};
