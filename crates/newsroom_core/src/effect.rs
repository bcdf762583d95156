use std::time::Duration;

use crate::{ArticleId, NotificationId, RequestToken};

/// Fixed number of featured articles requested per page load.
pub const FEATURED_ARTICLE_COUNT: usize = 6;
/// Fixed number of recommendations requested per article.
pub const RECOMMENDATION_COUNT: usize = 5;

pub const MODAL_EXIT_DURATION: Duration = Duration::from_millis(300);
pub const NOTIFICATION_DISPLAY_DURATION: Duration = Duration::from_millis(5_000);
pub const NOTIFICATION_EXIT_DURATION: Duration = Duration::from_millis(300);
/// Simulated latency of the newsletter signup.
pub const SIGNUP_DELAY: Duration = Duration::from_millis(1_500);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchFeatured {
        token: RequestToken,
        count: usize,
    },
    FetchRecommendations {
        token: RequestToken,
        article_id: ArticleId,
        count: usize,
    },
    StartTimer {
        timer: Timer,
        after: Duration,
    },
}

/// Deferred state transitions. Each comes back as [`crate::Msg::TimerElapsed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timer {
    /// End of the modal exit animation started by close request `generation`.
    ModalExit { generation: u64 },
    SignupComplete,
    NotificationLeave { id: NotificationId },
    NotificationRemove { id: NotificationId },
}
