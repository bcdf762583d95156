use chrono::NaiveDate;

use crate::view_model::{
    AppViewModel, ArticleCardView, GridView, HeroView, ModalBodyView, ModalTitleView, ModalView,
    NewsletterView, NotificationView, RecommendationCardView,
};
use crate::{format, Article, ArticleRef, Recommendation};

/// Tags one pipeline invocation; responses carrying an older token are stale.
pub type RequestToken = u64;
pub type NotificationId = u64;

/// Content of one panel. Exactly one variant is shown at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PanelState<T> {
    #[default]
    Idle,
    Loading,
    Populated(T),
    Empty,
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeaturedContent {
    pub hero: Article,
    pub grid: Vec<Article>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModalContent {
    pub source: ArticleRef,
    pub body: PanelState<Vec<Recommendation>>,
    pending: Option<RequestToken>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open(ModalContent),
    /// Exit animation running; content stays visible until it ends.
    Closing(ModalContent),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationSeverity {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl NotificationSeverity {
    pub fn color(self) -> &'static str {
        match self {
            NotificationSeverity::Success => "#2ed573",
            NotificationSeverity::Error => "#ff4757",
            NotificationSeverity::Warning => "#ffa502",
            NotificationSeverity::Info => "#5352ed",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            NotificationSeverity::Success => "success",
            NotificationSeverity::Error => "error",
            NotificationSeverity::Warning => "warning",
            NotificationSeverity::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: NotificationSeverity,
    pub leaving: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewsletterState {
    pub input: String,
    pub busy: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    today: Option<NaiveDate>,
    featured: PanelState<FeaturedContent>,
    featured_pending: Option<RequestToken>,
    modal: ModalState,
    modal_generation: u64,
    last_token: RequestToken,
    newsletter: NewsletterState,
    notifications: Vec<Notification>,
    last_notification_id: NotificationId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn featured(&self) -> &PanelState<FeaturedContent> {
        &self.featured
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    pub fn newsletter(&self) -> &NewsletterState {
        &self.newsletter
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Background scrolling is suppressed from open until the exit animation ends.
    pub fn scroll_locked(&self) -> bool {
        !matches!(self.modal, ModalState::Closed)
    }

    /// Returns whether anything visible changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_today(&mut self, today: NaiveDate) {
        self.today = Some(today);
        self.mark_dirty();
    }

    fn issue_token(&mut self) -> RequestToken {
        self.last_token += 1;
        self.last_token
    }

    /// Puts the featured panels into their loading state and returns the new request token.
    pub(crate) fn begin_featured_load(&mut self) -> RequestToken {
        let token = self.issue_token();
        self.featured = PanelState::Loading;
        self.featured_pending = Some(token);
        self.mark_dirty();
        token
    }

    /// Applies `articles` if `token` is the outstanding featured request.
    pub(crate) fn apply_featured(&mut self, token: RequestToken, articles: Vec<Article>) -> bool {
        if self.featured_pending != Some(token) {
            return false;
        }
        self.featured_pending = None;
        let mut articles = articles.into_iter();
        self.featured = match articles.next() {
            Some(hero) => PanelState::Populated(FeaturedContent {
                hero,
                grid: articles.collect(),
            }),
            None => PanelState::Empty,
        };
        self.mark_dirty();
        true
    }

    pub(crate) fn fail_featured(&mut self, token: RequestToken) -> bool {
        if self.featured_pending != Some(token) {
            return false;
        }
        self.featured_pending = None;
        self.featured = PanelState::Failed;
        self.mark_dirty();
        true
    }

    /// Opens (or re-opens) the modal for `source` in its loading state.
    pub(crate) fn open_modal(&mut self, source: ArticleRef) -> RequestToken {
        let token = self.issue_token();
        self.modal = ModalState::Open(ModalContent {
            source,
            body: PanelState::Loading,
            pending: Some(token),
        });
        self.mark_dirty();
        token
    }

    pub(crate) fn apply_recommendations(
        &mut self,
        token: RequestToken,
        recommendations: Vec<Recommendation>,
    ) -> bool {
        let body = if recommendations.is_empty() {
            PanelState::Empty
        } else {
            PanelState::Populated(recommendations)
        };
        self.settle_modal(token, body)
    }

    pub(crate) fn fail_recommendations(&mut self, token: RequestToken) -> bool {
        self.settle_modal(token, PanelState::Failed)
    }

    fn settle_modal(&mut self, token: RequestToken, body: PanelState<Vec<Recommendation>>) -> bool {
        let content = match &mut self.modal {
            ModalState::Open(content) | ModalState::Closing(content) => content,
            ModalState::Closed => return false,
        };
        if content.pending != Some(token) {
            return false;
        }
        content.pending = None;
        content.body = body;
        self.mark_dirty();
        true
    }

    /// Moves an open modal to `Closing` and returns the exit generation to wait for.
    pub(crate) fn start_modal_close(&mut self) -> Option<u64> {
        match std::mem::take(&mut self.modal) {
            ModalState::Open(content) => {
                self.modal_generation += 1;
                self.modal = ModalState::Closing(content);
                self.mark_dirty();
                Some(self.modal_generation)
            }
            other => {
                self.modal = other;
                None
            }
        }
    }

    pub(crate) fn finish_modal_close(&mut self, generation: u64) -> bool {
        if generation != self.modal_generation || !matches!(self.modal, ModalState::Closing(_)) {
            return false;
        }
        self.modal = ModalState::Closed;
        self.mark_dirty();
        true
    }

    pub(crate) fn set_newsletter_input(&mut self, input: String) {
        if self.newsletter.input != input {
            self.newsletter.input = input;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_newsletter_busy(&mut self, busy: bool) {
        self.newsletter.busy = busy;
        self.mark_dirty();
    }

    pub(crate) fn clear_newsletter_input(&mut self) {
        self.newsletter.input.clear();
        self.mark_dirty();
    }

    pub(crate) fn push_notification(
        &mut self,
        message: String,
        severity: NotificationSeverity,
    ) -> NotificationId {
        self.last_notification_id += 1;
        let id = self.last_notification_id;
        self.notifications.push(Notification {
            id,
            message,
            severity,
            leaving: false,
        });
        self.mark_dirty();
        id
    }

    pub(crate) fn mark_notification_leaving(&mut self, id: NotificationId) -> bool {
        match self.notifications.iter_mut().find(|n| n.id == id) {
            Some(notification) => {
                notification.leaving = true;
                self.mark_dirty();
                true
            }
            None => false,
        }
    }

    pub(crate) fn remove_notification(&mut self, id: NotificationId) -> bool {
        let before = self.notifications.len();
        self.notifications.retain(|n| n.id != id);
        let removed = self.notifications.len() != before;
        if removed {
            self.mark_dirty();
        }
        removed
    }

    pub fn view(&self) -> AppViewModel {
        let (hero, grid) = match &self.featured {
            PanelState::Idle => (HeroView::Blank, GridView::Blank),
            PanelState::Loading => (HeroView::Loading, GridView::Loading),
            PanelState::Populated(content) => (
                HeroView::Article(ArticleCardView::new(0, &content.hero)),
                GridView::Cards(
                    content
                        .grid
                        .iter()
                        .enumerate()
                        .map(|(index, article)| ArticleCardView::new(index, article))
                        .collect(),
                ),
            ),
            PanelState::Empty => (HeroView::Empty, GridView::Blank),
            PanelState::Failed => (HeroView::Failed, GridView::Blank),
        };

        let modal = match &self.modal {
            ModalState::Closed => ModalView::Hidden,
            ModalState::Open(content) => modal_view(content, false),
            ModalState::Closing(content) => modal_view(content, true),
        };

        AppViewModel {
            today: self.today.map(format::long_date),
            hero,
            grid,
            modal,
            scroll_locked: self.scroll_locked(),
            newsletter: NewsletterView {
                input: self.newsletter.input.clone(),
                busy: self.newsletter.busy,
            },
            notifications: self
                .notifications
                .iter()
                .map(|n| NotificationView {
                    id: n.id,
                    message: n.message.clone(),
                    severity: n.severity,
                    leaving: n.leaving,
                })
                .collect(),
        }
    }
}

fn modal_view(content: &ModalContent, closing: bool) -> ModalView {
    let (title, body) = match &content.body {
        PanelState::Idle | PanelState::Loading => (ModalTitleView::Loading, ModalBodyView::Loading),
        PanelState::Populated(recommendations) => (
            ModalTitleView::SimilarTo {
                title_preview: format::truncate_title(&content.source.title),
            },
            ModalBodyView::Recommendations(
                recommendations
                    .iter()
                    .enumerate()
                    .map(|(index, rec)| RecommendationCardView::new(index, rec))
                    .collect(),
            ),
        ),
        PanelState::Empty => (
            ModalTitleView::Settled,
            ModalBodyView::Empty {
                source_title: content.source.title.clone(),
            },
        ),
        PanelState::Failed => (ModalTitleView::Settled, ModalBodyView::Failed),
    };
    ModalView::Shown {
        closing,
        title,
        body,
    }
}
