use newsroom_logging::{news_debug, news_error, news_info};

use crate::{
    format, AppState, ArticleId, ArticleRef, CloseTrigger, Effect, LoadOutcome, Msg,
    NotificationSeverity, Timer, FEATURED_ARTICLE_COUNT, MODAL_EXIT_DURATION,
    NOTIFICATION_DISPLAY_DURATION, NOTIFICATION_EXIT_DURATION, RECOMMENDATION_COUNT, SIGNUP_DELAY,
};

pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email.";
pub const SUBSCRIBED_MESSAGE: &str = "Subscribed successfully!";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::PageLoaded { today } => {
            state.set_today(today);
            load_featured(&mut state)
        }
        Msg::RetryClicked => load_featured(&mut state),
        Msg::FeaturedLoaded { token, outcome } => {
            let applied = match outcome {
                LoadOutcome::Loaded(articles) => {
                    news_info!("featured request {} returned {} articles", token, articles.len());
                    state.apply_featured(token, articles)
                }
                LoadOutcome::Failed { reason } => {
                    news_error!("featured request {} failed: {}", token, reason);
                    state.fail_featured(token)
                }
            };
            if !applied {
                news_debug!("discarding stale featured response {}", token);
            }
            Vec::new()
        }
        Msg::ArticleActivated { article_id, title } => {
            load_recommendations(&mut state, article_id, title)
        }
        Msg::RecommendationsLoaded { token, outcome } => {
            let applied = match outcome {
                LoadOutcome::Loaded(recommendations) => {
                    state.apply_recommendations(token, recommendations)
                }
                LoadOutcome::Failed { reason } => {
                    news_error!("recommendation request {} failed: {}", token, reason);
                    state.fail_recommendations(token)
                }
            };
            if !applied {
                news_debug!("discarding stale recommendation response {}", token);
            }
            Vec::new()
        }
        Msg::ModalCloseRequested { trigger } => close_modal(&mut state, trigger),
        Msg::NewsletterInputChanged(text) => {
            state.set_newsletter_input(text);
            Vec::new()
        }
        Msg::NewsletterSubmitted => submit_newsletter(&mut state),
        Msg::NotificationRequested { message, severity } => notify(&mut state, message, severity),
        Msg::TimerElapsed(timer) => timer_elapsed(&mut state, timer),
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn load_featured(state: &mut AppState) -> Vec<Effect> {
    let token = state.begin_featured_load();
    vec![Effect::FetchFeatured {
        token,
        count: FEATURED_ARTICLE_COUNT,
    }]
}

fn load_recommendations(state: &mut AppState, article_id: ArticleId, title: String) -> Vec<Effect> {
    let token = state.open_modal(ArticleRef {
        id: article_id,
        title,
    });
    vec![Effect::FetchRecommendations {
        token,
        article_id,
        count: RECOMMENDATION_COUNT,
    }]
}

fn close_modal(state: &mut AppState, trigger: CloseTrigger) -> Vec<Effect> {
    match state.start_modal_close() {
        Some(generation) => {
            news_debug!("closing modal via {:?}", trigger);
            vec![Effect::StartTimer {
                timer: Timer::ModalExit { generation },
                after: MODAL_EXIT_DURATION,
            }]
        }
        None => Vec::new(),
    }
}

fn submit_newsletter(state: &mut AppState) -> Vec<Effect> {
    if state.newsletter().busy {
        return Vec::new();
    }
    let email = state.newsletter().input.trim();
    if email.is_empty() || !format::is_valid_email(email) {
        return notify(
            state,
            INVALID_EMAIL_MESSAGE.to_string(),
            NotificationSeverity::Error,
        );
    }
    state.set_newsletter_busy(true);
    vec![Effect::StartTimer {
        timer: Timer::SignupComplete,
        after: SIGNUP_DELAY,
    }]
}

fn notify(state: &mut AppState, message: String, severity: NotificationSeverity) -> Vec<Effect> {
    let id = state.push_notification(message, severity);
    vec![Effect::StartTimer {
        timer: Timer::NotificationLeave { id },
        after: NOTIFICATION_DISPLAY_DURATION,
    }]
}

fn timer_elapsed(state: &mut AppState, timer: Timer) -> Vec<Effect> {
    match timer {
        Timer::ModalExit { generation } => {
            if !state.finish_modal_close(generation) {
                news_debug!("ignoring stale modal exit {}", generation);
            }
            Vec::new()
        }
        Timer::SignupComplete => {
            if !state.newsletter().busy {
                return Vec::new();
            }
            state.clear_newsletter_input();
            state.set_newsletter_busy(false);
            notify(
                state,
                SUBSCRIBED_MESSAGE.to_string(),
                NotificationSeverity::Success,
            )
        }
        Timer::NotificationLeave { id } => {
            if state.mark_notification_leaving(id) {
                vec![Effect::StartTimer {
                    timer: Timer::NotificationRemove { id },
                    after: NOTIFICATION_EXIT_DURATION,
                }]
            } else {
                Vec::new()
            }
        }
        Timer::NotificationRemove { id } => {
            state.remove_notification(id);
            Vec::new()
        }
    }
}
