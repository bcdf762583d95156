#![allow(dead_code)]

use std::sync::Once;

use chrono::NaiveDate;
use newsroom_core::{update, AppState, Article, DateValue, Effect, Msg, Recommendation};

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(newsroom_logging::initialize_for_tests);
}

pub fn article(id: u64, title: &str) -> Article {
    Article {
        id,
        title: title.to_string(),
        date: DateValue::Text("2024-01-15".to_string()),
        link: None,
    }
}

pub fn recommendation(title: &str, score: f64) -> Recommendation {
    Recommendation {
        id: None,
        title: title.to_string(),
        date: DateValue::Text("2024-02-01".to_string()),
        score,
        link: format!("https://news.example.com/{}", title.to_lowercase().replace(' ', "-")),
    }
}

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
}

/// Loads the page and returns the state together with the featured request token.
pub fn load_page(state: AppState) -> (AppState, u64) {
    let (state, effects) = update(state, Msg::PageLoaded { today: today() });
    let token = effects
        .iter()
        .find_map(|effect| match effect {
            Effect::FetchFeatured { token, .. } => Some(*token),
            _ => None,
        })
        .expect("featured fetch effect");
    (state, token)
}

/// Activates an article card and returns the state with the recommendation request token.
pub fn open_article(state: AppState, article_id: u64, title: &str) -> (AppState, u64) {
    let (state, effects) = update(
        state,
        Msg::ArticleActivated {
            article_id,
            title: title.to_string(),
        },
    );
    let token = effects
        .iter()
        .find_map(|effect| match effect {
            Effect::FetchRecommendations { token, .. } => Some(*token),
            _ => None,
        })
        .expect("recommendation fetch effect");
    (state, token)
}
