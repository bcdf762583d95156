use std::collections::HashMap;
use std::time::Duration;

use newsroom_core::{Article, DateValue, Effect, LoadOutcome, Msg, Recommendation, Timer};
use newsroom_engine::{
    ArticleRecord, DateField, EngineEvent, EngineHandle, FetchError, RecommendationRecord, TimerId,
};
use newsroom_logging::{news_debug, news_info, news_warn};

/// Hands effects to the engine and turns its events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
    timers: HashMap<TimerId, Timer>,
    next_timer_id: TimerId,
    in_flight: usize,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self {
            engine,
            timers: HashMap::new(),
            next_timer_id: 1,
            in_flight: 0,
        }
    }

    pub fn enqueue(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            let accepted = match effect {
                Effect::FetchFeatured { token, count } => {
                    news_info!("FetchFeatured token={} count={}", token, count);
                    self.engine.fetch_featured(token, count)
                }
                Effect::FetchRecommendations {
                    token,
                    article_id,
                    count,
                } => {
                    news_info!(
                        "FetchRecommendations token={} article_id={} count={}",
                        token,
                        article_id,
                        count
                    );
                    self.engine.fetch_recommendations(token, article_id, count)
                }
                Effect::StartTimer { timer, after } => {
                    let id = self.next_timer_id;
                    self.next_timer_id += 1;
                    let accepted = self.engine.start_timer(id, after);
                    if accepted {
                        self.timers.insert(id, timer);
                    }
                    accepted
                }
            };
            if accepted {
                self.in_flight += 1;
            }
        }
    }

    /// Waits up to `timeout` for the next engine event.
    pub fn wait(&mut self, timeout: Duration) -> Option<Msg> {
        let event = self.engine.recv_timeout(timeout)?;
        self.in_flight = self.in_flight.saturating_sub(1);
        Some(self.to_msg(event))
    }

    /// Nothing outstanding: no request pending and no timer armed.
    pub fn is_idle(&self) -> bool {
        self.in_flight == 0
    }

    fn to_msg(&mut self, event: EngineEvent) -> Msg {
        match event {
            EngineEvent::FeaturedCompleted { request, result } => Msg::FeaturedLoaded {
                token: request,
                outcome: outcome(result, article_from_record),
            },
            EngineEvent::RecommendationsCompleted { request, result } => {
                Msg::RecommendationsLoaded {
                    token: request,
                    outcome: outcome(result, recommendation_from_record),
                }
            }
            EngineEvent::TimerFired { timer } => match self.timers.remove(&timer) {
                Some(timer) => Msg::TimerElapsed(timer),
                None => {
                    news_warn!("timer {} fired but was never armed", timer);
                    Msg::NoOp
                }
            },
        }
    }
}

fn outcome<R, T>(result: Result<Vec<R>, FetchError>, convert: fn(R) -> T) -> LoadOutcome<Vec<T>> {
    match result {
        Ok(records) => LoadOutcome::Loaded(records.into_iter().map(convert).collect()),
        Err(err) => {
            news_debug!("fetch failed with {:?}", err.kind);
            LoadOutcome::Failed {
                reason: err.to_string(),
            }
        }
    }
}

fn date_value(field: Option<DateField>) -> DateValue {
    match field {
        Some(DateField::Text(text)) => DateValue::Text(text),
        Some(DateField::Millis(millis)) => DateValue::EpochMillis(millis),
        None => DateValue::Missing,
    }
}

fn article_from_record(record: ArticleRecord) -> Article {
    Article {
        id: record.id,
        title: record.title,
        date: date_value(record.date),
        link: record.link,
    }
}

fn recommendation_from_record(record: RecommendationRecord) -> Recommendation {
    Recommendation {
        id: record.id,
        title: record.title,
        date: date_value(record.date),
        score: record.score,
        link: record.link,
    }
}
