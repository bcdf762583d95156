//! Newsroom engine: backend client, timers and page output.
mod engine;
mod fetch;
mod snapshot;
mod types;

pub use engine::{EngineError, EngineHandle};
pub use fetch::{FetchSettings, NewsApi, ReqwestNewsApi};
pub use snapshot::{ensure_output_dir, PageSnapshotWriter, SnapshotError};
pub use types::{
    ArticleRecord, DateField, EngineEvent, FailureKind, FetchError, RecommendationRecord,
    RequestId, TimerId,
};
