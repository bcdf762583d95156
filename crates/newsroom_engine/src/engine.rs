use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use newsroom_logging::{news_debug, news_error};

use crate::fetch::{FetchSettings, NewsApi, ReqwestNewsApi};
use crate::{EngineEvent, FetchError, RequestId, TimerId};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("failed to build http client: {0}")]
    Client(#[from] FetchError),
}

enum EngineCommand {
    FetchFeatured {
        request: RequestId,
        count: usize,
    },
    FetchRecommendations {
        request: RequestId,
        article_id: u64,
        count: usize,
    },
    StartTimer {
        timer: TimerId,
        after: Duration,
    },
}

/// Runs backend calls and timers on a background tokio runtime.
///
/// Commands never block the caller; every command produces exactly one
/// [`EngineEvent`], which is collected with [`EngineHandle::try_recv`].
/// The runtime shuts down when the handle is dropped.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> Result<Self, EngineError> {
        let api = ReqwestNewsApi::new(settings)?;
        Self::with_api(Arc::new(api))
    }

    pub fn with_api(api: Arc<dyn NewsApi>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("newsroom-engine")
            .enable_all()
            .build()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                runtime.spawn(handle_command(api.clone(), command, event_tx.clone()));
            }
            news_debug!("engine command channel closed; shutting down runtime");
        });

        Ok(Self { cmd_tx, event_rx })
    }

    /// Each command method reports whether the engine accepted it.
    pub fn fetch_featured(&self, request: RequestId, count: usize) -> bool {
        self.send(EngineCommand::FetchFeatured { request, count })
    }

    pub fn fetch_recommendations(
        &self,
        request: RequestId,
        article_id: u64,
        count: usize,
    ) -> bool {
        self.send(EngineCommand::FetchRecommendations {
            request,
            article_id,
            count,
        })
    }

    pub fn start_timer(&self, timer: TimerId, after: Duration) -> bool {
        self.send(EngineCommand::StartTimer { timer, after })
    }

    fn send(&self, command: EngineCommand) -> bool {
        match self.cmd_tx.send(command) {
            Ok(()) => true,
            Err(_) => {
                news_error!("engine thread is gone; command dropped");
                false
            }
        }
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    api: Arc<dyn NewsApi>,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let event = match command {
        EngineCommand::FetchFeatured { request, count } => EngineEvent::FeaturedCompleted {
            request,
            result: api.featured(count).await,
        },
        EngineCommand::FetchRecommendations {
            request,
            article_id,
            count,
        } => EngineEvent::RecommendationsCompleted {
            request,
            result: api.recommendations(article_id, count).await,
        },
        EngineCommand::StartTimer { timer, after } => {
            tokio::time::sleep(after).await;
            EngineEvent::TimerFired { timer }
        }
    };
    let _ = event_tx.send(event);
}
