use std::io::{self, BufRead};
use std::path::Path;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use chrono::{Local, NaiveDate};
use newsroom_core::{update, AppState, AppViewModel, Msg};
use newsroom_engine::{EngineHandle, PageSnapshotWriter};
use newsroom_logging::{news_debug, news_error, news_info, news_warn};

use super::config::{self, ConfigOrigin, BACKEND_URL_ENV, CONFIG_FILENAME};
use super::effects::EffectRunner;
use super::logging;
use super::ui;
use super::ui::events::{Command, UiEvent};

/// How long the main loop blocks on the engine before polling input again.
const POLL_INTERVAL: Duration = Duration::from_millis(25);

pub fn run_app() -> anyhow::Result<()> {
    let (mut config, origin) = config::load(Path::new(CONFIG_FILENAME));
    let overridden = config.apply_backend_override(std::env::var(BACKEND_URL_ENV).ok());
    logging::initialize(config.log_destination);

    match &origin {
        ConfigOrigin::File(path) => news_info!("Loaded configuration from {:?}", path),
        ConfigOrigin::Defaults => news_info!("No {} found; using defaults", CONFIG_FILENAME),
        ConfigOrigin::Rejected { path, reason } => {
            news_warn!("Ignoring configuration {:?}: {}", path, reason)
        }
    }
    if overridden {
        news_info!("Backend url taken from {}", BACKEND_URL_ENV);
    }
    news_info!(
        "Backend {} output {:?}",
        config.backend_url,
        config.output_dir
    );

    let engine = EngineHandle::new(config.fetch_settings()).context("starting engine")?;
    let writer = PageSnapshotWriter::new(config.output_dir.clone(), ui::constants::PAGE_FILENAME);
    let mut app = App::new(EffectRunner::new(engine), writer, Local::now().date_naive());

    let commands = spawn_input_reader();
    app.handle_event(UiEvent::DocumentReady);

    let mut input_closed = false;
    'main: loop {
        loop {
            match commands.try_recv() {
                Ok(Command::Quit) => break 'main,
                Ok(Command::Event(event)) => app.handle_event(event),
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    if !input_closed {
                        news_debug!("input closed; finishing outstanding work");
                    }
                    input_closed = true;
                    break;
                }
            }
        }
        if input_closed && app.runner.is_idle() {
            break;
        }
        if let Some(msg) = app.runner.wait(POLL_INTERVAL) {
            app.dispatch_msg(msg);
        }
    }

    news_info!("Final page at {:?}", app.writer.target());
    Ok(())
}

fn spawn_input_reader() -> mpsc::Receiver<Command> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    news_error!("Failed to read input: {}", err);
                    break;
                }
            };
            match ui::events::parse_command(&line) {
                Ok(Some(command)) => {
                    let quit = command == Command::Quit;
                    if tx.send(command).is_err() || quit {
                        break;
                    }
                }
                Ok(None) => {}
                Err(err) => {
                    news_warn!("{}", err);
                    eprintln!("{err:#}");
                }
            }
        }
    });
    rx
}

struct App {
    state: AppState,
    view: AppViewModel,
    document: ui::document::Document,
    runner: EffectRunner,
    writer: PageSnapshotWriter,
    today: NaiveDate,
}

impl App {
    fn new(runner: EffectRunner, writer: PageSnapshotWriter, today: NaiveDate) -> Self {
        let state = AppState::new();
        let view = state.view();
        Self {
            state,
            view,
            document: ui::document::Document::new(),
            runner,
            writer,
            today,
        }
    }

    fn handle_event(&mut self, event: UiEvent) {
        let msg = ui::events::to_msg(&event, &self.view, self.today);
        if msg == Msg::NoOp {
            news_debug!("ignored {:?}", event);
            return;
        }
        self.dispatch_msg(msg);
    }

    fn dispatch_msg(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        self.view = state.view();
        self.state = state;
        self.runner.enqueue(effects);

        if was_dirty {
            self.render();
        }
    }

    fn render(&mut self) {
        self.document.apply_all(ui::render::render(&self.view));
        match self.writer.write(&self.document.to_html()) {
            Ok(path) => news_debug!("Wrote {:?}", path),
            Err(err) => news_error!("Failed to write page {:?}: {}", self.writer.target(), err),
        }
    }
}
