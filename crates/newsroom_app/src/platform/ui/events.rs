use anyhow::{anyhow, Context};
use chrono::NaiveDate;
use newsroom_core::{
    AppViewModel, ArticleCardView, ArticleId, CloseTrigger, GridView, HeroView, Msg,
};
use newsroom_logging::{news_debug, news_warn};

/// Element a click or key press landed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    ArticleCard { article_id: ArticleId },
    ModalBackdrop,
    /// Anywhere inside the modal content box.
    ModalDialog,
    RetryButton,
    NewsletterButton,
    NewsletterInput,
    Elsewhere,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Enter,
    Character(char),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    DocumentReady,
    Click(Target),
    KeyDown(Key),
    KeyPress { target: Target, key: Key },
    Input { target: Target, text: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Event(UiEvent),
    Quit,
}

/// Parses one line of driver input. Blank lines yield `None`.
pub fn parse_command(line: &str) -> anyhow::Result<Option<Command>> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let (verb, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (trimmed, ""),
    };

    let event = match verb {
        "quit" | "exit" => return Ok(Some(Command::Quit)),
        "open" => {
            let article_id = rest
                .parse::<ArticleId>()
                .with_context(|| format!("invalid article id {rest:?}"))?;
            UiEvent::Click(Target::ArticleCard { article_id })
        }
        "backdrop" => UiEvent::Click(Target::ModalBackdrop),
        "dialog" => UiEvent::Click(Target::ModalDialog),
        "esc" | "escape" => UiEvent::KeyDown(Key::Escape),
        "key" => {
            let mut chars = rest.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => UiEvent::KeyDown(Key::Character(c)),
                _ => return Err(anyhow!("expected a single character, got {rest:?}")),
            }
        }
        "click" => UiEvent::Click(Target::Elsewhere),
        "retry" => UiEvent::Click(Target::RetryButton),
        "type" => UiEvent::Input {
            target: Target::NewsletterInput,
            text: rest.to_string(),
        },
        "subscribe" => UiEvent::Click(Target::NewsletterButton),
        "enter" => UiEvent::KeyPress {
            target: Target::NewsletterInput,
            key: Key::Enter,
        },
        other => return Err(anyhow!("unknown command {other:?}")),
    };
    Ok(Some(Command::Event(event)))
}

/// Maps a UI event onto the message it triggers given what is on screen.
pub fn to_msg(event: &UiEvent, view: &AppViewModel, today: NaiveDate) -> Msg {
    match event {
        UiEvent::DocumentReady => Msg::PageLoaded { today },
        UiEvent::Click(Target::ArticleCard { article_id }) => {
            match visible_title(view, *article_id) {
                Some(title) => Msg::ArticleActivated {
                    article_id: *article_id,
                    title: title.to_string(),
                },
                None => {
                    news_warn!("no article card with id {} on the page", article_id);
                    Msg::NoOp
                }
            }
        }
        UiEvent::Click(Target::ModalBackdrop) => Msg::ModalCloseRequested {
            trigger: CloseTrigger::Backdrop,
        },
        UiEvent::Click(Target::RetryButton) => {
            if matches!(view.hero, HeroView::Empty | HeroView::Failed) {
                Msg::RetryClicked
            } else {
                news_debug!("retry clicked without a retry button on the page");
                Msg::NoOp
            }
        }
        UiEvent::Click(Target::NewsletterButton) => Msg::NewsletterSubmitted,
        UiEvent::KeyDown(Key::Escape) => Msg::ModalCloseRequested {
            trigger: CloseTrigger::EscapeKey,
        },
        UiEvent::KeyPress {
            target: Target::NewsletterInput,
            key: Key::Enter,
        } => Msg::NewsletterSubmitted,
        UiEvent::Input {
            target: Target::NewsletterInput,
            text,
        } => Msg::NewsletterInputChanged(text.clone()),
        _ => Msg::NoOp,
    }
}

fn visible_title(view: &AppViewModel, article_id: ArticleId) -> Option<&str> {
    let hero = match &view.hero {
        HeroView::Article(card) => Some(card),
        _ => None,
    };
    let grid: &[ArticleCardView] = match &view.grid {
        GridView::Cards(cards) => cards.as_slice(),
        _ => &[],
    };
    hero.into_iter()
        .chain(grid)
        .find(|card| card.article_id == article_id)
        .map(|card| card.title.as_str())
}
