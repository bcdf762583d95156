mod common;

use common::{init_logging, open_article};
use newsroom_core::{
    update, AppState, CloseTrigger, Effect, ModalState, ModalView, Msg, Timer, MODAL_EXIT_DURATION,
};
use pretty_assertions::assert_eq;

fn request_close(state: AppState, trigger: CloseTrigger) -> (AppState, Vec<Effect>) {
    update(state, Msg::ModalCloseRequested { trigger })
}

fn exit_timer(effects: &[Effect]) -> Timer {
    match effects {
        [Effect::StartTimer { timer, after }] => {
            assert_eq!(*after, MODAL_EXIT_DURATION);
            *timer
        }
        other => panic!("expected a single exit timer, got {other:?}"),
    }
}

#[test]
fn both_close_paths_restore_scroll_after_exit_animation() {
    init_logging();
    for trigger in [CloseTrigger::EscapeKey, CloseTrigger::Backdrop] {
        let (state, _) = open_article(AppState::new(), 9, "Story");
        assert!(state.scroll_locked());

        let (state, effects) = request_close(state, trigger);
        assert!(matches!(state.modal(), ModalState::Closing(_)));
        assert!(state.scroll_locked(), "scroll stays locked while fading out");
        assert!(matches!(
            state.view().modal,
            ModalView::Shown { closing: true, .. }
        ));

        let (state, effects) = update(state, Msg::TimerElapsed(exit_timer(&effects)));
        assert!(effects.is_empty());
        assert_eq!(state.modal(), &ModalState::Closed);
        assert!(!state.scroll_locked());
        assert_eq!(state.view().modal, ModalView::Hidden);
    }
}

#[test]
fn close_requests_while_closed_are_ignored() {
    init_logging();
    let state = AppState::new();
    let (mut state, effects) = request_close(state, CloseTrigger::EscapeKey);
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
    assert_eq!(state.modal(), &ModalState::Closed);
}

#[test]
fn second_close_during_exit_animation_is_ignored() {
    init_logging();
    let (state, _) = open_article(AppState::new(), 9, "Story");
    let (state, effects) = request_close(state, CloseTrigger::Backdrop);
    let timer = exit_timer(&effects);

    let (state, effects) = request_close(state, CloseTrigger::EscapeKey);
    assert!(effects.is_empty());

    let (state, _) = update(state, Msg::TimerElapsed(timer));
    assert_eq!(state.modal(), &ModalState::Closed);
}

#[test]
fn reopening_during_exit_cancels_the_pending_close() {
    init_logging();
    let (state, _) = open_article(AppState::new(), 1, "First");
    let (state, effects) = request_close(state, CloseTrigger::EscapeKey);
    let stale_timer = exit_timer(&effects);

    let (state, _) = open_article(state, 2, "Second");
    let (state, effects) = update(state, Msg::TimerElapsed(stale_timer));
    assert!(effects.is_empty());
    assert!(matches!(state.modal(), ModalState::Open(content) if content.source.id == 2));
    assert!(state.scroll_locked());
}

#[test]
fn stale_exit_timer_does_not_close_a_later_close_cycle_early() {
    init_logging();
    let (state, _) = open_article(AppState::new(), 1, "First");
    let (state, effects) = request_close(state, CloseTrigger::EscapeKey);
    let first_timer = exit_timer(&effects);

    let (state, _) = open_article(state, 2, "Second");
    let (state, effects) = request_close(state, CloseTrigger::Backdrop);
    let second_timer = exit_timer(&effects);
    assert_ne!(first_timer, second_timer);

    let (state, _) = update(state, Msg::TimerElapsed(first_timer));
    assert!(matches!(state.modal(), ModalState::Closing(_)));

    let (state, _) = update(state, Msg::TimerElapsed(second_timer));
    assert_eq!(state.modal(), &ModalState::Closed);
}
