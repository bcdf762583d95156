use newsroom_core::{update, AppState, Msg};

#[test]
fn update_is_noop() {
    let state = AppState::new();
    let (next, effects) = update(state.clone(), Msg::NoOp);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}

#[test]
fn consuming_the_dirty_flag_leaves_the_view_unchanged() {
    let (mut state, _) = update(AppState::new(), Msg::RetryClicked);
    let before = state.view();

    assert!(state.consume_dirty());
    assert!(!state.consume_dirty());
    assert_eq!(state.view(), before);
}
