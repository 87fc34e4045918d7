use mortality_chart::core::SeriesId;
use mortality_chart::interaction::{
    FocusState, VisibilityState, VisibilityStateMachine, transition,
};

const A: SeriesId = SeriesId(1);
const B: SeriesId = SeriesId(3);

#[test]
fn initial_state_is_unfocused_with_every_series_shown() {
    let machine = VisibilityStateMachine::new(5);
    let state = machine.state();

    assert_eq!(state.focus(), FocusState::Unfocused);
    assert_eq!(state.series_count(), 5);
    assert!(state.flags().iter().all(|flag| *flag));
}

#[test]
fn click_while_unfocused_focuses_and_shows_only_clicked_series() {
    let mut machine = VisibilityStateMachine::new(5);
    let changes = machine.click(A).expect("click known series");

    assert_eq!(machine.state().focus(), FocusState::Focused(A));
    assert_eq!(changes.len(), 5);
    for change in &changes {
        assert_eq!(change.visible, change.series == A);
    }
    assert!(machine.state().is_shown(A));
    assert!(!machine.state().is_shown(B));
}

#[test]
fn clicking_focused_series_again_restores_initial_state() {
    let mut machine = VisibilityStateMachine::new(5);
    machine.click(A).expect("focus");
    let changes = machine.click(A).expect("unfocus");

    assert_eq!(machine.state(), &VisibilityState::new(5));
    assert!(changes.iter().all(|change| change.visible));
}

#[test]
fn clicking_other_series_while_focused_switches_focus() {
    let mut machine = VisibilityStateMachine::new(5);
    machine.click(A).expect("focus a");
    machine.click(B).expect("focus b");

    let state = machine.state();
    assert_eq!(state.focus(), FocusState::Focused(B));
    assert_eq!(state.focused_series(), Some(B));
    let shown: Vec<usize> = (0..5)
        .filter(|index| state.is_shown(SeriesId(*index)))
        .collect();
    assert_eq!(shown, vec![B.index()]);
    assert!(!state.flag(A));
    assert!(state.flag(B));
}

#[test]
fn transition_is_pure_and_leaves_input_untouched() {
    let state = VisibilityState::new(3);
    let next = transition(&state, SeriesId(2)).expect("transition");

    assert_eq!(state, VisibilityState::new(3));
    assert_eq!(next.state.focus(), FocusState::Focused(SeriesId(2)));
    assert_eq!(next.state.flags(), &[false, false, true]);
}

#[test]
fn unknown_series_click_is_rejected_without_state_change() {
    let mut machine = VisibilityStateMachine::new(3);
    machine.click(SeriesId(0)).expect("focus");

    let err = machine.click(SeriesId(7)).expect_err("unknown series must fail");
    assert!(err.to_string().contains("outside visibility state"));
    assert_eq!(machine.state().focus(), FocusState::Focused(SeriesId(0)));
}
