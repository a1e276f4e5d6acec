use terminal_chart::core::{MIN_VISIBLE_BARS_COUNT, ViewportState};
use terminal_chart::interaction::{self, GestureEvent};

const TOTAL_BARS: usize = 100;

fn resized_state() -> ViewportState {
    interaction::on_resize(ViewportState::default(), 500.0)
}

#[test]
fn identity_gesture_leaves_state_unchanged() {
    let state = resized_state();
    let next = interaction::apply(state, GestureEvent::new(1.0, 0.0), TOTAL_BARS);
    assert_eq!(next, state);
}

#[test]
fn zoom_in_reduces_visible_bars_count() {
    let state = interaction::on_resize(ViewportState::new(50), 500.0);
    let next = interaction::apply(state, GestureEvent::new(2.0, 0.0), TOTAL_BARS);
    assert_eq!(next.visible_bars_count(), 25);
}

#[test]
fn zoom_out_increases_visible_bars_count() {
    let state = interaction::on_resize(ViewportState::new(50), 500.0);
    let next = interaction::apply(state, GestureEvent::new(0.5, 0.0), TOTAL_BARS);
    assert_eq!(next.visible_bars_count(), 100);
}

#[test]
fn zoom_round_trip_restores_visible_bars_count() {
    let state = interaction::on_resize(ViewportState::new(40), 500.0);
    let zoomed = interaction::apply(state, GestureEvent::new(2.0, 0.0), TOTAL_BARS);
    let back = interaction::apply(zoomed, GestureEvent::new(0.5, 0.0), TOTAL_BARS);
    assert_eq!(back.visible_bars_count(), 40);
}

#[test]
fn zoom_clamps_to_minimum_and_total() {
    let state = resized_state();

    let deep_in = interaction::apply(state, GestureEvent::new(100.0, 0.0), TOTAL_BARS);
    assert_eq!(deep_in.visible_bars_count(), MIN_VISIBLE_BARS_COUNT);

    let far_out = interaction::apply(state, GestureEvent::new(0.001, 0.0), TOTAL_BARS);
    assert_eq!(far_out.visible_bars_count(), TOTAL_BARS);
}

#[test]
fn zoom_is_inert_when_total_equals_minimum() {
    let state = resized_state();

    let next = interaction::apply(
        state,
        GestureEvent::new(3.0, 0.0),
        MIN_VISIBLE_BARS_COUNT,
    );
    assert_eq!(next.visible_bars_count(), MIN_VISIBLE_BARS_COUNT);

    let next = interaction::apply(
        state,
        GestureEvent::new(0.1, 0.0),
        MIN_VISIBLE_BARS_COUNT,
    );
    assert_eq!(next.visible_bars_count(), MIN_VISIBLE_BARS_COUNT);
}

#[test]
fn pan_saturates_at_scroll_ceiling() {
    // 100 bars * 25px - 500px surface = 2000px of scrollable room.
    let mut state = resized_state();
    assert_eq!(state.bar_width(), 25.0);

    state = interaction::apply(state, GestureEvent::new(1.0, 1000.0), TOTAL_BARS);
    assert_eq!(state.scrolled_by(), 1000.0);

    state = interaction::apply(state, GestureEvent::new(1.0, 1000.0), TOTAL_BARS);
    assert_eq!(state.scrolled_by(), 2000.0);

    state = interaction::apply(state, GestureEvent::new(1.0, 1000.0), TOTAL_BARS);
    assert_eq!(state.scrolled_by(), 2000.0);
}

#[test]
fn pan_never_goes_past_the_newest_bar() {
    let state = resized_state();
    let next = interaction::apply(state, GestureEvent::new(1.0, -300.0), TOTAL_BARS);
    assert_eq!(next.scrolled_by(), 0.0);
}

#[test]
fn pan_clamp_uses_pre_update_bar_width() {
    // Zooming out to 100 bars would shrink bar_width to 5px (ceiling 0), but
    // the clamp reads the state being replaced: 25px bars, ceiling 2000.
    let state = resized_state();
    let next = interaction::apply(state, GestureEvent::new(0.2, 1500.0), TOTAL_BARS);
    assert_eq!(next.visible_bars_count(), 100);
    assert_eq!(next.scrolled_by(), 1500.0);
}

#[test]
fn degenerate_zoom_factors_are_treated_as_identity() {
    let state = resized_state();

    for factor in [f64::NAN, f64::INFINITY, 0.0, -2.0] {
        let next = interaction::apply(state, GestureEvent::new(factor, 0.0), TOTAL_BARS);
        assert_eq!(next.visible_bars_count(), state.visible_bars_count());
    }
}

#[test]
fn resize_replaces_width_without_reclamping_scroll() {
    let state = resized_state().with_scrolled_by(2000.0);
    let next = interaction::on_resize(state, 3000.0);

    assert_eq!(next.terminal_width(), 3000.0);
    // Intentionally untouched; the next pan tick reclamps.
    assert_eq!(next.scrolled_by(), 2000.0);
}
