// src/app/actions.rs
use super::state::{ActiveModal, App, PaneFocus};
use ratatui::widgets::ListState;

pub fn toggle_focus(app: &mut App) {
    app.focus = match app.focus {
        PaneFocus::Calendar => PaneFocus::WorkoutList,
        PaneFocus::WorkoutList => PaneFocus::Calendar,
    };
}

pub fn open_pick_preset_modal(app: &mut App) {
    let mut list_state = ListState::default();
    if !app.service.presets().is_empty() {
        list_state.select(Some(0));
    }
    app.active_modal = ActiveModal::PickPreset { list_state };
}

pub fn open_new_preset_modal(app: &mut App) {
    // The draft buffer deliberately survives cancel/reopen, so it is
    // not cleared here
    app.active_modal = ActiveModal::NewPreset {
        error_message: None,
    };
}

// Day-tap on the calendar cursor
pub fn select_cursor_date(app: &mut App) {
    app.service.select_date(app.cursor_date);
}

// Day-long-press analog: wipe every workout on the cursor date.
// The selection is left untouched.
pub fn clear_cursor_date(app: &mut App) {
    app.service.clear_day(app.cursor_date);
}

pub fn toggle_selected_workout(app: &mut App) {
    if let Some(id) = selected_workout_id(app) {
        // A stale id means the snapshot changed under us; ignore it
        let _ = app.service.toggle_workout(id);
    }
}

pub fn remove_selected_workout(app: &mut App) {
    if let Some(id) = selected_workout_id(app) {
        let _ = app.service.remove_workout(id);
    }
}

// Resolve the list cursor to a stable workout id against the current
// snapshot
fn selected_workout_id(app: &App) -> Option<i64> {
    app.workout_list_state
        .selected()
        .and_then(|i| app.service.workouts().get(i))
        .map(|w| w.id)
}
