// src/app/modals.rs
use super::navigation::{list_next, list_previous};
use super::state::{ActiveModal, App};
use super::AppInputError;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use workout_calendar_lib::StoreError;

// --- Submission Logic ---

fn submit_apply_preset(app: &mut App, preset_id: i64) -> Result<(), AppInputError> {
    match app.service.apply_preset(preset_id) {
        Ok(_workout_id) => Ok(()),
        Err(StoreError::NoDateSelected) => Err(AppInputError::NoDateSelected),
        Err(e) => Err(AppInputError::Store(e.to_string())),
    }
}

fn submit_create_preset(app: &mut App) -> Result<(), AppInputError> {
    let draft = app.preset_draft.clone();
    match app.service.create_preset(&draft) {
        Ok(_) => {
            // Only a successful save clears the draft
            app.preset_draft.clear();
            Ok(())
        }
        Err(StoreError::EmptyPresetText) => Err(AppInputError::InputEmpty),
        Err(e) => Err(AppInputError::Store(e.to_string())),
    }
}

// --- Input Handling ---

pub fn handle_pick_preset_modal_input(app: &mut App, key: KeyEvent) -> Result<()> {
    let preset_len = app.service.presets().len();
    let mut chosen_index: Option<usize> = None;

    if let ActiveModal::PickPreset { ref mut list_state } = app.active_modal {
        match key.code {
            KeyCode::Esc => {
                // Cancel closes without side effect
                app.active_modal = ActiveModal::None;
                return Ok(());
            }
            KeyCode::Char('k') | KeyCode::Up => list_previous(list_state, preset_len),
            KeyCode::Char('j') | KeyCode::Down => list_next(list_state, preset_len),
            KeyCode::Enter => chosen_index = list_state.selected(),
            _ => {}
        }
    }

    // Resolve the list position to a preset id against the current
    // snapshot, outside the modal borrow
    let chosen = chosen_index.and_then(|i| app.service.presets().get(i).map(|p| p.id));

    if let Some(preset_id) = chosen {
        match submit_apply_preset(app, preset_id) {
            Ok(()) => app.active_modal = ActiveModal::None,
            Err(e @ AppInputError::NoDateSelected) => {
                // The dialog stays open; the guard surfaces exactly one
                // status-bar notice and the store is untouched
                app.set_error(e.to_string());
            }
            Err(e) => {
                app.active_modal = ActiveModal::None;
                app.set_error(e.to_string());
            }
        }
    }
    Ok(())
}

pub fn handle_new_preset_modal_input(app: &mut App, key: KeyEvent) -> Result<()> {
    let mut should_submit = false;

    if let ActiveModal::NewPreset {
        ref mut error_message,
    } = app.active_modal
    {
        // Always clear error on any input
        *error_message = None;

        match key.code {
            KeyCode::Esc => {
                // Cancel closes unconditionally; the draft is kept
                app.active_modal = ActiveModal::None;
                return Ok(());
            }
            KeyCode::Enter => should_submit = true,
            KeyCode::Char(c) => app.preset_draft.push(c),
            KeyCode::Backspace => {
                app.preset_draft.pop();
            }
            _ => {}
        }
    }

    if should_submit {
        match submit_create_preset(app) {
            Ok(()) => app.active_modal = ActiveModal::None,
            Err(e) => {
                if let ActiveModal::NewPreset {
                    ref mut error_message,
                } = app.active_modal
                {
                    *error_message = Some(e.to_string());
                }
            }
        }
    }
    Ok(())
}
