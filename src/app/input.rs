// src/app/input.rs
use super::{
    actions::{
        clear_cursor_date, open_new_preset_modal, open_pick_preset_modal,
        remove_selected_workout, select_cursor_date, toggle_focus, toggle_selected_workout,
    },
    data::{calendar_change_month, calendar_goto_today, calendar_move_days},
    modals::{handle_new_preset_modal_input, handle_pick_preset_modal_input},
    navigation::{list_next, list_previous},
    state::{ActiveModal, App, PaneFocus},
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

// Main key event handler method on App
impl App {
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        // Handle based on active modal first
        if self.active_modal != ActiveModal::None {
            return self.handle_modal_input(key);
        }

        // Global keys
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.active_modal = ActiveModal::Help,
            KeyCode::Tab => toggle_focus(self),
            KeyCode::Char('a') => open_pick_preset_modal(self),
            KeyCode::Char('n') => open_new_preset_modal(self),
            _ => {
                // Delegate to pane-specific handler
                match self.focus {
                    PaneFocus::Calendar => self.handle_calendar_input(key)?,
                    PaneFocus::WorkoutList => self.handle_workout_list_input(key)?,
                }
            }
        }
        Ok(())
    }

    // --- Modal Input Handling ---
    fn handle_modal_input(&mut self, key: KeyEvent) -> Result<()> {
        match self.active_modal {
            ActiveModal::Help => self.handle_help_modal_input(key),
            ActiveModal::PickPreset { .. } => handle_pick_preset_modal_input(self, key)?,
            ActiveModal::NewPreset { .. } => handle_new_preset_modal_input(self, key)?,
            ActiveModal::None => {}
        }
        Ok(())
    }

    fn handle_help_modal_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter | KeyCode::Char('?') => {
                self.active_modal = ActiveModal::None;
            }
            _ => {} // Ignore other keys in help
        }
    }

    // --- Pane-Specific Input Handling ---
    fn handle_calendar_input(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('h') | KeyCode::Left => calendar_move_days(self, -1),
            KeyCode::Char('l') | KeyCode::Right => calendar_move_days(self, 1),
            KeyCode::Char('k') | KeyCode::Up => calendar_move_days(self, -7),
            KeyCode::Char('j') | KeyCode::Down => calendar_move_days(self, 7),
            KeyCode::Char('[') | KeyCode::PageUp => calendar_change_month(self, -1),
            KeyCode::Char(']') | KeyCode::PageDown => calendar_change_month(self, 1),
            KeyCode::Char('t') => calendar_goto_today(self),
            KeyCode::Char('s') | KeyCode::Enter => select_cursor_date(self),
            KeyCode::Char('x') | KeyCode::Delete => clear_cursor_date(self),
            _ => {}
        }
        Ok(())
    }

    fn handle_workout_list_input(&mut self, key: KeyEvent) -> Result<()> {
        let len = self.service.workouts().len();
        match key.code {
            KeyCode::Char('k') | KeyCode::Up => list_previous(&mut self.workout_list_state, len),
            KeyCode::Char('j') | KeyCode::Down => list_next(&mut self.workout_list_state, len),
            KeyCode::Char(' ') | KeyCode::Enter => toggle_selected_workout(self),
            KeyCode::Char('d') | KeyCode::Delete => remove_selected_workout(self),
            _ => {}
        }
        Ok(())
    }
}
