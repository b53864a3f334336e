// src/app/data.rs
use super::state::{first_of_month, App};
use chrono::{Duration, Months};

impl App {
    // Keep the UI state consistent with the stores before each draw
    pub fn refresh(&mut self) {
        self.clear_expired_error();

        // Clamp the workout list cursor after deletions
        let len = self.service.workouts().len();
        if self.workout_list_state.selected().unwrap_or(0) >= len {
            self.workout_list_state
                .select(if len == 0 { None } else { Some(len - 1) });
        } else if self.workout_list_state.selected().is_none() && len > 0 {
            self.workout_list_state.select(Some(0));
        }
    }
}

// --- Calendar cursor movement ---
// The rendered month always follows the cursor, so the cursor can never
// leave the visible grid.

pub fn calendar_move_days(app: &mut App, delta: i64) {
    if let Some(new_date) = app.cursor_date.checked_add_signed(Duration::days(delta)) {
        app.cursor_date = new_date;
        app.view_month = first_of_month(new_date);
    }
}

pub fn calendar_change_month(app: &mut App, delta: i32) {
    let moved = if delta >= 0 {
        app.cursor_date.checked_add_months(Months::new(delta as u32))
    } else {
        app.cursor_date.checked_sub_months(Months::new(delta.unsigned_abs()))
    };
    if let Some(new_date) = moved {
        app.cursor_date = new_date;
        app.view_month = first_of_month(new_date);
    }
}

pub fn calendar_goto_today(app: &mut App) {
    let today = chrono::Local::now().date_naive();
    app.cursor_date = today;
    app.view_month = first_of_month(today);
}
