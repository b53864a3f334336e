// src/app/state.rs
use chrono::{Datelike, NaiveDate};
use ratatui::widgets::ListState;
use std::time::{Duration, Instant};
use workout_calendar_lib::AppService;

// Represents which pane has focus on the screen
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaneFocus {
    Calendar,
    WorkoutList,
}

// Represents the state of active modals
#[derive(Clone, Debug, PartialEq)]
pub enum ActiveModal {
    None,
    Help,
    PickPreset {
        // State for navigating the preset list
        list_state: ListState,
    },
    NewPreset {
        error_message: Option<String>,
    },
}

// Holds the application state
pub struct App {
    pub service: AppService,
    pub should_quit: bool,
    pub active_modal: ActiveModal,
    pub last_error: Option<String>, // For status bar notices
    pub error_clear_time: Option<Instant>,

    // === Pane focus ===
    pub focus: PaneFocus,

    // === Calendar pane state ===
    pub cursor_date: NaiveDate,
    pub view_month: NaiveDate, // first day of the rendered month

    // === Workout list state ===
    pub workout_list_state: ListState,

    // === New-preset dialog draft ===
    // Lives here rather than in the modal variant: cancelling the
    // dialog keeps the draft for the next open; only a successful
    // save clears it.
    pub preset_draft: String,
}

impl App {
    pub fn new(service: AppService) -> Self {
        let today = chrono::Local::now().date_naive();
        let mut app = App {
            service,
            should_quit: false,
            active_modal: ActiveModal::None,
            last_error: None,
            error_clear_time: None,
            focus: PaneFocus::Calendar,
            cursor_date: today,
            view_month: first_of_month(today),
            workout_list_state: ListState::default(),
            preset_draft: String::new(),
        };
        app.workout_list_state.select(Some(0));
        app
    }

    // Method to set status bar notices
    pub fn set_error(&mut self, msg: String) {
        self.last_error = Some(msg);
        self.error_clear_time = Some(Instant::now() + Duration::from_secs(5));
    }

    // Method to clear expired notices (called from refresh)
    pub(crate) fn clear_expired_error(&mut self) {
        if let Some(clear_time) = self.error_clear_time {
            if Instant::now() >= clear_time {
                self.last_error = None;
                self.error_clear_time = None;
            }
        }
    }
}

pub(crate) fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}
