// src/lib.rs
use anyhow::{Context, Result};
use chrono::NaiveDate;
use ratatui::style::Color;
use std::collections::HashMap;

// --- Declare modules ---
pub mod config;
pub mod store;

// --- Expose public types ---
pub use config::{
    color_or, get_config_path as get_config_path_util, load as load_config_util, parse_color,
    save as save_config_util, Config, Error as ConfigError, StandardColor, Theme,
};
pub use store::{Error as StoreError, Preset, PresetStore, Workout, WorkoutStore};

/// Marker descriptor consumed by the calendar pane: which visual flags a
/// date carries and the color hint to draw it with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayMarker {
    pub selected: bool,
    pub highlighted: bool,
    pub color: Color,
}

/// The single owning state container for the screen.
///
/// Holds the workout and preset stores, the calendar selection, and the
/// loaded configuration. Constructed once at startup and dropped at
/// exit; all state is process-lifetime only. The backing collections
/// never escape — callers get read-only snapshots and go through the
/// operations below for every mutation.
pub struct AppService {
    pub config: Config,
    workouts: WorkoutStore,
    presets: PresetStore,
    selected_date: Option<NaiveDate>,
}

impl AppService {
    /// Initializes the service from the on-disk configuration.
    /// # Errors
    /// Returns `anyhow::Error` if the config path cannot be determined
    /// or the config file fails to load.
    pub fn initialize() -> Result<Self> {
        let config_path =
            config::get_config_path().context("Failed to determine configuration file path")?;
        let config = config::load(&config_path)
            .context(format!("Failed to load config from {config_path:?}"))?;
        Ok(Self::new(config))
    }

    /// Builds a service from an already-loaded config, seeding the
    /// preset store from `config.default_presets`.
    pub fn new(config: Config) -> Self {
        let mut presets = PresetStore::new();
        for text in &config.default_presets {
            // Blank seed entries are skipped, same as a blank dialog save
            let _ = presets.add(text);
        }
        Self {
            config,
            workouts: WorkoutStore::new(),
            presets,
            selected_date: None,
        }
    }

    // --- Selection ---

    /// Day-tap: selects `date`, overwriting any prior selection.
    /// Re-selecting the same date is a no-op.
    pub fn select_date(&mut self, date: NaiveDate) {
        self.selected_date = Some(date);
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    // --- Workouts ---

    /// Applies a preset to the currently selected date, appending a new
    /// workout entry and returning its id.
    /// # Errors
    /// - `StoreError::NoDateSelected` if no date is selected; the
    ///   workout store is left untouched.
    /// - `StoreError::PresetNotFound` for a stale preset id.
    pub fn apply_preset(&mut self, preset_id: i64) -> Result<i64, StoreError> {
        let date = self.selected_date.ok_or(StoreError::NoDateSelected)?;
        let text = self
            .presets
            .get(preset_id)
            .ok_or(StoreError::PresetNotFound(preset_id))?
            .text
            .clone();
        Ok(self.workouts.add(date, &text))
    }

    /// Day-long-press: removes every workout on `date`, returning the
    /// count removed. The calendar selection is left unchanged.
    pub fn clear_day(&mut self, date: NaiveDate) -> usize {
        self.workouts.remove_by_date(date)
    }

    /// Removes a single workout entry.
    /// # Errors
    /// Returns `StoreError::WorkoutNotFound` for a stale id.
    pub fn remove_workout(&mut self, id: i64) -> Result<Workout, StoreError> {
        self.workouts.remove(id)
    }

    /// Flips the completion flag on a workout entry, returning the new
    /// value.
    /// # Errors
    /// Returns `StoreError::WorkoutNotFound` for a stale id.
    pub fn toggle_workout(&mut self, id: i64) -> Result<bool, StoreError> {
        self.workouts.toggle(id)
    }

    /// All workout entries in insertion order (minus deletions).
    pub fn workouts(&self) -> &[Workout] {
        self.workouts.list()
    }

    // --- Presets ---

    /// Creates a new preset from the trimmed text.
    /// # Errors
    /// Returns `StoreError::EmptyPresetText` for blank input; the
    /// preset store is left untouched.
    pub fn create_preset(&mut self, text: &str) -> Result<Preset, StoreError> {
        self.presets.add(text)
    }

    /// All presets in creation order.
    pub fn presets(&self) -> &[Preset] {
        self.presets.list()
    }

    // --- Calendar marking ---

    /// Marker map for the calendar pane. Only the currently selected
    /// date is ever marked; dates that merely carry workouts are not.
    pub fn day_markers(&self) -> HashMap<NaiveDate, DayMarker> {
        let mut markers = HashMap::new();
        if let Some(date) = self.selected_date {
            markers.insert(
                date,
                DayMarker {
                    selected: true,
                    highlighted: true,
                    color: config::color_or(&self.config.theme.selected_color, Color::Blue),
                },
            );
        }
        markers
    }
}
