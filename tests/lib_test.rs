use anyhow::Result;
use chrono::NaiveDate;
use workout_calendar_lib::{AppService, Config, PresetStore, StoreError, WorkoutStore};

// Helper function to create a test service without seeded presets
fn create_test_service() -> AppService {
    let config = Config {
        default_presets: Vec::new(),
        ..Default::default()
    };
    AppService::new(config)
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

#[test]
fn test_apply_preset_requires_selection() -> Result<()> {
    let mut service = create_test_service();
    let preset = service.create_preset("Бег 30 минут")?;

    // No date selected: the add is rejected with a typed error and the
    // workout store is left untouched
    let result = service.apply_preset(preset.id);
    assert_eq!(result, Err(StoreError::NoDateSelected));
    assert!(service.workouts().is_empty());

    Ok(())
}

#[test]
fn test_apply_preset_appends_workout() -> Result<()> {
    let mut service = create_test_service();
    let preset = service.create_preset("Бег 30 минут")?;

    service.select_date(date("2024-05-01"));
    let workout_id = service.apply_preset(preset.id)?;

    let workouts = service.workouts();
    assert_eq!(workouts.len(), 1);
    assert_eq!(workouts[0].id, workout_id);
    assert_eq!(workouts[0].date, date("2024-05-01"));
    assert_eq!(workouts[0].text, "Бег 30 минут");
    assert!(!workouts[0].completed);

    Ok(())
}

#[test]
fn test_apply_preset_with_stale_preset_id() -> Result<()> {
    let mut service = create_test_service();
    service.select_date(date("2024-05-01"));

    let result = service.apply_preset(42);
    assert_eq!(result, Err(StoreError::PresetNotFound(42)));
    assert!(service.workouts().is_empty());

    Ok(())
}

#[test]
fn test_select_date_overwrites_prior_selection() {
    let mut service = create_test_service();
    assert_eq!(service.selected_date(), None);

    service.select_date(date("2024-05-01"));
    assert_eq!(service.selected_date(), Some(date("2024-05-01")));

    // Re-selecting the same date is a no-op
    service.select_date(date("2024-05-01"));
    assert_eq!(service.selected_date(), Some(date("2024-05-01")));

    // Selecting another date overwrites; only one date is ever selected
    service.select_date(date("2024-05-02"));
    assert_eq!(service.selected_date(), Some(date("2024-05-02")));
}

#[test]
fn test_clear_day_removes_all_matching_and_preserves_order() -> Result<()> {
    let mut service = create_test_service();
    let run = service.create_preset("Run")?;
    let yoga = service.create_preset("Yoga")?;

    service.select_date(date("2024-05-01"));
    service.apply_preset(run.id)?;
    service.apply_preset(yoga.id)?;
    service.select_date(date("2024-05-02"));
    service.apply_preset(run.id)?;
    service.select_date(date("2024-05-01"));
    service.apply_preset(run.id)?;

    let removed = service.clear_day(date("2024-05-01"));
    assert_eq!(removed, 3);

    // Only the 2024-05-02 entry remains
    let workouts = service.workouts();
    assert_eq!(workouts.len(), 1);
    assert_eq!(workouts[0].date, date("2024-05-02"));
    assert_eq!(workouts[0].text, "Run");

    // Clearing a day with no entries is a quiet no-op
    assert_eq!(service.clear_day(date("2024-05-01")), 0);

    Ok(())
}

#[test]
fn test_clear_day_ignores_completion_state() -> Result<()> {
    let mut service = create_test_service();
    let preset = service.create_preset("Run")?;

    service.select_date(date("2024-05-01"));
    let first = service.apply_preset(preset.id)?;
    service.apply_preset(preset.id)?;
    service.toggle_workout(first)?;

    // Completed and pending entries go alike
    assert_eq!(service.clear_day(date("2024-05-01")), 2);
    assert!(service.workouts().is_empty());

    Ok(())
}

#[test]
fn test_clear_day_leaves_selection_untouched() -> Result<()> {
    let mut service = create_test_service();
    let preset = service.create_preset("Run")?;

    service.select_date(date("2024-05-01"));
    service.apply_preset(preset.id)?;
    service.clear_day(date("2024-05-01"));

    assert_eq!(service.selected_date(), Some(date("2024-05-01")));

    Ok(())
}

#[test]
fn test_preset_ids_strictly_increase() -> Result<()> {
    let mut service = create_test_service();

    let first = service.create_preset("Run")?;
    let second = service.create_preset("Swim")?;
    let third = service.create_preset("Lift")?;

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(third.id, 3);

    let ids: Vec<i64> = service.presets().iter().map(|p| p.id).collect();
    assert!(ids.windows(2).all(|w| w[0] < w[1]));

    Ok(())
}

#[test]
fn test_create_preset_trims_text() -> Result<()> {
    let mut service = create_test_service();
    service.create_preset("Run")?;
    service.create_preset("Swim")?;

    let preset = service.create_preset("  Плавание  ")?;
    assert_eq!(preset.text, "Плавание");
    assert_eq!(preset.id, 3); // previous max + 1

    Ok(())
}

#[test]
fn test_blank_preset_rejected() -> Result<()> {
    let mut service = create_test_service();
    service.create_preset("Run")?;

    assert_eq!(service.create_preset(""), Err(StoreError::EmptyPresetText));
    assert_eq!(
        service.create_preset("   "),
        Err(StoreError::EmptyPresetText)
    );

    // The store is unchanged in both cases
    assert_eq!(service.presets().len(), 1);
    assert_eq!(service.presets()[0].text, "Run");

    Ok(())
}

#[test]
fn test_toggle_twice_round_trips() -> Result<()> {
    let mut service = create_test_service();
    let preset = service.create_preset("Run")?;
    service.select_date(date("2024-05-01"));
    let id = service.apply_preset(preset.id)?;

    assert_eq!(service.toggle_workout(id)?, true);
    assert!(service.workouts()[0].completed);

    assert_eq!(service.toggle_workout(id)?, false);
    let workout = &service.workouts()[0];
    assert!(!workout.completed);

    // Everything but the flag is unchanged
    assert_eq!(workout.id, id);
    assert_eq!(workout.date, date("2024-05-01"));
    assert_eq!(workout.text, "Run");

    Ok(())
}

#[test]
fn test_stale_workout_ids_fail_without_side_effects() -> Result<()> {
    let mut service = create_test_service();
    let preset = service.create_preset("Run")?;
    service.select_date(date("2024-05-01"));
    let id = service.apply_preset(preset.id)?;

    let removed = service.remove_workout(id)?;
    assert_eq!(removed.id, id);

    // The id is gone for good
    assert_eq!(
        service.remove_workout(id),
        Err(StoreError::WorkoutNotFound(id))
    );
    assert_eq!(
        service.toggle_workout(id),
        Err(StoreError::WorkoutNotFound(id))
    );
    assert!(service.workouts().is_empty());

    Ok(())
}

#[test]
fn test_removal_preserves_order_and_ids_are_not_reused() -> Result<()> {
    let mut service = create_test_service();
    let preset = service.create_preset("Run")?;
    service.select_date(date("2024-05-01"));

    let first = service.apply_preset(preset.id)?;
    let second = service.apply_preset(preset.id)?;
    let third = service.apply_preset(preset.id)?;

    service.remove_workout(second)?;

    let ids: Vec<i64> = service.workouts().iter().map(|w| w.id).collect();
    assert_eq!(ids, vec![first, third]);

    // A fresh entry gets a fresh id, never the removed one
    let fourth = service.apply_preset(preset.id)?;
    assert!(fourth > third);

    Ok(())
}

#[test]
fn test_seed_presets_from_config() {
    let config = Config {
        default_presets: vec![
            "Run 30 min".to_string(),
            "   ".to_string(), // blank seeds are skipped
            "Morning yoga".to_string(),
        ],
        ..Default::default()
    };
    let service = AppService::new(config);

    let texts: Vec<&str> = service.presets().iter().map(|p| p.text.as_str()).collect();
    assert_eq!(texts, vec!["Run 30 min", "Morning yoga"]);
    assert_eq!(service.presets()[0].id, 1);
    assert_eq!(service.presets()[1].id, 2);
}

#[test]
fn test_day_markers_only_mark_the_selected_date() -> Result<()> {
    let mut service = create_test_service();
    let preset = service.create_preset("Run")?;

    // Workout-bearing dates are not marked
    service.select_date(date("2024-05-01"));
    service.apply_preset(preset.id)?;
    service.select_date(date("2024-05-02"));

    let markers = service.day_markers();
    assert_eq!(markers.len(), 1);
    let marker = markers
        .get(&date("2024-05-02"))
        .expect("selected date is marked");
    assert!(marker.selected);
    assert!(marker.highlighted);
    assert!(!markers.contains_key(&date("2024-05-01")));

    Ok(())
}

#[test]
fn test_no_selection_means_no_markers() {
    let service = create_test_service();
    assert!(service.day_markers().is_empty());
}

#[test]
fn test_workout_store_direct_operations() {
    let mut store = WorkoutStore::new();
    let may_first = date("2024-05-01");

    let first = store.add(may_first, "Run");
    let second = store.add(may_first, "Swim");
    assert!(first < second);
    assert_eq!(store.list().len(), 2);
    assert_eq!(store.get(first).map(|w| w.text.as_str()), Some("Run"));

    assert_eq!(store.remove_by_date(may_first), 2);
    assert!(store.list().is_empty());
}

#[test]
fn test_preset_store_direct_operations() -> Result<()> {
    let mut store = PresetStore::new();

    let first = store.add("Run")?;
    let second = store.add("  Swim  ")?;
    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(second.text, "Swim");

    assert_eq!(store.add("\t "), Err(StoreError::EmptyPresetText));
    assert_eq!(store.list().len(), 2);
    assert_eq!(store.get(2).map(|p| p.text.as_str()), Some("Swim"));

    Ok(())
}
