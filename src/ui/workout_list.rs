// src/ui/workout_list.rs
use crate::app::{App, PaneFocus};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};
use workout_calendar_lib::config::color_or;

pub fn render_workout_list(f: &mut Frame, app: &mut App, area: Rect) {
    let completed_color = color_or(
        &app.service.config.theme.completed_color,
        Color::DarkGray,
    );

    let list_items: Vec<ListItem> = app
        .service
        .workouts()
        .iter()
        .map(|w| {
            let glyph = if w.completed { "✔" } else { "◻" };
            let label = format!("{} {}: {}", glyph, w.date.format("%Y-%m-%d"), w.text);
            let style = if w.completed {
                Style::default()
                    .fg(completed_color)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default()
            };
            ListItem::new(label).style(style)
        })
        .collect();

    let list_block = Block::default()
        .borders(Borders::ALL)
        .title("Workouts")
        .border_style(if app.focus == PaneFocus::WorkoutList {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        });

    let list = List::new(list_items)
        .block(list_block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    f.render_stateful_widget(list, area, &mut app.workout_list_state);
}
