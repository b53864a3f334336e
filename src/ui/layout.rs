// src/ui/layout.rs
use crate::{
    app::{ActiveModal, App},
    ui::{
        calendar::render_calendar, modals::render_modal, status_bar::render_status_bar,
        workout_list::render_workout_list,
    },
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    widgets::Paragraph,
    Frame,
};
use workout_calendar_lib::config::color_or;

// Main UI rendering function
pub fn render_ui(f: &mut Frame, app: &mut App) {
    let size = f.size();

    // Header on top, content below, status bar at bottom
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status Bar
        ])
        .split(size);

    render_header(f, app, main_chunks[0]);
    render_main_content(f, app, main_chunks[1]);
    render_status_bar(f, app, main_chunks[2]);

    // Render modal last if active
    if app.active_modal != ActiveModal::None {
        render_modal(f, app);
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header_color = color_or(&app.service.config.theme.header_color, Color::Green);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let title = Paragraph::new("Workout Calendar")
        .style(Style::default().fg(header_color).bold())
        .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    let selected_text = match app.service.selected_date() {
        Some(date) => format!("Selected date: {}", date.format("%Y-%m-%d")),
        None => "Selected date: none".to_string(),
    };
    let selected = Paragraph::new(selected_text).alignment(Alignment::Center);
    f.render_widget(selected, chunks[1]);
}

// Render the content area: calendar pane on the left, workout list on
// the right
fn render_main_content(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(26), Constraint::Min(0)])
        .split(area);

    render_calendar(f, app, chunks[0]);
    render_workout_list(f, app, chunks[1]);
}

/// Helper function to create a centered rectangle for modals
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let percent_x = percent_x.min(100);
    let percent_y = percent_y.min(100);
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
