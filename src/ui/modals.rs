// src/ui/modals.rs
use crate::{
    app::{ActiveModal, App},
    ui::layout::centered_rect,
};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use workout_calendar_lib::AppService;

pub fn render_modal(f: &mut Frame, app: &mut App) {
    match &mut app.active_modal {
        ActiveModal::Help => render_help_modal(f),
        ActiveModal::PickPreset { list_state } => {
            render_pick_preset_modal(f, &app.service, list_state);
        }
        ActiveModal::NewPreset { error_message } => {
            render_new_preset_modal(f, &app.preset_draft, error_message.as_deref());
        }
        ActiveModal::None => {} // Should not happen if called correctly
    }
}

fn render_help_modal(f: &mut Frame) {
    let block = Block::default()
        .title("Help (?)")
        .borders(Borders::ALL)
        .title_style(Style::new().bold())
        .border_style(Style::new().yellow());
    let area = centered_rect(60, 70, f.size());
    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let help_text = vec![
        Line::from("--- Global ---").style(Style::new().bold().underlined()),
        Line::from(" Q: Quit Application"),
        Line::from(" ?: Show/Hide This Help"),
        Line::from(" Tab: Switch Focus (Calendar <=> Workouts)"),
        Line::from(" a: Add Workout from Preset (to selected date)"),
        Line::from(" n: Create New Preset"),
        Line::from(""),
        Line::from("--- Calendar ---").style(Style::new().bold().underlined()),
        Line::from(" h / ←: Previous Day"),
        Line::from(" l / →: Next Day"),
        Line::from(" k / ↑: Previous Week"),
        Line::from(" j / ↓: Next Week"),
        Line::from(" [ / ]: Previous/Next Month"),
        Line::from(" t: Jump to Today"),
        Line::from(" Enter / s: Select Date"),
        Line::from(" x / Delete: Clear All Workouts on Day"),
        Line::from(""),
        Line::from("--- Workouts ---").style(Style::new().bold().underlined()),
        Line::from(" k/j / ↑/↓: Navigate List"),
        Line::from(" Space / Enter: Toggle Completed"),
        Line::from(" d / Delete: Delete Entry"),
        Line::from(""),
        Line::from(Span::styled(
            " Press Esc, ?, or Enter to close ",
            Style::new().italic().yellow(),
        )),
    ];

    let paragraph = Paragraph::new(help_text).wrap(Wrap { trim: false });
    f.render_widget(
        paragraph,
        area.inner(&ratatui::layout::Margin {
            vertical: 1,
            horizontal: 1,
        }),
    );
}

fn render_pick_preset_modal(f: &mut Frame, service: &AppService, list_state: &mut ListState) {
    let block = Block::default()
        .title("Choose a Preset")
        .borders(Borders::ALL)
        .title_style(Style::new().bold())
        .border_style(Style::new().yellow());
    let area = centered_rect(50, 60, f.size());
    f.render_widget(Clear, area);

    if service.presets().is_empty() {
        let empty = Paragraph::new("No presets yet. Press 'n' on the main screen to create one.")
            .block(block)
            .wrap(Wrap { trim: false });
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = service
        .presets()
        .iter()
        .map(|p| ListItem::new(p.text.clone()))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    f.render_stateful_widget(list, area, list_state);
}

fn render_new_preset_modal(f: &mut Frame, draft: &str, error_message: Option<&str>) {
    let block = Block::default()
        .title("Add New Preset")
        .borders(Borders::ALL)
        .border_style(Style::new().yellow());
    let area = centered_rect(50, 20, f.size());
    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area.inner(&ratatui::layout::Margin {
            vertical: 1,
            horizontal: 1,
        }));

    f.render_widget(Paragraph::new("Preset text:"), chunks[0]);

    f.render_widget(
        Paragraph::new(draft).style(Style::default().reversed()),
        chunks[1],
    );

    if let Some(err) = error_message {
        f.render_widget(
            Paragraph::new(err).style(Style::default().fg(Color::Red)),
            chunks[3],
        );
    }

    f.set_cursor(chunks[1].x + draft.chars().count() as u16, chunks[1].y);
}
