// src/ui/calendar.rs
use crate::app::{App, PaneFocus};
use chrono::{Datelike, NaiveDate};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use workout_calendar_lib::config::color_or;

pub fn render_calendar(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.service.config.theme;
    let markers = app.service.day_markers();
    let today = chrono::Local::now().date_naive();
    let today_color = color_or(&theme.today_color, Color::Cyan);

    let year = app.view_month.year();
    let month = app.view_month.month();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("{} {}", month_name(month), year))
        .border_style(if app.focus == PaneFocus::Calendar {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        });
    let inner = block.inner(area);
    f.render_widget(block, area);

    let week_starts_monday = app.service.config.week_starts_monday;
    let header = if week_starts_monday {
        "Mo Tu We Th Fr Sa Su"
    } else {
        "Su Mo Tu We Th Fr Sa"
    };
    let start_dow = if week_starts_monday {
        app.view_month.weekday().num_days_from_monday() as usize
    } else {
        app.view_month.weekday().num_days_from_sunday() as usize
    };

    let mut lines: Vec<Line> = vec![Line::from(Span::styled(
        header,
        Style::default().add_modifier(Modifier::BOLD),
    ))];

    let last_day = days_in_month(year, month);
    let mut day = 1u32;
    for row in 0..6 {
        if day > last_day {
            break;
        }
        let mut spans = Vec::new();
        for col in 0..7usize {
            if (row == 0 && col < start_dow) || day > last_day {
                spans.push(Span::raw("   "));
                continue;
            }
            let date = match NaiveDate::from_ymd_opt(year, month, day) {
                Some(d) => d,
                None => break,
            };
            let day_str = format!("{:2}", day);

            // Today first, then the marker, then the cursor on top
            let mut style = Style::default();
            if date == today {
                style = style.fg(today_color).add_modifier(Modifier::UNDERLINED);
            }
            if let Some(marker) = markers.get(&date) {
                if marker.selected || marker.highlighted {
                    style = style.bg(marker.color).fg(Color::White);
                }
            }
            if date == app.cursor_date && app.focus == PaneFocus::Calendar {
                style = style.add_modifier(Modifier::REVERSED);
            }

            spans.push(Span::styled(day_str, style));
            spans.push(Span::raw(" "));
            day += 1;
        }
        lines.push(Line::from(spans));
    }

    f.render_widget(Paragraph::new(lines), inner);
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map_or(28, |last| last.day())
}
