//! Timer view rendering.

use ratatui::{prelude::*, widgets::*};

use crate::alert::AlertSink;
use crate::clock::Clock;
use crate::controller::Phase;
use crate::App;

const BORDER_COLOR: Color = Color::Rgb(0, 200, 255);
const ACCENT_COLOR: Color = Color::Rgb(255, 100, 0);
const SESSION_COLOR: Color = Color::Rgb(100, 181, 246);
const BREAK_COLOR: Color = Color::Rgb(0, 255, 150);

pub fn render_ui<C: Clock, A: AlertSink>(f: &mut Frame, app: &App<C, A>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1), Constraint::Length(3)])
        .split(f.size());

    // Header
    let header = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(BORDER_COLOR))
        .title(Span::styled(" 🍅 POMOCLOCK ", Style::default()
            .fg(ACCENT_COLOR).add_modifier(Modifier::BOLD)));
    f.render_widget(header, chunks[0]);

    // Main content
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(10),
            Constraint::Length(3), Constraint::Length(1),
            Constraint::Length(5), Constraint::Length(1),
            Constraint::Length(2), Constraint::Length(1),
            Constraint::Length(2), Constraint::Length(1),
            Constraint::Length(3), Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Percentage(10),
        ])
        .split(chunks[1]);

    let color = phase_color(app.timer.phase());

    // Phase
    f.render_widget(
        Paragraph::new(app.timer.phase_label())
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center),
        sections[1]
    );

    // Countdown
    f.render_widget(
        Paragraph::new(app.timer.formatted_remaining())
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center),
        sections[3]
    );

    // Date/time
    let now = chrono::Local::now();
    let date_lines = vec![
        Line::from(Span::styled(now.format("%A, %B %d, %Y").to_string(), Style::default().fg(Color::Gray))),
        Line::from(Span::styled(now.format("%I:%M %p").to_string(), Style::default().fg(Color::DarkGray))),
    ];
    f.render_widget(Paragraph::new(date_lines).alignment(Alignment::Center), sections[5]);

    // Status
    let running = app.timer.is_running();
    let status = if running {
        format!("{} RUNNING", if app.animation_frame < 10 { "●" } else { "○" })
    } else {
        format!("⏸  STOPPED{}", ".".repeat((app.animation_frame / 5) as usize % 4))
    };
    f.render_widget(
        Paragraph::new(status)
            .style(Style::default()
                .fg(if running { Color::Green } else { Color::Yellow })
                .add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center),
        sections[7]
    );

    // Progress through the active phase
    let total = app.timer.active_len_secs();
    let elapsed = total.saturating_sub(app.timer.remaining_secs());
    let percent = if total == 0 { 0 } else { elapsed * 100 / total };
    f.render_widget(
        Gauge::default()
            .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded))
            .gauge_style(Style::default().fg(color).bg(Color::Black))
            .percent(percent as u16),
        sections[9]
    );

    // Phase lengths
    let lengths = Line::from(vec![
        Span::styled("Session Length: ", Style::default().fg(Color::Gray)),
        Span::styled(format!("{} min", app.timer.session_minutes()),
            Style::default().fg(SESSION_COLOR).add_modifier(Modifier::BOLD)),
        Span::styled("  •  Break Length: ", Style::default().fg(Color::Gray)),
        Span::styled(format!("{} min", app.timer.break_minutes()),
            Style::default().fg(BREAK_COLOR).add_modifier(Modifier::BOLD)),
    ]);
    f.render_widget(
        Paragraph::new(lengths).alignment(Alignment::Center),
        sections[11]
    );

    // Controls
    let controls = vec![
        Line::from(vec![
            span_key("Space"), Span::raw(format!(" {}  •  ", app.timer.start_stop_label())),
            span_key("R"), Span::raw(" Reset  •  "),
            span_key("Q"), Span::raw(" Quit"),
        ]),
        Line::from(vec![
            span_key("↑/↓"), Span::raw(" Session ±1 min  •  "),
            span_key("←/→"), Span::raw(" Break ±1 min"),
        ]),
    ];
    f.render_widget(
        Paragraph::new(controls).alignment(Alignment::Center).style(Style::default().fg(Color::DarkGray)),
        chunks[2]
    );
}

fn phase_color(phase: Phase) -> Color {
    match phase {
        Phase::Session => SESSION_COLOR,
        Phase::Break => BREAK_COLOR,
    }
}

fn span_key(text: &str) -> Span<'_> {
    Span::styled(text, Style::default().fg(ACCENT_COLOR).add_modifier(Modifier::BOLD))
}
