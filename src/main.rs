use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::{io, time::{Duration, Instant}};

mod alert;
mod clock;
mod controller;
mod time_format;
mod ui;

use alert::{AlertSink, DesktopAlert};
use clock::{Clock, SystemClock};
use controller::TimerController;

// ============================================================================
// Type Aliases & Constants
// ============================================================================

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
const POLL_RATE: Duration = Duration::from_millis(50);
const SECOND: Duration = Duration::from_secs(1);

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser)]
#[command(author, version, about = "🍅 pomoclock - A Terminal Pomodoro Clock")]
struct Args {
    /// Initial session length in minutes
    #[arg(short, long, value_parser = parse_minutes)]
    session: Option<u32>,
    /// Initial break length in minutes
    #[arg(short, long = "break", value_parser = parse_minutes)]
    brk: Option<u32>,
    #[arg(long)]
    no_sound: bool,
}

fn parse_minutes(s: &str) -> std::result::Result<u32, String> {
    let minutes = s.trim().parse::<u32>().map_err(|_| "Invalid minutes")?;
    if (1..=60).contains(&minutes) {
        Ok(minutes)
    } else {
        Err("Minutes must be between 1 and 60".into())
    }
}

// ============================================================================
// Application State
// ============================================================================

pub struct App<C: Clock, A: AlertSink> {
    pub timer: TimerController<C, A>,
    pub animation_frame: u8,
}

// ============================================================================
// Event Handlers
// ============================================================================

fn handle_input<C: Clock, A: AlertSink>(key: event::KeyEvent, app: &mut App<C, A>) -> bool {
    if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) ||
       (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)) {
        return true;
    }

    match key.code {
        KeyCode::Char(' ') => app.timer.toggle_running(),
        KeyCode::Char('r') => app.timer.reset(),
        KeyCode::Up | KeyCode::Char('k') => app.timer.adjust_session(1),
        KeyCode::Down | KeyCode::Char('j') => app.timer.adjust_session(-1),
        KeyCode::Right | KeyCode::Char('l') => app.timer.adjust_break(1),
        KeyCode::Left | KeyCode::Char('h') => app.timer.adjust_break(-1),
        _ => {}
    }

    false
}

// ============================================================================
// Main
// ============================================================================

fn main() -> Result<()> {
    let args = Args::parse();

    let timer = TimerController::with_lengths(
        SystemClock,
        DesktopAlert::new(!args.no_sound),
        args.session.unwrap_or(25) * 60,
        args.brk.unwrap_or(5) * 60,
    );
    let mut app = App { timer, animation_frame: 0 };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let res = run(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    res
}

fn run<B: ratatui::backend::Backend>(
    terminal: &mut ratatui::Terminal<B>,
    app: &mut App<SystemClock, DesktopAlert>,
) -> Result<()> {
    let mut last_second = Instant::now();

    loop {
        terminal.draw(|f| ui::render_ui(f, app))?;

        if event::poll(POLL_RATE)? {
            if let Event::Key(key) = event::read()? {
                if handle_input(key, app) {
                    return Ok(());
                }
            }
        }

        app.animation_frame = app.animation_frame.wrapping_add(1) % 20;

        if app.timer.is_running() {
            // Advance by whole seconds so slow frames never drop a tick.
            while last_second.elapsed() >= SECOND {
                app.timer.tick();
                last_second += SECOND;
            }
        } else {
            last_second = Instant::now();
        }
    }
}
