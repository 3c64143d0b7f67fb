//! Timed Quiz - Multiple-choice quiz against a global countdown.

mod app;
mod bank;
mod config;
mod error;
mod models;
mod quiz;
mod session;
mod telemetry;
mod ticker;
mod ui;
mod view;

use anyhow::Context;
use app::App;
use bank::QuestionBank;
use config::Config;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use tracing::{info, warn};

const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> anyhow::Result<()> {
    let config = Config::load();
    if let Some(log_path) = telemetry::init_tracing(&config) {
        info!(path = %log_path.display(), "logging to file");
    }

    if Config::config_path().is_some_and(|p| !p.exists()) {
        if let Err(err) = config.save() {
            warn!(%err, "could not write default config");
        }
    }

    // Fail before touching the terminal if the bank is unusable.
    let bank = QuestionBank::load_or_builtin(config.quiz.questions_file.as_deref())
        .context("Failed to load question bank")?;
    info!(questions = bank.len(), "starting timed quiz");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config, bank.into_questions());
    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> anyhow::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        // Wake up for the next countdown tick at the latest
        let timeout = app
            .controller
            .next_tick_in(Instant::now())
            .map_or(IDLE_POLL, |d| d.min(IDLE_POLL));
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if key.code == KeyCode::Char('q') && key.modifiers.is_empty() && app.can_quit() && !app.show_help {
                    break;
                }
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    break;
                }
                app.handle_key(key, Instant::now());
            }
        }

        app.tick(Instant::now());
    }

    info!(phase = ?app.controller.phase(), score = ?app.controller.quiz().score(), "exiting");
    Ok(())
}
