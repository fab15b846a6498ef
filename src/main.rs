use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    fs::File,
    io::stdout,
    path::Path,
    sync::Mutex,
    time::Duration,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use floodit::cli::Cli;
use floodit::constants::POLL_INTERVAL;
use floodit::game::Game;
use floodit::input::{handle_input, InputState};
use floodit::ui::ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // stdout belongs to the UI, so logs only go to a file when asked
    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let mut game = match cli.seed {
        Some(seed) => Game::with_seed(seed),
        None => Game::new(),
    };

    // Setup terminal
    terminal::enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut game);

    // Cleanup, even when the loop failed
    terminal::disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!(turns_used = game.turns_used(), phase = ?game.phase(), "exiting");
    result
}

fn run<B: Backend>(terminal: &mut Terminal<B>, game: &mut Game) -> Result<(), Box<dyn std::error::Error>> {
    let mut input_state = InputState::new();

    loop {
        terminal.draw(|f| ui(f, game, &input_state))?;

        if event::poll(Duration::from_millis(POLL_INTERVAL))? {
            if let Event::Key(KeyEvent { code, kind, .. }) = event::read()? {
                match code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                        if kind == KeyEventKind::Press {
                            break;
                        }
                    }
                    _ => handle_input(game, &mut input_state, code, kind),
                }
            }
        }
    }

    Ok(())
}

fn init_logging(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    info!(path = %path.display(), "logging initialized");
    Ok(())
}
