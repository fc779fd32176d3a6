// bubbletty: Step-by-step Bubble Sort visualizer

use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use bubbletty::cli::{self, Cli, Commands};
use bubbletty::config::Config;
use bubbletty::ui::App;

fn main() -> Result<()> {
    let args = Cli::parse();
    let mut config = Config::load(args.config.as_deref())?;
    if let Some(input) = args.input {
        config.initial_input = Some(input);
    }

    let output = match args.command {
        Some(Commands::Transcript { input }) => {
            init_stderr_logging();
            cli::transcript_output(&input)
        }
        Some(Commands::Frames { input, json }) => {
            init_stderr_logging();
            cli::frames_output(&input, json)
        }
        None => {
            init_file_logging(&config.log_file)?;
            return run_tui(&config);
        }
    };

    match output {
        Ok(text) => {
            println!("{}", text);
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
}

fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .init();
}

/// The TUI owns the terminal, so logs go to a file instead
fn init_file_logging(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    }

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(log_file)
        .with_ansi(false) // Disable ANSI colors in log file
        .init();
    Ok(())
}

fn run_tui(config: &Config) -> Result<()> {
    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(config);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "event loop failed");
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
