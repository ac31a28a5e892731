use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{
    DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
};
use ratatui::crossterm::execute;

use multipick::app::App;
use multipick::config::{self, OutputFormat};
use multipick::logging;
use multipick::pool::reader::{PoolReader, PoolSource};
use multipick::select::filter_suggestions;

/// Interactive multi-select search input for the terminal
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Suggestions to choose from
    #[arg(value_name = "SUGGESTION")]
    suggestions: Vec<String>,

    /// Read suggestions from a file, one per line
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Print the selection as a JSON array
    #[arg(long)]
    json: bool,

    /// Print the suggestions matching QUERY and exit
    #[arg(long, value_name = "QUERY")]
    print_matches: Option<String>,

    /// Config file to use instead of ~/.config/multipick/config.toml
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;
    logging::init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => config::load_config_from_path(path)?,
        None => config::load_config(),
    };
    if args.json {
        config.output.format = OutputFormat::Json;
    }

    let source = PoolSource::detect(&args.suggestions, args.file.as_deref())?;
    let pool = PoolReader::read(&source)?;
    log::debug!("Loaded {} suggestions", pool.len());

    if let Some(query) = &args.print_matches {
        let mut stdout = io::stdout().lock();
        for suggestion in filter_suggestions(pool.as_slice(), query, &[]) {
            writeln!(stdout, "{}", suggestion)?;
        }
        return Ok(());
    }

    let mut app = App::new(pool, &config);
    app.select
        .set_on_selection_change(|selected| log::debug!("Selection now {:?}", selected));

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    execute!(io::stdout(), EnableMouseCapture, EnableFocusChange)?;

    let result = run(terminal, &mut app);

    // Restore terminal even if the loop failed
    let _ = execute!(io::stdout(), DisableMouseCapture, DisableFocusChange);
    ratatui::restore();
    result?;

    if let Some(output) = app.output() {
        if !output.is_empty() {
            println!("{}", output);
        }
    }

    Ok(())
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;
        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
