// Sortty: Step-Through Sorting and Searching Visualizer

use std::io;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use sortty::config::Config;
use sortty::shell::console::Console;
use sortty::shell::Session;
use sortty::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("sortty");

    let config = match Config::from_args(args.iter().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!("{}", Config::usage(program_name));
            std::process::exit(1);
        }
    };

    if config.show_help {
        println!("{}", Config::usage(program_name));
        return Ok(());
    }

    if let Some(values) = &config.values {
        eprintln!("Loaded {} values from the command line.", values.len());
    }

    if config.plain {
        return run_console(config);
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(config.values, config.presort, config.trace_limit);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

fn run_console(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    let values = match config.values {
        Some(values) => values,
        None => match console.read_array()? {
            Some(values) => values,
            None => {
                eprintln!("No array entered; exiting.");
                return Ok(());
            }
        },
    };

    let session = Session::new(values)
        .with_presort(config.presort)
        .with_trace_limit(config.trace_limit);
    console.run(&session)?;
    Ok(())
}
