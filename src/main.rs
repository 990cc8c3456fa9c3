use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::info;

use persona_roster::config::{Cli, Commands};
use persona_roster::logging::init_logging;
use persona_roster::{run_script, Roster};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guards = init_logging(&cli.logging())?;

    let roster = match cli.command() {
        Commands::Tui => run_ui_mode()?,
        Commands::Script { file } => run_script_mode(file.as_deref())?,
    };

    if cli.print_json {
        let json = serde_json::to_string_pretty(&roster).context("Failed to serialize roster")?;
        println!("{}", json);
    }

    Ok(())
}

fn run_script_mode(file: Option<&Path>) -> Result<Roster> {
    let input: Box<dyn Read> = match file {
        Some(path) if path != Path::new("-") => {
            info!(path = %path.display(), "reading script");
            let file = File::open(path)
                .with_context(|| format!("Failed to open script: {}", path.display()))?;
            Box::new(file)
        }
        _ => Box::new(io::stdin().lock()),
    };

    let mut roster = Roster::new();
    let mut stdout = io::stdout().lock();
    run_script(&mut roster, input, &mut stdout)?;

    Ok(roster)
}

#[cfg(feature = "tui")]
fn run_ui_mode() -> Result<Roster> {
    use persona_roster::ui;

    let mut app = ui::App::new(Roster::new());
    ui::run_ui(&mut app)?;

    Ok(app.roster)
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode() -> Result<Roster> {
    eprintln!("❌ Interactive mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or run commands: persona-roster script <FILE>");
    std::process::exit(1);
}
