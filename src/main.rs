use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use spendlog::cli::Session;
use spendlog::clock::SystemClock;
use spendlog::config::{SpendlogPaths, Settings};

#[derive(Parser)]
#[command(
    name = "spendlog",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "spendlog is a terminal-based personal expense tracker. \
                  Record expenses as you make them, review them as a table, \
                  and save them to a CSV file between sessions."
)]
struct Cli {
    /// Path to the expense CSV file
    #[arg(short, long, env = "SPENDLOG_FILE")]
    file: Option<PathBuf>,

    /// Do not clear the screen between menu screens
    #[arg(long)]
    no_clear: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = SpendlogPaths::new()?;
    paths.ensure_directories()?;

    let settings = match Settings::load_or_create(&paths) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("{}; using default settings", err);
            Settings::default()
        }
    };

    let data_file = cli
        .file
        .or_else(|| settings.expense_file.clone())
        .unwrap_or_else(|| paths.expenses_file());

    let clear_screen = settings.clear_screen && !cli.no_clear && io::stdout().is_terminal();

    let (mut session, notice) = Session::load(data_file, clear_screen);
    if let Some(notice) = notice {
        println!("{}", notice);
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    session.run(&mut stdin.lock(), &mut stdout, &SystemClock)?;

    Ok(())
}
