use anyhow::Result;
use std::io;
use tracing::{error, info};

use chess_log::{app::App, clock::SystemClock, config::Config, journal::JournalFile, logging};

fn main() {
    if let Err(e) = run() {
        println!("{:#}", e);
        std::process::exit(-1);
    }
}

fn run() -> Result<()> {
    let config = Config::from_home()?;
    config.ensure_dirs()?;

    // Held until return so buffered log lines are flushed.
    let _guard = logging::init(&config.logs_dir)?;

    let result = session(&config);
    if let Err(ref e) = result {
        error!("Fatal: {:#}", e);
    }
    result
}

fn session(config: &Config) -> Result<()> {
    info!("Starting with journal {}", config.data_file.display());

    let journal = JournalFile::open(&config.data_file)?;
    let mut app = App::load(journal, SystemClock)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    app.run(&mut stdin.lock(), &mut stdout.lock())
}
