mod commands;

pub use commands::{Command, RecordError, parse_record_args};

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::info;

use crate::{
    clock::{Clock, SystemClock},
    journal::JournalFile,
    store::GameStore,
};

/// Whether the read loop should keep going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Application context: the game store and the journal that backs it.
pub struct App<C: Clock = SystemClock> {
    pub(in crate::app) store: GameStore,
    pub(in crate::app) journal: JournalFile,
    pub(in crate::app) clock: C,
}

impl<C: Clock> App<C> {
    pub fn new(store: GameStore, journal: JournalFile, clock: C) -> Self {
        Self {
            store,
            journal,
            clock,
        }
    }

    /// Build the context from whatever the journal already holds.
    pub fn load(journal: JournalFile, clock: C) -> Result<Self> {
        let records = journal.load()?;
        Ok(Self::new(GameStore::from_records(records), journal, clock))
    }

    pub fn store(&self) -> &GameStore {
        &self.store
    }

    /// Run the interactive loop until `q` or end of input.
    pub fn run(&mut self, input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
        writeln!(out, "Loading recorded games:: {}", self.store.len())?;
        show_menu(out)?;

        loop {
            write!(out, "\n> ")?;
            out.flush()?;

            // Raw bytes, so a malformed line reaches dispatch as an unknown command.
            let mut buf = Vec::new();
            let read = input
                .read_until(b'\n', &mut buf)
                .context("Error in reading command")?;
            if read == 0 {
                info!("End of input");
                say_goodbye(out)?;
                return Ok(());
            }

            let line = String::from_utf8_lossy(&buf);
            if self.handle_line(line.trim_end(), out)? == Flow::Quit {
                return Ok(());
            }
        }
    }

    /// Dispatch a single command line.
    pub fn handle_line(&mut self, line: &str, out: &mut impl Write) -> Result<Flow> {
        match Command::parse(line) {
            Command::Quit => {
                info!("Exit requested");
                say_goodbye(out)?;
                return Ok(Flow::Quit);
            }
            Command::Record(args) => self.record(args, out)?,
            Command::Show(spec) => self.show(spec, out)?,
            Command::Unknown(_) => {
                writeln!(out, "I have no idea what you are talking about.")?;
            }
        }
        Ok(Flow::Continue)
    }
}

fn show_menu(out: &mut impl Write) -> Result<()> {
    writeln!(out, "\nWelcome to keeping track of daily chess games.")?;
    writeln!(out, "This program supports only three commands.")?;
    writeln!(
        out,
        "1. record <blitz/rapid/classical> W-L-D -> records game results for a time control / type"
    )?;
    writeln!(
        out,
        "2. show now-7d -> shows game statistics for a time duration that is expressed as now-Nd, where N is the last N number of days"
    )?;
    writeln!(out, "3. quit -> quits the program")?;
    Ok(())
}

fn say_goodbye(out: &mut impl Write) -> Result<()> {
    writeln!(out, "Keep practicing chess daily.")?;
    writeln!(out, "Bye")?;
    Ok(())
}
