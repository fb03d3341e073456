//! Command parsing and the record/show handlers.

use std::io::Write;

use anyhow::Result;
use thiserror::Error;
use tracing::{info, warn};

use crate::{
    clock::Clock,
    record::{GameRecord, TimeControl},
    score::{Score, ScoreError, parse_score},
    stats::Report,
};

use super::App;

/// A line of input, matched by literal prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    Quit,
    Record(&'a str),
    Show(&'a str),
    Unknown(&'a str),
}

impl<'a> Command<'a> {
    pub fn parse(line: &'a str) -> Self {
        if line.starts_with('q') {
            Command::Quit
        } else if let Some(args) = line.strip_prefix("record ") {
            Command::Record(args.trim())
        } else if let Some(spec) = line.strip_prefix("show ") {
            Command::Show(spec.trim())
        } else {
            Command::Unknown(line)
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RecordError {
    #[error("Usage: record <blitz/rapid/classical> W-L-D")]
    Usage,

    #[error("Invalid gameType {0}")]
    InvalidTimeControl(String),

    #[error(transparent)]
    Score(#[from] ScoreError),
}

/// Parse the arguments of `record`, e.g. `blitz 3-1-0`.
pub fn parse_record_args(args: &str) -> Result<(TimeControl, Score), RecordError> {
    let parts: Vec<&str> = args.split_whitespace().collect();
    let [tc, score] = parts.as_slice() else {
        return Err(RecordError::Usage);
    };

    let time_control =
        TimeControl::from_string(tc).ok_or_else(|| RecordError::InvalidTimeControl(tc.to_string()))?;
    let score = parse_score(score)?;
    Ok((time_control, score))
}

impl<C: Clock> App<C> {
    /// Append a record dated today and rewrite the journal.
    ///
    /// Malformed arguments are reported and leave the store untouched.
    /// A failed save is returned as an error.
    pub(super) fn record(&mut self, args: &str, out: &mut impl Write) -> Result<()> {
        let (time_control, score) = match parse_record_args(args) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!("Rejected record {:?}: {}", args, e);
                writeln!(out, "{}", e)?;
                return Ok(());
            }
        };

        let record = GameRecord::new(time_control, score, self.clock.today());
        self.store.append(record);
        self.journal.save(self.store.records())?;

        info!(
            "Recorded {} {} on {}",
            record.time_control, score, record.played_on
        );
        writeln!(out, "Saved.")?;
        Ok(())
    }

    pub(super) fn show(&self, spec: &str, out: &mut impl Write) -> Result<()> {
        match Report::build(&self.store, spec, self.clock.now()) {
            Ok(report) => {
                info!(
                    "Report for {}: {} record(s), {} game(s)",
                    spec,
                    report.rows.len(),
                    report.totals.games
                );
                report.write_to(out)?;
            }
            Err(e) => {
                warn!("Rejected window {:?}: {}", spec, e);
                writeln!(out, "{}", e)?;
            }
        }
        Ok(())
    }
}
