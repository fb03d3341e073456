//! Windowed reporting over the game store.

use std::io::{self, Write};

use chrono::{Duration, NaiveDateTime, NaiveTime};
use thiserror::Error;

use crate::record::{DATE_FORMAT, GameRecord};
use crate::store::GameStore;

const SEPARATOR: &str = "-----------------------------------------------";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum WindowError {
    #[error("Invalid time expression {0}")]
    InvalidExpression(String),

    #[error("Invalid duration expression {0}")]
    InvalidDuration(String),

    #[error("Invalid number format {0}")]
    InvalidNumber(String),
}

/// A `now-Nd` reporting window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub days: u32,
}

impl Window {
    pub fn parse(spec: &str) -> Result<Self, WindowError> {
        let duration = spec
            .strip_prefix("now-")
            .ok_or_else(|| WindowError::InvalidExpression(spec.to_string()))?;
        let digits = duration
            .strip_suffix('d')
            .ok_or_else(|| WindowError::InvalidDuration(duration.to_string()))?;
        let days = digits
            .parse::<u32>()
            .map_err(|_| WindowError::InvalidNumber(digits.to_string()))?;

        Ok(Self { days })
    }

    /// Exclusive lower bound: `now - days`.
    pub fn threshold(&self, now: NaiveDateTime) -> NaiveDateTime {
        now.checked_sub_signed(Duration::days(i64::from(self.days)))
            .unwrap_or(NaiveDateTime::MIN)
    }

    /// True if the record's day starts strictly after the threshold.
    pub fn contains(&self, record: &GameRecord, now: NaiveDateTime) -> bool {
        starts_after(record, self.threshold(now))
    }
}

fn starts_after(record: &GameRecord, threshold: NaiveDateTime) -> bool {
    record.played_on.and_time(NaiveTime::MIN) > threshold
}

/// Aggregated results across a set of records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub games: u64,
    pub wins: u64,
    pub losses: u64,
    pub draws: u64,
}

impl Totals {
    pub fn add(&mut self, record: &GameRecord) {
        self.games += record.games();
        self.wins += u64::from(record.wins);
        self.losses += u64::from(record.losses);
        self.draws += u64::from(record.draws);
    }

    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a GameRecord>) -> Self {
        let mut totals = Self::default();
        for record in records {
            totals.add(record);
        }
        totals
    }
}

/// Records selected by a window, in store order, with their totals.
#[derive(Debug, Clone)]
pub struct Report<'a> {
    pub window_spec: String,
    pub rows: Vec<&'a GameRecord>,
    pub totals: Totals,
}

impl<'a> Report<'a> {
    pub fn build(store: &'a GameStore, spec: &str, now: NaiveDateTime) -> Result<Self, WindowError> {
        let window = Window::parse(spec)?;
        let threshold = window.threshold(now);
        let rows: Vec<&GameRecord> = store.iter().filter(|r| starts_after(r, threshold)).collect();
        let totals = Totals::from_records(rows.iter().copied());

        Ok(Self {
            window_spec: spec.to_string(),
            rows,
            totals,
        })
    }

    pub fn write_to(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{}", SEPARATOR)?;
        for record in &self.rows {
            writeln!(
                out,
                "{}\t({}) {}",
                record.played_on.format(DATE_FORMAT),
                record.time_control,
                record.score()
            )?;
        }

        writeln!(out)?;
        writeln!(
            out,
            "Total games played in {} :: {}",
            self.window_spec, self.totals.games
        )?;
        writeln!(out, "Wins {}", self.totals.wins)?;
        writeln!(out, "Losses {}", self.totals.losses)?;
        writeln!(out, "Draws {}", self.totals.draws)?;
        writeln!(out, "{}", SEPARATOR)?;
        Ok(())
    }
}
