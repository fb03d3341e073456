use chrono::NaiveDate;

use crate::score::Score;

/// Date format used both on disk and in reports.
pub const DATE_FORMAT: &str = "%m-%d-%Y";

/// Pacing category of the games in a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeControl {
    Blitz,
    Rapid,
    Classical,
}

impl std::fmt::Display for TimeControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TimeControl::Blitz => "blitz",
            TimeControl::Rapid => "rapid",
            TimeControl::Classical => "classical",
        };
        write!(f, "{}", s)
    }
}

impl TimeControl {
    pub fn from_string(s: &str) -> Option<Self> {
        match s {
            "blitz" => Some(TimeControl::Blitz),
            "rapid" => Some(TimeControl::Rapid),
            "classical" => Some(TimeControl::Classical),
            _ => None,
        }
    }
}

/// One day's results for a single time control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRecord {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub time_control: TimeControl,
    pub played_on: NaiveDate,
}

impl GameRecord {
    pub fn new(time_control: TimeControl, score: Score, played_on: NaiveDate) -> Self {
        Self {
            wins: score.wins,
            losses: score.losses,
            draws: score.draws,
            time_control,
            played_on,
        }
    }

    /// Total number of games covered by this record.
    pub fn games(&self) -> u64 {
        u64::from(self.wins) + u64::from(self.losses) + u64::from(self.draws)
    }

    pub fn score(&self) -> Score {
        Score {
            wins: self.wins,
            losses: self.losses,
            draws: self.draws,
        }
    }
}
