//! Flat-file persistence for recorded games.
//!
//! One record per line: `<time control> <W>-<L>-<D>\t<MM-DD-YYYY>`.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use chrono::NaiveDate;
use tracing::{debug, info};

use crate::record::{DATE_FORMAT, GameRecord, TimeControl};
use crate::score::parse_score;

/// Handle on the journal file backing the game store.
#[derive(Debug, Clone)]
pub struct JournalFile {
    path: PathBuf,
}

impl JournalFile {
    /// Open the journal at `path`, creating an empty file if absent.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Unable to open {}", path.display()))?;

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every record in file order.
    pub fn load(&self) -> Result<Vec<GameRecord>> {
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;

        let mut records = Vec::new();
        for (idx, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let record = parse_line(line).with_context(|| {
                format!(
                    "Oops, error loading recorded games file {} at line {}",
                    self.path.display(),
                    idx + 1
                )
            })?;
            records.push(record);
        }

        info!("Loaded {} record(s) from {}", records.len(), self.path.display());
        Ok(records)
    }

    /// Replace the file contents with `records`.
    pub fn save(&self, records: &[GameRecord]) -> Result<()> {
        let content: String = records.iter().map(format_line).collect();

        fs::write(&self.path, content).with_context(|| {
            format!(
                "Error writing file system for recorded games file {}",
                self.path.display()
            )
        })?;

        debug!("Saved {} record(s) to {}", records.len(), self.path.display());
        Ok(())
    }
}

/// Serialize one record as a newline-terminated line.
pub fn format_line(record: &GameRecord) -> String {
    format!(
        "{} {}\t{}\n",
        record.time_control,
        record.score(),
        record.played_on.format(DATE_FORMAT)
    )
}

/// Parse one line of the journal file.
pub fn parse_line(line: &str) -> Result<GameRecord> {
    let (game, date) = line
        .split_once('\t')
        .ok_or_else(|| anyhow!("missing tab separator in {:?}", line))?;

    let played_on = NaiveDate::parse_from_str(date.trim(), DATE_FORMAT)
        .with_context(|| format!("invalid date {:?}", date))?;

    let mut parts = game.split_whitespace();
    let (Some(tc), Some(score), None) = (parts.next(), parts.next(), parts.next()) else {
        bail!("expected <time control> <W-L-D>, found {:?}", game);
    };

    let time_control =
        TimeControl::from_string(tc).ok_or_else(|| anyhow!("Invalid time control {}", tc))?;
    let score = parse_score(score)?;

    Ok(GameRecord::new(time_control, score, played_on))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::Score;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    fn record(tc: TimeControl, w: u32, l: u32, d: u32, on: NaiveDate) -> GameRecord {
        GameRecord::new(
            tc,
            Score {
                wins: w,
                losses: l,
                draws: d,
            },
            on,
        )
    }

    #[test]
    fn test_format_line() {
        let r = record(TimeControl::Blitz, 5, 2, 1, date(6, 15));
        assert_eq!(format_line(&r), "blitz 5-2-1\t06-15-2024\n");
    }

    #[test]
    fn test_parse_line() {
        let r = parse_line("classical 0-1-2\t01-02-2024").unwrap();
        assert_eq!(r, record(TimeControl::Classical, 0, 1, 2, date(1, 2)));
    }

    #[test]
    fn test_parse_line_rejects_bad_date() {
        let err = parse_line("blitz 1-0-0\t2024-06-15").unwrap_err();
        assert!(format!("{err:#}").contains("invalid date"));
    }

    #[test]
    fn test_parse_line_rejects_unknown_time_control() {
        let err = parse_line("bullet 1-0-0\t06-15-2024").unwrap_err();
        assert!(err.to_string().contains("Invalid time control bullet"));
    }

    #[test]
    fn test_parse_line_rejects_negative_sentinel_row() {
        let err = parse_line("blitz -1--1--1\t06-15-2024").unwrap_err();
        assert!(err.to_string().contains("Invalid score -1--1--1"));
    }

    #[test]
    fn test_parse_line_rejects_missing_tab() {
        assert!(parse_line("blitz 1-0-0 06-15-2024").is_err());
    }

    #[test]
    fn test_open_creates_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("current");
        assert!(!path.exists());

        let journal = JournalFile::open(&path).unwrap();
        assert!(path.exists());
        assert!(journal.load().unwrap().is_empty());
    }

    #[test]
    fn test_open_fails_in_missing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("missing").join("current");
        assert!(JournalFile::open(&path).is_err());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let tmp = tempfile::tempdir().unwrap();
        let journal = JournalFile::open(tmp.path().join("current")).unwrap();
        let records = vec![
            record(TimeControl::Rapid, 1, 1, 1, date(7, 1)),
            record(TimeControl::Blitz, 5, 2, 1, date(6, 15)),
            record(TimeControl::Classical, 0, 0, 3, date(6, 30)),
        ];

        journal.save(&records).unwrap();
        assert_eq!(journal.load().unwrap(), records);
    }

    #[test]
    fn test_save_is_idempotent_and_overwrites() {
        let tmp = tempfile::tempdir().unwrap();
        let journal = JournalFile::open(tmp.path().join("current")).unwrap();
        let long = vec![
            record(TimeControl::Blitz, 5, 2, 1, date(6, 15)),
            record(TimeControl::Rapid, 0, 2, 1, date(6, 16)),
        ];

        journal.save(&long).unwrap();
        let first = fs::read(journal.path()).unwrap();
        journal.save(&long).unwrap();
        let second = fs::read(journal.path()).unwrap();
        assert_eq!(first, second);

        journal.save(&long[..1]).unwrap();
        assert_eq!(
            fs::read_to_string(journal.path()).unwrap(),
            "blitz 5-2-1\t06-15-2024\n"
        );
    }

    #[test]
    fn test_load_reports_line_number_of_bad_date() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "blitz 5-2-1\t06-15-2024").unwrap();
        writeln!(file, "rapid 0-2-1\tyesterday").unwrap();
        file.flush().unwrap();

        let journal = JournalFile::open(file.path()).unwrap();
        let err = journal.load().unwrap_err();
        assert!(err.to_string().contains("at line 2"));
    }

    #[test]
    fn test_load_skips_blank_lines() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "blitz 5-2-1\t06-15-2024").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "rapid 0-2-1\t06-16-2024").unwrap();
        file.flush().unwrap();

        let journal = JournalFile::open(file.path()).unwrap();
        assert_eq!(journal.load().unwrap().len(), 2);
    }
}
