use std::num::ParseIntError;

use thiserror::Error;

/// Wins, losses and draws for one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}-{}", self.wins, self.losses, self.draws)
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ScoreError {
    #[error("Invalid score {token}: expected W-L-D, found {found} part(s)")]
    WrongSegmentCount { token: String, found: usize },

    #[error("Invalid Number {segment} :: {source}")]
    InvalidNumber {
        segment: String,
        #[source]
        source: ParseIntError,
    },
}

/// Parse a `W-L-D` token such as `3-1-0`.
pub fn parse_score(token: &str) -> Result<Score, ScoreError> {
    let parts: Vec<&str> = token.split('-').collect();
    if parts.len() != 3 {
        return Err(ScoreError::WrongSegmentCount {
            token: token.to_string(),
            found: parts.len(),
        });
    }

    let number = |segment: &str| {
        segment
            .parse::<u32>()
            .map_err(|source| ScoreError::InvalidNumber {
                segment: segment.to_string(),
                source,
            })
    };

    Ok(Score {
        wins: number(parts[0])?,
        losses: number(parts[1])?,
        draws: number(parts[2])?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_score_basic() {
        let score = parse_score("5-2-1").unwrap();
        assert_eq!(
            score,
            Score {
                wins: 5,
                losses: 2,
                draws: 1
            }
        );
    }

    #[test]
    fn test_parse_score_large_values() {
        let score = parse_score("1000-0-250").unwrap();
        assert_eq!(score.wins, 1000);
        assert_eq!(score.draws, 250);
    }

    #[test]
    fn test_parse_score_reports_offending_segment() {
        let err = parse_score("3-x-0").unwrap_err();
        match err {
            ScoreError::InvalidNumber { ref segment, .. } => assert_eq!(segment, "x"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().starts_with("Invalid Number x :: "));
    }

    #[test]
    fn test_parse_score_wrong_segment_count() {
        assert_eq!(
            parse_score("3-1"),
            Err(ScoreError::WrongSegmentCount {
                token: "3-1".to_string(),
                found: 2
            })
        );
        assert!(matches!(
            parse_score("1-2-3-4"),
            Err(ScoreError::WrongSegmentCount { found: 4, .. })
        ));
    }

    #[test]
    fn test_parse_score_rejects_negative_and_empty() {
        // A leading minus adds an empty segment.
        assert!(parse_score("-1-0-0").is_err());
        assert!(matches!(
            parse_score("1--0"),
            Err(ScoreError::InvalidNumber { .. })
        ));
    }
}
