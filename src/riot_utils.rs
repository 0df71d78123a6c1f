use std::fmt;

use anyhow::{Context, Result};
use chrono::{Datelike, TimeZone};

use crate::error::BotError;

/// A player handle in Riot ID form.
#[derive(Debug, Clone)]
pub struct RiotId {
    pub name: String,
    pub tag: String,
}

impl fmt::Display for RiotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.name, self.tag)
    }
}

/// Parses a user-entered `Name#Tag` string. Exactly one `#` separator with
/// non-empty halves is required; anything else is user input error, not a
/// fault.
pub fn parse_riot_id(input: &str) -> Result<RiotId, BotError> {
    let text = input.trim();
    let Some((name, tag)) = text.split_once('#') else {
        return Err(BotError::InputFormat(input.to_string()));
    };
    let (name, tag) = (name.trim(), tag.trim());
    if name.is_empty() || tag.is_empty() || tag.contains('#') {
        return Err(BotError::InputFormat(input.to_string()));
    }
    Ok(RiotId {
        name: name.to_string(),
        tag: tag.to_string(),
    })
}

/// Inclusive epoch-second window from local midnight through now, used to
/// scope which matches count as "today".
pub fn current_day_window() -> Result<(i64, i64)> {
    let now = chrono::Local::now();
    let midnight = chrono::Local
        .with_ymd_and_hms(now.year(), now.month(), now.day(), 0, 0, 0)
        .single() // Handle ambiguity (e.g., DST change)
        .context("Failed to construct the local midnight timestamp")?;
    Ok((midnight.timestamp(), now.timestamp()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn parses_a_valid_riot_id() {
        let result = parse_riot_id("PlayerName#NA1").unwrap();
        assert_eq!(result.name, "PlayerName");
        assert_eq!(result.tag, "NA1");
    }

    #[test]
    fn trims_whitespace_around_the_parts() {
        let result = parse_riot_id("  Player Name With Spaces  # EUW  ").unwrap();
        assert_eq!(result.name, "Player Name With Spaces");
        assert_eq!(result.tag, "EUW");
    }

    #[test]
    fn missing_separator_produces_the_user_facing_message() {
        let result = parse_riot_id("PlayerOne");
        assert_eq!(
            result.unwrap_err().to_string(),
            "The supplied name 'PlayerOne' is not in the expected format 'PlayerName#TagLine'."
        );
    }

    #[test]
    fn rejects_a_missing_name() {
        assert!(parse_riot_id("#NA1").is_err());
    }

    #[test]
    fn rejects_a_missing_tag() {
        assert!(parse_riot_id("PlayerName#").is_err());
    }

    #[test]
    fn rejects_an_empty_string() {
        assert!(parse_riot_id("").is_err());
    }

    #[test]
    fn rejects_a_lone_separator() {
        assert!(parse_riot_id("#").is_err());
    }

    #[test]
    fn rejects_multiple_separators() {
        assert!(parse_riot_id("Player#Name#Tag").is_err());
    }

    #[test]
    fn displays_as_name_hash_tag() {
        let riot_id = parse_riot_id("PlayerOne#NA1").unwrap();
        assert_eq!(riot_id.to_string(), "PlayerOne#NA1");
    }

    #[test]
    fn window_runs_from_local_midnight_to_now() {
        let (start, end) = current_day_window().unwrap();
        assert!(start <= end);
        let start_time = chrono::Local.timestamp_opt(start, 0).unwrap();
        assert_eq!(start_time.hour(), 0);
        assert_eq!(start_time.minute(), 0);
        assert_eq!(start_time.second(), 0);
        // A day plus DST slack.
        assert!(end - start <= 25 * 3600);
    }
}
