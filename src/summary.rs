use tracing::warn;

use crate::error::BotError;
use crate::models::{MatchDto, ModeTally, SessionSummary};

/// Known (gameMode, queueId) pairs. Anything not listed falls through to the
/// raw `{gameMode}{queueId}` concatenation, so rotating or brand-new modes
/// still get a bucket instead of failing the whole lookup.
const MATCH_TYPES: [(&str, i64, &str); 3] = [
    ("CLASSIC", 400, "Summoner's Rift (Draft Pick)"),
    ("ARAM", 450, "All Random All Mid (ARAM)"),
    ("CHERRY", 1700, "Arena"),
];

/// Human-readable label for a match's game mode + queue combination.
pub fn classify(details: &MatchDto) -> String {
    let game_mode = details.info.game_mode.as_str();
    let queue_id = details.info.queue_id;
    for (known_mode, known_queue, label) in MATCH_TYPES {
        if game_mode == known_mode && queue_id == known_queue {
            return label.to_string();
        }
    }
    format!("{game_mode}{queue_id}")
}

/// Whether the player's own participant entry is flagged as a win. A missing
/// entry means the id list and the match record disagree about who played,
/// which is an upstream data fault and never defaults to a loss.
pub fn did_win(puuid: &str, details: &MatchDto) -> Result<bool, BotError> {
    details
        .info
        .participants
        .iter()
        .find(|participant| participant.puuid == puuid)
        .map(|participant| participant.win)
        .ok_or_else(|| BotError::ParticipantMissing {
            match_id: details.metadata.match_id.clone(),
        })
}

/// What to do with a match whose participant list doesn't contain the
/// looked-up player. `Fail` aborts the whole command, `Skip` logs and drops
/// that one match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingParticipant {
    Fail,
    Skip,
}

/// Turns fetched match details into (classification, won) pairs, preserving
/// input order.
pub fn classify_matches(
    puuid: &str,
    matches: &[MatchDto],
    policy: MissingParticipant,
) -> Result<Vec<(String, bool)>, BotError> {
    let mut results = Vec::with_capacity(matches.len());
    for details in matches {
        match did_win(puuid, details) {
            Ok(won) => results.push((classify(details), won)),
            Err(e) if policy == MissingParticipant::Skip => {
                warn!("{}; skipping the match", e);
            }
            Err(e) => return Err(e),
        }
    }
    Ok(results)
}

/// Groups classified results into per-mode tallies plus whole-session totals.
/// Grouping keys on the classification itself rather than on contiguous runs,
/// so a mode interrupted by another one still lands in a single bucket; output
/// order is first appearance in the input, which keeps the rendering stable.
pub fn summarize(results: &[(String, bool)]) -> SessionSummary {
    let mut tallies: Vec<(String, ModeTally)> = Vec::new();
    for (classification, won) in results {
        let index = match tallies
            .iter()
            .position(|(label, _)| label == classification)
        {
            Some(index) => index,
            None => {
                tallies.push((classification.clone(), ModeTally::default()));
                tallies.len() - 1
            }
        };
        let tally = &mut tallies[index].1;
        if *won {
            tally.wins += 1;
        } else {
            tally.losses += 1;
        }
    }

    SessionSummary {
        games: results.len(),
        wins: results.iter().filter(|(_, won)| *won).count(),
        tallies,
    }
}
