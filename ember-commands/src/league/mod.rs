//! League of Legends commands
//!
//! Ranks are compared on a single score: four divisions per tier, so
//! GOLD II sits two steps above GOLD IV and one below GOLD I. Master and
//! above have a single division and collapse onto the tier's first slot.

pub mod currentgame;
pub mod deeplol;
pub mod rank;

pub use currentgame::CurrentGameCommand;
pub use deeplol::DeeplolCommand;
pub use rank::RankCommand;

const TIERS: [&str; 9] = [
    "IRON",
    "BRONZE",
    "SILVER",
    "GOLD",
    "PLATINUM",
    "DIAMOND",
    "MASTER",
    "GRANDMASTER",
    "CHALLENGER",
];

const DIVISIONS: [&str; 4] = ["IV", "III", "II", "I"];

/// Map a tier + division to a comparable score; unknown input is `None`
pub(crate) fn rank_score(tier: &str, division: &str) -> Option<u32> {
    let tier_index = TIERS.iter().position(|t| t.eq_ignore_ascii_case(tier))?;
    let division_index = DIVISIONS
        .iter()
        .position(|d| d.eq_ignore_ascii_case(division))
        .unwrap_or(0);
    Some((tier_index * DIVISIONS.len() + division_index) as u32)
}

/// Human-readable name for a score produced by `rank_score`
pub(crate) fn rank_name(score: u32) -> String {
    let tier_index = (score as usize) / DIVISIONS.len();
    let division_index = (score as usize) % DIVISIONS.len();
    match TIERS.get(tier_index) {
        Some(tier) if tier_index >= 6 => (*tier).to_string(),
        Some(tier) => format!("{} {}", tier, DIVISIONS[division_index]),
        None => "UNRANKED".to_string(),
    }
}

/// Prefer the solo queue entry, falling back to any ranked queue
pub(crate) fn best_entry(
    entries: &[ember_common::riot::LeagueEntry],
) -> Option<&ember_common::riot::LeagueEntry> {
    entries
        .iter()
        .find(|entry| entry.queue_type == "RANKED_SOLO_5x5")
        .or_else(|| entries.first())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_score_ordering() {
        let iron_iv = rank_score("IRON", "IV").unwrap();
        let iron_i = rank_score("IRON", "I").unwrap();
        let gold_ii = rank_score("GOLD", "II").unwrap();
        let gold_i = rank_score("GOLD", "I").unwrap();
        let challenger = rank_score("CHALLENGER", "I").unwrap();

        assert!(iron_iv < iron_i);
        assert!(iron_i < gold_ii);
        assert!(gold_ii < gold_i);
        assert!(gold_i < challenger);
    }

    #[test]
    fn test_rank_score_rejects_unknown_tier() {
        assert!(rank_score("WOOD", "IV").is_none());
    }

    #[test]
    fn test_rank_name_roundtrip() {
        let score = rank_score("GOLD", "II").unwrap();
        assert_eq!(rank_name(score), "GOLD II");

        let master = rank_score("MASTER", "I").unwrap();
        assert_eq!(rank_name(master), "MASTER");
    }
}
