//! Game-wide constants for The Tower run tracker.
//!
//! Keeping tier labels and unit suffixes together means gameplay vocabulary
//! can only change via reviewed code changes, not external assets.

/// Seconds per hour, the denominator basis for every per-hour rate.
pub const SECONDS_PER_HOUR: u128 = 3_600;

/// Tier labels the shipped game currently exposes.
///
/// The engine accepts any label carrying a digit run; this table only
/// documents the known vocabulary for hosts that want a closed choice list.
pub const TIER_LABELS: [&str; 18] = [
    "T1", "T2", "T3", "T4", "T5", "T6", "T7", "T8", "T9", "T10", "T11", "T12", "T13", "T14",
    "T15", "T16", "T17", "T18",
];

/// Whether `label` is one of the game's shipped tiers.
#[must_use]
pub fn is_known_tier(label: &str) -> bool {
    TIER_LABELS.contains(&label)
}

/// The game's decimal unit suffixes, largest first.
///
/// The game shortens large quantities with these prefixes ("7.50M",
/// "1.20Q"). Pre-defined up to `O`, which covers every quantity the
/// tracker needs to render.
pub const UNIT_SUFFIXES: [(u128, char); 9] = [
    (1_000_000_000_000_000_000_000_000_000, 'O'),
    (1_000_000_000_000_000_000_000_000, 'S'),
    (1_000_000_000_000_000_000_000, 's'),
    (1_000_000_000_000_000_000, 'Q'),
    (1_000_000_000_000_000, 'q'),
    (1_000_000_000_000, 'T'),
    (1_000_000_000, 'B'),
    (1_000_000, 'M'),
    (1_000, 'k'),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_table_matches_the_shipped_game() {
        assert_eq!(TIER_LABELS.len(), 18);
        assert!(is_known_tier("T1"));
        assert!(is_known_tier("T18"));
        assert!(!is_known_tier("T19"));
        assert!(!is_known_tier("t1"));
    }

    #[test]
    fn suffix_table_is_strictly_descending() {
        for pair in UNIT_SUFFIXES.windows(2) {
            assert!(pair[0].0 > pair[1].0);
        }
    }
}
