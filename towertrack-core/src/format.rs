//! Human-readable rendering and parsing of the game's shorthand notation.
//!
//! The Tower reports durations in raw seconds and quantities in decimal
//! suffix shorthand ("7.50M"); hosts use these helpers on both sides of
//! their input forms and overview tables.

use crate::constants::UNIT_SUFFIXES;
use crate::numbers::{f64_to_u128, u128_to_f64};

/// Split a duration in seconds into hour, minute, and second components.
#[must_use]
pub const fn seconds_to_hms(value: u32) -> (u32, u32, u32) {
    let m = value / 60;
    let s = value % 60;
    (m / 60, m % 60, s)
}

/// Combine hour, minute, and second form input into raw seconds.
///
/// Input forms bound minutes and seconds to 0–59; values beyond that are
/// still combined faithfully, saturating at `u32::MAX` instead of
/// overflowing.
#[must_use]
pub const fn hms_to_seconds(hours: u32, minutes: u32, seconds: u32) -> u32 {
    hours
        .saturating_mul(3_600)
        .saturating_add(minutes.saturating_mul(60))
        .saturating_add(seconds)
}

/// Render a duration as `"2h 5m 30s"`.
#[must_use]
pub fn hr_duration(value: u32) -> String {
    let (h, m, s) = seconds_to_hms(value);
    format!("{h}h {m}m {s}s")
}

/// Render a quantity with the game's decimal suffix, e.g. `"7.50M"`.
///
/// The suffix is the largest unit not exceeding the value; values below
/// 1000 render plainly. The two-decimal mantissa goes through the crate's
/// single lossy-cast choke point, which is ample for display precision.
#[must_use]
pub fn format_game_number(value: u128) -> String {
    for (multiplier, suffix) in UNIT_SUFFIXES {
        if value >= multiplier {
            let mantissa = u128_to_f64(value) / u128_to_f64(multiplier);
            return format!("{mantissa:.2}{suffix}");
        }
    }
    value.to_string()
}

/// Parse suffix shorthand like `"7.5M"` back into a raw quantity.
///
/// A bare integer without suffix parses exactly; suffixed input multiplies
/// a real-valued mantissa and truncates. Whitespace around the input and
/// between mantissa and suffix is tolerated (`" 2.5 Q "` parses like
/// `"2.5Q"`). Returns `None` on malformed input.
#[must_use]
pub fn parse_game_number(input: &str) -> Option<u128> {
    let input = input.trim();
    let last = input.chars().next_back()?;

    let Some(&(multiplier, _)) = UNIT_SUFFIXES.iter().find(|(_, s)| *s == last) else {
        // No suffix: exact integer first, then the float path for "1.5e9"
        // style input.
        if let Ok(value) = input.parse::<u128>() {
            return Some(value);
        }
        return f64_to_u128(input.parse::<f64>().ok()?);
    };

    let mantissa: f64 = input[..input.len() - last.len_utf8()].trim().parse().ok()?;
    f64_to_u128(mantissa * u128_to_f64(multiplier))
}
