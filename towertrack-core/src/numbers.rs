//! Numeric helpers centralizing the crate's rounding rule and lossy casts.

use num_traits::cast::cast;

/// Divide `sum` by `n`, rounding half-up (0.5 rounds away from zero).
///
/// This is the single rounding rule for every mean reported by the
/// aggregation pass. `n` must be non-zero; integer division panics
/// otherwise, which is the intended fail-fast for a violated caller
/// contract.
#[must_use]
pub const fn round_half_up_div(sum: u128, n: u128) -> u128 {
    let q = sum / n;
    let r = sum % n;
    if r * 2 >= n { q + 1 } else { q }
}

/// Convert u128 to f64 while allowing precision loss in a single location.
#[must_use]
pub fn u128_to_f64(value: u128) -> f64 {
    cast::<u128, f64>(value).unwrap_or(0.0)
}

/// Truncate a f64 into u128, returning `None` for negative, non-finite, or
/// out-of-range values.
#[must_use]
pub fn f64_to_u128(value: f64) -> Option<u128> {
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    cast::<f64, u128>(value.trunc())
}
