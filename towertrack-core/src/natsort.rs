//! Natural-order string comparison for tier labels.
//!
//! Plain lexical order sorts "T12" before "T2"; the tracker instead splits a
//! label into alternating digit and non-digit runs and compares digit runs by
//! numeric value. The comparator is stateless and total, so it can back any
//! sort in the crate.

use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Run<'a> {
    Digits(&'a str),
    Text(&'a str),
}

struct Runs<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Runs<'a> {
    type Item = Run<'a>;

    fn next(&mut self) -> Option<Run<'a>> {
        let rest = self.rest;
        let first = rest.chars().next()?;
        let is_digit = first.is_ascii_digit();
        let end = rest
            .char_indices()
            .find(|(_, c)| c.is_ascii_digit() != is_digit)
            .map_or(rest.len(), |(i, _)| i);
        self.rest = &rest[end..];
        Some(if is_digit {
            Run::Digits(&rest[..end])
        } else {
            Run::Text(&rest[..end])
        })
    }
}

fn runs(value: &str) -> Runs<'_> {
    Runs { rest: value }
}

fn compare_digit_runs(lhs: &str, rhs: &str) -> Ordering {
    // Stripped length first, then lexical digits: numeric order without
    // parsing, so arbitrarily long runs cannot overflow.
    let lhs = lhs.trim_start_matches('0');
    let rhs = rhs.trim_start_matches('0');
    lhs.len().cmp(&rhs.len()).then_with(|| lhs.cmp(rhs))
}

fn compare_text_runs(lhs: &str, rhs: &str) -> Ordering {
    let lhs = lhs.chars().map(|c| c.to_ascii_lowercase());
    let rhs = rhs.chars().map(|c| c.to_ascii_lowercase());
    lhs.cmp(rhs)
}

fn compare_runs(lhs: Run<'_>, rhs: Run<'_>) -> Ordering {
    match (lhs, rhs) {
        (Run::Digits(l), Run::Digits(r)) => compare_digit_runs(l, r),
        (Run::Text(l), Run::Text(r)) => compare_text_runs(l, r),
        (Run::Digits(_), Run::Text(_)) => Ordering::Less,
        (Run::Text(_), Run::Digits(_)) => Ordering::Greater,
    }
}

/// Compare two labels in natural order: digit runs numerically, text runs
/// case-insensitively, digit runs before text runs at the same position.
///
/// Labels that only differ in case or leading zeros fall back to plain
/// lexical order, keeping the comparison a total order.
#[must_use]
pub fn natural_cmp(lhs: &str, rhs: &str) -> Ordering {
    let mut left = runs(lhs);
    let mut right = runs(rhs);
    loop {
        match (left.next(), right.next()) {
            (None, None) => return lhs.cmp(rhs),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) => match compare_runs(l, r) {
                Ordering::Equal => {}
                other => return other,
            },
        }
    }
}

/// Numeric rank embedded in a tier label: the value of its first digit run.
///
/// Returns `None` when the label carries no digit run (or one too large for
/// u128), which the pipeline treats as a contract violation.
#[must_use]
pub fn tier_rank(label: &str) -> Option<u128> {
    runs(label)
        .find_map(|run| match run {
            Run::Digits(digits) => Some(digits),
            Run::Text(_) => None,
        })?
        .parse()
        .ok()
}
