//! Quantity parsing
//!
//! Turns human-written amounts ("2", "1.5", "1/4", "1 1/2", "2-3") into numbers.

use std::sync::LazyLock;

use regex::Regex;

static MIXED_FRACTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\s+(\d+)/(\d+)$").expect("valid mixed fraction pattern"));

static SIMPLE_FRACTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)/(\d+)$").expect("valid fraction pattern"));

/// Parse a written quantity. Never fails: anything unparsable is 0.
///
/// Rules, in order:
/// - empty → 0
/// - `a-b` where both sides parse → mean of the two ("2-3" → 2.5)
/// - `w n/d` → w + n/d
/// - `n/d` → n/d
/// - decimal number
///
/// A zero denominator makes the fraction unparsable. A leading minus
/// ("-2") has an empty left side, so it is read as a negative decimal.
pub fn parse_quantity(text: &str) -> f64 {
    try_parse_quantity(text).unwrap_or(0.0)
}

fn try_parse_quantity(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some((low, high)) = trimmed.split_once('-') {
        if let (Some(low), Some(high)) = (try_parse_quantity(low), try_parse_quantity(high)) {
            return Some((low + high) / 2.0);
        }
    }

    if let Some(caps) = MIXED_FRACTION.captures(trimmed) {
        let whole: f64 = caps[1].parse().ok()?;
        return fraction(&caps[2], &caps[3]).map(|f| whole + f);
    }

    if let Some(caps) = SIMPLE_FRACTION.captures(trimmed) {
        return fraction(&caps[1], &caps[2]);
    }

    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn fraction(numerator: &str, denominator: &str) -> Option<f64> {
    let numerator: f64 = numerator.parse().ok()?;
    let denominator: f64 = denominator.parse().ok()?;
    if denominator == 0.0 {
        return None;
    }
    Some(numerator / denominator)
}
