//! Numeric helpers shared by the generators and both sessions.
//!
//! Rounding and answer comparison live here so that a generator which rounds
//! an answer for display and a session which checks the user's input against
//! it always agree on the same rule.

/// Absolute tolerance for answer comparison.
pub const ANSWER_TOLERANCE: f64 = 0.001;

/// Round `value` to `places` decimal places, half away from zero.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// True when `value` is within [`ANSWER_TOLERANCE`] of `expected`.
pub fn answers_match(value: f64, expected: f64) -> bool {
    (value - expected).abs() < ANSWER_TOLERANCE
}

/// Render a number without a trailing `.0` for whole values (e.g. "11", "2.5").
pub fn format_number(value: f64) -> String {
    let rounded = round_to(value, 2);
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        let s = format!("{:.2}", rounded);
        s.trim_end_matches('0').to_string()
    }
}

/// Countdown display, `m:ss`.
pub fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Integer percentage `round(part / whole * 100)`, 0 when `whole` is 0.
pub fn percent(part: u32, whole: u32) -> u32 {
    if whole == 0 {
        return 0;
    }
    (part as f64 / whole as f64 * 100.0).round() as u32
}
