//! Formatting helpers for presenting payload figures.

use super::summary::PLACEHOLDER;

/// One decimal place, rounding halves up the way the page always displayed
/// them (Rust's `{:.1}` would round half-to-even).
pub fn format_percent(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    format!("{rounded:.1}%")
}

/// Average answer speed in seconds. Zero means "never measured".
pub fn format_speed(value: f64) -> String {
    if value > 0.0 {
        format!("{value:.1}s")
    } else {
        PLACEHOLDER.to_string()
    }
}

pub fn format_score(value: f64) -> String {
    if value > 0.0 {
        format!("{value:.1}")
    } else {
        PLACEHOLDER.to_string()
    }
}
