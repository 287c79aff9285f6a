//! Aggregation engine for completed TTT rounds.
//!
//! Every module takes an immutable slice of [`common::Round`] records and
//! folds it into one derived table. The modules are independent of each
//! other; [`report::generate`] runs all of them and bundles the results.
//! Identical input always produces identical output, including sort order.

pub mod activity;
pub mod leaderboards;
pub mod maps;
pub mod names;
pub mod overview;
pub mod pairs;
pub mod players;
pub mod report;
pub mod roles;
pub mod weapons;

/// Rounds to 2 decimal places, matching the collector's presentation rules.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Percentage with 1 decimal place, 0 when the denominator is 0.
pub(crate) fn percentage(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    ((numerator as f64 / denominator as f64) * 1000.0).round() / 10.0
}
