//! Ranked views over the player table, with minimum-sample thresholds so a
//! lucky two-round visitor does not top every list.

use crate::players::PlayerStats;

pub const DEFAULT_TOP_N: usize = 5;
/// Rate-based rankings (kills per round, K/D, average karma) need this many
/// rounds played.
pub const MIN_ROUNDS_FOR_RATES: usize = 5;
/// Headshot rate needs this many kills.
pub const MIN_KILLS_FOR_HEADSHOT_RATE: usize = 10;

fn truncate<T>(mut entries: Vec<T>, limit: Option<usize>) -> Vec<T> {
    if let Some(limit) = limit {
        entries.truncate(limit);
    }
    entries
}

/// Kills per round, players with at least [`MIN_ROUNDS_FOR_RATES`] rounds.
/// `limit: None` returns the whole qualifying table ("show all").
pub fn top_killers(stats: &[PlayerStats], limit: Option<usize>) -> Vec<PlayerStats> {
    let mut result: Vec<_> = stats
        .iter()
        .filter(|p| p.rounds_played >= MIN_ROUNDS_FOR_RATES)
        .cloned()
        .collect();
    result.sort_by(|a, b| b.kills_per_round.total_cmp(&a.kills_per_round));
    truncate(result, limit)
}

pub fn best_kd(stats: &[PlayerStats], limit: Option<usize>) -> Vec<PlayerStats> {
    let mut result: Vec<_> = stats
        .iter()
        .filter(|p| p.rounds_played >= MIN_ROUNDS_FOR_RATES)
        .cloned()
        .collect();
    result.sort_by(|a, b| b.kd.total_cmp(&a.kd));
    truncate(result, limit)
}

pub fn best_headshot_rate(stats: &[PlayerStats], limit: Option<usize>) -> Vec<PlayerStats> {
    let mut result: Vec<_> = stats
        .iter()
        .filter(|p| p.kills >= MIN_KILLS_FOR_HEADSHOT_RATE)
        .cloned()
        .collect();
    result.sort_by(|a, b| b.headshot_rate.total_cmp(&a.headshot_rate));
    truncate(result, limit)
}

pub fn most_teamkills(stats: &[PlayerStats], limit: Option<usize>) -> Vec<PlayerStats> {
    let mut result: Vec<_> = stats.iter().filter(|p| p.teamkills > 0).cloned().collect();
    result.sort_by(|a, b| b.teamkills.cmp(&a.teamkills));
    truncate(result, limit)
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct KarmaPerRound {
    pub steam_id: String,
    pub display_name: String,
    pub rounds_played: usize,
    pub karma_total: i64,
    /// Cumulative karma / rounds played, 2 decimals.
    pub avg_karma: f64,
}

fn karma_table(stats: &[PlayerStats]) -> Vec<KarmaPerRound> {
    stats
        .iter()
        .filter(|p| p.rounds_played >= MIN_ROUNDS_FOR_RATES)
        .map(|p| KarmaPerRound {
            steam_id: p.steam_id.clone(),
            display_name: p.display_name.clone(),
            rounds_played: p.rounds_played,
            karma_total: p.karma_total,
            avg_karma: crate::round2(p.karma_total as f64 / p.rounds_played as f64),
        })
        .collect()
}

pub fn best_avg_karma(stats: &[PlayerStats], limit: Option<usize>) -> Vec<KarmaPerRound> {
    let mut result = karma_table(stats);
    result.sort_by(|a, b| b.avg_karma.total_cmp(&a.avg_karma));
    truncate(result, limit)
}

pub fn worst_avg_karma(stats: &[PlayerStats], limit: Option<usize>) -> Vec<KarmaPerRound> {
    let mut result = karma_table(stats);
    result.sort_by(|a, b| a.avg_karma.total_cmp(&b.avg_karma));
    truncate(result, limit)
}
