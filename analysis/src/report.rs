//! One entry point producing every published table in a single pass over
//! the round set.

use crate::names::NameResolver;
use crate::{activity, leaderboards, maps, overview, pairs, players, roles, weapons};

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Report {
    pub totals: overview::Totals,
    pub win_stats: overview::WinStats,
    pub avg_round_duration: u64,

    pub players: Vec<players::PlayerStats>,
    pub weapons: Vec<weapons::WeaponStats>,
    pub maps: Vec<maps::MapStats>,
    pub activity: Vec<activity::DayActivity>,
    pub roles: Vec<roles::RoleCount>,

    pub best_teammates: Vec<pairs::TeammatePair>,
    pub worst_teammates: Vec<pairs::TeammatePair>,
    pub nemesis_pairs: Vec<pairs::NemesisPair>,
    pub rivalries: Vec<pairs::Rivalry>,
    pub frequent_duos: Vec<pairs::Duo>,

    pub top_killers: Vec<players::PlayerStats>,
    pub best_kd: Vec<players::PlayerStats>,
    pub best_headshot_rate: Vec<players::PlayerStats>,
    pub most_teamkills: Vec<players::PlayerStats>,
    pub best_avg_karma: Vec<leaderboards::KarmaPerRound>,
    pub worst_avg_karma: Vec<leaderboards::KarmaPerRound>,
}

/// Runs every aggregator over `rounds` and assembles the full report.
///
/// Each aggregator reads only the raw round set, so the whole pass is a pure
/// function: the same rounds and name mappings produce an identical report,
/// sort orders included. Leaderboards are cut to
/// [`leaderboards::DEFAULT_TOP_N`]; callers wanting the full tables call the
/// individual leaderboard functions with `limit: None`.
pub fn generate(rounds: &[common::Round], names: &dyn NameResolver) -> Report {
    tracing::debug!(rounds = rounds.len(), "Generating report");

    let player_table = players::analyse(rounds, names);
    let teammate_table = pairs::teammates(rounds, names);
    let top_n = Some(leaderboards::DEFAULT_TOP_N);

    Report {
        totals: overview::totals(rounds),
        win_stats: overview::win_stats(rounds),
        avg_round_duration: overview::average_duration(rounds),

        weapons: weapons::analyse(rounds),
        maps: maps::analyse(rounds),
        activity: activity::analyse(rounds),
        roles: roles::distribution(rounds),

        best_teammates: pairs::best_teammates(&teammate_table),
        worst_teammates: pairs::worst_teammates(&teammate_table),
        nemesis_pairs: pairs::nemesis_pairs(rounds, names),
        rivalries: pairs::rivalries(rounds, names),
        frequent_duos: pairs::frequent_duos(rounds, names),

        top_killers: leaderboards::top_killers(&player_table, top_n),
        best_kd: leaderboards::best_kd(&player_table, top_n),
        best_headshot_rate: leaderboards::best_headshot_rate(&player_table, top_n),
        most_teamkills: leaderboards::most_teamkills(&player_table, top_n),
        best_avg_karma: leaderboards::best_avg_karma(&player_table, top_n),
        worst_avg_karma: leaderboards::worst_avg_karma(&player_table, top_n),

        players: player_table,
    }
}
