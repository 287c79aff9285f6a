//! Global tallies shown on top of the report.

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct WinStats {
    pub innocent: usize,
    pub traitor: usize,
    /// Everything that is neither a primary-team win: jester rounds,
    /// timelimit, unrecognized winner strings.
    pub other: usize,
}

/// Partitions the round set by winner. `innocent + traitor + other` always
/// equals the number of rounds.
pub fn win_stats(rounds: &[common::Round]) -> WinStats {
    let mut innocent = 0;
    let mut traitor = 0;

    for round in rounds {
        match round.winner.as_deref().map(|w| w.to_lowercase()).as_deref() {
            Some("innocents") => innocent += 1,
            Some("traitors") => traitor += 1,
            _ => {}
        }
    }

    WinStats {
        innocent,
        traitor,
        other: rounds.len() - innocent - traitor,
    }
}

/// Mean round duration in whole seconds, 0 for an empty round set.
pub fn average_duration(rounds: &[common::Round]) -> u64 {
    if rounds.is_empty() {
        return 0;
    }

    let total: u64 = rounds.iter().map(|r| r.duration).sum();
    (total as f64 / rounds.len() as f64).round() as u64
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Totals {
    pub rounds: usize,
    pub kills: usize,
    pub headshots: usize,
    pub headshot_rate: f64,
    pub players: usize,
}

pub fn totals(rounds: &[common::Round]) -> Totals {
    let mut kills = 0;
    let mut headshots = 0;
    let mut players = std::collections::BTreeSet::new();

    for round in rounds {
        kills += round.kills.len();
        headshots += round.kills.iter().filter(|k| k.headshot).count();
        for player in round.players.iter() {
            players.insert(player.steam_id.as_str());
        }
    }

    Totals {
        rounds: rounds.len(),
        kills,
        headshots,
        headshot_rate: crate::percentage(headshots, kills),
        players: players.len(),
    }
}
