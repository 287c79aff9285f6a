//! Pairwise player metrics: teammate synergy, nemeses, rivalries, duos.
//!
//! Undirected pairs are keyed on the lexicographically smaller id first, so
//! `(a, b)` and `(b, a)` hit the same entry. Enumeration is O(n²) in the
//! round roster, which tops out at a few dozen players.

use crate::names::{display_name, NameResolver};
use crate::roles;

/// Pairs below this many shared rounds are dropped from the teammate tables.
pub const MIN_ROUNDS_TOGETHER: usize = 3;

fn pair_key(a: &str, b: &str) -> (String, String) {
    if a <= b {
        (a.to_owned(), b.to_owned())
    } else {
        (b.to_owned(), a.to_owned())
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct TeammatePair {
    pub player1: String,
    pub player1_name: String,
    pub player2: String,
    pub player2_name: String,
    pub rounds_together: usize,
    pub wins_together: usize,
    pub win_rate: f64,
}

/// Shared rounds and shared wins for every pair that ended up on the same
/// primary team. Jesters and independents have no team to share, so they
/// never pair up here; cross-team pairs are excluded as well.
///
/// The result is in canonical pair-key order and already filtered to
/// [`MIN_ROUNDS_TOGETHER`]; use [`best_teammates`] / [`worst_teammates`] for
/// the published orderings.
pub fn teammates(rounds: &[common::Round], names: &dyn NameResolver) -> Vec<TeammatePair> {
    let mut table = std::collections::BTreeMap::<(String, String), (usize, usize)>::new();

    for round in rounds {
        let winner = round.winner.as_deref().map(|w| w.to_lowercase());

        let innocents: Vec<_> = round
            .players
            .iter()
            .filter(|p| roles::is_innocent(p.role_start.as_deref()))
            .collect();
        let traitors: Vec<_> = round
            .players
            .iter()
            .filter(|p| roles::is_traitor(p.role_start.as_deref()))
            .collect();

        for (team, winner_value) in [(&innocents, "innocents"), (&traitors, "traitors")] {
            let won = winner.as_deref() == Some(winner_value);

            for i in 0..team.len() {
                for j in (i + 1)..team.len() {
                    let key = pair_key(&team[i].steam_id, &team[j].steam_id);
                    let entry = table.entry(key).or_default();
                    entry.0 += 1;
                    if won {
                        entry.1 += 1;
                    }
                }
            }
        }
    }

    table
        .into_iter()
        .filter(|(_, (rounds_together, _))| *rounds_together >= MIN_ROUNDS_TOGETHER)
        .map(|((player1, player2), (rounds_together, wins_together))| TeammatePair {
            player1_name: display_name(names, Some(&player1)),
            player2_name: display_name(names, Some(&player2)),
            player1,
            player2,
            rounds_together,
            wins_together,
            win_rate: crate::percentage(wins_together, rounds_together),
        })
        .collect()
}

/// Descending by win rate, ties broken by more shared rounds.
pub fn best_teammates(pairs: &[TeammatePair]) -> Vec<TeammatePair> {
    let mut result = pairs.to_vec();
    result.sort_by(|a, b| {
        b.win_rate
            .total_cmp(&a.win_rate)
            .then(b.rounds_together.cmp(&a.rounds_together))
    });
    result
}

/// Ascending by win rate, ties broken by more shared rounds.
pub fn worst_teammates(pairs: &[TeammatePair]) -> Vec<TeammatePair> {
    let mut result = pairs.to_vec();
    result.sort_by(|a, b| {
        a.win_rate
            .total_cmp(&b.win_rate)
            .then(b.rounds_together.cmp(&a.rounds_together))
    });
    result
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct NemesisPair {
    pub killer: String,
    pub killer_name: String,
    pub victim: String,
    pub victim_name: String,
    pub kills: usize,
    pub headshots: usize,
}

/// Directional kill tallies: who keeps killing whom. `(P, Q)` and `(Q, P)`
/// are distinct entries. World kills and self-kills are skipped. Descending
/// by kills.
pub fn nemesis_pairs(rounds: &[common::Round], names: &dyn NameResolver) -> Vec<NemesisPair> {
    let mut table = std::collections::BTreeMap::<(String, String), (usize, usize)>::new();

    for round in rounds {
        for kill in round.kills.iter() {
            let attacker = match kill.attacker_steamid.as_deref() {
                Some(a) if a != kill.victim_steamid => a,
                _ => continue,
            };

            let entry = table
                .entry((attacker.to_owned(), kill.victim_steamid.clone()))
                .or_default();
            entry.0 += 1;
            if kill.headshot {
                entry.1 += 1;
            }
        }
    }

    let mut result: Vec<_> = table
        .into_iter()
        .map(|((killer, victim), (kills, headshots))| NemesisPair {
            killer_name: display_name(names, Some(&killer)),
            victim_name: display_name(names, Some(&victim)),
            killer,
            victim,
            kills,
            headshots,
        })
        .collect();
    result.sort_by(|a, b| b.kills.cmp(&a.kills));
    result
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Rivalry {
    pub player1: String,
    pub player1_name: String,
    pub player2: String,
    pub player2_name: String,
    pub player1_kills: usize,
    pub player2_kills: usize,
    pub total_kills: usize,
}

/// Mutual kill tallies. A pair only qualifies once both sides have killed
/// the other at least once; one-sided farming stays in the nemesis table.
/// Descending by combined kills.
pub fn rivalries(rounds: &[common::Round], names: &dyn NameResolver) -> Vec<Rivalry> {
    let mut table = std::collections::BTreeMap::<(String, String), (usize, usize)>::new();

    for round in rounds {
        for kill in round.kills.iter() {
            let attacker = match kill.attacker_steamid.as_deref() {
                Some(a) if a != kill.victim_steamid => a,
                _ => continue,
            };

            let key = pair_key(attacker, &kill.victim_steamid);
            let entry = table.entry(key.clone()).or_default();
            if attacker == key.0 {
                entry.0 += 1;
            } else {
                entry.1 += 1;
            }
        }
    }

    let mut result: Vec<_> = table
        .into_iter()
        .filter(|(_, (p1_kills, p2_kills))| *p1_kills > 0 && *p2_kills > 0)
        .map(|((player1, player2), (player1_kills, player2_kills))| Rivalry {
            player1_name: display_name(names, Some(&player1)),
            player2_name: display_name(names, Some(&player2)),
            player1,
            player2,
            player1_kills,
            player2_kills,
            total_kills: player1_kills + player2_kills,
        })
        .collect();
    result.sort_by(|a, b| b.total_kills.cmp(&a.total_kills));
    result
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Duo {
    pub player1: String,
    pub player1_name: String,
    pub player2: String,
    pub player2_name: String,
    pub rounds_together: usize,
}

/// Who plays together most, regardless of team or outcome. Descending by
/// shared rounds.
pub fn frequent_duos(rounds: &[common::Round], names: &dyn NameResolver) -> Vec<Duo> {
    let mut table = std::collections::BTreeMap::<(String, String), usize>::new();

    for round in rounds {
        for i in 0..round.players.len() {
            for j in (i + 1)..round.players.len() {
                let key = pair_key(&round.players[i].steam_id, &round.players[j].steam_id);
                *table.entry(key).or_default() += 1;
            }
        }
    }

    let mut result: Vec<_> = table
        .into_iter()
        .map(|((player1, player2), rounds_together)| Duo {
            player1_name: display_name(names, Some(&player1)),
            player2_name: display_name(names, Some(&player2)),
            player1,
            player2,
            rounds_together,
        })
        .collect();
    result.sort_by(|a, b| b.rounds_together.cmp(&a.rounds_together));
    result
}
