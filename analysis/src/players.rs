//! Per-player statistics, folded over the full round history.

use crate::names::{display_name, NameResolver};
use crate::roles;

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct PlayerStats {
    pub steam_id: String,
    pub display_name: String,
    pub rounds_played: usize,
    pub kills: usize,
    pub deaths: usize,
    pub headshots: usize,
    /// Kills / deaths, 2 decimals. Equals the raw kill count while the player
    /// has no deaths.
    pub kd: f64,
    pub headshot_rate: f64,
    pub wins_as_innocent: usize,
    pub wins_as_traitor: usize,
    pub total_wins: usize,
    pub win_rate: f64,
    /// Weapon with the most kills for this player, ties going to the weapon
    /// seen first in the kill log. Empty string without any kills.
    pub favorite_weapon: String,
    pub items_bought: usize,
    pub karma_total: i64,
    pub points_total: i64,
    pub roles_played: std::collections::BTreeMap<String, usize>,
    pub kills_per_round: f64,
    pub teamkills: usize,
}

#[derive(Default)]
struct Accumulator {
    rounds_played: usize,
    kills: usize,
    deaths: usize,
    headshots: usize,
    wins_as_innocent: usize,
    wins_as_traitor: usize,
    items_bought: usize,
    karma_total: i64,
    points_total: i64,
    roles_played: std::collections::BTreeMap<String, usize>,
    teamkills: usize,
    // weapon name -> (kills, first-seen index). The explicit index keeps the
    // favorite-weapon tie-break deterministic without relying on map
    // iteration order.
    weapon_kills: std::collections::BTreeMap<String, (usize, usize)>,
    weapons_seen: usize,
}

impl Accumulator {
    fn record_weapon(&mut self, weapon: String) {
        let next_index = self.weapons_seen;
        let entry = self.weapon_kills.entry(weapon).or_insert_with(|| {
            (0, next_index)
        });
        entry.0 += 1;
        self.weapons_seen += 1;
    }

    fn favorite_weapon(&self) -> String {
        let mut best: Option<(&str, usize, usize)> = None;
        for (weapon, (kills, first_seen)) in self.weapon_kills.iter() {
            let better = match best {
                Some((_, best_kills, best_seen)) => {
                    *kills > best_kills || (*kills == best_kills && *first_seen < best_seen)
                }
                None => true,
            };
            if better {
                best = Some((weapon.as_str(), *kills, *first_seen));
            }
        }
        best.map(|(weapon, _, _)| weapon.to_owned()).unwrap_or_default()
    }
}

/// Builds the full player table, sorted descending by kill count (ties by
/// steam id).
///
/// Kill/death/buy events referencing an id that never appears in any round's
/// player list are skipped rather than rejected; the round set comes from an
/// external collector and may reference spectators or long-gone players.
pub fn analyse(rounds: &[common::Round], names: &dyn NameResolver) -> Vec<PlayerStats> {
    let mut table = std::collections::BTreeMap::<String, Accumulator>::new();

    // Register every participant first, so a kill in an early round by a
    // player whose roster entry only shows up later still counts for them.
    for round in rounds {
        for player in round.players.iter() {
            table.entry(player.steam_id.clone()).or_default();
        }
    }

    for round in rounds {
        let winner = round.winner.as_deref().map(|w| w.to_lowercase());

        for player in round.players.iter() {
            let stats = match table.get_mut(&player.steam_id) {
                Some(s) => s,
                None => continue,
            };
            stats.rounds_played += 1;

            let role = player.role_start.as_deref();
            *stats.roles_played.entry(roles::normalize(role)).or_default() += 1;

            if let Some(karma) = player.karma_diff {
                stats.karma_total += karma;
            }
            if let Some(points) = player.points_diff {
                stats.points_total += points;
            }

            // Only the two primary teams accrue wins; jester and independent
            // round winners are counted under "other" globally.
            match winner.as_deref() {
                Some("innocents") if roles::is_innocent(role) => stats.wins_as_innocent += 1,
                Some("traitors") if roles::is_traitor(role) => stats.wins_as_traitor += 1,
                _ => {}
            }
        }

        for kill in round.kills.iter() {
            if let Some(attacker) = kill.attacker_steamid.as_deref() {
                if let Some(stats) = table.get_mut(attacker) {
                    stats.kills += 1;
                    if kill.headshot {
                        stats.headshots += 1;
                    }
                    stats.record_weapon(crate::weapons::weapon_name(kill.weapon.as_deref()));

                    if roles::is_teamkill(kill.attacker_role.as_deref(), kill.victim_role.as_deref())
                    {
                        stats.teamkills += 1;
                    }
                }
            }

            if let Some(stats) = table.get_mut(&kill.victim_steamid) {
                stats.deaths += 1;
            }
        }

        for buy in round.buys.iter() {
            if let Some(stats) = table.get_mut(&buy.steam_id) {
                stats.items_bought += 1;
            }
        }
    }

    let mut result: Vec<_> = table
        .into_iter()
        .map(|(steam_id, acc)| {
            let total_wins = acc.wins_as_innocent + acc.wins_as_traitor;
            let kd = if acc.deaths > 0 {
                crate::round2(acc.kills as f64 / acc.deaths as f64)
            } else {
                acc.kills as f64
            };
            let kills_per_round = if acc.rounds_played > 0 {
                crate::round2(acc.kills as f64 / acc.rounds_played as f64)
            } else {
                0.0
            };

            PlayerStats {
                display_name: display_name(names, Some(&steam_id)),
                steam_id,
                rounds_played: acc.rounds_played,
                kills: acc.kills,
                deaths: acc.deaths,
                headshots: acc.headshots,
                kd,
                headshot_rate: crate::percentage(acc.headshots, acc.kills),
                wins_as_innocent: acc.wins_as_innocent,
                wins_as_traitor: acc.wins_as_traitor,
                total_wins,
                win_rate: crate::percentage(total_wins, acc.rounds_played),
                favorite_weapon: acc.favorite_weapon(),
                items_bought: acc.items_bought,
                karma_total: acc.karma_total,
                points_total: acc.points_total,
                roles_played: acc.roles_played,
                kills_per_round,
                teamkills: acc.teamkills,
            }
        })
        .collect();

    result.sort_by(|a, b| b.kills.cmp(&a.kills));
    result
}
