#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct MapStats {
    pub map_name: String,
    pub rounds_played: usize,
    pub innocent_wins: usize,
    pub traitor_wins: usize,
}

/// Round counts and primary-team win counts per map, descending by rounds
/// played (ties alphabetical). Rounds without a map name land under
/// "unknown".
pub fn analyse(rounds: &[common::Round]) -> Vec<MapStats> {
    let mut table = std::collections::BTreeMap::<String, MapStats>::new();

    for round in rounds {
        let map_name = match round.map_name.as_deref() {
            Some(m) if !m.is_empty() => m.to_owned(),
            _ => "unknown".to_owned(),
        };

        let entry = table.entry(map_name.clone()).or_insert_with(|| MapStats {
            map_name,
            rounds_played: 0,
            innocent_wins: 0,
            traitor_wins: 0,
        });
        entry.rounds_played += 1;

        match round.winner.as_deref().map(|w| w.to_lowercase()).as_deref() {
            Some("innocents") => entry.innocent_wins += 1,
            Some("traitors") => entry.traitor_wins += 1,
            _ => {}
        }
    }

    let mut result: Vec<_> = table.into_values().collect();
    result.sort_by(|a, b| b.rounds_played.cmp(&a.rounds_played));
    result
}
