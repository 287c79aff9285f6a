#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct WeaponStats {
    pub weapon: String,
    pub kills: usize,
    pub headshots: usize,
    pub headshot_rate: f64,
}

/// Sentinel used when the kill log carries no usable weapon identifier.
pub(crate) fn weapon_name(weapon: Option<&str>) -> String {
    match weapon {
        Some(w) if !w.is_empty() => w.to_owned(),
        _ => "unknown".to_owned(),
    }
}

/// Kill and headshot counts per weapon across all rounds, descending by
/// kills (ties alphabetical).
pub fn analyse(rounds: &[common::Round]) -> Vec<WeaponStats> {
    let mut table = std::collections::BTreeMap::<String, (usize, usize)>::new();

    for round in rounds {
        for kill in round.kills.iter() {
            let entry = table.entry(weapon_name(kill.weapon.as_deref())).or_default();
            entry.0 += 1;
            if kill.headshot {
                entry.1 += 1;
            }
        }
    }

    let mut result: Vec<_> = table
        .into_iter()
        .map(|(weapon, (kills, headshots))| WeaponStats {
            weapon,
            kills,
            headshots,
            headshot_rate: crate::percentage(headshots, kills),
        })
        .collect();
    result.sort_by(|a, b| b.kills.cmp(&a.kills));
    result
}
