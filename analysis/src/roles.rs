//! Role taxonomy for the TTT game mode.
//!
//! Role identifiers arrive as free-form strings from the game server and are
//! classified into four fixed teams. Matching is case-insensitive; anything
//! outside the four sets (including a missing role) is [`Team::Unknown`].

pub static INNOCENT_ROLES: phf::Set<&'static str> = phf::phf_set! {
    "innocent", "detective", "deputy", "mercenary", "glitch", "phantom",
};

pub static TRAITOR_ROLES: phf::Set<&'static str> = phf::phf_set! {
    "traitor", "hypnotist", "impersonator", "assassin", "vampire", "zombie", "detraitor",
};

pub static JESTER_ROLES: phf::Set<&'static str> = phf::phf_set! {
    "jester", "swapper", "clown", "beggar",
};

pub static INDEPENDENT_ROLES: phf::Set<&'static str> = phf::phf_set! {
    "killer", "oldman", "drunk", "revenger",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    Innocent,
    Traitor,
    Jester,
    Independent,
    Unknown,
}

pub fn classify(role: Option<&str>) -> Team {
    let role = match role {
        Some(r) => r.to_lowercase(),
        None => return Team::Unknown,
    };

    if INNOCENT_ROLES.contains(role.as_str()) {
        Team::Innocent
    } else if TRAITOR_ROLES.contains(role.as_str()) {
        Team::Traitor
    } else if JESTER_ROLES.contains(role.as_str()) {
        Team::Jester
    } else if INDEPENDENT_ROLES.contains(role.as_str()) {
        Team::Independent
    } else {
        Team::Unknown
    }
}

pub fn is_innocent(role: Option<&str>) -> bool {
    classify(role) == Team::Innocent
}

pub fn is_traitor(role: Option<&str>) -> bool {
    classify(role) == Team::Traitor
}

/// A kill counts as a teamkill only within the two primary teams. Jesters and
/// independents have no shared win condition, so they never teamkill.
pub fn is_teamkill(attacker_role: Option<&str>, victim_role: Option<&str>) -> bool {
    matches!(
        (classify(attacker_role), classify(victim_role)),
        (Team::Innocent, Team::Innocent) | (Team::Traitor, Team::Traitor)
    )
}

/// Lowercased role name, with missing or empty roles collapsed to "unknown".
pub(crate) fn normalize(role: Option<&str>) -> String {
    match role {
        Some(r) if !r.is_empty() => r.to_lowercase(),
        _ => "unknown".to_owned(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct RoleCount {
    pub role: String,
    pub count: usize,
}

/// How often each starting role was handed out, across all rounds and
/// players. Descending by count, ties alphabetical.
pub fn distribution(rounds: &[common::Round]) -> Vec<RoleCount> {
    let mut counts = std::collections::BTreeMap::<String, usize>::new();

    for round in rounds {
        for player in round.players.iter() {
            *counts.entry(normalize(player.role_start.as_deref())).or_default() += 1;
        }
    }

    let mut result: Vec<_> = counts
        .into_iter()
        .map(|(role, count)| RoleCount { role, count })
        .collect();
    result.sort_by(|a, b| b.count.cmp(&a.count));
    result
}
