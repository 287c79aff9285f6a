use analysis::roles::{self, Team};

use pretty_assertions::assert_eq;

mod fixtures;

#[test]
fn classify_covers_all_teams() {
    assert_eq!(roles::classify(Some("innocent")), Team::Innocent);
    assert_eq!(roles::classify(Some("detective")), Team::Innocent);
    assert_eq!(roles::classify(Some("phantom")), Team::Innocent);
    assert_eq!(roles::classify(Some("traitor")), Team::Traitor);
    assert_eq!(roles::classify(Some("detraitor")), Team::Traitor);
    assert_eq!(roles::classify(Some("jester")), Team::Jester);
    assert_eq!(roles::classify(Some("beggar")), Team::Jester);
    assert_eq!(roles::classify(Some("killer")), Team::Independent);
    assert_eq!(roles::classify(Some("oldman")), Team::Independent);
}

#[test]
fn classify_is_case_insensitive() {
    assert_eq!(roles::classify(Some("Innocent")), Team::Innocent);
    assert_eq!(roles::classify(Some("TRAITOR")), Team::Traitor);
    assert_eq!(roles::classify(Some("Jester")), Team::Jester);
}

#[test]
fn unknown_and_missing_roles() {
    assert_eq!(roles::classify(None), Team::Unknown);
    assert_eq!(roles::classify(Some("")), Team::Unknown);
    assert_eq!(roles::classify(Some("sheriff")), Team::Unknown);
}

#[test]
fn teamkill_only_within_primary_teams() {
    assert!(roles::is_teamkill(Some("innocent"), Some("detective")));
    assert!(roles::is_teamkill(Some("Traitor"), Some("hypnotist")));

    assert!(!roles::is_teamkill(Some("innocent"), Some("traitor")));
    assert!(!roles::is_teamkill(Some("jester"), Some("jester")));
    assert!(!roles::is_teamkill(Some("killer"), Some("killer")));
    assert!(!roles::is_teamkill(None, Some("innocent")));
    assert!(!roles::is_teamkill(Some("innocent"), None));
    assert!(!roles::is_teamkill(None, None));
}

#[test]
fn role_distribution_counts_and_sorts() {
    let rounds = vec![
        fixtures::round(
            "r1",
            Some("innocents"),
            vec![
                fixtures::player("a", "Innocent"),
                fixtures::player("b", "innocent"),
                fixtures::player("c", "Traitor"),
            ],
            vec![],
        ),
        fixtures::round(
            "r2",
            Some("traitors"),
            vec![
                fixtures::player("a", "innocent"),
                fixtures::player("b", "jester"),
            ],
            vec![],
        ),
    ];

    let result = roles::distribution(&rounds);

    let as_tuples: Vec<_> = result
        .iter()
        .map(|r| (r.role.as_str(), r.count))
        .collect();
    assert_eq!(
        as_tuples,
        vec![("innocent", 3), ("jester", 1), ("traitor", 1)]
    );
}

#[test]
fn missing_role_counts_as_unknown() {
    let mut nameless = fixtures::player("a", "innocent");
    nameless.role_start = None;

    let rounds = vec![fixtures::round("r1", None, vec![nameless], vec![])];

    let result = roles::distribution(&rounds);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].role, "unknown");
    assert_eq!(result[0].count, 1);
}
