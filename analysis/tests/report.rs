use analysis::names::RawIds;
use analysis::report;

use pretty_assertions::assert_eq;

mod fixtures;

#[test]
fn empty_round_set_yields_empty_tables() {
    let result = report::generate(&[], &RawIds);

    assert_eq!(result.totals.rounds, 0);
    assert_eq!(result.totals.kills, 0);
    assert_eq!(result.totals.players, 0);
    assert_eq!(result.totals.headshot_rate, 0.0);
    assert_eq!(result.avg_round_duration, 0);
    assert_eq!(result.win_stats.innocent + result.win_stats.traitor + result.win_stats.other, 0);

    assert!(result.players.is_empty());
    assert!(result.weapons.is_empty());
    assert!(result.maps.is_empty());
    assert!(result.roles.is_empty());
    assert!(result.best_teammates.is_empty());
    assert!(result.worst_teammates.is_empty());
    assert!(result.nemesis_pairs.is_empty());
    assert!(result.rivalries.is_empty());
    assert!(result.frequent_duos.is_empty());
    assert!(result.top_killers.is_empty());
    assert!(result.best_avg_karma.is_empty());

    // The weekday buckets are the one table that is never sparse.
    assert_eq!(result.activity.len(), 7);
    assert!(result.activity.iter().all(|d| d.count == 0));
}

fn sample_rounds() -> Vec<common::Round> {
    let mut rounds = Vec::new();
    for i in 0..6u64 {
        let winner = if i % 2 == 0 { "innocents" } else { "traitors" };
        let mut round = fixtures::round(
            &format!("round-{}", i),
            Some(winner),
            vec![
                fixtures::player("a", "innocent"),
                fixtures::player("b", "detective"),
                fixtures::player("c", "traitor"),
                fixtures::player("d", "jester"),
            ],
            vec![
                fixtures::kill(Some(("c", "traitor")), ("a", "innocent"), Some("ak47"), i % 3 == 0),
                fixtures::kill(Some(("a", "innocent")), ("c", "traitor"), Some("deagle"), false),
            ],
        );
        round.timestamp = fixtures::ts(i % 7);
        round.duration = 200 + i * 10;
        rounds.push(round);
    }
    rounds
}

#[test]
fn full_report_is_idempotent() {
    let rounds = sample_rounds();

    let first = report::generate(&rounds, &RawIds);
    let second = report::generate(&rounds, &RawIds);

    assert_eq!(first, second);
}

#[test]
fn report_tables_are_consistent_with_each_other() {
    let rounds = sample_rounds();
    let result = report::generate(&rounds, &RawIds);

    assert_eq!(result.totals.rounds, rounds.len());
    assert_eq!(
        result.win_stats.innocent + result.win_stats.traitor + result.win_stats.other,
        result.totals.rounds
    );
    assert_eq!(
        result.activity.iter().map(|d| d.count).sum::<usize>(),
        result.totals.rounds
    );
    assert_eq!(
        result.players.iter().map(|p| p.kills).sum::<usize>(),
        result.totals.kills
    );
    assert_eq!(
        result.weapons.iter().map(|w| w.kills).sum::<usize>(),
        result.totals.kills
    );
    assert_eq!(
        result.roles.iter().map(|r| r.count).sum::<usize>(),
        rounds.len() * 4
    );

    // a and c trade kills every round: a mutual rivalry, two nemesis rows.
    assert_eq!(result.nemesis_pairs.len(), 2);
    assert_eq!(result.rivalries.len(), 1);
    assert_eq!(result.rivalries[0].total_kills, result.totals.kills);

    // 4 players, all pairs share all 6 rounds.
    assert_eq!(result.frequent_duos.len(), 6);
    assert!(result.frequent_duos.iter().all(|d| d.rounds_together == 6));

    // a and b share the innocent team every round and win half.
    assert_eq!(result.best_teammates.len(), 1);
    assert_eq!(result.best_teammates[0].win_rate, 50.0);
    assert_eq!(result.best_teammates, result.worst_teammates);
}

#[test]
fn report_serializes_to_json() {
    let rounds = sample_rounds();
    let result = report::generate(&rounds, &RawIds);

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["totals"]["rounds"], 6);
    assert_eq!(json["activity"].as_array().unwrap().len(), 7);
    assert!(json["players"].as_array().unwrap().len() >= 4);
}
