fn main() {
    divan::main();
}

const ROLES: [&str; 8] = [
    "innocent", "innocent", "innocent", "detective", "innocent", "traitor", "traitor", "jester",
];
const WEAPONS: [&str; 5] = ["ak47", "deagle", "m16", "knife", "crowbar"];

/// Deterministic synthetic round history, sized like a few months of play.
fn synthetic_rounds(count: usize) -> Vec<common::Round> {
    let ids: Vec<String> = (0..12).map(|n| format!("STEAM_0:0:{}", 10000 + n)).collect();
    let base = chrono::NaiveDate::from_ymd_opt(2025, 1, 1)
        .unwrap()
        .and_hms_opt(19, 0, 0)
        .unwrap();

    (0..count)
        .map(|i| {
            let roster: Vec<_> = (0..8).map(|p| &ids[(i + p) % ids.len()]).collect();

            let players = roster
                .iter()
                .enumerate()
                .map(|(p, id)| common::RoundPlayer {
                    steam_id: (*id).clone(),
                    role_start: Some(ROLES[p].to_owned()),
                    role_end: Some(ROLES[p].to_owned()),
                    karma_diff: Some((i as i64 % 11) - 5),
                    points_diff: Some(p as i64),
                })
                .collect();

            let kills = (0..6)
                .map(|k| common::Kill {
                    attacker_steamid: Some(roster[(i + k) % roster.len()].clone()),
                    attacker_role: Some(ROLES[(i + k) % roster.len()].to_owned()),
                    victim_steamid: roster[(i + k + 1) % roster.len()].clone(),
                    victim_role: Some(ROLES[(i + k + 1) % roster.len()].to_owned()),
                    weapon: Some(WEAPONS[(i * 7 + k) % WEAPONS.len()].to_owned()),
                    headshot: (i + k) % 3 == 0,
                })
                .collect();

            common::Round {
                id: format!("round-{}", i),
                map_name: Some(format!("ttt_map_{}", i % 9)),
                winner: Some(
                    ["innocents", "traitors", "innocents", "timelimit"][i % 4].to_owned(),
                ),
                duration: 120 + (i as u64 % 300),
                timestamp: base + chrono::Duration::hours(i as i64 * 7),
                kills,
                players,
                buys: Vec::new(),
            }
        })
        .collect()
}

#[divan::bench(args = [100, 1000, 5000])]
fn full_report(bencher: divan::Bencher, rounds: usize) {
    let data = synthetic_rounds(rounds);

    bencher.bench(|| {
        analysis::report::generate(divan::black_box(&data), &analysis::names::RawIds)
    });
}

#[divan::bench(args = [100, 1000, 5000])]
fn player_table(bencher: divan::Bencher, rounds: usize) {
    let data = synthetic_rounds(rounds);

    bencher.bench(|| analysis::players::analyse(divan::black_box(&data), &analysis::names::RawIds));
}

#[divan::bench(args = [100, 1000, 5000])]
fn pairwise_tables(bencher: divan::Bencher, rounds: usize) {
    let data = synthetic_rounds(rounds);

    bencher.bench(|| {
        (
            analysis::pairs::teammates(divan::black_box(&data), &analysis::names::RawIds),
            analysis::pairs::frequent_duos(divan::black_box(&data), &analysis::names::RawIds),
        )
    });
}
