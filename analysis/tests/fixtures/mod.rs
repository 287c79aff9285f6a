#![allow(dead_code)]

use common::{Kill, Round, RoundPlayer};

/// 2023-01-01 is a Sunday, so `day_offset` doubles as the weekday index.
pub fn ts(day_offset: u64) -> chrono::NaiveDateTime {
    chrono::NaiveDate::from_ymd_opt(2023, 1, 1)
        .unwrap()
        .checked_add_days(chrono::Days::new(day_offset))
        .unwrap()
        .and_hms_opt(20, 30, 0)
        .unwrap()
}

pub fn round(id: &str, winner: Option<&str>, players: Vec<RoundPlayer>, kills: Vec<Kill>) -> Round {
    Round {
        id: id.to_owned(),
        map_name: Some("ttt_minecraft_b5".to_owned()),
        winner: winner.map(|w| w.to_owned()),
        duration: 300,
        timestamp: ts(0),
        kills,
        players,
        buys: Vec::new(),
    }
}

pub fn player(steam_id: &str, role: &str) -> RoundPlayer {
    RoundPlayer {
        steam_id: steam_id.to_owned(),
        role_start: Some(role.to_owned()),
        role_end: Some(role.to_owned()),
        karma_diff: None,
        points_diff: None,
    }
}

pub fn kill(
    attacker: Option<(&str, &str)>,
    victim: (&str, &str),
    weapon: Option<&str>,
    headshot: bool,
) -> Kill {
    Kill {
        attacker_steamid: attacker.map(|(id, _)| id.to_owned()),
        attacker_role: attacker.map(|(_, role)| role.to_owned()),
        victim_steamid: victim.0.to_owned(),
        victim_role: Some(victim.1.to_owned()),
        weapon: weapon.map(|w| w.to_owned()),
        headshot,
    }
}
