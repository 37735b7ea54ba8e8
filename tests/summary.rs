use csgo_match_summary::{parse, parse_lines, Error, HalfScore, Side, SideScore};
use std::fs::read_to_string;
use test_case::test_case;

fn join(nickname: &str, user_id: u8, guid: &str) -> Vec<String> {
    vec![
        "adding:player info:".into(),
        " xuid:76561198000000000".into(),
        format!(" name:{}", nickname),
        format!(" userID:{}", user_id),
        format!(" guid:{}", guid),
    ]
}

fn weapon_fire(nickname: &str, user_id: u8, team: &str) -> Vec<String> {
    vec![
        "weapon_fire".into(),
        "{".into(),
        format!(" userid: {} (id:{})", nickname, user_id),
        " weapon: weapon_m4a1".into(),
        " silenced: 0".into(),
        format!(" team: {}", team),
        "}".into(),
    ]
}

fn round_mvp(nickname: &str, user_id: u8) -> Vec<String> {
    vec![
        "round_mvp".into(),
        "{".into(),
        format!(" userid: {} (id:{})", nickname, user_id),
        " reason: 1".into(),
        "}".into(),
    ]
}

fn round_end(winner: &str) -> Vec<String> {
    vec![
        "round_end".into(),
        "{".into(),
        format!(" winner: {}", winner),
        " reason: 9".into(),
        "}".into(),
    ]
}

fn log(parts: Vec<Vec<String>>) -> String {
    parts.concat().join("\n")
}

#[test]
fn test_sample_match() {
    let content = read_to_string("tests/data/match.log").unwrap();
    let summary = parse(&content).unwrap();
    insta::assert_json_snapshot!("match", summary);
}

#[test]
fn test_end_to_end() {
    let summary = parse(&log(vec![
        join("kennyS", 3, "STEAM_1:0:3333"),
        weapon_fire("kennyS", 3, "CT"),
        round_mvp("kennyS", 3),
        round_end("2"),
        round_end("3"),
    ]))
    .unwrap();

    assert_eq!(1, summary.players.len());
    let player = &summary.players[0];
    assert_eq!("kennyS", player.nickname);
    assert_eq!("STEAM_1:0:3333", player.steam_id);
    assert_eq!("CT", player.initial_side);
    assert_eq!(1, player.mvp_count);

    assert_eq!(vec![Side::T, Side::CT], summary.score.win_sequence);
    assert_eq!(
        HalfScore {
            terrorists: 1,
            counter_terrorists: 1
        },
        summary.score.first_half
    );
    assert_eq!(HalfScore::default(), summary.score.second_half);
    assert_eq!(
        SideScore {
            terrorists: 1,
            counter_terrorists: 1
        },
        summary.score.overall
    );
}

#[test]
fn test_bots_are_never_candidates() {
    let summary = parse(&log(vec![
        join("BOT Ivan", 7, "BOT"),
        weapon_fire("BOT Ivan", 7, "T"),
        round_mvp("BOT Ivan", 7),
    ]))
    .unwrap();
    assert!(summary.players.is_empty());
}

#[test]
fn test_mvp_without_play_is_dropped() {
    let summary = parse(&log(vec![
        join("spectator", 2, "STEAM_1:1:2"),
        join("player", 3, "STEAM_1:1:3"),
        weapon_fire("player", 3, "T"),
        round_mvp("spectator", 2),
        round_mvp("player", 3),
        round_mvp("player", 3),
        round_mvp("ghost", 9),
    ]))
    .unwrap();
    assert_eq!(1, summary.players.len());
    assert_eq!("player", summary.players[0].nickname);
    assert_eq!(2, summary.players[0].mvp_count);
}

#[test]
fn test_all_unplayed_candidates_removed() {
    let summary = parse(&log(vec![
        join("a", 2, "STEAM_1:1:2"),
        join("b", 3, "STEAM_1:1:3"),
        join("c", 4, "STEAM_1:1:4"),
        weapon_fire("c", 4, "CT"),
    ]))
    .unwrap();
    let names: Vec<_> = summary.players.iter().map(|p| p.nickname.as_str()).collect();
    assert_eq!(vec!["c"], names);
}

#[test]
fn test_duplicate_candidates_all_updated() {
    let summary = parse(&log(vec![
        join("twin", 2, "STEAM_1:0:21"),
        join("twin", 2, "STEAM_1:0:22"),
        weapon_fire("twin", 2, "T"),
        round_mvp("twin", 2),
    ]))
    .unwrap();
    let players: Vec<_> = summary
        .players
        .iter()
        .map(|p| (p.steam_id.as_str(), p.initial_side.as_str(), p.mvp_count))
        .collect();
    assert_eq!(
        vec![("STEAM_1:0:21", "T", 1), ("STEAM_1:0:22", "T", 1)],
        players
    );
}

#[test_case(15, 0, (15, 0), (0, 0) ; "full first half")]
#[test_case(16, 0, (15, 0), (1, 0) ; "first round of second half")]
#[test_case(15, 15, (15, 0), (0, 15) ; "side swap")]
#[test_case(0, 0, (0, 0), (0, 0) ; "no rounds")]
fn test_half_split(t_rounds: usize, ct_rounds: usize, first: (u32, u32), second: (u32, u32)) {
    let rounds = std::iter::repeat(round_end("2"))
        .take(t_rounds)
        .chain(std::iter::repeat(round_end("3")).take(ct_rounds))
        .collect();
    let score = parse(&log(rounds)).unwrap().score;
    assert_eq!(first, (score.first_half.terrorists, score.first_half.counter_terrorists));
    assert_eq!(
        second,
        (score.second_half.terrorists, score.second_half.counter_terrorists)
    );
    // the team that started as T keeps its T wins and collects its CT wins after the swap
    assert_eq!(first.0 + second.1, score.overall.terrorists);
    assert_eq!(first.1 + second.0, score.overall.counter_terrorists);
}

#[test_case("2", Side::T)]
#[test_case("3", Side::CT)]
#[test_case("0", Side::Unknown)]
#[test_case("", Side::Unknown)]
#[test_case("CT", Side::Unknown)]
fn test_winner_mapping(code: &str, side: Side) {
    let score = parse(&log(vec![round_end(code)])).unwrap().score;
    assert_eq!(vec![side], score.win_sequence);
}

#[test_case(&["adding:player info:", " xuid:1", " name:cut"] ; "truncated join")]
#[test_case(&["round_mvp", "{"] ; "truncated mvp")]
#[test_case(&["x", "round_end"] ; "truncated round end")]
fn test_truncated_log(lines: &[&str]) {
    assert!(matches!(parse_lines(lines), Err(Error::Truncated { .. })));
}

#[test]
fn test_unknown_lines_ignored() {
    let summary = parse("server_cvar\n{\n name: mp_maxrounds\n value: 30\n}\n").unwrap();
    assert!(summary.players.is_empty());
    assert!(summary.score.win_sequence.is_empty());
}

#[test]
fn test_crlf_lines() {
    let content = log(vec![
        join("flusha", 5, "STEAM_1:0:5"),
        weapon_fire("flusha", 5, "T"),
        round_end("3"),
    ])
    .replace('\n', "\r\n");
    let summary = parse(&content).unwrap();
    assert_eq!("T", summary.players[0].initial_side);
    assert_eq!(vec![Side::CT], summary.score.win_sequence);
}
