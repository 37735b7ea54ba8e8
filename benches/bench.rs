use criterion::{black_box, criterion_group, criterion_main, Criterion};
use csgo_match_summary::{parse, raw_events, RawEventType};
use std::fmt::Write;
use std::time::Duration;

fn generate_log(rounds: usize) -> String {
    let mut log = String::new();
    for id in 2..12 {
        write!(
            log,
            "adding:player info:\n xuid:7656119800000{id}\n name:player{id}\n userID:{id}\n guid:STEAM_1:0:{id}\n"
        )
        .unwrap();
    }
    for round in 0..rounds {
        for id in 2..12 {
            let team = if id < 7 { "T" } else { "CT" };
            for _ in 0..20 {
                write!(
                    log,
                    "weapon_fire\n{{\n userid: player{id} (id:{id})\n weapon: weapon_ak47\n silenced: 0\n team: {team}\n}}\n"
                )
                .unwrap();
            }
        }
        let winner = 2 + round % 2;
        let mvp = 2 + round % 10;
        write!(
            log,
            "round_end\n{{\n winner: {winner}\n reason: 8\n}}\nround_mvp\n{{\n userid: player{mvp} (id:{mvp})\n reason: 1\n}}\n"
        )
        .unwrap();
    }
    log
}

pub fn parse_benchmark(c: &mut Criterion) {
    let input = generate_log(30);
    c.bench_function("parse 30 rounds", |b| b.iter(|| parse(black_box(&input))));
}

pub fn classify_lines(c: &mut Criterion) {
    let input = generate_log(30);
    let lines: Vec<&str> = input.lines().collect();
    c.bench_function("classify 30 rounds", |b| {
        b.iter(|| {
            raw_events(black_box(&lines))
                .filter(|raw| raw.ty != RawEventType::Unknown)
                .count()
        })
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default().measurement_time(Duration::from_secs(10));
    targets = parse_benchmark, classify_lines);
criterion_main!(benches);
