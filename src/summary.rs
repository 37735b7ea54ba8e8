use serde::{Serialize, Serializer};
use std::fmt::{Display, Formatter};

/// Number of rounds in the first half, later rounds count towards the second half
pub const HALF_LENGTH: usize = 15;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Side {
    T,
    CT,
    Unknown,
}

impl Side {
    /// Map the numeric team code of a `winner:` line
    pub fn from_winner_code(code: &str) -> Self {
        match code {
            "2" => Side::T,
            "3" => Side::CT,
            _ => Side::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::T => "T",
            Side::CT => "CT",
            Side::Unknown => "?",
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.as_str().fmt(f)
    }
}

impl Serialize for Side {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// Rounds won over the whole match, keyed by the team that started on each side
#[derive(Debug, Default, Serialize, PartialEq, Eq, Clone, Copy)]
pub struct SideScore {
    #[serde(rename = "T")]
    pub terrorists: u32,
    #[serde(rename = "CT")]
    pub counter_terrorists: u32,
}

#[derive(Debug, Default, Serialize, PartialEq, Eq, Clone, Copy)]
pub struct HalfScore {
    pub terrorists: u32,
    #[serde(rename = "counterterrorists")]
    pub counter_terrorists: u32,
}

impl HalfScore {
    fn add(&mut self, winner: Side) {
        match winner {
            Side::T => self.terrorists += 1,
            Side::CT => self.counter_terrorists += 1,
            Side::Unknown => {}
        }
    }
}

#[derive(Debug, Default, Serialize, PartialEq, Eq, Clone)]
pub struct ScoreBoard {
    pub overall: SideScore,
    #[serde(rename = "firsthalf")]
    pub first_half: HalfScore,
    #[serde(rename = "secondhalf")]
    pub second_half: HalfScore,
    #[serde(rename = "winsequence")]
    pub win_sequence: Vec<Side>,
}

impl ScoreBoard {
    /// Derive the half and overall scores from the round winners.
    ///
    /// Teams swap sides at halftime, so the overall score of the team that started as T
    /// is its first half T wins plus its second half CT wins, and vice versa.
    pub fn count_rounds(win_sequence: Vec<Side>) -> Self {
        let mut first_half = HalfScore::default();
        let mut second_half = HalfScore::default();
        for (round, winner) in win_sequence.iter().enumerate() {
            if round < HALF_LENGTH {
                first_half.add(*winner);
            } else {
                second_half.add(*winner);
            }
        }

        ScoreBoard {
            overall: SideScore {
                terrorists: first_half.terrorists + second_half.counter_terrorists,
                counter_terrorists: first_half.counter_terrorists + second_half.terrorists,
            },
            first_half,
            second_half,
            win_sequence,
        }
    }
}

#[derive(Debug, Default, Serialize, PartialEq, Eq, Clone)]
pub struct PlayerRecord {
    #[serde(skip)]
    pub played: bool,
    #[serde(rename = "mvps")]
    pub mvp_count: u32,
    pub nickname: String,
    #[serde(rename = "steamid")]
    pub steam_id: String,
    #[serde(skip)]
    pub user_id: String,
    #[serde(rename = "team")]
    pub initial_side: String,
}

#[derive(Debug, Default, Serialize, PartialEq, Eq, Clone)]
pub struct MatchSummary {
    pub score: ScoreBoard,
    pub players: Vec<PlayerRecord>,
}

#[cfg(test)]
fn rounds(t: usize, ct: usize) -> Vec<Side> {
    std::iter::repeat(Side::T)
        .take(t)
        .chain(std::iter::repeat(Side::CT).take(ct))
        .collect()
}

#[test]
fn test_winner_code() {
    assert_eq!(Side::T, Side::from_winner_code("2"));
    assert_eq!(Side::CT, Side::from_winner_code("3"));
    assert_eq!(Side::Unknown, Side::from_winner_code("1"));
    assert_eq!(Side::Unknown, Side::from_winner_code(""));
    assert_eq!(Side::Unknown, Side::from_winner_code(" 2"));
}

#[test]
fn test_first_half_boundary() {
    let score = ScoreBoard::count_rounds(rounds(15, 0));
    assert_eq!(15, score.first_half.terrorists);
    assert_eq!(HalfScore::default(), score.second_half);

    let score = ScoreBoard::count_rounds(rounds(15, 1));
    assert_eq!(15, score.first_half.terrorists);
    assert_eq!(0, score.first_half.counter_terrorists);
    assert_eq!(1, score.second_half.counter_terrorists);
}

#[test]
fn test_overall_crosses_halves() {
    let score = ScoreBoard::count_rounds(rounds(15, 15));
    assert_eq!(
        SideScore {
            terrorists: 30,
            counter_terrorists: 0
        },
        score.overall
    );
}

#[test]
fn test_unknown_winner_not_counted() {
    let score = ScoreBoard::count_rounds(vec![Side::Unknown, Side::T, Side::Unknown]);
    assert_eq!(1, score.first_half.terrorists);
    assert_eq!(0, score.first_half.counter_terrorists);
    assert_eq!(3, score.win_sequence.len());
}

#[test]
fn test_serialize_summary() {
    let summary = MatchSummary {
        score: ScoreBoard::count_rounds(vec![Side::T, Side::Unknown]),
        players: vec![PlayerRecord {
            played: true,
            mvp_count: 2,
            nickname: "shox".into(),
            steam_id: "STEAM_1:0:123".into(),
            user_id: " userid: shox (id:4)".into(),
            initial_side: "CT".into(),
        }],
    };
    assert_eq!(
        r#"{"score":{"overall":{"T":1,"CT":0},"firsthalf":{"terrorists":1,"counterterrorists":0},"secondhalf":{"terrorists":0,"counterterrorists":0},"winsequence":["T","?"]},"players":[{"mvps":2,"nickname":"shox","steamid":"STEAM_1:0:123","team":"CT"}]}"#,
        serde_json::to_string(&summary).unwrap()
    );
}
