use crate::event::GameEvent;
use crate::module::EventHandler;
use crate::raw_event::RawEventType;
use crate::summary::{ScoreBoard, Side};
use crate::Result;
use tracing::debug;

#[derive(Default)]
pub struct ScoreHandler {
    win_sequence: Vec<Side>,
}

impl EventHandler for ScoreHandler {
    type Output = ScoreBoard;

    fn does_handle(&self, ty: RawEventType) -> bool {
        matches!(ty, RawEventType::RoundEnd)
    }

    fn handle(&mut self, event: &GameEvent) -> Result<()> {
        if let GameEvent::RoundEnd(round_end) = event {
            debug!(
                round = self.win_sequence.len() + 1,
                winner = %round_end.winner,
                "round ended"
            );
            self.win_sequence.push(round_end.winner);
        }
        Ok(())
    }

    fn finish(self) -> Self::Output {
        ScoreBoard::count_rounds(self.win_sequence)
    }
}

#[test]
fn test_win_sequence() {
    let log = [
        "round_end", "{", " winner: 2", "}", //
        "round_end", "{", " winner: 3", "}", //
        "round_end", "{", " winner: 1", "}",
    ];
    let score = crate::parse_with_handler::<ScoreHandler>(&log).unwrap();
    assert_eq!(vec![Side::T, Side::CT, Side::Unknown], score.win_sequence);
    assert_eq!(1, score.first_half.terrorists);
    assert_eq!(1, score.first_half.counter_terrorists);
}

#[test]
fn test_truncated_round_end() {
    let log = ["round_end", "{"];
    assert!(crate::parse_with_handler::<ScoreHandler>(&log).is_err());
}
