use crate::event::Event;
use crate::parsing::clean_winner;
use crate::raw_event::{RawEvent, RawEventType};
use crate::summary::Side;
use crate::Result;

#[derive(Debug, PartialEq)]
pub struct RoundEndEvent {
    pub winner: Side,
}

impl<'a> Event<'a> for RoundEndEvent {
    fn parse(raw: &RawEvent<'a>) -> Result<Self> {
        let winner = clean_winner(raw.window.get(RawEventType::RoundEnd, 2)?);
        Ok(RoundEndEvent {
            winner: Side::from_winner_code(winner),
        })
    }
}

#[test]
fn test_parse_round_end() {
    let lines = ["round_end", "{", " winner: 3", " reason: 8"];
    assert_eq!(
        RoundEndEvent { winner: Side::CT },
        RoundEndEvent::parse(&RawEvent::new(&lines, 0)).unwrap()
    );
    assert!(RoundEndEvent::parse(&RawEvent::new(&lines[..2], 0)).is_err());
}
