pub use crate::error::{Error, Result};
pub use crate::event::GameEvent;
pub use crate::module::{EventHandler, RosterHandler, ScoreHandler};
pub use crate::summary::{
    HalfScore, MatchSummary, PlayerRecord, ScoreBoard, Side, SideScore, HALF_LENGTH,
};
pub use raw_event::{raw_events, RawEvent, RawEventType};

mod error;
pub mod event;
pub mod module;
pub mod output;
pub mod parsing;
mod raw_event;
mod summary;

/// Summarize a demo event dump
pub fn parse(log: &str) -> Result<MatchSummary> {
    let lines: Vec<&str> = log.lines().collect();
    parse_lines(&lines)
}

pub fn parse_lines(lines: &[&str]) -> Result<MatchSummary> {
    parse_with_handler::<MatchHandler>(lines)
}

/// Run a handler over every line of the log it is interested in.
///
/// Scanning stops at the first malformed event.
pub fn parse_with_handler<Handler: EventHandler>(lines: &[&str]) -> Result<Handler::Output> {
    let mut handler = Handler::default();

    for raw_event in raw_events(lines) {
        if handler.does_handle(raw_event.ty) {
            let event = GameEvent::parse(&raw_event)?;
            handler.handle(&event)?;
        }
    }

    Ok(handler.finish())
}

#[derive(Default)]
pub struct MatchHandler {
    roster: RosterHandler,
    score: ScoreHandler,
}

impl EventHandler for MatchHandler {
    type Output = MatchSummary;

    fn does_handle(&self, ty: RawEventType) -> bool {
        self.roster.does_handle(ty) || self.score.does_handle(ty)
    }

    fn handle(&mut self, event: &GameEvent) -> Result<()> {
        self.roster.handle(event)?;
        self.score.handle(event)
    }

    fn finish(self) -> Self::Output {
        MatchSummary {
            score: self.score.finish(),
            players: self.roster.finish(),
        }
    }
}
