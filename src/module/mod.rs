use crate::event::GameEvent;
use crate::raw_event::RawEventType;
use crate::Result;
pub use roster::RosterHandler;
pub use score::ScoreHandler;

mod roster;
mod score;

pub trait EventHandler: Default {
    type Output;

    fn does_handle(&self, ty: RawEventType) -> bool;

    fn handle(&mut self, event: &GameEvent) -> Result<()>;

    fn finish(self) -> Self::Output;
}
