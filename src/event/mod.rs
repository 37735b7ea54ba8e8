mod game;
mod player;

use crate::raw_event::{RawEvent, RawEventType};
use crate::Result;
pub use game::*;
pub use player::*;

pub trait Event<'a>: Sized + 'a {
    fn parse(raw: &RawEvent<'a>) -> Result<Self>;
}

fn parse_event<'a, T: Event<'a>>(raw: &RawEvent<'a>) -> Result<T> {
    T::parse(raw)
}

#[derive(Debug)]
pub enum GameEvent<'a> {
    PlayerInfo(PlayerInfoEvent<'a>),
    UserId(UserIdEvent<'a>),
    RoundMvp(RoundMvpEvent<'a>),
    RoundEnd(RoundEndEvent),
    Unknown,
}

impl<'a> GameEvent<'a> {
    pub fn parse(raw: &RawEvent<'a>) -> Result<Self> {
        Ok(match raw.ty {
            RawEventType::PlayerInfo => GameEvent::PlayerInfo(parse_event(raw)?),
            RawEventType::UserId => GameEvent::UserId(parse_event(raw)?),
            RawEventType::RoundMvp => GameEvent::RoundMvp(parse_event(raw)?),
            RawEventType::RoundEnd => GameEvent::RoundEnd(parse_event(raw)?),
            RawEventType::Unknown => GameEvent::Unknown,
        })
    }
}
