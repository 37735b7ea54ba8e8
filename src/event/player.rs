use crate::event::Event;
use crate::parsing::{clean_field, clean_mvp_name};
use crate::raw_event::{RawEvent, RawEventType};
use crate::Result;

/// Identity line of bot players
const BOT_GUID: &str = " guid:BOT";
/// Marker expected two lines before a `userid` line that confirms a player is active
const WEAPON_FIRE: &str = "weapon_fire";

/// `adding:player info:` announcement
///
/// ```text
/// adding:player info:
///  xuid:76561197960265729
///  name:<nickname>
///  userID:<id>
///  guid:<steam id>
/// ```
#[derive(Debug, PartialEq)]
pub struct PlayerInfoEvent<'a> {
    pub nickname: &'a str,
    pub user_id: &'a str,
    pub steam_id: &'a str,
    pub bot: bool,
}

impl<'a> Event<'a> for PlayerInfoEvent<'a> {
    fn parse(raw: &RawEvent<'a>) -> Result<Self> {
        let guid = raw.window.get(RawEventType::PlayerInfo, 4)?;
        Ok(PlayerInfoEvent {
            nickname: clean_field(raw.window.get(RawEventType::PlayerInfo, 2)?),
            user_id: clean_field(raw.window.get(RawEventType::PlayerInfo, 3)?),
            steam_id: clean_field(guid),
            bot: guid == BOT_GUID,
        })
    }
}

/// A line mentioning a player by ` userid: <nickname> (id:<id>)`.
///
/// The surrounding lines are only meaningful once the line is known to belong to a
/// candidate, so they are read on demand.
#[derive(Debug)]
pub struct UserIdEvent<'a> {
    raw: RawEvent<'a>,
}

impl<'a> UserIdEvent<'a> {
    pub fn marker(&self) -> &'a str {
        self.raw.line()
    }

    /// Whether this line is the subject of a `weapon_fire` event
    pub fn is_weapon_fire(&self) -> Result<bool> {
        Ok(self.raw.window.get(RawEventType::UserId, -2)? == WEAPON_FIRE)
    }

    /// Side of the player, taken from the `team:` line of the event
    pub fn side(&self) -> Result<&'a str> {
        Ok(clean_field(self.raw.window.get(RawEventType::UserId, 3)?))
    }
}

impl<'a> Event<'a> for UserIdEvent<'a> {
    fn parse(raw: &RawEvent<'a>) -> Result<Self> {
        Ok(UserIdEvent { raw: *raw })
    }
}

/// `round_mvp` award
#[derive(Debug, PartialEq)]
pub struct RoundMvpEvent<'a> {
    pub nickname: &'a str,
}

impl<'a> Event<'a> for RoundMvpEvent<'a> {
    fn parse(raw: &RawEvent<'a>) -> Result<Self> {
        Ok(RoundMvpEvent {
            nickname: clean_mvp_name(raw.window.get(RawEventType::RoundMvp, 2)?),
        })
    }
}

/// Build the `userid` line a candidate will be mentioned by
pub fn user_id_marker(nickname: &str, user_id: &str) -> String {
    format!(" userid: {} (id:{})", nickname, user_id)
}

#[test]
fn test_parse_player_info() {
    let lines = [
        "adding:player info:",
        " xuid:76561198000000001",
        " name:shox",
        " userID:4",
        " guid:STEAM_1:0:123",
    ];
    let raw = RawEvent::new(&lines, 0);
    assert_eq!(
        PlayerInfoEvent {
            nickname: "shox",
            user_id: "4",
            steam_id: "STEAM_1:0:123",
            bot: false,
        },
        PlayerInfoEvent::parse(&raw).unwrap()
    );
}

#[test]
fn test_parse_bot_info() {
    let lines = [
        "adding:player info:",
        " xuid:0",
        " name:BOT Zed",
        " userID:9",
        " guid:BOT",
    ];
    let raw = RawEvent::new(&lines, 0);
    assert!(PlayerInfoEvent::parse(&raw).unwrap().bot);
}

#[test]
fn test_bot_guid_exact() {
    let lines = [
        "adding:player info:",
        " xuid:0",
        " name:Bot",
        " userID:9",
        "guid:BOT",
    ];
    let raw = RawEvent::new(&lines, 0);
    assert!(!PlayerInfoEvent::parse(&raw).unwrap().bot);
}

#[test]
fn test_user_id_event() {
    let lines = [
        "weapon_fire",
        "{",
        " userid: shox (id:4)",
        " weapon: weapon_ak47",
        " silenced: 0",
        " team: T",
    ];
    let event = UserIdEvent::parse(&RawEvent::new(&lines, 2)).unwrap();
    assert_eq!(user_id_marker("shox", "4"), event.marker());
    assert!(event.is_weapon_fire().unwrap());
    assert_eq!("T", event.side().unwrap());

    let truncated = UserIdEvent::parse(&RawEvent::new(&lines[1..4], 1)).unwrap();
    assert!(truncated.is_weapon_fire().is_err());
    assert!(truncated.side().is_err());
}
