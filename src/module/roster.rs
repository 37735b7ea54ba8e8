use crate::event::{user_id_marker, GameEvent, PlayerInfoEvent, RoundMvpEvent, UserIdEvent};
use crate::module::EventHandler;
use crate::raw_event::RawEventType;
use crate::summary::PlayerRecord;
use crate::Result;
use tracing::{debug, warn};

/// Collects announced players, keeps track of which of them actually played
/// and counts their mvp awards.
#[derive(Default)]
pub struct RosterHandler {
    candidates: Vec<PlayerRecord>,
}

impl RosterHandler {
    fn add_candidate(&mut self, info: &PlayerInfoEvent) {
        if info.bot {
            debug!(nickname = info.nickname, "skipping bot");
            return;
        }
        debug!(
            nickname = info.nickname,
            steam_id = info.steam_id,
            user_id = info.user_id,
            "player joined"
        );
        self.candidates.push(PlayerRecord {
            nickname: info.nickname.to_string(),
            steam_id: info.steam_id.to_string(),
            user_id: user_id_marker(info.nickname, info.user_id),
            ..PlayerRecord::default()
        });
    }

    fn confirm_played(&mut self, event: &UserIdEvent) -> Result<()> {
        let marker = event.marker();
        for candidate in self.candidates.iter_mut() {
            if candidate.user_id == marker && !candidate.played && event.is_weapon_fire()? {
                candidate.played = true;
                candidate.initial_side = event.side()?.to_string();
                debug!(
                    nickname = candidate.nickname.as_str(),
                    side = candidate.initial_side.as_str(),
                    "player confirmed"
                );
            }
        }
        Ok(())
    }

    fn credit_mvp(&mut self, mvp: &RoundMvpEvent) {
        let mut credited = 0;
        for candidate in self
            .candidates
            .iter_mut()
            .filter(|candidate| candidate.nickname == mvp.nickname)
        {
            candidate.mvp_count += 1;
            credited += 1;
        }
        if credited == 0 {
            warn!(nickname = mvp.nickname, "mvp awarded to unknown player");
        }
    }
}

impl EventHandler for RosterHandler {
    type Output = Vec<PlayerRecord>;

    fn does_handle(&self, ty: RawEventType) -> bool {
        matches!(
            ty,
            RawEventType::PlayerInfo | RawEventType::UserId | RawEventType::RoundMvp
        )
    }

    fn handle(&mut self, event: &GameEvent) -> Result<()> {
        match event {
            GameEvent::PlayerInfo(info) => self.add_candidate(info),
            GameEvent::UserId(event) => self.confirm_played(event)?,
            GameEvent::RoundMvp(mvp) => self.credit_mvp(mvp),
            _ => {}
        }
        Ok(())
    }

    fn finish(self) -> Self::Output {
        self.candidates
            .into_iter()
            .filter(|candidate| candidate.played)
            .collect()
    }
}

#[cfg(test)]
fn roster(log: &[&str]) -> Vec<PlayerRecord> {
    crate::parse_with_handler::<RosterHandler>(log).unwrap()
}

#[cfg(test)]
const JOIN_SHOX: [&str; 6] = [
    "adding:player info:",
    " xuid:76561198000000001",
    " name:shox",
    " userID:4",
    " guid:STEAM_1:0:123",
    " friendsID:123",
];

#[cfg(test)]
const FIRE_SHOX: [&str; 6] = [
    "weapon_fire",
    "{",
    " userid: shox (id:4)",
    " weapon: weapon_ak47",
    " silenced: 0",
    " team: CT",
];

#[cfg(test)]
const MVP_SHOX: [&str; 5] = ["round_mvp", "{", " userid: shox (id:4)", " reason: 1", "}"];

#[test]
fn test_confirmed_player() {
    let log = [&JOIN_SHOX[..], &FIRE_SHOX[..]].concat();
    let players = roster(&log);
    assert_eq!(1, players.len());
    assert_eq!("shox", players[0].nickname);
    assert_eq!("STEAM_1:0:123", players[0].steam_id);
    assert_eq!("CT", players[0].initial_side);
    assert!(players[0].played);
}

#[test]
fn test_unconfirmed_player_dropped() {
    let log = [&JOIN_SHOX[..], &MVP_SHOX[..], &MVP_SHOX[..]].concat();
    assert!(roster(&log).is_empty());
}

#[test]
fn test_initial_side_fixed_on_first_confirmation() {
    let mut switched = FIRE_SHOX;
    switched[5] = " team: T";
    let log = [&JOIN_SHOX[..], &FIRE_SHOX[..], &switched[..]].concat();
    let players = roster(&log);
    assert_eq!("CT", players[0].initial_side);
}

#[test]
fn test_user_id_needs_weapon_fire() {
    let mut footstep = FIRE_SHOX;
    footstep[0] = "player_footstep";
    let log = [&JOIN_SHOX[..], &footstep[..]].concat();
    assert!(roster(&log).is_empty());
}

#[test]
fn test_mvp_before_confirmation_counts() {
    let log = [
        &JOIN_SHOX[..],
        &MVP_SHOX[..],
        &FIRE_SHOX[..],
        &MVP_SHOX[..],
    ]
    .concat();
    let players = roster(&log);
    assert_eq!(2, players[0].mvp_count);
}

#[test]
fn test_unmatched_user_id_near_start_is_ignored() {
    // the lookbehind is only needed once a candidate matches
    let log = [" userid: nobody (id:1)", "x"];
    assert!(roster(&log).is_empty());
}

#[test]
fn test_matched_user_id_without_lookbehind_fails() {
    let log = [
        "adding:player info:",
        " userid: shox (id:4)",
        " name:shox",
        " userID:4",
        " guid:STEAM_1:0:123",
    ];
    assert!(matches!(
        crate::parse_with_handler::<RosterHandler>(&log),
        Err(crate::Error::Truncated { .. })
    ));
}
