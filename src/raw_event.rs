use crate::parsing::LineWindow;

/// Event that has only been classified by its marker line.
/// that way we can decide if we're interested in handling the event before reading its companion lines
#[derive(Debug, Clone, Copy)]
pub struct RawEvent<'a> {
    pub ty: RawEventType,
    pub window: LineWindow<'a>,
}

impl<'a> RawEvent<'a> {
    pub(crate) fn new(lines: &'a [&'a str], index: usize) -> Self {
        let window = LineWindow::new(lines, index);
        RawEvent {
            ty: RawEventType::classify(window.current()),
            window,
        }
    }

    /// The marker line itself
    pub fn line(&self) -> &'a str {
        self.window.current()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RawEventType {
    /// `adding:player info:`
    PlayerInfo,
    /// any line containing ` userid: `
    UserId,
    /// `round_mvp`
    RoundMvp,
    /// `round_end`
    RoundEnd,
    Unknown,
}

impl RawEventType {
    pub fn classify(line: &str) -> Self {
        match line {
            "adding:player info:" => RawEventType::PlayerInfo,
            "round_mvp" => RawEventType::RoundMvp,
            "round_end" => RawEventType::RoundEnd,
            line if line.contains(" userid: ") => RawEventType::UserId,
            _ => RawEventType::Unknown,
        }
    }
}

/// Iterate over the classified lines of a log
pub fn raw_events<'a>(lines: &'a [&'a str]) -> impl Iterator<Item = RawEvent<'a>> + 'a {
    (0..lines.len()).map(move |index| RawEvent::new(lines, index))
}

#[test]
fn test_classify() {
    assert_eq!(
        RawEventType::PlayerInfo,
        RawEventType::classify("adding:player info:")
    );
    assert_eq!(RawEventType::RoundMvp, RawEventType::classify("round_mvp"));
    assert_eq!(RawEventType::RoundEnd, RawEventType::classify("round_end"));
    assert_eq!(
        RawEventType::UserId,
        RawEventType::classify(" userid: player (id:3)")
    );
    // markers have to match the full line
    assert_eq!(RawEventType::Unknown, RawEventType::classify(" round_end"));
    assert_eq!(
        RawEventType::Unknown,
        RawEventType::classify("adding:player info: ")
    );
    assert_eq!(RawEventType::Unknown, RawEventType::classify("userid: x"));
    assert_eq!(RawEventType::Unknown, RawEventType::classify("weapon_fire"));
}
