use crate::raw_event::RawEventType;
use crate::{Error, Result};

/// Labels that can prefix the value of a companion line.
const FIELD_LABELS: [&str; 4] = ["userID:", "name:", "guid:", "team:"];

/// View on the lines surrounding the current line of the scan.
///
/// Companion data of a marker line lives at fixed offsets relative to the marker,
/// every access goes through [`LineWindow::get`] so a truncated log surfaces as
/// [`Error::Truncated`] instead of an out of bounds panic.
#[derive(Debug, Clone, Copy)]
pub struct LineWindow<'a> {
    lines: &'a [&'a str],
    index: usize,
}

impl<'a> LineWindow<'a> {
    pub(crate) fn new(lines: &'a [&'a str], index: usize) -> Self {
        debug_assert!(index < lines.len());
        LineWindow { lines, index }
    }

    /// The line the window is centered on
    pub fn current(&self) -> &'a str {
        self.lines[self.index]
    }

    /// Get the line at `offset` relative to the current line
    pub fn get(&self, marker: RawEventType, offset: isize) -> Result<&'a str> {
        self.index
            .checked_add_signed(offset)
            .and_then(|index| self.lines.get(index))
            .copied()
            .ok_or(Error::Truncated {
                marker,
                line: self.index + 1,
                offset,
            })
    }
}

/// Strip surrounding whitespace and the leading field labels.
///
/// Labels are tried in order, each at most once.
pub fn clean_field(line: &str) -> &str {
    FIELD_LABELS
        .iter()
        .fold(line.trim(), |line, label| {
            line.strip_prefix(label).unwrap_or(line)
        })
        .trim()
}

/// Extract the nickname from the `userid: <name> (id:<n>)` line of an mvp award.
///
/// The last space separated token is the connection id and is dropped.
pub fn clean_mvp_name(line: &str) -> &str {
    let line = line.trim();
    let line = line.strip_prefix("userid:").unwrap_or(line);
    match line.rsplit_once(' ') {
        Some((name, _id)) => name.trim(),
        None => "",
    }
}

/// Extract the winner code from a `winner: <n>` line
pub fn clean_winner(line: &str) -> &str {
    let line = line.trim();
    line.strip_prefix("winner:").unwrap_or(line).trim()
}

#[test]
fn test_clean_field() {
    assert_eq!("STEAM_1:0:1234", clean_field(" guid:STEAM_1:0:1234"));
    assert_eq!("some player", clean_field("  name:some player  "));
    assert_eq!("3", clean_field("\tuserID: 3"));
    assert_eq!("CT", clean_field(" team: CT"));
    assert_eq!("xuid:123", clean_field(" xuid:123"));
    assert_eq!("T", clean_field(" name:team:T"));
    // labels earlier in the list are not retried
    assert_eq!("name:x", clean_field(" team:name:x"));
}

#[test]
fn test_clean_mvp_name() {
    assert_eq!("player", clean_mvp_name(" userid: player (id:3)"));
    assert_eq!("two words", clean_mvp_name(" userid: two words (id:12)"));
    assert_eq!("", clean_mvp_name(" userid:"));
    assert_eq!("", clean_mvp_name(""));
}

#[test]
fn test_clean_winner() {
    assert_eq!("2", clean_winner(" winner: 2 "));
    assert_eq!("3", clean_winner("winner:3"));
    assert_eq!("reason: 8", clean_winner(" reason: 8"));
}

#[test]
fn test_window_bounds() {
    let lines = ["a", "b", "c"];
    let window = LineWindow::new(&lines, 1);
    assert_eq!("b", window.current());
    assert_eq!("a", window.get(RawEventType::RoundEnd, -1).unwrap());
    assert_eq!("c", window.get(RawEventType::RoundEnd, 1).unwrap());
    assert!(matches!(
        window.get(RawEventType::RoundEnd, 2),
        Err(Error::Truncated {
            line: 2,
            offset: 2,
            ..
        })
    ));
    assert!(window.get(RawEventType::RoundEnd, -2).is_err());
}
