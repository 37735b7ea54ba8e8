use crate::raw_event::RawEventType;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Truncated logfile: {marker:?} on line {line} expects a line at offset {offset}")]
    Truncated {
        marker: RawEventType,
        line: usize,
        offset: isize,
    },
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to serialize summary: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<O, E = Error> = std::result::Result<O, E>;
