mod count;
mod session;

use crate::ScanOptions;
pub use count::{parse_checked, parse_event, parse_merge, parse_mie};
pub use session::{parse_battle, parse_demofile, parse_win};
use std::num::ParseIntError;

/// Kind of a recognized line, without its payload.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum LineEventType {
    Win,
    DemoFile,
    Battle,
    Event,
    Merge,
    Mie,
    Checked,
}

impl LineEventType {
    /// All kinds, in the order they are tried against a line
    pub const PRIORITY: [LineEventType; 7] = [
        LineEventType::Win,
        LineEventType::DemoFile,
        LineEventType::Battle,
        LineEventType::Event,
        LineEventType::Merge,
        LineEventType::Mie,
        LineEventType::Checked,
    ];

    /// Whether lines of this kind are recognized at all with the given options
    pub fn is_active(self, options: ScanOptions) -> bool {
        match self {
            LineEventType::Win | LineEventType::DemoFile | LineEventType::Battle => {
                options.track_sessions
            }
            LineEventType::Checked => options.track_checked_events,
            LineEventType::Event | LineEventType::Merge | LineEventType::Mie => true,
        }
    }

    fn recognize(self, line: &str) -> Result<Option<LineEvent<'_>>, ParseIntError> {
        Ok(match self {
            LineEventType::Win => parse_win(line).then(|| LineEvent::Win),
            LineEventType::DemoFile => parse_demofile(line).map(LineEvent::DemoFile),
            LineEventType::Battle => parse_battle(line).map(|map| LineEvent::Battle { map }),
            LineEventType::Event => parse_event(line).map(LineEvent::Event),
            LineEventType::Merge => parse_merge(line).map(LineEvent::Merge),
            LineEventType::Mie => parse_mie(line).map(LineEvent::Mie),
            LineEventType::Checked => parse_checked(line)?.map(LineEvent::Checked),
        })
    }
}

/// A line of the infolog that matched one of the known patterns
#[derive(Debug, Clone, PartialEq)]
pub enum LineEvent<'a> {
    Win,
    DemoFile(&'a str),
    Battle { map: &'a str },
    Event(&'a str),
    Merge(&'a str),
    Mie(&'a str),
    Checked(u64),
}

impl<'a> LineEvent<'a> {
    /// Classify a line, the first active pattern that matches wins.
    ///
    /// Returns `Ok(None)` for lines that match nothing, the only error is a
    /// checked events count that doesn't fit in a `u64`.
    pub fn parse(line: &'a str, options: ScanOptions) -> Result<Option<Self>, ParseIntError> {
        for ty in LineEventType::PRIORITY.iter().copied() {
            if !ty.is_active(options) {
                continue;
            }
            if let Some(event) = ty.recognize(line)? {
                return Ok(Some(event));
            }
        }
        Ok(None)
    }

    pub fn ty(&self) -> LineEventType {
        match self {
            LineEvent::Win => LineEventType::Win,
            LineEvent::DemoFile(_) => LineEventType::DemoFile,
            LineEvent::Battle { .. } => LineEventType::Battle,
            LineEvent::Event(_) => LineEventType::Event,
            LineEvent::Merge(_) => LineEventType::Merge,
            LineEvent::Mie(_) => LineEventType::Mie,
            LineEvent::Checked(_) => LineEventType::Checked,
        }
    }

    /// Label of the session this line opens, if any
    pub fn session_label(&self) -> Option<&'a str> {
        match self {
            LineEvent::DemoFile(path) => Some(path),
            LineEvent::Battle { map } => Some(map),
            _ => None,
        }
    }
}
