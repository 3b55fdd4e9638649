use crate::error::ResultExt;
pub use crate::error::{Error, Result};
pub use crate::event::{LineEvent, LineEventType};
pub use crate::module::{Aggregate, AggregateHandler, EventHandler};
pub use crate::session::{Session, SessionList, SessionOutput};
use log::{debug, trace};
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

mod error;
pub mod event;
pub mod module;
mod parsing;
mod session;

/// Name of the log file read from the working directory
pub const DEFAULT_INPUT: &str = "infolog.txt";

/// Which of the optional patterns and outputs are enabled
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ScanOptions {
    /// Attribute lines to sessions opened by demofile or battle markers and closed by a win
    pub track_sessions: bool,
    /// Collect mean and max of the `checked <n> events` samples
    pub track_checked_events: bool,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(untagged)]
pub enum ScanOutput {
    Global(Aggregate),
    Sessions(Vec<SessionOutput>),
}

enum Target {
    Global(AggregateHandler),
    Sessions(SessionList<AggregateHandler>),
}

/// Single pass line classifier, holds the aggregates while the log is being read
pub struct Scanner {
    options: ScanOptions,
    target: Target,
    lines: usize,
    ignored: usize,
}

impl Scanner {
    pub fn new(options: ScanOptions) -> Self {
        let target = if options.track_sessions {
            Target::Sessions(SessionList::default())
        } else {
            Target::Global(AggregateHandler::default())
        };
        Scanner {
            options,
            target,
            lines: 0,
            ignored: 0,
        }
    }

    pub fn push_line(&mut self, line: &str) -> Result<()> {
        self.lines += 1;
        let event = match LineEvent::parse(line, self.options).on_line(self.lines)? {
            Some(event) => event,
            None => return Ok(()),
        };

        match &mut self.target {
            Target::Global(handler) => {
                if handler.does_handle(event.ty()) {
                    handler.handle(&event);
                }
            }
            Target::Sessions(sessions) => match event.session_label() {
                Some(label) => sessions.open(label),
                None if event == LineEvent::Win => sessions.close(),
                None => match sessions.active_mut() {
                    Some(handler) => {
                        if handler.does_handle(event.ty()) {
                            handler.handle(&event);
                        }
                    }
                    None => {
                        trace!("line {} outside of a session: {:?}", self.lines, event);
                        self.ignored += 1;
                    }
                },
            },
        }
        Ok(())
    }

    pub fn finish(self) -> ScanOutput {
        debug!(
            "scanned {} lines, {} outside of any session",
            self.lines, self.ignored
        );
        match self.target {
            Target::Global(handler) => ScanOutput::Global(handler.finish()),
            Target::Sessions(sessions) => {
                debug!("{} sessions", sessions.len());
                ScanOutput::Sessions(sessions.finish())
            }
        }
    }
}

/// Scan a log from start to end
pub fn scan<R: BufRead>(reader: R, options: ScanOptions) -> Result<ScanOutput> {
    let mut scanner = Scanner::new(options);
    for line in reader.lines() {
        scanner.push_line(&line?)?;
    }
    Ok(scanner.finish())
}

pub fn scan_str(log: &str, options: ScanOptions) -> Result<ScanOutput> {
    scan(log.as_bytes(), options)
}

pub fn scan_file<P: AsRef<Path>>(path: P, options: ScanOptions) -> Result<ScanOutput> {
    let path = path.as_ref();
    debug!("reading {}", path.display());
    let file = File::open(path)?;
    scan(BufReader::new(file), options)
}
