use crate::module::{Aggregate, EventHandler};
use log::debug;
use serde::Serialize;

pub struct Session<T> {
    pub label: String,
    pub data: T,
}

/// Sessions in the order they were opened, and which one (if any) is still receiving lines
pub struct SessionList<T> {
    sessions: Vec<Session<T>>,
    active: Option<usize>,
}

impl<T> Default for SessionList<T> {
    fn default() -> Self {
        SessionList {
            sessions: Vec::new(),
            active: None,
        }
    }
}

impl<T: Default> SessionList<T> {
    /// Start a new session with empty data and make it the active one.
    ///
    /// A session that is still active is superseded without being closed, it stays in
    /// the list but receives no further lines.
    pub fn open(&mut self, label: &str) {
        if let Some(previous) = self.active() {
            debug!(
                "session {} superseded by {} without a win",
                previous.label, label
            );
        }
        debug!("opening session {}", label);
        self.active = Some(self.sessions.len());
        self.sessions.push(Session {
            label: label.to_string(),
            data: T::default(),
        });
    }
}

impl<T> SessionList<T> {
    /// Close the active session, no-op if there is none
    pub fn close(&mut self) {
        if let Some(session) = self.active() {
            debug!("closing session {}", session.label);
        }
        self.active = None;
    }

    pub fn active(&self) -> Option<&Session<T>> {
        self.active.map(|index| &self.sessions[index])
    }

    pub fn active_mut(&mut self) -> Option<&mut T> {
        let index = self.active?;
        Some(&mut self.sessions[index].data)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }
}

impl<T> IntoIterator for SessionList<T> {
    type Item = Session<T>;
    type IntoIter = std::vec::IntoIter<Session<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.sessions.into_iter()
    }
}

#[derive(Debug, Serialize, PartialEq)]
pub struct SessionOutput {
    pub demofile: String,
    #[serde(flatten)]
    pub aggregate: Aggregate,
}

impl<T: EventHandler<Output = Aggregate>> SessionList<T> {
    pub fn finish(self) -> Vec<SessionOutput> {
        self.into_iter()
            .map(|session| SessionOutput {
                demofile: session.label,
                aggregate: session.data.finish(),
            })
            .collect()
    }
}
