use crate::event::{LineEvent, LineEventType};
pub use checked::{CheckedEvents, CheckedEventsHandler};
pub use counts::{CountMap, Counts, CountsHandler};
use serde::Serialize;

mod checked;
mod counts;

/// Accumulates state from classified lines and turns it into output once the scan is done
pub trait EventHandler: Default {
    type Output;

    fn does_handle(&self, ty: LineEventType) -> bool;

    fn handle(&mut self, event: &LineEvent);

    fn finish(self) -> Self::Output;
}

/// Everything tracked for a single session, or for the whole log when sessions aren't tracked
#[derive(Default)]
pub struct AggregateHandler {
    counts: CountsHandler,
    checked: CheckedEventsHandler,
}

#[derive(Debug, Default, Serialize, PartialEq)]
pub struct Aggregate {
    #[serde(flatten)]
    pub counts: Counts,
    #[serde(flatten)]
    pub checked: Option<CheckedEvents>,
}

impl EventHandler for AggregateHandler {
    type Output = Aggregate;

    fn does_handle(&self, ty: LineEventType) -> bool {
        self.counts.does_handle(ty) || self.checked.does_handle(ty)
    }

    fn handle(&mut self, event: &LineEvent) {
        let ty = event.ty();
        if self.counts.does_handle(ty) {
            self.counts.handle(event);
        }
        if self.checked.does_handle(ty) {
            self.checked.handle(event);
        }
    }

    fn finish(self) -> Self::Output {
        Aggregate {
            counts: self.counts.finish(),
            checked: self.checked.finish(),
        }
    }
}

#[test]
fn test_aggregate_serialize() {
    let mut handler = AggregateHandler::default();
    handler.handle(&LineEvent::Event("kill"));
    handler.handle(&LineEvent::Mie("spot"));
    assert_eq!(
        r#"{"event":{"kill":1},"merge":{},"mie":{"spot":1}}"#,
        serde_json::to_string(&handler.finish()).unwrap()
    );

    let mut handler = AggregateHandler::default();
    handler.handle(&LineEvent::Checked(3));
    handler.handle(&LineEvent::Checked(4));
    assert_eq!(
        r#"{"event":{},"merge":{},"mie":{},"checked_events_mean":3.5,"checked_events_max":4}"#,
        serde_json::to_string(&handler.finish()).unwrap()
    );
}
