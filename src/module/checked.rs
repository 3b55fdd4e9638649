use crate::event::{LineEvent, LineEventType};
use crate::module::EventHandler;
use serde::Serialize;

/// Running statistics over the `checked <n> events` samples
#[derive(Default)]
pub struct CheckedEventsHandler {
    samples: u64,
    total: u128,
    max: u64,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct CheckedEvents {
    pub checked_events_mean: f64,
    pub checked_events_max: u64,
}

impl CheckedEventsHandler {
    pub fn push(&mut self, sample: u64) {
        self.samples += 1;
        self.total += u128::from(sample);
        self.max = self.max.max(sample);
    }

    /// Current statistics, `None` until the first sample
    pub fn stats(&self) -> Option<CheckedEvents> {
        if self.samples == 0 {
            return None;
        }
        Some(CheckedEvents {
            checked_events_mean: self.total as f64 / self.samples as f64,
            checked_events_max: self.max,
        })
    }
}

impl EventHandler for CheckedEventsHandler {
    type Output = Option<CheckedEvents>;

    fn does_handle(&self, ty: LineEventType) -> bool {
        matches!(ty, LineEventType::Checked)
    }

    fn handle(&mut self, event: &LineEvent) {
        if let LineEvent::Checked(sample) = event {
            self.push(*sample);
        }
    }

    fn finish(self) -> Self::Output {
        self.stats()
    }
}

#[test]
fn test_checked_stats() {
    let mut handler = CheckedEventsHandler::default();
    assert_eq!(None, handler.stats());

    handler.push(10);
    assert_eq!(
        Some(CheckedEvents {
            checked_events_mean: 10.0,
            checked_events_max: 10
        }),
        handler.stats()
    );

    handler.push(2);
    handler.push(3);
    assert_eq!(
        Some(CheckedEvents {
            checked_events_mean: 5.0,
            checked_events_max: 10
        }),
        handler.finish()
    );
}

#[test]
fn test_checked_zero_samples() {
    let mut handler = CheckedEventsHandler::default();
    handler.handle(&LineEvent::Checked(0));
    handler.handle(&LineEvent::Checked(0));
    let stats = handler.finish().unwrap();
    assert_eq!(0.0, stats.checked_events_mean);
    assert_eq!(0, stats.checked_events_max);
}
