use crate::event::{LineEvent, LineEventType};
use crate::module::EventHandler;
use ahash::AHashMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Occurrence count per label, iterated in the order labels were first seen
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CountMap {
    index: AHashMap<String, usize>,
    entries: Vec<(String, u64)>,
}

impl CountMap {
    pub fn increment(&mut self, label: &str) {
        match self.index.get(label) {
            Some(&position) => self.entries[position].1 += 1,
            None => {
                self.index.insert(label.to_string(), self.entries.len());
                self.entries.push((label.to_string(), 1));
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries
            .iter()
            .map(|(label, count)| (label.as_str(), *count))
    }
}

impl Serialize for CountMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, count) in self.iter() {
            map.serialize_entry(label, &count)?;
        }
        map.end()
    }
}

#[derive(Debug, Default, Clone, Serialize, PartialEq)]
pub struct Counts {
    pub event: CountMap,
    pub merge: CountMap,
    pub mie: CountMap,
}

#[derive(Default)]
pub struct CountsHandler(Counts);

impl EventHandler for CountsHandler {
    type Output = Counts;

    fn does_handle(&self, ty: LineEventType) -> bool {
        matches!(
            ty,
            LineEventType::Event | LineEventType::Merge | LineEventType::Mie
        )
    }

    fn handle(&mut self, event: &LineEvent) {
        match event {
            LineEvent::Event(ty) => self.0.event.increment(ty),
            LineEvent::Merge(ty) => self.0.merge.increment(ty),
            LineEvent::Mie(ty) => self.0.mie.increment(ty),
            _ => {}
        }
    }

    fn finish(self) -> Self::Output {
        self.0
    }
}

#[test]
fn test_count_map_order() {
    let mut map = CountMap::default();
    for label in ["zeta", "alpha", "zeta", "mid", "alpha", "zeta"].iter() {
        map.increment(label);
    }
    assert_eq!(
        vec![("zeta", 3), ("alpha", 2), ("mid", 1)],
        map.iter().collect::<Vec<_>>()
    );
    assert_eq!(
        r#"{"zeta":3,"alpha":2,"mid":1}"#,
        serde_json::to_string(&map).unwrap()
    );
}

#[test]
fn test_counts_handler() {
    let mut handler = CountsHandler::default();
    assert!(handler.does_handle(LineEventType::Merge));
    assert!(!handler.does_handle(LineEventType::Checked));
    handler.handle(&LineEvent::Event("kill"));
    handler.handle(&LineEvent::Event("kill"));
    handler.handle(&LineEvent::Merge("death"));
    handler.handle(&LineEvent::Checked(5));
    let counts = handler.finish();
    assert_eq!(vec![("kill", 2)], counts.event.iter().collect::<Vec<_>>());
    assert_eq!(vec![("death", 1)], counts.merge.iter().collect::<Vec<_>>());
    assert_eq!(0, counts.mie.iter().count());
}
