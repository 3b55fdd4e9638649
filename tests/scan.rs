use replay_stats::module::CountMap;
use replay_stats::{scan_file, scan_str, Error, ScanOptions, ScanOutput};
use serde_json::{json, Value};
use test_case::test_case;

const PLAIN: ScanOptions = ScanOptions {
    track_sessions: false,
    track_checked_events: false,
};
const SESSIONS: ScanOptions = ScanOptions {
    track_sessions: true,
    track_checked_events: false,
};
const CHECKED: ScanOptions = ScanOptions {
    track_sessions: true,
    track_checked_events: true,
};

fn to_value(output: &ScanOutput) -> Value {
    serde_json::to_value(output).unwrap()
}

#[test]
fn test_plain_example() {
    let log = "event, kill, extra\nevent, kill, extra\nmie, spot, x\nmerging events, death\n";
    let output = scan_str(log, PLAIN).unwrap();
    assert_eq!(
        r#"{"event":{"kill":2},"merge":{"death":1},"mie":{"spot":1}}"#,
        serde_json::to_string(&output).unwrap()
    );
}

#[test]
fn test_session_example() {
    let log = [
        "Opening demofile demo1.sdf",
        "event, kill, x",
        "game_message: Blue wins!",
        "Connecting to battle, Zero-K v1.2, MapName, other",
        "mie, spot, x",
    ]
    .join("\n");
    let output = scan_str(&log, SESSIONS).unwrap();
    insta::assert_json_snapshot!(output, @r###"
    [
      {
        "demofile": "demo1.sdf",
        "event": {
          "kill": 1
        },
        "merge": {},
        "mie": {}
      },
      {
        "demofile": "MapName",
        "event": {},
        "merge": {},
        "mie": {
          "spot": 1
        }
      }
    ]
    "###);
}

#[test]
fn test_empty_log() {
    assert_eq!(
        r#"{"event":{},"merge":{},"mie":{}}"#,
        serde_json::to_string(&scan_str("", PLAIN).unwrap()).unwrap()
    );
    assert_eq!(
        "[]",
        serde_json::to_string(&scan_str("", CHECKED).unwrap()).unwrap()
    );
}

#[test]
fn test_lines_before_session_are_ignored() {
    let log = "event, kill, x\nmerging events, death\nmie, spot, x\nchecked 5 events\n";
    assert_eq!(
        ScanOutput::Sessions(vec![]),
        scan_str(log, CHECKED).unwrap()
    );
}

#[test]
fn test_gating_after_win() {
    let log = [
        "Opening demofile a.sdf",
        "event, kill, x",
        "game_message: Red wins!",
        "event, kill, x",
        "checked 4 events",
        "Opening demofile b.sdf",
        "checked 2 events",
    ]
    .join("\n");
    let output = scan_str(&log, CHECKED).unwrap();
    assert_eq!(
        json!([
            {"demofile": "a.sdf", "event": {"kill": 1}, "merge": {}, "mie": {}},
            {
                "demofile": "b.sdf",
                "event": {},
                "merge": {},
                "mie": {},
                "checked_events_mean": 2.0,
                "checked_events_max": 2
            }
        ]),
        to_value(&output)
    );
}

#[test]
fn test_new_session_starts_empty() {
    let log = [
        "Opening demofile a.sdf",
        "checked 100 events",
        "event, kill, x",
        "Opening demofile b.sdf",
        "checked 1 events",
        "checked 2 events",
    ]
    .join("\n");
    let output = scan_str(&log, CHECKED).unwrap();
    assert_eq!(
        json!([
            {
                "demofile": "a.sdf",
                "event": {"kill": 1},
                "merge": {},
                "mie": {},
                "checked_events_mean": 100.0,
                "checked_events_max": 100
            },
            {
                "demofile": "b.sdf",
                "event": {},
                "merge": {},
                "mie": {},
                "checked_events_mean": 1.5,
                "checked_events_max": 2
            }
        ]),
        to_value(&output)
    );
}

#[test]
fn test_checked_events_without_sessions() {
    let options = ScanOptions {
        track_sessions: false,
        track_checked_events: true,
    };
    let output = scan_str("checked 3 events\nchecked 9 events\n", options).unwrap();
    assert_eq!(
        json!({
            "event": {},
            "merge": {},
            "mie": {},
            "checked_events_mean": 6.0,
            "checked_events_max": 9
        }),
        to_value(&output)
    );
}

#[test]
fn test_malformed_count() {
    let log = [
        "Opening demofile a.sdf",
        "event, kill, x",
        "checked 123456789012345678901234567890 events",
    ]
    .join("\n");
    match scan_str(&log, CHECKED) {
        Err(Error::MalformedCount { line, .. }) => assert_eq!(3, line),
        other => panic!("expected a malformed count error, got {:?}", other),
    }
    // not an error when the pattern isn't tracked
    assert!(scan_str(&log, SESSIONS).is_ok());
}

#[test]
fn test_crlf_lines() {
    let log = "Opening demofile a.sdf\r\nmerging events, death\r\nmerging events, death\r\n";
    assert_eq!(
        json!([{"demofile": "a.sdf", "event": {}, "merge": {"death": 2}, "mie": {}}]),
        to_value(&scan_str(log, SESSIONS).unwrap())
    );
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = scan_file(dir.path().join("infolog.txt"), PLAIN);
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_fixture_plain() {
    let output = scan_file("tests/data/infolog.txt", PLAIN).unwrap();
    assert_eq!(
        concat!(
            r#"{"event":{"kill":1,"unit_destroyed":3,"shot_fired":1,"unit_built":1},"#,
            r#""merge":{"unit_destroyed":2},"#,
            r#""mie":{"unit_destroyed":1,"shot_fired":2,"unit_damaged":1}}"#,
        ),
        serde_json::to_string(&output).unwrap()
    );
}

#[test]
fn test_fixture_plain_checked() {
    let options = ScanOptions {
        track_sessions: false,
        track_checked_events: true,
    };
    let output = scan_file("tests/data/infolog.txt", options).unwrap();
    let value = to_value(&output);
    assert_eq!(json!(231.0), value["checked_events_mean"]);
    assert_eq!(json!(1000), value["checked_events_max"]);
}

#[test]
fn test_fixture_sessions() {
    let output = scan_file("tests/data/infolog.txt", CHECKED).unwrap();
    assert_eq!(
        json!([
            {
                "demofile": "demos/20240312_182633_Comet Catcher Redux_105.sdfz",
                "event": {"unit_destroyed": 2, "shot_fired": 1},
                "merge": {"unit_destroyed": 2},
                "mie": {"unit_destroyed": 1},
                "checked_events_mean": 25.0,
                "checked_events_max": 40
            },
            {
                "demofile": "Fairyland 1.31",
                "event": {},
                "merge": {},
                "mie": {"shot_fired": 2, "unit_damaged": 1},
                "checked_events_mean": 6.0,
                "checked_events_max": 6
            },
            {
                "demofile": "demos/second.sdfz",
                "event": {"unit_built": 1},
                "merge": {},
                "mie": {}
            }
        ]),
        to_value(&output)
    );
}

#[test_case(PLAIN)]
#[test_case(SESSIONS)]
#[test_case(CHECKED)]
fn test_idempotent(options: ScanOptions) {
    let first = serde_json::to_string(&scan_file("tests/data/infolog.txt", options).unwrap());
    let second = serde_json::to_string(&scan_file("tests/data/infolog.txt", options).unwrap());
    assert_eq!(first.unwrap(), second.unwrap());
}

#[test]
fn test_total_counts_match_lines() {
    let content = std::fs::read_to_string("tests/data/infolog.txt").unwrap();
    let ScanOutput::Global(aggregate) = scan_str(&content, PLAIN).unwrap() else {
        panic!("expected a single aggregate");
    };
    let total = |counts: &CountMap| counts.iter().map(|(_, count)| count).sum::<u64>();
    assert_eq!(6, total(&aggregate.counts.event));
    assert_eq!(2, total(&aggregate.counts.merge));
    assert_eq!(4, total(&aggregate.counts.mie));
}
