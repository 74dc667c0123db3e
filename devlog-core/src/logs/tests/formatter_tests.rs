use crate::conf::{ColorMode, FormatConfig, TimeZoneMode};
use crate::logs::formatter::LogFormatter;
use crate::logs::tests::test_helpers::{HUMAN_ID, ID, T0, finish, header, start};
use pretty_assertions::assert_eq;
use std::time::Instant;

fn formatter() -> LogFormatter {
    LogFormatter::new(&FormatConfig {
        color: ColorMode::Never,
        timezone: TimeZoneMode::Utc,
        ..FormatConfig::default()
    })
}

fn feed(formatter: &mut LogFormatter, lines: &[Vec<u8>]) -> String {
    let now = Instant::now();
    let mut out = Vec::new();
    for line in lines {
        formatter.process_line(line, now, &mut out);
    }
    String::from_utf8(out).unwrap()
}

#[test]
fn unparsable_lines_interleave_in_order() {
    // Arrange
    let mut formatter = formatter();
    let lines = vec![
        serde_json::to_vec(&start(ID, T0)).unwrap(),
        b"hello world".to_vec(),
        serde_json::to_vec(&finish(ID, 200, T0)).unwrap(),
    ];

    // Act
    let out = feed(&mut formatter, &lines);

    // Assert
    assert_eq!(out, format!("hello world\n{}\n", header(200)));
}

#[test]
fn empty_lines_pass_through() {
    // Arrange
    let mut formatter = formatter();

    // Act
    let out = feed(&mut formatter, &[vec![]]);

    // Assert
    assert_eq!(out, "\n");
}

#[test]
fn invalid_utf8_bytes_are_echoed() {
    // Arrange
    let mut formatter = formatter();
    let now = Instant::now();
    let mut out = Vec::new();

    // Act
    formatter.process_line(&[0xff, b'a'], now, &mut out);

    // Assert
    assert_eq!(out, vec![0xff, b'a', b'\n']);
}

#[test]
fn ungrouped_records_are_inspected() {
    // Arrange
    let mut formatter = formatter();
    let lines = vec![
        br#"{"name":"hello:MQ=="}"#.to_vec(),
        br#"{"name":"foo:aBx","message":"baz"}"#.to_vec(),
    ];

    // Act
    let out = feed(&mut formatter, &lines);

    // Assert
    assert_eq!(
        out,
        "{ name: 'hello:MQ==' }\n{ name: 'foo:aBx', message: 'baz' }\n"
    );
}

#[test]
fn groups_are_tracked_until_evicted() {
    // Arrange
    let mut formatter = formatter();
    let lines = vec![
        serde_json::to_vec(&start(ID, T0)).unwrap(),
        serde_json::to_vec(&finish(ID, 200, T0)).unwrap(),
    ];

    // Act
    let out = feed(&mut formatter, &lines);

    // Assert
    assert_eq!(out, format!("00:00:00 200     10ms    GET /foo (id: {HUMAN_ID})\n"));
    assert!(formatter.tracker().is_tracking(ID));
    assert!(formatter.next_deadline().is_some());
}
