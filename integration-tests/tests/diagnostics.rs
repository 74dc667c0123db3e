mod common;

use common::{ID, finish, start};
use integration_tests::harness::{EventLog, format, init_test_tracing, ndjson};
use pretty_assertions::assert_eq;
use tracing::Level;

#[tokio::test]
async fn group_lifecycle_is_traced() {
    // Arrange
    let events = EventLog::default();
    init_test_tracing(events.clone());

    // Act
    format(&ndjson(&[start(ID), finish(ID, 200), finish("Mg==", 200)])).await;

    // Assert
    let events = events.lock().unwrap();
    let lifecycle: Vec<(&str, Option<&str>)> = events
        .iter()
        .filter(|event| event.level == Level::DEBUG)
        .map(|event| (event.message.as_str(), event.field("group")))
        // eviction timing depends on the scheduler
        .filter(|(message, _)| *message != "group evicted")
        .collect();

    assert_eq!(
        lifecycle,
        vec![
            ("group opened", Some(ID)),
            ("group closed", Some(ID)),
            ("finish for unknown group dropped", Some("Mg==")),
        ]
    );
}
