mod common;

use common::{HUMAN_ID, ID, T50, finish, header, start};
use devlog_core::conf::FormatConfig;
use devlog_core::logs::run_logs;
use integration_tests::harness::{ndjson, plain_config};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::time::Duration;
use tokio::io::AsyncWriteExt;

#[tokio::test(start_paused = true)]
async fn child_after_grace_window_is_printed_on_its_own() {
    // Arrange
    let (mut writer, reader) = tokio::io::duplex(4096);
    let late = json!({ "name": format!("womp:{ID}"), "time": T50, "message": "late" });

    let feed = async move {
        let head = format!("{}\n", ndjson(&[start(ID), finish(ID, 200)]));
        writer.write_all(head.as_bytes()).await.unwrap();
        tokio::time::sleep(Duration::from_millis(150)).await;
        writer
            .write_all(format!("{}\n", ndjson(&[late])).as_bytes())
            .await
            .unwrap();
    };

    // Act
    let mut out = Vec::new();
    let config = plain_config();
    let (_, result) = tokio::join!(feed, run_logs(reader, &mut out, &config));
    result.unwrap();

    // Assert
    assert_eq!(
        String::from_utf8(out).unwrap(),
        format!(
            "{}\n{{ name: 'womp:{ID}', time: '{T50}', message: 'late' }}\n",
            header(200)
        )
    );
}

#[tokio::test(start_paused = true)]
async fn child_within_grace_window_is_tagged_late() {
    // Arrange
    let (mut writer, reader) = tokio::io::duplex(4096);
    let late = json!({ "name": format!("womp:{ID}"), "time": T50, "message": "late" });
    let config = FormatConfig {
        grace_ms: 10_000,
        ..plain_config()
    };

    let feed = async move {
        let head = format!("{}\n", ndjson(&[start(ID), finish(ID, 200)]));
        writer.write_all(head.as_bytes()).await.unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;
        writer
            .write_all(format!("{}\n", ndjson(&[late])).as_bytes())
            .await
            .unwrap();
    };

    // Act
    let mut out = Vec::new();
    let (_, result) = tokio::join!(feed, run_logs(reader, &mut out, &config));
    result.unwrap();

    // Assert
    assert_eq!(
        String::from_utf8(out).unwrap(),
        format!(
            "{}\n    +50s LOG womp late (after {})\n",
            header(200),
            HUMAN_ID
        )
    );
}
