mod common;

use common::{ID, T0, finish, header, start};
use integration_tests::harness::{format, format_bytes, ndjson};
use pretty_assertions::assert_eq;
use serde_json::json;

#[tokio::test]
async fn unparsable_lines_keep_their_place() {
    // Arrange
    let input = format!(
        "{}\nhello world\n{}",
        ndjson(&[start(ID)]),
        ndjson(&[finish(ID, 200)])
    );

    // Act
    let out = format(&input).await;

    // Assert
    assert_eq!(out, format!("hello world\n{}\n", header(200)));
}

#[tokio::test]
async fn every_malformed_line_is_echoed_with_one_newline() {
    // Arrange
    let lines = ["hello world", "{not json", "  ", "[1, 2", "plain text: with colon=="];

    for line in lines {
        // Act
        let out = format(line).await;

        // Assert
        assert_eq!(out, format!("{line}\n"));
    }
}

#[tokio::test]
async fn crlf_input_is_normalized() {
    // Act
    let out = format("hello\r\nworld\r\n").await;

    // Assert
    assert_eq!(out, "hello\nworld\n");
}

#[tokio::test]
async fn invalid_utf8_is_passed_through_as_bytes() {
    // Arrange
    let input = [b'o', b'k', b'\n', 0xff, 0xfe, b'!', b'\n'];

    // Act
    let out = format_bytes(&input).await;

    // Assert
    assert_eq!(out, input.to_vec());
}

#[tokio::test]
async fn ungrouped_records_are_inspected() {
    // Act
    let out = format(&ndjson(&[
        json!({ "name": "hello:MQ==" }),
        json!({ "name": "there:Mg==" }),
    ]))
    .await;

    // Assert
    assert_eq!(out, "{ name: 'hello:MQ==' }\n{ name: 'there:Mg==' }\n");
}

#[tokio::test]
async fn ids_without_padding_are_not_grouped() {
    // Arrange
    let loose = json!({ "name": "foo:aBx", "message": "baz", "time": T0 });

    // Act
    let out = format(&ndjson(&[start(ID), loose, finish(ID, 200)])).await;

    // Assert
    assert_eq!(
        out,
        format!(
            "{{ name: 'foo:aBx', message: 'baz', time: '{T0}' }}\n{}\n",
            header(200)
        )
    );
}

#[tokio::test]
async fn nameless_events_are_inspected() {
    // Act
    let out = format(&ndjson(&[json!({ "message": "foo", "time": T0 })])).await;

    // Assert
    assert_eq!(out, format!("{{ message: 'foo', time: '{T0}' }}\n"));
}
