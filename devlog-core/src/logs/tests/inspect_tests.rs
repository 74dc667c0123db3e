use crate::logs::inspect::inspect;
use crate::logs::palette::Palette;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn flat_object_renders_on_one_line() {
    // Act
    let text = inspect(&json!({ "name": "hello:MQ==" }), &Palette::plain());

    // Assert
    assert_eq!(text, "{ name: 'hello:MQ==' }");
}

#[test]
fn strings_are_green_when_colored() {
    // Act
    let text = inspect(&json!({ "name": "hello:MQ==" }), &Palette::new(true));

    // Assert
    assert_eq!(text, "{ name: \u{1b}[32m'hello:MQ=='\u{1b}[39m }");
}

#[test]
fn keys_keep_their_input_order() {
    // Act
    let text = inspect(&json!({ "zeta": 1, "alpha": 2 }), &Palette::plain());

    // Assert
    assert_eq!(text, "{ zeta: 1, alpha: 2 }");
}

#[test]
fn nested_and_empty_containers() {
    // Act
    let text = inspect(
        &json!({ "a": 1.5, "b": [true, null], "c": {}, "d": [] }),
        &Palette::plain(),
    );

    // Assert
    assert_eq!(text, "{ a: 1.5, b: [ true, null ], c: {}, d: [] }");
}

#[test]
fn odd_keys_and_quotes_are_escaped() {
    // Act
    let text = inspect(
        &json!({ "content-type": "it's", "both": "'\"", "nl": "a\nb" }),
        &Palette::plain(),
    );

    // Assert
    assert_eq!(
        text,
        r#"{ 'content-type': "it's", both: '\'"', nl: 'a\nb' }"#
    );
}

#[test]
fn long_objects_break_over_lines() {
    // Arrange
    let long = "x".repeat(70);

    // Act
    let text = inspect(
        &json!({ "message": long, "nested": { "ok": true } }),
        &Palette::plain(),
    );

    // Assert
    assert_eq!(
        text,
        format!("{{\n  message: '{long}',\n  nested: {{ ok: true }}\n}}")
    );
}

#[test]
fn scalars_render_bare() {
    assert_eq!(inspect(&json!(42), &Palette::plain()), "42");
    assert_eq!(inspect(&json!("hi"), &Palette::plain()), "'hi'");
    assert_eq!(inspect(&json!(null), &Palette::plain()), "null");
}
