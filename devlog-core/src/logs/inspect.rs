use crate::logs::constants::INSPECT_BREAK_WIDTH;
use crate::logs::palette::{Hue, Palette, Tone, visible_width};
use serde_json::Value;

/// Structural dump of a JSON value, in the style of Node's `util.inspect`.
pub fn inspect(value: &Value, palette: &Palette) -> String {
    render_value(value, palette, 0)
}

fn render_value(value: &Value, palette: &Palette, depth: usize) -> String {
    match value {
        Value::Null => palette.paint("null", Tone::Bold),
        Value::Bool(b) => palette.paint(&b.to_string(), Tone::Hue(Hue::Yellow)),
        Value::Number(n) => palette.paint(&n.to_string(), Tone::Hue(Hue::Yellow)),
        Value::String(s) => palette.paint(&quote(s), Tone::Hue(Hue::Green)),
        Value::Array(items) => {
            let entries = items
                .iter()
                .map(|item| render_value(item, palette, depth + 1))
                .collect();
            container('[', ']', entries, depth)
        }
        Value::Object(map) => {
            let entries = map
                .iter()
                .map(|(key, value)| {
                    format!(
                        "{}: {}",
                        render_key(key, palette),
                        render_value(value, palette, depth + 1)
                    )
                })
                .collect();
            container('{', '}', entries, depth)
        }
    }
}

fn container(open: char, close: char, entries: Vec<String>, depth: usize) -> String {
    if entries.is_empty() {
        return format!("{open}{close}");
    }

    let single = format!("{open} {} {close}", entries.join(", "));
    let fits = depth * 2 + visible_width(&single) <= INSPECT_BREAK_WIDTH;
    if fits && !single.contains('\n') {
        return single;
    }

    let pad = "  ".repeat(depth + 1);
    let closing_pad = "  ".repeat(depth);
    let body = entries.join(&format!(",\n{pad}"));
    format!("{open}\n{pad}{body}\n{closing_pad}{close}")
}

fn render_key(key: &str, palette: &Palette) -> String {
    if is_identifier(key) {
        key.to_string()
    } else {
        palette.paint(&quote(key), Tone::Hue(Hue::Green))
    }
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Single quotes unless the text has single quotes and no double quotes.
fn quote(text: &str) -> String {
    let delimiter = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(text.len() + 2);
    out.push(delimiter);
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == delimiter => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(delimiter);
    out
}
