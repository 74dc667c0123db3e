#![allow(dead_code)]

use serde_json::{Value, json};

pub const ID: &str = "MQ==";
pub const HUMAN_ID: &str = "\u{1F431} ";
pub const T0: &str = "2017-01-03T00:00:00Z";
pub const T50: &str = "2017-01-03T00:00:50Z";

pub fn start(id: &str) -> Value {
    json!({
        "name": format!("request:{id}"),
        "req": { "method": "GET", "url": "/foo" },
        "time": T0,
    })
}

pub fn finish(id: &str, status: i64) -> Value {
    json!({
        "name": format!("request:{id}"),
        "statusCode": status,
        "latency": 10,
        "time": T0,
    })
}

pub fn womp(id: &str, extra: Value) -> Value {
    let mut record = json!({ "name": format!("womp:{id}"), "time": T50 });
    if let (Some(target), Value::Object(fields)) = (record.as_object_mut(), extra) {
        target.extend(fields);
    }
    record
}

pub fn header(status: i64) -> String {
    format!("00:00:00 {status}     10ms    GET /foo (id: {HUMAN_ID})")
}
