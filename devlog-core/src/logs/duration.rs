const MS_PER_SECOND: u64 = 1_000;
const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: u64 = 24 * MS_PER_HOUR;

/// Short human string for a millisecond duration: `10ms`, `1.5s`, `1m 5s`.
pub fn format_duration(ms: f64) -> String {
    if !ms.is_finite() {
        return "?".to_string();
    }
    if ms < 0.0 {
        return format!("-{}", format_duration(-ms));
    }
    if ms < MS_PER_SECOND as f64 {
        return format!("{}ms", ms.ceil() as u64);
    }

    let total = ms.round() as u64;
    let mut parts = Vec::with_capacity(4);

    for (unit_ms, suffix) in [(MS_PER_DAY, "d"), (MS_PER_HOUR, "h"), (MS_PER_MINUTE, "m")] {
        let value = (total / unit_ms) % unit_cap(unit_ms);
        if value > 0 {
            parts.push(format!("{value}{suffix}"));
        }
    }

    // seconds keep one decimal, truncated
    let tenths = (total % MS_PER_MINUTE) / 100;
    match (tenths / 10, tenths % 10) {
        (0, 0) => {}
        (whole, 0) => parts.push(format!("{whole}s")),
        (whole, frac) => parts.push(format!("{whole}.{frac}s")),
    }

    parts.join(" ")
}

/// Elapsed time relative to a group epoch, always `+` prefixed: `+50s`, `+-3ms`.
pub fn format_delta(delta_ms: Option<i64>) -> String {
    match delta_ms {
        Some(ms) => format!("+{}", format_duration(ms as f64)),
        None => "+?".to_string(),
    }
}

fn unit_cap(unit_ms: u64) -> u64 {
    match unit_ms {
        MS_PER_HOUR => 24,
        MS_PER_MINUTE => 60,
        _ => u64::MAX,
    }
}
