use std::time::Duration;

/// How long a closed group stays in the live map to catch straggling children.
pub const GRACE_WINDOW: Duration = Duration::from_millis(33);

/// Width of the right-aligned latency / elapsed columns.
pub const DURATION_COLUMN_WIDTH: usize = 8;

/// Width of the method column, sized for `DELETE`.
pub const METHOD_COLUMN_WIDTH: usize = "DELETE".len();

/// Visible width of the `ERR` / `WRN` / `LOG` badge.
pub const BADGE_WIDTH: usize = 3;

/// Number of glyphs in a human id.
pub const HUMAN_ID_GLYPHS: usize = 4;

/// Top-level label for request lifecycle records.
pub const REQUEST_LABEL: &str = "request";

/// Single-line width above which standalone records are broken over lines.
pub const INSPECT_BREAK_WIDTH: usize = 72;

/// Placeholder for request fields the record did not carry.
pub const MISSING_FIELD: &str = "-";
