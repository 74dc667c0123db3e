use crate::conf::FormatConfig;
use crate::logs::palette::Palette;
use crate::logs::parse::classify;
use crate::logs::render::Renderer;
use crate::logs::tracker::GroupTracker;
use crate::logs::types::Classified;
use std::time::Instant;

/// Classifier, tracker and renderer wired together for one pipeline run.
pub struct LogFormatter {
    renderer: Renderer,
    tracker: GroupTracker,
}

impl LogFormatter {
    pub fn new(config: &FormatConfig) -> Self {
        let renderer = Renderer::new(Palette::new(config.color.enabled()), config.timezone);
        let tracker = GroupTracker::new(renderer, config.grace_window())
            .with_open_ttl(config.open_group_ttl());

        Self { renderer, tracker }
    }

    /// Appends whatever `line` produces, newline terminated, to `out`.
    pub fn process_line(&mut self, line: &[u8], now: Instant, out: &mut Vec<u8>) {
        let rendered = match classify(line) {
            Classified::PassThrough(raw) => {
                tracing::trace!(bytes = raw.len(), "passing through non-JSON line");
                out.extend_from_slice(&raw);
                out.push(b'\n');
                return;
            }
            Classified::Standalone(value) => Some(self.renderer.standalone(&value)),
            Classified::Group(event) => self.tracker.dispatch(event, now),
        };

        if let Some(text) = rendered {
            out.extend_from_slice(text.as_bytes());
            out.push(b'\n');
        }
    }

    pub fn evict_expired(&mut self, now: Instant) {
        self.tracker.evict_expired(now);
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.tracker.next_deadline()
    }

    pub fn tracker(&self) -> &GroupTracker {
        &self.tracker
    }
}
