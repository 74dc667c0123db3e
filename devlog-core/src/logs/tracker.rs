use crate::logs::group::Group;
use crate::logs::human_id::{GlyphAlphabet, Pictographs, human_id};
use crate::logs::render::Renderer;
use crate::logs::types::{GroupEvent, LogRecord, RecordKind};
use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};

/// Correlates start / finish records and buffers the lines in between.
///
/// Every operation takes the current instant, so the grace window is driven
/// by whoever owns the tracker (the async run loop, or a test).
pub struct GroupTracker {
    renderer: Renderer,
    alphabet: Box<dyn GlyphAlphabet + Send>,
    grace: Duration,
    open_ttl: Option<Duration>,
    groups: HashMap<String, Group>,
    // closed groups, in deadline order
    evictions: VecDeque<(Instant, String)>,
}

impl GroupTracker {
    pub fn new(renderer: Renderer, grace: Duration) -> Self {
        Self {
            renderer,
            alphabet: Box::new(Pictographs),
            grace,
            open_ttl: None,
            groups: HashMap::new(),
            evictions: VecDeque::new(),
        }
    }

    pub fn with_alphabet(mut self, alphabet: impl GlyphAlphabet + Send + 'static) -> Self {
        self.alphabet = Box::new(alphabet);
        self
    }

    pub fn with_open_ttl(mut self, ttl: Option<Duration>) -> Self {
        self.open_ttl = ttl;
        self
    }

    pub fn dispatch(&mut self, event: GroupEvent, now: Instant) -> Option<String> {
        self.evict_expired(now);

        match event.kind {
            RecordKind::Start => self.on_start(event.id, event.label, event.record, now),
            RecordKind::Finish => self.on_finish(&event.id, event.record, now),
            RecordKind::Child => self.on_child(&event.id, event.label, event.record),
        }
    }

    pub fn on_start(
        &mut self,
        id: String,
        label: String,
        record: LogRecord,
        now: Instant,
    ) -> Option<String> {
        if self.groups.contains_key(&id) {
            tracing::debug!(group = %id, "repeated start logged as a child line");
            return self.on_child(&id, label, record);
        }

        let human_id = human_id(&id, self.alphabet.as_ref());
        tracing::debug!(group = %id, human_id = %human_id, "group opened");
        self.groups
            .insert(id.clone(), Group::open(id, record, human_id, now));
        None
    }

    pub fn on_finish(&mut self, id: &str, record: LogRecord, now: Instant) -> Option<String> {
        let Some(group) = self.groups.get_mut(id) else {
            tracing::debug!(group = %id, "finish for unknown group dropped");
            return None;
        };

        if !group.close() {
            tracing::debug!(group = %id, "repeated finish dropped");
            return None;
        }

        tracing::debug!(group = %id, entries = group.entries().len(), "group closed");
        let block = self.renderer.block(group, &record);
        match now.checked_add(self.grace) {
            Some(deadline) => self.evictions.push_back((deadline, id.to_string())),
            None => tracing::debug!(group = %id, "grace window out of range; group kept"),
        }
        Some(block)
    }

    pub fn on_child(&mut self, id: &str, label: String, record: LogRecord) -> Option<String> {
        let Some(group) = self.groups.get_mut(id) else {
            return Some(self.renderer.standalone(&record.raw));
        };

        let item = group.item(label, record);
        if group.is_closed() {
            return Some(self.renderer.late_item(&item, group.human_id()));
        }

        group.buffer(item);
        None
    }

    /// Drops closed groups whose grace window has passed, and open groups
    /// older than the TTL when one is configured.
    pub fn evict_expired(&mut self, now: Instant) {
        while self
            .evictions
            .front()
            .is_some_and(|(deadline, _)| *deadline <= now)
        {
            if let Some((_, id)) = self.evictions.pop_front() {
                self.groups.remove(&id);
                tracing::debug!(group = %id, "group evicted");
            }
        }

        if let Some(ttl) = self.open_ttl {
            self.groups.retain(|id, group| {
                let keep = group.is_closed() || now.duration_since(group.opened_at()) <= ttl;
                if !keep {
                    tracing::warn!(
                        group = %id,
                        entries = group.entries().len(),
                        "group never finished; discarding"
                    );
                }
                keep
            });
        }
    }

    /// Earliest instant at which `evict_expired` has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        let grace = self.evictions.front().map(|(deadline, _)| *deadline);
        let ttl = self.open_ttl.and_then(|ttl| {
            self.groups
                .values()
                .filter(|group| !group.is_closed())
                .filter_map(|group| group.opened_at().checked_add(ttl))
                .min()
        });

        match (grace, ttl) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn is_tracking(&self, id: &str) -> bool {
        self.groups.contains_key(id)
    }

    pub fn open_groups(&self) -> usize {
        self.groups.values().filter(|group| !group.is_closed()).count()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
