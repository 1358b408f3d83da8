use std::collections::VecDeque;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HighlightEvent {
    pub x: i32,
    pub y: i32,
    pub color_index: usize,
    pub timestamp: f64,
    pub size: f32,
}

impl HighlightEvent {
    #[inline]
    pub fn age(&self, now: f64) -> f64 {
        now - self.timestamp
    }
}

/// Opacity of a highlight: cubic ease-out from 1 at age 0 to 0 at `fade_ms`.
#[inline]
pub fn fade_alpha(event: &HighlightEvent, now: f64, fade_ms: f64) -> f32 {
    if fade_ms <= 0.0 {
        return 0.0;
    }
    let t = (event.age(now) / fade_ms).clamp(0.0, 1.0);
    (1.0 - t * t * t) as f32
}

/// Recently visited cells, oldest first.
///
/// A cell is only appended when it differs from the last recorded one, so a
/// pointer jittering inside a single cell does not flood the queue.
#[derive(Clone, Debug)]
pub struct HighlightTrail {
    events: VecDeque<HighlightEvent>,
    last_cell: Option<(i32, i32)>,
    fade_ms: f64,
    cap: usize,
    size: f32,
}

impl HighlightTrail {
    pub fn new(fade_ms: f64, cap: usize, size: f32) -> Self {
        Self {
            events: VecDeque::with_capacity(cap),
            last_cell: None,
            fade_ms,
            cap,
            size,
        }
    }

    /// Returns `true` when an event was appended.
    pub fn record(&mut self, x: i32, y: i32, color_index: usize, now: f64) -> bool {
        if self.last_cell == Some((x, y)) {
            return false;
        }
        self.last_cell = Some((x, y));
        self.events.push_back(HighlightEvent {
            x,
            y,
            color_index,
            timestamp: now,
            size: self.size,
        });
        self.enforce_cap();
        true
    }

    /// Drop events older than the fade window, then enforce the size cap.
    pub fn prune(&mut self, now: f64) {
        let fade = self.fade_ms;
        self.events.retain(|e| e.age(now) <= fade);
        self.enforce_cap();
    }

    /// Let the next `record` light the same cell again (pointer left the surface).
    pub fn forget_last_cell(&mut self) {
        self.last_cell = None;
    }

    #[inline]
    pub fn alpha(&self, event: &HighlightEvent, now: f64) -> f32 {
        fade_alpha(event, now, self.fade_ms)
    }

    pub fn iter(&self) -> impl Iterator<Item = &HighlightEvent> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn contains_cell(&self, x: i32, y: i32) -> bool {
        self.events.iter().any(|e| e.x == x && e.y == y)
    }

    fn enforce_cap(&mut self) {
        while self.events.len() > self.cap {
            self.events.pop_front();
        }
    }
}
