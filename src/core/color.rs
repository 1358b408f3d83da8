/// Palette index that advances once per `interval_ms`.
#[derive(Clone, Copy, Debug)]
pub struct ColorCycler {
    index: usize,
    last_advance: f64,
    interval_ms: f64,
    palette_len: usize,
}

impl ColorCycler {
    pub fn new(palette_len: usize, interval_ms: f64, now: f64) -> Self {
        Self {
            index: 0,
            last_advance: now,
            interval_ms,
            palette_len: palette_len.max(1),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn last_advance(&self) -> f64 {
        self.last_advance
    }

    /// Advance at most once. A second call with the same `now` is a no-op.
    pub fn tick(&mut self, now: f64) -> bool {
        if now > self.last_advance && now - self.last_advance >= self.interval_ms {
            self.index = (self.index + 1) % self.palette_len;
            self.last_advance = now;
            true
        } else {
            false
        }
    }
}
