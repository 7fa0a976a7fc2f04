//! Relative-time cue scheduling.
//!
//! DESIGN
//! ======
//! A `Timeline` is a flat list of `(offset, cue)` pairs measured from a
//! single activation instant, and a `Cadence` is a fixed-period repeat from
//! that same instant. Callers feed elapsed time in and get back whatever
//! became due. `clear` cancels everything still pending.

#[cfg(test)]
#[path = "timeline_test.rs"]
mod timeline_test;

/// One scheduled entry, `at_ms` after activation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cue<T> {
    pub at_ms: u64,
    pub action: T,
}

impl<T> Cue<T> {
    pub fn new(at_ms: u64, action: T) -> Self {
        Self { at_ms, action }
    }
}

/// Ordered one-shot cues. Entries sharing an offset keep registration order.
#[derive(Clone, Debug)]
pub struct Timeline<T> {
    cues: Vec<Cue<T>>,
    cursor: usize,
}

impl<T: Clone> Timeline<T> {
    pub fn new(mut cues: Vec<Cue<T>>) -> Self {
        // Stable sort: equal offsets keep registration order.
        cues.sort_by_key(|cue| cue.at_ms);
        Self { cues, cursor: 0 }
    }

    /// Return every not-yet-returned cue with `at_ms <= elapsed_ms`, in order.
    pub fn due(&mut self, elapsed_ms: u64) -> Vec<T> {
        let mut fired = Vec::new();
        while let Some(cue) = self.cues.get(self.cursor) {
            if cue.at_ms > elapsed_ms {
                break;
            }
            fired.push(cue.action.clone());
            self.cursor += 1;
        }
        fired
    }

    #[must_use]
    pub fn next_at_ms(&self) -> Option<u64> {
        self.cues.get(self.cursor).map(|cue| cue.at_ms)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.cursor >= self.cues.len()
    }

    /// Drop every pending cue.
    pub fn clear(&mut self) {
        self.cues.clear();
        self.cursor = 0;
    }
}

/// Repeating tick every `period_ms`, first tick one full period after t0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cadence {
    period_ms: u64,
    fired: u64,
}

impl Cadence {
    #[must_use]
    pub fn new(period_ms: u64) -> Self {
        Self { period_ms: period_ms.max(1), fired: 0 }
    }

    #[must_use]
    pub fn period_ms(&self) -> u64 {
        self.period_ms
    }

    /// Number of ticks that became due since the previous call.
    pub fn ticks_until(&mut self, elapsed_ms: u64) -> u64 {
        let total = elapsed_ms / self.period_ms;
        let fresh = total.saturating_sub(self.fired);
        self.fired = self.fired.max(total);
        fresh
    }

    #[must_use]
    pub fn next_at_ms(&self) -> u64 {
        self.period_ms.saturating_mul(self.fired + 1)
    }
}
