//! Circular slide index with timer-driven and manual advancement.
//!
//! The controller holds only the index arithmetic; the recurring tick itself
//! is scheduled by the backend bridge and delivered as an event on the UI
//! thread. Manual `next`/`previous`/`go_to` do not reschedule the ticker, so
//! a manual advance shortly before a tick shows two quick steps. That
//! matches the site this kiosk replaces and is kept on purpose.

use std::time::Duration;

use thiserror::Error;

/// Auto-advance cadence used when the operator passes no override.
pub const DEFAULT_AUTO_ADVANCE_INTERVAL: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CarouselError {
    #[error("slide index {index} out of range for {len} slides")]
    IndexOutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    active: usize,
    interval: Duration,
}

impl Carousel {
    /// A carousel over `len` slides, starting on slide 0. With `len == 0`
    /// the index stays pinned at 0 and no ticker should be scheduled.
    pub fn new(len: usize, interval: Duration) -> Self {
        Self {
            len,
            active: 0,
            interval,
        }
    }

    pub fn with_default_interval(len: usize) -> Self {
        Self::new(len, DEFAULT_AUTO_ADVANCE_INTERVAL)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether a recurring ticker should exist for this carousel. There is
    /// nothing to cycle through when the slide list is empty.
    pub fn wants_ticker(&self) -> bool {
        self.len > 0
    }

    /// One automatic tick. Identical to a manual [`Carousel::next`]; the two
    /// coexist without rescheduling each other.
    pub fn advance(&mut self) {
        self.next();
    }

    pub fn next(&mut self) {
        if self.len == 0 {
            return;
        }
        self.active = (self.active + 1) % self.len;
    }

    pub fn previous(&mut self) {
        if self.len == 0 {
            return;
        }
        self.active = (self.active + self.len - 1) % self.len;
    }

    /// Jump straight to a slide, as the pager dots do. Out-of-range indices
    /// are a caller contract violation and are rejected.
    pub fn go_to(&mut self, index: usize) -> Result<(), CarouselError> {
        if index >= self.len {
            return Err(CarouselError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        self.active = index;
        Ok(())
    }
}
