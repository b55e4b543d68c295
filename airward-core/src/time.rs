//! Time abstraction for the scheduling loop
//!
//! The watchdog supervisor is the only core component that measures
//! wall-clock progress, and it must work the same on hardware (tick
//! counter since boot) and on a host (std monotonic clock). Both hide
//! behind the [`Clock`] trait; tests drive a [`MockClock`] by hand.

/// Timestamp in milliseconds since device boot (monotonic).
pub type Timestamp = u64;

/// Source of monotonic time for the runtime.
pub trait Clock {
    /// Current timestamp in milliseconds since boot.
    fn now(&self) -> Timestamp;
}

/// Monotonic clock backed by `std::time::Instant` (host builds).
#[cfg(feature = "std")]
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    start: std::time::Instant,
}

#[cfg(feature = "std")]
impl MonotonicClock {
    /// Create a clock anchored at the moment of construction.
    pub fn new() -> Self {
        Self {
            start: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl Clock for MonotonicClock {
    fn now(&self) -> Timestamp {
        self.start.elapsed().as_millis() as Timestamp
    }
}

/// Manually driven clock for tests.
///
/// Interior mutability so the runtime can hold it boxed while the test
/// advances it from outside.
#[derive(Debug, Default)]
pub struct MockClock {
    now_ms: core::cell::Cell<Timestamp>,
}

impl MockClock {
    /// Create a mock clock starting at the given timestamp.
    pub fn new(start_ms: Timestamp) -> Self {
        Self {
            now_ms: core::cell::Cell::new(start_ms),
        }
    }

    /// Jump to an absolute timestamp.
    pub fn set(&self, ms: Timestamp) {
        self.now_ms.set(ms);
    }

    /// Advance the clock by `ms` milliseconds.
    pub fn advance(&self, ms: u64) {
        self.now_ms.set(self.now_ms.get() + ms);
    }
}

impl Clock for MockClock {
    fn now(&self) -> Timestamp {
        self.now_ms.get()
    }
}

#[cfg(not(feature = "std"))]
use alloc::rc::Rc;
#[cfg(feature = "std")]
use std::rc::Rc;

/// Shared handles delegate, so a test can keep a clone of a [`MockClock`]
/// while the runtime owns the boxed trait object.
impl<C: Clock + ?Sized> Clock for Rc<C> {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}
