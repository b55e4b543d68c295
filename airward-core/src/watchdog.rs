//! Loop liveness supervision
//!
//! The watchdog is the system's only cancellation mechanism: it does
//! not cancel a stuck operation, it resets the whole device when the
//! loop fails to feed within the bound. [`LoopWatchdog`] pairs the
//! hardware driver with a clock so the core can also *observe* late
//! feeds - on hardware the driver has already rebooted us by then, but
//! on a host (simulator, tests) the warn log is the visible symptom.

use crate::time::{Clock, Timestamp};
use crate::traits::WatchdogDriver;

#[cfg(not(feature = "std"))]
use alloc::boxed::Box;

/// Watchdog supervision for the scheduling loop.
///
/// Fed exactly once per iteration, after all network-affecting steps.
pub struct LoopWatchdog {
    driver: Box<dyn WatchdogDriver>,
    clock: Box<dyn Clock>,
    bound_s: u32,
    last_feed: Option<Timestamp>,
}

impl LoopWatchdog {
    /// Pair a hardware driver with a clock under the given bound.
    pub fn new(driver: Box<dyn WatchdogDriver>, clock: Box<dyn Clock>, bound_s: u32) -> Self {
        Self {
            driver,
            clock,
            bound_s,
            last_feed: None,
        }
    }

    /// Configured bound in seconds.
    pub fn bound_s(&self) -> u32 {
        self.bound_s
    }

    /// Arm the hardware timer. The arming moment counts as a feed so
    /// a slow first iteration is measured, not ignored.
    pub fn init(&mut self) {
        self.driver.init(self.bound_s);
        self.last_feed = Some(self.clock.now());
    }

    /// Re-arm the deadline. Returns `false` when the gap since the
    /// previous feed exceeded the bound - on real hardware the device
    /// already reset, so `false` only surfaces in host runs.
    pub fn feed(&mut self) -> bool {
        let now = self.clock.now();
        let on_time = match self.last_feed {
            Some(prev) => now.saturating_sub(prev) <= u64::from(self.bound_s) * 1_000,
            None => true,
        };
        if !on_time {
            log::warn!(
                "[WD] loop iteration exceeded watchdog bound of {} s; hardware would have reset",
                self.bound_s
            );
        }
        self.driver.feed();
        self.last_feed = Some(now);
        on_time
    }
}
