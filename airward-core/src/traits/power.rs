//! Battery monitor and watchdog driver contracts

/// Battery charge monitor.
pub trait BatteryMonitor {
    /// Bring up the ADC / fuel gauge.
    fn init(&mut self);

    /// Refresh the charge estimate. Non-blocking.
    fn step(&mut self);

    /// Last known charge level in percent.
    fn charge_percent(&self) -> u8;
}

/// Hardware watchdog timer.
///
/// Supervision policy (bound tracking, late-feed diagnostics) lives in
/// [`crate::watchdog::LoopWatchdog`]; this trait is only the hardware
/// surface: arm once, feed forever, reset the device on expiry.
pub trait WatchdogDriver {
    /// Arm the timer with the given bound in seconds.
    fn init(&mut self, bound_s: u32);

    /// Re-arm the deadline.
    fn feed(&mut self);
}
