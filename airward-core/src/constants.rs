//! Shared constants for the runtime core
//!
//! Values that the original firmware kept as build flags or magic
//! numbers live here so the init sequencer and preference handlers
//! agree on them.

/// Default watchdog bound in seconds.
///
/// One loop iteration taking longer than this resets the device.
pub const DEFAULT_WATCHDOG_SECS: u32 = 60;

/// Forced-fast sample interval used only during sensor auto-detection.
///
/// Shortens the first read so detection latency stays low; the
/// user-configured interval is applied at the end of the init sequence.
pub const DETECTION_SAMPLE_INTERVAL_SECS: u16 = 1;

/// Reference CO2 concentration (ppm) forwarded on a calibration trigger.
///
/// Outdoor baseline; a one-shot command to the sensor subsystem, never
/// persisted.
pub const CO2_OUTDOOR_REFERENCE_PPM: u16 = 418;

/// Default sample interval in seconds when no configuration is stored.
pub const DEFAULT_SAMPLE_INTERVAL_SECS: u16 = 5;

/// Default display brightness when no configuration is stored.
pub const DEFAULT_BRIGHTNESS: u8 = 30;
