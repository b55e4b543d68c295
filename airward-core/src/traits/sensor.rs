//! Sensor subsystem contract
//!
//! The driver owns multi-sensor detection, per-protocol reading,
//! calibration and retry. The runtime only configures it, steps it,
//! and reads current values after a `DataReady` outcome - the fan-out
//! re-reads everything fresh rather than caching, so repeated
//! dispatches of the same cycle stay idempotent.

use crate::events::{DeviceKind, SampleOutcome};

/// Driver knobs applied once, before [`SensorSubsystem::init`].
///
/// The original firmware sets these through individual calls in a
/// fixed order; bundling them keeps the configure-then-init sequence
/// a single step.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SensorSettings {
    /// Temperature compensation in °C, added to raw readings
    pub temp_offset: f32,
    /// Restrict auto-detection to I2C sensors
    pub i2c_only: bool,
    /// Verbose driver logging
    pub debug_mode: bool,
}

/// The multi-sensor acquisition subsystem.
pub trait SensorSubsystem {
    /// Apply driver settings. Called once, before [`init`](Self::init).
    fn configure(&mut self, settings: SensorSettings);

    /// Run auto-detection, starting all sensors that respond. `hint`
    /// selects a UART model when the user chose one; [`DeviceKind::Auto`]
    /// probes. Detection failure is not an error: the subsystem comes
    /// up unconfigured and reads report zero.
    fn init(&mut self, hint: DeviceKind);

    /// One non-blocking acquisition step.
    fn step(&mut self) -> SampleOutcome;

    /// Current sample interval in seconds.
    fn sample_interval(&self) -> u16;

    /// Change the sample interval, in seconds.
    fn set_sample_interval(&mut self, secs: u16);

    /// PM2.5 concentration in µg/m³ (0 when absent).
    fn pm25(&self) -> u16;

    /// CO2 concentration in ppm (0 when absent).
    fn co2(&self) -> u16;

    /// Relative humidity in percent from the primary humidity sensor
    /// (0.0 when absent).
    fn humidity(&self) -> f32;

    /// Temperature in °C from the primary temperature sensor
    /// (0.0 when absent).
    fn temperature(&self) -> f32;

    /// Humidity reported by the CO2 sensor itself, the documented
    /// fallback when the primary reads exactly zero.
    fn co2_humidity(&self) -> f32;

    /// Temperature reported by the CO2 sensor itself, the documented
    /// fallback when the primary reads exactly zero.
    fn co2_temperature(&self) -> f32;

    /// Device type resolved by detection.
    fn device_kind(&self) -> DeviceKind;

    /// Human-readable label of the detected device, for the welcome
    /// screen.
    fn detected_label(&self) -> &str;

    /// Whether detection found a supported device.
    fn is_configured(&self) -> bool;

    /// One-shot CO2 recalibration against a known reference
    /// concentration in ppm.
    fn recalibrate_co2(&mut self, reference_ppm: u16);
}
