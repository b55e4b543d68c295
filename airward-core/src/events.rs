//! Event and snapshot types flowing through the scheduling loop
//!
//! ## Overview
//!
//! Three kinds of data move through an iteration:
//!
//! 1. [`SampleOutcome`] - what the sensor subsystem reports after its
//!    non-blocking step: nothing yet, a completed sample cycle, or a
//!    diagnostic error. The runtime is the single dispatcher for these,
//!    so the sensor driver never calls back into orchestrator state.
//! 2. [`MetricsSnapshot`] - the bundle pushed to the display once per
//!    completed sample cycle. Never partially stale: it is assembled in
//!    one pass from fresh reads, consumed immediately, not retained.
//! 3. [`PreferenceEvent`] - a user edit surfaced by the display/BLE
//!    UI, consumed by the preference state machine.
//!
//! ## Memory model
//!
//! All types here are stack-only. Diagnostic messages use a bounded
//! [`heapless`] string ([`ErrorMsg`]) so the error path allocates
//! nothing, matching the rest of the crate's no-heap-in-hot-path rule.

use core::fmt;

/// Maximum length of a sensor diagnostic message, in bytes.
pub const MAX_ERROR_MSG: usize = 96;

/// Bounded diagnostic string carried by [`SampleOutcome::Error`].
pub type ErrorMsg = heapless::String<MAX_ERROR_MSG>;

/// Build an [`ErrorMsg`], truncating on a character boundary if the
/// source exceeds [`MAX_ERROR_MSG`] bytes.
pub fn error_msg(msg: &str) -> ErrorMsg {
    let mut out = ErrorMsg::new();
    for c in msg.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

/// Supported sensor device types, with stable wire ordinals.
///
/// The ordinal space is split into two pollutant classes: types `0..=3`
/// are particulate-matter devices and report a PM2.5-derived main
/// value; everything above is a CO2 device. The split is a fixed
/// property of the ordinal range, not of the individual model, so a
/// newly added PM model must stay inside `0..=3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum DeviceKind {
    /// Auto-detect; resolved to a concrete type by the sensor subsystem
    Auto = 0,
    /// Honeywell HPMA115 particulate sensor
    Honeywell = 1,
    /// Panasonic SN-GCJA5 particulate sensor
    Panasonic = 2,
    /// Sensirion SPS30 particulate sensor
    Sensirion = 3,
    /// Winsen MH-Z19 CO2 sensor
    Mhz19 = 4,
    /// Cubic CM1106 CO2 sensor
    Cm1106 = 5,
    /// SenseAir S8 CO2 sensor
    SenseairS8 = 6,
}

/// Which pollutant a device class reports as its main value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollutantClass {
    /// PM2.5-derived main value (µg/m³)
    Particulate,
    /// CO2-derived main value (ppm)
    CarbonDioxide,
}

impl DeviceKind {
    /// Highest ordinal belonging to the particulate-matter class.
    pub const PM_CLASS_MAX_ORDINAL: u8 = 3;

    /// Stable ordinal of this device type.
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Pollutant class of this device type.
    pub const fn class(self) -> PollutantClass {
        if self.ordinal() <= Self::PM_CLASS_MAX_ORDINAL {
            PollutantClass::Particulate
        } else {
            PollutantClass::CarbonDioxide
        }
    }

    /// Human-readable name for logs and the display.
    pub const fn name(self) -> &'static str {
        match self {
            DeviceKind::Auto => "auto",
            DeviceKind::Honeywell => "HPMA115",
            DeviceKind::Panasonic => "SN-GCJA5",
            DeviceKind::Sensirion => "SPS30",
            DeviceKind::Mhz19 => "MH-Z19",
            DeviceKind::Cm1106 => "CM1106",
            DeviceKind::SenseairS8 => "SenseAir S8",
        }
    }
}

impl Default for DeviceKind {
    fn default() -> Self {
        DeviceKind::Auto
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of one non-blocking sensor subsystem step.
///
/// The sensor driver alternates between "sampling" and "sample
/// complete"; on completing a cycle it reports exactly one of
/// `DataReady` or `Error`.
#[derive(Debug, Clone, PartialEq)]
pub enum SampleOutcome {
    /// Still sampling; nothing to dispatch this iteration
    Idle,
    /// A full sample cycle completed; current values are readable
    DataReady,
    /// The cycle failed; diagnostic only, the driver owns any retry
    Error(ErrorMsg),
}

/// Metrics bundle pushed to the display once per completed sample cycle.
///
/// Zero values are valid, non-exceptional outputs: a missing sensor
/// reports 0, not an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricsSnapshot {
    /// PM2.5 (µg/m³) or CO2 (ppm) depending on the device class
    pub main_value: u16,
    /// Relative humidity in percent
    pub humidity: f32,
    /// Temperature in °C, already offset-compensated by the driver
    pub temperature: f32,
    /// Battery charge level in percent
    pub battery_percent: u8,
    /// WiFi signal strength in dBm (0 when not connected)
    pub wifi_rssi: i16,
    /// Device type the values came from
    pub kind: DeviceKind,
}

/// Tri-flag connectivity status, recomputed every loop iteration and
/// pushed to the display. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectivityStatus {
    /// WiFi link is up
    pub wifi_connected: bool,
    /// Sensor subsystem detected a supported device at boot
    pub sensors_live: bool,
    /// At least one BLE client is connected
    pub ble_connected: bool,
}

/// A user-initiated configuration change surfaced by the display/BLE UI.
///
/// One variant per edit the UI can make; the runtime's preference state
/// machine is the single consumer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PreferenceEvent {
    /// WiFi enablement toggled
    WifiMode(bool),
    /// Display brightness changed
    Brightness(u8),
    /// Display color inversion toggled
    ColorsInverted(bool),
    /// Sample interval changed, in seconds
    SampleTime(u16),
    /// User requested an outdoor CO2 recalibration
    CalibrationReady,
}
