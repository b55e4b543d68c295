//! Device configuration and its persistence lifecycle
//!
//! ## Lifecycle contract
//!
//! [`DeviceConfig`] is the process-wide persisted state: created at
//! boot by loading from a [`ConfigStore`], mutated only by the
//! runtime's preference handlers, never destroyed while the device
//! runs. The invariant the rest of the system relies on:
//!
//! > The in-memory copy always reflects the last successfully saved
//! > value; after any save, the runtime reconciles by an explicit
//! > reload before propagating the change to a collaborator.
//!
//! Persist-before-propagate means a crash between the two leaves the
//! stored value consistent with user intent; propagation is redone on
//! the next boot by the normal init sequence.
//!
//! ## Stores
//!
//! The storage format is a collaborator concern, not ours. Two
//! implementations ship here: [`MemoryConfigStore`] (always available,
//! used by tests and the simulator) and [`JsonConfigStore`] (std only,
//! one JSON file - the host stand-in for the device's NVS partition).

use crate::constants::{DEFAULT_BRIGHTNESS, DEFAULT_SAMPLE_INTERVAL_SECS};
use crate::errors::ConfigError;
use crate::events::DeviceKind;

/// Maximum length of the device identity string (MAC-derived).
pub const MAX_DEVICE_ID: usize = 24;

/// Device identity string, derived from the hardware MAC at boot.
pub type DeviceId = heapless::String<MAX_DEVICE_ID>;

/// Persisted user preferences plus the boot-derived device identity.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeviceConfig {
    /// Sensor sample interval in seconds; always positive
    sample_interval_s: u16,
    /// Display brightness
    brightness: u8,
    /// WiFi connectivity enabled
    wifi_enabled: bool,
    /// Display colors inverted
    colors_inverted: bool,
    /// Temperature compensation applied by the sensor subsystem, in °C
    temp_offset: f32,
    /// Sensor model hint handed to auto-detection (UART models are
    /// chosen from the companion app)
    sensor_model: DeviceKind,
    /// Cloud publication enabled
    cloud_enabled: bool,
    /// Restrict auto-detection to I2C sensors
    i2c_only: bool,
    /// Verbose sensor driver logging
    debug_mode: bool,
    /// Read-only identity, set once at boot from the hardware MAC.
    /// Derived, never persisted.
    #[cfg_attr(feature = "serde", serde(skip))]
    device_id: DeviceId,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            sample_interval_s: DEFAULT_SAMPLE_INTERVAL_SECS,
            brightness: DEFAULT_BRIGHTNESS,
            wifi_enabled: false,
            colors_inverted: false,
            temp_offset: 0.0,
            sensor_model: DeviceKind::Auto,
            cloud_enabled: false,
            i2c_only: false,
            debug_mode: false,
            device_id: DeviceId::new(),
        }
    }
}

impl DeviceConfig {
    /// Sensor sample interval in seconds.
    pub fn sample_interval_s(&self) -> u16 {
        self.sample_interval_s
    }

    /// Set the sample interval; rejects zero.
    pub fn set_sample_interval(&mut self, secs: u16) -> Result<(), ConfigError> {
        if secs == 0 {
            return Err(ConfigError::ZeroSampleInterval);
        }
        self.sample_interval_s = secs;
        Ok(())
    }

    /// Display brightness.
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Set the display brightness.
    pub fn set_brightness(&mut self, value: u8) {
        self.brightness = value;
    }

    /// Whether WiFi connectivity is enabled.
    pub fn wifi_enabled(&self) -> bool {
        self.wifi_enabled
    }

    /// Toggle WiFi enablement.
    pub fn set_wifi_enabled(&mut self, enabled: bool) {
        self.wifi_enabled = enabled;
    }

    /// Whether display colors are inverted.
    pub fn colors_inverted(&self) -> bool {
        self.colors_inverted
    }

    /// Toggle display color inversion.
    pub fn set_colors_inverted(&mut self, enabled: bool) {
        self.colors_inverted = enabled;
    }

    /// Temperature compensation in °C.
    pub fn temp_offset(&self) -> f32 {
        self.temp_offset
    }

    /// Set the temperature compensation.
    pub fn set_temp_offset(&mut self, offset: f32) {
        self.temp_offset = offset;
    }

    /// Sensor model hint for auto-detection.
    pub fn sensor_model(&self) -> DeviceKind {
        self.sensor_model
    }

    /// Set the sensor model hint.
    pub fn set_sensor_model(&mut self, model: DeviceKind) {
        self.sensor_model = model;
    }

    /// Whether cloud publication is enabled.
    pub fn cloud_enabled(&self) -> bool {
        self.cloud_enabled
    }

    /// Toggle cloud publication.
    pub fn set_cloud_enabled(&mut self, enabled: bool) {
        self.cloud_enabled = enabled;
    }

    /// Whether auto-detection is restricted to I2C sensors.
    pub fn i2c_only(&self) -> bool {
        self.i2c_only
    }

    /// Restrict auto-detection to I2C sensors.
    pub fn set_i2c_only(&mut self, enabled: bool) {
        self.i2c_only = enabled;
    }

    /// Whether verbose sensor driver logging is on.
    pub fn debug_mode(&self) -> bool {
        self.debug_mode
    }

    /// Toggle verbose sensor driver logging.
    pub fn set_debug_mode(&mut self, enabled: bool) {
        self.debug_mode = enabled;
    }

    /// Device identity string (MAC-derived), set once at boot.
    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    /// Set the boot-derived identity. Truncates past [`MAX_DEVICE_ID`]
    /// bytes; identities are MACs in practice, well under the bound.
    pub fn set_device_id(&mut self, id: &str) {
        self.device_id.clear();
        for c in id.chars() {
            if self.device_id.push(c).is_err() {
                break;
            }
        }
    }
}

/// Persistence backend for [`DeviceConfig`].
///
/// The storage format and its write integrity belong to the
/// implementation; the runtime does not re-verify that a save landed
/// before reloading.
pub trait ConfigStore {
    /// Load the persisted configuration.
    fn load(&mut self) -> Result<DeviceConfig, ConfigError>;

    /// Persist the given configuration.
    fn save(&mut self, config: &DeviceConfig) -> Result<(), ConfigError>;
}

/// In-memory store for tests, the simulator, and no_std targets
/// without a filesystem.
#[derive(Debug, Default)]
pub struct MemoryConfigStore {
    saved: Option<DeviceConfig>,
}

impl MemoryConfigStore {
    /// Create a store pre-seeded with a configuration.
    pub fn with_config(config: DeviceConfig) -> Self {
        Self {
            saved: Some(config),
        }
    }
}

impl ConfigStore for MemoryConfigStore {
    fn load(&mut self) -> Result<DeviceConfig, ConfigError> {
        self.saved.clone().ok_or(ConfigError::StoreRead)
    }

    fn save(&mut self, config: &DeviceConfig) -> Result<(), ConfigError> {
        self.saved = Some(config.clone());
        Ok(())
    }
}

/// One-file JSON store, the host stand-in for the device NVS partition.
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct JsonConfigStore {
    path: std::path::PathBuf,
}

#[cfg(feature = "std")]
impl JsonConfigStore {
    /// Create a store backed by the given file path.
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[cfg(feature = "std")]
impl ConfigStore for JsonConfigStore {
    fn load(&mut self) -> Result<DeviceConfig, ConfigError> {
        let raw = std::fs::read_to_string(&self.path).map_err(|_| ConfigError::StoreRead)?;
        serde_json::from_str(&raw).map_err(|_| ConfigError::StoreDecode)
    }

    fn save(&mut self, config: &DeviceConfig) -> Result<(), ConfigError> {
        let raw =
            serde_json::to_string_pretty(config).map_err(|_| ConfigError::StoreEncode)?;
        std::fs::write(&self.path, raw).map_err(|_| ConfigError::StoreWrite)
    }
}
