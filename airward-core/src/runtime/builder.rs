//! Runtime assembly
//!
//! Every collaborator is required; bounds and the detection interval
//! have defaults from [`crate::constants`]. `build` fails fast on a
//! missing collaborator instead of panicking at first use.

use crate::config::{ConfigStore, DeviceConfig, DeviceId};
use crate::constants::{DEFAULT_WATCHDOG_SECS, DETECTION_SAMPLE_INTERVAL_SECS};
use crate::time::Clock;
use crate::traits::{
    BatteryMonitor, BleServer, CloudPublisher, Display, OtaUpdater, SensorSubsystem,
    WatchdogDriver, WifiLink,
};
use crate::watchdog::LoopWatchdog;
use crate::{Runtime, RuntimeError};

#[cfg(not(feature = "std"))]
use alloc::boxed::Box;

/// Builder for [`Runtime`]. See [`Runtime::builder`].
pub struct RuntimeBuilder {
    store: Option<Box<dyn ConfigStore>>,
    clock: Option<Box<dyn Clock>>,
    sensors: Option<Box<dyn SensorSubsystem>>,
    display: Option<Box<dyn Display>>,
    battery: Option<Box<dyn BatteryMonitor>>,
    wifi: Option<Box<dyn WifiLink>>,
    ble: Option<Box<dyn BleServer>>,
    cloud: Option<Box<dyn CloudPublisher>>,
    ota: Option<Box<dyn OtaUpdater>>,
    watchdog: Option<Box<dyn WatchdogDriver>>,
    device_id: DeviceId,
    watchdog_bound_s: u32,
    detection_interval_s: u16,
}

impl RuntimeBuilder {
    /// Create a builder with default bounds and no collaborators.
    pub fn new() -> Self {
        Self {
            store: None,
            clock: None,
            sensors: None,
            display: None,
            battery: None,
            wifi: None,
            ble: None,
            cloud: None,
            ota: None,
            watchdog: None,
            device_id: DeviceId::new(),
            watchdog_bound_s: DEFAULT_WATCHDOG_SECS,
            detection_interval_s: DETECTION_SAMPLE_INTERVAL_SECS,
        }
    }

    /// Configuration store collaborator.
    pub fn store(mut self, store: Box<dyn ConfigStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Clock used for watchdog supervision.
    pub fn clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Sensor subsystem collaborator.
    pub fn sensors(mut self, sensors: Box<dyn SensorSubsystem>) -> Self {
        self.sensors = Some(sensors);
        self
    }

    /// Display collaborator.
    pub fn display(mut self, display: Box<dyn Display>) -> Self {
        self.display = Some(display);
        self
    }

    /// Battery monitor collaborator.
    pub fn battery(mut self, battery: Box<dyn BatteryMonitor>) -> Self {
        self.battery = Some(battery);
        self
    }

    /// WiFi link collaborator.
    pub fn wifi(mut self, wifi: Box<dyn WifiLink>) -> Self {
        self.wifi = Some(wifi);
        self
    }

    /// BLE server collaborator.
    pub fn ble(mut self, ble: Box<dyn BleServer>) -> Self {
        self.ble = Some(ble);
        self
    }

    /// Cloud publisher collaborator.
    pub fn cloud(mut self, cloud: Box<dyn CloudPublisher>) -> Self {
        self.cloud = Some(cloud);
        self
    }

    /// OTA update checker collaborator.
    pub fn ota(mut self, ota: Box<dyn OtaUpdater>) -> Self {
        self.ota = Some(ota);
        self
    }

    /// Hardware watchdog driver.
    pub fn watchdog(mut self, watchdog: Box<dyn WatchdogDriver>) -> Self {
        self.watchdog = Some(watchdog);
        self
    }

    /// Device identity, derived from the hardware MAC by the caller.
    pub fn device_id(mut self, id: &str) -> Self {
        self.device_id.clear();
        for c in id.chars() {
            if self.device_id.push(c).is_err() {
                break;
            }
        }
        self
    }

    /// Watchdog bound in seconds (default
    /// [`DEFAULT_WATCHDOG_SECS`](crate::constants::DEFAULT_WATCHDOG_SECS)).
    pub fn watchdog_bound(mut self, secs: u32) -> Self {
        self.watchdog_bound_s = secs;
        self
    }

    /// Detection-time sample interval in seconds (default
    /// [`DETECTION_SAMPLE_INTERVAL_SECS`](crate::constants::DETECTION_SAMPLE_INTERVAL_SECS)).
    pub fn detection_interval(mut self, secs: u16) -> Self {
        self.detection_interval_s = secs;
        self
    }

    /// Assemble the runtime; fails on the first missing collaborator.
    pub fn build(self) -> Result<Runtime, RuntimeError> {
        let missing = RuntimeError::MissingCollaborator;
        let driver = self.watchdog.ok_or(missing("watchdog"))?;
        let clock = self.clock.ok_or(missing("clock"))?;
        Ok(Runtime {
            config: DeviceConfig::default(),
            store: self.store.ok_or(missing("store"))?,
            sensors: self.sensors.ok_or(missing("sensors"))?,
            display: self.display.ok_or(missing("display"))?,
            battery: self.battery.ok_or(missing("battery"))?,
            wifi: self.wifi.ok_or(missing("wifi"))?,
            ble: self.ble.ok_or(missing("ble"))?,
            cloud: self.cloud.ok_or(missing("cloud"))?,
            ota: self.ota.ok_or(missing("ota"))?,
            watchdog: LoopWatchdog::new(driver, clock, self.watchdog_bound_s),
            boot_id: self.device_id,
            detection_interval_s: self.detection_interval_s,
            started: false,
        })
    }
}

impl Default for RuntimeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
