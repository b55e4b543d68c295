//! The runtime orchestrator: init sequencing and the scheduling loop
//!
//! ## Overview
//!
//! [`Runtime`] owns the device configuration and every collaborator,
//! and is the single dispatcher for the two event surfaces: sensor
//! sample outcomes and user preference changes. One logical thread of
//! control runs everything; dispatch happens synchronously and to
//! completion inside [`Runtime::step`].
//!
//! ## Init sequence
//!
//! [`Runtime::init`] is one-shot and strictly ordered, because later
//! steps read values produced by earlier ones (display seeding needs
//! the loaded config; the final sample interval must overwrite the
//! detection-time interval):
//!
//! 1. Load configuration (defaults + warn on store failure)
//! 2. Seed and bring up the display, show the welcome view
//! 3. Log device identity and firmware version
//! 4. Sensor bring-up: settings, forced-fast detection interval,
//!    auto-detection (failure is surfaced, never fatal)
//! 5. Battery monitor init
//! 6. Watchdog armed
//! 7. WiFi init
//! 8. BLE server init
//! 9. Cloud publisher init
//! 10. Welcome summary (WiFi status, interval, identity, watchdog)
//! 11. Switch to the main view
//! 12. Initial metrics snapshot from whatever has been read
//! 13. One sensor step
//! 14. Apply the user-configured sample interval
//!
//! No step is retried; a second `init` call is an error.
//!
//! ## Loop body
//!
//! Each [`Runtime::step`] runs a fixed, unconditional sequence of
//! non-blocking steps: sensors (plus outcome dispatch), battery, BLE,
//! WiFi, cloud, OTA, watchdog feed, status push, preference drain.
//! Ordering invariant: the watchdog feed comes after every
//! network-affecting step and before the display status push, so a
//! silent hang anywhere earlier starves the deadline and resets the
//! device.

mod builder;
mod fanout;
mod prefs;

pub use builder::RuntimeBuilder;

use crate::config::{ConfigStore, DeviceConfig, DeviceId};
use crate::events::{ConnectivityStatus, SampleOutcome};
use crate::traits::{
    BatteryMonitor, BleServer, CloudPublisher, Display, OtaUpdater, SensorSettings,
    SensorSubsystem, WifiLink,
};
use crate::watchdog::LoopWatchdog;
use crate::RuntimeError;

use core::fmt::Write as _;

#[cfg(not(feature = "std"))]
use alloc::boxed::Box;

/// The runtime orchestrator. Built via [`Runtime::builder`].
pub struct Runtime {
    pub(crate) config: DeviceConfig,
    pub(crate) store: Box<dyn ConfigStore>,
    pub(crate) sensors: Box<dyn SensorSubsystem>,
    pub(crate) display: Box<dyn Display>,
    pub(crate) battery: Box<dyn BatteryMonitor>,
    pub(crate) wifi: Box<dyn WifiLink>,
    pub(crate) ble: Box<dyn BleServer>,
    pub(crate) cloud: Box<dyn CloudPublisher>,
    pub(crate) ota: Box<dyn OtaUpdater>,
    pub(crate) watchdog: LoopWatchdog,
    pub(crate) boot_id: DeviceId,
    pub(crate) detection_interval_s: u16,
    pub(crate) started: bool,
}

impl core::fmt::Debug for Runtime {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Runtime")
            .field("config", &self.config)
            .field("boot_id", &self.boot_id)
            .field("detection_interval_s", &self.detection_interval_s)
            .field("started", &self.started)
            .finish_non_exhaustive()
    }
}

impl Runtime {
    /// Start assembling a runtime.
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Current device configuration.
    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }

    /// One-shot startup sequence. See the module docs for the step
    /// list and ordering rationale.
    pub fn init(&mut self) -> Result<(), RuntimeError> {
        if self.started {
            return Err(RuntimeError::AlreadyStarted);
        }
        log::info!("[MAIN] == airward setup ==");

        // (1) configuration; the device must boot even with a broken store
        match self.store.load() {
            Ok(config) => self.config = config,
            Err(e) => {
                log::warn!("[CONF] load failed ({e}), using defaults");
                self.config = DeviceConfig::default();
            }
        }
        self.config.set_device_id(&self.boot_id);

        // (2) display seeded from config before bring-up
        self.display.set_brightness(self.config.brightness());
        self.display.set_wifi_mode(self.config.wifi_enabled());
        self.display.set_sample_interval(self.config.sample_interval_s());
        self.display.init();
        self.display.show_welcome();

        // (3) identity and firmware metadata
        log::info!("[INFO] device id: {}", self.config.device_id());
        log::info!("[INFO] firmware : {}", crate::VERSION);

        // (4) sensor power-up and auto-detection
        self.start_sensors();

        // (5) battery monitor
        self.battery.init();

        // (6) watchdog armed before any network bring-up
        self.watchdog.init();

        // (7) WiFi, (8) BLE, (9) cloud
        self.wifi.init();
        self.ble.init();
        self.display.welcome_message("Bluetooth ready.");
        log::info!("[INFO] cloud publication: {}", self.config.cloud_enabled());
        if self.config.cloud_enabled() {
            self.display.welcome_message("Cloud: enabled");
        } else {
            self.display.welcome_message("Cloud: disabled");
        }
        self.cloud.init();

        // (10) startup summary
        if self.wifi.is_connected() {
            self.display.welcome_message("WiFi: connected.");
        } else {
            self.display.welcome_message("WiFi: disabled.");
        }
        let mut line = heapless::String::<40>::new();
        let _ = write!(line, "stime: {} sec.", self.config.sample_interval_s());
        self.display.welcome_message(&line);
        let id = self.config.device_id();
        line.clear();
        let _ = write!(line, "{id}");
        self.display.welcome_message(&line);
        line.clear();
        let _ = write!(line, "Watchdog: {} sec.", self.watchdog.bound_s());
        self.display.welcome_message(&line);
        self.display.welcome_message("==SETUP READY==");

        // (11) main view, (12) first snapshot from whatever was read
        self.display.show_main();
        self.refresh_metrics();

        // (13) one sensor step, (14) leave detection-time interval behind
        let outcome = self.sensors.step();
        self.dispatch_outcome(outcome);
        self.sensors.set_sample_interval(self.config.sample_interval_s());

        self.started = true;
        Ok(())
    }

    /// One steady-state loop iteration. Never blocks, never fails.
    pub fn step(&mut self) {
        let outcome = self.sensors.step();
        self.dispatch_outcome(outcome);

        self.battery.step();
        self.ble.step();
        self.wifi.step();
        self.cloud.step();
        self.ota.step();

        // After all network-affecting steps, before the status push.
        self.watchdog.feed();

        self.display.push_status(ConnectivityStatus {
            wifi_connected: self.wifi.is_connected(),
            sensors_live: self.sensors.is_configured(),
            ble_connected: self.ble.is_connected(),
        });

        while let Some(event) = self.display.poll_preference() {
            self.handle_preference(event);
        }
    }

    /// Run the scheduling loop forever.
    pub fn run_forever(&mut self) -> ! {
        loop {
            self.step();
        }
    }

    /// Sensor bring-up: configure, force the fast detection interval,
    /// auto-detect. Detection failure is surfaced on the display and
    /// the boot continues with zero-valued metrics.
    fn start_sensors(&mut self) {
        log::info!(
            "[INFO] detecting sensors (model hint: {})",
            self.config.sensor_model()
        );
        self.display.welcome_message("Detected sensor:");
        self.sensors.configure(SensorSettings {
            temp_offset: self.config.temp_offset(),
            i2c_only: self.config.i2c_only(),
            debug_mode: self.config.debug_mode(),
        });
        // Only for the first read; the configured interval is restored
        // at the end of init.
        self.sensors.set_sample_interval(self.detection_interval_s);
        self.sensors.init(self.config.sensor_model());

        if self.sensors.is_configured() {
            log::info!(
                "[INFO] PM/CO2 sensor detected: {}",
                self.sensors.detected_label()
            );
            let mut line = heapless::String::<40>::new();
            let _ = write!(line, "{}", self.sensors.detected_label());
            self.display.welcome_message(&line);
        } else {
            log::warn!("[INFO] sensor detection failed");
            self.display.welcome_message("Detection !FAILED!");
        }
    }

    /// Dispatch one sensor step outcome. Idempotent for `DataReady`:
    /// the fan-out re-reads current values instead of caching.
    fn dispatch_outcome(&mut self, outcome: SampleOutcome) {
        match outcome {
            SampleOutcome::Idle => {}
            SampleOutcome::DataReady => {
                log::debug!("[MAIN] sample cycle complete");
                self.refresh_metrics();
            }
            SampleOutcome::Error(msg) => {
                // Diagnostic only: no state change, no retry, loop continues.
                log::warn!("[MAIN] sensor sample error: {msg}");
            }
        }
    }
}
