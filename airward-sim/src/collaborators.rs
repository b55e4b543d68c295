//! Simulated collaborators
//!
//! Deterministic stand-ins for the hardware subsystems, just rich
//! enough to exercise every runtime path: the sensor model completes a
//! sample cycle every `sample_interval` ticks and injects an
//! occasional transient error, the WiFi link "associates" after a few
//! steps, and the display narrates what the device would render.

use std::collections::VecDeque;

use airward_core::events::{
    error_msg, ConnectivityStatus, DeviceKind, MetricsSnapshot, PreferenceEvent, SampleOutcome,
};
use airward_core::traits::{
    BatteryMonitor, BleServer, CloudPublisher, Display, OtaUpdater, SensorSettings,
    SensorSubsystem, WatchdogDriver, WifiLink,
};

/// One simulated tick per loop iteration.
const TICKS_PER_SECOND: u32 = 1;

/// Every nth completed cycle reports a transient error instead of data.
const ERROR_EVERY_NTH_CYCLE: u32 = 25;

/// Waveform-driven sensor subsystem.
pub struct SimSensors {
    settings: SensorSettings,
    kind: DeviceKind,
    configured: bool,
    sample_interval_s: u16,
    ticks_in_cycle: u32,
    cycles: u32,
    phase: f32,
}

impl SimSensors {
    pub fn new(kind: DeviceKind) -> Self {
        Self {
            settings: SensorSettings::default(),
            kind,
            configured: false,
            sample_interval_s: 1,
            ticks_in_cycle: 0,
            cycles: 0,
            phase: 0.0,
        }
    }
}

impl SensorSubsystem for SimSensors {
    fn configure(&mut self, settings: SensorSettings) {
        self.settings = settings;
    }

    fn init(&mut self, hint: DeviceKind) {
        if hint != DeviceKind::Auto {
            self.kind = hint;
        }
        self.configured = true;
        log::info!("[SIM] sensor model up: {}", self.kind);
    }

    fn step(&mut self) -> SampleOutcome {
        if !self.configured {
            return SampleOutcome::Idle;
        }
        self.ticks_in_cycle += 1;
        if self.ticks_in_cycle < u32::from(self.sample_interval_s) * TICKS_PER_SECOND {
            return SampleOutcome::Idle;
        }
        self.ticks_in_cycle = 0;
        self.cycles += 1;
        self.phase += 0.1;
        if self.cycles % ERROR_EVERY_NTH_CYCLE == 0 {
            return SampleOutcome::Error(error_msg("simulated UART checksum mismatch"));
        }
        SampleOutcome::DataReady
    }

    fn sample_interval(&self) -> u16 {
        self.sample_interval_s
    }

    fn set_sample_interval(&mut self, secs: u16) {
        log::info!("[SIM] sensor sample interval -> {secs} s");
        self.sample_interval_s = secs.max(1);
        self.ticks_in_cycle = 0;
    }

    fn pm25(&self) -> u16 {
        (22.0 + 18.0 * self.phase.sin()) as u16
    }

    fn co2(&self) -> u16 {
        (850.0 + 120.0 * (self.phase * 0.7).sin()) as u16
    }

    fn humidity(&self) -> f32 {
        48.0 + 6.0 * (self.phase * 0.5).cos()
    }

    fn temperature(&self) -> f32 {
        21.5 + 2.0 * (self.phase * 0.3).sin() + self.settings.temp_offset
    }

    fn co2_humidity(&self) -> f32 {
        44.0
    }

    fn co2_temperature(&self) -> f32 {
        22.0
    }

    fn device_kind(&self) -> DeviceKind {
        self.kind
    }

    fn detected_label(&self) -> &str {
        self.kind.name()
    }

    fn is_configured(&self) -> bool {
        self.configured
    }

    fn recalibrate_co2(&mut self, reference_ppm: u16) {
        log::info!("[SIM] CO2 recalibrated against {reference_ppm} ppm");
    }
}

/// Console display: narrates frames, serves a scripted preference feed.
pub struct ConsoleDisplay {
    script: VecDeque<(u32, PreferenceEvent)>,
    polls: u32,
}

impl ConsoleDisplay {
    /// `script` pairs a poll tick with the event delivered at it.
    pub fn new(script: Vec<(u32, PreferenceEvent)>) -> Self {
        Self {
            script: script.into(),
            polls: 0,
        }
    }
}

impl Display for ConsoleDisplay {
    fn init(&mut self) {
        log::info!("[GUI] display up");
    }

    fn set_brightness(&mut self, value: u8) {
        log::info!("[GUI] brightness seeded: {value}");
    }

    fn set_wifi_mode(&mut self, enabled: bool) {
        log::info!("[GUI] wifi indicator seeded: {enabled}");
    }

    fn set_sample_interval(&mut self, secs: u16) {
        log::info!("[GUI] sample interval seeded: {secs} s");
    }

    fn show_welcome(&mut self) {
        log::info!("[GUI] == welcome ==");
    }

    fn welcome_message(&mut self, text: &str) {
        log::info!("[GUI] | {text}");
    }

    fn show_main(&mut self) {
        log::info!("[GUI] == main view ==");
    }

    fn push_metrics(&mut self, snapshot: &MetricsSnapshot) {
        log::info!(
            "[GUI] {}: {} | {:.1} %RH | {:.1} C | bat {} % | rssi {} dBm",
            snapshot.kind,
            snapshot.main_value,
            snapshot.humidity,
            snapshot.temperature,
            snapshot.battery_percent,
            snapshot.wifi_rssi
        );
    }

    fn sensor_live_indicator(&mut self) {
        log::debug!("[GUI] sensors live");
    }

    fn push_status(&mut self, status: ConnectivityStatus) {
        log::debug!(
            "[GUI] status wifi={} sensors={} ble={}",
            status.wifi_connected,
            status.sensors_live,
            status.ble_connected
        );
    }

    fn poll_preference(&mut self) -> Option<PreferenceEvent> {
        self.polls += 1;
        match self.script.front() {
            Some((due, _)) if *due <= self.polls => self.script.pop_front().map(|(_, e)| e),
            _ => None,
        }
    }
}

/// WiFi link that associates a few steps after init, unless stopped.
pub struct SimWifi {
    enabled: bool,
    steps_up: u32,
    connected: bool,
}

impl SimWifi {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            steps_up: 0,
            connected: false,
        }
    }
}

impl WifiLink for SimWifi {
    fn init(&mut self) {
        log::info!("[WIFI] init (enabled: {})", self.enabled);
    }

    fn step(&mut self) {
        if !self.enabled || self.connected {
            return;
        }
        self.steps_up += 1;
        if self.steps_up >= 5 {
            self.connected = true;
            log::info!("[WIFI] associated");
        }
    }

    fn stop(&mut self) {
        log::info!("[WIFI] session stopped");
        self.connected = false;
        self.enabled = false;
        self.steps_up = 0;
    }

    fn is_connected(&self) -> bool {
        self.connected
    }

    fn rssi(&self) -> i16 {
        if self.connected {
            -58
        } else {
            0
        }
    }
}

/// BLE server with one phantom client connecting shortly after boot.
#[derive(Default)]
pub struct SimBle {
    steps: u32,
}

impl BleServer for SimBle {
    fn init(&mut self) {
        log::info!("[BLE] GATT server advertising");
    }

    fn step(&mut self) {
        self.steps += 1;
    }

    fn is_connected(&self) -> bool {
        self.steps >= 10
    }

    fn config_refresh(&mut self) {
        log::info!("[BLE] configuration characteristic refreshed");
    }
}

/// Cloud publisher with its own internal cadence.
#[derive(Default)]
pub struct SimCloud {
    steps: u32,
}

impl CloudPublisher for SimCloud {
    fn init(&mut self) {
        log::info!("[CLOUD] publisher ready");
    }

    fn step(&mut self) {
        self.steps += 1;
        if self.steps % 20 == 0 {
            log::info!("[CLOUD] measurement batch published");
        }
    }
}

/// OTA checker that never finds an update.
#[derive(Default)]
pub struct SimOta {
    steps: u32,
}

impl OtaUpdater for SimOta {
    fn step(&mut self) {
        self.steps += 1;
        if self.steps % 60 == 0 {
            log::debug!("[OTA] no update available");
        }
    }
}

/// Slowly discharging battery.
pub struct SimBattery {
    millipercent: u32,
}

impl SimBattery {
    pub fn new() -> Self {
        Self {
            millipercent: 100_000,
        }
    }
}

impl Default for SimBattery {
    fn default() -> Self {
        Self::new()
    }
}

impl BatteryMonitor for SimBattery {
    fn init(&mut self) {
        log::info!("[BATT] fuel gauge up");
    }

    fn step(&mut self) {
        self.millipercent = self.millipercent.saturating_sub(10);
    }

    fn charge_percent(&self) -> u8 {
        (self.millipercent / 1_000) as u8
    }
}

/// Watchdog driver that only narrates; the host cannot reset itself.
#[derive(Default)]
pub struct SimWatchdog;

impl WatchdogDriver for SimWatchdog {
    fn init(&mut self, bound_s: u32) {
        log::info!("[WD] armed, bound {bound_s} s");
    }

    fn feed(&mut self) {
        log::trace!("[WD] fed");
    }
}
