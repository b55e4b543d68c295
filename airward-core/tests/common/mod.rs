//! Mock collaborators and a shared call-order trace for integration
//! tests
//!
//! Every mock clones an `Rc<RefCell<_>>` state handle, so a test can
//! keep inspecting (and mutating) collaborator state after the boxed
//! trait objects moved into the runtime. Call ordering is recorded in
//! a single [`Trace`] shared by all mocks, which is what the init- and
//! loop-ordering invariant tests assert against.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use airward_core::config::{ConfigStore, DeviceConfig};
use airward_core::errors::ConfigError;
use airward_core::events::{
    ConnectivityStatus, DeviceKind, MetricsSnapshot, PreferenceEvent, SampleOutcome,
};
use airward_core::time::MockClock;
use airward_core::traits::{
    BatteryMonitor, BleServer, CloudPublisher, Display, OtaUpdater, SensorSettings,
    SensorSubsystem, WatchdogDriver, WifiLink,
};
use airward_core::Runtime;

/// Shared, ordered record of collaborator calls.
#[derive(Clone, Default)]
pub struct Trace(Rc<RefCell<Vec<String>>>);

impl Trace {
    pub fn record(&self, entry: impl Into<String>) {
        self.0.borrow_mut().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.borrow().clone()
    }

    /// Index of the first occurrence, or a panic naming the entry so
    /// ordering assertions read better in the failure output.
    pub fn position(&self, entry: &str) -> usize {
        self.0
            .borrow()
            .iter()
            .position(|e| e == entry)
            .unwrap_or_else(|| panic!("trace entry not found: {entry}"))
    }

    pub fn count(&self, entry: &str) -> usize {
        self.0.borrow().iter().filter(|e| *e == entry).count()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    /// Assert that `earlier` occurs before `later`.
    pub fn assert_order(&self, earlier: &str, later: &str) {
        assert!(
            self.position(earlier) < self.position(later),
            "expected {earlier} before {later}, got: {:?}",
            self.entries()
        );
    }
}

// --- sensors -------------------------------------------------------------

#[derive(Default)]
pub struct SensorState {
    pub outcomes: VecDeque<SampleOutcome>,
    pub sample_interval: u16,
    pub interval_history: Vec<u16>,
    pub pm25: u16,
    pub co2: u16,
    pub humidity: f32,
    pub temperature: f32,
    pub co2_humidity: f32,
    pub co2_temperature: f32,
    pub kind: DeviceKind,
    pub configured: bool,
    pub settings: Option<SensorSettings>,
    pub init_hint: Option<DeviceKind>,
    pub recalibrations: Vec<u16>,
}

#[derive(Clone)]
pub struct MockSensors {
    pub state: Rc<RefCell<SensorState>>,
    label: String,
    trace: Trace,
}

impl MockSensors {
    pub fn new(trace: &Trace) -> Self {
        Self {
            state: Rc::default(),
            label: "SPS30".into(),
            trace: trace.clone(),
        }
    }
}

impl SensorSubsystem for MockSensors {
    fn configure(&mut self, settings: SensorSettings) {
        self.trace.record("sensors.configure");
        self.state.borrow_mut().settings = Some(settings);
    }

    fn init(&mut self, hint: DeviceKind) {
        self.trace.record("sensors.init");
        self.state.borrow_mut().init_hint = Some(hint);
    }

    fn step(&mut self) -> SampleOutcome {
        self.trace.record("sensors.step");
        self.state
            .borrow_mut()
            .outcomes
            .pop_front()
            .unwrap_or(SampleOutcome::Idle)
    }

    fn sample_interval(&self) -> u16 {
        self.state.borrow().sample_interval
    }

    fn set_sample_interval(&mut self, secs: u16) {
        self.trace.record(format!("sensors.set_sample_interval({secs})"));
        let mut state = self.state.borrow_mut();
        state.sample_interval = secs;
        state.interval_history.push(secs);
    }

    fn pm25(&self) -> u16 {
        self.state.borrow().pm25
    }

    fn co2(&self) -> u16 {
        self.state.borrow().co2
    }

    fn humidity(&self) -> f32 {
        self.state.borrow().humidity
    }

    fn temperature(&self) -> f32 {
        self.state.borrow().temperature
    }

    fn co2_humidity(&self) -> f32 {
        self.state.borrow().co2_humidity
    }

    fn co2_temperature(&self) -> f32 {
        self.state.borrow().co2_temperature
    }

    fn device_kind(&self) -> DeviceKind {
        self.state.borrow().kind
    }

    fn detected_label(&self) -> &str {
        &self.label
    }

    fn is_configured(&self) -> bool {
        self.state.borrow().configured
    }

    fn recalibrate_co2(&mut self, reference_ppm: u16) {
        self.trace.record("sensors.recalibrate_co2");
        self.state.borrow_mut().recalibrations.push(reference_ppm);
    }
}

// --- display -------------------------------------------------------------

#[derive(Default)]
pub struct DisplayState {
    pub brightness: Option<u8>,
    pub wifi_mode: Option<bool>,
    pub sample_interval: Option<u16>,
    pub welcome: Vec<String>,
    pub snapshots: Vec<MetricsSnapshot>,
    pub statuses: Vec<ConnectivityStatus>,
    pub live_ticks: usize,
    pub main_shown: bool,
    pub pending: VecDeque<PreferenceEvent>,
}

#[derive(Clone)]
pub struct MockDisplay {
    pub state: Rc<RefCell<DisplayState>>,
    trace: Trace,
}

impl MockDisplay {
    pub fn new(trace: &Trace) -> Self {
        Self {
            state: Rc::default(),
            trace: trace.clone(),
        }
    }
}

impl Display for MockDisplay {
    fn init(&mut self) {
        self.trace.record("display.init");
    }

    fn set_brightness(&mut self, value: u8) {
        self.trace.record("display.set_brightness");
        self.state.borrow_mut().brightness = Some(value);
    }

    fn set_wifi_mode(&mut self, enabled: bool) {
        self.trace.record("display.set_wifi_mode");
        self.state.borrow_mut().wifi_mode = Some(enabled);
    }

    fn set_sample_interval(&mut self, secs: u16) {
        self.trace.record("display.set_sample_interval");
        self.state.borrow_mut().sample_interval = Some(secs);
    }

    fn show_welcome(&mut self) {
        self.trace.record("display.show_welcome");
    }

    fn welcome_message(&mut self, text: &str) {
        self.state.borrow_mut().welcome.push(text.into());
    }

    fn show_main(&mut self) {
        self.trace.record("display.show_main");
        self.state.borrow_mut().main_shown = true;
    }

    fn push_metrics(&mut self, snapshot: &MetricsSnapshot) {
        self.trace.record("display.push_metrics");
        self.state.borrow_mut().snapshots.push(*snapshot);
    }

    fn sensor_live_indicator(&mut self) {
        self.state.borrow_mut().live_ticks += 1;
    }

    fn push_status(&mut self, status: ConnectivityStatus) {
        self.trace.record("display.push_status");
        self.state.borrow_mut().statuses.push(status);
    }

    fn poll_preference(&mut self) -> Option<PreferenceEvent> {
        self.state.borrow_mut().pending.pop_front()
    }
}

// --- connectivity --------------------------------------------------------

#[derive(Default)]
pub struct WifiState {
    pub connected: bool,
    pub rssi: i16,
    pub stops: usize,
}

#[derive(Clone)]
pub struct MockWifi {
    pub state: Rc<RefCell<WifiState>>,
    trace: Trace,
}

impl MockWifi {
    pub fn new(trace: &Trace) -> Self {
        Self {
            state: Rc::default(),
            trace: trace.clone(),
        }
    }
}

impl WifiLink for MockWifi {
    fn init(&mut self) {
        self.trace.record("wifi.init");
    }

    fn step(&mut self) {
        self.trace.record("wifi.step");
    }

    fn stop(&mut self) {
        self.trace.record("wifi.stop");
        let mut state = self.state.borrow_mut();
        state.stops += 1;
        state.connected = false;
    }

    fn is_connected(&self) -> bool {
        self.state.borrow().connected
    }

    fn rssi(&self) -> i16 {
        self.state.borrow().rssi
    }
}

#[derive(Default)]
pub struct BleState {
    pub connected: bool,
    pub config_refreshes: usize,
}

#[derive(Clone)]
pub struct MockBle {
    pub state: Rc<RefCell<BleState>>,
    trace: Trace,
}

impl MockBle {
    pub fn new(trace: &Trace) -> Self {
        Self {
            state: Rc::default(),
            trace: trace.clone(),
        }
    }
}

impl BleServer for MockBle {
    fn init(&mut self) {
        self.trace.record("ble.init");
    }

    fn step(&mut self) {
        self.trace.record("ble.step");
    }

    fn is_connected(&self) -> bool {
        self.state.borrow().connected
    }

    fn config_refresh(&mut self) {
        self.trace.record("ble.config_refresh");
        self.state.borrow_mut().config_refreshes += 1;
    }
}

#[derive(Clone)]
pub struct MockCloud {
    trace: Trace,
}

impl MockCloud {
    pub fn new(trace: &Trace) -> Self {
        Self {
            trace: trace.clone(),
        }
    }
}

impl CloudPublisher for MockCloud {
    fn init(&mut self) {
        self.trace.record("cloud.init");
    }

    fn step(&mut self) {
        self.trace.record("cloud.step");
    }
}

#[derive(Clone)]
pub struct MockOta {
    trace: Trace,
}

impl MockOta {
    pub fn new(trace: &Trace) -> Self {
        Self {
            trace: trace.clone(),
        }
    }
}

impl OtaUpdater for MockOta {
    fn step(&mut self) {
        self.trace.record("ota.step");
    }
}

// --- power ---------------------------------------------------------------

#[derive(Default)]
pub struct BatteryState {
    pub charge: u8,
}

#[derive(Clone)]
pub struct MockBattery {
    pub state: Rc<RefCell<BatteryState>>,
    trace: Trace,
}

impl MockBattery {
    pub fn new(trace: &Trace) -> Self {
        Self {
            state: Rc::default(),
            trace: trace.clone(),
        }
    }
}

impl BatteryMonitor for MockBattery {
    fn init(&mut self) {
        self.trace.record("battery.init");
    }

    fn step(&mut self) {
        self.trace.record("battery.step");
    }

    fn charge_percent(&self) -> u8 {
        self.state.borrow().charge
    }
}

#[derive(Default)]
pub struct WatchdogState {
    pub bound_s: Option<u32>,
    pub feeds: usize,
}

#[derive(Clone)]
pub struct MockWatchdogDriver {
    pub state: Rc<RefCell<WatchdogState>>,
    trace: Trace,
}

impl MockWatchdogDriver {
    pub fn new(trace: &Trace) -> Self {
        Self {
            state: Rc::default(),
            trace: trace.clone(),
        }
    }
}

impl WatchdogDriver for MockWatchdogDriver {
    fn init(&mut self, bound_s: u32) {
        self.trace.record("watchdog.init");
        self.state.borrow_mut().bound_s = Some(bound_s);
    }

    fn feed(&mut self) {
        self.trace.record("watchdog.feed");
        self.state.borrow_mut().feeds += 1;
    }
}

// --- store ---------------------------------------------------------------

#[derive(Default)]
pub struct StoreState {
    pub saved: Option<DeviceConfig>,
    pub fail_load: bool,
    pub fail_save: bool,
}

#[derive(Clone)]
pub struct MockStore {
    pub state: Rc<RefCell<StoreState>>,
    trace: Trace,
}

impl MockStore {
    pub fn new(trace: &Trace) -> Self {
        Self {
            state: Rc::default(),
            trace: trace.clone(),
        }
    }
}

impl ConfigStore for MockStore {
    fn load(&mut self) -> Result<DeviceConfig, ConfigError> {
        self.trace.record("store.load");
        let state = self.state.borrow();
        if state.fail_load {
            return Err(ConfigError::StoreRead);
        }
        state.saved.clone().ok_or(ConfigError::StoreRead)
    }

    fn save(&mut self, config: &DeviceConfig) -> Result<(), ConfigError> {
        self.trace.record("store.save");
        let mut state = self.state.borrow_mut();
        if state.fail_save {
            return Err(ConfigError::StoreWrite);
        }
        state.saved = Some(config.clone());
        Ok(())
    }
}

// --- fixture -------------------------------------------------------------

/// A full set of mocks plus the runtime builder wiring.
pub struct Fixture {
    pub trace: Trace,
    pub sensors: MockSensors,
    pub display: MockDisplay,
    pub wifi: MockWifi,
    pub ble: MockBle,
    pub cloud: MockCloud,
    pub ota: MockOta,
    pub battery: MockBattery,
    pub watchdog: MockWatchdogDriver,
    pub store: MockStore,
    pub clock: Rc<MockClock>,
}

pub const TEST_DEVICE_ID: &str = "3C:61:05:12:AB:CD";

impl Fixture {
    pub fn new() -> Self {
        let trace = Trace::default();
        Self {
            sensors: MockSensors::new(&trace),
            display: MockDisplay::new(&trace),
            wifi: MockWifi::new(&trace),
            ble: MockBle::new(&trace),
            cloud: MockCloud::new(&trace),
            ota: MockOta::new(&trace),
            battery: MockBattery::new(&trace),
            watchdog: MockWatchdogDriver::new(&trace),
            store: MockStore::new(&trace),
            clock: Rc::new(MockClock::new(0)),
            trace,
        }
    }

    /// Seed the persisted configuration the next boot will load.
    pub fn seed_config(&self, edit: impl FnOnce(&mut DeviceConfig)) {
        let mut config = DeviceConfig::default();
        edit(&mut config);
        self.store.state.borrow_mut().saved = Some(config);
    }

    /// Queue a preference event for the next loop iteration's drain.
    pub fn queue_preference(&self, event: PreferenceEvent) {
        self.display.state.borrow_mut().pending.push_back(event);
    }

    /// Assemble a runtime around clones of the mocks.
    pub fn runtime(&self) -> Runtime {
        Runtime::builder()
            .store(Box::new(self.store.clone()))
            .clock(Box::new(self.clock.clone()))
            .device_id(TEST_DEVICE_ID)
            .sensors(Box::new(self.sensors.clone()))
            .display(Box::new(self.display.clone()))
            .battery(Box::new(self.battery.clone()))
            .wifi(Box::new(self.wifi.clone()))
            .ble(Box::new(self.ble.clone()))
            .cloud(Box::new(self.cloud.clone()))
            .ota(Box::new(self.ota.clone()))
            .watchdog(Box::new(self.watchdog.clone()))
            .build()
            .expect("all collaborators provided")
    }
}
