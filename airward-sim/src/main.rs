//! Host-side simulator for the airward runtime
//!
//! Runs the real orchestrator against deterministic collaborators: a
//! full boot sequence, then a bounded stretch of steady-state loop
//! iterations with a scripted user changing settings along the way.
//!
//! Usage: `airward-sim [config.json]` - with a path, configuration is
//! persisted to that JSON file across runs; without, an in-memory
//! store seeded with defaults is used.

mod collaborators;

use std::time::Duration;

use airward_core::config::{ConfigStore, DeviceConfig, JsonConfigStore, MemoryConfigStore};
use airward_core::events::{DeviceKind, PreferenceEvent};
use airward_core::time::MonotonicClock;
use airward_core::Runtime;

use collaborators::{
    ConsoleDisplay, SimBattery, SimBle, SimCloud, SimOta, SimSensors, SimWatchdog, SimWifi,
};

const ITERATIONS: u32 = 120;
const TICK: Duration = Duration::from_millis(100);

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let store: Box<dyn ConfigStore> = match std::env::args().nth(1) {
        Some(path) => Box::new(JsonConfigStore::new(path)),
        None => {
            let mut seed = DeviceConfig::default();
            seed.set_wifi_enabled(true);
            Box::new(MemoryConfigStore::with_config(seed))
        }
    };

    // The scripted user: bump brightness early, change the sample
    // interval somewhat later, then trigger an outdoor calibration.
    let script = vec![
        (20, PreferenceEvent::Brightness(90)),
        (45, PreferenceEvent::SampleTime(3)),
        (80, PreferenceEvent::CalibrationReady),
    ];

    let mut runtime = Runtime::builder()
        .store(store)
        .clock(Box::new(MonotonicClock::new()))
        .device_id("24:6F:28:AE:52:7C")
        .sensors(Box::new(SimSensors::new(DeviceKind::Sensirion)))
        .display(Box::new(ConsoleDisplay::new(script)))
        .battery(Box::new(SimBattery::new()))
        .wifi(Box::new(SimWifi::new(true)))
        .ble(Box::new(SimBle::default()))
        .cloud(Box::new(SimCloud::default()))
        .ota(Box::new(SimOta::default()))
        .watchdog(Box::new(SimWatchdog))
        .build()
        .expect("all collaborators wired");

    runtime.init().expect("first init");

    for _ in 0..ITERATIONS {
        runtime.step();
        std::thread::sleep(TICK);
    }

    log::info!("[SIM] done after {ITERATIONS} iterations");
}
