//! Runtime orchestrator core for the airward air-quality device
//!
//! Wires sensor acquisition, the local display, BLE configuration, WiFi,
//! cloud publication, OTA checks and a hardware watchdog into a single
//! cooperative scheduling loop. There is no RTOS underneath: one logical
//! thread steps every collaborator once per iteration, and all event
//! dispatch (sensor sample outcomes, user preference changes) happens
//! synchronously on that thread.
//!
//! Key constraints:
//! - Single-core, no preemption: every `step` must return promptly
//! - Collaborators are black boxes behind narrow traits
//! - The watchdog's whole-process reset is the only cancellation path
//!
//! ```no_run
//! use airward_core::{Runtime, config::MemoryConfigStore, time::MonotonicClock};
//! # use airward_core::traits::*;
//! # fn collaborators() -> (Box<dyn SensorSubsystem>, Box<dyn Display>,
//! #     Box<dyn BatteryMonitor>, Box<dyn WifiLink>, Box<dyn BleServer>,
//! #     Box<dyn CloudPublisher>, Box<dyn OtaUpdater>, Box<dyn WatchdogDriver>) { unimplemented!() }
//!
//! let (sensors, display, battery, wifi, ble, cloud, ota, wd) = collaborators();
//! let mut runtime = Runtime::builder()
//!     .store(Box::new(MemoryConfigStore::default()))
//!     .clock(Box::new(MonotonicClock::new()))
//!     .device_id("3C:61:05:12:AB:CD")
//!     .sensors(sensors)
//!     .display(display)
//!     .battery(battery)
//!     .wifi(wifi)
//!     .ble(ble)
//!     .cloud(cloud)
//!     .ota(ota)
//!     .watchdog(wd)
//!     .build()
//!     .unwrap();
//!
//! runtime.init().unwrap();
//! loop {
//!     runtime.step();
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod runtime;
pub mod time;
pub mod traits;
pub mod watchdog;

// Public API
pub use config::{ConfigStore, DeviceConfig, MemoryConfigStore};
pub use errors::{ConfigError, RuntimeError};
pub use events::{
    ConnectivityStatus, DeviceKind, MetricsSnapshot, PollutantClass, PreferenceEvent,
    SampleOutcome,
};
pub use runtime::{Runtime, RuntimeBuilder};
pub use watchdog::LoopWatchdog;

/// Crate version, logged at boot alongside the device identity.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
