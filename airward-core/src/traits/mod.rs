//! Collaborator contracts consumed by the runtime
//!
//! Everything outside the scheduling loop - sensor drivers, the GUI,
//! the BLE/WiFi stacks, cloud publication, OTA, battery monitoring and
//! the hardware watchdog - is a black box behind one of these traits.
//! The shared rule: every `step` is non-blocking and returns promptly,
//! because the loop's watchdog deadline is the only timeout the system
//! has. A collaborator whose underlying operation could block (network,
//! flash write) must run its own internal state machine.
//!
//! One concern per file, mirroring the split of the runtime itself:
//! - [`sensor`] - the multi-sensor acquisition subsystem
//! - [`display`] - the local GUI and its preference event surface
//! - [`connectivity`] - WiFi, BLE, cloud publication, OTA
//! - [`power`] - battery monitor and the watchdog driver

pub mod connectivity;
pub mod display;
pub mod power;
pub mod sensor;

pub use connectivity::{BleServer, CloudPublisher, OtaUpdater, WifiLink};
pub use display::Display;
pub use power::{BatteryMonitor, WatchdogDriver};
pub use sensor::{SensorSettings, SensorSubsystem};
