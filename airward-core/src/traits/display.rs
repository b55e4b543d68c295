//! Display/GUI contract
//!
//! Rendering is entirely the collaborator's business; the runtime
//! pushes snapshots and status flags and drains preference events the
//! user raised through the UI. Seeding calls (`set_brightness`,
//! `set_wifi_mode`, `set_sample_interval`) happen before `init` so the
//! first frame already reflects the stored configuration.

use crate::events::{ConnectivityStatus, MetricsSnapshot, PreferenceEvent};

/// The local display/UI subsystem.
pub trait Display {
    /// Bring up the panel. Seeding calls have already happened.
    fn init(&mut self);

    /// Seed the brightness before or after `init`.
    fn set_brightness(&mut self, value: u8);

    /// Seed the WiFi-enabled indicator.
    fn set_wifi_mode(&mut self, enabled: bool);

    /// Seed the sample interval shown in the settings view, in seconds.
    fn set_sample_interval(&mut self, secs: u16);

    /// Switch to the boot/welcome view.
    fn show_welcome(&mut self);

    /// Append a line to the welcome view.
    fn welcome_message(&mut self, text: &str);

    /// Switch to the main metrics view.
    fn show_main(&mut self);

    /// Render a fresh metrics snapshot.
    fn push_metrics(&mut self, snapshot: &MetricsSnapshot);

    /// Blink the sensors-live indicator: a whole sample cycle read OK.
    fn sensor_live_indicator(&mut self);

    /// Update the WiFi/sensors/BLE status icons.
    fn push_status(&mut self, status: ConnectivityStatus);

    /// Next pending user preference change, if any. Drained to empty
    /// once per loop iteration.
    fn poll_preference(&mut self) -> Option<PreferenceEvent>;
}
