//! Preferences-change state machine
//!
//! Every handler follows the same shape: validate-or-accept, persist,
//! optionally reload, optionally propagate to the live collaborator.
//! Persistence always happens before propagation - a crash between the
//! two leaves the stored value consistent with user intent, and
//! propagation is redone at the next boot by the init sequence. When a
//! save fails, the handler warn-logs and skips propagation for that
//! event; the store collaborator owns write integrity and the core
//! never re-verifies a save.

use crate::constants::CO2_OUTDOOR_REFERENCE_PPM;
use crate::events::PreferenceEvent;
use crate::Runtime;

impl Runtime {
    /// Single dispatcher for user preference changes.
    pub(crate) fn handle_preference(&mut self, event: PreferenceEvent) {
        match event {
            PreferenceEvent::WifiMode(enable) => self.on_wifi_mode(enable),
            PreferenceEvent::Brightness(value) => self.on_brightness(value),
            PreferenceEvent::ColorsInverted(enable) => self.on_colors_inverted(enable),
            PreferenceEvent::SampleTime(secs) => self.on_sample_time(secs),
            PreferenceEvent::CalibrationReady => self.on_calibration_ready(),
        }
    }

    /// Persist, reload, and on disable tear down the live session,
    /// not merely future reconnect attempts.
    fn on_wifi_mode(&mut self, enable: bool) {
        log::info!("[MAIN] onWifiMode changed: {enable}");
        self.config.set_wifi_enabled(enable);
        if self.persist_and_reload() && !enable {
            self.wifi.stop();
        }
    }

    /// Persist only; the display already owns the live value.
    fn on_brightness(&mut self, value: u8) {
        log::info!("[MAIN] onBrightness changed: {value}");
        self.config.set_brightness(value);
        self.persist();
    }

    /// Persist only.
    fn on_colors_inverted(&mut self, enable: bool) {
        log::info!("[MAIN] onColorsInverted changed: {enable}");
        self.config.set_colors_inverted(enable);
        self.persist();
    }

    /// No-op when the value matches the live sensor interval (avoids a
    /// redundant driver restart); otherwise persist, reload, refresh
    /// the BLE-advertised configuration, and propagate exactly once.
    fn on_sample_time(&mut self, secs: u16) {
        if secs == self.sensors.sample_interval() {
            return;
        }
        log::info!("[MAIN] onSampleTime changed: {secs}");
        if let Err(e) = self.config.set_sample_interval(secs) {
            log::warn!("[CONF] rejected sample interval {secs}: {e}");
            return;
        }
        if self.persist_and_reload() {
            self.ble.config_refresh();
            self.sensors
                .set_sample_interval(self.config.sample_interval_s());
        }
    }

    /// One-shot command, never persisted: forward the outdoor
    /// reference concentration to the sensor subsystem.
    fn on_calibration_ready(&mut self) {
        log::info!("[MAIN] onCalibrationReady");
        self.sensors.recalibrate_co2(CO2_OUTDOOR_REFERENCE_PPM);
    }

    /// Save the in-memory configuration. Returns whether it landed.
    fn persist(&mut self) -> bool {
        match self.store.save(&self.config) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("[CONF] save failed: {e}");
                false
            }
        }
    }

    /// Save, then reconcile the in-memory copy from the store. The
    /// reload is what makes the save visible to the rest of the system
    /// within the same iteration. The boot-derived identity is carried
    /// over; it is never persisted.
    fn persist_and_reload(&mut self) -> bool {
        if !self.persist() {
            return false;
        }
        match self.store.load() {
            Ok(mut fresh) => {
                fresh.set_device_id(self.config.device_id());
                self.config = fresh;
                true
            }
            Err(e) => {
                // Saved state and memory already agree; propagation is
                // still safe.
                log::warn!("[CONF] reload after save failed: {e}");
                true
            }
        }
    }
}
