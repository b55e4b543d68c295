//! Metrics fan-out: one snapshot per completed sample cycle
//!
//! Deterministic rule set, applied on every `DataReady` dispatch:
//!
//! 1. Main value by pollutant class: PM-class devices report PM2.5,
//!    everything else reports CO2.
//! 2. Humidity from the primary sensor; an exact 0.0 falls back to the
//!    CO2 sensor's humidity. Exact zero means "no better data
//!    available", not a real reading - a known precision trade-off
//!    carried over deliberately.
//! 3. Temperature follows the same fallback rule.
//! 4. Battery level and WiFi RSSI are read fresh from their
//!    collaborators.
//!
//! Failure is impossible by contract: missing sensors report 0, and
//! zero values are valid, non-exceptional outputs.

use crate::events::{MetricsSnapshot, PollutantClass};
use crate::Runtime;

impl Runtime {
    /// Assemble a fresh snapshot and push it to the display, together
    /// with the sensors-live indicator.
    pub(crate) fn refresh_metrics(&mut self) {
        self.display.sensor_live_indicator();

        let kind = self.sensors.device_kind();
        let main_value = match kind.class() {
            PollutantClass::Particulate => self.sensors.pm25(),
            PollutantClass::CarbonDioxide => self.sensors.co2(),
        };

        let mut humidity = self.sensors.humidity();
        if humidity == 0.0 {
            humidity = self.sensors.co2_humidity();
        }

        let mut temperature = self.sensors.temperature();
        if temperature == 0.0 {
            temperature = self.sensors.co2_temperature();
        }

        let snapshot = MetricsSnapshot {
            main_value,
            humidity,
            temperature,
            battery_percent: self.battery.charge_percent(),
            wifi_rssi: self.wifi.rssi(),
            kind,
        };
        self.display.push_metrics(&snapshot);
    }
}
