//! Connectivity collaborator contracts
//!
//! Each stack exposes init plus a non-blocking step; connection upkeep,
//! reconnect policy, publication cadence and wire formats are internal
//! to the collaborator. The cloud publisher in particular owns its own
//! publish interval - the runtime steps it every iteration regardless.

/// WiFi link manager.
pub trait WifiLink {
    /// Bring up the stack and start connecting if enabled.
    fn init(&mut self);

    /// Check/maintain the connection. Non-blocking.
    fn step(&mut self);

    /// Tear down the current session. Stops the live connection, not
    /// merely future reconnect attempts.
    fn stop(&mut self);

    /// Whether the link is currently up.
    fn is_connected(&self) -> bool;

    /// Signal strength in dBm (0 when not connected).
    fn rssi(&self) -> i16;
}

/// BLE GATT server for device configuration and notification.
pub trait BleServer {
    /// Start advertising and register the GATT services.
    fn init(&mut self);

    /// Send pending notifications to connected clients. Non-blocking.
    fn step(&mut self);

    /// Whether at least one client is connected.
    fn is_connected(&self) -> bool;

    /// Re-read the advertised configuration characteristic after a
    /// persisted setting changed.
    fn config_refresh(&mut self);
}

/// Cloud measurement publisher.
pub trait CloudPublisher {
    /// Prepare the client (endpoint, credentials, buffers).
    fn init(&mut self);

    /// Publish if the publisher's own interval elapsed. Non-blocking.
    fn step(&mut self);
}

/// Over-the-air firmware update checker.
pub trait OtaUpdater {
    /// Poll for a pending update. Non-blocking.
    fn step(&mut self);
}
