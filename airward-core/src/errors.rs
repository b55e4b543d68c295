//! Error types for the runtime core
//!
//! Kept deliberately small: errors here cross no callback boundary.
//! Every collaborator callback contract is "always completes, never
//! signals failure upward" - the one exception is the sensor
//! subsystem's explicit error outcome, which carries a bounded message
//! string ([`crate::events::SampleOutcome::Error`]) rather than an
//! error type, because it is diagnostic data, not control flow.
//!
//! Variants carry no heap data and implement `Copy` so they can be
//! returned from hot paths and stored without allocation, matching the
//! memory discipline of the rest of the crate.

use thiserror_no_std::Error;

/// Errors raised by configuration validation and the configuration store.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Sample interval must be a positive number of seconds
    #[error("sample interval must be positive")]
    ZeroSampleInterval,

    /// Backing store could not be read
    #[error("configuration store read failed")]
    StoreRead,

    /// Backing store could not be written
    #[error("configuration store write failed")]
    StoreWrite,

    /// Stored payload exists but could not be decoded
    #[error("configuration payload could not be decoded")]
    StoreDecode,

    /// Configuration could not be encoded for storage
    #[error("configuration payload could not be encoded")]
    StoreEncode,
}

/// Errors raised while assembling or starting the runtime.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeError {
    /// `init` is one-shot and non-reentrant; a second call is a bug
    #[error("runtime already initialized")]
    AlreadyStarted,

    /// Builder was finalized without a required collaborator
    #[error("missing collaborator: {0}")]
    MissingCollaborator(&'static str),
}
