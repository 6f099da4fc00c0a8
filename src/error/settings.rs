// Settings persistence and session error types and constants

use crate::error::ErrorCode;
use flutter_rust_bridge::frb;
use log::error;
use std::fmt;

/// Settings error code constants exposed to Dart via FFI
///
/// Error code range: 2001-2004
#[frb(unignore)]
pub struct SettingsErrorCodes {}

#[frb]
impl SettingsErrorCodes {
    /// Backing store could not be read or written
    pub const STORE_UNAVAILABLE: i32 = 2001;

    /// Backing store contents could not be decoded
    pub const CORRUPT_STORE: i32 = 2002;

    /// Mutex/RwLock was poisoned
    pub const LOCK_POISONED: i32 = 2003;

    /// Session operation called before a session was started
    pub const NO_ACTIVE_SESSION: i32 = 2004;

    /// Get STORE_UNAVAILABLE error code
    #[flutter_rust_bridge::frb(sync, getter)]
    pub fn store_unavailable() -> i32 {
        Self::STORE_UNAVAILABLE
    }

    /// Get CORRUPT_STORE error code
    #[flutter_rust_bridge::frb(sync, getter)]
    pub fn corrupt_store() -> i32 {
        Self::CORRUPT_STORE
    }

    /// Get LOCK_POISONED error code
    #[flutter_rust_bridge::frb(sync, getter)]
    pub fn lock_poisoned() -> i32 {
        Self::LOCK_POISONED
    }

    /// Get NO_ACTIVE_SESSION error code
    #[flutter_rust_bridge::frb(sync, getter)]
    pub fn no_active_session() -> i32 {
        Self::NO_ACTIVE_SESSION
    }
}

/// Log a settings error with structured context
pub fn log_settings_error(err: &SettingsError, context: &str) {
    error!(
        "Settings error in {}: code={}, component=SettingsStore, message={}",
        context,
        err.code(),
        err.message()
    );
}

/// Settings persistence and session lifecycle errors
///
/// Shown to the user as a generic failure. The caller's in-progress input
/// is never consumed by a failed operation.
///
/// Error code range: 2001-2004
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsError {
    /// Store could not be read or written
    StoreUnavailable { reason: String },

    /// Stored data could not be decoded
    CorruptStore { reason: String },

    /// Mutex/RwLock was poisoned
    LockPoisoned { component: String },

    /// No calibration session has been started
    NoActiveSession,
}

impl ErrorCode for SettingsError {
    fn code(&self) -> i32 {
        match self {
            SettingsError::StoreUnavailable { .. } => SettingsErrorCodes::STORE_UNAVAILABLE,
            SettingsError::CorruptStore { .. } => SettingsErrorCodes::CORRUPT_STORE,
            SettingsError::LockPoisoned { .. } => SettingsErrorCodes::LOCK_POISONED,
            SettingsError::NoActiveSession => SettingsErrorCodes::NO_ACTIVE_SESSION,
        }
    }

    fn message(&self) -> String {
        match self {
            SettingsError::StoreUnavailable { reason } => {
                format!("Error saving settings: {}", reason)
            }
            SettingsError::CorruptStore { reason } => {
                format!("Stored settings are unreadable: {}", reason)
            }
            SettingsError::LockPoisoned { component } => {
                format!("Lock poisoned for component: {}", component)
            }
            SettingsError::NoActiveSession => {
                "No calibration in progress. Call start_session() first.".to_string()
            }
        }
    }
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SettingsError::{:?} (code {}): {}",
            self,
            self.code(),
            self.message()
        )
    }
}

impl std::error::Error for SettingsError {}

/// Convert from std::io::Error to SettingsError
impl From<std::io::Error> for SettingsError {
    fn from(err: std::io::Error) -> Self {
        SettingsError::StoreUnavailable {
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        SettingsError::CorruptStore {
            reason: err.to_string(),
        }
    }
}
