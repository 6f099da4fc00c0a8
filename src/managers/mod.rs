// Managers Module
//
// Focused manager classes used by AppContext, one concern each:
// - SessionManager: Calibration session lifecycle and update broadcast
// - SettingsManager: Drill settings loading, validation and persistence

pub mod session_manager;
pub mod settings_manager;

pub use session_manager::SessionManager;
pub use settings_manager::SettingsManager;
