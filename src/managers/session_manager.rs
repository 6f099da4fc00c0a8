// SessionManager: Focused manager for the active calibration session
//
// Single Responsibility: Calibration session lifecycle and update broadcast

use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::broadcast;

use crate::api::types::SessionSnapshot;
use crate::calibration::{CalibrationSession, DrillSettings, TurnOptions};
use crate::error::{log_settings_error, CalibratorError, InputError, SettingsError};

/// Buffered snapshots per subscriber before it starts lagging
const UPDATE_CHANNEL_CAPACITY: usize = 32;

/// Manages the calibration session and publishes a snapshot after every edit
///
/// This manager handles:
/// - Starting/ending the session when the calibration screen opens/closes
/// - Forwarding field edits to the session
/// - Broadcasting the recomputed snapshot to UI listeners
/// - Thread-safe lock management
///
/// # Example
/// ```ignore
/// let manager = SessionManager::new();
/// manager.start(settings, TurnOptions::default())?;
/// let snapshot = manager.set_rows_caught("4")?;
/// ```
pub struct SessionManager {
    session: Arc<Mutex<Option<CalibrationSession>>>,
    updates: broadcast::Sender<SessionSnapshot>,
}

impl SessionManager {
    /// Create a new SessionManager with no session running
    pub fn new() -> Self {
        let (updates, _) = broadcast::channel(UPDATE_CHANNEL_CAPACITY);
        Self {
            session: Arc::new(Mutex::new(None)),
            updates,
        }
    }

    /// Start a session, replacing any previous one
    ///
    /// Reopening the calibration screen starts over with blank inputs.
    pub fn start(
        &self,
        settings: DrillSettings,
        turn_options: TurnOptions,
    ) -> Result<SessionSnapshot, SettingsError> {
        let mut guard = self.lock_session()?;
        if guard.is_some() {
            log::info!("[SessionManager] Replacing active calibration session");
        }

        let session = CalibrationSession::new(settings, turn_options);
        let snapshot = SessionSnapshot::from_session(&session);
        *guard = Some(session);

        self.publish(&snapshot);
        Ok(snapshot)
    }

    /// End the session, returning whether one was running
    pub fn end(&self) -> Result<bool, SettingsError> {
        Ok(self.lock_session()?.take().is_some())
    }

    pub fn is_active(&self) -> Result<bool, SettingsError> {
        Ok(self.lock_session()?.is_some())
    }

    /// Current snapshot without changing anything
    pub fn snapshot(&self) -> Result<SessionSnapshot, SettingsError> {
        self.with_session("snapshot", |session| SessionSnapshot::from_session(session))
    }

    /// Pick a turn count; values outside the option set are ignored
    pub fn select_turns(&self, turns: u32) -> Result<SessionSnapshot, SettingsError> {
        self.with_session("select_turns", |session| {
            session.select_turns(turns);
            SessionSnapshot::from_session(session)
        })
        .inspect(|snapshot| self.publish(snapshot))
    }

    /// Apply a rows-caught edit
    ///
    /// # Errors
    /// - `InputError::RowsExceedCapacity` - value rejected, session unchanged
    /// - `SettingsError::NoActiveSession` - no session started
    /// - `SettingsError::LockPoisoned` - lock poisoning on session state
    pub fn set_rows_caught(&self, text: &str) -> Result<SessionSnapshot, CalibratorError> {
        let edit: Result<SessionSnapshot, InputError> =
            self.with_session("set_rows_caught", |session| {
                session
                    .set_rows_caught(text)
                    .map(|_| SessionSnapshot::from_session(session))
            })?;

        let snapshot = edit?;
        self.publish(&snapshot);
        Ok(snapshot)
    }

    /// Apply a seed-weight edit
    pub fn set_seed_weight(&self, text: &str) -> Result<SessionSnapshot, SettingsError> {
        self.with_session("set_seed_weight", |session| {
            session.set_seed_weight(text);
            SessionSnapshot::from_session(session)
        })
        .inspect(|snapshot| self.publish(snapshot))
    }

    /// Swap in new drill settings without losing the entered values
    pub fn update_settings(&self, settings: DrillSettings) -> Result<SessionSnapshot, SettingsError> {
        self.with_session("update_settings", |session| {
            session.update_settings(settings);
            SessionSnapshot::from_session(session)
        })
        .inspect(|snapshot| self.publish(snapshot))
    }

    /// Clear rows caught and seed weight
    pub fn clear_inputs(&self) -> Result<SessionSnapshot, SettingsError> {
        self.with_session("clear_inputs", |session| {
            session.clear_inputs();
            SessionSnapshot::from_session(session)
        })
        .inspect(|snapshot| self.publish(snapshot))
    }

    /// Receive a snapshot after every successful edit
    pub fn subscribe(&self) -> broadcast::Receiver<SessionSnapshot> {
        self.updates.subscribe()
    }

    // ========================================================================
    // HELPER METHODS - Lock management
    // ========================================================================

    /// Safely acquire lock on the session
    fn lock_session(&self) -> Result<MutexGuard<'_, Option<CalibrationSession>>, SettingsError> {
        self.session.lock().map_err(|_| SettingsError::LockPoisoned {
            component: "calibration_session".to_string(),
        })
    }

    /// Run `f` against the active session
    fn with_session<T>(
        &self,
        context: &str,
        f: impl FnOnce(&mut CalibrationSession) -> T,
    ) -> Result<T, SettingsError> {
        let mut guard = self.lock_session().inspect_err(|err| {
            log_settings_error(err, context);
        })?;

        match guard.as_mut() {
            Some(session) => Ok(f(session)),
            None => {
                let err = SettingsError::NoActiveSession;
                log_settings_error(&err, context);
                Err(err)
            }
        }
    }

    fn publish(&self, snapshot: &SessionSnapshot) {
        // Sending only fails when nobody is listening
        let _ = self.updates.send(snapshot.clone());
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}
