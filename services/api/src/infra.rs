use metrics_exporter_prometheus::PrometheusHandle;
use mindful_market::config::SessionConfig;
use mindful_market::error::AppError;
use mindful_market::session::EcoSession;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::{info, warn};
use uuid::Uuid;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Isolated sessions keyed by id. Each session owns its own history and is
/// dropped, history included, when it is ended.
#[derive(Clone)]
pub(crate) struct SessionStore {
    sessions: Arc<Mutex<HashMap<Uuid, EcoSession>>>,
    max_sessions: usize,
}

impl SessionStore {
    pub(crate) fn new(config: SessionConfig) -> Self {
        Self {
            sessions: Arc::default(),
            max_sessions: config.max_sessions(),
        }
    }

    pub(crate) fn create(&self) -> Result<Uuid, AppError> {
        let mut guard = self.sessions.lock().expect("session store mutex poisoned");
        if guard.len() >= self.max_sessions {
            warn!(max_sessions = self.max_sessions, "session limit reached");
            return Err(AppError::SessionLimit(self.max_sessions));
        }

        let id = Uuid::new_v4();
        guard.insert(id, EcoSession::new());
        info!(session_id = %id, sessions = guard.len(), "session opened");
        Ok(id)
    }

    /// Run `f` against the session named by `raw_id`.
    pub(crate) fn with_session<T>(
        &self,
        raw_id: &str,
        f: impl FnOnce(&mut EcoSession) -> T,
    ) -> Result<T, AppError> {
        let id = parse_id(raw_id)?;
        let mut guard = self.sessions.lock().expect("session store mutex poisoned");
        let session = guard
            .get_mut(&id)
            .ok_or_else(|| AppError::SessionNotFound(raw_id.to_string()))?;
        Ok(f(session))
    }

    /// End the session named by `raw_id`, dropping its history.
    pub(crate) fn remove(&self, raw_id: &str) -> Result<(), AppError> {
        let id = parse_id(raw_id)?;
        let mut guard = self.sessions.lock().expect("session store mutex poisoned");
        let session = guard
            .remove(&id)
            .ok_or_else(|| AppError::SessionNotFound(raw_id.to_string()))?;
        info!(
            session_id = %id,
            purchases = session.list_history().len(),
            sessions = guard.len(),
            "session ended"
        );
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.sessions
            .lock()
            .expect("session store mutex poisoned")
            .len()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

fn parse_id(raw_id: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw_id).map_err(|_| AppError::SessionNotFound(raw_id.to_string()))
}
