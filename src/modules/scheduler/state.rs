use crate::shared::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Persisted schedule bookkeeping. `last_completion` stays raw RFC 3339
/// text so an unparseable stored value can fail open at the gate instead of
/// failing the load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleState {
    pub last_completion: Option<String>,
}

impl ScheduleState {
    pub fn is_first_run(&self) -> bool {
        self.last_completion
            .as_deref()
            .map_or(true, |value| value.is_empty())
    }
}

/// Load/save boundary for schedule state, injectable for tests.
pub trait ScheduleStore: Send + Sync {
    fn load(&self) -> AppResult<ScheduleState>;
    fn save(&self, state: &ScheduleState) -> AppResult<()>;
}

/// JSON file on disk, created by the first completed cycle.
pub struct JsonFileScheduleStore {
    path: PathBuf,
}

impl JsonFileScheduleStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ScheduleStore for JsonFileScheduleStore {
    fn load(&self) -> AppResult<ScheduleState> {
        if !self.path.exists() {
            return Ok(ScheduleState::default());
        }

        let raw = fs::read_to_string(&self.path).map_err(|e| {
            AppError::ConfigError(format!("Failed to read schedule state: {}", e))
        })?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn save(&self, state: &ScheduleState) -> AppResult<()> {
        let raw = serde_json::to_string_pretty(state)?;
        fs::write(&self.path, raw)
            .map_err(|e| AppError::ConfigError(format!("Failed to write schedule state: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_as_first_run() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileScheduleStore::new(dir.path().join("state.json"));

        let state = store.load().unwrap();
        assert!(state.is_first_run());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileScheduleStore::new(dir.path().join("state.json"));

        let state = ScheduleState {
            last_completion: Some("2024-01-06T14:30:01+00:00".to_string()),
        };
        store.save(&state).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, state);
        assert!(!loaded.is_first_run());
    }
}
