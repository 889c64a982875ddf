use super::state::{ScheduleState, ScheduleStore};
use crate::shared::errors::AppResult;
use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use tracing::warn;

/// Decides whether a refresh cycle is due and records completions.
pub struct UpdateScheduler {
    store: Arc<dyn ScheduleStore>,
    interval_days: u32,
}

impl UpdateScheduler {
    pub fn new(store: Arc<dyn ScheduleStore>, interval_days: u32) -> Self {
        Self {
            store,
            interval_days,
        }
    }

    /// Read the persisted state. Load failures fall open to a due cycle.
    pub fn load_state(&self) -> ScheduleState {
        match self.store.load() {
            Ok(state) => state,
            Err(e) => {
                warn!("Failed to load schedule state, treating cycle as due: {}", e);
                ScheduleState::default()
            }
        }
    }

    /// True when no completion is recorded, the recorded timestamp does not
    /// parse, or the configured interval has elapsed.
    pub fn is_due(&self, state: &ScheduleState, now: DateTime<Utc>) -> bool {
        let Some(last_completion) = state
            .last_completion
            .as_deref()
            .filter(|value| !value.is_empty())
        else {
            return true;
        };

        match DateTime::parse_from_rfc3339(last_completion) {
            Ok(last) => {
                now >= last.with_timezone(&Utc) + Duration::days(self.interval_days as i64)
            }
            Err(e) => {
                warn!(
                    "Unparseable last completion time '{}' ({}), treating cycle as due",
                    last_completion, e
                );
                true
            }
        }
    }

    /// Record a finished cycle. Called once, after the runner completed its
    /// pass over all items.
    pub fn record_completion(
        &self,
        state: &mut ScheduleState,
        now: DateTime<Utc>,
    ) -> AppResult<()> {
        state.last_completion = Some(now.to_rfc3339());
        self.store.save(state)
    }
}
