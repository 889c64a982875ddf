pub mod scheduler;
pub mod state;

// Re-exports for easy external access
pub use scheduler::UpdateScheduler;
pub use state::{JsonFileScheduleStore, ScheduleState, ScheduleStore};
