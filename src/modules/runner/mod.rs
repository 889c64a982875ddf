pub mod update_runner;

pub use update_runner::{CycleSummary, ItemOutcome, UpdateRunner};
