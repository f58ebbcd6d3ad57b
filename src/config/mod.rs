//! Configuration models for batch schedules.

pub mod schedule;

pub use schedule::{ScheduleConfig, ValidSchedule, DEFAULT_BATCH_SIZE, DEFAULT_BREATHING_GAP_MS};
