//! Type-safe wrappers and enums for assessment data.

pub mod ids;
pub mod metric;
pub mod time;
