//! Command implementations for the coaching assessment CLI

pub mod averages;
pub mod check;
pub mod common;
pub mod history;
