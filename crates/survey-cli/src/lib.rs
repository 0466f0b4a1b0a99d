//! CLI library components for the survey normalizer.

pub mod commands;
pub mod logging;
pub mod output;
pub mod summary;
