//! CLI subcommand implementations.

pub mod consolidate;
pub mod dashboard;
pub mod report;
pub mod status;
pub mod summary;
