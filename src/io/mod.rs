//! Input/output: command line, configuration, errors, image files and profile storage

/// Command-line parsing and file orchestration
pub mod cli;
/// Tunable constants for every stage
pub mod configuration;
/// Error type shared by the whole crate
pub mod error;
/// PNG/JPEG loading and saving
pub mod image;
/// Terminal progress bars
pub mod progress;
/// Key-value profile persistence
pub mod store;
