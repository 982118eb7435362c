/// Command-line interface
pub mod cli;
/// Compile-time sizes and runtime defaults
pub mod configuration;
/// Error types
pub mod error;
/// Color identifier to RGB mapping
pub mod palette;
/// Plain-text pixmap output
pub mod ppm;
/// Terminal progress display
pub mod progress;
