//! rcp library - copy text to the clipboard via OSC 52
//!
//! This library exposes the capture pipeline and framing for testing purposes.

pub mod capture;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod report;

// Re-export commonly used types for convenience
pub use capture::{CaptureBuffer, CaptureMode, CaptureRequest};
pub use config::{Config, Settings};
pub use error::{RcpError, UsageError};
