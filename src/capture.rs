//! Capture pipeline
//!
//! Pulls bytes from a file, stdin, or a spawned command into a
//! size-limited buffer. Nothing is framed for the terminal until the
//! whole source has been captured within budget.

mod buffer;
mod mode;
mod reader;
mod source;
mod subprocess;

pub use buffer::CaptureBuffer;
pub use mode::{CaptureMode, CaptureRequest, STDIN_MARKER};
pub use reader::{CHUNK_SIZE, drain};
pub use source::{capture, capture_from};
pub use subprocess::{resolve_shell, run_command};
