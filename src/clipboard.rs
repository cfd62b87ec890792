//! Clipboard module for rcp
//!
//! Frames captured bytes as an OSC 52 "set clipboard" escape sequence.
//! The sequence is the only thing ever written to stdout.

mod osc52;

pub use osc52::{OSC52_PREFIX, OSC52_TERMINATOR, encode_osc52};

use std::io::Write;

use crate::capture::CaptureBuffer;
use crate::error::RcpError;

/// Write the captured bytes to `out` as one OSC 52 sequence
///
/// Consumes the buffer and returns how many raw bytes were sent.
pub fn send<W: Write>(buffer: CaptureBuffer, out: &mut W) -> Result<usize, RcpError> {
    let sent = buffer.len();
    let sequence = encode_osc52(&buffer.into_bytes());

    out.write_all(sequence.as_bytes()).map_err(RcpError::Write)?;
    out.flush().map_err(RcpError::Write)?;

    #[cfg(debug_assertions)]
    log::debug!("Wrote {} byte OSC 52 sequence for {} bytes", sequence.len(), sent);

    Ok(sent)
}
