use std::io::{ErrorKind, Read};

use super::buffer::CaptureBuffer;
use crate::error::RcpError;

/// Read size used when draining a source
pub const CHUNK_SIZE: usize = 32 * 1024;

/// Stream `source` into `buffer` until end of stream
///
/// Stops at the first chunk that would overflow the buffer, leaving the
/// rest of the source unread.
pub fn drain<R: Read + ?Sized>(
    source: &mut R,
    buffer: &mut CaptureBuffer,
) -> Result<(), RcpError> {
    let mut chunk = vec![0u8; CHUNK_SIZE];

    loop {
        let n = match source.read(&mut chunk) {
            Ok(0) => return Ok(()),
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(RcpError::Read(e)),
        };

        buffer.append(&chunk[..n])?;

        #[cfg(debug_assertions)]
        log::debug!("Captured {} bytes ({} total)", n, buffer.len());
    }
}
