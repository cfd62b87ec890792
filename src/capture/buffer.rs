use crate::error::RcpError;

/// In-memory byte sink with a fixed capacity
///
/// Appends are all-or-nothing: a write that would push the buffer past
/// its limit is rejected and leaves the content untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureBuffer {
    bytes: Vec<u8>,
    limit: usize,
}

impl CaptureBuffer {
    /// Create an empty buffer that accepts at most `limit` bytes
    pub fn new(limit: usize) -> Self {
        Self {
            bytes: Vec::new(),
            limit,
        }
    }

    /// Append `chunk`, or fail with `Overflow` reporting the size the
    /// buffer would have reached
    pub fn append(&mut self, chunk: &[u8]) -> Result<(), RcpError> {
        let attempted = self.bytes.len().saturating_add(chunk.len());
        if attempted > self.limit {
            return Err(RcpError::Overflow {
                attempted,
                limit: self.limit,
            });
        }

        self.bytes.extend_from_slice(chunk);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the buffer, yielding the captured bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

#[cfg(test)]
#[path = "buffer_tests.rs"]
mod buffer_tests;
