//! Human-readable diagnostics, always destined for stderr

use crate::config::MAX_BYTES_ENV;
use crate::error::RcpError;

/// Headroom added to the attempted size in the overflow tip
pub const OVERFLOW_HEADROOM: usize = 1024;

/// Status line printed after a successful copy
pub fn success_line(sent: usize) -> String {
    format!("Sent {} bytes via OSC52", sent)
}

/// Refusal message with a concrete limit to retry with
///
/// `invocation` is the argument list that re-creates the failed run.
pub fn overflow_report(attempted: usize, limit: usize, invocation: &str) -> String {
    format!(
        "rcp: {attempted} bytes exceeds limit {limit}. Refusing.\n\
         \n\
         Tip:\n  {env}={suggested} rcp {invocation}\n\
         \n\
         (Or export {env} for this shell.)",
        env = MAX_BYTES_ENV,
        suggested = attempted.saturating_add(OVERFLOW_HEADROOM),
    )
}

/// Render any pipeline error for the user
pub fn error_report(err: &RcpError, invocation: &str) -> String {
    match err {
        RcpError::Overflow { attempted, limit } => overflow_report(*attempted, *limit, invocation),
        other => format!("rcp: {}", other),
    }
}
