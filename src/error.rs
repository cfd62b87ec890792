use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Exit status for incompatible flags or a missing input source
pub const USAGE_EXIT_CODE: i32 = 2;

/// Exit status for every other failure
pub const FAILURE_EXIT_CODE: i32 = 1;

#[derive(Debug, Error)]
pub enum RcpError {
    #[error("{attempted} bytes exceeds limit {limit}. Refusing.")]
    Overflow { attempted: usize, limit: usize },

    #[error("not a file: {}", path.display())]
    NotAFile { path: PathBuf },

    #[error("read error: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` failed: {status}")]
    CommandFailed { command: String, status: ExitStatus },

    #[error("failed waiting for command: {0}")]
    Wait(#[source] std::io::Error),

    #[error("failed to write clipboard sequence: {0}")]
    Write(#[source] std::io::Error),

    #[error(transparent)]
    Usage(#[from] UsageError),
}

/// Flag combinations rejected before any capture is attempted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("-c can't be used with -e")]
    ExecWithAnnotate,

    #[error("-c only works with a filename (rcp -c <file>)")]
    AnnotateWithStdin,

    #[error("no input: pass a file, pipe into rcp, or use -e")]
    NoInput,
}

impl RcpError {
    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            RcpError::Usage(_) => USAGE_EXIT_CODE,
            _ => FAILURE_EXIT_CODE,
        }
    }

    pub fn is_overflow(&self) -> bool {
        matches!(self, RcpError::Overflow { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_errors_exit_with_two() {
        let err = RcpError::from(UsageError::ExecWithAnnotate);
        assert_eq!(err.exit_code(), USAGE_EXIT_CODE);
        assert_eq!(err.to_string(), "-c can't be used with -e");
    }

    #[test]
    fn test_overflow_exits_with_one() {
        let err = RcpError::Overflow {
            attempted: 10,
            limit: 5,
        };
        assert_eq!(err.exit_code(), FAILURE_EXIT_CODE);
        assert!(err.is_overflow());
        assert_eq!(err.to_string(), "10 bytes exceeds limit 5. Refusing.");
    }

    #[test]
    fn test_not_a_file_message_includes_path() {
        let err = RcpError::NotAFile {
            path: PathBuf::from("missing.txt"),
        };
        assert_eq!(err.to_string(), "not a file: missing.txt");
        assert_eq!(err.exit_code(), FAILURE_EXIT_CODE);
    }
}
