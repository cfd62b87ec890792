use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::error::UsageError;

/// Positional argument that selects stdin explicitly
pub const STDIN_MARKER: &str = "-";

/// Where the captured bytes come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureMode {
    /// Read a named file
    File(PathBuf),
    /// `rcp -`
    ExplicitStdin,
    /// No arguments and stdin is not a terminal
    PipedStdin,
    /// Run a shell command line and capture its stdout
    Subprocess(OsString),
    /// Nothing to read; the caller shows help
    Undetermined,
}

/// Resolved command-line inputs for one invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptureRequest {
    /// Prepend `cat <path>` before file contents
    pub annotate: bool,
    /// Command line for Subprocess mode; empty counts as absent
    pub exec: Option<OsString>,
    /// Positional argument: a path or the stdin marker
    pub input: Option<PathBuf>,
}

impl CaptureMode {
    /// Pick the capture mode, first match wins:
    /// exec command, explicit stdin, file, piped stdin
    pub fn resolve(exec: Option<&OsStr>, input: Option<&Path>, stdin_is_tty: bool) -> Self {
        if let Some(command) = exec.filter(|c| !c.is_empty()) {
            return CaptureMode::Subprocess(command.to_os_string());
        }

        match input {
            Some(path) if path.as_os_str() == STDIN_MARKER => CaptureMode::ExplicitStdin,
            Some(path) => CaptureMode::File(path.to_path_buf()),
            None if !stdin_is_tty => CaptureMode::PipedStdin,
            None => CaptureMode::Undetermined,
        }
    }

    pub fn reads_stdin(&self) -> bool {
        matches!(self, CaptureMode::ExplicitStdin | CaptureMode::PipedStdin)
    }

    /// Header line written into the buffer before the body
    ///
    /// Built from the raw argument bytes, so non-UTF-8 paths and commands
    /// are copied exactly as given.
    pub fn prefix(&self, annotate: bool) -> Option<Vec<u8>> {
        match self {
            CaptureMode::File(path) if annotate => Some(line(b"cat ", path.as_os_str())),
            CaptureMode::Subprocess(command) => Some(line(b"", command)),
            _ => None,
        }
    }

    /// Arguments that re-create this invocation, for the overflow tip
    pub fn invocation_hint(&self, annotate: bool) -> String {
        match self {
            CaptureMode::File(path) if annotate => format!("-c {}", path.display()),
            CaptureMode::File(path) => path.display().to_string(),
            CaptureMode::Subprocess(command) => {
                format!("-e {}", shell_quote(&command.to_string_lossy()))
            }
            CaptureMode::ExplicitStdin => STDIN_MARKER.to_string(),
            CaptureMode::PipedStdin | CaptureMode::Undetermined => "<input>".to_string(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CaptureMode::File(_) => "file",
            CaptureMode::ExplicitStdin => "explicit-stdin",
            CaptureMode::PipedStdin => "piped-stdin",
            CaptureMode::Subprocess(_) => "subprocess",
            CaptureMode::Undetermined => "undetermined",
        }
    }
}

impl CaptureRequest {
    fn exec_command(&self) -> Option<&OsStr> {
        self.exec.as_deref().filter(|c| !c.is_empty())
    }

    /// Validate flag combinations and resolve the capture mode
    ///
    /// Usage errors are reported before any input is touched.
    pub fn plan(&self, stdin_is_tty: bool) -> Result<CaptureMode, UsageError> {
        if self.annotate && self.exec_command().is_some() {
            return Err(UsageError::ExecWithAnnotate);
        }

        let mode = CaptureMode::resolve(self.exec_command(), self.input.as_deref(), stdin_is_tty);

        match mode {
            CaptureMode::Undetermined => Err(UsageError::NoInput),
            ref m if m.reads_stdin() && self.annotate => Err(UsageError::AnnotateWithStdin),
            m => Ok(m),
        }
    }
}

/// `lead` + raw bytes of `text` + newline
fn line(lead: &[u8], text: &OsStr) -> Vec<u8> {
    let raw = text.as_encoded_bytes();
    let mut bytes = Vec::with_capacity(lead.len() + raw.len() + 1);
    bytes.extend_from_slice(lead);
    bytes.extend_from_slice(raw);
    bytes.push(b'\n');
    bytes
}

/// Single-quote `text` for a POSIX shell
fn shell_quote(text: &str) -> String {
    format!("'{}'", text.replace('\'', r"'\''"))
}

#[cfg(test)]
#[path = "mode_tests.rs"]
mod mode_tests;
