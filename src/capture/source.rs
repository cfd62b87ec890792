use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use super::buffer::CaptureBuffer;
use super::mode::CaptureMode;
use super::reader::drain;
use super::subprocess::run_command;
use crate::config::Settings;
use crate::error::{RcpError, UsageError};

/// Capture the selected source, reading the process's own stdin for
/// stdin-derived modes
pub fn capture(
    mode: &CaptureMode,
    annotate: bool,
    settings: &Settings,
) -> Result<CaptureBuffer, RcpError> {
    let stdin = io::stdin();
    capture_from(mode, annotate, settings, &mut stdin.lock())
}

/// Capture the selected source with an explicit stdin
///
/// The prefix line, when the mode has one, is written first and counts
/// against the same limit as the body.
pub fn capture_from<R: Read + ?Sized>(
    mode: &CaptureMode,
    annotate: bool,
    settings: &Settings,
    stdin: &mut R,
) -> Result<CaptureBuffer, RcpError> {
    #[cfg(debug_assertions)]
    log::debug!(
        "Capturing in {} mode, limit {} bytes",
        mode.name(),
        settings.max_bytes
    );

    let mut buffer = CaptureBuffer::new(settings.max_bytes);

    match mode {
        CaptureMode::File(path) => {
            let mut file = open_file(path)?;
            if let Some(prefix) = mode.prefix(annotate) {
                buffer.append(&prefix)?;
            }
            drain(&mut file, &mut buffer)?;
        }
        CaptureMode::ExplicitStdin | CaptureMode::PipedStdin => {
            drain(stdin, &mut buffer)?;
        }
        CaptureMode::Subprocess(command) => {
            if let Some(prefix) = mode.prefix(annotate) {
                buffer.append(&prefix)?;
            }
            run_command(&settings.shell, command, &mut buffer)?;
        }
        CaptureMode::Undetermined => return Err(UsageError::NoInput.into()),
    }

    Ok(buffer)
}

/// Open `path` for reading, rejecting anything that is not a regular file
fn open_file(path: &Path) -> Result<File, RcpError> {
    let not_a_file = || RcpError::NotAFile {
        path: path.to_path_buf(),
    };

    let file = File::open(path).map_err(|_| not_a_file())?;
    match file.metadata() {
        Ok(meta) if meta.is_dir() => Err(not_a_file()),
        _ => Ok(file),
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod source_tests;
