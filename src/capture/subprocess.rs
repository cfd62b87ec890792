use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use super::buffer::CaptureBuffer;
use super::reader::drain;
use crate::error::RcpError;

/// Interpreter used when the configured shell is not on PATH
const FALLBACK_SHELL: &str = "sh";

/// Locate the command interpreter in PATH
///
/// Falls back to `sh`, and finally to the configured name as-is so a
/// spawn failure names what the user asked for.
pub fn resolve_shell(configured: &str) -> PathBuf {
    match which::which(configured).or_else(|_| which::which(FALLBACK_SHELL)) {
        Ok(path) => path,
        Err(_) => {
            #[cfg(debug_assertions)]
            log::debug!("No shell found in PATH for {:?}", configured);
            PathBuf::from(configured)
        }
    }
}

/// Run `command` through `shell -c`, capturing its stdout into `buffer`
///
/// Stderr goes straight to ours. The child is always waited for; an
/// overflow while reading wins over whatever exit status follows.
pub fn run_command(
    shell: &Path,
    command: &OsStr,
    buffer: &mut CaptureBuffer,
) -> Result<(), RcpError> {
    #[cfg(debug_assertions)]
    log::debug!("Spawning {:?} -c {:?}", shell, command);

    let mut child = Command::new(shell)
        .arg("-c")
        .arg(command)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|source| RcpError::Spawn {
            command: command.to_string_lossy().into_owned(),
            source,
        })?;

    let drained = match child.stdout.take() {
        Some(mut stdout) => drain(&mut stdout, buffer),
        None => Ok(()),
    };
    // stdout is closed here, so a child still writing gets EPIPE

    let status = child.wait();

    #[cfg(debug_assertions)]
    log::debug!("Command finished: {:?}", status);

    drained?;

    let status = status.map_err(RcpError::Wait)?;
    if !status.success() {
        return Err(RcpError::CommandFailed {
            command: command.to_string_lossy().into_owned(),
            status,
        });
    }

    Ok(())
}
