//! Tests for capture mode resolution

use super::*;

fn request(annotate: bool, exec: Option<&str>, input: Option<&str>) -> CaptureRequest {
    CaptureRequest {
        annotate,
        exec: exec.map(OsString::from),
        input: input.map(PathBuf::from),
    }
}

#[test]
fn test_exec_wins_over_everything() {
    let mode = CaptureMode::resolve(Some(OsStr::new("echo hi")), Some(Path::new("-")), false);
    assert_eq!(mode, CaptureMode::Subprocess("echo hi".into()));

    let mode = CaptureMode::resolve(Some(OsStr::new("ls")), Some(Path::new("notes.txt")), true);
    assert_eq!(mode, CaptureMode::Subprocess("ls".into()));
}

#[test]
fn test_empty_exec_is_ignored() {
    let mode = CaptureMode::resolve(Some(OsStr::new("")), Some(Path::new("notes.txt")), true);
    assert_eq!(mode, CaptureMode::File(PathBuf::from("notes.txt")));
}

#[test]
fn test_dash_selects_explicit_stdin() {
    assert_eq!(
        CaptureMode::resolve(None, Some(Path::new("-")), true),
        CaptureMode::ExplicitStdin
    );
    assert_eq!(
        CaptureMode::resolve(None, Some(Path::new("-")), false),
        CaptureMode::ExplicitStdin
    );
}

#[test]
fn test_path_selects_file_even_when_piped() {
    assert_eq!(
        CaptureMode::resolve(None, Some(Path::new("notes.txt")), false),
        CaptureMode::File(PathBuf::from("notes.txt"))
    );
}

#[test]
fn test_no_args_with_pipe_selects_piped_stdin() {
    assert_eq!(CaptureMode::resolve(None, None, false), CaptureMode::PipedStdin);
}

#[test]
fn test_no_args_on_terminal_is_undetermined() {
    assert_eq!(CaptureMode::resolve(None, None, true), CaptureMode::Undetermined);
}

#[test]
fn test_plan_rejects_annotate_with_exec() {
    let result = request(true, Some("echo hi"), None).plan(false);
    assert_eq!(result, Err(UsageError::ExecWithAnnotate));
}

#[test]
fn test_plan_rejects_annotate_with_explicit_stdin() {
    let result = request(true, None, Some("-")).plan(true);
    assert_eq!(result, Err(UsageError::AnnotateWithStdin));
}

#[test]
fn test_plan_rejects_annotate_with_piped_stdin() {
    let result = request(true, None, None).plan(false);
    assert_eq!(result, Err(UsageError::AnnotateWithStdin));
}

#[test]
fn test_plan_reports_missing_input() {
    assert_eq!(request(false, None, None).plan(true), Err(UsageError::NoInput));
    assert_eq!(request(true, None, None).plan(true), Err(UsageError::NoInput));
}

#[test]
fn test_plan_allows_annotated_file() {
    let mode = request(true, None, Some("notes.txt")).plan(true).unwrap();
    assert_eq!(mode, CaptureMode::File(PathBuf::from("notes.txt")));
}

#[test]
fn test_plan_allows_annotate_with_empty_exec() {
    let mode = request(true, Some(""), Some("notes.txt")).plan(true).unwrap();
    assert_eq!(mode, CaptureMode::File(PathBuf::from("notes.txt")));
}

#[test]
fn test_prefix_for_annotated_file() {
    let mode = CaptureMode::File(PathBuf::from("notes.txt"));
    assert_eq!(mode.prefix(true), Some(b"cat notes.txt\n".to_vec()));
    assert_eq!(mode.prefix(false), None);
}

#[test]
fn test_prefix_for_subprocess_is_unconditional() {
    let mode = CaptureMode::Subprocess("echo hi".into());
    assert_eq!(mode.prefix(false), Some(b"echo hi\n".to_vec()));
}

#[test]
fn test_stdin_modes_never_have_a_prefix() {
    assert_eq!(CaptureMode::ExplicitStdin.prefix(true), None);
    assert_eq!(CaptureMode::PipedStdin.prefix(true), None);
}

#[test]
fn test_invocation_hints() {
    let file = CaptureMode::File(PathBuf::from("big.log"));
    assert_eq!(file.invocation_hint(false), "big.log");
    assert_eq!(file.invocation_hint(true), "-c big.log");
    assert_eq!(CaptureMode::ExplicitStdin.invocation_hint(false), "-");
    assert_eq!(CaptureMode::PipedStdin.invocation_hint(false), "<input>");
}

#[test]
fn test_invocation_hint_quotes_commands() {
    let mode = CaptureMode::Subprocess("echo 'hi there'".into());
    assert_eq!(mode.invocation_hint(false), r"-e 'echo '\''hi there'\'''");
}

#[cfg(unix)]
#[test]
fn test_prefix_keeps_non_utf8_path_bytes() {
    use std::os::unix::ffi::OsStrExt;

    let mode = CaptureMode::File(PathBuf::from(OsStr::from_bytes(b"a\xff")));
    assert_eq!(mode.prefix(true), Some(b"cat a\xff\n".to_vec()));
}

#[cfg(unix)]
#[test]
fn test_prefix_keeps_non_utf8_command_bytes() {
    use std::os::unix::ffi::OsStrExt;

    let mode = CaptureMode::Subprocess(OsStr::from_bytes(b"echo \xfe").to_os_string());
    assert_eq!(mode.prefix(false), Some(b"echo \xfe\n".to_vec()));
}
