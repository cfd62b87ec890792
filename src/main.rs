use clap::{CommandFactory, Parser};
use color_eyre::Result;
use crossterm::tty::IsTty;
use std::io::{self, Write};
use std::ffi::OsString;
use std::path::PathBuf;

use rcp::capture::{self, CaptureMode, CaptureRequest};
use rcp::config::{self, Settings};
use rcp::error::{RcpError, USAGE_EXIT_CODE, UsageError};
use rcp::{clipboard, report};

const AFTER_HELP: &str = "\
Extras:
  rcp -c <file>      Copy: \"cat <file>\" + newline + file contents
  rcp -e \"command\"   Copy: \"<command>\" + newline + command output

Notes:
  - If you run rcp with no args on a normal terminal (no pipe), it shows this help.
  - -c only makes sense with a filename (stdin has no name).
  - -e runs the command using: bash -c \"<command>\" (shell set by [exec] shell in
    ~/.config/rcp/config.toml)

Env:
  RCOPY_MAX_BYTES=100000";

/// Copy text to the clipboard via OSC52 (works over SSH/tmux when supported)
#[derive(Parser, Debug)]
#[command(name = "rcp", version, after_long_help = AFTER_HELP)]
struct Args {
    /// File to copy, or `-` to read stdin (if omitted, reads piped stdin)
    input: Option<PathBuf>,

    /// Prepend `cat <file>` and a newline before the file contents
    #[arg(short = 'c', long = "cat")]
    annotate: bool,

    /// Run COMMAND with the shell and copy the command line plus its output
    #[arg(short = 'e', long = "exec", value_name = "COMMAND")]
    exec: Option<OsString>,
}

impl Args {
    fn into_request(self) -> CaptureRequest {
        CaptureRequest {
            annotate: self.annotate,
            exec: self.exec,
            input: self.input,
        }
    }
}

fn main() -> Result<()> {
    // Writes to /tmp/rcp-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    init_debug_log();

    color_eyre::install()?;

    // clap rejects `-?`, so check the help aliases first. These print to
    // stderr and exit 2; clap's own --help goes to stdout and exits 0.
    if std::env::args_os().skip(1).any(|a| a == "/?" || a == "-?") {
        exit_with_help();
    }

    let args = Args::parse();

    let config_result = config::load_config();
    if let Some(warning) = &config_result.warning {
        eprintln!("rcp: warning: {}", warning);
    }

    let request = args.into_request();

    let mode = match request.plan(io::stdin().is_tty()) {
        Ok(mode) => mode,
        Err(UsageError::NoInput) => exit_with_help(),
        Err(e) => exit_with_error(&RcpError::from(e), "<input>"),
    };

    #[cfg(debug_assertions)]
    log::debug!("Selected {} mode", mode.name());

    let settings = Settings::resolve(&config_result.config);

    match run(&mode, request.annotate, &settings) {
        Ok(sent) => eprintln!("{}", report::success_line(sent)),
        Err(e) => exit_with_error(&e, &mode.invocation_hint(request.annotate)),
    }

    #[cfg(debug_assertions)]
    log::debug!("=== RCP SESSION ENDED ===");

    Ok(())
}

/// Capture the source and emit the clipboard sequence on stdout
///
/// Nothing reaches stdout unless the whole capture succeeded.
fn run(mode: &CaptureMode, annotate: bool, settings: &Settings) -> Result<usize, RcpError> {
    let buffer = capture::capture(mode, annotate, settings)?;
    let stdout = io::stdout();
    clipboard::send(buffer, &mut stdout.lock())
}

/// Print the long help on stderr and exit with the usage status
fn exit_with_help() -> ! {
    let help = Args::command().render_long_help();
    let _ = writeln!(io::stderr(), "{}", help);
    std::process::exit(USAGE_EXIT_CODE);
}

fn exit_with_error(err: &RcpError, invocation: &str) -> ! {
    #[cfg(debug_assertions)]
    log::error!("Capture failed: {:?}", err);

    eprintln!("{}", report::error_report(err, invocation));
    std::process::exit(err.exit_code());
}

#[cfg(debug_assertions)]
fn init_debug_log() {
    let log_file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("/tmp/rcp-debug.log")
    {
        Ok(file) => file,
        Err(_) => return,
    };

    let _ = env_logger::Builder::new()
        .filter_level(log::LevelFilter::Debug)
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .format(|buf, record| {
            use std::time::SystemTime;
            let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
            writeln!(
                buf,
                "[{}] [{}] {}",
                datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .try_init();

    log::debug!("=== RCP SESSION STARTED ===");
}
