//! OSC 52 framing
//!
//! Terminal escape sequence that asks the emulator to set the clipboard,
//! which works across SSH and tmux when the terminal supports it.

use base64::{Engine as _, engine::general_purpose::STANDARD};

/// OSC 52 introducer with the clipboard selection (`c`)
pub const OSC52_PREFIX: &str = "\x1b]52;c;";

/// String terminator (ESC \)
pub const OSC52_TERMINATOR: &str = "\x1b\\";

/// Encode bytes for OSC 52
///
/// Format: \x1b]52;c;{base64}\x1b\\
///
/// The sequence consists of:
/// - `\x1b]52;` - OSC 52 introducer
/// - `c;` - clipboard selection (c = clipboard, p = primary)
/// - `{base64}` - standard, padded base64 of the raw bytes
/// - `\x1b\\` - string terminator (ST)
pub fn encode_osc52(bytes: &[u8]) -> String {
    let encoded = STANDARD.encode(bytes);
    format!("{}{}{}", OSC52_PREFIX, encoded, OSC52_TERMINATOR)
}
