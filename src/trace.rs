//! # Tracing
//!
//! A small trace facility in the spirit of the library's own `trace(3)`,
//! available with the `trace` feature. Output goes to a file: `./trace` for
//! [`trace`], or any path with [`trace_to`]. Each line is prefixed with a
//! microsecond timestamp.
//!
//! Every call resolved through the variadic window entry points is logged
//! at [`TRACE_CALLS`], together with arguments the resolver rejected.
//! Setting `NCURSES_TRACE` (decimal or `0x` hex) before
//! [`Screen::init`](crate::Screen::init) turns tracing on from the start.
//!
//! ```rust,no_run
//! use ncurses::trace::*;
//! use ncurses::attr::{A_BOLD, A_UNDERLINE};
//!
//! trace(TRACE_CALLS | TRACE_ATTRS);
//! tracef("starting");
//! tracef_level(TRACE_ATTRS, &traceattr(A_BOLD | A_UNDERLINE));
//! ```

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Mutex, MutexGuard, OnceLock};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::attr;
use crate::key;
use crate::types::{AttrT, ChType};

/// Tracing off.
pub const TRACE_DISABLE: u32 = 0x0000;
/// Calls into the library, with their arguments.
pub const TRACE_CALLS: u32 = 0x0020;
/// Characters written to windows.
pub const TRACE_VIRTPUT: u32 = 0x0040;
/// Input events.
pub const TRACE_IEVENT: u32 = 0x0080;
/// Attribute and color changes.
pub const TRACE_ATTRS: u32 = 0x1000;
/// Everything.
pub const TRACE_MAXIMUM: u32 = 0xFFFF;

/// Environment variable read by [`init_from_env`].
pub const TRACE_ENV: &str = "NCURSES_TRACE";

#[derive(Default)]
struct TraceState {
    level: u32,
    file: Option<File>,
}

static TRACE_STATE: OnceLock<Mutex<TraceState>> = OnceLock::new();

fn state() -> MutexGuard<'static, TraceState> {
    TRACE_STATE
        .get_or_init(|| Mutex::new(TraceState::default()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Set the trace level, opening `./trace` if tracing was off.
///
/// A level of [`TRACE_DISABLE`] closes the file.
pub fn trace(level: u32) {
    if trace_to("trace", level).is_err() {
        // no file, but trace_level() still reports the request
        state().level = level;
    }
}

/// Set the trace level and send output to `path`, truncating it.
pub fn trace_to(path: impl AsRef<Path>, level: u32) -> io::Result<()> {
    let mut state = state();
    if level == TRACE_DISABLE {
        state.file = None;
    } else {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;
        state.file = Some(file);
    }
    state.level = level;
    Ok(())
}

/// The current trace level.
pub fn trace_level() -> u32 {
    state().level
}

/// Whether any bit of `flag` is enabled.
pub fn trace_enabled(flag: u32) -> bool {
    state().level & flag != 0
}

/// Parse a trace level as given in `NCURSES_TRACE`.
pub fn parse_level(value: &str) -> Option<u32> {
    let value = value.trim();
    match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16).ok(),
        None => value.parse().ok(),
    }
}

/// Turn tracing on from `NCURSES_TRACE`, if set to a valid level.
pub fn init_from_env() {
    if let Some(level) = std::env::var(TRACE_ENV).ok().as_deref().and_then(parse_level) {
        if level != TRACE_DISABLE {
            trace(level);
        }
    }
}

/// Write a line to the trace file.
pub fn tracef(msg: &str) {
    let mut state = state();
    if state.level == TRACE_DISABLE {
        return;
    }
    if let Some(file) = state.file.as_mut() {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_micros())
            .unwrap_or(0);
        let _ = writeln!(file, "[{:012}] {}", timestamp, msg);
        let _ = file.flush();
    }
}

/// Write a line only when a bit of `level` is enabled.
pub fn tracef_level(level: u32, msg: &str) {
    if trace_enabled(level) {
        tracef(msg);
    }
}

/// Attribute value as text, e.g. `"bold|underline|color pair 2"`.
pub fn traceattr(attr: AttrT) -> String {
    attr::describe(attr)
}

/// Key code as text: `'a'`, `^C`, or the key's name.
pub fn tracechar(ch: i32) -> String {
    match ch {
        32..=126 => format!("'{}'", ch as u8 as char),
        0..=31 => format!("^{}", (ch + 64) as u8 as char),
        127 => "^?".to_owned(),
        c if c < 0 => format!("ERR({})", c),
        c => key::key_name(c).into_owned(),
    }
}

/// Character and attributes of a chtype.
pub fn tracechtype(ch: ChType) -> String {
    let text = tracechar(i32::from(attr::chtype_char(ch)));
    match attr::chtype_attr(ch) {
        0 => text,
        a => format!("{} | {}", text, traceattr(a)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attr::{color_pair, A_BOLD, A_UNDERLINE};

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("32"), Some(TRACE_CALLS));
        assert_eq!(parse_level("0x1000"), Some(TRACE_ATTRS));
        assert_eq!(parse_level(" 0XFFFF "), Some(TRACE_MAXIMUM));
        assert_eq!(parse_level("lots"), None);
    }

    #[test]
    fn test_traceattr() {
        assert_eq!(traceattr(0), "normal");
        assert_eq!(traceattr(A_BOLD | A_UNDERLINE), "underline|bold");
        assert_eq!(traceattr(A_BOLD | color_pair(2)), "bold|color pair 2");
    }

    #[test]
    fn test_tracechar() {
        assert_eq!(tracechar('A' as i32), "'A'");
        assert_eq!(tracechar(3), "^C");
        assert_eq!(tracechar(127), "^?");
        assert_eq!(tracechar(-1), "ERR(-1)");
        assert_eq!(tracechar(key::KEY_DOWN), "down");
    }

    #[test]
    fn test_tracechtype() {
        assert_eq!(tracechtype('X' as ChType), "'X'");
        assert_eq!(tracechtype('X' as ChType | A_BOLD), "'X' | bold");
    }
}
