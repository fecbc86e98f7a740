//! # ncurses-ffi
//!
//! Safe Rust bindings to the system ncurses library (`ncursesw`) and its
//! menu extension (`menuw`).
//!
//! The C library does the terminal work; this crate wraps its windows,
//! screen, colors, input and menus in owned Rust types that return
//! [`Result`]. Attribute bits, color pairs, key codes and line-drawing
//! characters are re-expressed from `curses.h` so they can be combined in
//! plain Rust.
//!
//! Output and input calls come in two forms, e.g. [`Window::print`] and
//! [`Window::mvprint`]. For call sites that build arguments dynamically,
//! the `*_args` variants take a [`Value`] list whose leading integers are
//! an optional row and column:
//!
//! ```rust,no_run
//! use ncurses::*;
//!
//! fn main() -> Result<()> {
//!     let mut screen = Screen::init()?;
//!     screen.start_color()?;
//!     screen.init_pair(1, COLOR_RED, COLOR_BLACK)?;
//!
//!     let stdscr = screen.stdscr_mut();
//!     stdscr.keypad(true)?;
//!     stdscr.attron(A_BOLD | color_pair(1))?;
//!     wprint!(stdscr, 2, 4, "Hello, %s!", "ncurses")?;
//!     stdscr.attroff(A_BOLD | color_pair(1))?;
//!     stdscr.refresh()?;
//!     stdscr.getch()?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **menu** (default): menus from `libmenuw`
//! - **mouse** (default): mouse events
//! - **trace**: call tracing to a file, see [`trace`]
//!
//! All types that touch the library are `!Send` and `!Sync`.

#![allow(clippy::needless_doctest_main)]
#![warn(missing_docs)]

#[cfg(feature = "trace")]
macro_rules! trace_call {
    ($($arg:tt)*) => {
        $crate::trace::tracef_level($crate::trace::TRACE_CALLS, &::std::format!($($arg)*))
    };
}

#[cfg(not(feature = "trace"))]
macro_rules! trace_call {
    ($($arg:tt)*) => {{
        if false {
            let _ = ::std::format!($($arg)*);
        }
    }};
}

pub mod acs;
pub mod args;
pub mod attr;
pub mod color;
pub mod error;
pub mod format;
pub mod key;
pub mod screen;
pub mod sys;
pub mod types;
pub mod window;

#[cfg(feature = "mouse")]
pub mod mouse;

#[cfg(feature = "menu")]
pub mod menu;

#[cfg(feature = "trace")]
pub mod trace;

// Re-export commonly used items at crate root
pub use acs::*;
pub use args::{Placement, Value};
pub use attr::*;
pub use color::*;
pub use error::{Error, Result};
pub use key::*;
pub use screen::Screen;
pub use types::*;
pub use window::{Pad, Window};

#[cfg(feature = "mouse")]
pub use mouse::*;

#[cfg(feature = "menu")]
pub use error::MenuError;
#[cfg(feature = "menu")]
pub use menu::{Menu, MenuItem};

/// The crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
