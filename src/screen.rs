//! The terminal session.
//!
//! [`Screen`] is the entry point: [`Screen::init`] calls `initscr`, and
//! dropping the screen calls `endwin` to restore the terminal. Terminal
//! modes, colors, the mouse and window creation hang off it, so none of
//! them can be reached before the library is initialized.

use libc::c_short;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::color::{self, Rgb};
use crate::error::{Error, IntoResult, Result};
#[cfg(feature = "mouse")]
use crate::mouse::MouseEvent;
use crate::sys;
#[cfg(feature = "mouse")]
use crate::types::MmaskT;
use crate::types::{ColorT, Coord, CursorVisibility, PairT, ERR};
use crate::window::{Pad, Window};

/// Set once `initscr` has been called; the library cannot be initialized
/// twice in one process.
static INITIALIZED: AtomicBool = AtomicBool::new(false);

fn claim(flag: &AtomicBool) -> Result<()> {
    if flag.swap(true, Ordering::SeqCst) {
        return Err(Error::AlreadyInitialized);
    }
    Ok(())
}

/// The initialized terminal.
///
/// # Example
///
/// ```rust,no_run
/// use ncurses::*;
///
/// fn main() -> Result<()> {
///     let mut screen = Screen::init()?;
///     screen.cbreak(true)?;
///     screen.echo(false)?;
///
///     let stdscr = screen.stdscr_mut();
///     stdscr.print("Hello, World!")?;
///     stdscr.refresh()?;
///     stdscr.getch()?;
///     Ok(())
/// }
/// ```
pub struct Screen {
    stdscr: Window,
}

impl Screen {
    /// Initialize the terminal (`initscr`).
    ///
    /// Fails with [`Error::AlreadyInitialized`] on the second call in a
    /// process. With the `trace` feature, `NCURSES_TRACE` sets the initial
    /// trace level.
    pub fn init() -> Result<Self> {
        claim(&INITIALIZED)?;

        #[cfg(feature = "trace")]
        crate::trace::init_from_env();

        let ptr = match unsafe { sys::initscr() }.into_result("initscr") {
            Ok(ptr) => ptr,
            Err(err) => {
                INITIALIZED.store(false, Ordering::SeqCst);
                return Err(err);
            }
        };
        trace_call!("initscr() -> {}x{}", unsafe { sys::LINES }, unsafe { sys::COLS });

        Ok(Self {
            stdscr: Window::borrowed(ptr),
        })
    }

    /// Leave curses mode temporarily (`endwin`). A later refresh resumes it.
    pub fn end(&mut self) -> Result<()> {
        trace_call!("endwin()");
        unsafe { sys::endwin() }.into_result("endwin")
    }

    /// Whether [`end`](Self::end) was called without a refresh since.
    pub fn is_end(&self) -> bool {
        unsafe { sys::isendwin() }
    }

    /// The standard screen.
    pub fn stdscr(&self) -> &Window {
        &self.stdscr
    }

    /// The standard screen, mutably.
    pub fn stdscr_mut(&mut self) -> &mut Window {
        &mut self.stdscr
    }

    /// Create a window of `lines` x `cols` at screen position `(y, x)`.
    /// Zero `lines` or `cols` extend to the screen edge.
    pub fn new_window(&self, lines: Coord, cols: Coord, y: Coord, x: Coord) -> Result<Window> {
        trace_call!("newwin({}, {}, {}, {})", lines, cols, y, x);
        Window::new(lines, cols, y, x)
    }

    /// Create a pad of `lines` x `cols`.
    pub fn new_pad(&self, lines: Coord, cols: Coord) -> Result<Pad> {
        trace_call!("newpad({}, {})", lines, cols);
        Pad::new(lines, cols)
    }

    /// Screen height.
    pub fn lines(&self) -> Coord {
        unsafe { sys::LINES }
    }

    /// Screen width.
    pub fn cols(&self) -> Coord {
        unsafe { sys::COLS }
    }

    // ========================================================================
    // Terminal modes
    // ========================================================================

    /// Line buffering off (`cbreak`) or on (`nocbreak`).
    pub fn cbreak(&mut self, on: bool) -> Result<()> {
        if on {
            unsafe { sys::cbreak() }.into_result("cbreak")
        } else {
            unsafe { sys::nocbreak() }.into_result("nocbreak")
        }
    }

    /// Raw mode: like cbreak, but interrupt and flow-control keys are
    /// delivered as input too.
    pub fn raw(&mut self, on: bool) -> Result<()> {
        if on {
            unsafe { sys::raw() }.into_result("raw")
        } else {
            unsafe { sys::noraw() }.into_result("noraw")
        }
    }

    /// Echo typed characters.
    pub fn echo(&mut self, on: bool) -> Result<()> {
        if on {
            unsafe { sys::echo() }.into_result("echo")
        } else {
            unsafe { sys::noecho() }.into_result("noecho")
        }
    }

    /// Translate return into newline on input.
    pub fn nl(&mut self, on: bool) -> Result<()> {
        if on {
            unsafe { sys::nl() }.into_result("nl")
        } else {
            unsafe { sys::nonl() }.into_result("nonl")
        }
    }

    /// cbreak mode where `getch` gives up after `tenths` tenths of a second
    /// (1 to 255).
    pub fn halfdelay(&mut self, tenths: i32) -> Result<()> {
        if !(1..=255).contains(&tenths) {
            return Err(Error::invalid(format!(
                "halfdelay takes 1..=255 tenths of a second, got {}",
                tenths
            )));
        }
        unsafe { sys::halfdelay(tenths) }.into_result("halfdelay")
    }

    /// Set the cursor visibility, returning the previous one.
    pub fn cursor(&mut self, visibility: CursorVisibility) -> Result<CursorVisibility> {
        let previous = unsafe { sys::curs_set(visibility.to_raw()) };
        previous.into_result("curs_set")?;
        Ok(CursorVisibility::from_raw(previous).unwrap_or_default())
    }

    /// Push staged window updates to the terminal (`doupdate`).
    pub fn update(&mut self) -> Result<()> {
        unsafe { sys::doupdate() }.into_result("doupdate")
    }

    /// Ring the bell, or flash if the terminal cannot beep.
    pub fn beep(&mut self) -> Result<()> {
        unsafe { sys::beep() }.into_result("beep")
    }

    /// Flash the screen, or beep if the terminal cannot flash.
    pub fn flash(&mut self) -> Result<()> {
        unsafe { sys::flash() }.into_result("flash")
    }

    /// Milliseconds to wait after an escape for the rest of a sequence.
    pub fn set_escdelay(&mut self, ms: i32) -> Result<()> {
        unsafe { sys::set_escdelay(ms) }.into_result("set_escdelay")
    }

    /// Columns per tab stop when printing.
    pub fn set_tabsize(&mut self, cols: i32) -> Result<()> {
        unsafe { sys::set_tabsize(cols) }.into_result("set_tabsize")
    }

    // ========================================================================
    // Colors
    // ========================================================================

    /// Whether the terminal can display colors.
    pub fn has_colors(&self) -> bool {
        unsafe { sys::has_colors() }
    }

    /// Whether the terminal can redefine colors with `init_color`.
    pub fn can_change_color(&self) -> bool {
        unsafe { sys::can_change_color() }
    }

    /// Enable colors. Call once, before any other color function.
    pub fn start_color(&mut self) -> Result<()> {
        if !self.has_colors() {
            return Err(Error::ColorNotAvailable);
        }
        unsafe { sys::start_color() }.into_result("start_color")
    }

    /// Allow `COLOR_DEFAULT` (-1) for the terminal's own colors.
    pub fn use_default_colors(&mut self) -> Result<()> {
        unsafe { sys::use_default_colors() }.into_result("use_default_colors")
    }

    /// Number of colors (`COLORS`), 0 before `start_color`.
    pub fn num_colors(&self) -> i32 {
        unsafe { sys::COLORS }
    }

    /// Number of color pairs (`COLOR_PAIRS`), 0 before `start_color`.
    pub fn num_color_pairs(&self) -> i32 {
        unsafe { sys::COLOR_PAIRS }
    }

    /// Define color pair `pair` as `fg` on `bg`.
    ///
    /// Pair 0 and pairs past `num_color_pairs` are rejected before the
    /// library sees them.
    pub fn init_pair(&mut self, pair: PairT, fg: ColorT, bg: ColorT) -> Result<()> {
        color::check_pair(pair, self.num_color_pairs())?;
        trace_call!("init_pair({}, {}, {})", pair, fg, bg);
        unsafe { sys::init_pair(pair, fg, bg) }.into_result("init_pair")
    }

    /// The `(fg, bg)` colors of a pair.
    pub fn pair_content(&self, pair: PairT) -> Result<(ColorT, ColorT)> {
        let (mut fg, mut bg): (c_short, c_short) = (0, 0);
        unsafe { sys::pair_content(pair, &mut fg, &mut bg) }.into_result("pair_content")?;
        Ok((fg, bg))
    }

    /// Redefine `color` with RGB components in 0..=1000.
    pub fn init_color(&mut self, color: ColorT, rgb: Rgb) -> Result<()> {
        for component in [rgb.red, rgb.green, rgb.blue] {
            color::check_rgb(component)?;
        }
        if color < 0 || i32::from(color) >= self.num_colors() {
            return Err(Error::invalid(format!("no color {}", color)));
        }
        unsafe { sys::init_color(color, rgb.red, rgb.green, rgb.blue) }.into_result("init_color")
    }

    /// The RGB definition of a color.
    pub fn color_content(&self, color: ColorT) -> Result<Rgb> {
        let mut rgb = Rgb::default();
        unsafe { sys::color_content(color, &mut rgb.red, &mut rgb.green, &mut rgb.blue) }
            .into_result("color_content")?;
        Ok(rgb)
    }

    // ========================================================================
    // Mouse
    // ========================================================================

    /// Whether a mouse driver is active.
    #[cfg(feature = "mouse")]
    pub fn has_mouse(&self) -> bool {
        unsafe { sys::has_mouse() }
    }

    /// Select the mouse events to report. Returns the mask actually
    /// enabled and the previous mask; an active mask of 0 means the
    /// terminal has no mouse support.
    ///
    /// ```rust,no_run
    /// use ncurses::*;
    ///
    /// # fn main() -> Result<()> {
    /// let mut screen = Screen::init()?;
    /// let (active, _previous) = screen.mousemask(ALL_MOUSE_EVENTS);
    /// # Ok(())
    /// # }
    /// ```
    #[cfg(feature = "mouse")]
    pub fn mousemask(&mut self, mask: MmaskT) -> (MmaskT, MmaskT) {
        let mut previous: MmaskT = 0;
        let active = unsafe { sys::mousemask(mask, &mut previous) };
        trace_call!("mousemask({:#x}) -> {:#x}", mask, active);
        (active, previous)
    }

    /// Fetch the event behind a `KEY_MOUSE` from `getch`.
    #[cfg(feature = "mouse")]
    pub fn getmouse(&mut self) -> Result<MouseEvent> {
        if !self.has_mouse() {
            return Err(Error::MouseNotAvailable);
        }
        let mut raw = sys::MEVENT::default();
        unsafe { sys::getmouse(&mut raw) }.into_result("getmouse")?;
        Ok(MouseEvent::from(raw))
    }

    /// Maximum milliseconds between press and release for a click; returns
    /// the previous interval. A negative `ms` only queries.
    #[cfg(feature = "mouse")]
    pub fn mouseinterval(&mut self, ms: i32) -> i32 {
        unsafe { sys::mouseinterval(ms) }
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        if !self.is_end() && unsafe { sys::endwin() } == ERR {
            trace_call!("endwin() failed on drop");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_once() {
        let flag = AtomicBool::new(false);
        assert!(claim(&flag).is_ok());
        assert_eq!(claim(&flag), Err(Error::AlreadyInitialized));
        assert_eq!(claim(&flag), Err(Error::AlreadyInitialized));
    }
}
