//! Windows and pads.
//!
//! A [`Window`] wraps a `WINDOW*` owned by the C library. Windows created
//! through [`Screen::new_window`](crate::Screen::new_window) or derived from
//! another window are deleted when dropped; the standard screen is borrowed
//! from the library and never deleted.
//!
//! Each output and input primitive comes in a plain form acting at the
//! cursor and an `mv` form that moves first (`print` / `mvprint`,
//! `addch` / `mvaddch`, ...). The `*_args` variants accept a [`Value`]
//! list whose leading integers select between the two; see
//! [`crate::args`].

use std::ffi::{CStr, CString};
use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};

use libc::{c_char, c_int};

use crate::args::{self, Placement, Value};
use crate::attr::{self, color_pair};
use crate::error::{Error, IntoResult, Result};
use crate::sys::{self, attr_arg, WINDOW};
use crate::types::{AttrT, BorderChars, ChType, Coord, PairT, SyncMode, ERR};

/// A curses window.
///
/// Not `Send` or `Sync`: the C library keeps global state and must only be
/// driven from the thread that initialized it.
pub struct Window {
    ptr: NonNull<WINDOW>,
    owned: bool,
}

impl Window {
    /// Create a new top-level window with `newwin`.
    pub(crate) fn new(lines: Coord, cols: Coord, y: Coord, x: Coord) -> Result<Self> {
        let ptr = unsafe { sys::newwin(lines, cols, y, x) }.into_result("newwin")?;
        Ok(Self::owned(ptr))
    }

    pub(crate) fn owned(ptr: NonNull<WINDOW>) -> Self {
        Self { ptr, owned: true }
    }

    /// Wrap a window the library owns (stdscr).
    pub(crate) fn borrowed(ptr: NonNull<WINDOW>) -> Self {
        Self { ptr, owned: false }
    }

    /// The raw `WINDOW*`, for calls this crate does not wrap.
    pub fn as_ptr(&self) -> *mut WINDOW {
        self.ptr.as_ptr()
    }

    // ========================================================================
    // Output
    // ========================================================================

    /// Print a string at the cursor.
    pub fn print(&mut self, text: &str) -> Result<()> {
        let text = CString::new(text)?;
        unsafe { sys::waddstr(self.as_ptr(), text.as_ptr()) }.into_result("waddstr")
    }

    /// Move to `(y, x)` and print a string.
    pub fn mvprint(&mut self, y: Coord, x: Coord, text: &str) -> Result<()> {
        let text = CString::new(text)?;
        unsafe { sys::mvwaddstr(self.as_ptr(), y, x, text.as_ptr()) }.into_result("mvwaddstr")
    }

    /// Print from a variadic list: optional `y`, optional `x`, a format
    /// template and the values substituted into it.
    ///
    /// ```rust,no_run
    /// # use ncurses::*;
    /// # fn demo(win: &mut Window) -> Result<()> {
    /// win.print_args(&args![1, 2, "%s scored %d", "ann", 12])?;
    /// wprint!(win, "hello!")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn print_args(&mut self, list: &[Value]) -> Result<()> {
        let call = args::resolve_print(list)?;
        trace_call!("print {} {:?}", call.placement, call.text);
        call.placement.dispatch(
            self,
            |win| win.print(&call.text),
            |win, y, x| win.mvprint(y, x, &call.text),
        )
    }

    /// Add a character (with attributes) at the cursor.
    pub fn addch(&mut self, ch: ChType) -> Result<()> {
        unsafe { sys::waddch(self.as_ptr(), ch) }.into_result("waddch")
    }

    /// Move to `(y, x)` and add a character.
    pub fn mvaddch(&mut self, y: Coord, x: Coord, ch: ChType) -> Result<()> {
        unsafe { sys::mvwaddch(self.as_ptr(), y, x, ch) }.into_result("mvwaddch")
    }

    /// Add a character from a variadic list: `[y, [x,]] ch`.
    pub fn addch_args(&mut self, list: &[Value]) -> Result<()> {
        let (placement, ch) = plan_addch(list)?;
        trace_call!("addch {} {:#x}", placement, ch);
        placement.dispatch(self, |win| win.addch(ch), |win, y, x| win.mvaddch(y, x, ch))
    }

    /// Draw a horizontal line of `n` characters starting at the cursor.
    /// A zero `ch` uses the default line character.
    pub fn hline(&mut self, ch: ChType, n: i32) -> Result<()> {
        unsafe { sys::whline(self.as_ptr(), ch, n) }.into_result("whline")
    }

    /// Move to `(y, x)` and draw a horizontal line.
    pub fn mvhline(&mut self, y: Coord, x: Coord, ch: ChType, n: i32) -> Result<()> {
        unsafe { sys::mvwhline(self.as_ptr(), y, x, ch, n) }.into_result("mvwhline")
    }

    /// Horizontal line from a variadic list: `[y, [x,]] ch, n`.
    pub fn hline_args(&mut self, list: &[Value]) -> Result<()> {
        let (placement, ch, n) = plan_line(list)?;
        trace_call!("hline {} {:#x} x{}", placement, ch, n);
        placement.dispatch(self, |win| win.hline(ch, n), |win, y, x| win.mvhline(y, x, ch, n))
    }

    /// Draw a vertical line of `n` characters starting at the cursor.
    pub fn vline(&mut self, ch: ChType, n: i32) -> Result<()> {
        unsafe { sys::wvline(self.as_ptr(), ch, n) }.into_result("wvline")
    }

    /// Move to `(y, x)` and draw a vertical line.
    pub fn mvvline(&mut self, y: Coord, x: Coord, ch: ChType, n: i32) -> Result<()> {
        unsafe { sys::mvwvline(self.as_ptr(), y, x, ch, n) }.into_result("mvwvline")
    }

    /// Vertical line from a variadic list: `[y, [x,]] ch, n`.
    pub fn vline_args(&mut self, list: &[Value]) -> Result<()> {
        let (placement, ch, n) = plan_line(list)?;
        trace_call!("vline {} {:#x} x{}", placement, ch, n);
        placement.dispatch(self, |win| win.vline(ch, n), |win, y, x| win.mvvline(y, x, ch, n))
    }

    // ========================================================================
    // Input
    // ========================================================================

    /// Read a key. In no-delay or timeout mode, "no key yet" is reported as
    /// [`Error::DriverFailure`].
    pub fn getch(&mut self) -> Result<i32> {
        key_result(unsafe { sys::wgetch(self.as_ptr()) }, "wgetch")
    }

    /// Move to `(y, x)` and read a key.
    pub fn mvgetch(&mut self, y: Coord, x: Coord) -> Result<i32> {
        key_result(unsafe { sys::mvwgetch(self.as_ptr(), y, x) }, "mvwgetch")
    }

    /// Read a key after moving to zero, one or two coordinates.
    pub fn getch_at(&mut self, coords: &[Coord]) -> Result<i32> {
        let placement = Placement::from_coords(coords)?;
        trace_call!("getch {}", placement);
        placement.dispatch(self, |win| win.getch(), |win, y, x| win.mvgetch(y, x))
    }

    /// Read a line of at most `max` bytes, echoing per the terminal mode.
    pub fn getstr(&mut self, max: usize) -> Result<String> {
        let mut buf = line_buffer(max)?;
        let n = buf.len() as c_int - 1;
        unsafe { sys::wgetnstr(self.as_ptr(), buf.as_mut_ptr(), n) }.into_result("wgetnstr")?;
        Ok(line_from_buffer(&buf))
    }

    /// Move to `(y, x)` and read a line.
    pub fn mvgetstr(&mut self, y: Coord, x: Coord, max: usize) -> Result<String> {
        let mut buf = line_buffer(max)?;
        let n = buf.len() as c_int - 1;
        unsafe { sys::mvwgetnstr(self.as_ptr(), y, x, buf.as_mut_ptr(), n) }
            .into_result("mvwgetnstr")?;
        Ok(line_from_buffer(&buf))
    }

    /// Interpret function keys (arrows, F1...) as `KEY_*` codes.
    pub fn keypad(&mut self, on: bool) -> Result<()> {
        unsafe { sys::keypad(self.as_ptr(), on) }.into_result("keypad")
    }

    /// Make `getch` return immediately when no key is pending.
    pub fn nodelay(&mut self, on: bool) -> Result<()> {
        unsafe { sys::nodelay(self.as_ptr(), on) }.into_result("nodelay")
    }

    /// Block for at most `ms` milliseconds in `getch`; negative blocks
    /// indefinitely, zero does not block.
    pub fn timeout(&mut self, ms: i32) {
        unsafe { sys::wtimeout(self.as_ptr(), ms) }
    }

    // ========================================================================
    // Attributes
    // ========================================================================

    /// Turn on attributes, e.g. `A_BOLD | color_pair(1)`.
    pub fn attron(&mut self, attr: AttrT) -> Result<()> {
        if unsafe { sys::wattron(self.as_ptr(), attr_arg(attr)) } == ERR {
            return Err(attr_error("set", attr));
        }
        Ok(())
    }

    /// Turn off attributes.
    pub fn attroff(&mut self, attr: AttrT) -> Result<()> {
        if unsafe { sys::wattroff(self.as_ptr(), attr_arg(attr)) } == ERR {
            return Err(attr_error("unset", attr));
        }
        Ok(())
    }

    /// Replace the current attributes.
    pub fn attrset(&mut self, attr: AttrT) -> Result<()> {
        unsafe { sys::wattrset(self.as_ptr(), attr_arg(attr)) }.into_result("wattrset")
    }

    /// Turn on a color pair.
    pub fn color_on(&mut self, pair: PairT) -> Result<()> {
        self.attron(color_pair(pair))
    }

    /// Turn off a color pair.
    pub fn color_off(&mut self, pair: PairT) -> Result<()> {
        self.attroff(color_pair(pair))
    }

    /// Set the color pair, leaving other attributes alone.
    pub fn color_set(&mut self, pair: PairT) -> Result<()> {
        unsafe { sys::wcolor_set(self.as_ptr(), pair, ptr::null_mut()) }.into_result("wcolor_set")
    }

    /// Set the background: `ch` fills blanks and its attributes combine
    /// with every character written.
    pub fn background(&mut self, ch: ChType) -> Result<()> {
        unsafe { sys::wbkgd(self.as_ptr(), ch) }.into_result("wbkgd")
    }

    /// The current background character and attributes.
    pub fn getbkgd(&self) -> ChType {
        unsafe { sys::getbkgd(self.as_ptr()) }
    }

    // ========================================================================
    // Borders
    // ========================================================================

    /// Draw a border. Zero entries use the default line characters.
    pub fn border(&mut self, chars: BorderChars) -> Result<()> {
        unsafe {
            sys::wborder(
                self.as_ptr(),
                chars.left,
                chars.right,
                chars.top,
                chars.bottom,
                chars.top_left,
                chars.top_right,
                chars.bottom_left,
                chars.bottom_right,
            )
        }
        .into_result("wborder")
    }

    /// Draw a box using `verch` for the sides and `horch` for top and
    /// bottom; zero uses the default line characters.
    pub fn box_(&mut self, verch: ChType, horch: ChType) -> Result<()> {
        unsafe { sys::box_(self.as_ptr(), verch, horch) }.into_result("box")
    }

    // ========================================================================
    // Clearing
    // ========================================================================

    /// Blank the window and force a full repaint on the next refresh.
    pub fn clear(&mut self) -> Result<()> {
        unsafe { sys::wclear(self.as_ptr()) }.into_result("wclear")
    }

    /// Blank the window.
    pub fn erase(&mut self) -> Result<()> {
        unsafe { sys::werase(self.as_ptr()) }.into_result("werase")
    }

    /// Clear from the cursor to the bottom of the window.
    pub fn clear_to_bottom(&mut self) -> Result<()> {
        unsafe { sys::wclrtobot(self.as_ptr()) }.into_result("wclrtobot")
    }

    /// Clear from the cursor to the end of the line.
    pub fn clear_to_eol(&mut self) -> Result<()> {
        unsafe { sys::wclrtoeol(self.as_ptr()) }.into_result("wclrtoeol")
    }

    // ========================================================================
    // Geometry
    // ========================================================================

    /// Cursor position `(y, x)`.
    pub fn getyx(&self) -> (Coord, Coord) {
        unsafe { (sys::getcury(self.as_ptr()), sys::getcurx(self.as_ptr())) }
    }

    /// Window size `(rows, cols)`.
    pub fn getmaxyx(&self) -> (Coord, Coord) {
        unsafe { (sys::getmaxy(self.as_ptr()), sys::getmaxx(self.as_ptr())) }
    }

    /// Screen position of the upper-left corner `(y, x)`.
    pub fn getbegyx(&self) -> (Coord, Coord) {
        unsafe { (sys::getbegy(self.as_ptr()), sys::getbegx(self.as_ptr())) }
    }

    /// Whether the screen position `(y, x)` lies inside this window.
    pub fn enclose(&self, y: Coord, x: Coord) -> bool {
        unsafe { sys::wenclose(self.as_ptr(), y, x) }
    }

    /// Move the cursor.
    pub fn mv(&mut self, y: Coord, x: Coord) -> Result<()> {
        unsafe { sys::wmove(self.as_ptr(), y, x) }.into_result("wmove")
    }

    /// Move the window so its upper-left corner is at screen `(y, x)`.
    pub fn move_window(&mut self, y: Coord, x: Coord) -> Result<()> {
        unsafe { sys::mvwin(self.as_ptr(), y, x) }.into_result("mvwin")
    }

    /// Change the window size.
    pub fn resize(&mut self, lines: Coord, cols: Coord) -> Result<()> {
        unsafe { sys::wresize(self.as_ptr(), lines, cols) }.into_result("wresize")
    }

    /// Create a window positioned relative to this one (`derwin`).
    ///
    /// The new window shares memory with this one and must be dropped
    /// first.
    pub fn derived(&self, lines: Coord, cols: Coord, y: Coord, x: Coord) -> Result<Window> {
        let ptr = unsafe { sys::derwin(self.as_ptr(), lines, cols, y, x) }.into_result("derwin")?;
        Ok(Window::owned(ptr))
    }

    /// Create a window positioned relative to the screen (`subwin`).
    ///
    /// The new window shares memory with this one and must be dropped
    /// first.
    pub fn sub(&self, lines: Coord, cols: Coord, y: Coord, x: Coord) -> Result<Window> {
        let ptr = unsafe { sys::subwin(self.as_ptr(), lines, cols, y, x) }.into_result("subwin")?;
        Ok(Window::owned(ptr))
    }

    /// An independent copy of this window.
    pub fn duplicate(&self) -> Result<Window> {
        let ptr = unsafe { sys::dupwin(self.as_ptr()) }.into_result("dupwin")?;
        Ok(Window::owned(ptr))
    }

    // ========================================================================
    // Copying between windows
    // ========================================================================

    /// Copy a rectangle of `src` starting at `(sy, sx)` into this window's
    /// rectangle `(dy, dx)..=(dmy, dmx)`. With `overlay`, blanks are not
    /// copied.
    #[allow(clippy::too_many_arguments)]
    pub fn copy_from(
        &mut self,
        src: &Window,
        sy: Coord,
        sx: Coord,
        dy: Coord,
        dx: Coord,
        dmy: Coord,
        dmx: Coord,
        overlay: bool,
    ) -> Result<()> {
        unsafe {
            sys::copywin(
                src.as_ptr(),
                self.as_ptr(),
                sy,
                sx,
                dy,
                dx,
                dmy,
                dmx,
                c_int::from(overlay),
            )
        }
        .into_result("copywin")
    }

    /// Copy the overlapping part of this window onto `dst`, skipping blanks.
    pub fn overlay(&self, dst: &mut Window) -> Result<()> {
        unsafe { sys::overlay(self.as_ptr(), dst.as_ptr()) }.into_result("overlay")
    }

    /// Copy the overlapping part of this window onto `dst`, blanks included.
    pub fn overwrite(&self, dst: &mut Window) -> Result<()> {
        unsafe { sys::overwrite(self.as_ptr(), dst.as_ptr()) }.into_result("overwrite")
    }

    // ========================================================================
    // Refresh and scrolling
    // ========================================================================

    /// Copy the window to the terminal.
    pub fn refresh(&mut self) -> Result<()> {
        unsafe { sys::wrefresh(self.as_ptr()) }.into_result("wrefresh")
    }

    /// Stage the window for the next `Screen::update`.
    pub fn noutrefresh(&mut self) -> Result<()> {
        unsafe { sys::wnoutrefresh(self.as_ptr()) }.into_result("wnoutrefresh")
    }

    /// Scroll `n` lines up (negative scrolls down). Requires `scrollok`.
    pub fn scroll(&mut self, n: i32) -> Result<()> {
        unsafe { sys::wscrl(self.as_ptr(), n) }.into_result("wscrl")
    }

    /// Allow the window to scroll when output passes the last line.
    pub fn scrollok(&mut self, on: bool) -> Result<()> {
        unsafe { sys::scrollok(self.as_ptr(), on) }.into_result("scrollok")
    }

    /// Mark the whole window as changed.
    pub fn touch(&mut self) -> Result<()> {
        unsafe { sys::touchwin(self.as_ptr()) }.into_result("touchwin")
    }

    /// Propagate changes between this window and its relatives.
    pub fn sync(&mut self, mode: SyncMode) {
        let win = self.as_ptr();
        unsafe {
            match mode {
                SyncMode::None => {}
                SyncMode::Cursor => sys::wcursyncup(win),
                SyncMode::Down => sys::wsyncdown(win),
                SyncMode::Up => sys::wsyncup(win),
            }
        }
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        if self.owned {
            unsafe {
                sys::delwin(self.ptr.as_ptr());
            }
        }
    }
}

impl std::fmt::Debug for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Window")
            .field("ptr", &self.ptr)
            .field("owned", &self.owned)
            .finish()
    }
}

fn attr_error(action: &'static str, attr: AttrT) -> Error {
    Error::Attribute {
        action,
        name: attr::describe(attr),
    }
}

fn key_result(code: c_int, call: &'static str) -> Result<i32> {
    code.into_result(call)?;
    Ok(code)
}

fn line_buffer(max: usize) -> Result<Vec<c_char>> {
    if max == 0 || max >= c_int::MAX as usize {
        return Err(Error::invalid(format!("line length {} out of range", max)));
    }
    Ok(vec![0; max + 1])
}

fn line_from_buffer(buf: &[c_char]) -> String {
    // wgetnstr always terminates within the buffer
    unsafe { CStr::from_ptr(buf.as_ptr()) }
        .to_string_lossy()
        .into_owned()
}

/// A character operand: an ASCII `char`, or an integer chtype that may
/// carry attributes.
fn chtype_arg(value: &Value) -> Result<ChType> {
    match value {
        Value::Char(c) if c.is_ascii() => Ok(*c as ChType),
        Value::Int(n) => ChType::try_from(*n)
            .map_err(|_| Error::invalid(format!("{} does not fit a chtype", n))),
        other => Err(Error::invalid(format!(
            "expected an ASCII char or chtype, got {}",
            other
        ))),
    }
}

fn count_arg(value: &Value) -> Result<i32> {
    value
        .as_int()
        .and_then(|n| i32::try_from(n).ok())
        .ok_or_else(|| Error::invalid(format!("expected a line length, got {}", value)))
}

fn plan_addch(list: &[Value]) -> Result<(Placement, ChType)> {
    let call = args::resolve(list, 1)?;
    Ok((call.placement, chtype_arg(&call.rest[0])?))
}

fn plan_line(list: &[Value]) -> Result<(Placement, ChType, i32)> {
    let call = args::resolve(list, 2)?;
    Ok((call.placement, chtype_arg(&call.rest[0])?, count_arg(&call.rest[1])?))
}

// ============================================================================
// Pads
// ============================================================================

/// An off-screen window larger than the terminal; part of it is shown with
/// [`Pad::refresh`].
///
/// Derefs to [`Window`] for drawing.
#[derive(Debug)]
pub struct Pad {
    win: Window,
}

impl Pad {
    pub(crate) fn new(lines: Coord, cols: Coord) -> Result<Self> {
        let ptr = unsafe { sys::newpad(lines, cols) }.into_result("newpad")?;
        Ok(Pad {
            win: Window::owned(ptr),
        })
    }

    /// Add a character and refresh the pad in one call (`pechochar`).
    pub fn echo(&mut self, ch: ChType) -> Result<()> {
        unsafe { sys::pechochar(self.win.as_ptr(), ch) }.into_result("pechochar")
    }

    /// Show the pad region starting at `(pminrow, pmincol)` in the screen
    /// rectangle `(sminrow, smincol)..=(smaxrow, smaxcol)`.
    pub fn refresh(
        &mut self,
        pminrow: Coord,
        pmincol: Coord,
        sminrow: Coord,
        smincol: Coord,
        smaxrow: Coord,
        smaxcol: Coord,
    ) -> Result<()> {
        unsafe {
            sys::prefresh(
                self.win.as_ptr(),
                pminrow,
                pmincol,
                sminrow,
                smincol,
                smaxrow,
                smaxcol,
            )
        }
        .into_result("prefresh")
    }

    /// Like [`refresh`](Self::refresh) but only stages the output.
    pub fn noutrefresh(
        &mut self,
        pminrow: Coord,
        pmincol: Coord,
        sminrow: Coord,
        smincol: Coord,
        smaxrow: Coord,
        smaxcol: Coord,
    ) -> Result<()> {
        unsafe {
            sys::pnoutrefresh(
                self.win.as_ptr(),
                pminrow,
                pmincol,
                sminrow,
                smincol,
                smaxrow,
                smaxcol,
            )
        }
        .into_result("pnoutrefresh")
    }

    /// A sub-pad at `(y, x)` relative to this pad. Drop it before the
    /// parent.
    pub fn sub(&self, lines: Coord, cols: Coord, y: Coord, x: Coord) -> Result<Pad> {
        let ptr =
            unsafe { sys::subpad(self.win.as_ptr(), lines, cols, y, x) }.into_result("subpad")?;
        Ok(Pad {
            win: Window::owned(ptr),
        })
    }
}

impl Deref for Pad {
    type Target = Window;

    fn deref(&self) -> &Window {
        &self.win
    }
}

impl DerefMut for Pad {
    fn deref_mut(&mut self) -> &mut Window {
        &mut self.win
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::acs::ACS_HLINE;
    use crate::attr::A_BOLD;

    #[test]
    fn test_plan_addch() {
        assert_eq!(plan_addch(&crate::args!['x']).unwrap(), (Placement::Here, 'x' as ChType));
        assert_eq!(
            plan_addch(&crate::args![2, 3, A_BOLD | 'y' as ChType]).unwrap(),
            (Placement::At(2, 3), A_BOLD | 'y' as ChType)
        );
        assert_eq!(plan_addch(&crate::args![4, 'z']).unwrap().0, Placement::Row(4));
    }

    #[test]
    fn test_plan_addch_rejects() {
        assert!(plan_addch(&crate::args!["x"]).is_err());
        assert!(plan_addch(&crate::args!['日']).is_err());
        assert!(plan_addch(&crate::args![-1]).is_err());
        assert!(plan_addch(&crate::args![1, 2, 3, 'x']).is_err());
    }

    #[test]
    fn test_plan_line() {
        assert_eq!(
            plan_line(&crate::args![ACS_HLINE, 10]).unwrap(),
            (Placement::Here, ACS_HLINE, 10)
        );
        assert_eq!(
            plan_line(&crate::args![5, 0, '-', 3]).unwrap(),
            (Placement::At(5, 0), '-' as ChType, 3)
        );
        assert!(plan_line(&crate::args!['-']).is_err());
        assert!(plan_line(&crate::args!['-', "10"]).is_err());
    }

    #[test]
    fn test_line_buffer() {
        assert!(line_buffer(0).is_err());
        assert_eq!(line_buffer(8).unwrap().len(), 9);

        let buf: Vec<c_char> = b"hi\0zz".iter().map(|&b| b as c_char).collect();
        assert_eq!(line_from_buffer(&buf), "hi");
    }

    #[test]
    fn test_attr_error_names_attribute() {
        assert_eq!(
            attr_error("set", A_BOLD),
            Error::Attribute {
                action: "set",
                name: "bold".into()
            }
        );
        assert_eq!(attr_error("unset", color_pair(3)).to_string(), "failed to unset attribute: color pair 3");
    }
}
