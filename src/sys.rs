//! Raw declarations for the C ncurses and menu libraries.
//!
//! Everything in here is `unsafe` to call. The safe wrappers live in
//! [`crate::screen`], [`crate::window`] and [`crate::menu`]; nothing outside
//! those modules should need to reach into this one.
//!
//! Only real exported functions are declared. Entry points that are macros
//! in `curses.h` (`getyx`, `COLOR_PAIR`, `ACS_*`, ...) are re-expressed in
//! Rust by the modules that need them.

#![allow(non_camel_case_types, non_upper_case_globals, missing_docs)]

use crate::types::{AttrT, ChType};
#[cfg(feature = "mouse")]
use crate::types::MmaskT;
use libc::{c_char, c_int, c_short, c_void};

/// Opaque ncurses window.
#[repr(C)]
pub struct WINDOW {
    _private: [u8; 0],
}

/// Mouse event record filled in by `getmouse`.
#[cfg(feature = "mouse")]
#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct MEVENT {
    pub id: c_short,
    pub x: c_int,
    pub y: c_int,
    pub z: c_int,
    pub bstate: MmaskT,
}

#[link(name = "ncursesw")]
extern "C" {
    pub static mut stdscr: *mut WINDOW;
    pub static mut COLORS: c_int;
    pub static mut COLOR_PAIRS: c_int;
    pub static mut LINES: c_int;
    pub static mut COLS: c_int;

    // initialisation and modes
    pub fn initscr() -> *mut WINDOW;
    pub fn endwin() -> c_int;
    pub fn isendwin() -> bool;
    pub fn cbreak() -> c_int;
    pub fn nocbreak() -> c_int;
    pub fn raw() -> c_int;
    pub fn noraw() -> c_int;
    pub fn echo() -> c_int;
    pub fn noecho() -> c_int;
    pub fn nl() -> c_int;
    pub fn nonl() -> c_int;
    pub fn halfdelay(tenths: c_int) -> c_int;
    pub fn curs_set(visibility: c_int) -> c_int;
    pub fn doupdate() -> c_int;
    pub fn beep() -> c_int;
    pub fn flash() -> c_int;
    pub fn set_escdelay(ms: c_int) -> c_int;
    pub fn set_tabsize(cols: c_int) -> c_int;

    // colours
    pub fn has_colors() -> bool;
    pub fn can_change_color() -> bool;
    pub fn start_color() -> c_int;
    pub fn use_default_colors() -> c_int;
    pub fn init_pair(pair: c_short, fg: c_short, bg: c_short) -> c_int;
    pub fn init_color(color: c_short, r: c_short, g: c_short, b: c_short) -> c_int;
    pub fn pair_content(pair: c_short, fg: *mut c_short, bg: *mut c_short) -> c_int;
    pub fn color_content(
        color: c_short,
        r: *mut c_short,
        g: *mut c_short,
        b: *mut c_short,
    ) -> c_int;

    // window lifetime and geometry
    pub fn newwin(lines: c_int, cols: c_int, y: c_int, x: c_int) -> *mut WINDOW;
    pub fn delwin(win: *mut WINDOW) -> c_int;
    pub fn subwin(orig: *mut WINDOW, lines: c_int, cols: c_int, y: c_int, x: c_int)
        -> *mut WINDOW;
    pub fn derwin(orig: *mut WINDOW, lines: c_int, cols: c_int, y: c_int, x: c_int)
        -> *mut WINDOW;
    pub fn dupwin(win: *mut WINDOW) -> *mut WINDOW;
    pub fn mvwin(win: *mut WINDOW, y: c_int, x: c_int) -> c_int;
    pub fn wresize(win: *mut WINDOW, lines: c_int, cols: c_int) -> c_int;
    pub fn getcury(win: *const WINDOW) -> c_int;
    pub fn getcurx(win: *const WINDOW) -> c_int;
    pub fn getbegy(win: *const WINDOW) -> c_int;
    pub fn getbegx(win: *const WINDOW) -> c_int;
    pub fn getmaxy(win: *const WINDOW) -> c_int;
    pub fn getmaxx(win: *const WINDOW) -> c_int;
    pub fn wenclose(win: *const WINDOW, y: c_int, x: c_int) -> bool;

    // output
    pub fn wmove(win: *mut WINDOW, y: c_int, x: c_int) -> c_int;
    pub fn waddch(win: *mut WINDOW, ch: ChType) -> c_int;
    pub fn mvwaddch(win: *mut WINDOW, y: c_int, x: c_int, ch: ChType) -> c_int;
    pub fn waddstr(win: *mut WINDOW, s: *const c_char) -> c_int;
    pub fn mvwaddstr(win: *mut WINDOW, y: c_int, x: c_int, s: *const c_char) -> c_int;
    pub fn whline(win: *mut WINDOW, ch: ChType, n: c_int) -> c_int;
    pub fn mvwhline(win: *mut WINDOW, y: c_int, x: c_int, ch: ChType, n: c_int) -> c_int;
    pub fn wvline(win: *mut WINDOW, ch: ChType, n: c_int) -> c_int;
    pub fn mvwvline(win: *mut WINDOW, y: c_int, x: c_int, ch: ChType, n: c_int) -> c_int;
    pub fn wborder(
        win: *mut WINDOW,
        ls: ChType,
        rs: ChType,
        ts: ChType,
        bs: ChType,
        tl: ChType,
        tr: ChType,
        bl: ChType,
        br: ChType,
    ) -> c_int;
    #[link_name = "box"]
    pub fn box_(win: *mut WINDOW, verch: ChType, horch: ChType) -> c_int;
    pub fn wclear(win: *mut WINDOW) -> c_int;
    pub fn werase(win: *mut WINDOW) -> c_int;
    pub fn wclrtobot(win: *mut WINDOW) -> c_int;
    pub fn wclrtoeol(win: *mut WINDOW) -> c_int;
    pub fn wrefresh(win: *mut WINDOW) -> c_int;
    pub fn wnoutrefresh(win: *mut WINDOW) -> c_int;
    pub fn wscrl(win: *mut WINDOW, n: c_int) -> c_int;
    pub fn scrollok(win: *mut WINDOW, bf: bool) -> c_int;
    pub fn touchwin(win: *mut WINDOW) -> c_int;
    pub fn wsyncup(win: *mut WINDOW);
    pub fn wsyncdown(win: *mut WINDOW);
    pub fn wcursyncup(win: *mut WINDOW);
    pub fn overlay(src: *const WINDOW, dst: *mut WINDOW) -> c_int;
    pub fn overwrite(src: *const WINDOW, dst: *mut WINDOW) -> c_int;
    pub fn copywin(
        src: *const WINDOW,
        dst: *mut WINDOW,
        sminrow: c_int,
        smincol: c_int,
        dminrow: c_int,
        dmincol: c_int,
        dmaxrow: c_int,
        dmaxcol: c_int,
        overlay: c_int,
    ) -> c_int;

    // attributes
    pub fn wattron(win: *mut WINDOW, attrs: c_int) -> c_int;
    pub fn wattroff(win: *mut WINDOW, attrs: c_int) -> c_int;
    pub fn wattrset(win: *mut WINDOW, attrs: c_int) -> c_int;
    pub fn wcolor_set(win: *mut WINDOW, pair: c_short, opts: *mut c_void) -> c_int;
    pub fn wbkgd(win: *mut WINDOW, ch: ChType) -> c_int;
    pub fn getbkgd(win: *mut WINDOW) -> ChType;

    // input
    pub fn keypad(win: *mut WINDOW, bf: bool) -> c_int;
    pub fn nodelay(win: *mut WINDOW, bf: bool) -> c_int;
    pub fn wtimeout(win: *mut WINDOW, delay: c_int);
    pub fn wgetch(win: *mut WINDOW) -> c_int;
    pub fn mvwgetch(win: *mut WINDOW, y: c_int, x: c_int) -> c_int;
    pub fn wgetnstr(win: *mut WINDOW, s: *mut c_char, n: c_int) -> c_int;
    pub fn mvwgetnstr(win: *mut WINDOW, y: c_int, x: c_int, s: *mut c_char, n: c_int)
        -> c_int;

    // pads
    pub fn newpad(lines: c_int, cols: c_int) -> *mut WINDOW;
    pub fn subpad(orig: *mut WINDOW, lines: c_int, cols: c_int, y: c_int, x: c_int)
        -> *mut WINDOW;
    pub fn pechochar(pad: *mut WINDOW, ch: ChType) -> c_int;
    pub fn prefresh(
        pad: *mut WINDOW,
        pminrow: c_int,
        pmincol: c_int,
        sminrow: c_int,
        smincol: c_int,
        smaxrow: c_int,
        smaxcol: c_int,
    ) -> c_int;
    pub fn pnoutrefresh(
        pad: *mut WINDOW,
        pminrow: c_int,
        pmincol: c_int,
        sminrow: c_int,
        smincol: c_int,
        smaxrow: c_int,
        smaxcol: c_int,
    ) -> c_int;
}

#[cfg(feature = "mouse")]
#[link(name = "ncursesw")]
extern "C" {
    pub fn has_mouse() -> bool;
    pub fn getmouse(event: *mut MEVENT) -> c_int;
    pub fn mousemask(newmask: MmaskT, oldmask: *mut MmaskT) -> MmaskT;
    pub fn mouseinterval(erval: c_int) -> c_int;
}

/// Opaque menu.
#[cfg(feature = "menu")]
#[repr(C)]
pub struct MENU {
    _private: [u8; 0],
}

/// Opaque menu item.
#[cfg(feature = "menu")]
#[repr(C)]
pub struct ITEM {
    _private: [u8; 0],
}

#[cfg(feature = "menu")]
#[link(name = "menuw")]
extern "C" {
    pub fn new_item(name: *const c_char, description: *const c_char) -> *mut ITEM;
    pub fn free_item(item: *mut ITEM) -> c_int;
    pub fn item_name(item: *const ITEM) -> *const c_char;
    pub fn item_description(item: *const ITEM) -> *const c_char;
    pub fn item_index(item: *const ITEM) -> c_int;
    pub fn item_opts_on(item: *mut ITEM, opts: c_int) -> c_int;
    pub fn item_opts_off(item: *mut ITEM, opts: c_int) -> c_int;
    pub fn set_item_value(item: *mut ITEM, value: bool) -> c_int;
    pub fn item_value(item: *const ITEM) -> bool;
    pub fn item_visible(item: *const ITEM) -> bool;

    pub fn new_menu(items: *mut *mut ITEM) -> *mut MENU;
    pub fn free_menu(menu: *mut MENU) -> c_int;
    pub fn set_menu_items(menu: *mut MENU, items: *mut *mut ITEM) -> c_int;
    pub fn item_count(menu: *const MENU) -> c_int;
    pub fn current_item(menu: *const MENU) -> *mut ITEM;
    pub fn set_current_item(menu: *mut MENU, item: *mut ITEM) -> c_int;
    pub fn menu_driver(menu: *mut MENU, request: c_int) -> c_int;
    pub fn post_menu(menu: *mut MENU) -> c_int;
    pub fn unpost_menu(menu: *mut MENU) -> c_int;
    pub fn pos_menu_cursor(menu: *const MENU) -> c_int;
    pub fn menu_fore(menu: *const MENU) -> ChType;
    pub fn set_menu_fore(menu: *mut MENU, attr: ChType) -> c_int;
    pub fn menu_back(menu: *const MENU) -> ChType;
    pub fn set_menu_back(menu: *mut MENU, attr: ChType) -> c_int;
    pub fn menu_grey(menu: *const MENU) -> ChType;
    pub fn set_menu_grey(menu: *mut MENU, attr: ChType) -> c_int;
    pub fn menu_pad(menu: *const MENU) -> c_int;
    pub fn set_menu_pad(menu: *mut MENU, pad: c_int) -> c_int;
    pub fn set_menu_format(menu: *mut MENU, rows: c_int, cols: c_int) -> c_int;
    pub fn menu_format(menu: *const MENU, rows: *mut c_int, cols: *mut c_int);
    pub fn set_menu_mark(menu: *mut MENU, mark: *const c_char) -> c_int;
    pub fn menu_mark(menu: *const MENU) -> *const c_char;
    pub fn menu_opts(menu: *const MENU) -> c_int;
    pub fn menu_opts_on(menu: *mut MENU, opts: c_int) -> c_int;
    pub fn menu_opts_off(menu: *mut MENU, opts: c_int) -> c_int;
    pub fn set_menu_pattern(menu: *mut MENU, pattern: *const c_char) -> c_int;
    pub fn menu_pattern(menu: *const MENU) -> *mut c_char;
    pub fn scale_menu(menu: *const MENU, rows: *mut c_int, cols: *mut c_int) -> c_int;
    pub fn set_menu_spacing(menu: *mut MENU, desc: c_int, rows: c_int, cols: c_int) -> c_int;
    pub fn menu_spacing(
        menu: *const MENU,
        desc: *mut c_int,
        rows: *mut c_int,
        cols: *mut c_int,
    ) -> c_int;
    pub fn set_menu_win(menu: *mut MENU, win: *mut WINDOW) -> c_int;
    pub fn set_menu_sub(menu: *mut MENU, win: *mut WINDOW) -> c_int;
    pub fn menu_win(menu: *const MENU) -> *mut WINDOW;
    pub fn menu_request_name(request: c_int) -> *const c_char;
    pub fn menu_request_by_name(name: *const c_char) -> c_int;
}

/// Attribute arguments of `wattron`/`wattroff` are declared `int` in C.
#[inline]
pub(crate) fn attr_arg(attr: AttrT) -> c_int {
    attr as c_int
}
