//! Menus (`libmenu`).
//!
//! A [`Menu`] owns its [`MenuItem`]s and the null-terminated item array the
//! library keeps a pointer to. Menus are drawn into a window set with
//! [`Menu::set_window`] (stdscr by default) and navigated by feeding
//! request codes to [`Menu::driver`]; [`driver_action`] maps the usual
//! navigation keys to requests.
//!
//! # Example
//!
//! ```rust,no_run
//! use ncurses::*;
//! use ncurses::menu::{driver_action, Menu, MenuItem};
//!
//! # fn main() -> Result<()> {
//! let mut screen = Screen::init()?;
//! let items = vec![MenuItem::new("Open", "open a file")?, MenuItem::new("Quit", "")?];
//! let mut menu = Menu::new(items)?;
//! menu.post()?;
//! screen.stdscr_mut().refresh()?;
//!
//! let key = screen.stdscr_mut().getch()?;
//! if let Some(request) = driver_action(key) {
//!     menu.driver(request)?;
//! }
//! # Ok(())
//! # }
//! ```

use std::ffi::{CStr, CString};
use std::marker::PhantomData;
use std::ptr::{self, NonNull};

use libc::{c_char, c_int};

use crate::error::{Error, IntoResult, MenuError, Result};
use crate::key::{KEY_DOWN, KEY_END, KEY_HOME, KEY_LEFT, KEY_MAX, KEY_NPAGE, KEY_PPAGE, KEY_RIGHT, KEY_UP};
use crate::sys::{self, ITEM, MENU};
use crate::types::{ChType, ERR};
use crate::window::Window;

// ============================================================================
// Request codes
// ============================================================================

/// Move left to an item.
pub const REQ_LEFT_ITEM: i32 = KEY_MAX + 1;
/// Move right to an item.
pub const REQ_RIGHT_ITEM: i32 = KEY_MAX + 2;
/// Move up to an item.
pub const REQ_UP_ITEM: i32 = KEY_MAX + 3;
/// Move down to an item.
pub const REQ_DOWN_ITEM: i32 = KEY_MAX + 4;
/// Scroll up a line.
pub const REQ_SCR_ULINE: i32 = KEY_MAX + 5;
/// Scroll down a line.
pub const REQ_SCR_DLINE: i32 = KEY_MAX + 6;
/// Scroll down a page.
pub const REQ_SCR_DPAGE: i32 = KEY_MAX + 7;
/// Scroll up a page.
pub const REQ_SCR_UPAGE: i32 = KEY_MAX + 8;
/// Move to the first item.
pub const REQ_FIRST_ITEM: i32 = KEY_MAX + 9;
/// Move to the last item.
pub const REQ_LAST_ITEM: i32 = KEY_MAX + 10;
/// Move to the next item.
pub const REQ_NEXT_ITEM: i32 = KEY_MAX + 11;
/// Move to the previous item.
pub const REQ_PREV_ITEM: i32 = KEY_MAX + 12;
/// Select or deselect an item.
pub const REQ_TOGGLE_ITEM: i32 = KEY_MAX + 13;
/// Clear the match pattern.
pub const REQ_CLEAR_PATTERN: i32 = KEY_MAX + 14;
/// Delete the last character of the pattern.
pub const REQ_BACK_PATTERN: i32 = KEY_MAX + 15;
/// Move to the next item matching the pattern.
pub const REQ_NEXT_MATCH: i32 = KEY_MAX + 16;
/// Move to the previous item matching the pattern.
pub const REQ_PREV_MATCH: i32 = KEY_MAX + 17;

/// Lowest request code.
pub const MIN_MENU_COMMAND: i32 = REQ_LEFT_ITEM;
/// Highest request code.
pub const MAX_MENU_COMMAND: i32 = REQ_PREV_MATCH;

/// Navigation keys and the requests they map to.
pub static DRIVER_ACTIONS: &[(i32, i32)] = &[
    (KEY_DOWN, REQ_DOWN_ITEM),
    (KEY_HOME, REQ_FIRST_ITEM),
    (KEY_END, REQ_LAST_ITEM),
    (KEY_LEFT, REQ_LEFT_ITEM),
    (KEY_NPAGE, REQ_SCR_DPAGE),
    (KEY_PPAGE, REQ_SCR_UPAGE),
    (KEY_RIGHT, REQ_RIGHT_ITEM),
    (KEY_UP, REQ_UP_ITEM),
];

/// The request a navigation key maps to, if any.
pub fn driver_action(key: i32) -> Option<i32> {
    DRIVER_ACTIONS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, request)| *request)
}

/// The library's name for a request code, e.g. `"DOWN_ITEM"`.
pub fn request_name(request: i32) -> Option<String> {
    let name = unsafe { sys::menu_request_name(request) };
    if name.is_null() {
        return None;
    }
    Some(unsafe { CStr::from_ptr(name) }.to_string_lossy().into_owned())
}

/// The request code for a name as returned by [`request_name`].
/// Matching ignores case.
pub fn request_by_name(name: &str) -> Result<i32> {
    let name = CString::new(name)?;
    let code = unsafe { sys::menu_request_by_name(name.as_ptr()) };
    if code < MIN_MENU_COMMAND {
        MenuError::check(code)?;
        return Err(Error::Menu(MenuError::NoMatch));
    }
    Ok(code)
}

// ============================================================================
// Options
// ============================================================================

bitflags::bitflags! {
    /// Menu options.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct MenuOpts: c_int {
        /// Only one item can be selected.
        const O_ONEVALUE = 0x01;
        /// Show item descriptions.
        const O_SHOWDESC = 0x02;
        /// Lay items out row by row.
        const O_ROWMAJOR = 0x04;
        /// Ignore case when matching the pattern.
        const O_IGNORECASE = 0x08;
        /// Put the cursor in the pattern match.
        const O_SHOWMATCH = 0x10;
        /// Do not wrap around at the ends.
        const O_NONCYCLIC = 0x20;
        /// Let the driver handle mouse events.
        const O_MOUSE_MENU = 0x40;
    }
}

bitflags::bitflags! {
    /// Item options.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ItemOpts: c_int {
        /// The item can be selected.
        const O_SELECTABLE = 0x01;
    }
}

fn owned_string(ptr: *const c_char) -> String {
    if ptr.is_null() {
        return String::new();
    }
    unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned()
}

// ============================================================================
// Menu items
// ============================================================================

/// A menu item with a name and an optional description.
///
/// The library keeps pointers to both strings, so the item owns them.
pub struct MenuItem {
    ptr: NonNull<ITEM>,
    _name: CString,
    _description: CString,
}

impl MenuItem {
    /// Create an item. The name must be non-empty and printable.
    pub fn new(name: &str, description: &str) -> Result<Self> {
        let name = CString::new(name)?;
        let description = CString::new(description)?;
        let ptr = unsafe { sys::new_item(name.as_ptr(), description.as_ptr()) }
            .into_result("new_item")?;
        Ok(Self {
            ptr,
            _name: name,
            _description: description,
        })
    }

    fn as_ptr(&self) -> *mut ITEM {
        self.ptr.as_ptr()
    }

    /// The item name.
    pub fn name(&self) -> String {
        owned_string(unsafe { sys::item_name(self.as_ptr()) })
    }

    /// The item description.
    pub fn description(&self) -> String {
        owned_string(unsafe { sys::item_description(self.as_ptr()) })
    }

    /// Position in its menu's item list.
    pub fn index(&self) -> Result<usize> {
        let index = unsafe { sys::item_index(self.as_ptr()) };
        index.into_result("item_index")?;
        Ok(index as usize)
    }

    /// Allow or forbid selecting the item.
    pub fn set_selectable(&mut self, on: bool) -> Result<()> {
        let opts = ItemOpts::O_SELECTABLE.bits();
        let code = if on {
            unsafe { sys::item_opts_on(self.as_ptr(), opts) }
        } else {
            unsafe { sys::item_opts_off(self.as_ptr(), opts) }
        };
        MenuError::check(code)
    }

    /// Select or deselect the item in a multi-value menu.
    pub fn set_value(&mut self, selected: bool) -> Result<()> {
        MenuError::check(unsafe { sys::set_item_value(self.as_ptr(), selected) })
    }

    /// Whether the item is selected.
    pub fn value(&self) -> bool {
        unsafe { sys::item_value(self.as_ptr()) }
    }

    /// Whether the item is currently shown by its posted menu.
    pub fn visible(&self) -> bool {
        unsafe { sys::item_visible(self.as_ptr()) }
    }
}

impl Drop for MenuItem {
    fn drop(&mut self) {
        unsafe {
            sys::free_item(self.ptr.as_ptr());
        }
    }
}

impl std::fmt::Debug for MenuItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MenuItem")
            .field("name", &self._name)
            .field("description", &self._description)
            .finish()
    }
}

// ============================================================================
// Menus
// ============================================================================

/// The null-terminated `ITEM**` the library expects.
fn item_array(items: &[MenuItem]) -> Vec<*mut ITEM> {
    items
        .iter()
        .map(MenuItem::as_ptr)
        .chain(std::iter::once(ptr::null_mut()))
        .collect()
}

/// A menu over a list of items.
///
/// Windows given to [`set_window`](Self::set_window) and
/// [`set_sub_window`](Self::set_sub_window) must outlive the menu.
pub struct Menu<'w> {
    ptr: NonNull<MENU>,
    // null-terminated; the library reads it for the menu's lifetime
    raw_items: Vec<*mut ITEM>,
    items: Vec<MenuItem>,
    mark: Option<CString>,
    _windows: PhantomData<&'w Window>,
}

impl<'w> Menu<'w> {
    /// Create a menu over `items`.
    pub fn new(items: Vec<MenuItem>) -> Result<Self> {
        let mut raw_items = item_array(&items);
        let ptr = unsafe { sys::new_menu(raw_items.as_mut_ptr()) }.into_result("new_menu")?;
        trace_call!("new_menu({} items)", items.len());
        Ok(Self {
            ptr,
            raw_items,
            items,
            mark: None,
            _windows: PhantomData,
        })
    }

    fn as_ptr(&self) -> *mut MENU {
        self.ptr.as_ptr()
    }

    /// Replace the items of an unposted menu.
    ///
    /// The old items are freed once the library has let go of them. On
    /// error the menu keeps its old items and `items` is dropped.
    pub fn set_items(&mut self, items: Vec<MenuItem>) -> Result<()> {
        let mut raw_items = item_array(&items);
        MenuError::check(unsafe { sys::set_menu_items(self.as_ptr(), raw_items.as_mut_ptr()) })?;
        trace_call!("set_menu_items({} items)", items.len());
        self.raw_items = raw_items;
        self.items = items;
        Ok(())
    }

    /// Number of items.
    pub fn count(&self) -> usize {
        let n = unsafe { sys::item_count(self.as_ptr()) };
        usize::try_from(n).unwrap_or(0)
    }

    /// The items, in menu order.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// The current (highlighted) item.
    pub fn current(&self) -> Option<&MenuItem> {
        let current = unsafe { sys::current_item(self.as_ptr()) };
        self.items.iter().find(|item| item.as_ptr() == current)
    }

    /// Make the item at `index` current.
    pub fn set_current(&mut self, index: usize) -> Result<()> {
        let item = self
            .items
            .get(index)
            .ok_or_else(|| Error::invalid(format!("no menu item {}", index)))?;
        MenuError::check(unsafe { sys::set_current_item(self.as_ptr(), item.as_ptr()) })
    }

    /// Send a request (`REQ_*`) or a pattern character to the menu driver.
    pub fn driver(&mut self, request: i32) -> Result<()> {
        trace_call!("menu_driver({})", request);
        MenuError::check(unsafe { sys::menu_driver(self.as_ptr(), request) })
    }

    /// Attribute of the current item.
    pub fn foreground(&self) -> ChType {
        unsafe { sys::menu_fore(self.as_ptr()) }
    }

    /// Set the attribute of the current item.
    pub fn set_foreground(&mut self, attr: ChType) -> Result<()> {
        MenuError::check(unsafe { sys::set_menu_fore(self.as_ptr(), attr) })
    }

    /// Attribute of selectable items that are not current.
    pub fn background(&self) -> ChType {
        unsafe { sys::menu_back(self.as_ptr()) }
    }

    /// Set the attribute of selectable items that are not current.
    pub fn set_background(&mut self, attr: ChType) -> Result<()> {
        MenuError::check(unsafe { sys::set_menu_back(self.as_ptr(), attr) })
    }

    /// Attribute of unselectable items.
    pub fn grey(&self) -> ChType {
        unsafe { sys::menu_grey(self.as_ptr()) }
    }

    /// Set the attribute of unselectable items.
    pub fn set_grey(&mut self, attr: ChType) -> Result<()> {
        MenuError::check(unsafe { sys::set_menu_grey(self.as_ptr(), attr) })
    }

    /// Show at most `rows` x `cols` items; the rest scroll.
    pub fn set_format(&mut self, rows: i32, cols: i32) -> Result<()> {
        MenuError::check(unsafe { sys::set_menu_format(self.as_ptr(), rows, cols) })
    }

    /// The `(rows, cols)` format.
    pub fn format(&self) -> (i32, i32) {
        let (mut rows, mut cols) = (0, 0);
        unsafe { sys::menu_format(self.as_ptr(), &mut rows, &mut cols) };
        (rows, cols)
    }

    /// String drawn in front of the current item.
    pub fn set_mark(&mut self, mark: &str) -> Result<()> {
        let mark = CString::new(mark)?;
        MenuError::check(unsafe { sys::set_menu_mark(self.as_ptr(), mark.as_ptr()) })?;
        self.mark = Some(mark);
        Ok(())
    }

    /// The mark string.
    pub fn mark(&self) -> String {
        owned_string(unsafe { sys::menu_mark(self.as_ptr()) })
    }

    /// Turn options on or off.
    pub fn set_option(&mut self, opts: MenuOpts, on: bool) -> Result<()> {
        let code = if on {
            unsafe { sys::menu_opts_on(self.as_ptr(), opts.bits()) }
        } else {
            unsafe { sys::menu_opts_off(self.as_ptr(), opts.bits()) }
        };
        MenuError::check(code)
    }

    /// The options in effect.
    pub fn options(&self) -> MenuOpts {
        MenuOpts::from_bits_truncate(unsafe { sys::menu_opts(self.as_ptr()) })
    }

    /// Character between item names and descriptions.
    pub fn pad(&self) -> char {
        let pad = unsafe { sys::menu_pad(self.as_ptr()) };
        u32::try_from(pad)
            .ok()
            .and_then(char::from_u32)
            .unwrap_or(' ')
    }

    /// Set the character between item names and descriptions.
    pub fn set_pad(&mut self, pad: char) -> Result<()> {
        MenuError::check(unsafe { sys::set_menu_pad(self.as_ptr(), pad as c_int) })
    }

    /// The pattern typed so far.
    pub fn pattern(&self) -> String {
        owned_string(unsafe { sys::menu_pattern(self.as_ptr()) })
    }

    /// Set the pattern and move to the first matching item.
    pub fn set_pattern(&mut self, pattern: &str) -> Result<()> {
        let pattern = CString::new(pattern)?;
        MenuError::check(unsafe { sys::set_menu_pattern(self.as_ptr(), pattern.as_ptr()) })
    }

    /// Put the window cursor back where the menu driver wants it.
    pub fn position_cursor(&self) -> Result<()> {
        MenuError::check(unsafe { sys::pos_menu_cursor(self.as_ptr()) })
    }

    /// Draw the menu into its sub-window.
    pub fn post(&mut self) -> Result<()> {
        trace_call!("post_menu()");
        MenuError::check(unsafe { sys::post_menu(self.as_ptr()) })
    }

    /// Erase the menu from its sub-window.
    pub fn unpost(&mut self) -> Result<()> {
        MenuError::check(unsafe { sys::unpost_menu(self.as_ptr()) })
    }

    /// Minimum `(rows, cols)` the sub-window needs.
    pub fn scale(&self) -> Result<(i32, i32)> {
        let (mut rows, mut cols) = (0, 0);
        MenuError::check(unsafe { sys::scale_menu(self.as_ptr(), &mut rows, &mut cols) })?;
        Ok((rows, cols))
    }

    /// Spacing between name and description, and between item rows and
    /// columns. Zero selects the default.
    pub fn set_spacing(&mut self, description: i32, rows: i32, cols: i32) -> Result<()> {
        MenuError::check(unsafe { sys::set_menu_spacing(self.as_ptr(), description, rows, cols) })
    }

    /// The `(description, rows, cols)` spacing.
    pub fn spacing(&self) -> Result<(i32, i32, i32)> {
        let (mut desc, mut rows, mut cols) = (0, 0, 0);
        MenuError::check(unsafe {
            sys::menu_spacing(self.as_ptr(), &mut desc, &mut rows, &mut cols)
        })?;
        Ok((desc, rows, cols))
    }

    /// Window that frames the menu.
    pub fn set_window(&mut self, win: &'w Window) -> Result<()> {
        MenuError::check(unsafe { sys::set_menu_win(self.as_ptr(), win.as_ptr()) })
    }

    /// Window the items are drawn in; defaults to the menu window.
    pub fn set_sub_window(&mut self, win: &'w Window) -> Result<()> {
        MenuError::check(unsafe { sys::set_menu_sub(self.as_ptr(), win.as_ptr()) })
    }

    /// Refresh the framing window (stdscr when none was set).
    ///
    /// The menu only borrows its windows, so this is how a posted menu
    /// reaches the terminal while they are held.
    pub fn refresh(&self) -> Result<()> {
        let win = unsafe { sys::menu_win(self.as_ptr()) };
        unsafe { sys::wrefresh(win) }.into_result("wrefresh")
    }
}

impl Drop for Menu<'_> {
    fn drop(&mut self) {
        // items are freed after the menu releases them
        unsafe {
            if sys::unpost_menu(self.as_ptr()) == ERR {
                trace_call!("unpost_menu failed on drop");
            }
            sys::free_menu(self.as_ptr());
        }
        self.raw_items.clear();
    }
}

impl std::fmt::Debug for Menu<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Menu")
            .field("ptr", &self.ptr)
            .field("items", &self.items)
            .field("mark", &self.mark)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_codes() {
        assert_eq!(REQ_LEFT_ITEM, 512);
        assert_eq!(REQ_DOWN_ITEM, 515);
        assert_eq!(REQ_TOGGLE_ITEM, KEY_MAX + 13);
        assert_eq!(MAX_MENU_COMMAND, 528);
    }

    #[test]
    fn test_driver_actions() {
        assert_eq!(driver_action(KEY_DOWN), Some(REQ_DOWN_ITEM));
        assert_eq!(driver_action(KEY_HOME), Some(REQ_FIRST_ITEM));
        assert_eq!(driver_action(KEY_NPAGE), Some(REQ_SCR_DPAGE));
        assert_eq!(driver_action(KEY_PPAGE), Some(REQ_SCR_UPAGE));
        assert_eq!(driver_action('q' as i32), None);
        assert_eq!(DRIVER_ACTIONS.len(), 8);
    }

    #[test]
    fn test_option_bits() {
        assert_eq!(MenuOpts::O_ONEVALUE.bits(), 1);
        assert_eq!(MenuOpts::O_SHOWDESC.bits(), 2);
        assert_eq!(MenuOpts::O_NONCYCLIC.bits(), 0x20);
        assert_eq!(MenuOpts::from_bits_truncate(0x103), MenuOpts::O_ONEVALUE | MenuOpts::O_SHOWDESC);
        assert_eq!(ItemOpts::O_SELECTABLE.bits(), 1);
    }

    #[test]
    fn test_request_names() {
        assert_eq!(request_name(REQ_DOWN_ITEM).as_deref(), Some("DOWN_ITEM"));
        assert_eq!(request_name(REQ_SCR_UPAGE).as_deref(), Some("SCR_UPAGE"));
        assert_eq!(request_name(1), None);
        assert_eq!(request_by_name("DOWN_ITEM").unwrap(), REQ_DOWN_ITEM);
        assert_eq!(request_by_name("first_item").unwrap(), REQ_FIRST_ITEM);
        assert!(request_by_name("NOT_A_REQUEST").is_err());
    }

    #[test]
    fn test_item_strings() {
        let item = MenuItem::new("Open", "open a file").unwrap();
        assert_eq!(item.name(), "Open");
        assert_eq!(item.description(), "open a file");
        assert!(!item.value());
    }

    #[test]
    fn test_item_array_is_null_terminated() {
        let items = vec![
            MenuItem::new("One", "").unwrap(),
            MenuItem::new("Two", "").unwrap(),
        ];
        let raw = item_array(&items);
        assert_eq!(raw.len(), 3);
        assert_eq!(raw[0], items[0].as_ptr());
        assert_eq!(raw[1], items[1].as_ptr());
        assert!(raw[2].is_null());
        assert_eq!(item_array(&[]), vec![ptr::null_mut()]);
    }

    #[test]
    fn test_item_rejects_bad_names() {
        assert!(MenuItem::new("", "empty").is_err());
        assert_eq!(MenuItem::new("a\0b", "").unwrap_err(), Error::NulByte);
    }
}
