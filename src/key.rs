//! Key codes returned by `getch` and their names.
//!
//! Codes above 255 are the driver's function-key values (`KEY_*` in
//! `curses.h`); everything below is a plain character.

use std::borrow::Cow;

/// Tab, as delivered by the terminal.
pub const KEY_TAB: i32 = 9;
/// Return, as delivered by the terminal (as opposed to keypad `KEY_ENTER`).
pub const KEY_RETURN: i32 = 10;
/// Escape.
pub const KEY_ESC: i32 = 27;

/// Minimum curses key value.
pub const KEY_MIN: i32 = 0o401;
/// Break key (unreliable).
pub const KEY_BREAK: i32 = 0o401;
/// Down arrow key.
pub const KEY_DOWN: i32 = 0o402;
/// Up arrow key.
pub const KEY_UP: i32 = 0o403;
/// Left arrow key.
pub const KEY_LEFT: i32 = 0o404;
/// Right arrow key.
pub const KEY_RIGHT: i32 = 0o405;
/// Home key.
pub const KEY_HOME: i32 = 0o406;
/// Backspace key.
pub const KEY_BACKSPACE: i32 = 0o407;
/// Function key F0; F(n) is `KEY_F0 + n`, see [`key_f`].
pub const KEY_F0: i32 = 0o410;

/// Function key F(n).
#[inline]
pub const fn key_f(n: i32) -> i32 {
    KEY_F0 + n
}

/// Function key F1.
pub const KEY_F1: i32 = key_f(1);
/// Function key F2.
pub const KEY_F2: i32 = key_f(2);
/// Function key F3.
pub const KEY_F3: i32 = key_f(3);
/// Function key F4.
pub const KEY_F4: i32 = key_f(4);
/// Function key F5.
pub const KEY_F5: i32 = key_f(5);
/// Function key F6.
pub const KEY_F6: i32 = key_f(6);
/// Function key F7.
pub const KEY_F7: i32 = key_f(7);
/// Function key F8.
pub const KEY_F8: i32 = key_f(8);
/// Function key F9.
pub const KEY_F9: i32 = key_f(9);
/// Function key F10.
pub const KEY_F10: i32 = key_f(10);
/// Function key F11.
pub const KEY_F11: i32 = key_f(11);
/// Function key F12.
pub const KEY_F12: i32 = key_f(12);

/// Delete-line.
pub const KEY_DL: i32 = 0o510;
/// Insert-line.
pub const KEY_IL: i32 = 0o511;
/// Delete-character.
pub const KEY_DC: i32 = 0o512;
/// Insert-character.
pub const KEY_IC: i32 = 0o513;
/// Sent by rmir or smir in insert mode.
pub const KEY_EIC: i32 = 0o514;
/// Clear-screen or erase.
pub const KEY_CLEAR: i32 = 0o515;
/// Clear-to-end-of-screen.
pub const KEY_EOS: i32 = 0o516;
/// Clear-to-end-of-line.
pub const KEY_EOL: i32 = 0o517;
/// Scroll-forward.
pub const KEY_SF: i32 = 0o520;
/// Scroll-backward.
pub const KEY_SR: i32 = 0o521;
/// Next-page.
pub const KEY_NPAGE: i32 = 0o522;
/// Previous-page.
pub const KEY_PPAGE: i32 = 0o523;
/// Set-tab.
pub const KEY_STAB: i32 = 0o524;
/// Clear-tab.
pub const KEY_CTAB: i32 = 0o525;
/// Clear-all-tabs.
pub const KEY_CATAB: i32 = 0o526;
/// Enter/send.
pub const KEY_ENTER: i32 = 0o527;
/// Soft (partial) reset.
pub const KEY_SRESET: i32 = 0o530;
/// Reset or hard reset.
pub const KEY_RESET: i32 = 0o531;
/// Print.
pub const KEY_PRINT: i32 = 0o532;
/// Lower-left key (home down).
pub const KEY_LL: i32 = 0o533;
/// Upper left of keypad.
pub const KEY_A1: i32 = 0o534;
/// Upper right of keypad.
pub const KEY_A3: i32 = 0o535;
/// Center of keypad.
pub const KEY_B2: i32 = 0o536;
/// Lower left of keypad.
pub const KEY_C1: i32 = 0o537;
/// Lower right of keypad.
pub const KEY_C3: i32 = 0o540;
/// Back-tab.
pub const KEY_BTAB: i32 = 0o541;
/// Begin key.
pub const KEY_BEG: i32 = 0o542;
/// Cancel key.
pub const KEY_CANCEL: i32 = 0o543;
/// Close key.
pub const KEY_CLOSE: i32 = 0o544;
/// Command key.
pub const KEY_COMMAND: i32 = 0o545;
/// Copy key.
pub const KEY_COPY: i32 = 0o546;
/// Create key.
pub const KEY_CREATE: i32 = 0o547;
/// End key.
pub const KEY_END: i32 = 0o550;
/// Exit key.
pub const KEY_EXIT: i32 = 0o551;
/// Find key.
pub const KEY_FIND: i32 = 0o552;
/// Help key.
pub const KEY_HELP: i32 = 0o553;
/// Mark key.
pub const KEY_MARK: i32 = 0o554;
/// Message key.
pub const KEY_MESSAGE: i32 = 0o555;
/// Move key.
pub const KEY_MOVE: i32 = 0o556;
/// Next key.
pub const KEY_NEXT: i32 = 0o557;
/// Open key.
pub const KEY_OPEN: i32 = 0o560;
/// Options key.
pub const KEY_OPTIONS: i32 = 0o561;
/// Previous key.
pub const KEY_PREVIOUS: i32 = 0o562;
/// Redo key.
pub const KEY_REDO: i32 = 0o563;
/// Reference key.
pub const KEY_REFERENCE: i32 = 0o564;
/// Refresh key.
pub const KEY_REFRESH: i32 = 0o565;
/// Replace key.
pub const KEY_REPLACE: i32 = 0o566;
/// Restart key.
pub const KEY_RESTART: i32 = 0o567;
/// Resume key.
pub const KEY_RESUME: i32 = 0o570;
/// Save key.
pub const KEY_SAVE: i32 = 0o571;
/// Shifted begin key.
pub const KEY_SBEG: i32 = 0o572;
/// Shifted cancel key.
pub const KEY_SCANCEL: i32 = 0o573;
/// Shifted command key.
pub const KEY_SCOMMAND: i32 = 0o574;
/// Shifted copy key.
pub const KEY_SCOPY: i32 = 0o575;
/// Shifted create key.
pub const KEY_SCREATE: i32 = 0o576;
/// Shifted delete-character key.
pub const KEY_SDC: i32 = 0o577;
/// Shifted delete-line key.
pub const KEY_SDL: i32 = 0o600;
/// Select key.
pub const KEY_SELECT: i32 = 0o601;
/// Shifted end key.
pub const KEY_SEND: i32 = 0o602;
/// Shifted clear-to-end-of-line key.
pub const KEY_SEOL: i32 = 0o603;
/// Shifted exit key.
pub const KEY_SEXIT: i32 = 0o604;
/// Shifted find key.
pub const KEY_SFIND: i32 = 0o605;
/// Shifted help key.
pub const KEY_SHELP: i32 = 0o606;
/// Shifted home key.
pub const KEY_SHOME: i32 = 0o607;
/// Shifted insert-character key.
pub const KEY_SIC: i32 = 0o610;
/// Shifted left arrow key.
pub const KEY_SLEFT: i32 = 0o611;
/// Shifted message key.
pub const KEY_SMESSAGE: i32 = 0o612;
/// Shifted move key.
pub const KEY_SMOVE: i32 = 0o613;
/// Shifted next key.
pub const KEY_SNEXT: i32 = 0o614;
/// Shifted options key.
pub const KEY_SOPTIONS: i32 = 0o615;
/// Shifted previous key.
pub const KEY_SPREVIOUS: i32 = 0o616;
/// Shifted print key.
pub const KEY_SPRINT: i32 = 0o617;
/// Shifted redo key.
pub const KEY_SREDO: i32 = 0o620;
/// Shifted replace key.
pub const KEY_SREPLACE: i32 = 0o621;
/// Shifted right arrow key.
pub const KEY_SRIGHT: i32 = 0o622;
/// Shifted resume key.
pub const KEY_SRSUME: i32 = 0o623;
/// Shifted save key.
pub const KEY_SSAVE: i32 = 0o624;
/// Shifted suspend key.
pub const KEY_SSUSPEND: i32 = 0o625;
/// Shifted undo key.
pub const KEY_SUNDO: i32 = 0o626;
/// Suspend key.
pub const KEY_SUSPEND: i32 = 0o627;
/// Undo key.
pub const KEY_UNDO: i32 = 0o630;
/// Mouse event pending; fetch it with `Screen::getmouse`.
pub const KEY_MOUSE: i32 = 0o631;
/// Terminal resize event.
pub const KEY_RESIZE: i32 = 0o632;
/// We were interrupted by an event.
pub const KEY_EVENT: i32 = 0o633;
/// Maximum key value.
pub const KEY_MAX: i32 = 0o777;

/// Alias for [`KEY_NPAGE`].
pub const KEY_PAGEDOWN: i32 = KEY_NPAGE;
/// Alias for [`KEY_PPAGE`].
pub const KEY_PAGEUP: i32 = KEY_PPAGE;

/// Descriptive names for key codes.
pub static KEY_NAMES: &[(i32, &str)] = &[
    (KEY_TAB, "tab"),
    (KEY_RETURN, "enter"),
    (KEY_ESC, "escape"),
    (KEY_DOWN, "down"),
    (KEY_UP, "up"),
    (KEY_LEFT, "left"),
    (KEY_RIGHT, "right"),
    (KEY_HOME, "home"),
    (KEY_END, "end"),
    (KEY_BACKSPACE, "backspace"),
    (KEY_ENTER, "enter"),
    (KEY_F0, "F0"),
    (KEY_F1, "F1"),
    (KEY_F2, "F2"),
    (KEY_F3, "F3"),
    (KEY_F4, "F4"),
    (KEY_F5, "F5"),
    (KEY_F6, "F6"),
    (KEY_F7, "F7"),
    (KEY_F8, "F8"),
    (KEY_F9, "F9"),
    (KEY_F10, "F10"),
    (KEY_F11, "F11"),
    (KEY_F12, "F12"),
    (KEY_DC, "delete"),
    (KEY_IC, "insert"),
    (KEY_BTAB, "back tab"),
    (KEY_NPAGE, "page down"),
    (KEY_PPAGE, "page up"),
    (KEY_MOUSE, "mouse"),
    (KEY_RESIZE, "resize"),
];

/// A printable name for a key code returned by `getch`.
///
/// Codes in [`KEY_NAMES`] get their descriptive name. Any other code is
/// rendered as the character it encodes, or U+FFFD when it encodes none.
///
/// ```rust
/// use ncurses::key::{key_name, KEY_DOWN};
///
/// assert_eq!(key_name(KEY_DOWN), "down");
/// assert_eq!(key_name('q' as i32), "q");
/// ```
pub fn key_name(code: i32) -> Cow<'static, str> {
    if let Some((_, name)) = KEY_NAMES.iter().find(|(k, _)| *k == code) {
        return Cow::Borrowed(name);
    }
    let ch = u32::try_from(code)
        .ok()
        .and_then(char::from_u32)
        .unwrap_or(char::REPLACEMENT_CHARACTER);
    Cow::Owned(ch.to_string())
}

/// Key enumeration for type-safe key handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// A regular character.
    Char(char),
    /// Down arrow.
    Down,
    /// Up arrow.
    Up,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Home key.
    Home,
    /// End key.
    End,
    /// Backspace.
    Backspace,
    /// Delete character.
    Delete,
    /// Insert character.
    Insert,
    /// Page up.
    PageUp,
    /// Page down.
    PageDown,
    /// Enter/Return.
    Enter,
    /// Tab.
    Tab,
    /// Back-tab (Shift+Tab).
    BackTab,
    /// Escape.
    Escape,
    /// Function key (0-63).
    F(u8),
    /// Mouse event.
    Mouse,
    /// Terminal resize.
    Resize,
    /// Unknown key code.
    Unknown(i32),
}

impl Key {
    /// Convert from a raw key code.
    pub fn from_code(code: i32) -> Self {
        match code {
            KEY_TAB => Key::Tab,
            KEY_RETURN | 13 => Key::Enter,
            KEY_ESC => Key::Escape,
            127 => Key::Backspace,
            32..=126 | 128..=255 => Key::Char(code as u8 as char),
            KEY_DOWN => Key::Down,
            KEY_UP => Key::Up,
            KEY_LEFT => Key::Left,
            KEY_RIGHT => Key::Right,
            KEY_HOME => Key::Home,
            KEY_END => Key::End,
            KEY_BACKSPACE => Key::Backspace,
            KEY_DC => Key::Delete,
            KEY_IC => Key::Insert,
            KEY_PPAGE => Key::PageUp,
            KEY_NPAGE => Key::PageDown,
            KEY_ENTER => Key::Enter,
            KEY_BTAB => Key::BackTab,
            KEY_MOUSE => Key::Mouse,
            KEY_RESIZE => Key::Resize,
            k if (KEY_F0..KEY_F0 + 64).contains(&k) => Key::F((k - KEY_F0) as u8),
            _ => Key::Unknown(code),
        }
    }

    /// Convert to a raw key code.
    pub fn to_code(self) -> i32 {
        match self {
            Key::Char(c) => c as i32,
            Key::Down => KEY_DOWN,
            Key::Up => KEY_UP,
            Key::Left => KEY_LEFT,
            Key::Right => KEY_RIGHT,
            Key::Home => KEY_HOME,
            Key::End => KEY_END,
            Key::Backspace => KEY_BACKSPACE,
            Key::Delete => KEY_DC,
            Key::Insert => KEY_IC,
            Key::PageUp => KEY_PPAGE,
            Key::PageDown => KEY_NPAGE,
            Key::Enter => KEY_ENTER,
            Key::Tab => KEY_TAB,
            Key::BackTab => KEY_BTAB,
            Key::Escape => KEY_ESC,
            Key::F(n) => key_f(n as i32),
            Key::Mouse => KEY_MOUSE,
            Key::Resize => KEY_RESIZE,
            Key::Unknown(code) => code,
        }
    }
}

impl From<i32> for Key {
    fn from(code: i32) -> Self {
        Key::from_code(code)
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Key::Char(c) => write!(f, "{}", c),
            Key::Unknown(code) => write!(f, "<unknown:{}>", code),
            other => f.write_str(&key_name(other.to_code())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_f() {
        assert_eq!(key_f(1), KEY_F0 + 1);
        assert_eq!(KEY_F12, 0o410 + 12);
    }

    #[test]
    fn test_key_name_table() {
        assert_eq!(key_name(KEY_TAB), "tab");
        assert_eq!(key_name(KEY_RETURN), "enter");
        assert_eq!(key_name(KEY_ENTER), "enter");
        assert_eq!(key_name(KEY_NPAGE), "page down");
        assert_eq!(key_name(KEY_F5), "F5");
        assert!(matches!(key_name(KEY_UP), Cow::Borrowed("up")));
    }

    #[test]
    fn test_key_name_falls_back_to_character() {
        assert_eq!(key_name('a' as i32), "a");
        assert_eq!(key_name('é' as i32), "é");
        assert_eq!(key_name(-1), "\u{FFFD}");
        assert_eq!(key_name(0xD800), "\u{FFFD}");
    }

    #[test]
    fn test_key_enum() {
        assert_eq!(Key::from_code(KEY_UP), Key::Up);
        assert_eq!(Key::from_code(KEY_F0 + 1), Key::F(1));
        assert_eq!(Key::from_code(65), Key::Char('A'));
        assert_eq!(Key::from_code(13), Key::Enter);
        assert_eq!(Key::Up.to_code(), KEY_UP);
        assert_eq!(Key::F(1).to_code(), KEY_F0 + 1);
        assert_eq!(Key::from(KEY_EVENT), Key::Unknown(KEY_EVENT));
    }

    #[test]
    fn test_key_display() {
        assert_eq!(Key::PageUp.to_string(), "page up");
        assert_eq!(Key::Char('x').to_string(), "x");
        assert_eq!(Key::Unknown(700).to_string(), "<unknown:700>");
    }
}
