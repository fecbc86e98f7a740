//! Mouse event masks and events.
//!
//! Mask values follow the library's mouse version 2 layout: five bits per
//! button (released, pressed, clicked, double, triple), buttons 1-5, then
//! the modifier and position bits. Enable reporting with
//! [`Screen::mousemask`](crate::Screen::mousemask) and fetch events with
//! [`Screen::getmouse`](crate::Screen::getmouse) after `getch` returns
//! `KEY_MOUSE`.

use crate::sys::MEVENT;
use crate::types::MmaskT;

/// Bits per button in an event mask.
const BITS_PER_BUTTON: u32 = 5;

/// Place event bits `mask` for `button` (1-6), as `NCURSES_MOUSE_MASK`.
#[inline]
pub const fn mouse_mask(button: u32, mask: MmaskT) -> MmaskT {
    mask << ((button - 1) * BITS_PER_BUTTON)
}

const RELEASED: MmaskT = 0o01;
const PRESSED: MmaskT = 0o02;
const CLICKED: MmaskT = 0o04;
const DOUBLE_CLICKED: MmaskT = 0o10;
const TRIPLE_CLICKED: MmaskT = 0o20;

/// Button 1 released.
pub const BUTTON1_RELEASED: MmaskT = mouse_mask(1, RELEASED);
/// Button 1 pressed.
pub const BUTTON1_PRESSED: MmaskT = mouse_mask(1, PRESSED);
/// Button 1 clicked.
pub const BUTTON1_CLICKED: MmaskT = mouse_mask(1, CLICKED);
/// Button 1 double-clicked.
pub const BUTTON1_DOUBLE_CLICKED: MmaskT = mouse_mask(1, DOUBLE_CLICKED);
/// Button 1 triple-clicked.
pub const BUTTON1_TRIPLE_CLICKED: MmaskT = mouse_mask(1, TRIPLE_CLICKED);

/// Button 2 released.
pub const BUTTON2_RELEASED: MmaskT = mouse_mask(2, RELEASED);
/// Button 2 pressed.
pub const BUTTON2_PRESSED: MmaskT = mouse_mask(2, PRESSED);
/// Button 2 clicked.
pub const BUTTON2_CLICKED: MmaskT = mouse_mask(2, CLICKED);
/// Button 2 double-clicked.
pub const BUTTON2_DOUBLE_CLICKED: MmaskT = mouse_mask(2, DOUBLE_CLICKED);
/// Button 2 triple-clicked.
pub const BUTTON2_TRIPLE_CLICKED: MmaskT = mouse_mask(2, TRIPLE_CLICKED);

/// Button 3 released.
pub const BUTTON3_RELEASED: MmaskT = mouse_mask(3, RELEASED);
/// Button 3 pressed.
pub const BUTTON3_PRESSED: MmaskT = mouse_mask(3, PRESSED);
/// Button 3 clicked.
pub const BUTTON3_CLICKED: MmaskT = mouse_mask(3, CLICKED);
/// Button 3 double-clicked.
pub const BUTTON3_DOUBLE_CLICKED: MmaskT = mouse_mask(3, DOUBLE_CLICKED);
/// Button 3 triple-clicked.
pub const BUTTON3_TRIPLE_CLICKED: MmaskT = mouse_mask(3, TRIPLE_CLICKED);

/// Button 4 released. Button 4 is the wheel moving up on most terminals.
pub const BUTTON4_RELEASED: MmaskT = mouse_mask(4, RELEASED);
/// Button 4 pressed.
pub const BUTTON4_PRESSED: MmaskT = mouse_mask(4, PRESSED);
/// Button 4 clicked.
pub const BUTTON4_CLICKED: MmaskT = mouse_mask(4, CLICKED);
/// Button 4 double-clicked.
pub const BUTTON4_DOUBLE_CLICKED: MmaskT = mouse_mask(4, DOUBLE_CLICKED);
/// Button 4 triple-clicked.
pub const BUTTON4_TRIPLE_CLICKED: MmaskT = mouse_mask(4, TRIPLE_CLICKED);

/// Button 5 released. Button 5 is the wheel moving down.
pub const BUTTON5_RELEASED: MmaskT = mouse_mask(5, RELEASED);
/// Button 5 pressed.
pub const BUTTON5_PRESSED: MmaskT = mouse_mask(5, PRESSED);
/// Button 5 clicked.
pub const BUTTON5_CLICKED: MmaskT = mouse_mask(5, CLICKED);
/// Button 5 double-clicked.
pub const BUTTON5_DOUBLE_CLICKED: MmaskT = mouse_mask(5, DOUBLE_CLICKED);
/// Button 5 triple-clicked.
pub const BUTTON5_TRIPLE_CLICKED: MmaskT = mouse_mask(5, TRIPLE_CLICKED);

/// Ctrl was held during the event.
pub const BUTTON_CTRL: MmaskT = mouse_mask(6, 0o01);
/// Shift was held during the event.
pub const BUTTON_SHIFT: MmaskT = mouse_mask(6, 0o02);
/// Alt was held during the event.
pub const BUTTON_ALT: MmaskT = mouse_mask(6, 0o04);
/// Report motion as well as button events.
pub const REPORT_MOUSE_POSITION: MmaskT = mouse_mask(6, 0o10);
/// Every button event and modifier.
pub const ALL_MOUSE_EVENTS: MmaskT = REPORT_MOUSE_POSITION - 1;

/// A mouse event reported by the driver.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MouseEvent {
    /// Device id, for telling multiple mice apart.
    pub id: i16,
    /// Screen column.
    pub x: i32,
    /// Screen row.
    pub y: i32,
    /// Unused by current drivers.
    pub z: i32,
    /// Event and modifier bits.
    pub bstate: MmaskT,
}

impl MouseEvent {
    /// Whether any of the bits in `mask` are set in this event.
    pub fn has_button(&self, mask: MmaskT) -> bool {
        self.bstate & mask != 0
    }

    /// Position as `(y, x)`, ready for `Window::enclose`.
    pub fn position(&self) -> (i32, i32) {
        (self.y, self.x)
    }
}

impl From<MEVENT> for MouseEvent {
    fn from(raw: MEVENT) -> Self {
        Self {
            id: raw.id,
            x: raw.x,
            y: raw.y,
            z: raw.z,
            bstate: raw.bstate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_layout() {
        assert_eq!(BUTTON1_RELEASED, 0x1);
        assert_eq!(BUTTON1_PRESSED, 0x2);
        assert_eq!(BUTTON1_TRIPLE_CLICKED, 0x10);
        assert_eq!(BUTTON2_RELEASED, 0x20);
        assert_eq!(BUTTON3_CLICKED, 0x1000);
        assert_eq!(BUTTON4_PRESSED, 0x10000);
        assert_eq!(BUTTON5_PRESSED, 0x200000);
    }

    #[test]
    fn test_modifier_bits() {
        assert_eq!(BUTTON_CTRL, 1 << 25);
        assert_eq!(BUTTON_SHIFT, 1 << 26);
        assert_eq!(BUTTON_ALT, 1 << 27);
        assert_eq!(REPORT_MOUSE_POSITION, 1 << 28);
        assert_eq!(ALL_MOUSE_EVENTS, 0x0FFF_FFFF);
        assert_eq!(ALL_MOUSE_EVENTS & REPORT_MOUSE_POSITION, 0);
    }

    #[test]
    fn test_has_button() {
        let event = MouseEvent {
            x: 4,
            y: 2,
            bstate: BUTTON1_CLICKED | BUTTON_SHIFT,
            ..Default::default()
        };
        assert!(event.has_button(BUTTON1_CLICKED));
        assert!(event.has_button(BUTTON_SHIFT | BUTTON_CTRL));
        assert!(!event.has_button(BUTTON2_CLICKED));
        assert_eq!(event.position(), (2, 4));
    }

    #[test]
    fn test_from_raw_event() {
        let raw = MEVENT {
            id: 1,
            x: 10,
            y: 3,
            z: 0,
            bstate: BUTTON3_PRESSED,
        };
        let event = MouseEvent::from(raw);
        assert_eq!(event.id, 1);
        assert!(event.has_button(BUTTON3_PRESSED));
    }
}
