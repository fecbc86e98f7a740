//! Color constants and color pair bookkeeping.
//!
//! Colors are organized into pairs (foreground/background) that are applied
//! to text through [`crate::attr::color_pair`]. The palette itself lives in
//! the driver; this module only names the standard entries and checks pair
//! numbers before they are forwarded.

use crate::error::{Error, Result};
use crate::types::{ColorT, PairT};

// ============================================================================
// Standard Colors
// ============================================================================

/// Black color.
pub const COLOR_BLACK: ColorT = 0;
/// Red color.
pub const COLOR_RED: ColorT = 1;
/// Green color.
pub const COLOR_GREEN: ColorT = 2;
/// Yellow color.
pub const COLOR_YELLOW: ColorT = 3;
/// Blue color.
pub const COLOR_BLUE: ColorT = 4;
/// Magenta color.
pub const COLOR_MAGENTA: ColorT = 5;
/// Cyan color.
pub const COLOR_CYAN: ColorT = 6;
/// White color.
pub const COLOR_WHITE: ColorT = 7;

/// The terminal's default color, usable after `use_default_colors`.
pub const COLOR_DEFAULT: ColorT = -1;

/// Maximum RGB component accepted by `init_color`.
pub const RGB_MAX: i16 = 1000;

/// Standard color enumeration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i16)]
pub enum Color {
    /// Black (color 0).
    Black = COLOR_BLACK,
    /// Red (color 1).
    Red = COLOR_RED,
    /// Green (color 2).
    Green = COLOR_GREEN,
    /// Yellow (color 3).
    Yellow = COLOR_YELLOW,
    /// Blue (color 4).
    Blue = COLOR_BLUE,
    /// Magenta (color 5).
    Magenta = COLOR_MAGENTA,
    /// Cyan (color 6).
    Cyan = COLOR_CYAN,
    /// White (color 7).
    White = COLOR_WHITE,
}

impl Color {
    /// Convert from a color index.
    pub fn from_index(index: ColorT) -> Option<Self> {
        match index {
            COLOR_BLACK => Some(Color::Black),
            COLOR_RED => Some(Color::Red),
            COLOR_GREEN => Some(Color::Green),
            COLOR_YELLOW => Some(Color::Yellow),
            COLOR_BLUE => Some(Color::Blue),
            COLOR_MAGENTA => Some(Color::Magenta),
            COLOR_CYAN => Some(Color::Cyan),
            COLOR_WHITE => Some(Color::White),
            _ => None,
        }
    }

    /// Convert to color index.
    pub const fn to_index(self) -> ColorT {
        self as ColorT
    }
}

impl From<Color> for ColorT {
    fn from(color: Color) -> Self {
        color as ColorT
    }
}

/// An RGB definition as reported by `color_content`, components 0-1000.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgb {
    /// Red component.
    pub red: i16,
    /// Green component.
    pub green: i16,
    /// Blue component.
    pub blue: i16,
}

/// Check a pair number against the number of pairs the terminal supports.
///
/// Pair 0 is reserved for the terminal defaults and cannot be redefined.
pub fn check_pair(pair: PairT, color_pairs: i32) -> Result<()> {
    if pair <= 0 || i32::from(pair) >= color_pairs {
        return Err(Error::InvalidColorPair(pair));
    }
    Ok(())
}

/// Check an RGB component before it is forwarded to `init_color`.
pub fn check_rgb(component: i16) -> Result<()> {
    if !(0..=RGB_MAX).contains(&component) {
        return Err(Error::invalid(format!(
            "color component {} outside 0..={}",
            component, RGB_MAX
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_enum() {
        assert_eq!(Color::from_index(COLOR_CYAN), Some(Color::Cyan));
        assert_eq!(Color::from_index(8), None);
        assert_eq!(ColorT::from(Color::Yellow), 3);
        assert_eq!(Color::White.to_index(), COLOR_WHITE);
    }

    #[test]
    fn test_check_pair() {
        assert_eq!(check_pair(0, 64), Err(Error::InvalidColorPair(0)));
        assert_eq!(check_pair(64, 64), Err(Error::InvalidColorPair(64)));
        assert_eq!(check_pair(-2, 64), Err(Error::InvalidColorPair(-2)));
        assert!(check_pair(1, 64).is_ok());
        assert!(check_pair(63, 64).is_ok());
    }

    #[test]
    fn test_check_rgb() {
        assert!(check_rgb(0).is_ok());
        assert!(check_rgb(1000).is_ok());
        assert!(matches!(check_rgb(1001), Err(Error::InvalidArguments(_))));
        assert!(check_rgb(-1).is_err());
    }
}
