//! Core type definitions shared with the C library.
//!
//! These aliases mirror the widths ncurses uses at its ABI boundary, so
//! values can be handed to the driver without conversion.

use libc::c_int;

/// Character type with embedded attributes.
///
/// In ncurses, `chtype` is a 32-bit value where:
/// - Bits 0-7: The character (or character index)
/// - Bits 8-15: The color pair
/// - Bits 16-31: Video attributes
pub type ChType = u32;

/// Attribute type. Must be at least as wide as `ChType`.
pub type AttrT = ChType;

/// Mouse event mask type.
pub type MmaskT = u32;

/// Color value type (C `short`).
pub type ColorT = i16;

/// Color pair index type (C `short`).
pub type PairT = i16;

/// Window coordinate type.
pub type Coord = i32;

/// OK return value (success).
pub const OK: c_int = 0;

/// ERR return value (failure).
pub const ERR: c_int = -1;

/// Cursor visibility states accepted by `curs_set`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum CursorVisibility {
    /// Cursor is invisible (hidden).
    Invisible = 0,
    /// Normal cursor visibility (default).
    #[default]
    Normal = 1,
    /// Very visible cursor (e.g., block cursor).
    VeryVisible = 2,
}

impl CursorVisibility {
    /// Create from raw i32 value.
    ///
    /// Returns `None` if the value is not a valid cursor visibility.
    #[must_use]
    pub fn from_raw(value: i32) -> Option<Self> {
        match value {
            0 => Some(Self::Invisible),
            1 => Some(Self::Normal),
            2 => Some(Self::VeryVisible),
            _ => None,
        }
    }

    /// Convert to raw i32 value.
    #[must_use]
    pub fn to_raw(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for CursorVisibility {
    type Error = crate::error::Error;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::from_raw(value).ok_or_else(|| {
            crate::error::Error::InvalidArguments(format!(
                "cursor visibility must be 0, 1, or 2, got {}",
                value
            ))
        })
    }
}

/// Which way `Window::sync` propagates changes between a window and the
/// windows derived from it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SyncMode {
    /// Do nothing.
    #[default]
    None,
    /// Copy the cursor position up into every ancestor (`wcursyncup`).
    Cursor,
    /// Mark the window touched wherever an ancestor changed (`wsyncdown`).
    Down,
    /// Touch every ancestor where this window changed (`wsyncup`).
    Up,
}

/// Border characters for drawing window borders.
///
/// A zero entry tells the driver to use its default ACS line-drawing
/// character for that position.
///
/// # Example
///
/// ```rust
/// use ncurses::types::BorderChars;
///
/// let border = BorderChars::simple('|' as u32, '-' as u32)
///     .with_corners('+' as u32, '+' as u32, '+' as u32, '+' as u32);
/// assert_eq!(border.top_left, '+' as u32);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BorderChars {
    /// Left side character.
    pub left: ChType,
    /// Right side character.
    pub right: ChType,
    /// Top side character.
    pub top: ChType,
    /// Bottom side character.
    pub bottom: ChType,
    /// Top-left corner character.
    pub top_left: ChType,
    /// Top-right corner character.
    pub top_right: ChType,
    /// Bottom-left corner character.
    pub bottom_left: ChType,
    /// Bottom-right corner character.
    pub bottom_right: ChType,
}

impl BorderChars {
    /// Same character for both vertical sides and both horizontal sides,
    /// default corners.
    #[must_use]
    pub const fn simple(vertical: ChType, horizontal: ChType) -> Self {
        Self {
            left: vertical,
            right: vertical,
            top: horizontal,
            bottom: horizontal,
            top_left: 0,
            top_right: 0,
            bottom_left: 0,
            bottom_right: 0,
        }
    }

    /// Same character everywhere.
    #[must_use]
    pub const fn uniform(ch: ChType) -> Self {
        Self {
            left: ch,
            right: ch,
            top: ch,
            bottom: ch,
            top_left: ch,
            top_right: ch,
            bottom_left: ch,
            bottom_right: ch,
        }
    }

    /// Set corner characters.
    #[must_use]
    pub const fn with_corners(
        mut self,
        top_left: ChType,
        top_right: ChType,
        bottom_left: ChType,
        bottom_right: ChType,
    ) -> Self {
        self.top_left = top_left;
        self.top_right = top_right;
        self.bottom_left = bottom_left;
        self.bottom_right = bottom_right;
        self
    }
}

/// Position in window coordinates, row first as curses does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    /// Y coordinate (row).
    pub y: Coord,
    /// X coordinate (column).
    pub x: Coord,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(y: Coord, x: Coord) -> Self {
        Self { y, x }
    }
}

impl From<(Coord, Coord)> for Position {
    fn from((y, x): (Coord, Coord)) -> Self {
        Self { y, x }
    }
}

impl From<Position> for (Coord, Coord) {
    fn from(pos: Position) -> Self {
        (pos.y, pos.x)
    }
}

/// Size dimensions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    /// Height (number of rows).
    pub height: Coord,
    /// Width (number of columns).
    pub width: Coord,
}

impl Size {
    /// Create a new size.
    #[must_use]
    pub const fn new(height: Coord, width: Coord) -> Self {
        Self { height, width }
    }
}

impl From<Size> for (Coord, Coord) {
    fn from(size: Size) -> Self {
        (size.height, size.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_visibility_conversion() {
        assert_eq!(CursorVisibility::from_raw(0), Some(CursorVisibility::Invisible));
        assert_eq!(CursorVisibility::VeryVisible.to_raw(), 2);
        assert!(CursorVisibility::try_from(3).is_err());
    }

    #[test]
    fn test_border_chars() {
        let border = BorderChars::simple('|' as ChType, '-' as ChType);
        assert_eq!(border.left, '|' as ChType);
        assert_eq!(border.bottom, '-' as ChType);
        assert_eq!(border.top_left, 0);

        let border = BorderChars::uniform('#' as ChType);
        assert_eq!(border.bottom_right, '#' as ChType);
    }

    #[test]
    fn test_position_tuple() {
        let pos = Position::from((3, 7));
        assert_eq!(pos, Position::new(3, 7));
        let (y, x): (Coord, Coord) = pos.into();
        assert_eq!((y, x), (3, 7));
    }
}
