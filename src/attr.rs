//! Video attributes.
//!
//! Bit layout follows `curses.h`: the low byte is the character, the next
//! byte is the color pair, and the remaining bits are attributes. Values are
//! handed to the driver unchanged.

use crate::types::{AttrT, ChType, PairT};

/// Attribute shift - characters occupy bits 0-7.
pub const NCURSES_ATTR_SHIFT: u32 = 8;

/// Helper function for attribute bit positioning (`NCURSES_BITS`).
#[inline]
pub const fn ncurses_bits(mask: u32, shift: u32) -> ChType {
    (mask as ChType) << (shift + NCURSES_ATTR_SHIFT)
}

// ============================================================================
// Standard X/Open Curses Attributes
// ============================================================================

/// Normal display (no attributes).
pub const A_NORMAL: AttrT = 0;

/// Mask for extracting the character portion of a chtype.
pub const A_CHARTEXT: AttrT = (1 << NCURSES_ATTR_SHIFT) - 1;

/// Mask for extracting the color pair portion of a chtype.
pub const A_COLOR: AttrT = ((1 << 8) - 1) << NCURSES_ATTR_SHIFT;

/// Mask for extracting all attributes (everything except the character).
pub const A_ATTRIBUTES: AttrT = !A_CHARTEXT;

/// Standout mode (typically reverse video).
pub const A_STANDOUT: AttrT = ncurses_bits(1, 8);

/// Underline mode.
pub const A_UNDERLINE: AttrT = ncurses_bits(1, 9);

/// Reverse video mode.
pub const A_REVERSE: AttrT = ncurses_bits(1, 10);

/// Blinking text.
pub const A_BLINK: AttrT = ncurses_bits(1, 11);

/// Half-bright or dim text.
pub const A_DIM: AttrT = ncurses_bits(1, 12);

/// Bold or extra-bright text.
pub const A_BOLD: AttrT = ncurses_bits(1, 13);

/// Alternate character set (line drawing characters).
pub const A_ALTCHARSET: AttrT = ncurses_bits(1, 14);

/// Invisible text.
pub const A_INVIS: AttrT = ncurses_bits(1, 15);

/// Protected text (cannot be modified).
pub const A_PROTECT: AttrT = ncurses_bits(1, 16);

/// Italic text (ncurses extension, widely supported).
pub const A_ITALIC: AttrT = ncurses_bits(1, 23);

// ============================================================================
// Color pair helpers
// ============================================================================

/// Encode a color pair number into attribute bits (`COLOR_PAIR`).
///
/// The result can be OR'd with other attributes and characters.
///
/// ```rust
/// use ncurses::attr::{color_pair, pair_number, A_BOLD};
///
/// let attr = color_pair(3) | A_BOLD;
/// assert_eq!(pair_number(attr), 3);
/// ```
#[inline]
pub const fn color_pair(n: PairT) -> AttrT {
    ncurses_bits(n as u32, 0) & A_COLOR
}

/// Extract the color pair number from an attribute value (`PAIR_NUMBER`).
#[inline]
pub const fn pair_number(attr: AttrT) -> PairT {
    ((attr & A_COLOR) >> NCURSES_ATTR_SHIFT) as PairT
}

// ============================================================================
// Attribute type for idiomatic Rust usage
// ============================================================================

bitflags::bitflags! {
    /// Video attributes as a bitflags type.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Attribute: AttrT {
        /// Standout mode.
        const STANDOUT = A_STANDOUT;
        /// Underline mode.
        const UNDERLINE = A_UNDERLINE;
        /// Reverse video.
        const REVERSE = A_REVERSE;
        /// Blinking text.
        const BLINK = A_BLINK;
        /// Dim or half-bright.
        const DIM = A_DIM;
        /// Bold or extra-bright.
        const BOLD = A_BOLD;
        /// Alternate character set.
        const ALTCHARSET = A_ALTCHARSET;
        /// Invisible text.
        const INVIS = A_INVIS;
        /// Protected text.
        const PROTECT = A_PROTECT;
        /// Italic text.
        const ITALIC = A_ITALIC;
    }
}

impl Attribute {
    /// Combine with a color pair into a raw attribute value.
    pub fn with_color_pair(self, pair: PairT) -> AttrT {
        self.bits() | color_pair(pair)
    }
}

impl From<AttrT> for Attribute {
    fn from(attr: AttrT) -> Self {
        Attribute::from_bits_truncate(attr & !A_COLOR & !A_CHARTEXT)
    }
}

impl From<Attribute> for AttrT {
    fn from(attr: Attribute) -> Self {
        attr.bits()
    }
}

// ============================================================================
// Attribute names
// ============================================================================

/// Descriptive names for the attribute masks, in bit order.
///
/// `A_NORMAL` and `A_CHARTEXT` are listed for exact lookups only; they never
/// appear in a decomposition.
pub static ATTR_NAMES: &[(AttrT, &str)] = &[
    (A_NORMAL, "normal"),
    (A_CHARTEXT, "chartext"),
    (A_STANDOUT, "standout"),
    (A_UNDERLINE, "underline"),
    (A_REVERSE, "reverse"),
    (A_BLINK, "blink"),
    (A_DIM, "dim"),
    (A_BOLD, "bold"),
    (A_ALTCHARSET, "altcharset"),
    (A_INVIS, "invis"),
    (A_PROTECT, "protect"),
    (A_ITALIC, "italic"),
];

/// Name of a single attribute mask, or `None` if `attr` is not exactly
/// one of the known masks.
pub fn attr_name(attr: AttrT) -> Option<&'static str> {
    ATTR_NAMES
        .iter()
        .find(|(mask, _)| *mask == attr)
        .map(|(_, name)| *name)
}

/// Names of every attribute bit set in `attr`, in bit order.
///
/// Character and color bits are ignored. An attribute-free value yields
/// `["normal"]`.
pub fn attr_names(attr: AttrT) -> Vec<&'static str> {
    let bits = attr & A_ATTRIBUTES & !A_COLOR;
    let names: Vec<&'static str> = ATTR_NAMES
        .iter()
        .filter(|(mask, _)| *mask & A_ATTRIBUTES & !A_COLOR != 0 && bits & *mask == *mask)
        .map(|(_, name)| *name)
        .collect();

    if names.is_empty() {
        vec!["normal"]
    } else {
        names
    }
}

/// Human readable description of an attribute value, used in error
/// messages: `"bold|underline"`, `"color pair 2"`, `"bold|color pair 2"`.
pub fn describe(attr: AttrT) -> String {
    let pair = pair_number(attr);
    let names = attr_names(attr);
    match (pair, names.as_slice()) {
        (0, _) => names.join("|"),
        (_, ["normal"]) => format!("color pair {}", pair),
        _ => format!("{}|color pair {}", names.join("|"), pair),
    }
}

// ============================================================================
// Character extraction helpers
// ============================================================================

/// Extract the character portion from a chtype.
#[inline]
pub const fn chtype_char(ch: ChType) -> u8 {
    (ch & A_CHARTEXT) as u8
}

/// Extract the attribute portion from a chtype (excluding character).
#[inline]
pub const fn chtype_attr(ch: ChType) -> AttrT {
    ch & A_ATTRIBUTES
}

/// Create a chtype from a character and attributes.
#[inline]
pub const fn make_chtype(ch: u8, attr: AttrT) -> ChType {
    (ch as ChType) | attr
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_bits() {
        assert_eq!(A_NORMAL, 0);
        assert_eq!(A_CHARTEXT, 0xFF);
        assert_eq!(A_COLOR, 0xFF00);
        assert_eq!(A_STANDOUT, 0x1_0000);
        assert_eq!(A_BOLD, 0x20_0000);
        assert_eq!(A_ALTCHARSET, 0x40_0000);
        assert_eq!(A_ITALIC, 0x8000_0000);
    }

    #[test]
    fn test_color_pair() {
        let pair1 = color_pair(1);
        assert_eq!(pair1, 0x100);
        assert_eq!(pair_number(pair1), 1);

        assert_eq!(pair_number(color_pair(255)), 255);
        assert_eq!(pair_number(A_BOLD | color_pair(7) | b'x' as ChType), 7);
    }

    #[test]
    fn test_chtype_helpers() {
        let ch = make_chtype(b'A', A_BOLD | color_pair(1));
        assert_eq!(chtype_char(ch), b'A');
        assert_eq!(chtype_attr(ch), A_BOLD | color_pair(1));
    }

    #[test]
    fn test_attribute_bitflags() {
        let attr = Attribute::BOLD | Attribute::UNDERLINE;
        assert!(attr.contains(Attribute::BOLD));
        assert!(!attr.contains(Attribute::REVERSE));
        assert_eq!(Attribute::from(A_DIM | color_pair(4) | 0x41), Attribute::DIM);
        assert_eq!(Attribute::BOLD.with_color_pair(2), A_BOLD | 0x200);
    }

    #[test]
    fn test_attr_name_lookup() {
        assert_eq!(attr_name(A_BOLD), Some("bold"));
        assert_eq!(attr_name(A_NORMAL), Some("normal"));
        assert_eq!(attr_name(A_CHARTEXT), Some("chartext"));
        assert_eq!(attr_name(A_BOLD | A_DIM), None);
    }

    #[test]
    fn test_attr_names_decomposition() {
        assert_eq!(attr_names(A_BOLD | A_UNDERLINE), vec!["underline", "bold"]);
        assert_eq!(attr_names(A_NORMAL), vec!["normal"]);
        assert_eq!(attr_names(color_pair(3) | b'q' as ChType), vec!["normal"]);
    }

    #[test]
    fn test_describe() {
        assert_eq!(describe(A_REVERSE), "reverse");
        assert_eq!(describe(color_pair(2)), "color pair 2");
        assert_eq!(describe(A_BOLD | color_pair(2)), "bold|color pair 2");
    }
}
