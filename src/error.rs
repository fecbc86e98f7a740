//! Error types for the ncurses bindings.

use libc::c_int;
use std::ptr::NonNull;

/// Result type alias for ncurses operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in ncurses operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The argument list of a call matches none of the accepted shapes.
    ///
    /// Raised before anything reaches the driver.
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    /// The wrapped C primitive reported `ERR` (or returned NULL).
    #[error("{call} failed")]
    DriverFailure {
        /// Name of the C entry point that failed.
        call: &'static str,
    },

    /// Turning a video attribute on or off failed.
    #[error("failed to {action} attribute: {name}")]
    Attribute {
        /// `"set"` or `"unset"`.
        action: &'static str,
        /// Human readable attribute name.
        name: String,
    },

    /// The terminal has already been initialized in this process.
    #[error("terminal already initialized")]
    AlreadyInitialized,

    /// The terminal cannot display colors.
    #[error("terminal does not support colors")]
    ColorNotAvailable,

    /// An invalid color pair was specified.
    #[error("invalid color pair: {0}")]
    InvalidColorPair(i16),

    /// A string handed to the driver contains an interior NUL byte.
    #[error("string contains an interior nul byte")]
    NulByte,

    /// Mouse support is not available.
    #[cfg(feature = "mouse")]
    #[error("mouse support not available")]
    MouseNotAvailable,

    /// The menu library rejected a request.
    #[cfg(feature = "menu")]
    #[error("menu error: {0}")]
    Menu(#[from] MenuError),
}

impl Error {
    /// Shorthand for an [`Error::InvalidArguments`] with the given message.
    pub fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidArguments(msg.into())
    }
}

impl From<std::ffi::NulError> for Error {
    fn from(_: std::ffi::NulError) -> Self {
        Error::NulByte
    }
}

/// Error codes returned by the menu library (`eti.h`).
#[cfg(feature = "menu")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MenuError {
    /// `E_SYSTEM_ERROR`: system error, check errno.
    #[error("system error")]
    SystemError,
    /// `E_BAD_ARGUMENT`: an argument was incorrect or out of range.
    #[error("bad argument")]
    BadArgument,
    /// `E_POSTED`: the menu is already posted.
    #[error("menu is posted")]
    Posted,
    /// `E_CONNECTED`: the item is already connected to a menu.
    #[error("item is connected to a menu")]
    Connected,
    /// `E_BAD_STATE`: called from an init or term hook.
    #[error("bad state")]
    BadState,
    /// `E_NO_ROOM`: the menu does not fit its window.
    #[error("menu does not fit its window")]
    NoRoom,
    /// `E_NOT_POSTED`: the menu has not been posted.
    #[error("menu is not posted")]
    NotPosted,
    /// `E_UNKNOWN_COMMAND`: the driver got an unknown request code.
    #[error("unknown command")]
    UnknownCommand,
    /// `E_NO_MATCH`: character failed to match.
    #[error("no match")]
    NoMatch,
    /// `E_NOT_SELECTABLE`: the item cannot be selected.
    #[error("item is not selectable")]
    NotSelectable,
    /// `E_NOT_CONNECTED`: no items are connected to the menu.
    #[error("no items connected")]
    NotConnected,
    /// `E_REQUEST_DENIED`: the driver could not honour the request.
    #[error("request denied")]
    RequestDenied,
    /// `E_INVALID_FIELD`: field contents are invalid.
    #[error("invalid field")]
    InvalidField,
    /// `E_CURRENT`: the item is the current item.
    #[error("item is current")]
    Current,
    /// A code outside the documented range.
    #[error("unknown menu error code {0}")]
    Unknown(i32),
}

#[cfg(feature = "menu")]
impl MenuError {
    /// Map a menu library return code. `E_OK` (0) maps to `None`.
    pub fn from_code(code: c_int) -> Option<Self> {
        let err = match code {
            0 => return None,
            -1 => MenuError::SystemError,
            -2 => MenuError::BadArgument,
            -3 => MenuError::Posted,
            -4 => MenuError::Connected,
            -5 => MenuError::BadState,
            -6 => MenuError::NoRoom,
            -7 => MenuError::NotPosted,
            -8 => MenuError::UnknownCommand,
            -9 => MenuError::NoMatch,
            -10 => MenuError::NotSelectable,
            -11 => MenuError::NotConnected,
            -12 => MenuError::RequestDenied,
            -13 => MenuError::InvalidField,
            -14 => MenuError::Current,
            other => MenuError::Unknown(other),
        };
        Some(err)
    }

    /// Turn a menu library return code into a `Result`.
    pub fn check(code: c_int) -> Result<()> {
        match MenuError::from_code(code) {
            None => Ok(()),
            Some(err) => Err(Error::Menu(err)),
        }
    }
}

/// Trait for converting raw driver return values to `Result`.
pub trait IntoResult {
    /// The success type.
    type Output;

    /// Convert to a Result, naming the C call that produced the value.
    fn into_result(self, call: &'static str) -> Result<Self::Output>;
}

impl IntoResult for c_int {
    type Output = ();

    fn into_result(self, call: &'static str) -> Result<Self::Output> {
        if self == crate::types::ERR {
            Err(Error::DriverFailure { call })
        } else {
            Ok(())
        }
    }
}

impl<T> IntoResult for *mut T {
    type Output = NonNull<T>;

    fn into_result(self, call: &'static str) -> Result<Self::Output> {
        NonNull::new(self).ok_or(Error::DriverFailure { call })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(0i32.into_result("wrefresh"), Ok(()));
        assert_eq!(5i32.into_result("wgetch"), Ok(()));
        assert_eq!(
            (-1i32).into_result("wrefresh"),
            Err(Error::DriverFailure { call: "wrefresh" })
        );
    }

    #[test]
    fn test_null_pointer() {
        let null: *mut u8 = std::ptr::null_mut();
        assert_eq!(
            null.into_result("newwin").unwrap_err(),
            Error::DriverFailure { call: "newwin" }
        );

        let mut value = 7u8;
        let ptr: *mut u8 = &mut value;
        assert_eq!(ptr.into_result("newwin").unwrap().as_ptr(), ptr);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Error::invalid("too many coordinates").to_string(),
            "invalid arguments: too many coordinates"
        );
        assert_eq!(
            Error::DriverFailure { call: "doupdate" }.to_string(),
            "doupdate failed"
        );
        assert_eq!(
            Error::Attribute { action: "set", name: "bold".into() }.to_string(),
            "failed to set attribute: bold"
        );
    }

    #[test]
    fn test_nul_error_conversion() {
        let err = std::ffi::CString::new("a\0b").unwrap_err();
        assert_eq!(Error::from(err), Error::NulByte);
    }

    #[cfg(feature = "menu")]
    #[test]
    fn test_menu_codes() {
        assert_eq!(MenuError::from_code(0), None);
        assert_eq!(MenuError::from_code(-3), Some(MenuError::Posted));
        assert_eq!(MenuError::from_code(-12), Some(MenuError::RequestDenied));
        assert_eq!(MenuError::from_code(-99), Some(MenuError::Unknown(-99)));
        assert_eq!(
            MenuError::check(-7),
            Err(Error::Menu(MenuError::NotPosted))
        );
        assert!(MenuError::check(0).is_ok());
    }
}
