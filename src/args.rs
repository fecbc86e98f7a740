//! Positional argument resolution for the variadic window calls.
//!
//! The variadic entry points (`Window::print_args`, `addch_args`,
//! `getch_at`, `hline_args`, `vline_args` and the [`wprint!`](crate::wprint)
//! macro) take a heterogeneous list of [`Value`]s. The leading elements may
//! be a row, or a row and a column; whatever follows is the payload. The
//! resolver decides which shape the list has and produces a [`Placement`]
//! telling the window layer whether to call the plain primitive or its
//! move-then-act variant.
//!
//! Resolution is a pure function of the list: nothing is retained between
//! calls and nothing is sent to the terminal.
//!
//! ```rust
//! use ncurses::args;
//! use ncurses::args::{resolve_print, Placement};
//!
//! let call = resolve_print(&args![2, 4, "fmt %s", "world"]).unwrap();
//! assert_eq!(call.placement, Placement::At(2, 4));
//! assert_eq!(call.text, "fmt world");
//! ```

use std::fmt;

use crate::error::{Error, Result};
use crate::format;
use crate::types::Coord;

/// One element of a variadic argument list.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Any integer: coordinates, counts, characters given as codes.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// A string, usually a format template or a `%s` operand.
    Str(String),
    /// A single character.
    Char(char),
    /// A boolean, rendered by `%t`.
    Bool(bool),
}

impl Value {
    /// Short name of the value's kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Char(_) => "char",
            Value::Bool(_) => "bool",
        }
    }

    /// The integer, if this is an [`Value::Int`].
    pub fn as_int(&self) -> Option<i64> {
        match *self {
            Value::Int(n) => Some(n),
            _ => None,
        }
    }

    /// The string, if this is a [`Value::Str`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The value as a window coordinate: an integer that fits `Coord`.
    pub fn as_coord(&self) -> Option<Coord> {
        self.as_int().and_then(|n| Coord::try_from(n).ok())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(v) => write!(f, "{}", v),
            Value::Str(s) => write!(f, "{:?}", s),
            Value::Char(c) => write!(f, "{:?}", c),
            Value::Bool(b) => write!(f, "{}", b),
        }
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Int(n as i64)
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32, isize);

// values past i64::MAX saturate, so they never pass as a coordinate
impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Int(i64::try_from(n).unwrap_or(i64::MAX))
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Int(i64::try_from(n).unwrap_or(i64::MAX))
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::Str(s.clone())
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Char(c)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

/// Build a `Vec<Value>` from mixed literals.
///
/// ```rust
/// use ncurses::args;
/// use ncurses::args::Value;
///
/// let list = args![3, "%d apples", 7];
/// assert_eq!(list[1], Value::Str("%d apples".into()));
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::args::Value>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::args::Value::from($value)),+]
    };
}

/// Print to a window with optional leading coordinates and a format
/// template, e.g. `wprint!(win, 1, 2, "%s: %d", name, score)`.
///
/// Expands to [`Window::print_args`](crate::Window::print_args).
#[macro_export]
macro_rules! wprint {
    ($win:expr, $($arg:expr),+ $(,)?) => {
        $win.print_args(&$crate::args![$($arg),+])
    };
}

/// Where a resolved call acts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Placement {
    /// At the current cursor position.
    #[default]
    Here,
    /// Move to column 0 of the given row first.
    Row(Coord),
    /// Move to `(y, x)` first.
    At(Coord, Coord),
}

impl Placement {
    /// Build a placement from zero, one or two coordinates.
    pub fn from_coords(coords: &[Coord]) -> Result<Self> {
        match *coords {
            [] => Ok(Placement::Here),
            [y] => Ok(Placement::Row(y)),
            [y, x] => Ok(Placement::At(y, x)),
            _ => Err(Error::invalid(format!(
                "expected at most 2 coordinates, got {}",
                coords.len()
            ))),
        }
    }

    /// Whether a row was given.
    pub fn has_y(self) -> bool {
        !matches!(self, Placement::Here)
    }

    /// Whether a column was given. Implies [`has_y`](Self::has_y).
    pub fn has_x(self) -> bool {
        matches!(self, Placement::At(..))
    }

    /// The row, 0 when none was given.
    pub fn y(self) -> Coord {
        match self {
            Placement::Here => 0,
            Placement::Row(y) | Placement::At(y, _) => y,
        }
    }

    /// The column, 0 when none was given.
    pub fn x(self) -> Coord {
        match self {
            Placement::At(_, x) => x,
            _ => 0,
        }
    }

    /// Run exactly one of the two closures on `target`: `plain` when no
    /// coordinates were given, `moved(y, x)` otherwise.
    pub fn dispatch<W, T>(
        self,
        target: W,
        plain: impl FnOnce(W) -> T,
        moved: impl FnOnce(W, Coord, Coord) -> T,
    ) -> T {
        match self {
            Placement::Here => plain(target),
            placement => moved(target, placement.y(), placement.x()),
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Placement::Here => f.write_str("here"),
            Placement::Row(y) => write!(f, "({}, 0)", y),
            Placement::At(y, x) => write!(f, "({}, {})", y, x),
        }
    }
}

/// An argument list split into placement and payload.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedCall {
    /// Where to act.
    pub placement: Placement,
    /// The payload, never empty.
    pub rest: Vec<Value>,
}

/// A print call with its template already rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrintCall {
    /// Where to print.
    pub placement: Placement,
    /// The rendered line.
    pub text: String,
}

fn leading_coords(leading: &[Value]) -> Result<Placement> {
    if leading.len() > 2 {
        return Err(Error::invalid(format!(
            "expected at most 2 leading coordinates, got {}",
            leading.len()
        )));
    }
    let mut coords = [0; 2];
    for (slot, value) in coords.iter_mut().zip(leading) {
        *slot = value.as_coord().ok_or_else(|| {
            Error::invalid(format!("coordinate must be an integer, got {}", value))
        })?;
    }
    Placement::from_coords(&coords[..leading.len()])
}

/// Split `args` into optional leading coordinates and a payload made of the
/// last `payload_len` elements.
pub fn resolve(args: &[Value], payload_len: usize) -> Result<ResolvedCall> {
    if payload_len == 0 {
        return Err(Error::invalid("payload must have at least one element"));
    }
    if args.len() < payload_len {
        return Err(Error::invalid(format!(
            "expected at least {} argument(s), got {}",
            payload_len,
            args.len()
        )));
    }

    let (leading, rest) = args.split_at(args.len() - payload_len);
    let placement = leading_coords(leading).map_err(|err| {
        trace_call!("resolve({:?}) rejected: {}", args, err);
        err
    })?;

    Ok(ResolvedCall {
        placement,
        rest: rest.to_vec(),
    })
}

/// Resolve a print-style list: up to two leading integers, a format
/// template, then the values substituted into it.
pub fn resolve_print(args: &[Value]) -> Result<PrintCall> {
    let coords = args.iter().take_while(|v| matches!(v, Value::Int(_))).count();
    let outcome = leading_coords(&args[..coords]).and_then(|placement| {
        let template = match args.get(coords) {
            Some(Value::Str(template)) => template,
            Some(other) => {
                return Err(Error::invalid(format!(
                    "expected a format template, got {}",
                    other.kind()
                )))
            }
            None => return Err(Error::invalid("missing format template")),
        };
        let text = format::render(template, &args[coords + 1..])?;
        Ok(PrintCall { placement, text })
    });

    if let Err(err) = &outcome {
        trace_call!("resolve_print({:?}) rejected: {}", args, err);
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_only() {
        let call = resolve(&args!['x'], 1).unwrap();
        assert_eq!(call.placement, Placement::Here);
        assert!(!call.placement.has_y());
        assert!(!call.placement.has_x());
        assert_eq!(call.rest, vec![Value::Char('x')]);
    }

    #[test]
    fn test_row_only_defaults_column() {
        let call = resolve(&args![4, 'x'], 1).unwrap();
        assert_eq!(call.placement, Placement::Row(4));
        assert!(call.placement.has_y());
        assert!(!call.placement.has_x());
        assert_eq!(call.placement.y(), 4);
        assert_eq!(call.placement.x(), 0);
    }

    #[test]
    fn test_row_and_column() {
        let call = resolve(&args![4, 9, 'x'], 1).unwrap();
        assert_eq!(call.placement, Placement::At(4, 9));
        assert!(call.placement.has_y() && call.placement.has_x());
        assert_eq!(call.rest, vec![Value::Char('x')]);
    }

    #[test]
    fn test_multi_element_payload() {
        let call = resolve(&args![1, 2, 'q', 10], 2).unwrap();
        assert_eq!(call.placement, Placement::At(1, 2));
        assert_eq!(call.rest, args!['q', 10]);

        let call = resolve(&args!['q', 10], 2).unwrap();
        assert_eq!(call.placement, Placement::Here);
    }

    #[test]
    fn test_too_many_leading() {
        assert!(matches!(
            resolve(&args![1, 2, 3, 'x'], 1),
            Err(Error::InvalidArguments(_))
        ));
        assert!(resolve(&args![1, 2, 3, 4, 'x'], 1).is_err());
    }

    #[test]
    fn test_non_integer_coordinates() {
        assert!(resolve(&args!["y", 'x'], 1).is_err());
        assert!(resolve(&args![1.5, 2, 'x'], 1).is_err());
        assert!(resolve(&args![i64::MAX, 'x'], 1).is_err());
    }

    #[test]
    fn test_bad_payload_length() {
        assert!(resolve(&args!['x'], 0).is_err());
        assert!(resolve(&args![], 1).is_err());
        assert!(resolve(&args!['x'], 2).is_err());
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let list = args![3, 7, "payload"];
        assert_eq!(resolve(&list, 1).unwrap(), resolve(&list, 1).unwrap());
        assert_eq!(resolve_print(&list).unwrap(), resolve_print(&list).unwrap());
    }

    #[test]
    fn test_print_plain() {
        let call = resolve_print(&args!["hello!"]).unwrap();
        assert!(!call.placement.has_y());
        assert_eq!(call.text, "hello!");
    }

    #[test]
    fn test_print_at() {
        let call = resolve_print(&args![2, 5, "fmt %s", "world"]).unwrap();
        assert_eq!(call.placement, Placement::At(2, 5));
        assert_eq!(call.text, "fmt world");

        let call = resolve_print(&args![6, "%d%%", 50]).unwrap();
        assert_eq!(call.placement, Placement::Row(6));
        assert_eq!(call.text, "50%");
    }

    #[test]
    fn test_print_integer_operands_after_template() {
        let call = resolve_print(&args!["%d,%d", 1, 2]).unwrap();
        assert_eq!(call.placement, Placement::Here);
        assert_eq!(call.text, "1,2");
    }

    #[test]
    fn test_print_rejections() {
        assert!(resolve_print(&args![]).is_err());
        assert!(resolve_print(&args![1, 2]).is_err());
        assert!(resolve_print(&args![1, 2, 3, "text"]).is_err());
        assert!(resolve_print(&args![1, 'c', "text"]).is_err());
        assert!(resolve_print(&args!["%s"]).is_err());
        assert!(resolve_print(&args!["no verbs", 1]).is_err());
        assert!(resolve_print(&args!["%d", "text"]).is_err());
        assert!(resolve_print(&args![1, 2, "%99999999999999999999d", 1]).is_err());
    }

    #[test]
    fn test_dispatch_runs_one_closure() {
        let mut calls: Vec<String> = Vec::new();
        Placement::Here.dispatch(
            &mut calls,
            |log| log.push("waddstr".into()),
            |log, y, x| log.push(format!("mvwaddstr {} {}", y, x)),
        );
        Placement::Row(3).dispatch(
            &mut calls,
            |log| log.push("waddstr".into()),
            |log, y, x| log.push(format!("mvwaddstr {} {}", y, x)),
        );
        Placement::At(3, 8).dispatch(
            &mut calls,
            |log| log.push("waddstr".into()),
            |log, y, x| log.push(format!("mvwaddstr {} {}", y, x)),
        );
        assert_eq!(calls, ["waddstr", "mvwaddstr 3 0", "mvwaddstr 3 8"]);
    }

    #[test]
    fn test_from_coords() {
        assert_eq!(Placement::from_coords(&[]).unwrap(), Placement::Here);
        assert_eq!(Placement::from_coords(&[1]).unwrap(), Placement::Row(1));
        assert_eq!(Placement::from_coords(&[1, 2]).unwrap(), Placement::At(1, 2));
        assert!(Placement::from_coords(&[1, 2, 3]).is_err());
    }

    #[test]
    fn test_value_conversions() {
        assert_eq!(Value::from(3u8), Value::Int(3));
        assert_eq!(Value::from(7usize), Value::Int(7));
        assert_eq!(Value::from(String::from("s")), Value::Str("s".into()));
        assert_eq!(Value::from(true).kind(), "bool");
        assert_eq!(Value::Int(5).as_coord(), Some(5));
        assert_eq!(Value::Int(1 << 40).as_coord(), None);
    }

    #[test]
    fn test_large_unsigned_values_saturate() {
        assert_eq!(Value::from(usize::MAX), Value::Int(i64::MAX));
        assert_eq!(Value::from(u64::MAX), Value::Int(i64::MAX));
        assert_eq!(Value::from(usize::MAX).as_coord(), None);
        assert!(resolve(&args![usize::MAX, 'x'], 1).is_err());
        assert_eq!(Value::from(-1isize).as_coord(), Some(-1));
    }
}
