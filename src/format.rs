//! Printf-style rendering of format templates.
//!
//! A directive is `%[flags][width][.precision]verb`:
//!
//! | verb | operand | output |
//! |------|---------|--------|
//! | `%v` | any | natural form |
//! | `%s` | string, char | as is |
//! | `%q` | string, char, int | quoted and escaped |
//! | `%d` `%i` | int | decimal |
//! | `%c` | char, int | the character |
//! | `%x` `%X` | int, string | hexadecimal |
//! | `%o` `%b` | int | octal, binary |
//! | `%f` `%F` | float | fixed point |
//! | `%e` `%E` | float | exponent form, `1.5e+03` |
//! | `%g` `%G` | float | shortest of `%e` and `%f` |
//! | `%t` | bool | `true` / `false` |
//! | `%%` | none | a literal `%` |
//!
//! Flags are `-` (left align), `+` (always sign), space (space for a
//! positive sign), `0` (zero pad numbers) and `#` (alternate form). Width
//! is measured in terminal columns.

use unicode_width::UnicodeWidthStr;

use crate::args::Value;
use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, Default)]
struct Spec {
    minus: bool,
    plus: bool,
    space: bool,
    zero: bool,
    sharp: bool,
    width: Option<usize>,
    precision: Option<usize>,
}

/// Render `template`, substituting `values` in order.
///
/// Every value must be consumed by exactly one directive.
///
/// ```rust
/// use ncurses::args;
/// use ncurses::format::render;
///
/// assert_eq!(render("%-5s|%03d", &args!["ab", 7]).unwrap(), "ab   |007");
/// ```
pub fn render(template: &str, values: &[Value]) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut values = values.iter();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        let mut spec = Spec::default();
        while let Some(&flag) = chars.peek() {
            match flag {
                '-' => spec.minus = true,
                '+' => spec.plus = true,
                ' ' => spec.space = true,
                '0' => spec.zero = true,
                '#' => spec.sharp = true,
                _ => break,
            }
            chars.next();
        }
        spec.width = bounded(digits(&mut chars), "width")?;
        if chars.peek() == Some(&'.') {
            chars.next();
            spec.precision = bounded(Some(digits(&mut chars).unwrap_or(0)), "precision")?;
        }

        let verb = chars
            .next()
            .ok_or_else(|| Error::invalid("dangling % at end of template"))?;
        if verb == '%' {
            out.push('%');
            continue;
        }
        let value = values
            .next()
            .ok_or_else(|| Error::invalid(format!("missing value for %{}", verb)))?;
        out.push_str(&directive(verb, spec, value)?);
    }

    let surplus = values.count();
    if surplus > 0 {
        return Err(Error::invalid(format!(
            "{} value(s) left over after rendering template",
            surplus
        )));
    }
    Ok(out)
}

/// Largest width or precision a directive may ask for.
const MAX_FIELD: usize = 1_000_000;

fn bounded(n: Option<usize>, what: &str) -> Result<Option<usize>> {
    match n {
        Some(n) if n > MAX_FIELD => Err(Error::invalid(format!(
            "{} {} exceeds {}",
            what, n, MAX_FIELD
        ))),
        n => Ok(n),
    }
}

fn digits(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Option<usize> {
    let mut n: Option<usize> = None;
    while let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
        n = Some(n.unwrap_or(0).saturating_mul(10).saturating_add(d as usize));
        chars.next();
    }
    n
}

fn mismatch(verb: char, value: &Value) -> Error {
    Error::invalid(format!("%{} cannot format {} {}", verb, value.kind(), value))
}

fn directive(verb: char, spec: Spec, value: &Value) -> Result<String> {
    let formatted = match (verb, value) {
        ('v' | 'd' | 'i', Value::Int(n)) => integer(*n, 10, false, spec),
        ('v', Value::Float(v)) => float(*v, 'g', spec),
        ('v' | 's', Value::Str(s)) => text(s, spec),
        ('v' | 's' | 'c', Value::Char(c)) => text(&c.to_string(), spec),
        ('v' | 't', Value::Bool(b)) => text(if *b { "true" } else { "false" }, spec),
        ('c', Value::Int(n)) => text(&code_point(*n).to_string(), spec),
        ('q', Value::Str(s)) => text(&format!("{:?}", s), spec),
        ('q', Value::Char(c)) => text(&quote_char(*c), spec),
        ('q', Value::Int(n)) => text(&quote_char(code_point(*n)), spec),
        ('x', Value::Int(n)) => integer(*n, 16, false, spec),
        ('X', Value::Int(n)) => integer(*n, 16, true, spec),
        ('o', Value::Int(n)) => integer(*n, 8, false, spec),
        ('b', Value::Int(n)) => integer(*n, 2, false, spec),
        ('x', Value::Str(s)) => hex_bytes(s, false, spec),
        ('X', Value::Str(s)) => hex_bytes(s, true, spec),
        ('f' | 'F' | 'e' | 'E' | 'g' | 'G', Value::Float(v)) => float(*v, verb, spec),
        ('s' | 'q' | 'd' | 'i' | 'c' | 'x' | 'X' | 'o' | 'b' | 'f' | 'F' | 'e' | 'E' | 'g' | 'G'
        | 't', _) => return Err(mismatch(verb, value)),
        _ => return Err(Error::invalid(format!("unknown verb %{}", verb))),
    };
    Ok(formatted)
}

fn code_point(n: i64) -> char {
    u32::try_from(n)
        .ok()
        .and_then(char::from_u32)
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

fn quote_char(c: char) -> String {
    format!("'{}'", c.escape_debug())
}

/// Pad to the requested width with spaces on the left (or right with `-`).
fn pad(body: String, spec: Spec) -> String {
    let width = match spec.width {
        Some(w) => w,
        None => return body,
    };
    let used = body.width();
    if used >= width {
        return body;
    }
    let fill = " ".repeat(width - used);
    if spec.minus {
        body + &fill
    } else {
        fill + &body
    }
}

fn text(s: &str, spec: Spec) -> String {
    let body = match spec.precision {
        Some(p) => s.chars().take(p).collect(),
        None => s.to_owned(),
    };
    pad(body, spec)
}

/// Pad a signed number; zero padding goes between the sign/prefix and the
/// digits.
fn number(sign: &str, prefix: &str, digits: String, spec: Spec, zero_ok: bool) -> String {
    if spec.zero && !spec.minus && zero_ok {
        if let Some(width) = spec.width {
            let used = sign.len() + prefix.len() + digits.len();
            if used < width {
                let zeros = "0".repeat(width - used);
                return format!("{}{}{}{}", sign, prefix, zeros, digits);
            }
        }
    }
    pad(format!("{}{}{}", sign, prefix, digits), spec)
}

fn sign_of(negative: bool, spec: Spec) -> &'static str {
    if negative {
        "-"
    } else if spec.plus {
        "+"
    } else if spec.space {
        " "
    } else {
        ""
    }
}

fn integer(n: i64, radix: u32, upper: bool, spec: Spec) -> String {
    let magnitude = n.unsigned_abs();
    let mut digits = match (radix, upper) {
        (16, true) => format!("{:X}", magnitude),
        (16, false) => format!("{:x}", magnitude),
        (8, _) => format!("{:o}", magnitude),
        (2, _) => format!("{:b}", magnitude),
        _ => magnitude.to_string(),
    };
    if let Some(p) = spec.precision {
        if p == 0 && magnitude == 0 {
            digits.clear();
        } else if digits.len() < p {
            digits = "0".repeat(p - digits.len()) + &digits;
        }
    }

    let prefix = match (spec.sharp, radix, upper) {
        (true, 16, false) => "0x",
        (true, 16, true) => "0X",
        (true, 8, _) if !digits.starts_with('0') => "0",
        (true, 2, _) => "0b",
        _ => "",
    };
    // a precision overrides the 0 flag for integers
    number(sign_of(n < 0, spec), prefix, digits, spec, spec.precision.is_none())
}

fn hex_bytes(s: &str, upper: bool, spec: Spec) -> String {
    let bytes = match spec.precision {
        Some(p) => &s.as_bytes()[..p.min(s.len())],
        None => s.as_bytes(),
    };
    let body: String = bytes
        .iter()
        .map(|b| if upper { format!("{:02X}", b) } else { format!("{:02x}", b) })
        .collect();
    pad(body, spec)
}

/// `1.5e3` as printed by Rust becomes `1.5e+03`.
fn exponent_form(rust: &str, upper: bool) -> String {
    let (mantissa, exp) = rust.split_once('e').unwrap_or((rust, "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let e = if upper { 'E' } else { 'e' };
    let sign = if exp < 0 { '-' } else { '+' };
    format!("{}{}{}{:02}", mantissa, e, sign, exp.unsigned_abs())
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Decimal exponent of a finite, non-zero value as Rust renders it.
fn decimal_exponent(rust_exp: &str) -> i32 {
    rust_exp
        .split_once('e')
        .and_then(|(_, e)| e.parse().ok())
        .unwrap_or(0)
}

fn general(v: f64, precision: Option<usize>, upper: bool, sharp: bool) -> String {
    match precision {
        None => {
            // shortest round-trip digits; exponent form outside 1e-4..1e6
            let shortest = format!("{:e}", v);
            let exp = decimal_exponent(&shortest);
            if v != 0.0 && !(-4..6).contains(&exp) {
                exponent_form(&shortest, upper)
            } else {
                format!("{}", v)
            }
        }
        Some(p) => {
            let p = p.max(1);
            let rounded = format!("{:.*e}", p - 1, v);
            let exp = decimal_exponent(&rounded);
            if exp < -4 || exp >= p as i32 {
                let mantissa = rounded.split_once('e').map_or(rounded.as_str(), |(m, _)| m);
                let mantissa = if sharp { mantissa } else { trim_fraction(mantissa) };
                exponent_form(&format!("{}e{}", mantissa, exp), upper)
            } else {
                let decimals = (p as i32 - 1 - exp).max(0) as usize;
                let fixed = format!("{:.*}", decimals, v);
                if sharp {
                    fixed
                } else {
                    trim_fraction(&fixed).to_owned()
                }
            }
        }
    }
}

fn float(v: f64, verb: char, spec: Spec) -> String {
    let upper = verb.is_ascii_uppercase();
    if v.is_nan() {
        return pad("NaN".to_owned(), spec);
    }
    if v.is_infinite() {
        let sign = if v < 0.0 { "-" } else if spec.space && !spec.plus { " " } else { "+" };
        return pad(format!("{}Inf", sign), spec);
    }

    let magnitude = v.abs();
    let digits = match verb {
        'f' | 'F' => format!("{:.*}", spec.precision.unwrap_or(6), magnitude),
        'e' | 'E' => exponent_form(
            &format!("{:.*e}", spec.precision.unwrap_or(6), magnitude),
            upper,
        ),
        _ => general(magnitude, spec.precision, upper, spec.sharp),
    };
    number(sign_of(v.is_sign_negative(), spec), "", digits, spec, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;

    fn r(template: &str, values: &[Value]) -> String {
        render(template, values).unwrap()
    }

    #[test]
    fn test_literal_text() {
        assert_eq!(r("hello!", &[]), "hello!");
        assert_eq!(r("100%%", &[]), "100%");
        assert_eq!(r("", &[]), "");
    }

    #[test]
    fn test_strings() {
        assert_eq!(r("fmt %s", &args!["world"]), "fmt world");
        assert_eq!(r("[%6s]", &args!["ab"]), "[    ab]");
        assert_eq!(r("[%-6s]", &args!["ab"]), "[ab    ]");
        assert_eq!(r("[%.2s]", &args!["abcdef"]), "[ab]");
        assert_eq!(r("%s", &args!['z']), "z");
        assert_eq!(r("%q", &args!["a\"b"]), "\"a\\\"b\"");
        assert_eq!(r("%q", &args!['x']), "'x'");
    }

    #[test]
    fn test_width_counts_columns() {
        assert_eq!(r("[%4s]", &args!["日本"]), "[日本]");
        assert_eq!(r("[%5s]", &args!["日本"]), "[ 日本]");
    }

    #[test]
    fn test_integers() {
        assert_eq!(r("%d", &args![42]), "42");
        assert_eq!(r("%i", &args![-42]), "-42");
        assert_eq!(r("%5d|", &args![42]), "   42|");
        assert_eq!(r("%-5d|", &args![42]), "42   |");
        assert_eq!(r("%05d", &args![-42]), "-0042");
        assert_eq!(r("%+d", &args![5]), "+5");
        assert_eq!(r("% d", &args![5]), " 5");
        assert_eq!(r("%.3d", &args![7]), "007");
        assert_eq!(r("%d", &args![i64::MIN]), "-9223372036854775808");
    }

    #[test]
    fn test_radix() {
        assert_eq!(r("%x", &args![255]), "ff");
        assert_eq!(r("%X", &args![255]), "FF");
        assert_eq!(r("%#x", &args![255]), "0xff");
        assert_eq!(r("%o", &args![8]), "10");
        assert_eq!(r("%#o", &args![8]), "010");
        assert_eq!(r("%b", &args![5]), "101");
        assert_eq!(r("%x", &args![-1]), "-1");
        assert_eq!(r("%x", &args!["hi"]), "6869");
    }

    #[test]
    fn test_chars_and_bools() {
        assert_eq!(r("%c", &args![65]), "A");
        assert_eq!(r("%c", &args!['é']), "é");
        assert_eq!(r("%t", &args![true]), "true");
        assert_eq!(r("%v", &args![false]), "false");
    }

    #[test]
    fn test_floats() {
        assert_eq!(r("%f", &args![3.5]), "3.500000");
        assert_eq!(r("%.2f", &args![3.14159]), "3.14");
        assert_eq!(r("%8.2f|", &args![-3.14159]), "   -3.14|");
        assert_eq!(r("%08.2f", &args![-3.14159]), "-0003.14");
        assert_eq!(r("%e", &args![1234.5678]), "1.234568e+03");
        assert_eq!(r("%E", &args![0.00012]), "1.200000E-04");
        assert_eq!(r("%.1e", &args![5.0]), "5.0e+00");
    }

    #[test]
    fn test_general_floats() {
        assert_eq!(r("%g", &args![3.25]), "3.25");
        assert_eq!(r("%v", &args![1.0]), "1");
        assert_eq!(r("%g", &args![100000.0]), "100000");
        assert_eq!(r("%g", &args![1e21]), "1e+21");
        assert_eq!(r("%g", &args![0.00001]), "1e-05");
        assert_eq!(r("%.3g", &args![3.14159]), "3.14");
        assert_eq!(r("%.2g", &args![1234.0]), "1.2e+03");
        assert_eq!(r("%g", &args![0.0]), "0");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(r("%f", &args![f64::NAN]), "NaN");
        assert_eq!(r("%v", &args![f64::INFINITY]), "+Inf");
        assert_eq!(r("%f", &args![f64::NEG_INFINITY]), "-Inf");
    }

    #[test]
    fn test_errors() {
        assert!(matches!(render("%s", &[]), Err(Error::InvalidArguments(_))));
        assert!(render("plain", &args![1]).is_err());
        assert!(render("%d", &args!["x"]).is_err());
        assert!(render("%f", &args![1]).is_err());
        assert!(render("%t", &args![1]).is_err());
        assert!(render("%y", &args![1]).is_err());
        assert!(render("50%", &[]).is_err());
        assert!(render("%-", &[]).is_err());
    }

    #[test]
    fn test_field_limits() {
        let wide = render("%99999999999999999999d", &args![1]);
        assert!(matches!(wide, Err(Error::InvalidArguments(_))));
        let precise = render("%.99999999999999999999f", &args![1.5]);
        assert!(matches!(precise, Err(Error::InvalidArguments(_))));
        assert!(render("%1000001s", &args!["x"]).is_err());
        assert_eq!(render("%8.3f", &args![1.5]).unwrap(), "   1.500");
        assert_eq!(render("%1000000s", &args!["x"]).unwrap().len(), 1_000_000);
    }
}
