//! Integration tests for the ncurses bindings
//!
//! These tests exercise the public API that does not need a terminal:
//! argument resolution, template rendering, the attribute, key and color
//! tables, and the menu library's request names.

use ncurses::args::{resolve, resolve_print};
use ncurses::format::render;
use ncurses::*;

/// Test that leading integers become the placement
#[test]
fn test_resolve_placements() {
    let call = resolve(&args!['x'], 1).unwrap();
    assert_eq!(call.placement, Placement::Here);
    assert_eq!(call.rest, args!['x']);

    let call = resolve(&args![4, 'x'], 1).unwrap();
    assert_eq!(call.placement, Placement::Row(4));
    assert!(call.placement.has_y());
    assert!(!call.placement.has_x());

    let call = resolve(&args![4, 9, 'x'], 1).unwrap();
    assert_eq!(call.placement, Placement::At(4, 9));
    assert_eq!((call.placement.y(), call.placement.x()), (4, 9));
}

/// Test that a two-element payload leaves the coordinates in front
#[test]
fn test_resolve_wide_payload() {
    let call = resolve(&args![2, 3, 'q', 10], 2).unwrap();
    assert_eq!(call.placement, Placement::At(2, 3));
    assert_eq!(call.rest, args!['q', 10]);
}

/// Test rejected argument lists
#[test]
fn test_resolve_rejections() {
    assert!(matches!(
        resolve(&args![], 1),
        Err(Error::InvalidArguments(_))
    ));
    assert!(resolve(&args!['x'], 0).is_err());
    assert!(resolve(&args![1, 2, 3, 'x'], 1).is_err());
    assert!(resolve(&args!["row", 'x'], 1).is_err());
    assert!(resolve(&args![1.5, 'x'], 1).is_err());
}

/// Test that resolving does not depend on prior calls
#[test]
fn test_resolve_is_repeatable() {
    let list = args![7, 8, "x"];
    assert_eq!(resolve(&list, 1).unwrap(), resolve(&list, 1).unwrap());
}

/// Test print resolution with and without coordinates
#[test]
fn test_resolve_print() {
    let call = resolve_print(&args!["hello!"]).unwrap();
    assert_eq!(call.placement, Placement::Here);
    assert_eq!(call.text, "hello!");

    let call = resolve_print(&args![1, 2, "fmt %s", "world"]).unwrap();
    assert_eq!(call.placement, Placement::At(1, 2));
    assert_eq!(call.text, "fmt world");

    let call = resolve_print(&args![5, "%d%%", 80]).unwrap();
    assert_eq!(call.placement, Placement::Row(5));
    assert_eq!(call.text, "80%");
}

/// Test malformed print lists
#[test]
fn test_resolve_print_rejections() {
    assert!(resolve_print(&args![]).is_err());
    assert!(resolve_print(&args![1, 2]).is_err());
    assert!(resolve_print(&args![1, 2, 3, "x"]).is_err());
    assert!(resolve_print(&args!['c', "x"]).is_err());
    assert!(resolve_print(&args!["%d"]).is_err());
    assert!(resolve_print(&args!["%s", "a", "b"]).is_err());
}

/// Test template rendering through the public formatter
#[test]
fn test_render() {
    assert_eq!(render("%-5s|%03d", &args!["ab", 7]).unwrap(), "ab   |007");
    assert_eq!(render("%.2f", &args![2.71828]).unwrap(), "2.72");
    assert_eq!(render("%#x", &args![255]).unwrap(), "0xff");
    assert_eq!(render("%c%c", &args!['o', 'k']).unwrap(), "ok");
    assert!(render("%d", &args!["text"]).is_err());
    assert!(render("%y", &args![1]).is_err());
}

/// Test value conversions used by the args! macro
#[test]
fn test_value_conversions() {
    assert_eq!(Value::from(3u8), Value::Int(3));
    assert_eq!(Value::from(-3i64), Value::Int(-3));
    assert_eq!(Value::from(String::from("s")), Value::Str("s".into()));
    assert_eq!(Value::from('c').kind(), "char");
    assert_eq!(Value::from(7).as_coord(), Some(7));
    assert_eq!(Value::from(i64::MAX).as_coord(), None);
}

/// Test placement construction and dispatch
#[test]
fn test_placement_dispatch() {
    assert_eq!(Placement::from_coords(&[]).unwrap(), Placement::Here);
    assert!(Placement::from_coords(&[1, 2, 3]).is_err());

    let mut log = Vec::new();
    Placement::Here.dispatch(&mut log, |l| l.push("plain"), |l, _, _| l.push("moved"));
    Placement::Row(3).dispatch(
        &mut log,
        |l| l.push("plain"),
        |l, y, x| {
            assert_eq!((y, x), (3, 0));
            l.push("moved")
        },
    );
    assert_eq!(log, ["plain", "moved"]);
}

/// Test attribute names and descriptions
#[test]
fn test_attribute_names() {
    assert_eq!(attr_name(A_BOLD), Some("bold"));
    assert_eq!(attr_name(A_BOLD | A_DIM), None);
    assert_eq!(attr_names(A_NORMAL), vec!["normal"]);
    assert_eq!(describe(A_REVERSE | color_pair(4)), "reverse|color pair 4");
    assert_eq!(describe(color_pair(1)), "color pair 1");
}

/// Test color pair encoding and checks
#[test]
fn test_color_pairs() {
    let attr = color_pair(5) | A_UNDERLINE;
    assert_eq!(pair_number(attr), 5);
    assert_eq!(Attribute::from(attr), Attribute::UNDERLINE);
    assert_eq!(Attribute::BOLD.with_color_pair(2), A_BOLD | color_pair(2));

    assert!(color::check_pair(1, 64).is_ok());
    assert_eq!(color::check_pair(0, 64), Err(Error::InvalidColorPair(0)));
    assert_eq!(color::check_pair(64, 64), Err(Error::InvalidColorPair(64)));
    assert_eq!(Color::from_index(COLOR_CYAN), Some(Color::Cyan));
}

/// Test line drawing characters carry the alternate charset bit
#[test]
fn test_acs_characters() {
    for ch in [ACS_ULCORNER, ACS_HLINE, ACS_VLINE, ACS_LRCORNER] {
        assert_ne!(ch & A_ALTCHARSET, 0);
    }
    assert_eq!(chtype_char(ACS_HLINE), b'q');
}

/// Test key names
#[test]
fn test_key_names() {
    assert_eq!(key_name(KEY_DOWN), "down");
    assert_eq!(key_name(KEY_RETURN), "enter");
    assert_eq!(key_name(KEY_ESC), "escape");
    assert_eq!(key_name(key_f(3)), "F3");
    assert_eq!(key_name('a' as i32), "a");
    assert_eq!(Key::from(KEY_UP).to_string(), "up");
}

/// Test error messages
#[test]
fn test_error_display() {
    assert_eq!(
        Error::DriverFailure { call: "wrefresh" }.to_string(),
        "wrefresh failed"
    );
    assert_eq!(
        Error::Attribute {
            action: "set",
            name: describe(A_BOLD),
        }
        .to_string(),
        "failed to set attribute: bold"
    );
    assert_eq!(
        Error::invalid("no payload").to_string(),
        "invalid arguments: no payload"
    );
}

/// Test mouse masks through the public API
#[cfg(feature = "mouse")]
#[test]
fn test_mouse_masks() {
    let event = MouseEvent {
        bstate: BUTTON2_PRESSED | BUTTON_ALT,
        ..Default::default()
    };
    assert!(event.has_button(BUTTON2_PRESSED));
    assert!(!event.has_button(BUTTON1_PRESSED));
    assert_eq!(ALL_MOUSE_EVENTS & BUTTON_ALT, BUTTON_ALT);
}

/// Test the navigation key table
#[cfg(feature = "menu")]
#[test]
fn test_menu_driver_actions() {
    use ncurses::menu::*;

    assert_eq!(driver_action(KEY_DOWN), Some(REQ_DOWN_ITEM));
    assert_eq!(driver_action(KEY_PPAGE), Some(REQ_SCR_UPAGE));
    assert_eq!(driver_action('q' as i32), None);
    for (_, request) in DRIVER_ACTIONS {
        assert!((MIN_MENU_COMMAND..=MAX_MENU_COMMAND).contains(request));
    }
}

/// Test request names come from the menu library
#[cfg(feature = "menu")]
#[test]
fn test_menu_request_names() {
    use ncurses::menu::*;

    assert_eq!(request_name(REQ_UP_ITEM).as_deref(), Some("UP_ITEM"));
    assert_eq!(request_by_name("last_item").unwrap(), REQ_LAST_ITEM);
    assert!(request_by_name("SIDEWAYS_ITEM").is_err());
}

/// Test menu error codes
#[cfg(feature = "menu")]
#[test]
fn test_menu_errors() {
    assert!(MenuError::check(0).is_ok());
    assert_eq!(
        MenuError::check(-12),
        Err(Error::Menu(MenuError::RequestDenied))
    );
    assert_eq!(MenuError::from_code(-99), Some(MenuError::Unknown(-99)));
}

/// Test that trace output lands in the requested file
#[cfg(feature = "trace")]
#[test]
fn test_trace_to_file() {
    use ncurses::trace::*;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trace");

    trace_to(&path, TRACE_CALLS).unwrap();
    assert!(trace_enabled(TRACE_CALLS));
    tracef("first line");
    tracef_level(TRACE_ATTRS, "filtered out");
    tracef_level(TRACE_CALLS, &traceattr(A_BOLD));
    trace_to(&path, TRACE_DISABLE).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("first line"));
    assert!(contents.contains("bold"));
    assert!(!contents.contains("filtered out"));
    assert_eq!(trace_level(), TRACE_DISABLE);
}
