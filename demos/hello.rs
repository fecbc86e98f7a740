//! Hello demo: colors, attributes and positioned output.
//!
//! Shows the `wprint!` macro placing formatted text with optional leading
//! coordinates, plus a boxed sub-window and a few line-drawing characters.

use ncurses::*;

fn main() -> Result<()> {
    let mut screen = Screen::init()?;
    screen.cbreak(true)?;
    screen.echo(false)?;
    screen.cursor(CursorVisibility::Invisible)?;

    if screen.has_colors() {
        screen.start_color()?;
        screen.init_pair(1, COLOR_YELLOW, COLOR_BLACK)?;
        screen.init_pair(2, COLOR_CYAN, COLOR_BLACK)?;
    }
    let (lines, cols) = (screen.lines(), screen.cols());

    let stdscr = screen.stdscr_mut();
    stdscr.keypad(true)?;

    stdscr.attron(A_BOLD | color_pair(1))?;
    wprint!(stdscr, 1, 2, "Hello, %s!", "ncurses")?;
    stdscr.attroff(A_BOLD | color_pair(1))?;

    wprint!(stdscr, 3, 2, "Screen is %d x %d", cols, lines)?;
    wprint!(stdscr, 4, "  Row-only placement starts at column 0")?;
    stdscr.mvhline(5, 2, ACS_HLINE, 36)?;
    stdscr.addch_args(&args![5, 38, ACS_RTEE])?;
    stdscr.refresh()?;

    let mut panel = screen.new_window(6, 40, 7, 2)?;
    panel.box_(0, 0)?;
    panel.color_on(2)?;
    wprint!(panel, 1, 2, "%-10s%8.2f", "pi", std::f64::consts::PI)?;
    wprint!(panel, 2, 2, "%-10s%8x", "hex", 48879)?;
    panel.color_off(2)?;
    wprint!(panel, 4, 2, "Press any key to exit")?;
    panel.refresh()?;

    let key = panel.getch()?;
    screen.end()?;
    println!("last key: {}", key_name(key));
    Ok(())
}
