//! Menu demo: a framed menu driven by the arrow keys.
//!
//! Navigation keys are translated with `driver_action`; Enter shows the
//! current item, `r` swaps in the items in reverse order and `q` quits.

use ncurses::menu::*;
use ncurses::*;

const CHOICES: &[(&str, &str)] = &[
    ("Choice 1", "First choice"),
    ("Choice 2", "Second choice"),
    ("Choice 3", "Third choice"),
    ("Choice 4", "Fourth choice"),
    ("Exit", "Leave the demo"),
];

const STATUS_ROW: i32 = 15;

fn main() -> Result<()> {
    let mut screen = Screen::init()?;
    screen.cbreak(true)?;
    screen.echo(false)?;

    if screen.has_colors() {
        screen.start_color()?;
        screen.init_pair(1, COLOR_RED, COLOR_BLACK)?;
    }

    let mut frame = screen.new_window(10, 40, 4, 4)?;
    frame.box_(0, 0)?;
    frame.attron(A_BOLD)?;
    wprint!(frame, 1, 2, "My Menu")?;
    frame.attroff(A_BOLD)?;
    frame.mvhline(2, 1, ACS_HLINE, 38)?;
    let inner = frame.derived(6, 38, 3, 1)?;

    let items = build_items(CHOICES.iter())?;

    let stdscr = screen.stdscr_mut();
    stdscr.keypad(true)?;
    wprint!(stdscr, 1, 2, "Arrows move, Enter picks, r reverses, q quits")?;
    stdscr.refresh()?;

    let mut menu = Menu::new(items)?;
    menu.set_window(&frame)?;
    menu.set_sub_window(&inner)?;
    menu.set_mark(" * ")?;
    menu.set_foreground(A_REVERSE | color_pair(1))?;
    menu.post()?;
    menu.refresh()?;

    let mut reversed = false;
    loop {
        // the frame is borrowed by the menu, so keys come from stdscr
        let key = screen.stdscr_mut().getch()?;
        if key == 'q' as i32 {
            break;
        }
        match driver_action(key) {
            Some(request) => match menu.driver(request) {
                // the first and last items refuse to move further
                Ok(()) | Err(Error::Menu(MenuError::RequestDenied)) => {}
                Err(err) => return Err(err),
            },
            None if key == KEY_RETURN || key == KEY_ENTER => {
                let picked = menu.current().map(MenuItem::name).unwrap_or_default();
                if picked == "Exit" {
                    break;
                }
                let stdscr = screen.stdscr_mut();
                stdscr.mv(STATUS_ROW, 2)?;
                stdscr.clear_to_eol()?;
                wprint!(stdscr, STATUS_ROW, 2, "Picked: %s", picked)?;
                stdscr.refresh()?;
            }
            None if key == 'r' as i32 => {
                // items can only be swapped while the menu is unposted
                reversed = !reversed;
                let items = if reversed {
                    build_items(CHOICES.iter().rev())?
                } else {
                    build_items(CHOICES.iter())?
                };
                menu.unpost()?;
                menu.set_items(items)?;
                menu.post()?;
            }
            None => {}
        }
        menu.refresh()?;
    }

    menu.unpost()?;
    Ok(())
}

fn build_items<'a>(choices: impl Iterator<Item = &'a (&'a str, &'a str)>) -> Result<Vec<MenuItem>> {
    choices
        .map(|(name, desc)| MenuItem::new(name, desc))
        .collect()
}
