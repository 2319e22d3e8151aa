use std::io;

use crate::keymap::Menu;
use crate::terminal::{Input, RawModeGuard, TerminalMode};

/// Characters that abandon the menu: ^C, ^D, ^Z, CR, LF.
const EXIT_CHARS: [char; 5] = ['\x03', '\x04', '\x1a', '\r', '\n'];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Chosen(String),
    Cancelled,
}

/// Read keystrokes in raw mode until one picks a profile from `menu` or
/// cancels. Unbound keys are ignored. Terminal settings are restored on
/// every way out, read errors included.
pub fn select_profile<T>(term: &mut T, menu: &Menu) -> io::Result<Selection>
where
    T: TerminalMode + Input,
{
    let mut raw = RawModeGuard::new(term)?;
    let selection = listen(&mut *raw, menu)?;
    raw.release()?;
    Ok(selection)
}

fn listen<I: Input + ?Sized>(input: &mut I, menu: &Menu) -> io::Result<Selection> {
    loop {
        let Some(c) = input.read_char()? else {
            return Ok(Selection::Cancelled);
        };
        if EXIT_CHARS.contains(&c) {
            log::debug!("selection cancelled by {c:?}");
            return Ok(Selection::Cancelled);
        }
        if let Some(profile) = menu.resolve(c) {
            return Ok(Selection::Chosen(profile.to_string()));
        }
    }
}
