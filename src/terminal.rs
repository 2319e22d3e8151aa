//! Controlling-terminal access: raw-mode lifecycle and keystroke input.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, is_raw_mode_enabled};
use std::fmt;
use std::io::{self, BufRead};
use std::ops::{Deref, DerefMut};

/// Line discipline of a terminal that can be captured and put back later.
pub trait TerminalMode {
    type Settings: Clone + PartialEq + fmt::Debug;

    fn settings(&self) -> io::Result<Self::Settings>;
    /// No line buffering, no echo.
    fn enter_raw(&mut self) -> io::Result<()>;
    fn restore(&mut self, settings: &Self::Settings) -> io::Result<()>;
}

pub trait Input {
    /// One keystroke as a character; `None` once input is exhausted.
    fn read_char(&mut self) -> io::Result<Option<char>>;
    /// One cooked line without its terminator; `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// Holds a terminal in raw mode; the captured settings are put back on drop.
pub struct RawModeGuard<'t, T: TerminalMode> {
    term: &'t mut T,
    saved: Option<T::Settings>,
}

impl<'t, T: TerminalMode> RawModeGuard<'t, T> {
    pub fn new(term: &'t mut T) -> io::Result<Self> {
        let saved = term.settings()?;
        if let Err(e) = term.enter_raw() {
            let _ = term.restore(&saved);
            return Err(e);
        }
        Ok(Self { term, saved: Some(saved) })
    }

    /// Restore now and report failure instead of only logging it.
    pub fn release(mut self) -> io::Result<()> {
        match self.saved.take() {
            Some(saved) => self.term.restore(&saved),
            None => Ok(()),
        }
    }
}

impl<T: TerminalMode> Deref for RawModeGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.term
    }
}

impl<T: TerminalMode> DerefMut for RawModeGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.term
    }
}

impl<T: TerminalMode> Drop for RawModeGuard<'_, T> {
    fn drop(&mut self) {
        if let Some(saved) = self.saved.take() {
            if let Err(e) = self.term.restore(&saved) {
                log::warn!("failed to restore terminal settings: {e}");
            }
        }
    }
}

/// Block for a single keystroke in raw mode, whatever it is.
pub fn wait_for_key<T: TerminalMode + Input>(term: &mut T) -> io::Result<()> {
    let mut raw = RawModeGuard::new(term)?;
    raw.read_char()?;
    raw.release()
}

/// The process's controlling terminal, via crossterm.
#[derive(Debug, Default)]
pub struct Console;

impl TerminalMode for Console {
    /// Whether raw mode is on. crossterm keeps the original termios itself
    /// and puts it back verbatim when raw mode is disabled.
    type Settings = bool;

    fn settings(&self) -> io::Result<bool> {
        is_raw_mode_enabled()
    }

    fn enter_raw(&mut self) -> io::Result<()> {
        enable_raw_mode()
    }

    fn restore(&mut self, raw: &bool) -> io::Result<()> {
        if *raw {
            enable_raw_mode()
        } else {
            disable_raw_mode()
        }
    }
}

impl Input for Console {
    /// A hung-up or closed tty counts as end of input.
    fn read_char(&mut self) -> io::Result<Option<char>> {
        loop {
            let ev = match event::read() {
                Ok(ev) => ev,
                Err(e) if input_closed(&e) => {
                    log::debug!("terminal input closed: {e}");
                    return Ok(None);
                }
                Err(e) => return Err(e),
            };
            if let Event::Key(key) = ev {
                if let Some(c) = key_to_char(key) {
                    return Ok(Some(c));
                }
            }
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(len);
        Ok(Some(line))
    }
}

/// Read errors meaning the other end of the tty is gone.
fn input_closed(e: &io::Error) -> bool {
    is_eio(e)
        || matches!(
            e.kind(),
            io::ErrorKind::UnexpectedEof | io::ErrorKind::BrokenPipe | io::ErrorKind::ConnectionReset
        )
}

// reads on a tty whose session leader hung up fail with EIO
#[cfg(unix)]
fn is_eio(e: &io::Error) -> bool {
    e.raw_os_error() == Some(libc::EIO)
}

#[cfg(not(unix))]
fn is_eio(_e: &io::Error) -> bool {
    false
}

/// Fold a key event back into the byte a raw tty would have delivered.
fn key_to_char(key: KeyEvent) -> Option<char> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            c.is_ascii_alphabetic()
                .then(|| ((c.to_ascii_lowercase() as u8) & 0x1f) as char)
        }
        KeyCode::Char(c) => Some(c),
        KeyCode::Enter => Some('\r'),
        KeyCode::Tab => Some('\t'),
        KeyCode::Esc => Some('\x1b'),
        KeyCode::Backspace => Some('\x7f'),
        _ => None,
    }
}

#[cfg(test)]
pub mod testing {
    //! Scripted terminal for driving the interactive flows in tests.

    use super::*;
    use std::collections::VecDeque;

    /// Fake termios: raw flag plus a stamp so a stale copy is never equal.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct FakeSettings {
        pub raw: bool,
        pub stamp: u32,
    }

    pub enum Step {
        Char(char),
        Fail,
    }

    pub struct ScriptedTerminal {
        pub current: FakeSettings,
        pub keys: VecDeque<Step>,
        pub lines: VecDeque<String>,
        pub captured: Vec<FakeSettings>,
        pub restored: Vec<FakeSettings>,
        pub fail_enter_raw: bool,
    }

    impl ScriptedTerminal {
        pub fn new(keys: &str) -> Self {
            Self {
                current: FakeSettings { raw: false, stamp: 7 },
                keys: keys.chars().map(Step::Char).collect(),
                lines: VecDeque::new(),
                captured: Vec::new(),
                restored: Vec::new(),
                fail_enter_raw: false,
            }
        }

        pub fn with_lines(mut self, lines: &[&str]) -> Self {
            self.lines = lines.iter().map(|l| l.to_string()).collect();
            self
        }

        pub fn failing_after(mut self) -> Self {
            self.keys.push_back(Step::Fail);
            self
        }
    }

    impl TerminalMode for ScriptedTerminal {
        type Settings = FakeSettings;

        fn settings(&self) -> io::Result<FakeSettings> {
            Ok(self.current.clone())
        }

        fn enter_raw(&mut self) -> io::Result<()> {
            if self.fail_enter_raw {
                self.current.stamp += 1;
                return Err(io::Error::new(io::ErrorKind::Other, "tcsetattr"));
            }
            self.captured.push(self.current.clone());
            self.current = FakeSettings { raw: true, stamp: self.current.stamp + 100 };
            Ok(())
        }

        fn restore(&mut self, settings: &FakeSettings) -> io::Result<()> {
            self.current = settings.clone();
            self.restored.push(settings.clone());
            Ok(())
        }
    }

    impl Input for ScriptedTerminal {
        fn read_char(&mut self) -> io::Result<Option<char>> {
            assert!(self.current.raw, "keystrokes must be read in raw mode");
            match self.keys.pop_front() {
                Some(Step::Char(c)) => Ok(Some(c)),
                Some(Step::Fail) => Err(io::Error::new(io::ErrorKind::Other, "read failed")),
                None => Ok(None),
            }
        }

        fn read_line(&mut self) -> io::Result<Option<String>> {
            assert!(!self.current.raw, "lines must be read in cooked mode");
            Ok(self.lines.pop_front())
        }
    }
}
