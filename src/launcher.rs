//! Two-phase orchestration.
//!
//! Outer: size the window for the requested action and ask the window
//! manager to open it with ourselves running inside. Inner (`-t`): drive the
//! prompt or menu on the now correctly sized terminal.

use anyhow::{Context, Result};
use crossterm::style::Stylize;
use std::io::Write;
use std::path::Path;

use crate::catalog::list_profiles;
use crate::cli::{Action, Cli};
use crate::defaults::Defaults;
use crate::geometry::MenuGeometry;
use crate::keymap::Menu;
use crate::resurrect::SessionTool;
use crate::selection::{select_profile, Selection};
use crate::spawn::{SpawnRequest, WindowManager};
use crate::terminal::{wait_for_key, Input, TerminalMode};

pub fn plan_spawn(cli: &Cli, program: &Path) -> SpawnRequest {
    let geometry = match cli.action {
        Action::Save => MenuGeometry::save_prompt(),
        Action::Restore => MenuGeometry::restore_menu(&list_profiles(&cli.profiles_dir())),
    };
    log::debug!("{} window: {}x{}", cli.action.as_str(), geometry.lines, geometry.columns);
    SpawnRequest {
        geometry,
        action: cli.action,
        program: program.to_path_buf(),
        profiles: cli.profiles.clone(),
        log_level: cli.log_level,
    }
}

/// Outer phase: fire and forget.
pub fn launch(cli: &Cli, wm: &dyn WindowManager) -> Result<()> {
    let program = std::env::current_exe().context("locating own executable")?;
    let req = plan_spawn(cli, &program);
    wm.spawn(&req)
}

/// Everything the inner phase talks to.
pub struct InTerminal<'a, T, W> {
    pub term: &'a mut T,
    pub out: &'a mut W,
    pub tool: &'a dyn SessionTool,
}

impl<T, W> InTerminal<'_, T, W>
where
    T: TerminalMode + Input,
    W: Write,
{
    pub fn run(&mut self, action: Action, profiles_dir: &Path) -> Result<()> {
        match action {
            Action::Save => self.save(),
            Action::Restore => self.restore(Menu::new(list_profiles(profiles_dir))),
        }
    }

    fn save(&mut self) -> Result<()> {
        writeln!(self.out, "{}", Defaults::ENTER_NAME_MSG)?;
        write!(self.out, "> ")?;
        self.out.flush()?;

        let line = self.term.read_line().context("reading profile name")?;
        let name = line.as_deref().map(str::trim).unwrap_or_default();

        let errmsg = if name.is_empty() {
            Some(Defaults::NO_NAME_MSG.to_string())
        } else {
            self.tool.run(Action::Save, name).err().map(|e| e.to_string())
        };

        match errmsg {
            Some(msg) => self.show_error(&msg),
            None => Ok(()),
        }
    }

    fn restore(&mut self, menu: Menu) -> Result<()> {
        if menu.is_empty() {
            write!(self.out, "{}", Defaults::NO_PROFILES_MSG)?;
            self.out.flush()?;
            wait_for_key(&mut *self.term).context("waiting for key")?;
            return Ok(());
        }

        self.print_menu(&menu)?;
        write!(self.out, "\n> ")?;
        self.out.flush()?;

        let profile = match select_profile(&mut *self.term, &menu).context("reading selection")? {
            Selection::Chosen(p) => p,
            Selection::Cancelled => return Ok(()),
        };
        log::info!("restoring profile {profile}");

        match self.tool.run(Action::Restore, &profile) {
            Ok(()) => Ok(()),
            Err(e) => self.show_error(&e.to_string()),
        }
    }

    fn print_menu(&mut self, menu: &Menu) -> Result<()> {
        writeln!(self.out, "{}\n", Defaults::MENU_HEADER)?;
        for (key, profile) in menu.entries() {
            let key = format!(" [{}]", key.unwrap_or(' ')).blue().bold();
            writeln!(self.out, "{key} {profile}")?;
        }
        if menu.overflows() {
            writeln!(self.out, "{}", Defaults::TOO_MANY_MSG.red().bold())?;
        }
        Ok(())
    }

    /// Bold red message, held on screen until a key is pressed.
    fn show_error(&mut self, msg: &str) -> Result<()> {
        writeln!(self.out, "{}", msg.red().bold())?;
        self.out.flush()?;
        wait_for_key(&mut *self.term).context("waiting for key")?;
        Ok(())
    }
}
