//! Handoff from the outer process to a freshly spawned terminal.
//!
//! Nothing is shared with the inner process except its command line, so the
//! whole request is a plain value built up front and handed to the window
//! manager.

use anyhow::{bail, Context, Result};
use log::LevelFilter;
use std::path::PathBuf;
use std::process::Command;

use crate::cli::Action;
use crate::defaults::Defaults;
use crate::geometry::MenuGeometry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnRequest {
    pub geometry: MenuGeometry,
    pub action: Action,
    /// Our own executable, re-run with `-t` inside the new terminal.
    pub program: PathBuf,
    /// Forwarded as `-p` when the user gave one.
    pub profiles: Option<PathBuf>,
    pub log_level: LevelFilter,
}

impl SpawnRequest {
    /// argv of the inner process.
    pub fn inner_args(&self) -> Vec<String> {
        let mut args = vec![self.program.display().to_string(), "-t".to_string()];
        if let Some(p) = &self.profiles {
            args.push("-p".to_string());
            args.push(p.display().to_string());
        }
        if self.log_level != Defaults::LOG_LEVEL_FILTER {
            args.push("--log-level".to_string());
            args.push(self.log_level.as_str().to_ascii_lowercase());
        }
        args.push(self.action.as_str().to_string());
        args
    }

    /// argv of the terminal emulator hosting the inner process.
    pub fn terminal_args(&self) -> Vec<String> {
        let mut args: Vec<String> = vec![
            Defaults::TERMINAL_BIN.into(),
            "--class".into(),
            Defaults::WINDOW_CLASS.into(),
            "--option".into(),
            format!("window.dimensions.lines={}", self.geometry.lines),
            "--option".into(),
            format!("window.dimensions.columns={}", self.geometry.columns),
            "-e".into(),
        ];
        args.extend(self.inner_args());
        args
    }

    /// Single i3 command line. i3 hands the `exec` payload to `sh -c`, but
    /// its own parser ends an unquoted payload at `,` or `;`, so the shell
    /// line goes inside an i3 double-quoted string.
    pub fn wm_command(&self) -> String {
        let words: Vec<String> = self.terminal_args().iter().map(|a| shell_quote(a)).collect();
        format!("exec {}", i3_quote(&words.join(" ")))
    }
}

/// i3 command-parser string: double quotes, `\` and `"` escaped.
pub fn i3_quote(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', r"\\").replace('"', r#"\""#))
}

/// POSIX single-quote `s` unless it is made only of shell-inert characters.
pub fn shell_quote(s: &str) -> String {
    let inert = |c: char| c.is_ascii_alphanumeric() || "_./=:,@%+-".contains(c);
    if !s.is_empty() && s.chars().all(inert) {
        return s.to_string();
    }
    format!("'{}'", s.replace('\'', r"'\''"))
}

/// Something that can open a terminal window for a [`SpawnRequest`].
pub trait WindowManager {
    fn spawn(&self, req: &SpawnRequest) -> Result<()>;
}

/// i3 IPC through `i3-msg`. Returns once i3 accepted the command; the new
/// terminal is not waited for.
#[derive(Debug, Clone)]
pub struct I3 {
    msg_program: String,
}

impl Default for I3 {
    fn default() -> Self {
        Self { msg_program: Defaults::WM_MSG_BIN.to_string() }
    }
}

impl WindowManager for I3 {
    fn spawn(&self, req: &SpawnRequest) -> Result<()> {
        let cmd = req.wm_command();
        log::debug!("{} {}", self.msg_program, cmd);
        let out = Command::new(&self.msg_program)
            .arg(&cmd)
            .output()
            .with_context(|| format!("running {}", self.msg_program))?;
        if !out.status.success() {
            bail!(
                "{} failed ({}): {}",
                self.msg_program,
                out.status,
                String::from_utf8_lossy(&out.stderr).trim()
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(profiles: Option<&str>) -> SpawnRequest {
        SpawnRequest {
            geometry: MenuGeometry { lines: 6, columns: 11 },
            action: Action::Restore,
            program: PathBuf::from("/usr/bin/i3-resurrect-menu"),
            profiles: profiles.map(PathBuf::from),
            log_level: LevelFilter::Warn,
        }
    }

    #[test]
    fn command_carries_geometry_and_inner_flag() {
        assert_eq!(
            request(None).wm_command(),
            "exec \"alacritty --class i3-resurrect-menu \
             --option window.dimensions.lines=6 --option window.dimensions.columns=11 \
             -e /usr/bin/i3-resurrect-menu -t restore\""
        );
    }

    #[test]
    fn profiles_dir_and_log_level_are_forwarded() {
        let mut req = request(Some("/home/me/my profiles"));
        req.log_level = LevelFilter::Debug;
        assert_eq!(
            req.inner_args(),
            vec![
                "/usr/bin/i3-resurrect-menu",
                "-t",
                "-p",
                "/home/me/my profiles",
                "--log-level",
                "debug",
                "restore"
            ]
        );
        assert!(req.wm_command().ends_with("-t -p '/home/me/my profiles' --log-level debug restore\""));
    }

    #[test]
    fn i3_separators_stay_inside_exec_payload() {
        let cmd = request(Some("/home/me/a,b;c")).wm_command();
        assert!(cmd.starts_with("exec \"alacritty "));
        assert!(cmd.ends_with(" -p '/home/me/a,b;c' restore\""));
        // no unescaped quote before the closing one, so i3 sees one string
        let body = &cmd["exec \"".len()..cmd.len() - 1];
        assert!(!body.contains('"'));
    }

    #[test]
    fn i3_quote_escapes_quotes_and_backslashes() {
        assert_eq!(i3_quote("a b"), r#""a b""#);
        assert_eq!(i3_quote(r#"say "hi""#), r#""say \"hi\"""#);
        assert_eq!(i3_quote(r"a\b"), r#""a\\b""#);

        let req = request(Some(r#"/tmp/q"d\x"#));
        assert!(req.wm_command().contains(r#"-p '/tmp/q\"d\\x'"#));
    }

    #[test]
    fn quoting() {
        assert_eq!(shell_quote("plain-word_1.2"), "plain-word_1.2");
        assert_eq!(shell_quote(""), "''");
        assert_eq!(shell_quote("a b"), "'a b'");
        assert_eq!(shell_quote("it's"), r"'it'\''s'");
        assert_eq!(shell_quote("$HOME;rm"), "'$HOME;rm'");
    }
}
