use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

use crate::defaults::Defaults;

/// i3-resurrect menu: pick a saved session profile with a single keystroke
#[derive(Parser, Debug)]
#[command(name = "i3-resurrect-menu", version, about = "Save and restore i3-resurrect profiles")]
pub struct Cli {
    /// 'save' or 'restore'
    #[arg(value_enum)]
    pub action: Action,

    /// Path to i3-resurrect profiles (default: ~/.i3/i3-resurrect/profiles)
    #[arg(short = 'p', value_name = "PATH")]
    pub profiles: Option<PathBuf>,

    /// Run in terminal (for internal use)
    #[arg(short = 't', hide = true)]
    pub in_term: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = Defaults::LOG_LEVEL)]
    pub log_level: LevelFilter,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Save the current session under a new profile name
    Save,
    /// Restore a previously saved profile
    Restore,
}

impl Action {
    /// Subcommand word, both for re-invoking ourselves and for i3-resurrect.
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Save => "save",
            Action::Restore => "restore",
        }
    }
}

impl Cli {
    pub fn profiles_dir(&self) -> PathBuf {
        match &self.profiles {
            Some(p) => p.clone(),
            None => default_profiles_dir(),
        }
    }
}

pub fn default_profiles_dir() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home.join(Defaults::PROFILES_DIR),
        None => PathBuf::from(Defaults::PROFILES_DIR),
    }
}
