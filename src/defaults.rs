//! Central place for all default values.
//! Update these and the whole app picks them up.

pub struct Defaults;

impl Defaults {

    /* Profiles */
    // relative to $HOME
    pub const PROFILES_DIR: &'static str = ".i3/i3-resurrect/profiles";
    pub const LAYOUT_SUFFIX: &'static str = "_layout.json";
    pub const PROGRAMS_SUFFIX: &'static str = "_programs.json";

    /* External programs */
    pub const RESURRECT_BIN: &'static str = "i3-resurrect";
    pub const WM_MSG_BIN: &'static str = "i3-msg";
    pub const TERMINAL_BIN: &'static str = "alacritty";
    pub const WINDOW_CLASS: &'static str = "i3-resurrect-menu";

    /* Messages (geometry is computed from these, keep them exact) */
    pub const NO_PROFILES_MSG: &'static str = "No profiles";
    pub const ENTER_NAME_MSG: &'static str = "Save under this profile name:";
    pub const NO_NAME_MSG: &'static str = "No name was provided";
    pub const TOO_MANY_MSG: &'static str = "Too many profiles";
    pub const MENU_HEADER: &'static str = "Profiles:";

    /* Logging */
    pub const LOG_LEVEL: &'static str = "warn";
    pub const LOG_LEVEL_FILTER: log::LevelFilter = log::LevelFilter::Warn;
}
