use crate::defaults::Defaults;

/// Width of the `[x] ` key prefix in front of each profile.
const KEY_PREFIX_WIDTH: usize = 4;
/// Rows besides the profile lines: header, blank, blank, prompt.
const MENU_EXTRA_LINES: usize = 4;
const MENU_MARGIN_COLUMNS: usize = 2;
const SAVE_PROMPT_LINES: usize = 4;

/// Character grid a spawned terminal needs to show its content unwrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuGeometry {
    pub lines: usize,
    pub columns: usize,
}

impl MenuGeometry {
    pub fn save_prompt() -> Self {
        Self {
            lines: SAVE_PROMPT_LINES,
            columns: Defaults::ENTER_NAME_MSG.chars().count(),
        }
    }

    pub fn restore_menu(profiles: &[String]) -> Self {
        if profiles.is_empty() {
            return Self {
                lines: 1,
                columns: Defaults::NO_PROFILES_MSG.chars().count() + 1,
            };
        }
        let widest = profiles
            .iter()
            .map(|p| KEY_PREFIX_WIDTH + p.chars().count())
            .max()
            .unwrap_or(KEY_PREFIX_WIDTH);
        Self {
            lines: profiles.len() + MENU_EXTRA_LINES,
            columns: widest + MENU_MARGIN_COLUMNS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_prompt_fits_message() {
        assert_eq!(MenuGeometry::save_prompt(), MenuGeometry { lines: 4, columns: 29 });
    }

    #[test]
    fn restore_menu_sizes_to_longest_name() {
        let g = MenuGeometry::restore_menu(&["alpha".into(), "b".into()]);
        assert_eq!(g, MenuGeometry { lines: 6, columns: 11 });
    }

    #[test]
    fn empty_restore_menu_fits_notice() {
        assert_eq!(MenuGeometry::restore_menu(&[]), MenuGeometry { lines: 1, columns: 12 });
    }

    #[test]
    fn width_counts_chars_not_bytes() {
        let g = MenuGeometry::restore_menu(&["café".into()]);
        assert_eq!(g.columns, 4 + 4 + 2);
    }
}
