use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::defaults::Defaults;

/// Profile names found in `dir`, deduplicated and sorted by code point.
///
/// A profile exists when the directory holds a `<name>_layout.json` or a
/// `<name>_programs.json` file. Only the top level is scanned. A missing or
/// unreadable directory is an empty catalog, not an error.
pub fn list_profiles(dir: &Path) -> Vec<String> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("cannot list {}: {e}", dir.display());
            return Vec::new();
        }
    };

    let mut names = BTreeSet::new();
    for ent in entries.flatten() {
        // follows symlinks; dangling links fail and are skipped
        let is_file = fs::metadata(ent.path()).map(|m| m.is_file()).unwrap_or(false);
        if !is_file {
            continue;
        }
        let file_name = ent.file_name();
        let Some(file_name) = file_name.to_str() else {
            log::debug!("skipping non UTF-8 file name {:?}", ent.path());
            continue;
        };
        if let Some(name) = profile_name(file_name) {
            names.insert(name.to_string());
        }
    }

    let out: Vec<String> = names.into_iter().collect();
    log::debug!("{} profile(s) in {}: {:?}", out.len(), dir.display(), out);
    out
}

/// Strip the layout or programs suffix; `None` if the file is neither.
fn profile_name(file_name: &str) -> Option<&str> {
    file_name
        .strip_suffix(Defaults::LAYOUT_SUFFIX)
        .or_else(|| file_name.strip_suffix(Defaults::PROGRAMS_SUFFIX))
}
