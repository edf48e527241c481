use std::{env, path::PathBuf};

use crate::{SHELL_ROOT_DIR_NAME, SHELL_ROOT_ENV};

/// Root directory for everything the shell writes at runtime. Honors the
/// `RAVBITE_HOME` override, otherwise lands next to the user profile.
pub(crate) fn default_shell_root_dir() -> Option<PathBuf> {
    if let Ok(root) = env::var(SHELL_ROOT_ENV) {
        let trimmed = root.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }

    home::home_dir().map(|home_dir| home_dir.join(SHELL_ROOT_DIR_NAME))
}
