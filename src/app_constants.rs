pub(crate) const START_WINDOW_LABEL: &str = "start";
pub(crate) const START_WINDOW_TITLE: &str = "Ravbite Editor";
pub(crate) const START_WINDOW_WIDTH: f64 = 650.0;
pub(crate) const START_WINDOW_HEIGHT: f64 = 250.0;

/// Bundled document the start window loads on creation. Resolved through
/// the app-URL scheme from the shell's install location, never from the
/// process working directory.
pub(crate) const START_DOCUMENT: &str = "startWindow.html";

pub(crate) const DESKTOP_LOG_FILE: &str = "desktop.log";
pub(crate) const SHELL_ROOT_ENV: &str = "RAVBITE_HOME";
pub(crate) const SHELL_ROOT_DIR_NAME: &str = ".ravbite";
