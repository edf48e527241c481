use tauri::{AppHandle, Manager, WebviewUrl, WebviewWindowBuilder};
use url::Url;

use crate::{
    shell_bridge_commands, ShellState, START_DOCUMENT, START_WINDOW_HEIGHT, START_WINDOW_LABEL,
    START_WINDOW_TITLE, START_WINDOW_WIDTH,
};

/// Builds the start window with its fixed chrome: 650x250, non-resizable,
/// frameless, transparent, centered, taskbar-visible and hidden until the
/// start document finishes its initial load. The document itself loads
/// asynchronously; completion arrives later as a page-load event.
pub(crate) fn create_start_window<F>(app_handle: &AppHandle, log: F) -> Result<(), String>
where
    F: Fn(&str),
{
    let bootstrap_script = shell_bridge_commands::shell_bootstrap_script(app_handle);

    let window = WebviewWindowBuilder::new(
        app_handle,
        START_WINDOW_LABEL,
        WebviewUrl::App(START_DOCUMENT.into()),
    )
    .title(START_WINDOW_TITLE)
    .inner_size(START_WINDOW_WIDTH, START_WINDOW_HEIGHT)
    .min_inner_size(START_WINDOW_WIDTH, START_WINDOW_HEIGHT)
    .max_inner_size(START_WINDOW_WIDTH, START_WINDOW_HEIGHT)
    .resizable(false)
    .decorations(false)
    .transparent(true)
    .skip_taskbar(false)
    .visible(false)
    .center()
    .initialization_script(bootstrap_script.as_str())
    .build()
    .map_err(|error| format!("Failed to create the start window: {error}"))?;

    app_handle.state::<ShellState>().store_start_window(window);
    log(&format!(
        "start window created hidden, loading {START_DOCUMENT}"
    ));
    Ok(())
}

pub(crate) fn reveal_start_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    let state = app_handle.state::<ShellState>();
    let Some(window) = state.start_window() else {
        log("reveal skipped: start window handle is missing");
        return;
    };

    match window.show() {
        Ok(()) => log("start window revealed after initial content load"),
        Err(error) => log(&format!("Failed to show the start window: {error}")),
    }
}

/// Matches page-load events against the bundled start document, whichever
/// app-URL scheme the platform webview serves it from.
pub(crate) fn is_start_document(url: &Url) -> bool {
    url.path().trim_start_matches('/') == START_DOCUMENT
}
