use tauri::{AppHandle, Manager};

use crate::{
    append_shutdown_log,
    lifecycle::{LifecycleSignal, ShellEffect},
    ShellState,
};

/// The runtime raises a code-less exit request when the user closes the
/// last window. Termination is unconditional; this only records it.
pub(crate) fn handle_all_windows_closed(app_handle: &AppHandle) {
    let state = app_handle.state::<ShellState>();
    if state.advance(LifecycleSignal::AllWindowsClosed) == ShellEffect::TerminateProcess {
        append_shutdown_log("all windows closed, exiting desktop process");
    }
}

pub(crate) fn handle_exit() {
    append_shutdown_log("desktop process exited");
}
