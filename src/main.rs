#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app_constants;
mod app_runtime;
mod exit_events;
mod installer_sentinel;
mod lifecycle;
mod logging;
mod runtime_paths;
mod shell_bridge_commands;
mod shell_state;
mod start_window;

pub(crate) use app_constants::*;
pub(crate) use logging::{append_desktop_log, append_shutdown_log, append_startup_log};
pub(crate) use shell_state::{ShellBridgeResult, ShellInfo, ShellState};

fn main() {
    // Installer maintenance launches must finish silently, before any
    // window or log output exists.
    if installer_sentinel::current_launch_kind()
        == installer_sentinel::LaunchKind::InstallerMaintenance
    {
        return;
    }

    app_runtime::run();
}
