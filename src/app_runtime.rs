use tauri::{webview::PageLoadEvent, Manager, RunEvent, WindowEvent};

use crate::{
    append_desktop_log, append_startup_log, exit_events,
    lifecycle::{LifecycleSignal, ShellEffect},
    logging, runtime_paths, start_window, ShellState, DESKTOP_LOG_FILE, START_WINDOW_LABEL,
};

pub(crate) fn run() {
    append_startup_log("desktop process starting");
    append_startup_log(&format!(
        "desktop log path: {}",
        logging::resolve_desktop_log_path(
            runtime_paths::default_shell_root_dir(),
            DESKTOP_LOG_FILE,
        )
        .display()
    ));

    tauri::Builder::default()
        .plugin(tauri_plugin_single_instance::init(|app_handle, _argv, _cwd| {
            append_desktop_log("second launch detected, focusing the existing start window");
            let Some(window) = app_handle.get_webview_window(START_WINDOW_LABEL) else {
                return;
            };
            // A hidden window stays hidden: the reveal is gated on the
            // content-ready signal alone.
            if window.is_visible().unwrap_or(false) {
                if let Err(error) = window.set_focus() {
                    append_desktop_log(&format!("failed to focus the start window: {error}"));
                }
            }
        }))
        .manage(ShellState::default())
        .invoke_handler(tauri::generate_handler![
            crate::shell_bridge_commands::shell_bridge_is_desktop_runtime,
            crate::shell_bridge_commands::shell_bridge_shell_info,
            crate::shell_bridge_commands::shell_bridge_open_external_url,
        ])
        .on_window_event(|window, event| {
            if window.label() != START_WINDOW_LABEL {
                return;
            }

            if let WindowEvent::Destroyed = event {
                append_desktop_log("start window closed");
            }
        })
        .on_page_load(|webview, payload| match payload.event() {
            PageLoadEvent::Started => {
                append_desktop_log(&format!("page-load started: {}", payload.url()));
            }
            PageLoadEvent::Finished => {
                append_desktop_log(&format!("page-load finished: {}", payload.url()));
                if webview.window().label() != START_WINDOW_LABEL
                    || !start_window::is_start_document(payload.url())
                {
                    return;
                }

                let app_handle = webview.app_handle();
                let state = app_handle.state::<ShellState>();
                if state.advance(LifecycleSignal::ContentReady) == ShellEffect::RevealStartWindow {
                    start_window::reveal_start_window(app_handle, append_desktop_log);
                }
            }
        })
        .setup(|app| {
            let app_handle = app.handle().clone();
            let state = app_handle.state::<ShellState>();
            if state.advance(LifecycleSignal::RuntimeReady) == ShellEffect::CreateStartWindow {
                append_startup_log("starting the Ravbite Editor");
                start_window::create_start_window(&app_handle, append_startup_log)?;
            }
            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|app_handle, event| match event {
            RunEvent::ExitRequested { code: None, .. } => {
                exit_events::handle_all_windows_closed(app_handle);
            }
            RunEvent::Exit => {
                exit_events::handle_exit();
            }
            _ => {}
        });
}
