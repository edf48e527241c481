use std::process::{Command, Stdio};

use tauri::{AppHandle, Manager};
use url::Url;

use crate::{append_desktop_log, ShellBridgeResult, ShellInfo, START_WINDOW_TITLE};

fn parse_openable_url(raw_url: &str) -> Result<Url, String> {
    let trimmed = raw_url.trim();
    if trimmed.is_empty() {
        return Err("External URL is empty.".to_string());
    }

    let parsed = Url::parse(trimmed).map_err(|error| format!("Invalid external URL: {error}"))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(format!(
            "Refusing to open '{scheme}' URL, only http and https are allowed."
        )),
    }
}

#[cfg(target_os = "windows")]
const SYSTEM_OPENER: (&str, &[&str]) = ("rundll32", &["url.dll,FileProtocolHandler"]);
#[cfg(target_os = "macos")]
const SYSTEM_OPENER: (&str, &[&str]) = ("open", &[]);
#[cfg(all(unix, not(target_os = "macos")))]
const SYSTEM_OPENER: (&str, &[&str]) = ("xdg-open", &[]);

#[cfg(any(target_os = "macos", target_os = "windows", unix))]
fn open_url_with_system_browser(url: &str) -> Result<(), String> {
    let (program, leading_args) = SYSTEM_OPENER;
    Command::new(program)
        .args(leading_args)
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
        .map_err(|error| format!("Failed to launch '{program}': {error}"))
}

#[cfg(not(any(target_os = "macos", target_os = "windows", unix)))]
fn open_url_with_system_browser(_url: &str) -> Result<(), String> {
    Err("Opening external URLs is not supported on this platform.".to_string())
}

fn shell_info_for(app_handle: &AppHandle) -> ShellInfo {
    ShellInfo {
        product_name: START_WINDOW_TITLE.to_string(),
        shell_version: app_handle.package_info().version.to_string(),
    }
}

/// Injected into the start window at build time so the document can detect
/// the shell before the invoke bridge is touched.
pub(crate) fn shell_bootstrap_script(app_handle: &AppHandle) -> String {
    let info = shell_info_for(app_handle);
    let serialized = serde_json::to_string(&info).unwrap_or_else(|_| "{}".to_string());
    format!("window.__RAVBITE_SHELL__ = {serialized};")
}

#[tauri::command]
pub(crate) fn shell_bridge_is_desktop_runtime() -> bool {
    true
}

#[tauri::command]
pub(crate) fn shell_bridge_shell_info(app_handle: AppHandle) -> ShellInfo {
    shell_info_for(&app_handle)
}

#[tauri::command]
pub(crate) fn shell_bridge_open_external_url(raw_url: String) -> ShellBridgeResult {
    let open_result = parse_openable_url(&raw_url)
        .and_then(|parsed| open_url_with_system_browser(parsed.as_str()));

    match open_result {
        Ok(()) => ShellBridgeResult {
            ok: true,
            reason: None,
        },
        Err(reason) => {
            append_desktop_log(&format!("failed to open external URL: {reason}"));
            ShellBridgeResult {
                ok: false,
                reason: Some(reason),
            }
        }
    }
}
