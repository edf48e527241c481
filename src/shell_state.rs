use std::sync::Mutex;

use serde::Serialize;
use tauri::WebviewWindow;

use crate::lifecycle::{self, LifecycleSignal, ShellEffect, ShellPhase};

/// Owner of the single start-window handle. The slot is empty before the
/// runtime-ready signal and written exactly once afterwards.
pub(crate) struct ShellState {
    phase: Mutex<ShellPhase>,
    start_window: Mutex<Option<WebviewWindow>>,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            phase: Mutex::new(ShellPhase::AwaitingRuntime),
            start_window: Mutex::new(None),
        }
    }
}

impl ShellState {
    pub(crate) fn advance(&self, signal: LifecycleSignal) -> ShellEffect {
        match self.phase.lock() {
            Ok(mut phase) => {
                let (next_phase, effect) = lifecycle::advance(*phase, signal);
                *phase = next_phase;
                effect
            }
            Err(_) => ShellEffect::Ignore,
        }
    }

    pub(crate) fn store_start_window(&self, window: WebviewWindow) {
        if let Ok(mut slot) = self.start_window.lock() {
            *slot = Some(window);
        }
    }

    pub(crate) fn start_window(&self) -> Option<WebviewWindow> {
        self.start_window.lock().ok().and_then(|slot| slot.clone())
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ShellBridgeResult {
    pub(crate) ok: bool,
    pub(crate) reason: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ShellInfo {
    pub(crate) product_name: String,
    pub(crate) shell_version: String,
}
