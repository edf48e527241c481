use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{runtime_paths, DESKTOP_LOG_FILE};

pub(crate) fn resolve_desktop_log_path(root_dir: Option<PathBuf>, file_name: &str) -> PathBuf {
    match root_dir {
        Some(root) => root.join("logs").join(file_name),
        None => std::env::temp_dir().join("ravbite-editor").join(file_name),
    }
}

fn write_line(log_path: &Path, line: &str) -> std::io::Result<()> {
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = OpenOptions::new().create(true).append(true).open(log_path)?;
    writeln!(file, "{line}")
}

fn append_line(tag: &str, message: &str) {
    let line = format!(
        "[{}] [{}] {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
        tag,
        message
    );

    let log_path =
        resolve_desktop_log_path(runtime_paths::default_shell_root_dir(), DESKTOP_LOG_FILE);
    if write_line(&log_path, &line).is_err() {
        eprintln!("{line}");
    }
}

pub(crate) fn append_startup_log(message: &str) {
    append_line("startup", message);
}

pub(crate) fn append_desktop_log(message: &str) {
    append_line("desktop", message);
}

pub(crate) fn append_shutdown_log(message: &str) {
    append_line("shutdown", message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_desktop_log_path_places_the_log_under_the_root_logs_dir() {
        let path = resolve_desktop_log_path(Some(PathBuf::from("/opt/ravbite")), "desktop.log");
        assert_eq!(path, PathBuf::from("/opt/ravbite/logs/desktop.log"));
    }

    #[test]
    fn resolve_desktop_log_path_falls_back_to_the_temp_dir_without_a_root() {
        let path = resolve_desktop_log_path(None, "desktop.log");
        assert!(path.starts_with(std::env::temp_dir()));
        assert!(path.ends_with("ravbite-editor/desktop.log"));
    }

    #[test]
    fn write_line_creates_parent_directories_and_appends() {
        let temp = tempfile::tempdir().expect("temp dir");
        let log_path = temp.path().join("logs").join("desktop.log");

        write_line(&log_path, "first").expect("first write");
        write_line(&log_path, "second").expect("second write");

        let contents = fs::read_to_string(&log_path).expect("read log");
        assert_eq!(contents, "first\nsecond\n");
    }
}
