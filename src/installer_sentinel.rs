use std::env;

/// Squirrel-style maintenance flags passed by the platform installer when
/// it relaunches the shell for post-install or uninstall bookkeeping.
/// `--squirrel-firstrun` is a normal user launch and is deliberately not
/// listed here.
const INSTALLER_MAINTENANCE_FLAGS: [&str; 4] = [
    "--squirrel-install",
    "--squirrel-updated",
    "--squirrel-uninstall",
    "--squirrel-obsolete",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LaunchKind {
    InstallerMaintenance,
    Normal,
}

pub(crate) fn launch_kind_from_args<I>(args: I) -> LaunchKind
where
    I: IntoIterator<Item = String>,
{
    for arg in args {
        if INSTALLER_MAINTENANCE_FLAGS.contains(&arg.as_str()) {
            return LaunchKind::InstallerMaintenance;
        }
    }
    LaunchKind::Normal
}

pub(crate) fn current_launch_kind() -> LaunchKind {
    launch_kind_from_args(env::args().skip(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn launch_kind_from_args_flags_every_maintenance_event() {
        for flag in INSTALLER_MAINTENANCE_FLAGS {
            assert_eq!(
                launch_kind_from_args(args(&[flag, "1.0.0"])),
                LaunchKind::InstallerMaintenance,
                "{flag} should be treated as an installer maintenance launch"
            );
        }
    }

    #[test]
    fn launch_kind_from_args_recognizes_flags_at_any_position() {
        assert_eq!(
            launch_kind_from_args(args(&["--verbose", "--squirrel-uninstall", "1.0.0"])),
            LaunchKind::InstallerMaintenance
        );
    }

    #[test]
    fn launch_kind_from_args_treats_first_run_as_normal() {
        assert_eq!(
            launch_kind_from_args(args(&["--squirrel-firstrun"])),
            LaunchKind::Normal
        );
    }

    #[test]
    fn launch_kind_from_args_treats_plain_launches_as_normal() {
        assert_eq!(launch_kind_from_args(args(&[])), LaunchKind::Normal);
        assert_eq!(
            launch_kind_from_args(args(&["projects/demo.ravbite"])),
            LaunchKind::Normal
        );
    }
}
