//! The host runtime delivers a small, fixed set of lifecycle signals. The
//! shell's reaction to each is a pure function of its current phase, so the
//! event wiring stays free of hidden callback state.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LifecycleSignal {
    RuntimeReady,
    ContentReady,
    AllWindowsClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ShellPhase {
    AwaitingRuntime,
    WindowHidden,
    WindowRevealed,
    Terminating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ShellEffect {
    CreateStartWindow,
    RevealStartWindow,
    TerminateProcess,
    Ignore,
}

/// Duplicate or out-of-order signals fall through to `Ignore`; the reveal
/// in particular fires at most once per process even if the start document
/// reloads later.
pub(crate) fn advance(phase: ShellPhase, signal: LifecycleSignal) -> (ShellPhase, ShellEffect) {
    match (phase, signal) {
        (ShellPhase::AwaitingRuntime, LifecycleSignal::RuntimeReady) => {
            (ShellPhase::WindowHidden, ShellEffect::CreateStartWindow)
        }
        (ShellPhase::WindowHidden, LifecycleSignal::ContentReady) => {
            (ShellPhase::WindowRevealed, ShellEffect::RevealStartWindow)
        }
        (_, LifecycleSignal::AllWindowsClosed) => {
            (ShellPhase::Terminating, ShellEffect::TerminateProcess)
        }
        (phase, _) => (phase, ShellEffect::Ignore),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_ready_creates_the_start_window_once() {
        let (phase, effect) = advance(ShellPhase::AwaitingRuntime, LifecycleSignal::RuntimeReady);
        assert_eq!(phase, ShellPhase::WindowHidden);
        assert_eq!(effect, ShellEffect::CreateStartWindow);

        let (phase, effect) = advance(phase, LifecycleSignal::RuntimeReady);
        assert_eq!(phase, ShellPhase::WindowHidden);
        assert_eq!(effect, ShellEffect::Ignore);
    }

    #[test]
    fn content_ready_reveals_the_hidden_window() {
        let (phase, effect) = advance(ShellPhase::WindowHidden, LifecycleSignal::ContentReady);
        assert_eq!(phase, ShellPhase::WindowRevealed);
        assert_eq!(effect, ShellEffect::RevealStartWindow);
    }

    #[test]
    fn content_ready_never_reveals_twice() {
        let (phase, effect) = advance(ShellPhase::WindowRevealed, LifecycleSignal::ContentReady);
        assert_eq!(phase, ShellPhase::WindowRevealed);
        assert_eq!(effect, ShellEffect::Ignore);
    }

    #[test]
    fn content_ready_before_runtime_ready_is_dropped() {
        let (phase, effect) = advance(ShellPhase::AwaitingRuntime, LifecycleSignal::ContentReady);
        assert_eq!(phase, ShellPhase::AwaitingRuntime);
        assert_eq!(effect, ShellEffect::Ignore);
    }

    #[test]
    fn all_windows_closed_terminates_from_every_phase() {
        for phase in [
            ShellPhase::AwaitingRuntime,
            ShellPhase::WindowHidden,
            ShellPhase::WindowRevealed,
            ShellPhase::Terminating,
        ] {
            let (next, effect) = advance(phase, LifecycleSignal::AllWindowsClosed);
            assert_eq!(next, ShellPhase::Terminating);
            assert_eq!(effect, ShellEffect::TerminateProcess);
        }
    }
}
