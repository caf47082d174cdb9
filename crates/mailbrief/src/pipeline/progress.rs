use std::fmt;

use tracing::{debug, info, warn};

/// Coarse phase of a batch run: `Clearing`, then `Analyzing` (with an
/// optional `Fallback`) per email, then `Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessPhase {
    Clearing,
    Analyzing,
    Fallback,
    Done,
}

impl fmt::Display for ProcessPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProcessPhase::Clearing => "clearing",
            ProcessPhase::Analyzing => "analyzing",
            ProcessPhase::Fallback => "fallback",
            ProcessPhase::Done => "done",
        };
        f.write_str(name)
    }
}

/// Events emitted by the pipeline during a batch run.
/// `index` is the zero-based position in the source list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    Clearing,
    Cleared { removed: u64 },
    Analyzing { index: usize, total: usize },
    Fallback { index: usize, reason: String },
    Stored { index: usize, id: i32 },
    Skipped { index: usize, error: String },
    Done { count: usize, total: usize },
}

impl ProgressEvent {
    pub fn phase(&self) -> ProcessPhase {
        match self {
            ProgressEvent::Clearing | ProgressEvent::Cleared { .. } => ProcessPhase::Clearing,
            ProgressEvent::Analyzing { .. }
            | ProgressEvent::Stored { .. }
            | ProgressEvent::Skipped { .. } => ProcessPhase::Analyzing,
            ProgressEvent::Fallback { .. } => ProcessPhase::Fallback,
            ProgressEvent::Done { .. } => ProcessPhase::Done,
        }
    }
}

pub trait ProgressReporter: Send + Sync {
    fn report(&self, event: ProgressEvent);
}

/// No-op reporter for unit tests.
pub struct NoopProgress;

impl ProgressReporter for NoopProgress {
    fn report(&self, _event: ProgressEvent) {}
}

/// Forwards progress events to the tracing subscriber.
pub struct TracingProgress;

impl ProgressReporter for TracingProgress {
    fn report(&self, event: ProgressEvent) {
        let phase = event.phase();
        match event {
            ProgressEvent::Clearing => debug!(%phase, "Clearing stored emails"),
            ProgressEvent::Cleared { removed } => info!(%phase, removed, "Cleared stored emails"),
            ProgressEvent::Analyzing { index, total } => {
                debug!(%phase, "Analyzing email {}/{}", index + 1, total)
            }
            ProgressEvent::Fallback { index, reason } => {
                warn!(%phase, index, %reason, "Falling back to heuristic analysis")
            }
            ProgressEvent::Stored { index, id } => debug!(%phase, index, id, "Stored email"),
            ProgressEvent::Skipped { index, error } => {
                warn!(%phase, index, %error, "Skipped email")
            }
            ProgressEvent::Done { count, total } => {
                info!(%phase, count, total, "Processed {} of {} emails", count, total)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_phases() {
        assert_eq!(ProgressEvent::Clearing.phase(), ProcessPhase::Clearing);
        assert_eq!(
            ProgressEvent::Cleared { removed: 3 }.phase(),
            ProcessPhase::Clearing
        );
        assert_eq!(
            ProgressEvent::Analyzing { index: 0, total: 1 }.phase(),
            ProcessPhase::Analyzing
        );
        assert_eq!(
            ProgressEvent::Fallback {
                index: 0,
                reason: "timeout".to_string()
            }
            .phase(),
            ProcessPhase::Fallback
        );
        assert_eq!(
            ProgressEvent::Done { count: 1, total: 1 }.phase(),
            ProcessPhase::Done
        );
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(ProcessPhase::Fallback.to_string(), "fallback");
    }
}
