use crate::config::SessionTiming;

/// Where a remaining lifetime falls relative to the configured windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// More than the warning window left.
    Normal,
    /// Inside the warning window, above the cutoff.
    Warning,
    /// Between zero and the cutoff, both inclusive.
    ExpiryImminent,
    /// Past `exp`.
    Dead,
}

/// Classifies `time_left_ms` against `timing`.
///
/// ```rust
/// use grc_session::config::SessionTiming;
/// use grc_session::session::{SessionPhase, classify};
///
/// let timing = SessionTiming::default();
/// assert_eq!(classify(65_001, &timing), SessionPhase::Normal);
/// assert_eq!(classify(65_000, &timing), SessionPhase::Warning);
/// assert_eq!(classify(4_000, &timing), SessionPhase::ExpiryImminent);
/// assert_eq!(classify(-1, &timing), SessionPhase::Dead);
/// ```
pub fn classify(time_left_ms: i64, timing: &SessionTiming) -> SessionPhase {
    if time_left_ms < 0 {
        SessionPhase::Dead
    } else if time_left_ms <= timing.expiry_cutoff_ms() {
        SessionPhase::ExpiryImminent
    } else if time_left_ms <= timing.warning_window_ms() {
        SessionPhase::Warning
    } else {
        SessionPhase::Normal
    }
}

/// What the session monitor currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No decodable token; nothing to monitor.
    #[default]
    Inactive,
    /// No indicator.
    Normal,
    /// Actionable warning: extend the session or log out.
    Warning { time_left_ms: i64 },
    /// Blocking "session expired" indicator.
    Expired,
    /// The session ended, manually or by expiry.
    LoggedOut,
}

impl SessionState {
    /// The display state for a phase.
    ///
    /// A dead token keeps the blocking indicator up until the forced logout
    /// runs on the next tick.
    pub fn from_phase(phase: SessionPhase, time_left_ms: i64) -> Self {
        match phase {
            SessionPhase::Normal => Self::Normal,
            SessionPhase::Warning => Self::Warning { time_left_ms },
            SessionPhase::ExpiryImminent | SessionPhase::Dead => Self::Expired,
        }
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, Self::Warning { .. })
    }

    /// True while a token is held, whatever its remaining lifetime.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Normal | Self::Warning { .. } | Self::Expired)
    }
}

/// Whether the poll loop keeps running after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Stop,
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    #[test]
    fn test_classify_boundaries() {
        let timing = SessionTiming::default();

        assert_eq!(classify(i64::MAX, &timing), SessionPhase::Normal);
        assert_eq!(classify(65_001, &timing), SessionPhase::Normal);
        assert_eq!(classify(65_000, &timing), SessionPhase::Warning);
        assert_eq!(classify(4_001, &timing), SessionPhase::Warning);
        assert_eq!(classify(4_000, &timing), SessionPhase::ExpiryImminent);
        assert_eq!(classify(0, &timing), SessionPhase::ExpiryImminent);
        assert_eq!(classify(-1, &timing), SessionPhase::Dead);
        assert_eq!(classify(i64::MIN, &timing), SessionPhase::Dead);
    }

    #[test]
    fn test_classify_follows_tuned_windows() {
        let timing = SessionTiming {
            warning_window: Duration::seconds(120),
            expiry_cutoff: Duration::seconds(10),
            ..Default::default()
        };

        assert_eq!(classify(100_000, &timing), SessionPhase::Warning);
        assert_eq!(classify(9_000, &timing), SessionPhase::ExpiryImminent);
        assert_eq!(classify(121_000, &timing), SessionPhase::Normal);
    }

    #[test]
    fn test_state_from_phase() {
        assert_eq!(
            SessionState::from_phase(SessionPhase::Warning, 30_000),
            SessionState::Warning { time_left_ms: 30_000 }
        );
        assert_eq!(
            SessionState::from_phase(SessionPhase::ExpiryImminent, 2_000),
            SessionState::Expired
        );
        assert_eq!(SessionState::from_phase(SessionPhase::Dead, -5), SessionState::Expired);
        assert_eq!(SessionState::from_phase(SessionPhase::Normal, 90_000), SessionState::Normal);
    }

    #[test]
    fn test_state_predicates() {
        assert!(SessionState::Warning { time_left_ms: 1 }.is_warning());
        assert!(SessionState::Expired.is_active());
        assert!(!SessionState::Inactive.is_active());
        assert!(!SessionState::LoggedOut.is_active());
    }
}
