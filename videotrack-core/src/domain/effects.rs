use crate::domain::WatchReport;

/// Side effects the embedding layer must apply after a state-machine step
///
/// The session itself owns no timers, DOM state, or network handles; it only
/// describes what should happen next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchEffect {
    /// Mark navigation elements disabled and suppress their clicks
    LockNavigation,
    /// Re-enable navigation elements
    UnlockNavigation,
    /// Arm the repeating report timer, replacing any previous one
    ArmReportTimer,
    /// Cancel the repeating report timer
    DisarmReportTimer,
    /// Transmit a watch-time report
    SubmitReport(WatchReport),
    /// Stop video playback
    StopPlayback,
}
