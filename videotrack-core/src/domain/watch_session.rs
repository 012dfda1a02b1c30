use crate::domain::{
    MetadataError, PlayerState, Segment, Timestamp, VideoMetadata, WatchEffect, WatchReport,
};

/// Errors that can occur while driving a watch session
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum WatchError {
    #[error(transparent)]
    Metadata(#[from] MetadataError),

    #[error("Video metadata already captured")]
    MetadataAlreadySet,
}

/// Per-page-view watch state machine
///
/// Tracks the open viewing segment and the last player state observed from
/// the state-change callback. Owns no browser resources; transitions return
/// [`WatchEffect`]s for the embedding layer to apply.
///
/// Invariants:
/// - the report timer is armed from the transition into `Playing` until a
///   pause/end transition or a report failure disarms it,
/// - a segment is open iff viewing is being accumulated (playing, or a
///   report for the closed span is still in flight).
#[derive(Debug)]
pub struct WatchSession {
    participant_id: String,
    metadata: Option<VideoMetadata>,
    segment: Option<Segment>,
    player_state: PlayerState,
    timer_armed: bool,
}

impl WatchSession {
    pub fn new(participant_id: impl Into<String>) -> Self {
        WatchSession {
            participant_id: participant_id.into(),
            metadata: None,
            segment: None,
            player_state: PlayerState::default(),
            timer_armed: false,
        }
    }

    // Getters

    pub fn participant_id(&self) -> &str {
        &self.participant_id
    }

    pub fn metadata(&self) -> Option<&VideoMetadata> {
        self.metadata.as_ref()
    }

    pub fn player_state(&self) -> PlayerState {
        self.player_state
    }

    pub fn timer_armed(&self) -> bool {
        self.timer_armed
    }

    pub fn segment_open(&self) -> bool {
        self.segment.is_some()
    }

    /// True while the participant is actively watching a loaded video
    pub fn is_watching(&self) -> bool {
        self.metadata.is_some() && self.player_state.is_playing()
    }

    // Transitions

    /// Capture video identity and duration once the player signals ready
    pub fn video_loaded(&mut self, metadata: VideoMetadata) -> Result<(), WatchError> {
        if self.metadata.is_some() {
            return Err(WatchError::MetadataAlreadySet);
        }

        tracing::debug!(video_id = %metadata.video_id(), "video metadata captured");
        self.metadata = Some(metadata);
        Ok(())
    }

    /// Record a state transition from the player's state-change callback
    pub fn player_state_changed(&mut self, state: PlayerState) -> Vec<WatchEffect> {
        self.player_state = state;

        match state {
            PlayerState::Playing => {
                self.segment = Some(Segment::open_now());
                self.timer_armed = true;
                vec![WatchEffect::LockNavigation, WatchEffect::ArmReportTimer]
            }
            PlayerState::Paused | PlayerState::Ended => {
                self.timer_armed = false;
                let mut effects = vec![WatchEffect::DisarmReportTimer];
                if let Some(report) = self.build_report(Timestamp::now()) {
                    effects.push(WatchEffect::SubmitReport(report));
                }
                effects
            }
            // The player also announces buffering and cueing; neither opens
            // nor closes a segment.
            _ => Vec::new(),
        }
    }

    /// Timer tick: the report for the open span, if one is open
    pub fn report_due(&self) -> Option<WatchReport> {
        self.build_report(Timestamp::now())
    }

    fn build_report(&self, now: Timestamp) -> Option<WatchReport> {
        let segment = self.segment?;
        let metadata = self.metadata.as_ref()?;

        Some(WatchReport {
            video_id: metadata.video_id().to_string(),
            video_duration: metadata.rounded_duration(),
            seconds_viewed: segment.seconds_viewed(now),
        })
    }

    /// A report round-trip succeeded
    ///
    /// While still playing, the next span starts where the reported one
    /// ended; otherwise the segment closes and navigation is released.
    pub fn report_succeeded(&mut self) -> Vec<WatchEffect> {
        if self.player_state.is_playing() {
            self.segment = Some(Segment::open_now());
            Vec::new()
        } else {
            self.segment = None;
            vec![WatchEffect::UnlockNavigation]
        }
    }

    /// A report failed: terminal for the session, no retry
    pub fn report_failed(&mut self) -> Vec<WatchEffect> {
        tracing::warn!("watch report failed, stopping playback");
        self.segment = None;
        self.timer_armed = false;
        vec![WatchEffect::DisarmReportTimer, WatchEffect::StopPlayback]
    }

    #[cfg(test)]
    fn open_segment_at(&mut self, at: Timestamp) {
        self.segment = Some(Segment::open(at));
    }
}
