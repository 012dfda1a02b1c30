use serde::{Deserialize, Serialize};
use std::fmt;

/// Player states reported by the IFrame API state-change callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerState {
    /// Player created but playback has not begun, or the video was stopped
    Unstarted,
    /// Playback reached the end of the video
    Ended,
    /// Video is actively playing
    Playing,
    /// Playback paused by the viewer
    Paused,
    /// Player is buffering
    Buffering,
    /// A video is cued and ready to play
    Cued,
}

impl PlayerState {
    /// Map a raw API state code; unknown codes read as Unstarted
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => PlayerState::Ended,
            1 => PlayerState::Playing,
            2 => PlayerState::Paused,
            3 => PlayerState::Buffering,
            5 => PlayerState::Cued,
            _ => PlayerState::Unstarted,
        }
    }

    /// The raw code the IFrame API uses for this state
    pub fn code(&self) -> i32 {
        match self {
            PlayerState::Unstarted => -1,
            PlayerState::Ended => 0,
            PlayerState::Playing => 1,
            PlayerState::Paused => 2,
            PlayerState::Buffering => 3,
            PlayerState::Cued => 5,
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, PlayerState::Playing)
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        PlayerState::Unstarted
    }
}

impl fmt::Display for PlayerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerState::Unstarted => write!(f, "Unstarted"),
            PlayerState::Ended => write!(f, "Ended"),
            PlayerState::Playing => write!(f, "Playing"),
            PlayerState::Paused => write!(f, "Paused"),
            PlayerState::Buffering => write!(f, "Buffering"),
            PlayerState::Cued => write!(f, "Cued"),
        }
    }
}

/// Errors that can occur when capturing video metadata
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum MetadataError {
    #[error("Video id cannot be empty")]
    EmptyVideoId,

    #[error("Video duration must be at least one second")]
    InvalidDuration,
}

/// Video identity and duration, captured once the player signals ready
///
/// The tracking endpoint rejects reports with an empty video id or a duration
/// below one second, so the same rules apply here at capture time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoMetadata {
    video_id: String,
    duration: f64,
}

impl VideoMetadata {
    pub fn new(video_id: impl Into<String>, duration: f64) -> Result<Self, MetadataError> {
        let video_id = video_id.into();

        if video_id.is_empty() {
            return Err(MetadataError::EmptyVideoId);
        }

        if !duration.is_finite() || duration < 1.0 {
            return Err(MetadataError::InvalidDuration);
        }

        Ok(VideoMetadata { video_id, duration })
    }

    pub fn video_id(&self) -> &str {
        &self.video_id
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Duration rounded to whole seconds, as the tracking endpoint expects
    pub fn rounded_duration(&self) -> u32 {
        self.duration.round() as u32
    }
}
