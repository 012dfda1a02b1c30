use serde::{Deserialize, Serialize};

/// Payload for one watch-time report
///
/// Transmitted to the tracking endpoint as form-encoded fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchReport {
    pub video_id: String,
    pub video_duration: u32,
    pub seconds_viewed: u32,
}

impl WatchReport {
    /// Field pairs in the shape the tracking endpoint expects
    pub fn form_fields(&self) -> [(&'static str, String); 3] {
        [
            ("video_id", self.video_id.clone()),
            ("video_duration", self.video_duration.to_string()),
            ("seconds_viewed", self.seconds_viewed.to_string()),
        ]
    }
}
