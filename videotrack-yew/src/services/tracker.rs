use gloo_net::http::Request;
use videotrack_core::WatchReport;
use web_sys::UrlSearchParams;

/// Errors that can occur while submitting a watch report
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    #[error("Failed to encode report: {0}")]
    Encode(String),

    #[error("Request failed: {0}")]
    Transport(#[from] gloo_net::Error),

    #[error("Tracking endpoint returned status {0}")]
    Status(u16),
}

/// Client for the watch-time tracking endpoint
#[derive(Debug, Clone)]
pub struct TrackerClient {
    endpoint: String,
}

impl TrackerClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        TrackerClient {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST one report, form-encoded; success is the HTTP status
    pub async fn submit(&self, report: &WatchReport) -> Result<(), TrackerError> {
        let params =
            UrlSearchParams::new().map_err(|err| TrackerError::Encode(format!("{err:?}")))?;
        for (name, value) in report.form_fields() {
            params.append(name, &value);
        }

        tracing::debug!(
            video_id = %report.video_id,
            seconds_viewed = report.seconds_viewed,
            "submitting watch report"
        );

        // URLSearchParams as the fetch body carries the form content type
        let response = Request::post(&self.endpoint).body(params)?.send().await?;

        if !response.ok() {
            return Err(TrackerError::Status(response.status()));
        }

        Ok(())
    }
}
