//! Transport and endpoint errors, rendered as user-facing messages

const FAILURE_PREFIX: &str = "Failed to submit data to the remote endpoint.";

/// Error submitting a request to a remote endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// Endpoint URL missing or unparseable
    InvalidUrl(String),
    /// Request exceeded the configured timeout
    Timeout,
    /// Endpoint could not be reached
    Network(String),
    /// Endpoint answered with a non-success HTTP status
    Status { status: u16, message: String },
    /// Endpoint answered successfully but reported failure (or an empty payload)
    Rejected(String),
}

impl SubmitError {
    /// Classify a reqwest failure
    pub fn from_reqwest(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            SubmitError::Timeout
        } else if let Some(status) = err.status() {
            SubmitError::Status {
                status: status.as_u16(),
                message: format!("Request failed with status code {}", status.as_u16()),
            }
        } else {
            SubmitError::Network(err.to_string())
        }
    }

    /// Build a status error, preferring the `message` field of a JSON error body
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|json| json.get("message").and_then(|m| m.as_str()).map(str::to_string))
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| format!("Request failed with status code {}", status));

        SubmitError::Status { status, message }
    }
}

impl std::fmt::Display for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmitError::InvalidUrl(url) if url.is_empty() => {
                write!(f, "Please enter the endpoint URL")
            }
            SubmitError::InvalidUrl(url) => {
                write!(f, "Please enter a valid endpoint URL (got '{}')", url)
            }
            SubmitError::Timeout => write!(
                f,
                "{} Request timed out. Please check your network connection.",
                FAILURE_PREFIX
            ),
            // Transport detail is logged at the call site, not shown
            SubmitError::Network(_) => write!(
                f,
                "{} Network error. Please check if the endpoint URL is correct.",
                FAILURE_PREFIX
            ),
            SubmitError::Status { message, .. } => write!(f, "{} {}", FAILURE_PREFIX, message),
            SubmitError::Rejected(message) => {
                write!(f, "Endpoint returned an error: {}", message)
            }
        }
    }
}

impl std::error::Error for SubmitError {}
