//! Console error type.
//!
//! DESIGN
//! ======
//! Every failure is terminal to the action that triggered it. Callers turn
//! errors into a notification banner and, for submissions, an error panel;
//! the console itself stays usable.

/// Errors produced by console operations.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// Neither a file nor non-blank text was provided.
    #[error("Please provide either a file or text input.")]
    InputMissing,

    /// A submission is already in flight.
    #[error("A submission is already in progress.")]
    Busy,

    /// The backend answered with a non-success HTTP status.
    #[error("HTTP {status}: {reason}")]
    Transport { status: u16, reason: String },

    /// The request never produced a response (connection refused, DNS, ...).
    #[error("{0}")]
    Request(String),

    /// The request deadline elapsed before a response arrived.
    #[error("request timed out")]
    Timeout,

    /// The backend answered 2xx but flagged the operation as failed.
    #[error("{0}")]
    Application(String),

    /// The response body could not be decoded.
    #[error("invalid response body: {0}")]
    Parse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// A template failed to render.
    #[error("template render failed: {0}")]
    Template(String),
}

impl ConsoleError {
    /// Map a reqwest failure onto the transport-level variants.
    #[must_use]
    pub fn from_reqwest(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            return Self::Timeout;
        }
        if let Some(status) = err.status() {
            return Self::transport(status);
        }
        if err.is_decode() {
            return Self::Parse(err.to_string());
        }
        Self::Request(err.to_string())
    }

    /// Build a `Transport` error from a status code, using the canonical
    /// reason phrase as the status text.
    #[must_use]
    pub fn transport(status: reqwest::StatusCode) -> Self {
        Self::Transport {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_owned(),
        }
    }

    /// Whether the error blocked the submission before any request was made.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::InputMissing | Self::Busy)
    }
}

impl From<handlebars::RenderError> for ConsoleError {
    fn from(err: handlebars::RenderError) -> Self {
        Self::Template(err.to_string())
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
