use thiserror::Error;

/// Error types for configuration and Last.fm operations.
///
/// Retrieval failures are kept distinct from configuration problems so the
/// command layer can tell "the request failed" apart from "the user has no
/// qualifying artists": a failed run produces no artist list, but the cause
/// is reported instead of being silently swallowed.
#[derive(Error, Debug)]
pub enum LastFmError {
    /// Missing or unusable configuration, e.g. no username in either the
    /// command line or the config file.
    #[error("{0}")]
    Config(String),

    /// HTTP/network related errors.
    ///
    /// This includes connection failures, timeouts, DNS errors and non-2xx
    /// responses from the service.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The service answered, but with a non-ok status.
    ///
    /// Carries the error code and message from the response's `<error>`
    /// element when present.
    #[error("Last.fm error {code}: {message}")]
    Api { code: u32, message: String },

    /// The response body could not be parsed as a Last.fm XML document.
    #[error("Parse error: {0}")]
    Parse(String),
}
