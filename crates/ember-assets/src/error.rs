/// Errors that can occur in the asset pipeline.
///
/// Loading has no retry or partial-result path: an error before dispatch
/// aborts the start, and an error inside a running parse chain abandons
/// that item, leaving the progress counter short of 100.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("unsupported file type '{0}'")]
    UnsupportedType(String),

    #[error("error loading file '{0}'")]
    EmptyResponse(String),

    #[error("failed to parse '{0}': {1}")]
    Parse(String, String),

    #[error("failed to decode image '{0}': {1}")]
    Decode(String, String),

    #[error("fetch failed for '{0}': {1}")]
    Fetch(String, String),

    #[error("failed to load audio '{0}': {1}")]
    Audio(String, String),

    #[error("loader misconfigured: {0}")]
    Config(String),

    #[error("loader already started")]
    AlreadyStarted,
}
