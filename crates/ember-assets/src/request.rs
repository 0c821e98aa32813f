use crate::error::AssetError;
use crate::path::file_extension;

/// The parser a queued path is routed to, decided by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Image,
    Json,
    Font,
}

impl AssetKind {
    /// Resolve a path's extension through the static dispatch table.
    ///
    /// An extension outside the table is a configuration error, surfaced
    /// before any fetch is issued for the queue.
    pub fn from_path(path: &str) -> Result<Self, AssetError> {
        let ext = file_extension(path)
            .ok_or_else(|| AssetError::UnsupportedType(path.to_string()))?;
        match ext.as_str() {
            "png" | "jpg" | "jpeg" => Ok(Self::Image),
            "json" => Ok(Self::Json),
            "fnt" => Ok(Self::Font),
            _ => Err(AssetError::UnsupportedType(ext)),
        }
    }
}

/// One top-level entry of the load queue, immutable once built.
#[derive(Debug, Clone)]
pub struct LoadRequest {
    pub path: String,
    pub kind: AssetKind,
}

impl LoadRequest {
    pub fn new(path: impl Into<String>) -> Result<Self, AssetError> {
        let path = path.into();
        let kind = AssetKind::from_path(&path)?;
        Ok(Self { path, kind })
    }
}
