/// Registration queue for assets and audio, filled by the game before a
/// load starts and drained by the loader at construction.
///
/// Entries are ordered but never reordered or prioritized; the loader
/// dispatches them all at once.
#[derive(Debug, Default)]
pub struct AssetQueue {
    assets: Vec<String>,
    audio: Vec<String>,
}

impl AssetQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an asset path (image, sprite sheet JSON, or bitmap font
    /// descriptor) for the next load.
    pub fn add(&mut self, path: impl Into<String>) {
        self.assets.push(path.into());
    }

    /// Register an audio reference for the next load.
    pub fn add_audio(&mut self, reference: impl Into<String>) {
        self.audio.push(reference.into());
    }

    /// Number of queued asset paths.
    pub fn asset_count(&self) -> usize {
        self.assets.len()
    }

    /// Number of queued audio references.
    pub fn audio_count(&self) -> usize {
        self.audio.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty() && self.audio.is_empty()
    }

    /// Take every queued asset path, leaving the queue empty.
    pub fn drain_assets(&mut self) -> Vec<String> {
        std::mem::take(&mut self.assets)
    }

    /// Take every queued audio reference, leaving the queue empty.
    pub fn drain_audio(&mut self) -> Vec<String> {
        std::mem::take(&mut self.audio)
    }
}
