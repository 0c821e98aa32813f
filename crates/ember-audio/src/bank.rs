use std::collections::HashMap;
use std::io::Cursor;
use std::sync::Arc;

use kira::sound::static_sound::StaticSoundData;
use parking_lot::RwLock;
use tracing::debug;

use ember_assets::{AssetError, AssetFetch, AudioLoadFuture, AudioService};

/// Shared bank of decoded sounds, keyed by the reference they were queued
/// under. The asset loader fills it through the [`AudioService`]
/// contract; playback reads from it.
pub struct SoundBank {
    fetch: Arc<dyn AssetFetch>,
    sounds: Arc<RwLock<HashMap<String, StaticSoundData>>>,
}

impl SoundBank {
    pub fn new(fetch: Arc<dyn AssetFetch>) -> Self {
        Self {
            fetch,
            sounds: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Decoded sound data for a loaded reference.
    pub fn get(&self, reference: &str) -> Option<StaticSoundData> {
        self.sounds.read().get(reference).cloned()
    }

    pub fn contains(&self, reference: &str) -> bool {
        self.sounds.read().contains_key(reference)
    }

    pub fn len(&self) -> usize {
        self.sounds.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sounds.read().is_empty()
    }
}

impl AudioService for SoundBank {
    fn load(&self, reference: &str) -> AudioLoadFuture {
        let fetch = Arc::clone(&self.fetch);
        let sounds = Arc::clone(&self.sounds);
        let reference = reference.to_string();

        Box::pin(async move {
            let bytes = fetch.fetch(&reference).await?;
            if bytes.is_empty() {
                return Err(AssetError::EmptyResponse(reference));
            }

            // Decoding is CPU-bound; keep it off the async workers.
            let decoded = tokio::task::spawn_blocking(move || {
                StaticSoundData::from_cursor(Cursor::new(bytes))
            })
            .await
            .map_err(|e| AssetError::Audio(reference.clone(), e.to_string()))?
            .map_err(|e| AssetError::Audio(reference.clone(), e.to_string()))?;

            debug!(reference = %reference, "sound decoded");
            sounds.write().insert(reference, decoded);
            Ok(())
        })
    }
}
