use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use ember_core::DisplayProfile;
use serde_json::Value;

use crate::error::AssetError;
use crate::fetch::AssetFetch;
use crate::font::BitmapFont;
use crate::store::AssetStore;
use crate::texture::TextureAsset;

/// In-flight audio load for one reference.
pub type AudioLoadFuture = Pin<Box<dyn Future<Output = Result<(), AssetError>> + Send>>;

/// Audio subsystem collaborator. Fetching, decoding, and registering the
/// sound are the subsystem's own concern; the loader only awaits the
/// outcome and counts it toward progress.
pub trait AudioService: Send + Sync + 'static {
    fn load(&self, reference: &str) -> AudioLoadFuture;
}

/// Scene-switch collaborator, driven only in scene mode.
pub trait SceneDirector: Send {
    /// Stop running animations and tear down the current stage so the
    /// loading screen owns the display.
    fn reset_stage(&mut self);

    /// Make the named scene active.
    fn activate(&mut self, target: &str);
}

/// Per-frame render collaborator for the loader's own stage.
pub trait StageRenderer: Send {
    fn render(&mut self, stage: &LoadingStage);
}

/// Handle to the loader's visual stage. Holds the percentage the renderer
/// displays; constructed fresh for every scene-mode load.
#[derive(Debug)]
pub struct LoadingStage {
    percent: u8,
}

impl LoadingStage {
    pub(crate) fn new() -> Self {
        Self { percent: 0 }
    }

    pub fn percent(&self) -> u8 {
        self.percent
    }

    pub(crate) fn set_percent(&mut self, percent: u8) {
        self.percent = percent;
    }
}

/// Timing of the scene-mode loading screen.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Minimum time the loading screen stays visible. Not used in dynamic
    /// mode.
    pub min_display: Duration,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            min_display: Duration::from_millis(200),
        }
    }
}

/// Everything the loader needs from the surrounding engine, passed in
/// explicitly at construction. The stores are shared handles the loader
/// writes into; it never owns them.
pub struct LoaderContext {
    pub fetch: Arc<dyn AssetFetch>,
    pub audio: Option<Arc<dyn AudioService>>,
    pub textures: Arc<AssetStore<TextureAsset>>,
    pub fonts: Arc<AssetStore<BitmapFont>>,
    pub metadata: Arc<AssetStore<Value>>,
    pub scenes: Option<Box<dyn SceneDirector>>,
    pub renderer: Option<Box<dyn StageRenderer>>,
    /// Observer notified with each new percentage.
    pub on_progress: Option<Box<dyn FnMut(u8) + Send>>,
    pub display: DisplayProfile,
    pub config: LoaderConfig,
}

impl LoaderContext {
    /// A context with fresh stores and default settings over the given
    /// fetch backend.
    pub fn new(fetch: Arc<dyn AssetFetch>) -> Self {
        Self {
            fetch,
            audio: None,
            textures: Arc::new(AssetStore::new()),
            fonts: Arc::new(AssetStore::new()),
            metadata: Arc::new(AssetStore::new()),
            scenes: None,
            renderer: None,
            on_progress: None,
            display: DisplayProfile::default(),
            config: LoaderConfig::default(),
        }
    }
}
