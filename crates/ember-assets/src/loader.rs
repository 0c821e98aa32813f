use std::sync::mpsc;
use std::sync::Arc;
use std::time::{Duration, Instant};

use ember_core::{AssetQueue, DisplayProfile};
use tracing::{debug, error, info};

use crate::context::{LoaderContext, LoadingStage};
use crate::error::AssetError;
use crate::fetch::{fetch_text, AssetFetch};
use crate::font::{self, BitmapFont};
use crate::path::resolve_variant;
use crate::progress::ProgressTracker;
use crate::request::{AssetKind, LoadRequest};
use crate::sheet;
use crate::texture::{decode_texture, TextureAsset};

/// Floor on how long a finished loading screen keeps showing 100%.
const READY_HOLD: Duration = Duration::from_millis(100);

/// What happens when every item has loaded.
pub enum CompletionTarget {
    /// Silent background load; the callback fires once on completion.
    Callback(Box<dyn FnOnce() + Send>),
    /// Visual loading screen that switches to the named scene when done.
    Scene(String),
}

impl CompletionTarget {
    pub fn callback(f: impl FnOnce() + Send + 'static) -> Self {
        Self::Callback(Box::new(f))
    }

    pub fn scene(name: impl Into<String>) -> Self {
        Self::Scene(name.into())
    }
}

/// Operating mode, fixed when the loader starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderMode {
    Dynamic,
    Scene,
}

/// Lifecycle of one load operation. A loader runs through these states
/// once and is then discarded; there is no restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderState {
    Created,
    Started,
    Loading,
    Ready,
    Completed,
}

#[derive(Debug)]
struct TimingState {
    started_at: Instant,
    ready_at: Option<Instant>,
}

/// Output of one item's parse chain, applied to the stores on the driving
/// thread.
enum ItemPayload {
    Texture {
        key: String,
        texture: TextureAsset,
    },
    SpriteSheet {
        frames: Vec<(String, TextureAsset)>,
    },
    Font {
        face: String,
        font: BitmapFont,
    },
    Metadata {
        key: String,
        value: serde_json::Value,
    },
    Audio,
}

type ItemOutcome = Result<ItemPayload, AssetError>;

/// Asynchronous loader for a queue of mixed asset and audio references.
///
/// All items are dispatched at once; each runs its own parse chain on the
/// loader's runtime and reports exactly one outcome. The driving loop
/// calls [`Loader::tick`] to drain outcomes, apply them to the shared
/// stores, and advance the completion state machine.
pub struct Loader {
    state: LoaderState,
    mode: LoaderMode,
    target: Option<CompletionTarget>,
    assets: Vec<String>,
    audio: Vec<String>,
    progress: ProgressTracker,
    ctx: LoaderContext,
    runtime: tokio::runtime::Runtime,
    outcomes: Option<mpsc::Receiver<ItemOutcome>>,
    stage: Option<LoadingStage>,
    timing: Option<TimingState>,
}

impl Loader {
    /// Capture the queued work and set up the loader. The queue is fully
    /// drained; audio references are taken only when an audio service is
    /// attached.
    pub fn new(
        queue: &mut AssetQueue,
        target: CompletionTarget,
        ctx: LoaderContext,
    ) -> Result<Self, AssetError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .map_err(|e| AssetError::Config(format!("failed to create runtime: {e}")))?;

        let assets: Vec<String> = queue
            .drain_assets()
            .into_iter()
            .map(|p| resolve_variant(&p, &ctx.display))
            .collect();
        let audio = if ctx.audio.is_some() {
            queue.drain_audio()
        } else {
            Vec::new()
        };

        let progress = ProgressTracker::new(assets.len() + audio.len());

        Ok(Self {
            state: LoaderState::Created,
            mode: LoaderMode::Dynamic,
            target: Some(target),
            assets,
            audio,
            progress,
            ctx,
            runtime,
            outcomes: None,
            stage: None,
            timing: None,
        })
    }

    /// Start the load. Fixes the operating mode, verifies every queued
    /// path against the dispatch table, and fans out one task per item.
    pub fn start(&mut self, now: Instant) -> Result<(), AssetError> {
        if self.state != LoaderState::Created {
            return Err(AssetError::AlreadyStarted);
        }

        self.mode = match self.target {
            Some(CompletionTarget::Scene(_)) => LoaderMode::Scene,
            _ => LoaderMode::Dynamic,
        };

        // Every path must be dispatchable before any fetch goes out.
        let mut requests = Vec::with_capacity(self.assets.len());
        for path in &self.assets {
            requests.push(LoadRequest::new(path.clone())?);
        }

        if self.mode == LoaderMode::Scene {
            if self.ctx.scenes.is_none() || self.ctx.renderer.is_none() {
                return Err(AssetError::Config(
                    "scene mode needs a scene director and a stage renderer".into(),
                ));
            }
            if let Some(scenes) = self.ctx.scenes.as_mut() {
                scenes.reset_stage();
            }
            let mut stage = LoadingStage::new();
            stage.set_percent(self.progress.percent());
            self.stage = Some(stage);
            self.timing = Some(TimingState {
                started_at: now,
                ready_at: None,
            });
        }

        self.state = LoaderState::Started;
        info!(files = self.progress.total(), mode = ?self.mode, "loader started");

        // Nothing to load.
        if self.progress.is_complete() {
            let _ = self.progress.take_ready();
            self.enter_ready(now);
            return Ok(());
        }

        let (tx, rx) = mpsc::channel();
        self.outcomes = Some(rx);

        for request in requests {
            let tx = tx.clone();
            let fetch = Arc::clone(&self.ctx.fetch);
            let display = self.ctx.display;
            self.runtime.spawn(async move {
                let _ = tx.send(run_chain(fetch, display, request).await);
            });
        }

        if let Some(audio) = self.ctx.audio.as_ref() {
            for reference in &self.audio {
                let tx = tx.clone();
                let task = audio.load(reference);
                self.runtime.spawn(async move {
                    let _ = tx.send(task.await.map(|_| ItemPayload::Audio));
                });
            }
        }

        self.state = LoaderState::Loading;
        Ok(())
    }

    /// Advance the loader. The external frame driver calls this
    /// periodically: it drains finished parse chains, updates progress,
    /// and in scene mode renders the stage and performs the gated scene
    /// switch.
    pub fn tick(&mut self, now: Instant) {
        if self.state == LoaderState::Loading {
            self.drain_outcomes(now);
        }

        if self.state == LoaderState::Ready && self.mode == LoaderMode::Scene {
            let ready_at = self.timing.as_ref().and_then(|t| t.ready_at);
            if let Some(ready_at) = ready_at {
                if now >= ready_at {
                    if let Some(CompletionTarget::Scene(name)) = self.target.take() {
                        if let Some(scenes) = self.ctx.scenes.as_mut() {
                            scenes.activate(&name);
                        }
                        info!(scene = %name, "loading screen finished");
                    }
                    self.state = LoaderState::Completed;
                }
            }
        }

        if self.mode == LoaderMode::Scene
            && matches!(self.state, LoaderState::Loading | LoaderState::Ready)
        {
            if let (Some(renderer), Some(stage)) =
                (self.ctx.renderer.as_mut(), self.stage.as_ref())
            {
                renderer.render(stage);
            }
        }
    }

    pub fn state(&self) -> LoaderState {
        self.state
    }

    pub fn mode(&self) -> LoaderMode {
        self.mode
    }

    /// Completion percentage, 0 to 100.
    pub fn percent(&self) -> u8 {
        self.progress.percent()
    }

    pub fn is_complete(&self) -> bool {
        self.state == LoaderState::Completed
    }

    fn drain_outcomes(&mut self, now: Instant) {
        while let Some(outcome) = self.outcomes.as_ref().and_then(|rx| rx.try_recv().ok()) {
            match outcome {
                Ok(payload) => {
                    self.apply(payload);
                    let percent = self.progress.record_item();
                    debug!(percent, loaded = self.progress.loaded(), "file loaded");
                    if let Some(stage) = self.stage.as_mut() {
                        stage.set_percent(percent);
                    }
                    if let Some(observer) = self.ctx.on_progress.as_mut() {
                        observer(percent);
                    }
                    if self.progress.take_ready() {
                        self.enter_ready(now);
                    }
                }
                Err(err) => {
                    // No retry path: the item never completes and the
                    // operation stalls short of 100%.
                    error!(error = %err, "asset failed to load");
                }
            }
        }
    }

    fn apply(&mut self, payload: ItemPayload) {
        match payload {
            ItemPayload::Texture { key, texture } => self.ctx.textures.insert(key, texture),
            ItemPayload::SpriteSheet { frames } => {
                for (name, texture) in frames {
                    self.ctx.textures.insert(name, texture);
                }
            }
            ItemPayload::Font { face, font } => self.ctx.fonts.insert(face, font),
            ItemPayload::Metadata { key, value } => self.ctx.metadata.insert(key, value),
            ItemPayload::Audio => {}
        }
    }

    fn enter_ready(&mut self, now: Instant) {
        // Variant assets were cached under their physical paths; re-key
        // them under the logical names the game asks for.
        if self.ctx.display.variant_required() {
            self.ctx
                .textures
                .strip_key_marker(&self.ctx.display.variant_marker());
        }

        match self.mode {
            LoaderMode::Dynamic => {
                if let Some(CompletionTarget::Callback(callback)) = self.target.take() {
                    callback();
                }
                self.state = LoaderState::Completed;
                info!("load complete");
            }
            LoaderMode::Scene => {
                if let Some(timing) = self.timing.as_mut() {
                    let elapsed = now.duration_since(timing.started_at);
                    let hold = self
                        .ctx
                        .config
                        .min_display
                        .saturating_sub(elapsed)
                        .max(READY_HOLD);
                    timing.ready_at = Some(now + hold);
                }
                self.state = LoaderState::Ready;
            }
        }
    }
}

/// One item's full parse chain. Each chain reports exactly one outcome,
/// after every secondary fetch it needs has finished.
async fn run_chain(
    fetch: Arc<dyn AssetFetch>,
    display: DisplayProfile,
    request: LoadRequest,
) -> ItemOutcome {
    match request.kind {
        AssetKind::Image => {
            let bytes = fetch.fetch(&request.path).await?;
            let texture = decode_texture(&request.path, &bytes)?;
            Ok(ItemPayload::Texture {
                key: request.path,
                texture,
            })
        }
        AssetKind::Json => {
            let text = fetch_text(fetch.as_ref(), &request.path).await?;
            let value: serde_json::Value = serde_json::from_str(&text)
                .map_err(|e| AssetError::Parse(request.path.clone(), e.to_string()))?;

            if value.get("frames").is_some() {
                let descriptor: sheet::SheetDescriptor = serde_json::from_value(value)
                    .map_err(|e| AssetError::Parse(request.path.clone(), e.to_string()))?;
                let image_path = resolve_variant(&descriptor.meta.image, &display);
                let bytes = fetch.fetch(&image_path).await?;
                let base = decode_texture(&image_path, &bytes)?;
                let frames = sheet::slice_sheet(&request.path, &descriptor, &base)?;
                Ok(ItemPayload::SpriteSheet { frames })
            } else {
                Ok(ItemPayload::Metadata {
                    key: request.path,
                    value,
                })
            }
        }
        AssetKind::Font => {
            let text = fetch_text(fetch.as_ref(), &request.path).await?;
            let descriptor = font::parse_descriptor(&request.path, &text)?;
            let page = descriptor.first_page().ok_or_else(|| {
                AssetError::Parse(request.path.clone(), "missing page declaration".into())
            })?;
            let image_path = resolve_variant(page, &display);
            let bytes = fetch.fetch(&image_path).await?;
            let page_texture = decode_texture(&image_path, &bytes)?;
            let font = BitmapFont::from_descriptor(&descriptor, page_texture);
            Ok(ItemPayload::Font {
                face: font.face.clone(),
                font,
            })
        }
    }
}
