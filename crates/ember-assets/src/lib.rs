//! Ember Assets - Asset loading pipeline for the Ember engine
//!
//! Takes a queue of mixed file references (images, sprite-sheet JSON,
//! bitmap-font descriptors, audio), fetches and parses each one, tracks
//! aggregate progress, and signals completion once through a callback or
//! a scene switch.

mod context;
mod error;
mod fetch;
mod font;
mod loader;
mod path;
mod progress;
mod request;
mod sheet;
mod store;
mod texture;

#[cfg(test)]
mod testutil;

pub use context::{
    AudioLoadFuture, AudioService, LoaderConfig, LoaderContext, LoadingStage, SceneDirector,
    StageRenderer,
};
pub use error::AssetError;
pub use fetch::{AssetFetch, FetchFuture, HttpFetch, MemoryFetch};
pub use font::{parse_descriptor, BitmapFont, FontDescriptor, Glyph};
pub use loader::{CompletionTarget, Loader, LoaderMode, LoaderState};
pub use path::{file_extension, resolve_variant};
pub use progress::ProgressTracker;
pub use request::{AssetKind, LoadRequest};
pub use sheet::{slice_sheet, FrameRect, SheetDescriptor};
pub use store::AssetStore;
pub use texture::{decode_texture, TextureAsset, TextureFormat};
