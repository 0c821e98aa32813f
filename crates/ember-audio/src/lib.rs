//! Ember Audio - Sound loading and storage using kira
//!
//! Provides the sound bank the asset loader fills and the playback side
//! of the engine reads.

mod bank;

pub use bank::SoundBank;
