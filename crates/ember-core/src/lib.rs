//! Ember Core - Shared foundational types for the Ember engine
//!
//! Provides the display profile used for resolution-variant asset selection
//! and the registration queue the game fills before a load begins.

mod display;
mod queue;

pub use display::DisplayProfile;
pub use queue::AssetQueue;
