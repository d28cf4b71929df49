// Queue management module
// This module handles the playback queue and transport flags

pub mod store;

pub use store::PlaybackStore;
