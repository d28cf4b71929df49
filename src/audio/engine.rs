// Media engine contract
use serde::Serialize;

use super::signals::SignalEmitter;
use crate::library::Episode;

/// What a media element gets bound to.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaSource {
    pub url: String,
    /// Duration advertised by the episode; the engine may learn a different one.
    pub duration_hint: Option<f64>,
    pub autoplay: bool,
    pub looping: bool,
}

impl MediaSource {
    pub fn for_episode(episode: &Episode, looping: bool) -> Self {
        Self {
            url: episode.url.clone(),
            duration_hint: Some(episode.duration as f64),
            autoplay: true,
            looping,
        }
    }
}

/// Platform audio-playback primitive.
///
/// Engines never report failures through this trait; a source that cannot be
/// played simply never emits `MetadataLoaded`.
pub trait MediaEngine {
    /// Bind a new source. Signals for it go to `emitter`; any previous emitter is dropped.
    fn load(&mut self, source: MediaSource, emitter: SignalEmitter);

    /// Release the current source, if any.
    fn unload(&mut self);

    fn play(&mut self);

    fn pause(&mut self);

    /// Current playback position in seconds.
    fn position(&self) -> f64;

    fn set_position(&mut self, seconds: f64);

    fn set_looping(&mut self, looping: bool);
}
