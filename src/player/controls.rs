// Transport controls
use serde::{Deserialize, Serialize};

use crate::queue::PlaybackStore;
use crate::settings::LabelSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransportButton {
    Shuffle,
    Previous,
    PlayPause,
    Next,
    Loop,
}

impl TransportButton {
    /// Buttons in the order they are laid out.
    pub const ALL: [TransportButton; 5] = [
        TransportButton::Shuffle,
        TransportButton::Previous,
        TransportButton::PlayPause,
        TransportButton::Next,
        TransportButton::Loop,
    ];

    pub fn is_enabled(self, store: &PlaybackStore) -> bool {
        if store.current_episode().is_none() {
            return false;
        }

        match self {
            TransportButton::Shuffle => store.len() > 1,
            TransportButton::Previous => store.has_previous(),
            TransportButton::PlayPause => true,
            TransportButton::Next => store.has_next(),
            TransportButton::Loop => true,
        }
    }

    /// Shuffle and loop light up while their mode is on.
    pub fn is_active(self, store: &PlaybackStore) -> bool {
        match self {
            TransportButton::Shuffle => store.is_shuffling(),
            TransportButton::Loop => store.is_looping(),
            _ => false,
        }
    }

    pub fn icon(self, store: &PlaybackStore) -> &'static str {
        match self {
            TransportButton::Shuffle => "/shuffle.svg",
            TransportButton::Previous => "/play-previous.svg",
            TransportButton::PlayPause if store.is_playing() => "/pause.svg",
            TransportButton::PlayPause => "/play.svg",
            TransportButton::Next => "/play-next.svg",
            TransportButton::Loop => "/repeat.svg",
        }
    }

    pub fn label<'a>(self, store: &PlaybackStore, labels: &'a LabelSettings) -> &'a str {
        match self {
            TransportButton::Shuffle => &labels.shuffle,
            TransportButton::Previous => &labels.previous,
            TransportButton::PlayPause if store.is_playing() => &labels.pause,
            TransportButton::PlayPause => &labels.play,
            TransportButton::Next => &labels.next,
            TransportButton::Loop => &labels.repeat,
        }
    }

    /// Run the store action behind the button. Does not check `is_enabled`.
    pub fn apply(self, store: &mut PlaybackStore) {
        match self {
            TransportButton::Shuffle => store.toggle_shuffle(),
            TransportButton::Previous => store.play_previous(),
            TransportButton::PlayPause => store.toggle_play(),
            TransportButton::Next => store.play_next(),
            TransportButton::Loop => store.toggle_loop(),
        }
    }
}
