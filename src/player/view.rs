// Player view
// Keeps a media engine in step with the playback store and turns the pair
// into a render model.
use log::{debug, info, warn};

use super::controls::TransportButton;
use super::model::{
    ButtonModel, EpisodePanel, MediaElement, PlayerViewModel, ScrubBar, SliderModel,
};
use crate::audio::{subscribe, MediaEngine, MediaSignal, MediaSource, SignalKind, Subscription};
use crate::library::Episode;
use crate::metadata::{format_duration, format_optional_duration};
use crate::queue::PlaybackStore;
use crate::settings::PlayerSettings;

/// Signals a fresh binding listens to. Time updates are added once metadata is in.
const BINDING_SIGNALS: [SignalKind; 4] = [
    SignalKind::MetadataLoaded,
    SignalKind::Play,
    SignalKind::Pause,
    SignalKind::Ended,
];

/// The episode currently loaded into the engine.
#[derive(Debug)]
struct Binding {
    index: usize,
    episode_id: String,
    url: String,
    duration: u64,
    subscription: Subscription,
}

impl Binding {
    fn matches(&self, index: usize, episode: &Episode) -> bool {
        self.index == index && self.episode_id == episode.id && self.url == episode.url
    }
}

pub struct PlayerView<E: MediaEngine> {
    engine: E,
    settings: PlayerSettings,
    progress: u64,
    binding: Option<Binding>,
    /// Playing flag as last applied to (or reported by) the engine
    last_playing: bool,
}

impl<E: MediaEngine> PlayerView<E> {
    pub fn new(engine: E, settings: PlayerSettings) -> Self {
        Self {
            engine,
            settings,
            progress: 0,
            binding: None,
            last_playing: false,
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn settings(&self) -> &PlayerSettings {
        &self.settings
    }

    /// Elapsed seconds shown in the scrub bar.
    pub fn progress(&self) -> u64 {
        self.progress
    }

    pub fn is_bound(&self) -> bool {
        self.binding.is_some()
    }

    /// Bring the engine in line with the store.
    ///
    /// Rebinds when the current episode changed, mirrors the loop flag, and
    /// calls `play()`/`pause()` only when the playing flag actually changed.
    pub fn sync(&mut self, store: &PlaybackStore) {
        self.sync_binding(store);

        if self.binding.is_some() {
            self.engine.set_looping(store.is_looping());
        }

        let playing = store.is_playing();
        if playing != self.last_playing {
            self.last_playing = playing;
            if self.binding.is_some() {
                if playing {
                    self.engine.play();
                } else {
                    self.engine.pause();
                }
            }
        }
    }

    fn sync_binding(&mut self, store: &PlaybackStore) {
        let target = store.current_index().zip(store.current_episode());

        match target {
            Some((index, episode)) => {
                let current = matches!(&self.binding, Some(binding) if binding.matches(index, episode));
                if !current {
                    self.bind(index, episode, store.is_looping());
                }
            }
            None => {
                if self.binding.is_some() {
                    self.unbind();
                }
            }
        }
    }

    fn bind(&mut self, index: usize, episode: &Episode, looping: bool) {
        let (emitter, subscription) = subscribe(&BINDING_SIGNALS);

        // Replacing the binding drops the previous subscription
        self.binding = Some(Binding {
            index,
            episode_id: episode.id.clone(),
            url: episode.url.clone(),
            duration: episode.duration,
            subscription,
        });

        info!("Binding media for episode {} ({})", episode.id, episode.url);
        self.engine
            .load(MediaSource::for_episode(episode, looping), emitter);
    }

    fn unbind(&mut self) {
        if let Some(binding) = self.binding.take() {
            info!("Unbinding media for episode {}", binding.episode_id);
        }
        self.engine.unload();
        self.progress = 0;
    }

    /// Handle every pending engine signal, syncing after each one.
    ///
    /// Returns how many signals were handled.
    pub fn pump(&mut self, store: &mut PlaybackStore) -> usize {
        let mut handled = 0;

        while let Some(signal) = self
            .binding
            .as_mut()
            .and_then(|binding| binding.subscription.try_next())
        {
            self.handle_signal(signal, store);
            self.sync(store);
            handled += 1;
        }

        handled
    }

    fn handle_signal(&mut self, signal: MediaSignal, store: &mut PlaybackStore) {
        match signal {
            MediaSignal::MetadataLoaded { duration } => {
                self.engine.set_position(0.0);
                self.progress = 0;
                if let Some(binding) = self.binding.as_mut() {
                    if let Some(reported) = duration.filter(|seconds| seconds.is_finite()) {
                        if reported.floor() as u64 != binding.duration {
                            warn!(
                                "Media for episode {} reports {}s, feed says {}s",
                                binding.episode_id, reported, binding.duration
                            );
                        }
                    }
                    binding.subscription.listen(SignalKind::TimeUpdate);
                }
            }
            MediaSignal::TimeUpdate { position } => {
                self.progress = self.displayed_progress(position);
            }
            MediaSignal::Play => {
                self.last_playing = true;
                store.set_playing_state(true);
            }
            MediaSignal::Pause => {
                self.last_playing = false;
                store.set_playing_state(false);
            }
            MediaSignal::Ended => self.handle_ended(store),
        }
    }

    fn handle_ended(&mut self, store: &mut PlaybackStore) {
        if store.has_next() {
            store.play_next();
        } else {
            self.progress = 0;
            store.clear_player_state();
        }
    }

    fn displayed_progress(&self, position: f64) -> u64 {
        let seconds = position.max(0.0).floor() as u64;

        match &self.binding {
            Some(binding) if self.settings.progress.clamp_to_duration => {
                seconds.min(binding.duration)
            }
            _ => seconds,
        }
    }

    /// Move playback to `value` seconds and show it right away.
    ///
    /// Values are clamped to the episode. Ignored when nothing is bound.
    pub fn seek(&mut self, value: f64) {
        let Some(binding) = &self.binding else {
            debug!("Ignoring seek to {} with no episode bound", value);
            return;
        };
        if !value.is_finite() {
            debug!("Ignoring seek to non-finite position {}", value);
            return;
        }

        let position = value.clamp(0.0, binding.duration as f64);
        self.engine.set_position(position);
        self.progress = position.floor() as u64;
    }

    /// Press a transport button. Disabled buttons do nothing.
    ///
    /// Returns whether the press went through.
    pub fn press(&mut self, button: TransportButton, store: &mut PlaybackStore) -> bool {
        if !button.is_enabled(store) {
            debug!("Ignoring press on disabled {:?} button", button);
            return false;
        }

        button.apply(store);
        self.sync(store);
        true
    }

    pub fn render(&self, store: &PlaybackStore) -> PlayerViewModel {
        let labels = &self.settings.labels;
        let theme = &self.settings.theme;
        let episode = store.current_episode();

        let panel = match episode {
            Some(episode) => EpisodePanel::Episode {
                thumbnail: episode.thumbnail.clone(),
                title: episode.title.clone(),
                members: episode.members.clone(),
                member_names: episode.member_names(),
                artwork_width: self.settings.artwork.width,
                artwork_height: self.settings.artwork.height,
            },
            None => EpisodePanel::Empty {
                message: labels.empty_state.clone(),
            },
        };

        let scrub = ScrubBar {
            elapsed: format_duration(self.progress),
            total: format_optional_duration(episode.map(|episode| episode.duration)),
            slider: episode.map(|episode| SliderModel {
                max: episode.duration,
                value: self.progress,
                track_color: theme.track_color.clone(),
                rail_color: theme.rail_color.clone(),
                handle_border_width: theme.handle_border_width,
            }),
        };

        let media = episode.map(|episode| MediaElement {
            src: episode.url.clone(),
            looping: store.is_looping(),
            autoplay: true,
        });

        let buttons = TransportButton::ALL
            .iter()
            .map(|&button| ButtonModel {
                button,
                enabled: button.is_enabled(store),
                active: button.is_active(store),
                icon: button.icon(store).to_string(),
                label: button.label(store, labels).to_string(),
            })
            .collect();

        PlayerViewModel {
            header: labels.header.clone(),
            panel,
            scrub,
            media,
            buttons,
        }
    }
}
