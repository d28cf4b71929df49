// Application state management
// Store and view live behind locks; every change goes through `dispatch`.
use anyhow::{Context, Result};
use log::debug;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::audio::{EngineDirective, MediaSignal, RemoteEngine};
use crate::library::{parse_feed, sort_latest_first, Episode};
use crate::player::{PlayerView, PlayerViewModel, TransportButton};
use crate::queue::PlaybackStore;
use crate::settings::PlayerSettings;

/// Everything the player can be asked to do.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PlayerCommand {
    /// Re-render without changing anything
    Refresh,
    LoadEpisodes { episodes: Vec<Episode>, index: usize },
    PlayEpisode { episode: Episode },
    Press { button: TransportButton },
    Seek { position: f64 },
    /// An event observed on the webview's audio element while it was
    /// playing the source loaded as `generation`
    Signal { signal: MediaSignal, generation: u64 },
    Clear,
}

/// What the page needs after a command: the new render model and what to do
/// with its audio element.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerUpdate {
    pub view: PlayerViewModel,
    pub directives: Vec<EngineDirective>,
}

pub struct AppState {
    store: Mutex<PlaybackStore>,
    view: Mutex<PlayerView<RemoteEngine>>,
    pub app_dir: PathBuf,
}

impl AppState {
    pub fn new(settings: PlayerSettings, app_dir: PathBuf) -> Self {
        Self::with_store(PlaybackStore::new(), settings, app_dir)
    }

    pub fn with_store(store: PlaybackStore, settings: PlayerSettings, app_dir: PathBuf) -> Self {
        Self {
            store: Mutex::new(store),
            view: Mutex::new(PlayerView::new(RemoteEngine::new(), settings)),
            app_dir,
        }
    }

    /// Build the state from the settings stored under `app_dir`.
    pub fn load(app_dir: &Path) -> Result<Self> {
        let settings = PlayerSettings::load(app_dir)
            .with_context(|| format!("Failed to load settings from {:?}", app_dir))?;

        Ok(Self::new(settings, app_dir.to_path_buf()))
    }

    /// Parse a feed document, order it newest first and queue it, starting
    /// at `index` of the ordered list.
    pub fn load_feed(&self, json: &str, index: usize) -> Result<PlayerUpdate> {
        let mut episodes = parse_feed(json).context("Failed to parse episode feed")?;
        sort_latest_first(&mut episodes);

        Ok(self.dispatch(PlayerCommand::LoadEpisodes { episodes, index }))
    }

    pub fn dispatch(&self, command: PlayerCommand) -> PlayerUpdate {
        // Lock order: store, then view
        let mut store = self.store.lock();
        let mut view = self.view.lock();

        match command {
            PlayerCommand::Refresh => {}
            PlayerCommand::LoadEpisodes { episodes, index } => {
                store.play_list(episodes, index);
            }
            PlayerCommand::PlayEpisode { episode } => {
                store.play(episode);
            }
            PlayerCommand::Press { button } => {
                view.press(button, &mut store);
            }
            PlayerCommand::Seek { position } => {
                view.seek(position);
            }
            PlayerCommand::Signal { signal, generation } => {
                if !view.engine_mut().report(generation, signal) {
                    debug!("Page signal {:?} was not delivered", signal);
                }
            }
            PlayerCommand::Clear => {
                store.clear_player_state();
            }
        }

        view.sync(&store);
        view.pump(&mut store);

        PlayerUpdate {
            view: view.render(&store),
            directives: view.engine_mut().take_directives(),
        }
    }
}
