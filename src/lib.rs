// Podcastr - Podcast Episode Player
// Module declarations
pub mod audio;
#[cfg(feature = "desktop")]
mod commands;
pub mod error;
pub mod library;
pub mod metadata;
pub mod player;
pub mod queue;
pub mod settings;
pub mod state;

pub use audio::{MediaEngine, MediaSignal, RemoteEngine, SimulatedEngine};
pub use error::PodcastrError;
pub use library::Episode;
pub use player::{PlayerView, PlayerViewModel, TransportButton};
pub use queue::PlaybackStore;
pub use settings::PlayerSettings;
pub use state::{AppState, PlayerCommand, PlayerUpdate};

#[cfg(feature = "desktop")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    use tauri::Manager;

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            // Get app data directory
            let app_dir = app.path().app_data_dir()?;

            // Create and manage app state
            let app_state = AppState::load(&app_dir)?;
            app.manage(app_state);

            log::info!("Player state ready in {:?}", app_dir);
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::get_player_view,
            commands::load_episodes,
            commands::play_episode,
            commands::press_button,
            commands::seek,
            commands::media_signal,
            commands::clear_player,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
