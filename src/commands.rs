// Tauri command handlers
use tauri::State;

use crate::audio::MediaSignal;
use crate::library::Episode;
use crate::player::TransportButton;
use crate::state::{AppState, PlayerCommand, PlayerUpdate};

#[tauri::command]
pub fn get_player_view(state: State<'_, AppState>) -> Result<PlayerUpdate, String> {
    Ok(state.dispatch(PlayerCommand::Refresh))
}

#[tauri::command]
pub fn load_episodes(
    feed: String,
    index: usize,
    state: State<'_, AppState>,
) -> Result<PlayerUpdate, String> {
    state
        .load_feed(&feed, index)
        .map_err(|e| format!("Failed to load episodes: {:#}", e))
}

#[tauri::command]
pub fn play_episode(episode: Episode, state: State<'_, AppState>) -> Result<PlayerUpdate, String> {
    Ok(state.dispatch(PlayerCommand::PlayEpisode { episode }))
}

#[tauri::command]
pub fn press_button(
    button: TransportButton,
    state: State<'_, AppState>,
) -> Result<PlayerUpdate, String> {
    Ok(state.dispatch(PlayerCommand::Press { button }))
}

#[tauri::command]
pub fn seek(position: f64, state: State<'_, AppState>) -> Result<PlayerUpdate, String> {
    Ok(state.dispatch(PlayerCommand::Seek { position }))
}

#[tauri::command]
pub fn media_signal(
    signal: MediaSignal,
    generation: u64,
    state: State<'_, AppState>,
) -> Result<PlayerUpdate, String> {
    Ok(state.dispatch(PlayerCommand::Signal { signal, generation }))
}

#[tauri::command]
pub fn clear_player(state: State<'_, AppState>) -> Result<PlayerUpdate, String> {
    Ok(state.dispatch(PlayerCommand::Clear))
}
