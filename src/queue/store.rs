// Playback store
// Owns the episode queue, the current position in it and the transport flags.
use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::library::Episode;

/// Shared playback state. Passed explicitly to whoever needs to read or mutate it.
#[derive(Debug)]
pub struct PlaybackStore {
    episodes: Vec<Episode>,
    current_index: Option<usize>,
    is_playing: bool,
    is_looping: bool,
    is_shuffling: bool,
    rng: StdRng,
}

impl Default for PlaybackStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaybackStore {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create a store with a seeded generator so shuffle order is reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            episodes: Vec::new(),
            current_index: None,
            is_playing: false,
            is_looping: false,
            is_shuffling: false,
            rng,
        }
    }

    // ===== Reads =====

    pub fn episodes(&self) -> &[Episode] {
        &self.episodes
    }

    pub fn len(&self) -> usize {
        self.episodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    /// The episode at the current index, if the index points inside the queue.
    pub fn current_episode(&self) -> Option<&Episode> {
        self.current_index.and_then(|index| self.episodes.get(index))
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn is_looping(&self) -> bool {
        self.is_looping
    }

    pub fn is_shuffling(&self) -> bool {
        self.is_shuffling
    }

    pub fn has_previous(&self) -> bool {
        matches!(self.current_index, Some(index) if index > 0)
    }

    pub fn has_next(&self) -> bool {
        match self.current_index {
            Some(index) => {
                (self.is_shuffling && self.episodes.len() > 1) || index + 1 < self.episodes.len()
            }
            None => false,
        }
    }

    // ===== Actions =====

    /// Replace the queue with a single episode and start playing it.
    pub fn play(&mut self, episode: Episode) {
        self.episodes = vec![episode];
        self.current_index = Some(0);
        self.is_playing = true;
    }

    /// Replace the queue and start playing the episode at `index`.
    pub fn play_list(&mut self, episodes: Vec<Episode>, index: usize) {
        if index >= episodes.len() {
            warn!(
                "play_list index {} is outside a queue of {} episodes",
                index,
                episodes.len()
            );
            self.current_index = None;
        } else {
            self.current_index = Some(index);
        }
        self.episodes = episodes;
        self.is_playing = true;
    }

    pub fn toggle_play(&mut self) {
        self.is_playing = !self.is_playing;
    }

    pub fn toggle_loop(&mut self) {
        self.is_looping = !self.is_looping;
    }

    pub fn toggle_shuffle(&mut self) {
        self.is_shuffling = !self.is_shuffling;
    }

    pub fn set_playing_state(&mut self, playing: bool) {
        self.is_playing = playing;
    }

    /// Advance to the next episode. While shuffling, jump to a random other episode.
    pub fn play_next(&mut self) {
        let Some(index) = self.current_index else {
            return;
        };

        if self.is_shuffling && self.episodes.len() > 1 {
            // Draw from len - 1 slots and skip over the current one
            let mut next = self.rng.gen_range(0..self.episodes.len() - 1);
            if next >= index {
                next += 1;
            }
            debug!("Shuffle picked episode {} after {}", next, index);
            self.current_index = Some(next);
        } else if index + 1 < self.episodes.len() {
            self.current_index = Some(index + 1);
        }
    }

    pub fn play_previous(&mut self) {
        if let Some(index) = self.current_index {
            if index > 0 {
                self.current_index = Some(index - 1);
            }
        }
    }

    /// Drop the queue entirely: no current episode, nothing playing.
    pub fn clear_player_state(&mut self) {
        self.episodes.clear();
        self.current_index = None;
        self.is_playing = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn episodes(count: usize) -> Vec<Episode> {
        (0..count)
            .map(|i| {
                Episode::new(
                    format!("ep-{}", i),
                    format!("Episode {}", i),
                    "Host",
                    format!("https://cdn.example/{}.jpg", i),
                    format!("https://cdn.example/{}.mp3", i),
                    60,
                )
            })
            .collect()
    }

    #[test]
    fn test_empty_store() {
        let store = PlaybackStore::with_seed(1);

        assert!(store.current_episode().is_none());
        assert!(!store.has_next());
        assert!(!store.has_previous());
        assert!(!store.is_playing());
    }

    #[test]
    fn test_play_single_episode() {
        let mut store = PlaybackStore::with_seed(1);
        store.play(episodes(1).remove(0));

        assert_eq!(store.current_index(), Some(0));
        assert!(store.is_playing());
        assert!(!store.has_next());
        assert!(!store.has_previous());
    }

    #[test]
    fn test_next_and_previous_walk_the_queue() {
        let mut store = PlaybackStore::with_seed(1);
        store.play_list(episodes(3), 0);

        assert!(store.has_next());
        store.play_next();
        store.play_next();
        assert_eq!(store.current_index(), Some(2));
        assert!(!store.has_next());

        // No wraparound at the end
        store.play_next();
        assert_eq!(store.current_index(), Some(2));

        store.play_previous();
        assert_eq!(store.current_index(), Some(1));
        assert!(store.has_previous());
        store.play_previous();
        store.play_previous();
        assert_eq!(store.current_index(), Some(0));
    }

    #[test]
    fn test_out_of_range_index_means_no_episode() {
        let mut store = PlaybackStore::with_seed(1);
        store.play_list(episodes(2), 5);

        assert!(store.current_episode().is_none());
        assert!(!store.has_next());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_shuffle_never_repeats_current() {
        let mut store = PlaybackStore::with_seed(42);
        store.play_list(episodes(4), 3);
        store.toggle_shuffle();

        assert!(store.has_next());
        for _ in 0..50 {
            let before = store.current_index();
            store.play_next();
            assert_ne!(store.current_index(), before);
            assert!(store.current_episode().is_some());
        }
    }

    #[test]
    fn test_shuffle_with_single_episode_has_no_next() {
        let mut store = PlaybackStore::with_seed(7);
        store.play(episodes(1).remove(0));
        store.toggle_shuffle();

        assert!(!store.has_next());
        store.play_next();
        assert_eq!(store.current_index(), Some(0));
    }

    #[test]
    fn test_seeded_shuffle_is_reproducible() {
        let walk = |seed| {
            let mut store = PlaybackStore::with_seed(seed);
            store.play_list(episodes(6), 0);
            store.toggle_shuffle();
            (0..10)
                .map(|_| {
                    store.play_next();
                    store.current_index()
                })
                .collect::<Vec<_>>()
        };

        assert_eq!(walk(9), walk(9));
    }

    #[test]
    fn test_toggles_and_clear() {
        let mut store = PlaybackStore::with_seed(1);
        store.play_list(episodes(2), 1);

        store.toggle_play();
        assert!(!store.is_playing());
        store.toggle_loop();
        assert!(store.is_looping());
        store.set_playing_state(true);
        assert!(store.is_playing());

        store.clear_player_state();
        assert!(store.is_empty());
        assert!(store.current_episode().is_none());
        assert!(!store.is_playing());
        assert!(store.is_looping());
    }
}
