// Simulated media engine
// Position only moves when the host advances the clock, which makes playback
// deterministic for headless hosts and tests.
use super::engine::{MediaEngine, MediaSource};
use super::signals::{MediaSignal, SignalEmitter};

#[derive(Debug, Default)]
pub struct SimulatedEngine {
    source: Option<MediaSource>,
    emitter: Option<SignalEmitter>,
    duration: f64,
    position: f64,
    playing: bool,
    looping: bool,
    play_calls: usize,
    pause_calls: usize,
}

impl SimulatedEngine {
    pub fn new() -> Self {
        Self::default()
    }

    fn emit(&self, signal: MediaSignal) {
        if let Some(emitter) = &self.emitter {
            emitter.emit(signal);
        }
    }

    /// Move the clock forward by `seconds` of playback.
    ///
    /// Reaching the end either wraps (looping) or pauses and reports `Ended`.
    pub fn advance(&mut self, seconds: f64) {
        if self.source.is_none() || !self.playing {
            return;
        }

        self.position += seconds.max(0.0);

        if self.position < self.duration {
            self.emit(MediaSignal::TimeUpdate {
                position: self.position,
            });
            return;
        }

        if self.looping && self.duration > 0.0 {
            self.position %= self.duration;
            self.emit(MediaSignal::TimeUpdate {
                position: self.position,
            });
        } else {
            self.position = self.duration;
            self.playing = false;
            self.emit(MediaSignal::TimeUpdate {
                position: self.position,
            });
            self.emit(MediaSignal::Pause);
            self.emit(MediaSignal::Ended);
        }
    }

    /// Deliver an arbitrary signal to the current subscriber.
    pub fn raise(&self, signal: MediaSignal) {
        self.emit(signal);
    }

    pub fn current_url(&self) -> Option<&str> {
        self.source.as_ref().map(|source| source.url.as_str())
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_paused(&self) -> bool {
        self.source.is_some() && !self.playing
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    /// Number of `play()` calls received, autoplay excluded.
    pub fn play_calls(&self) -> usize {
        self.play_calls
    }

    pub fn pause_calls(&self) -> usize {
        self.pause_calls
    }
}

impl MediaEngine for SimulatedEngine {
    fn load(&mut self, source: MediaSource, emitter: SignalEmitter) {
        self.unload();

        self.duration = source.duration_hint.unwrap_or(0.0).max(0.0);
        self.looping = source.looping;
        self.emitter = Some(emitter);
        self.emit(MediaSignal::MetadataLoaded {
            duration: Some(self.duration),
        });

        if source.autoplay {
            self.playing = true;
            self.emit(MediaSignal::Play);
        }
        self.source = Some(source);
    }

    fn unload(&mut self) {
        self.source = None;
        self.emitter = None;
        self.duration = 0.0;
        self.position = 0.0;
        self.playing = false;
    }

    fn play(&mut self) {
        self.play_calls += 1;
        if self.source.is_some() && !self.playing {
            self.playing = true;
            self.emit(MediaSignal::Play);
        }
    }

    fn pause(&mut self) {
        self.pause_calls += 1;
        if self.playing {
            self.playing = false;
            self.emit(MediaSignal::Pause);
        }
    }

    fn position(&self) -> f64 {
        self.position
    }

    fn set_position(&mut self, seconds: f64) {
        if self.source.is_none() {
            return;
        }
        self.position = seconds.clamp(0.0, self.duration);
        self.emit(MediaSignal::TimeUpdate {
            position: self.position,
        });
    }

    fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }
}
