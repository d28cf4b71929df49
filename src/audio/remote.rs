// Remote media engine
// Proxies an `<audio>` element living in the webview: calls become directives
// the page applies, and the page reports the element's events back as signals.
// Every load starts a new generation; the page tags its reports with the
// generation it was playing so late events from an old source are dropped.
use log::debug;
use serde::Serialize;

use super::engine::{MediaEngine, MediaSource};
use super::signals::{MediaSignal, SignalEmitter};

/// One instruction for the webview audio element.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum EngineDirective {
    Load { source: MediaSource, generation: u64 },
    Unload,
    Play,
    Pause,
    Seek { position: f64 },
    SetLoop { looping: bool },
}

#[derive(Debug, Default)]
pub struct RemoteEngine {
    directives: Vec<EngineDirective>,
    emitter: Option<SignalEmitter>,
    generation: u64,
    position: f64,
    looping: bool,
}

impl RemoteEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand over everything queued since the last call.
    pub fn take_directives(&mut self) -> Vec<EngineDirective> {
        std::mem::take(&mut self.directives)
    }

    /// Generation of the most recent load. Zero before anything was loaded.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Feed back an event the audio element observed while playing `generation`.
    ///
    /// Returns false when the signal is dropped: nothing is bound, or it
    /// belongs to a source that has since been replaced.
    pub fn report(&mut self, generation: u64, signal: MediaSignal) -> bool {
        if generation != self.generation {
            debug!(
                "Dropping {:?} from generation {} (current {})",
                signal.kind(),
                generation,
                self.generation
            );
            return false;
        }

        if let MediaSignal::TimeUpdate { position } = signal {
            self.position = position;
        }

        match &self.emitter {
            Some(emitter) => emitter.emit(signal),
            None => false,
        }
    }
}

impl MediaEngine for RemoteEngine {
    fn load(&mut self, source: MediaSource, emitter: SignalEmitter) {
        self.position = 0.0;
        self.looping = source.looping;
        self.emitter = Some(emitter);
        self.generation += 1;
        self.directives.push(EngineDirective::Load {
            source,
            generation: self.generation,
        });
    }

    fn unload(&mut self) {
        self.emitter = None;
        self.position = 0.0;
        self.directives.push(EngineDirective::Unload);
    }

    fn play(&mut self) {
        self.directives.push(EngineDirective::Play);
    }

    fn pause(&mut self) {
        self.directives.push(EngineDirective::Pause);
    }

    fn position(&self) -> f64 {
        self.position
    }

    fn set_position(&mut self, seconds: f64) {
        self.position = seconds;
        self.directives.push(EngineDirective::Seek { position: seconds });
    }

    fn set_looping(&mut self, looping: bool) {
        if self.looping != looping {
            self.looping = looping;
            self.directives.push(EngineDirective::SetLoop { looping });
        }
    }
}
