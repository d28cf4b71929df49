// Media engine module
// The engine contract, its signals, and the two engines the player ships with

pub mod engine;
pub mod remote;
pub mod signals;
pub mod simulated;

pub use engine::{MediaEngine, MediaSource};
pub use remote::{EngineDirective, RemoteEngine};
pub use signals::{subscribe, MediaSignal, SignalEmitter, SignalKind, Subscription};
pub use simulated::SimulatedEngine;
