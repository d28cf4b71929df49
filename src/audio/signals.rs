// Media engine signals
// An engine reports what happened through a `SignalEmitter`; the bound view
// drains the matching `Subscription`. Dropping the subscription unsubscribes.
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

/// Something the media engine observed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum MediaSignal {
    /// Media metadata is known; the engine is ready to report positions.
    MetadataLoaded { duration: Option<f64> },
    /// Periodic position report, in seconds.
    TimeUpdate { position: f64 },
    Play,
    Pause,
    Ended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalKind {
    MetadataLoaded,
    TimeUpdate,
    Play,
    Pause,
    Ended,
}

impl MediaSignal {
    pub fn kind(&self) -> SignalKind {
        match self {
            MediaSignal::MetadataLoaded { .. } => SignalKind::MetadataLoaded,
            MediaSignal::TimeUpdate { .. } => SignalKind::TimeUpdate,
            MediaSignal::Play => SignalKind::Play,
            MediaSignal::Pause => SignalKind::Pause,
            MediaSignal::Ended => SignalKind::Ended,
        }
    }
}

/// Engine side of a subscription.
#[derive(Debug, Clone)]
pub struct SignalEmitter {
    sender: UnboundedSender<MediaSignal>,
}

impl SignalEmitter {
    /// Returns false once the subscriber is gone.
    pub fn emit(&self, signal: MediaSignal) -> bool {
        self.sender.send(signal).is_ok()
    }

    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

/// Listener side of a subscription. Only signals of the kinds being listened
/// to are delivered; anything else is discarded.
#[derive(Debug)]
pub struct Subscription {
    receiver: UnboundedReceiver<MediaSignal>,
    kinds: HashSet<SignalKind>,
}

impl Subscription {
    pub fn listen(&mut self, kind: SignalKind) {
        self.kinds.insert(kind);
    }

    /// Next pending signal of a listened kind, without blocking.
    pub fn try_next(&mut self) -> Option<MediaSignal> {
        while let Ok(signal) = self.receiver.try_recv() {
            if self.kinds.contains(&signal.kind()) {
                return Some(signal);
            }
        }
        None
    }
}

/// Create a connected emitter/subscription pair listening to `kinds`.
pub fn subscribe(kinds: &[SignalKind]) -> (SignalEmitter, Subscription) {
    let (sender, receiver) = unbounded_channel();

    (
        SignalEmitter { sender },
        Subscription {
            receiver,
            kinds: kinds.iter().copied().collect(),
        },
    )
}
