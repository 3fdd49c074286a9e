//! Media resource contract
//!
//! The playlist player never touches an audio API directly. It talks to a
//! [`MediaBackend`] that hands out exclusively owned [`MediaResource`]s, one
//! per playback session.
//!
//! ```text
//! ┌──────────────────┐  acquire(uri, sink)   ┌──────────────┐
//! │  PlaylistPlayer  │ ────────────────────▶ │ MediaBackend │
//! │                  │ ◀──── Resource ────── └──────────────┘
//! │  signal_rx ◀─────┼──── TaggedSignal ───── SignalSink (one per session)
//! └──────────────────┘
//! ```
//!
//! Every signal a resource emits is tagged with the [`SessionId`] its sink
//! was minted for. A resource must stop emitting once [`MediaResource::detach`]
//! has been called; the player additionally drops any signal whose tag does
//! not match the live session.

use std::fmt;

use tokio::sync::mpsc;

use crate::error::KeepsakeResult;

/// Identifies one playback session. Never reused within a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(pub u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "session_{}", self.0)
    }
}

/// Asynchronous notifications from a playing resource.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaSignal {
    /// Periodic time update, in seconds from the start of the track
    Progress(f64),
    /// Total duration became known (metadata loaded)
    DurationKnown(f64),
    /// Playback reached the natural end of the track
    Finished,
}

/// A [`MediaSignal`] together with the session that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaggedSignal {
    pub session: SessionId,
    pub signal: MediaSignal,
}

/// Sending half handed to a resource at acquisition time.
#[derive(Debug, Clone)]
pub struct SignalSink {
    session: SessionId,
    tx: mpsc::UnboundedSender<TaggedSignal>,
}

impl SignalSink {
    pub fn new(session: SessionId, tx: mpsc::UnboundedSender<TaggedSignal>) -> Self {
        Self { session, tx }
    }

    pub fn session(&self) -> SessionId {
        self.session
    }

    /// Deliver a signal. Returns false once the player is gone.
    pub fn emit(&self, signal: MediaSignal) -> bool {
        self.tx
            .send(TaggedSignal {
                session: self.session,
                signal,
            })
            .is_ok()
    }
}

/// One exclusively owned playback resource, bound to a single audio source.
///
/// Dropping the resource releases it.
#[allow(async_fn_in_trait)]
pub trait MediaResource {
    /// Begin playback. Resolves once the environment confirms playback
    /// started, or fails with [`KeepsakeError::PlaybackStart`](crate::KeepsakeError::PlaybackStart).
    async fn play(&mut self) -> KeepsakeResult<()>;

    fn pause(&mut self);

    fn set_position(&mut self, seconds: f64);

    /// Stop delivering signals. Called before pause and release.
    fn detach(&mut self);
}

/// Factory for [`MediaResource`]s.
pub trait MediaBackend {
    type Resource: MediaResource;

    /// Bind a new resource to `uri`. Signals go to `sink`.
    fn acquire(&mut self, uri: &str, sink: SignalSink) -> KeepsakeResult<Self::Resource>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sink_tags_signals() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let sink = SignalSink::new(SessionId(7), tx);

        assert!(sink.emit(MediaSignal::Progress(1.5)));
        let tagged = rx.try_recv().unwrap();
        assert_eq!(tagged.session, SessionId(7));
        assert_eq!(tagged.signal, MediaSignal::Progress(1.5));
    }

    #[test]
    fn test_sink_reports_closed_receiver() {
        let (tx, rx) = mpsc::unbounded_channel();
        let sink = SignalSink::new(SessionId(1), tx);
        drop(rx);
        assert!(!sink.emit(MediaSignal::Finished));
    }
}
