//! Single-session playlist player
//!
//! [`PlaylistPlayer`] owns at most one [`PlaybackSession`] at a time over a
//! fixed [`Playlist`]. Switching tracks always finishes tearing down the old
//! session (signals detached, paused, resource released) before the new
//! resource is acquired.
//!
//! ## Overview
//!
//! ```text
//!            play(i) ok                 Finished (live session)
//!  ┌──────┐ ───────────▶ ┌───────────┐ ─────────────────────────┐
//!  │ Idle │              │ Playing i │ ◀────────────────────────┘ play(i+1 mod n)
//!  └──────┘ ◀─────────── └───────────┘
//!     ▲      stop() / toggle(i)   │
//!     └───────────────────────────┘ play(j) start failure
//! ```
//!
//! All operations take `&mut self`, so commands are applied strictly one at
//! a time. Hosts drive the player from a single task that interleaves UI
//! commands with [`PlaylistPlayer::next_signal`].

use tokio::sync::{broadcast, mpsc};
use tracing::{debug, info, trace, warn};

use crate::content::{Playlist, Track};
use crate::error::{KeepsakeError, KeepsakeResult};
use crate::format::progress_percent;
use crate::media::{MediaBackend, MediaResource, MediaSignal, SessionId, SignalSink, TaggedSignal};

/// Default capacity for the player event broadcast channel
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Notifications for the host page.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEvent {
    /// A new session was published
    TrackChanged { index: usize, title: String },
    /// The active session was stopped by the user
    Stopped { index: usize },
    /// A track failed to start; nothing is playing now
    StartFailed { index: usize, reason: String },
}

/// The one live playback session.
#[derive(Debug)]
pub struct PlaybackSession<R> {
    track_index: usize,
    id: SessionId,
    resource: R,
    position_seconds: f64,
    duration_seconds: f64,
}

impl<R> PlaybackSession<R> {
    fn new(track_index: usize, id: SessionId, resource: R) -> Self {
        Self {
            track_index,
            id,
            resource,
            position_seconds: 0.0,
            duration_seconds: 0.0,
        }
    }

    pub fn track_index(&self) -> usize {
        self.track_index
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn position_seconds(&self) -> f64 {
        self.position_seconds
    }

    /// Zero until the resource reports its duration
    pub fn duration_seconds(&self) -> f64 {
        self.duration_seconds
    }

    fn update_position(&mut self, seconds: f64) {
        if !seconds.is_finite() {
            return;
        }
        let mut position = seconds.max(0.0);
        if self.duration_seconds > 0.0 {
            position = position.min(self.duration_seconds);
        }
        self.position_seconds = position;
    }

    fn set_duration(&mut self, seconds: f64) {
        if !seconds.is_finite() || seconds <= 0.0 {
            return;
        }
        self.duration_seconds = seconds;
        self.position_seconds = self.position_seconds.min(seconds);
    }
}

/// Presentation state for the UI. Never used for control decisions.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerSnapshot {
    pub active: Option<usize>,
    pub position_seconds: f64,
    pub duration_seconds: f64,
}

impl PlayerSnapshot {
    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    /// 0–100, or 0 while the duration is unknown
    pub fn progress_percent(&self) -> f64 {
        progress_percent(self.position_seconds, self.duration_seconds)
    }
}

type TrackChangedCallback = Box<dyn FnMut(usize, &str)>;

/// Plays one track at a time from a fixed playlist.
///
/// # Example
///
/// ```ignore
/// let mut player = PlaylistPlayer::new(content.playlist.tracks.clone(), backend);
///
/// player.play(2).await?;
/// player.next().await?;          // wraps to track 0
///
/// while let Some(signal) = player.next_signal().await {
///     player.handle_signal(signal).await?;
/// }
/// ```
pub struct PlaylistPlayer<B: MediaBackend> {
    playlist: Playlist,
    backend: B,
    session: Option<PlaybackSession<B::Resource>>,
    next_session_id: u64,
    signal_tx: mpsc::UnboundedSender<TaggedSignal>,
    signal_rx: mpsc::UnboundedReceiver<TaggedSignal>,
    event_tx: broadcast::Sender<PlayerEvent>,
    on_track_changed: Option<TrackChangedCallback>,
}

impl<B: MediaBackend> PlaylistPlayer<B> {
    pub fn new(playlist: Playlist, backend: B) -> Self {
        let (signal_tx, signal_rx) = mpsc::unbounded_channel();
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            playlist,
            backend,
            session: None,
            next_session_id: 1,
            signal_tx,
            signal_rx,
            event_tx,
            on_track_changed: None,
        }
    }

    /// Register a callback fired each time a new session is published.
    pub fn with_track_changed(mut self, callback: impl FnMut(usize, &str) + 'static) -> Self {
        self.on_track_changed = Some(Box::new(callback));
        self
    }

    /// Subscribe to player events.
    pub fn subscribe(&self) -> broadcast::Receiver<PlayerEvent> {
        self.event_tx.subscribe()
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn session(&self) -> Option<&PlaybackSession<B::Resource>> {
        self.session.as_ref()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.session.as_ref().map(|s| s.track_index)
    }

    pub fn active_track(&self) -> Option<&Track> {
        self.active_index().map(|i| &self.playlist[i])
    }

    pub fn snapshot(&self) -> PlayerSnapshot {
        match &self.session {
            Some(s) => PlayerSnapshot {
                active: Some(s.track_index),
                position_seconds: s.position_seconds,
                duration_seconds: s.duration_seconds,
            },
            None => PlayerSnapshot::default(),
        }
    }

    /// Start playing `index`, replacing whatever is playing.
    ///
    /// The session is published only after the resource confirms playback
    /// began. On failure nothing plays, including the previous track.
    ///
    /// # Errors
    ///
    /// Returns `KeepsakeError::InvalidTrackIndex` for an index outside the
    /// playlist, and `KeepsakeError::PlaybackStart` if the resource could not
    /// be acquired or started.
    pub async fn play(&mut self, index: usize) -> KeepsakeResult<()> {
        let len = self.playlist.len();
        if index >= len {
            return Err(KeepsakeError::InvalidTrackIndex { index, len });
        }

        self.teardown();

        let id = SessionId(self.next_session_id);
        self.next_session_id += 1;
        let sink = SignalSink::new(id, self.signal_tx.clone());
        let source = self.playlist[index].audio_source.clone();

        debug!(index, %id, %source, "Acquiring media resource");
        let mut resource = match self.backend.acquire(&source, sink) {
            Ok(resource) => resource,
            Err(e) => {
                self.report_start_failure(index, &e);
                return Err(e);
            }
        };

        if let Err(e) = resource.play().await {
            resource.detach();
            drop(resource);
            self.report_start_failure(index, &e);
            return Err(e);
        }

        self.session = Some(PlaybackSession::new(index, id, resource));

        let title = self.playlist[index].title.clone();
        info!(index, %id, title = %title, "Now playing");
        if let Some(callback) = self.on_track_changed.as_mut() {
            callback(index, &title);
        }
        let _ = self.event_tx.send(PlayerEvent::TrackChanged { index, title });
        Ok(())
    }

    /// Stop playback. No-op when nothing is playing.
    pub fn stop(&mut self) {
        if let Some(index) = self.teardown() {
            info!(index, "Playback stopped");
            let _ = self.event_tx.send(PlayerEvent::Stopped { index });
        }
    }

    /// Per-track play/pause control: stops `index` if it is playing,
    /// otherwise plays it.
    pub async fn toggle(&mut self, index: usize) -> KeepsakeResult<()> {
        if self.active_index() == Some(index) {
            self.stop();
            Ok(())
        } else {
            self.play(index).await
        }
    }

    /// Play the following track, wrapping to the first. No-op when idle.
    pub async fn next(&mut self) -> KeepsakeResult<()> {
        match self.active_index() {
            Some(current) => {
                let next = self.playlist.next_index(current);
                self.play(next).await
            }
            None => Ok(()),
        }
    }

    /// Play the preceding track, wrapping to the last. No-op when idle.
    pub async fn previous(&mut self) -> KeepsakeResult<()> {
        match self.active_index() {
            Some(current) => {
                let previous = self.playlist.previous_index(current);
                self.play(previous).await
            }
            None => Ok(()),
        }
    }

    /// Wait for the next signal from any resource.
    ///
    /// Stays pending while nothing is playing; the player holds a sender
    /// itself, so this never yields `None` in practice.
    pub async fn next_signal(&mut self) -> Option<TaggedSignal> {
        self.signal_rx.recv().await
    }

    /// Take an already queued signal without waiting.
    pub fn try_next_signal(&mut self) -> Option<TaggedSignal> {
        self.signal_rx.try_recv().ok()
    }

    /// Apply a signal from a resource.
    ///
    /// Signals from any session other than the live one are ignored.
    /// `Finished` advances to the next track.
    pub async fn handle_signal(&mut self, tagged: TaggedSignal) -> KeepsakeResult<()> {
        let is_live = matches!(&self.session, Some(s) if s.id == tagged.session);
        if !is_live {
            trace!(session = %tagged.session, signal = ?tagged.signal, "Dropping stale media signal");
            return Ok(());
        }

        match tagged.signal {
            MediaSignal::Progress(seconds) => {
                if let Some(session) = self.session.as_mut() {
                    session.update_position(seconds);
                }
            }
            MediaSignal::DurationKnown(seconds) => {
                if let Some(session) = self.session.as_mut() {
                    session.set_duration(seconds);
                }
            }
            MediaSignal::Finished => {
                debug!(session = %tagged.session, "Track finished, advancing");
                self.next().await?;
            }
        }
        Ok(())
    }

    /// Release the active session. Used when the hosting view goes away.
    pub fn shutdown(&mut self) {
        if let Some(index) = self.teardown() {
            debug!(index, "Player shut down with an active session");
        }
    }

    /// Detach, pause, rewind and release the active session.
    fn teardown(&mut self) -> Option<usize> {
        let mut session = self.session.take()?;
        session.resource.detach();
        session.resource.pause();
        session.resource.set_position(0.0);
        let index = session.track_index;
        trace!(index, id = %session.id, "Session torn down");
        drop(session);
        Some(index)
    }

    fn report_start_failure(&self, index: usize, error: &KeepsakeError) {
        warn!(index, %error, "Track failed to start");
        let _ = self.event_tx.send(PlayerEvent::StartFailed {
            index,
            reason: error.to_string(),
        });
    }
}

impl<B: MediaBackend> Drop for PlaylistPlayer<B> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_clamped_to_duration() {
        let mut session = PlaybackSession::new(0, SessionId(1), ());
        session.update_position(12.0);
        assert_eq!(session.position_seconds(), 12.0);

        session.set_duration(10.0);
        assert_eq!(session.position_seconds(), 10.0);

        session.update_position(42.0);
        assert_eq!(session.position_seconds(), 10.0);

        session.update_position(-3.0);
        assert_eq!(session.position_seconds(), 0.0);
    }

    #[test]
    fn test_invalid_numbers_ignored() {
        let mut session = PlaybackSession::new(0, SessionId(1), ());
        session.update_position(5.0);
        session.update_position(f64::NAN);
        assert_eq!(session.position_seconds(), 5.0);

        session.set_duration(f64::INFINITY);
        assert_eq!(session.duration_seconds(), 0.0);
        session.set_duration(0.0);
        assert_eq!(session.duration_seconds(), 0.0);
    }

    #[test]
    fn test_snapshot_progress() {
        let snapshot = PlayerSnapshot {
            active: Some(1),
            position_seconds: 30.0,
            duration_seconds: 120.0,
        };
        assert!(snapshot.is_active(1));
        assert!(!snapshot.is_active(0));
        assert_eq!(snapshot.progress_percent(), 25.0);
        assert_eq!(PlayerSnapshot::default().progress_percent(), 0.0);
    }
}
