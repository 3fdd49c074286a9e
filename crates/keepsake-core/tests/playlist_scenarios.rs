//! Playlist player behaviour against a scripted backend
//!
//! Covers session exclusivity, transport controls, auto-advance, stale
//! signal handling and start failures.

mod support;

use std::cell::RefCell;
use std::rc::Rc;

use keepsake_core::{KeepsakeError, MediaSignal, PlayerEvent, PlaylistPlayer};
use support::{drain, three_tracks, FakeBackend};

fn player() -> (PlaylistPlayer<FakeBackend>, FakeBackend) {
    let backend = FakeBackend::new();
    (PlaylistPlayer::new(three_tracks(), backend.clone()), backend)
}

// ============================================================================
// Transport
// ============================================================================

/// play(2) → next → previous walks 2 → 0 → 2
#[tokio::test]
async fn test_wraparound_scenario() {
    let (mut player, _backend) = player();

    player.play(2).await.unwrap();
    assert_eq!(player.active_index(), Some(2));

    player.next().await.unwrap();
    assert_eq!(player.active_index(), Some(0));

    player.previous().await.unwrap();
    assert_eq!(player.active_index(), Some(2));
}

#[tokio::test]
async fn test_toggle_twice_stops() {
    let (mut player, backend) = player();

    player.toggle(1).await.unwrap();
    assert_eq!(player.active_index(), Some(1));

    player.toggle(1).await.unwrap();
    assert_eq!(player.active_index(), None);
    assert_eq!(backend.live(), 0);
}

#[tokio::test]
async fn test_toggle_other_index_switches() {
    let (mut player, backend) = player();

    player.toggle(0).await.unwrap();
    player.toggle(2).await.unwrap();

    assert_eq!(player.active_index(), Some(2));
    assert_eq!(backend.live(), 1);
}

#[tokio::test]
async fn test_transport_noop_when_idle() {
    let (mut player, backend) = player();

    player.next().await.unwrap();
    player.previous().await.unwrap();
    player.stop();

    assert_eq!(player.active_index(), None);
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn test_invalid_index_rejected() {
    let (mut player, backend) = player();
    player.play(0).await.unwrap();

    let err = player.play(3).await.unwrap_err();
    assert!(matches!(err, KeepsakeError::InvalidTrackIndex { index: 3, len: 3 }));

    // Rejected before teardown: the current track keeps playing
    assert_eq!(player.active_index(), Some(0));
    assert_eq!(backend.live(), 1);
}

#[tokio::test]
async fn test_replay_same_index_restarts() {
    let (mut player, backend) = player();

    player.play(1).await.unwrap();
    let first = player.session().unwrap().id();
    player.play(1).await.unwrap();
    let second = player.session().unwrap().id();

    assert_ne!(first, second);
    assert_eq!(backend.live(), 1);
}

// ============================================================================
// Session exclusivity and ordering
// ============================================================================

#[tokio::test]
async fn test_teardown_completes_before_acquire() {
    let _ = tracing_subscriber::fmt::try_init();
    let (mut player, backend) = player();

    player.play(0).await.unwrap();
    player.play(1).await.unwrap();

    let calls = backend.calls();
    let expected = [
        "acquire:a.mp3",
        "play:a.mp3",
        "detach:a.mp3",
        "pause:a.mp3",
        "release:a.mp3",
        "acquire:b.mp3",
        "play:b.mp3",
    ];
    assert_eq!(calls, expected);
    assert_eq!(backend.max_live(), 1);
}

#[tokio::test]
async fn test_many_switches_keep_one_session() {
    let (mut player, backend) = player();

    for index in [0, 2, 1, 1, 0, 2, 2, 1] {
        player.play(index).await.unwrap();
    }

    assert_eq!(player.active_index(), Some(1));
    assert_eq!(backend.live(), 1);
    assert_eq!(backend.max_live(), 1);
}

// ============================================================================
// Signals
// ============================================================================

#[tokio::test]
async fn test_progress_and_duration_mirrored() {
    let (mut player, backend) = player();
    player.play(0).await.unwrap();

    backend.last_sink().emit(MediaSignal::Progress(45.0));
    drain(&mut player).await;

    let snapshot = player.snapshot();
    assert_eq!(snapshot.active, Some(0));
    assert_eq!(snapshot.duration_seconds, 180.0);
    assert_eq!(snapshot.position_seconds, 45.0);
    assert_eq!(snapshot.progress_percent(), 25.0);
}

#[tokio::test]
async fn test_finished_auto_advances_with_wrap() {
    let (mut player, backend) = player();

    for start in 0..3 {
        player.play(start).await.unwrap();
        backend.last_sink().emit(MediaSignal::Finished);
        drain(&mut player).await;
        assert_eq!(player.active_index(), Some((start + 1) % 3));
    }
}

#[tokio::test]
async fn test_auto_advance_chains() {
    let (mut player, backend) = player();
    player.play(0).await.unwrap();

    for expected in [1, 2, 0, 1] {
        backend.last_sink().emit(MediaSignal::Finished);
        drain(&mut player).await;
        assert_eq!(player.active_index(), Some(expected));
    }
}

/// Signals from a torn-down session must not touch the new one
#[tokio::test]
async fn test_late_signals_after_switch_ignored() {
    let (mut player, backend) = player();

    player.play(0).await.unwrap();
    let old_sink = backend.sink(0);
    player.play(1).await.unwrap();
    drain(&mut player).await;
    let before = player.snapshot();

    old_sink.emit(MediaSignal::Progress(99.0));
    old_sink.emit(MediaSignal::DurationKnown(5.0));
    old_sink.emit(MediaSignal::Finished);
    drain(&mut player).await;

    assert_eq!(player.snapshot(), before);
    assert_eq!(player.active_index(), Some(1));
}

#[tokio::test]
async fn test_late_finished_after_stop_ignored() {
    let (mut player, backend) = player();

    player.play(2).await.unwrap();
    let sink = backend.last_sink();
    player.stop();

    sink.emit(MediaSignal::Progress(10.0));
    sink.emit(MediaSignal::Finished);
    drain(&mut player).await;

    assert_eq!(player.active_index(), None);
    assert_eq!(backend.live(), 0);
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn test_start_failure_then_recovery() {
    let _ = tracing_subscriber::fmt::try_init();
    let (mut player, backend) = player();
    backend.fail_on("a.mp3");

    let err = player.play(0).await.unwrap_err();
    assert!(matches!(err, KeepsakeError::PlaybackStart(_)));
    assert_eq!(player.active_index(), None);
    assert_eq!(backend.live(), 0);

    player.play(1).await.unwrap();
    assert_eq!(player.active_index(), Some(1));
}

#[tokio::test]
async fn test_start_failure_does_not_restore_previous() {
    let (mut player, backend) = player();
    backend.fail_on("c.mp3");

    player.play(1).await.unwrap();
    assert!(player.next().await.is_err());

    assert_eq!(player.active_index(), None);
    assert_eq!(backend.live(), 0);
}

#[tokio::test]
async fn test_auto_advance_into_failure_stops() {
    let (mut player, backend) = player();
    backend.fail_on("b.mp3");

    player.play(0).await.unwrap();
    drain(&mut player).await;

    backend.last_sink().emit(MediaSignal::Finished);
    let tagged = player.try_next_signal().unwrap();

    assert!(player.handle_signal(tagged).await.is_err());
    assert_eq!(player.active_index(), None);
}

// ============================================================================
// Observers and teardown
// ============================================================================

#[tokio::test]
async fn test_track_changed_fires_on_publish_only() {
    let titles = Rc::new(RefCell::new(Vec::new()));
    let seen = titles.clone();
    let backend = FakeBackend::new();
    backend.fail_on("b.mp3");
    let mut player = PlaylistPlayer::new(three_tracks(), backend.clone())
        .with_track_changed(move |_, title| seen.borrow_mut().push(title.to_string()));
    let mut events = player.subscribe();

    player.play(0).await.unwrap();
    let _ = player.play(1).await;
    player.play(2).await.unwrap();
    player.stop();

    assert_eq!(*titles.borrow(), vec!["A".to_string(), "C".to_string()]);

    assert_eq!(
        events.try_recv().unwrap(),
        PlayerEvent::TrackChanged { index: 0, title: "A".to_string() }
    );
    assert!(matches!(
        events.try_recv().unwrap(),
        PlayerEvent::StartFailed { index: 1, .. }
    ));
    assert_eq!(
        events.try_recv().unwrap(),
        PlayerEvent::TrackChanged { index: 2, title: "C".to_string() }
    );
    assert_eq!(events.try_recv().unwrap(), PlayerEvent::Stopped { index: 2 });
}

#[tokio::test]
async fn test_drop_releases_session() {
    let backend = FakeBackend::new();
    {
        let mut player = PlaylistPlayer::new(three_tracks(), backend.clone());
        player.play(0).await.unwrap();
        assert_eq!(backend.live(), 1);
    }
    assert_eq!(backend.live(), 0);

    let calls = backend.calls();
    assert_eq!(calls[calls.len() - 3..], ["detach:a.mp3", "pause:a.mp3", "release:a.mp3"]);
}

#[tokio::test]
async fn test_shutdown_is_idempotent() {
    let (mut player, backend) = player();
    player.play(1).await.unwrap();

    player.shutdown();
    player.shutdown();

    assert_eq!(player.active_index(), None);
    assert_eq!(backend.live(), 0);
}
