//! Scripted media backend shared by the integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use keepsake_core::{
    KeepsakeError, KeepsakeResult, MediaBackend, MediaResource, MediaSignal, Playlist,
    PlaylistPlayer, SignalSink, Track,
};

/// Everything the fake backend observed, in order.
#[derive(Debug, Default)]
pub struct FakeLog {
    /// `acquire:<uri>`, `play:<uri>`, `detach:<uri>`, `pause:<uri>`, `release:<uri>`
    pub calls: Vec<String>,
    /// Sinks handed out, one per acquisition
    pub sinks: Vec<SignalSink>,
    pub live: usize,
    pub max_live: usize,
    /// URIs whose `play` fails
    pub failing: HashSet<String>,
}

#[derive(Debug, Clone, Default)]
pub struct FakeBackend {
    pub log: Rc<RefCell<FakeLog>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_on(&self, uri: &str) {
        self.log.borrow_mut().failing.insert(uri.to_string());
    }

    pub fn recover(&self, uri: &str) {
        self.log.borrow_mut().failing.remove(uri);
    }

    pub fn live(&self) -> usize {
        self.log.borrow().live
    }

    pub fn max_live(&self) -> usize {
        self.log.borrow().max_live
    }

    pub fn calls(&self) -> Vec<String> {
        self.log.borrow().calls.clone()
    }

    /// Sink of the n-th acquisition, for emitting signals from the outside.
    pub fn sink(&self, n: usize) -> SignalSink {
        self.log.borrow().sinks[n].clone()
    }

    pub fn last_sink(&self) -> SignalSink {
        self.log.borrow().sinks.last().cloned().expect("no resource acquired yet")
    }
}

impl MediaBackend for FakeBackend {
    type Resource = FakeResource;

    fn acquire(&mut self, uri: &str, sink: SignalSink) -> KeepsakeResult<FakeResource> {
        let mut log = self.log.borrow_mut();
        log.calls.push(format!("acquire:{uri}"));
        log.sinks.push(sink.clone());
        log.live += 1;
        log.max_live = log.max_live.max(log.live);
        Ok(FakeResource {
            uri: uri.to_string(),
            log: self.log.clone(),
            sink: Some(sink),
        })
    }
}

#[derive(Debug)]
pub struct FakeResource {
    uri: String,
    log: Rc<RefCell<FakeLog>>,
    sink: Option<SignalSink>,
}

impl FakeResource {
    fn record(&self, call: &str) {
        self.log.borrow_mut().calls.push(format!("{call}:{}", self.uri));
    }
}

impl MediaResource for FakeResource {
    async fn play(&mut self) -> KeepsakeResult<()> {
        self.record("play");
        if self.log.borrow().failing.contains(&self.uri) {
            return Err(KeepsakeError::PlaybackStart(format!(
                "cannot decode {}",
                self.uri
            )));
        }
        if let Some(sink) = &self.sink {
            sink.emit(MediaSignal::DurationKnown(180.0));
        }
        Ok(())
    }

    fn pause(&mut self) {
        self.record("pause");
    }

    fn set_position(&mut self, _seconds: f64) {}

    fn detach(&mut self) {
        self.record("detach");
        self.sink = None;
    }
}

impl Drop for FakeResource {
    fn drop(&mut self) {
        self.record("release");
        self.log.borrow_mut().live -= 1;
    }
}

pub fn three_tracks() -> Playlist {
    Playlist::new(vec![
        Track::new("A", "", "a.mp3", "a.jpg"),
        Track::new("B", "", "b.mp3", "b.jpg"),
        Track::new("C", "", "c.mp3", "c.jpg"),
    ])
    .unwrap()
}

pub fn playlist_of(len: usize) -> Playlist {
    Playlist::new(
        (0..len)
            .map(|i| Track::new(format!("T{i}"), "", format!("{i}.mp3"), format!("{i}.jpg")))
            .collect(),
    )
    .unwrap()
}

/// Apply every queued signal, including those that trigger auto-advance.
pub async fn drain(player: &mut PlaylistPlayer<FakeBackend>) {
    while let Some(signal) = player.try_next_signal() {
        let _ = player.handle_signal(signal).await;
    }
}
