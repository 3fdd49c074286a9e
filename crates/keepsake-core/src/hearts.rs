//! Floating hearts spawned by clicks on the main page.
//!
//! Spawning is throttled and the trail is capped so a burst of clicks never
//! floods the page.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use rand::Rng;

/// Minimum time between two hearts
pub const SPAWN_THROTTLE: Duration = Duration::from_millis(100);

/// Hearts kept alive after a spawn
pub const MAX_KEPT_HEARTS: usize = 6;

/// Hearts rendered at once
pub const MAX_VISIBLE_HEARTS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeartColor {
    Pink,
    Red,
    Purple,
}

impl HeartColor {
    pub const ALL: [HeartColor; 3] = [HeartColor::Pink, HeartColor::Red, HeartColor::Purple];

    pub fn css_class(&self) -> &'static str {
        match self {
            HeartColor::Pink => "heart-pink",
            HeartColor::Red => "heart-red",
            HeartColor::Purple => "heart-purple",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Heart {
    pub id: u64,
    pub x: f64,
    pub y: f64,
    pub color: HeartColor,
}

#[derive(Debug, Default)]
pub struct HeartTrail {
    hearts: VecDeque<Heart>,
    last_spawn: Option<Instant>,
    next_id: u64,
}

impl HeartTrail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a heart at page coordinates, unless the last one was spawned
    /// less than [`SPAWN_THROTTLE`] ago. Returns the new heart's id.
    pub fn spawn(&mut self, x: f64, y: f64, now: Instant) -> Option<u64> {
        if let Some(last) = self.last_spawn {
            if now.saturating_duration_since(last) < SPAWN_THROTTLE {
                return None;
            }
        }
        self.last_spawn = Some(now);

        let color = HeartColor::ALL[rand::rng().random_range(0..HeartColor::ALL.len())];
        let id = self.next_id;
        self.next_id += 1;

        self.hearts.push_back(Heart { id, x, y, color });
        while self.hearts.len() > MAX_KEPT_HEARTS {
            self.hearts.pop_front();
        }
        Some(id)
    }

    /// Drop a heart once its animation finished.
    pub fn remove(&mut self, id: u64) {
        self.hearts.retain(|h| h.id != id);
    }

    /// The newest hearts, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Heart> {
        let skip = self.hearts.len().saturating_sub(MAX_VISIBLE_HEARTS);
        self.hearts.iter().skip(skip)
    }

    pub fn len(&self) -> usize {
        self.hearts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hearts.is_empty()
    }
}
