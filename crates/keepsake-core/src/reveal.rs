//! Envelope → letter → main content reveal sequence
//!
//! ```text
//! ┌────────┐ open_envelope ┌─────────────────────┐ letter timer ┌─────────────┐
//! │ Closed │ ────────────▶ │ OpenedPendingLetter │ ───────────▶ │ LetterShown │
//! └────────┘               └─────────────────────┘              └─────────────┘
//!                                                    show_letter ▲     │ dismiss_letter
//!                                                                │     ▼
//!                                                             ┌──────────────┐
//!                                                             │ MainRevealed │
//!                                                             └──────────────┘
//! ```
//!
//! Opening the envelope schedules two timers: the letter appears after
//! [`RevealTiming::letter_delay`], and the intro is declared complete after
//! [`RevealTiming::intro_delay`]. Timers are tokio tasks owned by the
//! controller; dropping the controller aborts them.

use std::time::Duration;

use tokio::task::JoinSet;
use tracing::{debug, info, trace};

/// Default delay between the envelope click and the letter appearing
pub const DEFAULT_LETTER_DELAY: Duration = Duration::from_millis(600);

/// Default delay between the envelope click and the end of the intro
pub const DEFAULT_INTRO_DELAY: Duration = Duration::from_millis(2000);

/// Delays of the reveal sequence, both measured from the envelope click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTiming {
    pub letter_delay: Duration,
    pub intro_delay: Duration,
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self {
            letter_delay: DEFAULT_LETTER_DELAY,
            intro_delay: DEFAULT_INTRO_DELAY,
        }
    }
}

/// Flags of the reveal sequence.
///
/// `has_viewed_letter_once` implies `envelope_opened`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealState {
    pub envelope_opened: bool,
    pub letter_visible: bool,
    pub has_viewed_letter_once: bool,
    pub intro_complete: bool,
}

impl RevealState {
    pub fn phase(&self) -> RevealPhase {
        if !self.envelope_opened {
            RevealPhase::Closed
        } else if self.letter_visible {
            RevealPhase::LetterShown
        } else if self.has_viewed_letter_once {
            RevealPhase::MainRevealed
        } else {
            RevealPhase::OpenedPendingLetter
        }
    }

    pub fn main_emphasis(&self) -> MainEmphasis {
        if self.has_viewed_letter_once {
            MainEmphasis::Shown
        } else {
            MainEmphasis::Hidden
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    Closed,
    OpenedPendingLetter,
    /// The letter is on screen. May recur after the main content is revealed.
    LetterShown,
    MainRevealed,
}

/// Visual emphasis of the main content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainEmphasis {
    Hidden,
    Shown,
}

impl MainEmphasis {
    pub fn opacity(&self) -> f32 {
        match self {
            MainEmphasis::Hidden => 0.0,
            MainEmphasis::Shown => 1.0,
        }
    }

    /// Vertical offset in pixels
    pub fn offset_px(&self) -> f32 {
        match self {
            MainEmphasis::Hidden => 20.0,
            MainEmphasis::Shown => 0.0,
        }
    }

    /// Transition delay in milliseconds
    pub fn transition_delay_ms(&self) -> u64 {
        match self {
            MainEmphasis::Hidden => 0,
            MainEmphasis::Shown => 300,
        }
    }
}

/// What changed after an operation or timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealEvent {
    EnvelopeOpened,
    LetterShown,
    LetterDismissed { first_time: bool },
    IntroComplete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RevealTimer {
    LetterDue,
    IntroDue,
}

type IntroCompleteCallback = Box<dyn FnOnce()>;

/// Owns the reveal flags and their pending timers.
///
/// # Example
///
/// ```ignore
/// let mut reveal = RevealController::new(RevealTiming::default());
/// reveal.open_envelope();
///
/// // LetterShown after 600 ms, IntroComplete after 2 s
/// let event = reveal.next_timer().await;
/// ```
pub struct RevealController {
    state: RevealState,
    timing: RevealTiming,
    timers: JoinSet<RevealTimer>,
    on_intro_complete: Option<IntroCompleteCallback>,
}

impl RevealController {
    pub fn new(timing: RevealTiming) -> Self {
        Self {
            state: RevealState::default(),
            timing,
            timers: JoinSet::new(),
            on_intro_complete: None,
        }
    }

    /// Register a callback invoked once when the intro completes.
    pub fn with_intro_complete(mut self, callback: impl FnOnce() + 'static) -> Self {
        self.on_intro_complete = Some(Box::new(callback));
        self
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn timing(&self) -> RevealTiming {
        self.timing
    }

    pub fn has_pending_timers(&self) -> bool {
        !self.timers.is_empty()
    }

    /// Open the envelope and schedule the letter and intro-complete timers.
    ///
    /// Must be called within a tokio runtime. Returns `None` if the envelope
    /// was already open; nothing is scheduled twice.
    pub fn open_envelope(&mut self) -> Option<RevealEvent> {
        if self.state.envelope_opened {
            trace!("Envelope already open, ignoring click");
            return None;
        }
        self.state.envelope_opened = true;

        let RevealTiming {
            letter_delay,
            intro_delay,
        } = self.timing;
        self.timers.spawn(async move {
            tokio::time::sleep(letter_delay).await;
            RevealTimer::LetterDue
        });
        self.timers.spawn(async move {
            tokio::time::sleep(intro_delay).await;
            RevealTimer::IntroDue
        });

        info!(?letter_delay, ?intro_delay, "Envelope opened");
        Some(RevealEvent::EnvelopeOpened)
    }

    /// Show the letter again. Ignored until the envelope is open.
    pub fn show_letter(&mut self) -> Option<RevealEvent> {
        if !self.state.envelope_opened {
            return None;
        }
        self.state.letter_visible = true;
        debug!("Letter shown");
        Some(RevealEvent::LetterShown)
    }

    /// Hide the letter. The first dismissal reveals the main content for good.
    pub fn dismiss_letter(&mut self) -> Option<RevealEvent> {
        if !self.state.envelope_opened {
            return None;
        }
        self.state.letter_visible = false;
        let first_time = !self.state.has_viewed_letter_once;
        self.state.has_viewed_letter_once = true;
        if first_time {
            info!("Letter dismissed for the first time, revealing main content");
        }
        Some(RevealEvent::LetterDismissed { first_time })
    }

    /// Wait for the next timer, apply it and report what changed.
    ///
    /// Stays pending while no timer is scheduled, so it can sit in a
    /// `select!` next to UI commands.
    pub async fn next_timer(&mut self) -> RevealEvent {
        loop {
            match self.timers.join_next().await {
                Some(Ok(timer)) => return self.apply_timer(timer),
                Some(Err(e)) => trace!(error = %e, "Reveal timer did not complete"),
                None => std::future::pending::<()>().await,
            }
        }
    }

    /// Abort every pending timer. Also happens on drop.
    pub fn cancel_timers(&mut self) {
        if !self.timers.is_empty() {
            debug!(pending = self.timers.len(), "Cancelling reveal timers");
        }
        // Dropping a JoinSet aborts its tasks
        self.timers = JoinSet::new();
    }

    fn apply_timer(&mut self, timer: RevealTimer) -> RevealEvent {
        match timer {
            RevealTimer::LetterDue => {
                self.state.letter_visible = true;
                debug!("Letter revealed by timer");
                RevealEvent::LetterShown
            }
            RevealTimer::IntroDue => {
                self.state.intro_complete = true;
                info!("Intro complete");
                if let Some(callback) = self.on_intro_complete.take() {
                    callback();
                }
                RevealEvent::IntroComplete
            }
        }
    }
}

impl Default for RevealController {
    fn default() -> Self {
        Self::new(RevealTiming::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_derivation() {
        let mut state = RevealState::default();
        assert_eq!(state.phase(), RevealPhase::Closed);

        state.envelope_opened = true;
        assert_eq!(state.phase(), RevealPhase::OpenedPendingLetter);

        state.letter_visible = true;
        assert_eq!(state.phase(), RevealPhase::LetterShown);

        state.letter_visible = false;
        state.has_viewed_letter_once = true;
        assert_eq!(state.phase(), RevealPhase::MainRevealed);

        state.letter_visible = true;
        assert_eq!(state.phase(), RevealPhase::LetterShown);
    }

    #[test]
    fn test_emphasis_follows_latch() {
        let mut state = RevealState::default();
        assert_eq!(state.main_emphasis(), MainEmphasis::Hidden);
        assert_eq!(state.main_emphasis().opacity(), 0.0);

        state.envelope_opened = true;
        state.has_viewed_letter_once = true;
        assert_eq!(state.main_emphasis(), MainEmphasis::Shown);
        assert_eq!(state.main_emphasis().offset_px(), 0.0);
    }

    #[test]
    fn test_letter_ops_ignored_before_open() {
        let mut reveal = RevealController::default();
        assert_eq!(reveal.show_letter(), None);
        assert_eq!(reveal.dismiss_letter(), None);
        assert_eq!(reveal.state(), RevealState::default());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismiss_latch() {
        let mut reveal = RevealController::default();
        reveal.open_envelope();

        assert_eq!(
            reveal.dismiss_letter(),
            Some(RevealEvent::LetterDismissed { first_time: true })
        );
        assert_eq!(
            reveal.dismiss_letter(),
            Some(RevealEvent::LetterDismissed { first_time: false })
        );
        assert!(reveal.state().has_viewed_letter_once);
    }
}
