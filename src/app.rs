use std::sync::Arc;

use dioxus::prelude::*;
use futures::StreamExt;
use keepsake_core::{RevealController, RevealState};

use crate::components::LetterModal;
use crate::context::{get_content, NowPlaying, RevealCommand};
use crate::pages::{EnvelopeIntro, MainPage};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles, the card content and the reveal sequence. The
/// reveal controller lives inside a coroutine; unmounting the app drops it,
/// which aborts any pending reveal timers.
#[component]
pub fn App() -> Element {
    let content = use_hook(|| Arc::new(get_content()));
    let mut reveal_state: Signal<RevealState> = use_signal(RevealState::default);
    let now_playing: Signal<NowPlaying> = use_signal(NowPlaying::default);

    use_context_provider(|| content);
    use_context_provider(|| reveal_state);
    use_context_provider(|| now_playing);

    use_coroutine(move |mut commands: UnboundedReceiver<RevealCommand>| async move {
        let mut reveal = RevealController::default()
            .with_intro_complete(|| tracing::info!("Intro complete, showing card"));

        loop {
            tokio::select! {
                command = commands.next() => {
                    let Some(command) = command else { break };
                    let event = match command {
                        RevealCommand::OpenEnvelope => reveal.open_envelope(),
                        RevealCommand::ShowLetter => reveal.show_letter(),
                        RevealCommand::DismissLetter => reveal.dismiss_letter(),
                    };
                    if event.is_none() {
                        tracing::trace!(?command, "Reveal command ignored");
                    }
                }
                event = reveal.next_timer() => {
                    tracing::debug!(?event, "Reveal timer fired");
                }
            }
            reveal_state.set(reveal.state());
        }
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        if reveal_state().intro_complete {
            MainPage {}
        } else {
            EnvelopeIntro {}
        }
        // The letter opens over the envelope and stays up across the swap
        if reveal_state().letter_visible {
            LetterModal {}
        }
    }
}
