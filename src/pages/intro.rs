//! Envelope intro - the closed envelope shown before anything else.
//!
//! Clicking the envelope opens the flap; the reveal coroutine then shows the
//! letter and, a little later, swaps this page for the main card.

use dioxus::prelude::*;

use crate::context::{use_content, use_reveal_commands, use_reveal_state, RevealCommand};

#[component]
pub fn EnvelopeIntro() -> Element {
    let content = use_content();
    let reveal = use_reveal_state();
    let commands = use_reveal_commands();

    let state = reveal();
    let envelope_class = if state.envelope_opened {
        "envelope open"
    } else {
        "envelope"
    };
    let preview = content.ui.envelope_preview.clone();
    let hint = content.ui.envelope_hint.clone();
    let recipient = content.letter.recipient.clone();

    rsx! {
        main { class: "intro",
            div { class: "intro-glow" }

            div {
                class: "{envelope_class}",
                onclick: move |_| commands.send(RevealCommand::OpenEnvelope),

                div { class: "envelope-back" }
                // Peeks out of the envelope while the flap is open
                div { class: "envelope-letter",
                    p { class: "envelope-preview-to", "{recipient}" }
                    p { class: "envelope-preview", "{preview}" }
                }
                div { class: "envelope-front" }
                div { class: "envelope-flap" }
                div { class: "wax-seal", "♥" }
            }

            if !state.envelope_opened {
                p { class: "envelope-hint", "{hint}" }
            }
        }
    }
}
