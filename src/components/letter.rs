//! Letter teaser card and the letter modal.
//!
//! The teaser lives on the main page and reopens the letter. The modal is
//! rendered by `App` whenever the reveal state says the letter is visible.

use dioxus::prelude::*;

use crate::context::{use_content, use_reveal_commands, RevealCommand};

/// Teaser card that reopens the letter.
///
/// # Example
///
/// ```ignore
/// rsx! {
///     LetterCard {}
/// }
/// ```
#[component]
pub fn LetterCard() -> Element {
    let content = use_content();
    let commands = use_reveal_commands();
    let title = content.letter.title.clone();
    let subtitle = content.letter.subtitle.clone();

    rsx! {
        section {
            class: "letter-card",
            onclick: move |_| commands.send(RevealCommand::ShowLetter),
            div { class: "letter-card-icon", "💌" }
            h2 { class: "section-title", "{title}" }
            p { class: "section-subtitle", "{subtitle}" }
        }
    }
}

/// The letter itself, over a dimmed overlay.
///
/// Clicking the overlay or the close button dismisses it. Clicks inside the
/// paper stay inside.
#[component]
pub fn LetterModal() -> Element {
    let content = use_content();
    let commands = use_reveal_commands();
    let letter = content.letter.clone();

    let dismiss = move |_: MouseEvent| commands.send(RevealCommand::DismissLetter);

    rsx! {
        div { class: "letter-overlay", onclick: dismiss,
            article {
                class: "letter-paper",
                onclick: move |e| e.stop_propagation(),

                button { class: "letter-close", onclick: dismiss, "×" }

                p { class: "letter-recipient", "{letter.recipient}" }
                for (i, paragraph) in letter.paragraphs.iter().enumerate() {
                    p { key: "{i}", class: "letter-paragraph", "{paragraph}" }
                }
                p { class: "letter-signature",
                    for (i, line) in letter.signature.lines().enumerate() {
                        span { key: "{i}", "{line}" }
                        br {}
                    }
                }
            }
        }
    }
}
