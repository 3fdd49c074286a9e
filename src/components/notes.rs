//! Sticky notes that flip over on click.

use dioxus::prelude::*;
use keepsake_core::NotePalette;

use crate::context::use_content;

#[component]
pub fn FlipNotes() -> Element {
    let content = use_content();
    let notes = content.notes.clone();

    rsx! {
        section { class: "notes-section",
            div { class: "notes-grid",
                for (i, note) in notes.into_iter().enumerate() {
                    FlipNote { key: "{i}", text: note.text, palette: note.palette }
                }
            }
        }
    }
}

/// One note. The flip is local to the note and resets if it is remounted.
///
/// # Example
///
/// ```ignore
/// rsx! {
///     FlipNote { text: "You make every day brighter", palette: NotePalette::Sunshine }
/// }
/// ```
#[component]
pub fn FlipNote(text: String, palette: NotePalette) -> Element {
    let mut flipped = use_signal(|| false);
    let flip_class = if flipped() { "flipped" } else { "" };
    let palette_class = palette.css_class();

    rsx! {
        div {
            class: "flip-note",
            onclick: move |_| flipped.set(!flipped()),
            div { class: "flip-note-inner {flip_class}",
                div { class: "flip-note-front {palette_class}",
                    div { class: "note-tape" }
                    p { class: "note-text", "{text}" }
                    span { class: "note-hint", "Click me!" }
                }
                div { class: "flip-note-back",
                    span { class: "note-heart", "♥" }
                    p { class: "note-text", "Made with love 💕" }
                }
            }
        }
    }
}
