use dioxus::prelude::*;
use keepsake_core::{Heart, HeartColor};

fn heart_class(color: HeartColor) -> String {
    format!("floating-heart {}", color.css_class())
}

/// Hearts left behind by clicks, floating up from where they were spawned.
#[component]
pub fn FloatingHearts(hearts: Vec<Heart>) -> Element {
    rsx! {
        div { class: "hearts-layer",
            for heart in hearts {
                span {
                    key: "{heart.id}",
                    class: heart_class(heart.color),
                    style: "left: {heart.x}px; top: {heart.y}px;",
                    "♥"
                }
            }
        }
    }
}
