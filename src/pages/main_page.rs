//! Main card page - everything revealed after the envelope.
//!
//! The content column fades and slides in once the letter has been read.
//! Clicking anywhere leaves a short-lived floating heart behind.

use std::time::{Duration, Instant};

use dioxus::prelude::*;
use keepsake_core::{Heart, HeartTrail, MainEmphasis};

use crate::components::{
    FlipNotes, FloatingHearts, GreetingHeader, LetterCard, PlaylistSection, PolaroidGallery,
};
use crate::context::use_reveal_state;

/// How long a heart floats before it is removed
const HEART_LIFETIME: Duration = Duration::from_millis(2000);

#[component]
pub fn MainPage() -> Element {
    let reveal = use_reveal_state();
    let mut hearts = use_signal(HeartTrail::new);

    let content_style = emphasis_style(reveal().main_emphasis());

    let leave_heart = move |evt: MouseEvent| {
        let point = evt.client_coordinates();
        let spawned = hearts.write().spawn(point.x, point.y, Instant::now());
        if let Some(id) = spawned {
            spawn(async move {
                tokio::time::sleep(HEART_LIFETIME).await;
                hearts.write().remove(id);
            });
        }
    };

    let visible: Vec<Heart> = hearts.read().visible().copied().collect();

    rsx! {
        main { class: "card-page", onclick: leave_heart,
            div { class: "card-content", style: "{content_style}",
                GreetingHeader {}
                LetterCard {}
                PolaroidGallery {}
                FlipNotes {}
                PlaylistSection {}
                footer { class: "card-footer", "Made with love 💕" }
            }

            FloatingHearts { hearts: visible }
        }
    }
}

fn emphasis_style(emphasis: MainEmphasis) -> String {
    format!(
        "opacity: {}; transform: translateY({}px); transition-delay: {}ms;",
        emphasis.opacity(),
        emphasis.offset_px(),
        emphasis.transition_delay_ms()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emphasis_style() {
        assert_eq!(
            emphasis_style(MainEmphasis::Hidden),
            "opacity: 0; transform: translateY(20px); transition-delay: 0ms;"
        );
        assert_eq!(
            emphasis_style(MainEmphasis::Shown),
            "opacity: 1; transform: translateY(0px); transition-delay: 300ms;"
        );
    }
}
