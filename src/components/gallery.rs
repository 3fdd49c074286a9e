//! Polaroid gallery with alternating tilt.

use dioxus::prelude::*;
use rand::Rng;

use crate::context::use_content;

/// Tilt of the n-th polaroid: sign alternates, magnitude is 1-4 degrees.
fn polaroid_tilt(index: usize, magnitude: f32) -> f32 {
    if index % 2 == 0 {
        magnitude
    } else {
        -magnitude
    }
}

fn rotate_style(degrees: f32) -> String {
    format!("transform: rotate({degrees}deg);")
}

#[component]
pub fn PolaroidGallery() -> Element {
    let content = use_content();
    let gallery = content.gallery.clone();

    // Rolled once per mount so the photos don't wobble on every render
    let tilts = use_hook(|| {
        let mut rng = rand::rng();
        (0..gallery.photos.len())
            .map(|i| polaroid_tilt(i, rng.random_range(1.0..4.0)))
            .collect::<Vec<f32>>()
    });

    rsx! {
        section { class: "gallery-section",
            div { class: "section-icon", "🖼️" }
            h2 { class: "section-title", "{gallery.title}" }
            p { class: "section-subtitle", "{gallery.subtitle}" }

            div { class: "polaroid-strip",
                for (i, photo) in gallery.photos.iter().enumerate() {
                    figure {
                        key: "{i}",
                        class: "polaroid",
                        style: rotate_style(tilts.get(i).copied().unwrap_or_default()),
                        div { class: "polaroid-frame",
                            img { src: "{photo.src}", alt: "{photo.caption}" }
                            span { class: "polaroid-heart", "♥" }
                        }
                        figcaption { class: "polaroid-caption", "{photo.caption}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tilt_alternates() {
        assert_eq!(polaroid_tilt(0, 2.5), 2.5);
        assert_eq!(polaroid_tilt(1, 2.5), -2.5);
        assert_eq!(polaroid_tilt(4, 1.0), 1.0);
    }
}
