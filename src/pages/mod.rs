//! Top-level views swapped by `App` once the intro completes.

mod intro;
mod main_page;

pub use intro::EnvelopeIntro;
pub use main_page::MainPage;
