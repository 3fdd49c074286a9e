//! UI Components for Keepsake.
//!
//! Soft pink paper-card aesthetic: polaroids, sticky notes, a letter.

mod gallery;
mod greeting;
mod hearts;
mod letter;
mod notes;
mod playlist;

pub use gallery::PolaroidGallery;
pub use greeting::GreetingHeader;
pub use hearts::FloatingHearts;
pub use letter::{LetterCard, LetterModal};
pub use notes::FlipNotes;
pub use playlist::PlaylistSection;
