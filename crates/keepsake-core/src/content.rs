//! Card content: every piece of text, image and audio the card shows.
//!
//! Content is supplied as a JSON document and is read-only for the whole
//! session. When no file is given the built-in defaults are used.
//!
//! ```json
//! {
//!   "greeting": { "name": "Hey you!", "message": "Click on the message to view my letter" },
//!   "playlist": {
//!     "title": "Playlist For You",
//!     "subtitle": "Dedicated to you",
//!     "tracks": [
//!       { "title": "Song", "info": "", "src": "./music/music1.mp3", "cover": "./musiccover/music1.jpg" }
//!     ]
//!   }
//! }
//! ```
//!
//! Sections omitted from the file keep their defaults.

use std::ops::Index;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{KeepsakeError, KeepsakeResult};

/// One entry of the playlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub title: String,
    /// Short caption shown under the title
    #[serde(default)]
    pub info: String,
    /// URI of the audio file
    #[serde(rename = "src")]
    pub audio_source: String,
    /// URI of the cover image
    #[serde(rename = "cover")]
    pub cover_image_source: String,
}

impl Track {
    pub fn new(
        title: impl Into<String>,
        info: impl Into<String>,
        audio_source: impl Into<String>,
        cover_image_source: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            info: info.into(),
            audio_source: audio_source.into(),
            cover_image_source: cover_image_source.into(),
        }
    }
}

/// Ordered, non-empty, immutable list of tracks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Track>", into = "Vec<Track>")]
pub struct Playlist {
    tracks: Vec<Track>,
}

impl Playlist {
    /// Build a playlist, rejecting an empty track list.
    pub fn new(tracks: Vec<Track>) -> KeepsakeResult<Self> {
        if tracks.is_empty() {
            return Err(KeepsakeError::EmptyPlaylist);
        }
        Ok(Self { tracks })
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Always false; kept for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Track> {
        self.tracks.iter()
    }

    /// Index after `index`, wrapping to the first track.
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.len()
    }

    /// Index before `index`, wrapping to the last track.
    pub fn previous_index(&self, index: usize) -> usize {
        (index + self.len() - 1) % self.len()
    }
}

impl TryFrom<Vec<Track>> for Playlist {
    type Error = KeepsakeError;

    fn try_from(tracks: Vec<Track>) -> Result<Self, Self::Error> {
        Self::new(tracks)
    }
}

impl From<Playlist> for Vec<Track> {
    fn from(playlist: Playlist) -> Self {
        playlist.tracks
    }
}

impl Index<usize> for Playlist {
    type Output = Track;

    fn index(&self, index: usize) -> &Track {
        &self.tracks[index]
    }
}

impl<'a> IntoIterator for &'a Playlist {
    type Item = &'a Track;
    type IntoIter = std::slice::Iter<'a, Track>;

    fn into_iter(self) -> Self::IntoIter {
        self.tracks.iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeting {
    pub name: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Letter {
    /// Title of the teaser card on the main page
    pub title: String,
    pub subtitle: String,
    pub recipient: String,
    pub paragraphs: Vec<String>,
    /// May contain line breaks
    pub signature: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub src: String,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gallery {
    pub title: String,
    pub subtitle: String,
    pub photos: Vec<Photo>,
}

/// Colour scheme of a flip note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotePalette {
    Sunshine,
    Lavender,
    Sky,
}

impl NotePalette {
    /// CSS class suffix used by the stylesheet
    pub fn css_class(&self) -> &'static str {
        match self {
            NotePalette::Sunshine => "note-sunshine",
            NotePalette::Lavender => "note-lavender",
            NotePalette::Sky => "note-sky",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub text: String,
    pub palette: NotePalette,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistSection {
    pub title: String,
    pub subtitle: String,
    pub tracks: Playlist,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiText {
    pub envelope_hint: String,
    pub envelope_preview: String,
}

/// Everything the card displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardContent {
    pub greeting: Greeting,
    pub letter: Letter,
    pub gallery: Gallery,
    pub notes: Vec<Note>,
    pub playlist: PlaylistSection,
    pub ui: UiText,
}

impl CardContent {
    /// Parse content from a JSON string.
    pub fn from_json(json: &str) -> KeepsakeResult<Self> {
        let content: CardContent = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    /// Load content from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> KeepsakeResult<Self> {
        let path = path.as_ref();
        debug!(?path, "Loading card content");
        let json = std::fs::read_to_string(path)?;
        let content = Self::from_json(&json)?;
        info!(
            tracks = content.playlist.tracks.len(),
            photos = content.gallery.photos.len(),
            "Card content loaded"
        );
        Ok(content)
    }

    /// Check the constraints serde cannot express.
    pub fn validate(&self) -> KeepsakeResult<()> {
        if self.letter.paragraphs.is_empty() {
            return Err(KeepsakeError::Content(
                "letter needs at least one paragraph".to_string(),
            ));
        }
        if let Some(track) = self
            .playlist
            .tracks
            .iter()
            .find(|t| t.audio_source.trim().is_empty())
        {
            return Err(KeepsakeError::Content(format!(
                "track '{}' has no audio source",
                track.title
            )));
        }
        Ok(())
    }
}

impl Default for CardContent {
    fn default() -> Self {
        Self {
            greeting: Greeting::default(),
            letter: Letter::default(),
            gallery: Gallery::default(),
            notes: vec![
                Note {
                    text: "You make every day brighter 🌟".to_string(),
                    palette: NotePalette::Sunshine,
                },
                Note {
                    text: "You're my favorite person 💕".to_string(),
                    palette: NotePalette::Lavender,
                },
                Note {
                    text: "I promise to do better ✨".to_string(),
                    palette: NotePalette::Sky,
                },
            ],
            playlist: PlaylistSection::default(),
            ui: UiText::default(),
        }
    }
}

impl Default for Greeting {
    fn default() -> Self {
        Self {
            name: "Heyy, KuchuPuchu!".to_string(),
            message: "Click on the message to view my letter".to_string(),
        }
    }
}

impl Default for Letter {
    fn default() -> Self {
        Self {
            title: "Read My Letter".to_string(),
            subtitle: "Click to see your special letter".to_string(),
            recipient: "Dear Kuchupuchu".to_string(),
            paragraphs: vec![
                "I wanted to make something special for you...".to_string(),
                "I hope this little surprise brings a smile to your face, just like you always bring to mine.".to_string(),
            ],
            signature: "Yours sincerely,\nMadam Ji".to_string(),
        }
    }
}

impl Default for Gallery {
    fn default() -> Self {
        Self {
            title: "Some Special Moments".to_string(),
            subtitle: "Swipe to see more ✨".to_string(),
            photos: vec![
                Photo {
                    src: "./images/pic1.gif".to_string(),
                    caption: "Thanks for always being there💕".to_string(),
                },
                Photo {
                    src: "./images/pic2.gif".to_string(),
                    caption: "Always making me smile 😊".to_string(),
                },
                Photo {
                    src: "./images/pic3.jpg".to_string(),
                    caption: "Hehe✨".to_string(),
                },
            ],
        }
    }
}

impl Default for PlaylistSection {
    fn default() -> Self {
        let tracks = vec![
            Track::new(
                "Dil Cheeze Tujhe Dedi",
                "🤌",
                "./music/music1.mp3",
                "./musiccover/music1.jpg",
            ),
            Track::new(
                "If The World Was Ending",
                "😁",
                "./music/music2.mp3",
                "./musiccover/music2.jpg",
            ),
            Track::new(
                "Dil Ka Jo Haal Hai",
                "🙂",
                "./music/music3.mp3",
                "./musiccover/music3.jpg",
            ),
        ];
        Self {
            title: "Playlist For You".to_string(),
            subtitle: "Dedicated to you 💖".to_string(),
            tracks: Playlist { tracks },
        }
    }
}

impl Default for UiText {
    fn default() -> Self {
        Self {
            envelope_hint: "Click to open".to_string(),
            envelope_preview: "💌 A letter for you...".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let content = CardContent::default();
        content.validate().unwrap();
        assert_eq!(content.playlist.tracks.len(), 3);
        assert_eq!(content.notes.len(), 3);
    }

    #[test]
    fn test_empty_playlist_rejected() {
        assert!(matches!(
            Playlist::new(Vec::new()),
            Err(KeepsakeError::EmptyPlaylist)
        ));

        let json = r#"{ "playlist": { "title": "t", "subtitle": "s", "tracks": [] } }"#;
        assert!(CardContent::from_json(json).is_err());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let json = r#"{ "greeting": { "name": "Hi Sam", "message": "Open me" } }"#;
        let content = CardContent::from_json(json).unwrap();

        assert_eq!(content.greeting.name, "Hi Sam");
        assert_eq!(content.letter, Letter::default());
        assert_eq!(content.playlist.tracks.len(), 3);
    }

    #[test]
    fn test_track_field_names() {
        let json = r#"{ "title": "A", "info": "x", "src": "a.mp3", "cover": "a.jpg" }"#;
        let track: Track = serde_json::from_str(json).unwrap();
        assert_eq!(track.audio_source, "a.mp3");
        assert_eq!(track.cover_image_source, "a.jpg");
    }

    #[test]
    fn test_blank_audio_source_rejected() {
        let json = r#"{ "playlist": { "title": "t", "subtitle": "s",
            "tracks": [ { "title": "A", "src": "  ", "cover": "a.jpg" } ] } }"#;
        let err = CardContent::from_json(json).unwrap_err();
        assert!(matches!(err, KeepsakeError::Content(_)));
    }

    #[test]
    fn test_wraparound_indices() {
        let playlist = CardContent::default().playlist.tracks;
        assert_eq!(playlist.next_index(2), 0);
        assert_eq!(playlist.previous_index(0), 2);
        assert_eq!(playlist.next_index(0), 1);
        assert_eq!(playlist.previous_index(2), 1);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("card.json");
        let json = serde_json::to_string(&CardContent::default()).unwrap();
        std::fs::write(&path, json).unwrap();

        let loaded = CardContent::load(&path).unwrap();
        assert_eq!(loaded, CardContent::default());
    }
}
