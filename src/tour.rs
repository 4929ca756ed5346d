// SPDX-FileCopyrightText: The tourmark authors
// SPDX-License-Identifier: MPL-2.0

//! Tour documents

use derive_more::{Display, Error};
use serde::Deserialize;

/// A guided tour, as published in the tour repository.
///
/// Fields that the export does not use are ignored while decoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourDocument {
    /// The display name
    #[serde(default)]
    pub name: Option<String>,

    /// Intro narration with literal `\n` escape sequences
    #[serde(default)]
    pub intro_narration: Option<String>,

    /// Relative path of the intro audio
    #[serde(default)]
    pub intro_audio: Option<String>,

    /// The stops of the tour in visiting order
    #[serde(default)]
    pub artworks: Vec<ArtworkEntry>,

    /// Outro narration with literal `\n` escape sequences
    #[serde(default)]
    pub outro_narration: Option<String>,

    /// Relative path of the outro audio
    #[serde(default)]
    pub outro_audio: Option<String>,
}

impl TourDocument {
    /// The intro narration, empty if missing.
    #[must_use]
    pub fn intro_narration(&self) -> &str {
        self.intro_narration.as_deref().unwrap_or_default()
    }
}

/// One stop within a tour.
///
/// All fields are required. They are decoded leniently and checked by
/// [`ArtworkEntry::require()`] to report exactly which one is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ArtworkEntry {
    /// The title
    #[serde(default)]
    pub title: Option<String>,

    /// Narration with literal `\n` escape sequences
    #[serde(default)]
    pub narration: Option<String>,

    /// Relative path of the narration audio
    #[serde(default)]
    pub audio: Option<String>,
}

/// The required fields of an [`ArtworkEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ArtworkField {
    /// `title`
    #[display("title")]
    Title,

    /// `narration`
    #[display("narration")]
    Narration,

    /// `audio`
    #[display("audio")]
    Audio,
}

/// An artwork entry lacks a required field.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("artwork #{index} is missing required field `{field}`")]
pub struct MissingFieldError {
    /// Zero-based position of the entry within the tour
    #[error(not(source))]
    pub index: usize,

    /// The missing field
    #[error(not(source))]
    pub field: ArtworkField,
}

/// A complete artwork entry, borrowed from an [`ArtworkEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Artwork<'a> {
    /// The title
    pub title: &'a str,

    /// Narration with literal `\n` escape sequences
    pub narration: &'a str,

    /// Relative path of the narration audio
    pub audio: &'a str,
}

impl ArtworkEntry {
    /// Borrow all required fields.
    ///
    /// The `index` is only used for reporting.
    ///
    /// # Errors
    ///
    /// Returns a [`MissingFieldError`] for the first absent field.
    pub fn require(&self, index: usize) -> Result<Artwork<'_>, MissingFieldError> {
        let missing = |field| MissingFieldError { index, field };
        let title = self
            .title
            .as_deref()
            .ok_or_else(|| missing(ArtworkField::Title))?;
        let narration = self
            .narration
            .as_deref()
            .ok_or_else(|| missing(ArtworkField::Narration))?;
        let audio = self
            .audio
            .as_deref()
            .ok_or_else(|| missing(ArtworkField::Audio))?;
        Ok(Artwork {
            title,
            narration,
            audio,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_ignores_unknown_fields() {
        let tour: TourDocument = serde_json::from_str(
            r#"{
                "id": "highlights",
                "museumId": "reina_sofia",
                "name": "Highlights",
                "introAudio": "/audio/intro.mp3",
                "artworks": [
                    {"id": "guernica", "order": 1, "title": "Guernica", "artist": "Picasso", "narration": "N", "audio": "/g.mp3", "room": "206"}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(Some("Highlights"), tour.name.as_deref());
        assert_eq!("", tour.intro_narration());
        assert_eq!(Some("/audio/intro.mp3"), tour.intro_audio.as_deref());
        assert_eq!(1, tour.artworks.len());
        assert!(tour.outro_narration.is_none());
        assert!(tour.outro_audio.is_none());
    }

    #[test]
    fn empty_object_is_an_empty_tour() {
        let tour: TourDocument = serde_json::from_str("{}").unwrap();
        assert_eq!(TourDocument::default(), tour);
    }

    #[test]
    fn require_complete_artwork() {
        let entry = ArtworkEntry {
            title: Some("Guernica".into()),
            narration: Some("Text".into()),
            audio: Some("/g.mp3".into()),
        };
        assert_eq!(
            Artwork {
                title: "Guernica",
                narration: "Text",
                audio: "/g.mp3",
            },
            entry.require(0).unwrap()
        );
    }

    #[test]
    fn require_reports_missing_field_and_index() {
        let entry = ArtworkEntry {
            title: Some("Guernica".into()),
            narration: None,
            audio: Some("/g.mp3".into()),
        };
        let err = entry.require(3).unwrap_err();
        assert_eq!(
            MissingFieldError {
                index: 3,
                field: ArtworkField::Narration,
            },
            err
        );
        assert_eq!(
            "artwork #3 is missing required field `narration`",
            err.to_string()
        );
        assert_eq!(
            ArtworkField::Title,
            ArtworkEntry::default().require(0).unwrap_err().field
        );
        let entry = ArtworkEntry {
            audio: None,
            ..entry
        };
        let entry = ArtworkEntry {
            narration: Some("Text".into()),
            ..entry
        };
        assert_eq!(ArtworkField::Audio, entry.require(0).unwrap_err().field);
    }
}
