// SPDX-FileCopyrightText: The tourmark authors
// SPDX-License-Identifier: MPL-2.0

//! Export configuration

use std::{fmt, path::PathBuf, str::FromStr};

use derive_more::{Display, Error};
use url::Url;

/// Base URL of the raw tour repository contents.
pub const DEFAULT_RAW_BASE: &str = "https://raw.githubusercontent.com/ygayl/museum_tour/main";

/// Museum of the default tour.
pub const DEFAULT_MUSEUM: &str = "reina_sofia";

/// Default tour within [`DEFAULT_MUSEUM`].
pub const DEFAULT_TOUR: &str = "reina_sofia_highlights";

/// Path segment between the raw base and the relative audio paths.
pub const DEFAULT_AUDIO_SEGMENT: &str = "public";

/// Default output file, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "output.md";

/// Status annotation appended to every section header.
pub const DEFAULT_STATUS: &str = "✅ Validated / 🔧 Needs Update";

/// Identifies a tour inside the source repository.
///
/// The textual form is `museum/tour`, e.g. `reina_sofia/reina_sofia_highlights`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TourId {
    /// The museum directory
    pub museum: String,

    /// The tour directory within the museum
    pub tour: String,
}

impl TourId {
    fn is_valid_segment(segment: &str) -> bool {
        !segment.is_empty() && segment.trim() == segment && !segment.contains('/')
    }

    /// Check if both segments are non-empty and free of slashes and
    /// leading/trailing whitespace.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        Self::is_valid_segment(&self.museum) && Self::is_valid_segment(&self.tour)
    }

    /// Path of the tour JSON relative to the repository root.
    #[must_use]
    pub fn json_path(&self) -> String {
        debug_assert!(self.is_valid());
        let Self { museum, tour } = self;
        format!("src/data/tours/{museum}/{tour}/tour.json")
    }
}

impl Default for TourId {
    fn default() -> Self {
        Self {
            museum: DEFAULT_MUSEUM.to_owned(),
            tour: DEFAULT_TOUR.to_owned(),
        }
    }
}

impl fmt::Display for TourId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { museum, tour } = self;
        write!(f, "{museum}/{tour}")
    }
}

/// Malformed `museum/tour` identifier.
#[derive(Debug, Display, Error)]
#[display("invalid tour identifier '{input}': expected 'museum/tour'")]
pub struct ParseTourIdError {
    /// The rejected input
    #[error(not(source))]
    pub input: String,
}

impl FromStr for TourId {
    type Err = ParseTourIdError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseTourIdError {
            input: input.to_owned(),
        };
        let (museum, tour) = input.split_once('/').ok_or_else(invalid)?;
        let tour_id = Self {
            museum: museum.to_owned(),
            tour: tour.to_owned(),
        };
        if !tour_id.is_valid() {
            return Err(invalid());
        }
        Ok(tour_id)
    }
}

/// All parameters of an export run.
///
/// [`Config::default()`] reproduces the fixed values of the command line tool.
/// Tests substitute individual fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Location of the tour JSON
    pub source_url: Url,

    /// Base that relative audio paths are resolved against
    pub raw_base: String,

    /// Path segment inserted between [`Self::raw_base`] and an audio path
    pub audio_segment: String,

    /// Destination of the Markdown file, overwritten on every run
    pub output_path: PathBuf,

    /// Icon in front of the document title
    pub header_icon: String,

    /// Icon of the intro section header
    pub intro_icon: String,

    /// Icon of each artwork section header
    pub section_icon: String,

    /// Icon of the outro section header
    pub outro_icon: String,

    /// Static status annotation of all section headers
    pub status: String,

    /// Tag in front of the formatted date on the "last updated" line
    pub update_label: String,

    /// Title used when the tour has no name
    pub default_title: String,
}

impl Config {
    /// Configuration for exporting the given tour from a repository.
    ///
    /// # Errors
    ///
    /// Returns an error if `raw_base` and the tour path do not form a valid URL.
    pub fn for_tour(raw_base: &str, tour_id: &TourId) -> Result<Self, url::ParseError> {
        let raw_base = raw_base.trim_end_matches('/');
        let source_url = format!("{raw_base}/{json_path}", json_path = tour_id.json_path()).parse()?;
        Ok(Self {
            source_url,
            raw_base: raw_base.to_owned(),
            audio_segment: DEFAULT_AUDIO_SEGMENT.to_owned(),
            output_path: DEFAULT_OUTPUT_PATH.into(),
            header_icon: "🏛️".to_owned(),
            intro_icon: "🚪".to_owned(),
            section_icon: "🎨".to_owned(),
            outro_icon: "🏁".to_owned(),
            status: DEFAULT_STATUS.to_owned(),
            update_label: "🗓️ Update".to_owned(),
            default_title: "Tour".to_owned(),
        })
    }

    /// Resolve a relative audio path into a fully-qualified reference.
    ///
    /// Plain concatenation, duplicate separators are preserved.
    #[must_use]
    pub fn audio_url(&self, path: &str) -> String {
        let Self {
            raw_base,
            audio_segment,
            ..
        } = self;
        format!("{raw_base}/{audio_segment}{path}")
    }
}

impl Default for Config {
    fn default() -> Self {
        // Both the base and the tour segments are compile-time constants.
        Self::for_tour(DEFAULT_RAW_BASE, &TourId::default()).unwrap()
    }
}
