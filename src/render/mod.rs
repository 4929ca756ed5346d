// SPDX-FileCopyrightText: The tourmark authors
// SPDX-License-Identifier: MPL-2.0

//! Markdown rendering

use derive_more::{Display, Error};
use time::{Date, format_description::FormatItem, macros::format_description};

use crate::{
    Config,
    tour::{Artwork, MissingFieldError, TourDocument},
};

/// Separator between sections.
pub const HORIZONTAL_RULE: &str = "---";

const UPDATE_DATE_FORMAT: &[FormatItem<'static>] =
    format_description!("[month repr:short] [day] [year]");

/// Format a [`Date`] for the "last updated" line, e.g. `Dec 02 2025`.
///
/// # Errors
///
/// Returns an error if formatting of the given `date` fails.
pub fn format_update_date(date: Date) -> Result<String, time::error::Format> {
    date.format(UPDATE_DATE_FORMAT)
}

/// Replace literal `\n` escape sequences with real line breaks.
///
/// Double escapes are replaced first. Otherwise they would be split
/// up by the replacement of single escapes.
#[must_use]
pub fn normalize_escapes(text: &str) -> String {
    text.replace(r"\n\n", "\n\n").replace(r"\n", "\n")
}

/// Markdown lines in output order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedDocument {
    lines: Vec<String>,
}

impl RenderedDocument {
    /// Create an empty document.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Append a single line.
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Append an empty line.
    pub fn push_blank(&mut self) {
        self.lines.push(String::new());
    }

    /// Append multi-line text, one line per line break.
    pub fn push_text(&mut self, text: &str) {
        self.lines.extend(text.split('\n').map(ToOwned::to_owned));
    }

    /// The lines
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check for an empty document.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// A rendering error
#[derive(Debug, Display, Error)]
pub enum RenderError {
    /// An artwork entry is incomplete.
    #[display("{source}")]
    MissingField {
        /// The incomplete entry
        source: MissingFieldError,
    },

    /// The date of the "last updated" line could not be formatted.
    #[display("failed to format update date: {source}")]
    DateFormat {
        /// The formatting error
        source: time::error::Format,
    },
}

impl From<MissingFieldError> for RenderError {
    fn from(source: MissingFieldError) -> Self {
        Self::MissingField { source }
    }
}

impl From<time::error::Format> for RenderError {
    fn from(source: time::error::Format) -> Self {
        Self::DateFormat { source }
    }
}

/// Renders tours with the icons and texts of a [`Config`].
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'a> {
    config: &'a Config,
}

impl<'a> Renderer<'a> {
    /// Create a renderer.
    #[must_use]
    pub const fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Render a tour as of the given date.
    ///
    /// The output only depends on `tour` and `today`.
    ///
    /// # Errors
    ///
    /// Returns a [`RenderError::MissingField`] for the first incomplete
    /// artwork entry. No partial document is returned.
    pub fn render(&self, tour: &TourDocument, today: Date) -> Result<RenderedDocument, RenderError> {
        let Config {
            header_icon,
            intro_icon,
            section_icon,
            outro_icon,
            update_label,
            default_title,
            ..
        } = self.config;
        let mut doc = RenderedDocument::new();

        let title = tour.name.as_deref().unwrap_or(default_title);
        doc.push(format!("# {header_icon} {title}"));
        let updated = format_update_date(today)?;
        doc.push(format!("**{update_label} {updated}**"));
        doc.push_blank();

        self.push_section(
            &mut doc,
            intro_icon,
            "Intro",
            tour.intro_narration(),
            tour.intro_audio.as_deref(),
        );

        for (index, entry) in tour.artworks.iter().enumerate() {
            let Artwork {
                title,
                narration,
                audio,
            } = entry.require(index)?;
            self.push_section(&mut doc, section_icon, title, narration, Some(audio));
        }

        if let Some(narration) = tour.outro_narration.as_deref() {
            self.push_narration(&mut doc, outro_icon, "Outro", narration);
        }
        if let Some(path) = tour.outro_audio.as_deref() {
            self.push_audio(&mut doc, path);
        }
        doc.push(HORIZONTAL_RULE);
        doc.push_blank();

        tracing::debug!(
            artworks = tour.artworks.len(),
            lines = doc.len(),
            "Rendered tour"
        );
        Ok(doc)
    }

    fn push_section(
        &self,
        doc: &mut RenderedDocument,
        icon: &str,
        heading: &str,
        narration: &str,
        audio: Option<&str>,
    ) {
        self.push_narration(doc, icon, heading, narration);
        if let Some(path) = audio {
            self.push_audio(doc, path);
        }
        doc.push(HORIZONTAL_RULE);
        doc.push_blank();
    }

    fn push_narration(&self, doc: &mut RenderedDocument, icon: &str, heading: &str, narration: &str) {
        let status = &self.config.status;
        doc.push(format!("## {icon} {heading} — {status}"));
        doc.push_blank();
        // Trailing escapes must not turn into extra blank lines.
        doc.push_text(normalize_escapes(narration).trim_end());
        doc.push_blank();
    }

    fn push_audio(&self, doc: &mut RenderedDocument, path: &str) {
        doc.push(self.config.audio_url(path));
        doc.push_blank();
    }
}
