// SPDX-FileCopyrightText: The tourmark authors
// SPDX-License-Identifier: MPL-2.0

#![warn(rust_2018_idioms)]
#![warn(rust_2021_compatibility)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(unreachable_pub)]
#![warn(unsafe_code)]
#![warn(clippy::pedantic)]
#![warn(rustdoc::broken_intra_doc_links)]
#![cfg_attr(not(test), deny(clippy::panic_in_result_fn))]
#![cfg_attr(not(debug_assertions), deny(clippy::used_underscore_binding))]

//! Export museum audio tours as Markdown for importing into Notion.
//!
//! A run fetches the tour JSON, renders it into Markdown lines and
//! writes them into a single file. Refer to [`docs`] for the layout
//! of the generated document.

use std::path::Path;

use time::{Date, OffsetDateTime};

pub mod config;
pub mod docs;
pub mod fetch;
pub mod render;
pub mod tour;
pub mod write;

#[doc(inline)]
pub use self::{
    config::{Config, TourId},
    fetch::{DecodeError, FetchError, decode_tour, fetch_tour, fetch_tour_with},
    render::{RenderError, RenderedDocument, Renderer},
    tour::{ArtworkEntry, ArtworkField, MissingFieldError, TourDocument},
    write::{FileWriteError, write_markdown},
};

/// An export error
///
/// All errors are fatal for the run.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum Error {
    /// The tour could not be fetched.
    #[display("{source}")]
    Fetch {
        /// The cause
        source: FetchError,
    },

    /// The response is not a tour document.
    #[display("{source}")]
    Decode {
        /// The cause
        source: DecodeError,
    },

    /// The tour could not be rendered.
    #[display("{source}")]
    Render {
        /// The cause
        source: RenderError,
    },

    /// The Markdown file could not be written.
    #[display("{source}")]
    FileWrite {
        /// The cause
        source: FileWriteError,
    },
}

impl From<FetchError> for Error {
    fn from(source: FetchError) -> Self {
        Self::Fetch { source }
    }
}

impl From<DecodeError> for Error {
    fn from(source: DecodeError) -> Self {
        Self::Decode { source }
    }
}

impl From<RenderError> for Error {
    fn from(source: RenderError) -> Self {
        Self::Render { source }
    }
}

impl From<MissingFieldError> for Error {
    fn from(from: MissingFieldError) -> Self {
        RenderError::from(from).into()
    }
}

impl From<FileWriteError> for Error {
    fn from(source: FileWriteError) -> Self {
        Self::FileWrite { source }
    }
}

/// The current local date.
///
/// Falls back to UTC if the local offset cannot be determined.
#[must_use]
pub fn today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}

/// Render a tour and write it to `output_path`.
///
/// The file is not touched unless rendering succeeds.
///
/// # Errors
///
/// Returns an [`Error::Render`] if the tour is incomplete and an
/// [`Error::FileWrite`] if the file cannot be written.
pub fn export_tour(
    config: &Config,
    tour: &TourDocument,
    today: Date,
    output_path: &Path,
) -> Result<(), Error> {
    let doc = Renderer::new(config).render(tour, today)?;
    write_markdown(&doc, output_path)?;
    Ok(())
}

/// Fetch, render and write the configured tour as of [`today()`].
///
/// # Errors
///
/// Returns the first [`Error`] of any stage. Nothing is written if
/// fetching or rendering fails.
pub fn export(config: &Config) -> Result<(), Error> {
    let tour = fetch_tour(&config.source_url)?;
    export_tour(config, &tour, today(), &config.output_path)
}
