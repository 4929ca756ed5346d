// SPDX-FileCopyrightText: The tourmark authors
// SPDX-License-Identifier: MPL-2.0

//! Writing Markdown files

use std::{
    fs::File,
    io::{self, Write as _},
    path::{Path, PathBuf},
};

use derive_more::{Display, Error};

use crate::render::RenderedDocument;

impl RenderedDocument {
    /// Join all lines into a single Markdown text.
    ///
    /// Lines are separated by `\n` regardless of the platform. Trailing
    /// whitespace is stripped from every line, including line breaks
    /// embedded in a line, and the text ends with exactly one `\n`.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let lines = self
            .lines()
            .iter()
            .flat_map(|line| line.split('\n'))
            .map(str::trim_end);
        let mut markdown = itertools::join(lines, "\n");
        markdown.push('\n');
        markdown
    }
}

/// The output file could not be written.
#[derive(Debug, Display, Error)]
#[display("failed to write {}: {source}", path.display())]
pub struct FileWriteError {
    /// The destination
    #[error(not(source))]
    pub path: PathBuf,

    /// The I/O error
    pub source: io::Error,
}

/// Write a document to `path`, replacing any existing file.
///
/// The Markdown text is assembled completely before the file is opened.
///
/// # Errors
///
/// Returns a [`FileWriteError`] if the file cannot be created or written.
pub fn write_markdown(doc: &RenderedDocument, path: &Path) -> Result<(), FileWriteError> {
    let markdown = doc.to_markdown();
    let with_path = |source| FileWriteError {
        path: path.to_owned(),
        source,
    };
    let mut file = File::create(path).map_err(with_path)?;
    file.write_all(markdown.as_bytes()).map_err(with_path)?;
    file.flush().map_err(with_path)?;
    tracing::info!(
        path = %path.display(),
        bytes = markdown.len(),
        "Wrote Markdown"
    );
    Ok(())
}
