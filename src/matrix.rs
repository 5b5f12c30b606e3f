// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Conversion of comma-separated target lists into a GitHub Actions matrix.
//!
//! Parsing never fails: every comma-delimited segment, including empty ones,
//! becomes exactly one [`MatrixEntry`] in input order. Only the surrounding
//! stream handling in [`read_matrix`] and [`write_matrix`] can error.

use std::io::{Read, Write};

use serde::Serialize;
use tracing::{debug, trace};

use crate::error::{self, Error};
use crate::suffix::SignVariant;

const SEGMENT_DELIMITER: char = ',';

/// Whitespace stripped around each segment.
///
/// Unicode `White_Space` plus the ASCII information separators
/// U+001C..=U+001F, which generic "strip" operations also treat as spacing.
fn is_segment_padding(candidate: char) -> bool {
    candidate.is_whitespace() || ('\x1c'..='\x1f').contains(&candidate)
}

/// Build instructions for a single target.
///
/// Field order is fixed so the rendered JSON is stable across runs.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct MatrixEntry {
    /// Target name with any trailing marker removed.
    pub target:   String,
    /// Whether a signed artifact should be built.
    pub sign:     bool,
    /// Whether an unsigned artifact should be built.
    pub unsigned: bool
}

impl MatrixEntry {
    /// Creates an entry for `target` with the flags implied by `variant`.
    pub fn new<T>(target: T, variant: SignVariant) -> Self
    where
        T: Into<String>
    {
        Self {
            target:   target.into(),
            sign:     variant.sign(),
            unsigned: variant.unsigned()
        }
    }
}

/// Document consumed by `strategy.matrix` in workflow definitions.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct BuildMatrix {
    /// Entries in the order their segments appeared in the input.
    pub include: Vec<MatrixEntry>
}

impl BuildMatrix {
    /// Number of entries in the matrix.
    pub fn len(&self) -> usize {
        self.include.len()
    }

    /// Whether the matrix has no entries.
    ///
    /// Matrices produced by [`parse_matrix`] always contain at least one
    /// entry; this only holds for hand-built documents.
    pub fn is_empty(&self) -> bool {
        self.include.is_empty()
    }

    /// Iterates over the entries in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, MatrixEntry> {
        self.include.iter()
    }
}

impl<'a> IntoIterator for &'a BuildMatrix {
    type Item = &'a MatrixEntry;
    type IntoIter = std::slice::Iter<'a, MatrixEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Trims a single segment and classifies it by its final character.
///
/// # Examples
///
/// ```
/// use target_matrix::{MatrixEntry, classify_target};
///
/// assert_eq!(classify_target("  macos* "), MatrixEntry {
///     target:   "macos".to_owned(),
///     sign:     true,
///     unsigned: true
/// });
/// ```
pub fn classify_target(raw: &str) -> MatrixEntry {
    let (target, variant) = SignVariant::split(raw.trim_matches(is_segment_padding));
    trace!(segment = target, ?variant, "classified segment");
    MatrixEntry::new(target, variant)
}

/// Parses a comma-separated target list into a matrix.
///
/// Segments are not filtered or deduplicated, so the result always holds
/// `input.matches(',').count() + 1` entries.
///
/// # Examples
///
/// ```
/// use target_matrix::parse_matrix;
///
/// let matrix = parse_matrix("a,b+,c*");
/// let targets: Vec<_> = matrix.iter().map(|entry| entry.target.as_str()).collect();
/// assert_eq!(targets, ["a", "b", "c"]);
/// ```
pub fn parse_matrix(input: &str) -> BuildMatrix {
    let include: Vec<MatrixEntry> = input.split(SEGMENT_DELIMITER).map(classify_target).collect();
    debug!("Classified {} target segments", include.len());

    BuildMatrix {
        include
    }
}

/// Reads the whole stream and parses it with [`parse_matrix`].
///
/// # Errors
///
/// Returns [`Error::Read`] when the stream fails or is not valid UTF-8.
pub fn read_matrix<R: Read>(mut reader: R) -> Result<BuildMatrix, Error> {
    let mut input = String::new();
    reader.read_to_string(&mut input).map_err(error::read_error)?;
    debug!("Read {} bytes of target input", input.len());

    Ok(parse_matrix(&input))
}

/// Writes the matrix as compact JSON followed by a single newline.
///
/// # Errors
///
/// Returns [`Error::Write`] when the writer fails and [`Error::Serialize`]
/// when the document cannot be rendered.
pub fn write_matrix<W: Write>(mut writer: W, matrix: &BuildMatrix) -> Result<(), Error> {
    serde_json::to_writer(&mut writer, matrix)?;
    writer.write_all(b"\n").map_err(error::write_error)?;
    writer.flush().map_err(error::write_error)?;

    Ok(())
}
