#![allow(non_shorthand_field_patterns)]
#![doc = "Error handling primitives shared across the target-matrix crate."]
// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! The derive emitted by [`masterror::Error`] expands pattern matches that
//! trigger the `non_shorthand_field_patterns` lint. The lint is disabled for
//! the module to keep the generated implementations warning-free.
//!
//! Classification itself is total. Every variant here describes a failure of
//! the process streams around it.

/// Unified error type returned by the matrix reader, writer and CLI.
#[derive(Debug, masterror::Error)]
pub enum Error {
    /// Standard input could not be read or was not valid UTF-8.
    #[error("failed to read targets from input: {source}")]
    Read {
        /// Underlying I/O error.
        source: std::io::Error
    },
    /// Standard output rejected the rendered matrix.
    #[error("failed to write matrix to output: {source}")]
    Write {
        /// Underlying I/O error.
        source: std::io::Error
    },
    /// Wraps serialization errors when rendering the matrix.
    #[error("failed to serialize matrix: {source}")]
    Serialize {
        /// Underlying serialization error.
        source: serde_json::Error
    }
}

impl Error {
    /// Formats the error for diagnostics without the variant name.
    ///
    /// The returned string matches the [`std::fmt::Display`] implementation.
    pub fn to_display_string(&self) -> String {
        format!("{self}")
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        if source.is_io() {
            return Self::Write {
                source: source.into()
            };
        }

        Self::Serialize {
            source
        }
    }
}

/// Creates an [`Error::Read`] variant wrapping the input failure.
pub fn read_error(source: std::io::Error) -> Error {
    Error::Read {
        source
    }
}

/// Creates an [`Error::Write`] variant wrapping the output failure.
pub fn write_error(source: std::io::Error) -> Error {
    Error::Write {
        source
    }
}
