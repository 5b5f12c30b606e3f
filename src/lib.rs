// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Utilities for generating build matrices from compact target lists.
//!
//! Workflow configuration often carries build targets as a single
//! comma-separated string such as `linux,macos+,windows*`. The library turns
//! that string into the `{"include": [...]}` document expected by GitHub
//! Actions `strategy.matrix`, where each entry states whether the target is
//! built signed, unsigned, or both, according to its trailing marker.

mod error;
mod matrix;
mod suffix;

pub use error::{Error, read_error, write_error};
pub use matrix::{BuildMatrix, MatrixEntry, classify_target, parse_matrix, read_matrix, write_matrix};
pub use suffix::SignVariant;
