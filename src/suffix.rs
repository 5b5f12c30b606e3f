// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Trailing marker convention used to request signed and unsigned builds.
//!
//! A target listed as `name+` is built signed only, `name*` is built both
//! signed and unsigned, and a bare `name` is built unsigned only. Only the
//! final character is ever inspected, so markers do not stack.

const SIGNED_ONLY_MARKER: char = '+';
const SIGNED_AND_UNSIGNED_MARKER: char = '*';

/// Build variants requested for a single target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignVariant {
    /// Marked with `+`: produce the signed artifact only.
    SignedOnly,
    /// Marked with `*`: produce both the signed and the unsigned artifact.
    SignedAndUnsigned,
    /// No marker: produce the unsigned artifact only.
    UnsignedOnly
}

impl SignVariant {
    /// Maps a marker character to its variant.
    ///
    /// Returns `None` for characters that are not markers; callers treat that
    /// as [`SignVariant::UnsignedOnly`] without stripping anything.
    pub fn from_marker(marker: char) -> Option<Self> {
        match marker {
            SIGNED_ONLY_MARKER => Some(Self::SignedOnly),
            SIGNED_AND_UNSIGNED_MARKER => Some(Self::SignedAndUnsigned),
            _ => None
        }
    }

    /// Splits a trimmed token into its target name and requested variant.
    ///
    /// The marker, when present, is removed from the returned name. Anything
    /// before the final character is left untouched, so `a+*` yields `a+`.
    ///
    /// # Examples
    ///
    /// ```
    /// use target_matrix::SignVariant;
    ///
    /// assert_eq!(SignVariant::split("linux+"), ("linux", SignVariant::SignedOnly));
    /// assert_eq!(SignVariant::split("a+*"), ("a+", SignVariant::SignedAndUnsigned));
    /// assert_eq!(SignVariant::split(""), ("", SignVariant::UnsignedOnly));
    /// ```
    pub fn split(token: &str) -> (&str, Self) {
        let Some(last) = token.chars().next_back() else {
            return (token, Self::UnsignedOnly);
        };

        match Self::from_marker(last) {
            Some(variant) => (&token[..token.len() - last.len_utf8()], variant),
            None => (token, Self::UnsignedOnly)
        }
    }

    /// Whether a signed artifact is requested.
    pub fn sign(self) -> bool {
        matches!(self, Self::SignedOnly | Self::SignedAndUnsigned)
    }

    /// Whether an unsigned artifact is requested.
    pub fn unsigned(self) -> bool {
        matches!(self, Self::SignedAndUnsigned | Self::UnsignedOnly)
    }

    /// Marker character that selects this variant.
    pub fn marker(self) -> Option<char> {
        match self {
            Self::SignedOnly => Some(SIGNED_ONLY_MARKER),
            Self::SignedAndUnsigned => Some(SIGNED_AND_UNSIGNED_MARKER),
            Self::UnsignedOnly => None
        }
    }
}
