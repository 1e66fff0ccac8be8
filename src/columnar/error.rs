// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.
//! Decode error model for the columnar read path.
//!
//! Every error in this module is fatal: decoders never retry, and the column
//! iterator poisons itself after surfacing one. The kind is kept separate from
//! the formatted message so the engine can branch on failure class without
//! parsing text.

use std::fmt;

/// Failure class of a column decode error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeErrorKind {
    /// Column type tag outside the closed tag set.
    UnknownColumnType,
    /// Compression type tag outside the closed tag set.
    UnknownCompressionType,
    /// Compression scheme not legal for the column type.
    IncompatibleEncoding,
    /// Truncated or internally inconsistent buffer contents.
    MalformedBuffer,
    /// Iterator protocol violation, including use after a fatal error.
    Misuse,
}

impl DecodeErrorKind {
    fn name(self) -> &'static str {
        match self {
            Self::UnknownColumnType => "UnknownColumnType",
            Self::UnknownCompressionType => "UnknownCompressionType",
            Self::IncompatibleEncoding => "IncompatibleEncoding",
            Self::MalformedBuffer => "MalformedBuffer",
            Self::Misuse => "Misuse",
        }
    }
}

/// A fatal column decode error.
#[derive(Debug, Clone)]
pub struct DecodeError {
    pub kind: DecodeErrorKind,
    pub message: String,
}

impl DecodeError {
    pub(crate) fn unknown_column_type(message: impl Into<String>) -> Self {
        Self {
            kind: DecodeErrorKind::UnknownColumnType,
            message: message.into(),
        }
    }

    pub(crate) fn unknown_compression_type(message: impl Into<String>) -> Self {
        Self {
            kind: DecodeErrorKind::UnknownCompressionType,
            message: message.into(),
        }
    }

    pub(crate) fn incompatible_encoding(message: impl Into<String>) -> Self {
        Self {
            kind: DecodeErrorKind::IncompatibleEncoding,
            message: message.into(),
        }
    }

    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        Self {
            kind: DecodeErrorKind::MalformedBuffer,
            message: message.into(),
        }
    }

    pub(crate) fn misuse(message: impl Into<String>) -> Self {
        Self {
            kind: DecodeErrorKind::Misuse,
            message: message.into(),
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.name(), self.message)
    }
}

impl std::error::Error for DecodeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_kind_and_message() {
        let err = DecodeError::malformed("value buffer underflow: need=4, remaining=1");
        let rendered = err.to_string();
        assert!(
            rendered.starts_with("MalformedBuffer:"),
            "rendered={rendered}"
        );
        assert!(rendered.contains("need=4"), "rendered={rendered}");
    }

    #[test]
    fn kind_is_matchable_after_construction() {
        let err = DecodeError::misuse("next() called past exhaustion");
        assert_eq!(err.kind, DecodeErrorKind::Misuse);
    }
}
