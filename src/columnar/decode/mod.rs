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
//! Compression-scheme value decoders.
//!
//! Module split:
//! - `plain`: uncompressed values drained straight off the cursor.
//! - `rle`: `(value, run_length)` pairs for fixed-width kinds.
//! - `dict`: 16-bit codes into an eagerly materialized dictionary.
//! - `bitset`: bit-packed booleans in 64-bit words.
//! - `delta`: flag-prefixed signed byte deltas for integer kinds.
//!
//! Every decoder is a lazy, finite, non-restartable sequence of cells driven
//! by `has_next` / `advance` / `cell`. `advance` assumes `has_next` was true;
//! the iterator facade enforces that protocol and poisons on any error.

mod bitset;
mod delta;
mod dict;
mod plain;
mod rle;

use super::cell::Cell;
use super::constants::*;
use super::cursor::ValueCursor;
use super::error::DecodeError;
use super::kind::ColumnKind;

pub(super) use bitset::BooleanBitsetDecoder;
pub(super) use delta::ByteDeltaDecoder;
pub(super) use dict::DictValueDecoder;
pub(super) use plain::PlainValueDecoder;
pub(super) use rle::RleValueDecoder;

/// Closed set of compression schemes understood by the decode path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompressionKind {
    Default,
    Rle,
    Dict,
    BooleanBitset,
    ByteDelta,
}

impl CompressionKind {
    /// Map a wire tag to a compression kind. Unknown tags stay `None`; the
    /// facade turns that into an `UnknownCompressionType` error.
    pub fn from_tag(tag: i32) -> Option<Self> {
        match tag {
            COMPRESSION_DEFAULT => Some(Self::Default),
            COMPRESSION_RLE => Some(Self::Rle),
            COMPRESSION_DICT => Some(Self::Dict),
            COMPRESSION_BOOLEAN_BITSET => Some(Self::BooleanBitset),
            COMPRESSION_BYTE_DELTA => Some(Self::ByteDelta),
            _ => None,
        }
    }

    pub fn tag(self) -> i32 {
        match self {
            Self::Default => COMPRESSION_DEFAULT,
            Self::Rle => COMPRESSION_RLE,
            Self::Dict => COMPRESSION_DICT,
            Self::BooleanBitset => COMPRESSION_BOOLEAN_BITSET,
            Self::ByteDelta => COMPRESSION_BYTE_DELTA,
        }
    }

    /// Human-readable scheme label for error messages.
    pub fn scheme_name(self) -> &'static str {
        match self {
            Self::Default => "DEFAULT",
            Self::Rle => "RLE",
            Self::Dict => "DICT",
            Self::BooleanBitset => "BOOLEAN_BITSET",
            Self::ByteDelta => "BYTE_DELTA",
        }
    }

    /// Whether this scheme is legal for the given column type.
    ///
    /// DICT admits the variable-length string kinds plus fixed-width kinds
    /// whose value width exceeds the 2-byte code width.
    pub fn is_applicable_to(self, kind: ColumnKind) -> bool {
        match self {
            Self::Default => true,
            Self::Rle => kind.is_fixed_width(),
            Self::Dict => matches!(
                kind,
                ColumnKind::String
                    | ColumnKind::Binary
                    | ColumnKind::Timestamp
                    | ColumnKind::Int
                    | ColumnKind::Long
                    | ColumnKind::Float
                    | ColumnKind::Double
            ),
            Self::BooleanBitset => matches!(kind, ColumnKind::Boolean),
            Self::ByteDelta => {
                matches!(kind, ColumnKind::Short | ColumnKind::Int | ColumnKind::Long)
            }
        }
    }
}

/// Concrete decoder for one column buffer body, resolved from the
/// compression tag exactly once at facade init.
pub(super) enum ValueDecoder {
    Plain(PlainValueDecoder),
    Rle(RleValueDecoder),
    Dict(DictValueDecoder),
    Bitset(BooleanBitsetDecoder),
    Delta(ByteDeltaDecoder),
}

impl ValueDecoder {
    /// Validate scheme applicability and construct the matching decoder over
    /// the remaining buffer body. DICT materializes its dictionary here.
    pub(super) fn build(
        kind: ColumnKind,
        compression: CompressionKind,
        cursor: ValueCursor,
    ) -> Result<Self, DecodeError> {
        if !compression.is_applicable_to(kind) {
            return Err(DecodeError::incompatible_encoding(format!(
                "compression scheme not applicable to column type: column_type={}, compression={}",
                kind.type_name(),
                compression.scheme_name()
            )));
        }
        match compression {
            CompressionKind::Default => Ok(Self::Plain(PlainValueDecoder::new(kind, cursor))),
            CompressionKind::Rle => Ok(Self::Rle(RleValueDecoder::new(kind, cursor))),
            CompressionKind::Dict => Ok(Self::Dict(DictValueDecoder::try_new(kind, cursor)?)),
            CompressionKind::BooleanBitset => {
                Ok(Self::Bitset(BooleanBitsetDecoder::try_new(cursor)?))
            }
            CompressionKind::ByteDelta => Ok(Self::Delta(ByteDeltaDecoder::new(kind, cursor))),
        }
    }

    pub(super) fn has_next(&self) -> bool {
        match self {
            Self::Plain(d) => d.has_next(),
            Self::Rle(d) => d.has_next(),
            Self::Dict(d) => d.has_next(),
            Self::Bitset(d) => d.has_next(),
            Self::Delta(d) => d.has_next(),
        }
    }

    pub(super) fn advance(&mut self) -> Result<(), DecodeError> {
        match self {
            Self::Plain(d) => d.advance(),
            Self::Rle(d) => d.advance(),
            Self::Dict(d) => d.advance(),
            Self::Bitset(d) => d.advance(),
            Self::Delta(d) => d.advance(),
        }
    }

    /// Current cell; valid after a successful `advance`, overwritten by the
    /// next one.
    pub(super) fn cell(&self) -> &Cell {
        match self {
            Self::Plain(d) => d.cell(),
            Self::Rle(d) => d.cell(),
            Self::Dict(d) => d.cell(),
            Self::Bitset(d) => d.cell(),
            Self::Delta(d) => d.cell(),
        }
    }
}
