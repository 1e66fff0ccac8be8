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
//! Column type registry.
//!
//! One variant per writer column type tag. This module is the only place that
//! knows the physical width and wire shape of a value; decoders ask the kind
//! to materialize cells and extract encoded values, and never touch value
//! layout themselves.
//!
//! Current limitations:
//! - TIMESTAMP follows the writer's seconds-then-nanos 8-byte packing only.
//! - GENERIC payloads are opaque; deserialization belongs to the engine.

use super::cell::{Cell, TimestampValue};
use super::constants::*;
use super::cursor::ValueCursor;
use super::error::DecodeError;

/// Closed set of column types understood by the decode path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnKind {
    Int,
    Long,
    Float,
    Double,
    Boolean,
    Byte,
    Short,
    Void,
    String,
    Timestamp,
    Binary,
    Generic,
}

impl ColumnKind {
    /// Map a wire tag to a column kind. Unknown tags stay `None`; the
    /// dispatcher turns that into an `UnknownColumnType` error.
    pub fn from_tag(tag: i32) -> Option<Self> {
        match tag {
            COLUMN_TYPE_INT => Some(Self::Int),
            COLUMN_TYPE_LONG => Some(Self::Long),
            COLUMN_TYPE_FLOAT => Some(Self::Float),
            COLUMN_TYPE_DOUBLE => Some(Self::Double),
            COLUMN_TYPE_BOOLEAN => Some(Self::Boolean),
            COLUMN_TYPE_BYTE => Some(Self::Byte),
            COLUMN_TYPE_SHORT => Some(Self::Short),
            COLUMN_TYPE_VOID => Some(Self::Void),
            COLUMN_TYPE_STRING => Some(Self::String),
            COLUMN_TYPE_TIMESTAMP => Some(Self::Timestamp),
            COLUMN_TYPE_BINARY => Some(Self::Binary),
            COLUMN_TYPE_GENERIC => Some(Self::Generic),
            _ => None,
        }
    }

    pub fn tag(self) -> i32 {
        match self {
            Self::Int => COLUMN_TYPE_INT,
            Self::Long => COLUMN_TYPE_LONG,
            Self::Float => COLUMN_TYPE_FLOAT,
            Self::Double => COLUMN_TYPE_DOUBLE,
            Self::Boolean => COLUMN_TYPE_BOOLEAN,
            Self::Byte => COLUMN_TYPE_BYTE,
            Self::Short => COLUMN_TYPE_SHORT,
            Self::Void => COLUMN_TYPE_VOID,
            Self::String => COLUMN_TYPE_STRING,
            Self::Timestamp => COLUMN_TYPE_TIMESTAMP,
            Self::Binary => COLUMN_TYPE_BINARY,
            Self::Generic => COLUMN_TYPE_GENERIC,
        }
    }

    /// Whether values of this kind occupy a fixed byte width on the wire.
    pub fn is_fixed_width(self) -> bool {
        !matches!(self, Self::Void | Self::String | Self::Binary | Self::Generic)
    }

    /// Fixed wire width in bytes; `None` for variable-length kinds.
    pub fn value_size_bytes(self) -> Option<usize> {
        match self {
            Self::Int | Self::Float => Some(4),
            Self::Long | Self::Double | Self::Timestamp => Some(8),
            Self::Short => Some(2),
            Self::Byte | Self::Boolean => Some(1),
            Self::Void => Some(0),
            Self::String | Self::Binary | Self::Generic => None,
        }
    }

    /// Human-readable type label for error messages.
    pub fn type_name(self) -> &'static str {
        match self {
            Self::Int => "INT",
            Self::Long => "LONG",
            Self::Float => "FLOAT",
            Self::Double => "DOUBLE",
            Self::Boolean => "BOOLEAN",
            Self::Byte => "BYTE",
            Self::Short => "SHORT",
            Self::Void => "VOID",
            Self::String => "STRING",
            Self::Timestamp => "TIMESTAMP",
            Self::Binary => "BINARY",
            Self::Generic => "GENERIC",
        }
    }

    /// Materialize a fresh cell for this kind.
    pub fn new_cell(self) -> Cell {
        match self {
            Self::Int => Cell::Int(0),
            Self::Long => Cell::Long(0),
            Self::Float => Cell::Float(0.0),
            Self::Double => Cell::Double(0.0),
            Self::Boolean => Cell::Boolean(false),
            Self::Byte => Cell::Byte(0),
            Self::Short => Cell::Short(0),
            Self::Void => Cell::Void,
            Self::String => Cell::String(bytes::Bytes::new()),
            Self::Timestamp => Cell::Timestamp(TimestampValue { seconds: 0, nanos: 0 }),
            Self::Binary => Cell::Binary(bytes::Bytes::new()),
            Self::Generic => Cell::Generic(bytes::Bytes::new()),
        }
    }

    /// Extract the next encoded value from the cursor into `cell`.
    ///
    /// The cursor advances by exactly one wire value. The cell variant always
    /// matches `self` afterwards.
    pub(crate) fn extract_into(
        self,
        cursor: &mut ValueCursor,
        cell: &mut Cell,
    ) -> Result<(), DecodeError> {
        match self {
            Self::Int => *cell = Cell::Int(cursor.read_i32("INT value")?),
            Self::Long => *cell = Cell::Long(cursor.read_i64("LONG value")?),
            Self::Float => *cell = Cell::Float(cursor.read_f32("FLOAT value")?),
            Self::Double => *cell = Cell::Double(cursor.read_f64("DOUBLE value")?),
            Self::Boolean => {
                let raw = cursor.read_u8("BOOLEAN value")?;
                if raw > 1 {
                    return Err(DecodeError::malformed(format!(
                        "invalid BOOLEAN value byte: value={}, offset={}",
                        raw,
                        cursor.offset()
                    )));
                }
                *cell = Cell::Boolean(raw == 1);
            }
            Self::Byte => *cell = Cell::Byte(cursor.read_i8("BYTE value")?),
            Self::Short => *cell = Cell::Short(cursor.read_i16("SHORT value")?),
            Self::Void => *cell = Cell::Void,
            Self::String => *cell = Cell::String(cursor.read_len_prefixed("STRING value")?),
            Self::Timestamp => {
                let seconds = cursor.read_i32("TIMESTAMP seconds")?;
                let nanos = cursor.read_u32("TIMESTAMP nanos")?;
                if nanos >= NANOS_PER_SECOND {
                    return Err(DecodeError::malformed(format!(
                        "invalid TIMESTAMP nanos-of-second: nanos={}, offset={}",
                        nanos,
                        cursor.offset()
                    )));
                }
                *cell = Cell::Timestamp(TimestampValue { seconds, nanos });
            }
            Self::Binary => *cell = Cell::Binary(cursor.read_len_prefixed("BINARY value")?),
            Self::Generic => *cell = Cell::Generic(cursor.read_len_prefixed("GENERIC value")?),
        }
        Ok(())
    }
}
