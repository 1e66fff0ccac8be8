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
//! Columnar decode path.
//!
//! Given a self-describing byte buffer holding one column's encoded values,
//! this module produces a lazy row cursor of decoded values.
//!
//! Module split:
//! - `kind` / `cell`: column type registry and the reusable value cell.
//! - `cursor`: bounds-checked little-endian reads over the shared buffer.
//! - `decode`: one decoder per compression scheme.
//! - `nullable`: null-index projection over an inner decoder.
//! - `iterator`: engine-facing `init` / `next` / `current` facade.
//! - `dispatch`: buffer-to-iterator entry point.
//!
//! Current limitations:
//! - Buffers are in-memory only; there is no I/O in this path.
//! - A single iterator must not be shared between threads; buffers may be,
//!   since dispatch duplicates the read cursor and never mutates bytes.

mod cell;
mod cursor;
mod decode;
mod dispatch;
mod error;
mod iterator;
mod kind;
mod nullable;

pub use cell::{Cell, TimestampValue};
pub use decode::CompressionKind;
pub use dispatch::new_iterator;
pub use error::{DecodeError, DecodeErrorKind};
pub use iterator::ColumnIterator;
pub use kind::ColumnKind;

mod constants {
    //! Shared constants for the columnar decode path.
    //!
    //! The values in this module follow the writer's on-wire definitions.
    //! Keeping them centralized avoids copy/paste drift between decoders.

    pub(super) const COLUMN_TYPE_INT: i32 = 0;
    pub(super) const COLUMN_TYPE_LONG: i32 = 1;
    pub(super) const COLUMN_TYPE_FLOAT: i32 = 2;
    pub(super) const COLUMN_TYPE_DOUBLE: i32 = 3;
    pub(super) const COLUMN_TYPE_BOOLEAN: i32 = 4;
    pub(super) const COLUMN_TYPE_BYTE: i32 = 5;
    pub(super) const COLUMN_TYPE_SHORT: i32 = 6;
    pub(super) const COLUMN_TYPE_VOID: i32 = 7;
    pub(super) const COLUMN_TYPE_STRING: i32 = 8;
    pub(super) const COLUMN_TYPE_TIMESTAMP: i32 = 9;
    pub(super) const COLUMN_TYPE_BINARY: i32 = 10;
    pub(super) const COLUMN_TYPE_GENERIC: i32 = 11;

    pub(super) const COMPRESSION_DEFAULT: i32 = 0;
    pub(super) const COMPRESSION_RLE: i32 = 1;
    pub(super) const COMPRESSION_DICT: i32 = 2;
    pub(super) const COMPRESSION_BOOLEAN_BITSET: i32 = 3;
    pub(super) const COMPRESSION_BYTE_DELTA: i32 = 4;

    /// Writer sentinel announcing a full-width value in byte-delta streams.
    /// Must match the writer bit-exactly; deltas span `-127..=127`.
    pub(super) const NEW_BASE_VALUE: i8 = i8::MIN;

    pub(super) const BITSET_WORD_BITS: usize = 64;
    pub(super) const DICT_MAX_ENTRIES: usize = 1 << 16;
    pub(super) const NANOS_PER_SECOND: u32 = 1_000_000_000;
}
