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
//! Reusable value cell rewritten on every decoded row.
//!
//! A decoder owns one cell and hands out `&Cell` from `current()`; the cell
//! identity never changes across rows, only its contents. Callers that retain
//! a value across `next()` calls must `clone()` it. Variable-length variants
//! hold `Bytes` windows into the column buffer, so a clone retains the window
//! without copying payload bytes.

use bytes::Bytes;

/// Seconds-plus-nanos timestamp as stored by the writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimestampValue {
    pub seconds: i32,
    pub nanos: u32,
}

impl TimestampValue {
    /// Total nanoseconds since the epoch, for engine-side ordering.
    pub fn as_nanos(self) -> i64 {
        i64::from(self.seconds) * 1_000_000_000 + i64::from(self.nanos)
    }
}

/// One decoded column value.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Boolean(bool),
    Byte(i8),
    Short(i16),
    Void,
    String(Bytes),
    Timestamp(TimestampValue),
    Binary(Bytes),
    Generic(Bytes),
}

impl Cell {
    /// UTF-8 view of a STRING cell.
    ///
    /// The writer stores strings as raw bytes; validation happens here at the
    /// engine boundary rather than in the decode hot loop.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cell::String(bytes) => std::str::from_utf8(bytes).ok(),
            _ => None,
        }
    }

    /// Raw payload window of a STRING/BINARY/GENERIC cell.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Cell::String(bytes) | Cell::Binary(bytes) | Cell::Generic(bytes) => Some(&bytes[..]),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_nanos_projection_is_ordered() {
        let early = TimestampValue { seconds: 10, nanos: 999_999_999 };
        let late = TimestampValue { seconds: 11, nanos: 0 };
        assert!(early.as_nanos() < late.as_nanos());
    }

    #[test]
    fn string_cell_exposes_utf8_view() {
        let cell = Cell::String(Bytes::from_static(b"aurora"));
        assert_eq!(cell.as_str(), Some("aurora"));
        assert_eq!(cell.as_bytes(), Some(&b"aurora"[..]));
    }

    #[test]
    fn string_cell_with_invalid_utf8_yields_no_str_view() {
        let cell = Cell::String(Bytes::from_static(&[0xFF, 0xFE]));
        assert_eq!(cell.as_str(), None);
        assert_eq!(cell.as_bytes(), Some(&[0xFF, 0xFE][..]));
    }
}
