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
//! Engine-facing row cursor over one column buffer.
//!
//! Construction (via the dispatcher) only consumes the column-type tag;
//! parsing the null header and compression tag is deferred to `init`, which
//! the first `next` triggers implicitly. A scan that opens one iterator per
//! column and then short-circuits never pays decode setup for the untouched
//! columns.
//!
//! Every fatal decode error poisons the iterator: later calls fail with a
//! `Misuse` error instead of silently continuing, and `current` reports no
//! value.

use super::cell::Cell;
use super::cursor::ValueCursor;
use super::decode::{CompressionKind, ValueDecoder};
use super::error::DecodeError;
use super::kind::ColumnKind;
use super::nullable::{parse_null_rows, NullableColumnCursor};

enum IteratorState {
    /// Header tag consumed, rest of the buffer untouched.
    Fresh { cursor: ValueCursor },
    Streaming {
        cursor: NullableColumnCursor,
        started: bool,
    },
    Poisoned,
}

/// Lazy row cursor for one column. Single-threaded; rows are delivered in
/// writer insertion order.
pub struct ColumnIterator {
    kind: ColumnKind,
    state: IteratorState,
}

impl ColumnIterator {
    pub(super) fn new(kind: ColumnKind, cursor: ValueCursor) -> Self {
        Self {
            kind,
            state: IteratorState::Fresh { cursor },
        }
    }

    /// Column type this iterator decodes.
    pub fn kind(&self) -> ColumnKind {
        self.kind
    }

    /// Parse the null header and compression tag and build the inner decoder.
    ///
    /// Only the first call has effect; `next` calls it implicitly.
    pub fn init(&mut self) -> Result<(), DecodeError> {
        match &self.state {
            IteratorState::Streaming { .. } => return Ok(()),
            IteratorState::Poisoned => {
                return Err(DecodeError::misuse(
                    "init() called on poisoned column iterator",
                ));
            }
            IteratorState::Fresh { .. } => {}
        }
        // Leave the iterator poisoned unless header parsing succeeds.
        let fresh = std::mem::replace(&mut self.state, IteratorState::Poisoned);
        let IteratorState::Fresh { cursor } = fresh else {
            unreachable!("state checked above");
        };
        let inner = Self::build_cursor(self.kind, cursor)?;
        self.state = IteratorState::Streaming { cursor: inner, started: false };
        Ok(())
    }

    fn build_cursor(
        kind: ColumnKind,
        mut cursor: ValueCursor,
    ) -> Result<NullableColumnCursor, DecodeError> {
        let null_rows = parse_null_rows(&mut cursor)?;
        let tag = cursor.read_i32("compression type tag")?;
        let compression = CompressionKind::from_tag(tag).ok_or_else(|| {
            DecodeError::unknown_compression_type(format!(
                "unknown compression type tag: column_type={}, compression_tag={}",
                kind.type_name(),
                tag
            ))
        })?;
        let decoder = ValueDecoder::build(kind, compression, cursor)?;
        Ok(NullableColumnCursor::new(decoder, null_rows))
    }

    /// Advance to the next row; the new value is observed via `current`.
    pub fn next(&mut self) -> Result<(), DecodeError> {
        if matches!(self.state, IteratorState::Fresh { .. }) {
            self.init()?;
        }
        match &mut self.state {
            IteratorState::Streaming { cursor, started } => {
                if !cursor.has_next() {
                    self.state = IteratorState::Poisoned;
                    return Err(DecodeError::misuse("next() called past exhaustion"));
                }
                match cursor.advance() {
                    Ok(()) => {
                        *started = true;
                        Ok(())
                    }
                    Err(e) => {
                        self.state = IteratorState::Poisoned;
                        Err(e)
                    }
                }
            }
            IteratorState::Poisoned => Err(DecodeError::misuse(
                "next() called on poisoned column iterator",
            )),
            IteratorState::Fresh { .. } => unreachable!("init() ran above"),
        }
    }

    /// Current row value, `None` for a null row (or before the first `next`).
    /// Idempotent and non-mutating.
    pub fn current(&self) -> Option<&Cell> {
        match &self.state {
            IteratorState::Streaming { cursor, started: true } => cursor.current(),
            _ => None,
        }
    }

    /// Whether another row is available. Reports `true` before `init` has
    /// parsed the header; loops driving on `has_next` should `init` first.
    pub fn has_next(&self) -> bool {
        match &self.state {
            IteratorState::Fresh { .. } => true,
            IteratorState::Streaming { cursor, .. } => cursor.has_next(),
            IteratorState::Poisoned => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::dispatch::new_iterator;
    use super::*;
    use bytes::Bytes;

    fn int_plain_buffer(values: &[i32], null_rows: &[i32]) -> Bytes {
        let mut data = Vec::new();
        data.extend_from_slice(&ColumnKind::Int.tag().to_le_bytes());
        data.extend_from_slice(&(null_rows.len() as i32).to_le_bytes());
        for row in null_rows {
            data.extend_from_slice(&row.to_le_bytes());
        }
        data.extend_from_slice(&CompressionKind::Default.tag().to_le_bytes());
        for v in values {
            data.extend_from_slice(&v.to_le_bytes());
        }
        Bytes::from(data)
    }

    #[test]
    fn init_is_idempotent() {
        let buf = int_plain_buffer(&[1, 2], &[]);
        let mut iter = new_iterator(&buf).expect("dispatch iterator");
        iter.init().expect("first init");
        iter.init().expect("second init is a no-op");
        iter.next().expect("first row");
        assert_eq!(iter.current(), Some(&Cell::Int(1)));
    }

    #[test]
    fn next_triggers_lazy_init() {
        let buf = int_plain_buffer(&[7], &[]);
        let mut iter = new_iterator(&buf).expect("dispatch iterator");
        iter.next().expect("next initializes and advances");
        assert_eq!(iter.current(), Some(&Cell::Int(7)));
    }

    #[test]
    fn current_before_first_next_is_none() {
        let buf = int_plain_buffer(&[7], &[]);
        let mut iter = new_iterator(&buf).expect("dispatch iterator");
        assert_eq!(iter.current(), None);
        iter.init().expect("init");
        assert_eq!(iter.current(), None);
    }

    #[test]
    fn next_past_exhaustion_is_misuse_and_poisons() {
        let buf = int_plain_buffer(&[7], &[]);
        let mut iter = new_iterator(&buf).expect("dispatch iterator");
        iter.next().expect("only row");
        let err = iter.next().expect_err("exhausted next should fail");
        assert_eq!(err.kind, crate::columnar::DecodeErrorKind::Misuse);
        assert!(!iter.has_next());
        let err = iter.next().expect_err("poisoned next should fail");
        assert_eq!(err.kind, crate::columnar::DecodeErrorKind::Misuse);
        assert_eq!(iter.current(), None);
    }

    #[test]
    fn malformed_header_poisons_on_init() {
        // Null count claims more indices than the buffer holds.
        let mut data = Vec::new();
        data.extend_from_slice(&ColumnKind::Int.tag().to_le_bytes());
        data.extend_from_slice(&3_i32.to_le_bytes());
        data.extend_from_slice(&0_i32.to_le_bytes());
        let buf = Bytes::from(data);
        let mut iter = new_iterator(&buf).expect("dispatch iterator");
        let err = iter.next().expect_err("truncated null header should fail");
        assert_eq!(err.kind, crate::columnar::DecodeErrorKind::MalformedBuffer);
        let err = iter.init().expect_err("poisoned init should fail");
        assert_eq!(err.kind, crate::columnar::DecodeErrorKind::Misuse);
    }
}
