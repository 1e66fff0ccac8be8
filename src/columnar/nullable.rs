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
//! Null projection over an inner value decoder.
//!
//! The buffer carries `null_count: i32` followed by that many strictly
//! increasing row indices ahead of the compression tag. The cursor keeps a
//! monotone row counter; a row whose index is the next null index yields a
//! null without touching the inner decoder, anything else delegates.
//!
//! A null index at or beyond the logical row count cannot be detected at
//! parse time (the inner row count is unknown until the body is drained), so
//! it surfaces during iteration when the inner decoder runs dry with null
//! indices still pending ahead of the row counter.

use super::cell::Cell;
use super::cursor::ValueCursor;
use super::decode::ValueDecoder;
use super::error::DecodeError;

/// Parse the null-index header, leaving the cursor at the compression tag.
pub(super) fn parse_null_rows(cursor: &mut ValueCursor) -> Result<Vec<u32>, DecodeError> {
    let null_count = cursor.read_i32("null count")?;
    if null_count < 0 {
        return Err(DecodeError::malformed(format!(
            "negative null count: null_count={}",
            null_count
        )));
    }
    let mut null_rows = Vec::with_capacity(null_count as usize);
    for position in 0..null_count {
        let index = cursor.read_i32("null row index")?;
        if index < 0 {
            return Err(DecodeError::malformed(format!(
                "negative null row index: position={}, row_index={}",
                position, index
            )));
        }
        let index = index as u32;
        if let Some(&previous) = null_rows.last() {
            if index <= previous {
                return Err(DecodeError::malformed(format!(
                    "null row indices not strictly increasing: position={}, row_index={}, previous_row_index={}",
                    position, index, previous
                )));
            }
        }
        null_rows.push(index);
    }
    Ok(null_rows)
}

/// Row cursor that projects null rows through an inner decoder.
pub(super) struct NullableColumnCursor {
    decoder: ValueDecoder,
    null_rows: Vec<u32>,
    null_pos: usize,
    row: u32,
    current_is_null: bool,
}

impl NullableColumnCursor {
    pub(super) fn new(decoder: ValueDecoder, null_rows: Vec<u32>) -> Self {
        Self {
            decoder,
            null_rows,
            null_pos: 0,
            row: 0,
            current_is_null: false,
        }
    }

    pub(super) fn has_next(&self) -> bool {
        self.decoder.has_next() || self.null_pos < self.null_rows.len()
    }

    pub(super) fn advance(&mut self) -> Result<(), DecodeError> {
        let row = self.row;
        self.row += 1;
        if self.null_pos < self.null_rows.len() && self.null_rows[self.null_pos] == row {
            self.null_pos += 1;
            self.current_is_null = true;
            return Ok(());
        }
        if !self.decoder.has_next() {
            // Remaining null indices point past the last delivered row.
            return Err(DecodeError::malformed(format!(
                "null row index beyond logical row count: row_index={}, logical_rows={}",
                self.null_rows[self.null_pos], row
            )));
        }
        self.decoder.advance()?;
        self.current_is_null = false;
        Ok(())
    }

    /// Current row value, `None` for a null row. Idempotent between advances.
    pub(super) fn current(&self) -> Option<&Cell> {
        if self.current_is_null {
            None
        } else {
            Some(self.decoder.cell())
        }
    }
}
