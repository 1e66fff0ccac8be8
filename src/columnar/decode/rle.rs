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
//! Run-length decoder for fixed-width column types.
//!
//! Wire shape is a sequence of `(value, run_length: i32)` pairs. The writer
//! guarantees the final run ends exactly at end-of-buffer, so the sequence
//! is exhausted when the cursor is drained and the current run is fully
//! delivered.

use super::super::cell::Cell;
use super::super::cursor::ValueCursor;
use super::super::error::DecodeError;
use super::super::kind::ColumnKind;

pub(crate) struct RleValueDecoder {
    kind: ColumnKind,
    cursor: ValueCursor,
    cell: Cell,
    run_len: u32,
    count_in_run: u32,
}

impl RleValueDecoder {
    pub(crate) fn new(kind: ColumnKind, cursor: ValueCursor) -> Self {
        let cell = kind.new_cell();
        Self {
            kind,
            cursor,
            cell,
            run_len: 0,
            count_in_run: 0,
        }
    }

    pub(crate) fn has_next(&self) -> bool {
        self.cursor.has_remaining() || self.count_in_run < self.run_len
    }

    pub(crate) fn advance(&mut self) -> Result<(), DecodeError> {
        if self.count_in_run == self.run_len {
            self.kind.extract_into(&mut self.cursor, &mut self.cell)?;
            let run_len = self.cursor.read_i32("run length")?;
            if run_len <= 0 {
                return Err(DecodeError::malformed(format!(
                    "invalid RLE run length: column_type={}, run_length={}, offset={}",
                    self.kind.type_name(),
                    run_len,
                    self.cursor.offset()
                )));
            }
            self.run_len = run_len as u32;
            self.count_in_run = 1;
        } else {
            self.count_in_run += 1;
        }
        Ok(())
    }

    pub(crate) fn cell(&self) -> &Cell {
        &self.cell
    }
}
