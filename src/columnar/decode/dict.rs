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
//! Dictionary decoder.
//!
//! Body layout: `size: i32`, `size` values in column-type encoding, then a
//! stream of 16-bit codes until end-of-buffer. The dictionary is materialized
//! eagerly at construction; each advance reads one code and points the
//! current cell at the matching entry.
//!
//! Current limitations:
//! - Codes are unsigned 16-bit, so a dictionary can hold at most 65536
//!   entries; larger declared sizes are rejected as malformed.

use super::super::cell::Cell;
use super::super::constants::DICT_MAX_ENTRIES;
use super::super::cursor::ValueCursor;
use super::super::error::DecodeError;
use super::super::kind::ColumnKind;

pub(crate) struct DictValueDecoder {
    kind: ColumnKind,
    cursor: ValueCursor,
    entries: Vec<Cell>,
    current: usize,
}

impl DictValueDecoder {
    pub(crate) fn try_new(kind: ColumnKind, mut cursor: ValueCursor) -> Result<Self, DecodeError> {
        let size = cursor.read_i32("dictionary size")?;
        if size < 0 {
            return Err(DecodeError::malformed(format!(
                "negative dictionary size: column_type={}, size={}",
                kind.type_name(),
                size
            )));
        }
        let size = size as usize;
        if size > DICT_MAX_ENTRIES {
            return Err(DecodeError::malformed(format!(
                "dictionary size exceeds code range: column_type={}, size={}, max={}",
                kind.type_name(),
                size,
                DICT_MAX_ENTRIES
            )));
        }
        let mut entries = Vec::with_capacity(size);
        for index in 0..size {
            let mut cell = kind.new_cell();
            kind.extract_into(&mut cursor, &mut cell).map_err(|e| {
                DecodeError::malformed(format!(
                    "decode dictionary entry failed: column_type={}, entry_index={}, error={}",
                    kind.type_name(),
                    index,
                    e
                ))
            })?;
            entries.push(cell);
        }
        Ok(Self {
            kind,
            cursor,
            entries,
            current: 0,
        })
    }

    pub(crate) fn has_next(&self) -> bool {
        self.cursor.has_remaining()
    }

    pub(crate) fn advance(&mut self) -> Result<(), DecodeError> {
        let code = self.cursor.read_u16("dictionary code")?;
        let index = code as usize;
        if index >= self.entries.len() {
            return Err(DecodeError::malformed(format!(
                "dictionary code out of range: column_type={}, code={}, dict_size={}, offset={}",
                self.kind.type_name(),
                code,
                self.entries.len(),
                self.cursor.offset()
            )));
        }
        self.current = index;
        Ok(())
    }

    pub(crate) fn cell(&self) -> &Cell {
        &self.entries[self.current]
    }
}
