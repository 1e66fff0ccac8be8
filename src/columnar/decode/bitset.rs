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
//! Bit-packed boolean decoder.
//!
//! Body layout: `count: i32`, then `ceil(count / 64)` little-endian 64-bit
//! words, LSB-first within each word. The word region size is validated
//! exactly at construction; the uncompressed row count is carried in the
//! header rather than inferred from remaining bytes.

use super::super::cell::Cell;
use super::super::constants::BITSET_WORD_BITS;
use super::super::cursor::ValueCursor;
use super::super::error::DecodeError;

pub(crate) struct BooleanBitsetDecoder {
    cursor: ValueCursor,
    cell: Cell,
    current_word: u64,
    pos: usize,
    count: usize,
}

impl BooleanBitsetDecoder {
    pub(crate) fn try_new(mut cursor: ValueCursor) -> Result<Self, DecodeError> {
        let count = cursor.read_i32("bitset count")?;
        if count < 0 {
            return Err(DecodeError::malformed(format!(
                "negative bitset count: count={}",
                count
            )));
        }
        let count = count as usize;
        let word_count = count.div_ceil(BITSET_WORD_BITS);
        let expected_bytes = word_count * 8;
        if cursor.remaining() != expected_bytes {
            return Err(DecodeError::malformed(format!(
                "bitset word region size mismatch: count={}, expected_bytes={}, actual_bytes={}",
                count,
                expected_bytes,
                cursor.remaining()
            )));
        }
        Ok(Self {
            cursor,
            cell: Cell::Boolean(false),
            current_word: 0,
            pos: 0,
            count,
        })
    }

    pub(crate) fn has_next(&self) -> bool {
        self.pos < self.count
    }

    pub(crate) fn advance(&mut self) -> Result<(), DecodeError> {
        let bit_index = self.pos % BITSET_WORD_BITS;
        if bit_index == 0 {
            self.current_word = self.cursor.read_u64("bitset word")?;
        }
        self.cell = Cell::Boolean((self.current_word >> bit_index) & 1 == 1);
        self.pos += 1;
        Ok(())
    }

    pub(crate) fn cell(&self) -> &Cell {
        &self.cell
    }
}
