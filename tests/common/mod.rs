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
//! Common utilities and helpers for integration tests.
//!
//! `ColumnBufferBuilder` is the writer stand-in: it emits the little-endian
//! column buffer layout (type tag, null header, compression tag, body) that
//! the decode path consumes.
#![allow(dead_code)]

use bytes::Bytes;

use emberstore::{Cell, ColumnKind, CompressionKind, TimestampValue, new_iterator};

/// Sentinel flag announcing a full-width value in byte-delta bodies.
/// Mirrors the writer constant the decoder matches bit-exactly.
pub const NEW_BASE_VALUE: i8 = i8::MIN;

/// Builds one self-describing column buffer, header first, body last.
pub struct ColumnBufferBuilder {
    data: Vec<u8>,
}

impl ColumnBufferBuilder {
    pub fn new(kind: ColumnKind, null_rows: &[u32], compression: CompressionKind) -> Self {
        let mut data = Vec::new();
        data.extend_from_slice(&kind.tag().to_le_bytes());
        data.extend_from_slice(&(null_rows.len() as i32).to_le_bytes());
        for row in null_rows {
            data.extend_from_slice(&(*row as i32).to_le_bytes());
        }
        data.extend_from_slice(&compression.tag().to_le_bytes());
        Self { data }
    }

    /// Raw header bytes with arbitrary tags, for malformed-buffer tests.
    pub fn with_raw_tags(column_tag: i32, null_rows: &[u32], compression_tag: i32) -> Self {
        let mut data = Vec::new();
        data.extend_from_slice(&column_tag.to_le_bytes());
        data.extend_from_slice(&(null_rows.len() as i32).to_le_bytes());
        for row in null_rows {
            data.extend_from_slice(&(*row as i32).to_le_bytes());
        }
        data.extend_from_slice(&compression_tag.to_le_bytes());
        Self { data }
    }

    pub fn push_i16(&mut self, value: i16) -> &mut Self {
        self.data.extend_from_slice(&value.to_le_bytes());
        self
    }

    pub fn push_i32(&mut self, value: i32) -> &mut Self {
        self.data.extend_from_slice(&value.to_le_bytes());
        self
    }

    pub fn push_i64(&mut self, value: i64) -> &mut Self {
        self.data.extend_from_slice(&value.to_le_bytes());
        self
    }

    pub fn push_f32(&mut self, value: f32) -> &mut Self {
        self.data.extend_from_slice(&value.to_le_bytes());
        self
    }

    pub fn push_f64(&mut self, value: f64) -> &mut Self {
        self.data.extend_from_slice(&value.to_le_bytes());
        self
    }

    pub fn push_u8(&mut self, value: u8) -> &mut Self {
        self.data.push(value);
        self
    }

    pub fn push_i8(&mut self, value: i8) -> &mut Self {
        self.data.push(value as u8);
        self
    }

    pub fn push_bool(&mut self, value: bool) -> &mut Self {
        self.data.push(value as u8);
        self
    }

    pub fn push_timestamp(&mut self, value: TimestampValue) -> &mut Self {
        self.data.extend_from_slice(&value.seconds.to_le_bytes());
        self.data.extend_from_slice(&value.nanos.to_le_bytes());
        self
    }

    /// Length-prefixed payload, as STRING/BINARY/GENERIC values are stored.
    pub fn push_len_prefixed(&mut self, value: &[u8]) -> &mut Self {
        self.data.extend_from_slice(&(value.len() as i32).to_le_bytes());
        self.data.extend_from_slice(value);
        self
    }

    /// RLE run header after a value.
    pub fn push_run_length(&mut self, run_length: i32) -> &mut Self {
        self.push_i32(run_length)
    }

    /// Dictionary prelude: entry count, then the caller pushes each entry.
    pub fn push_dict_size(&mut self, size: i32) -> &mut Self {
        self.push_i32(size)
    }

    pub fn push_dict_code(&mut self, code: u16) -> &mut Self {
        self.data.extend_from_slice(&code.to_le_bytes());
        self
    }

    /// Bitset body: explicit count then 64-bit padded words, LSB-first.
    pub fn push_bitset(&mut self, values: &[bool]) -> &mut Self {
        self.push_i32(values.len() as i32);
        let word_count = values.len().div_ceil(64);
        let mut words = vec![0_u64; word_count];
        for (index, value) in values.iter().enumerate() {
            if *value {
                words[index / 64] |= 1 << (index % 64);
            }
        }
        for word in words {
            self.data.extend_from_slice(&word.to_le_bytes());
        }
        self
    }

    /// Byte-delta base row: sentinel flag, then the full-width value bytes.
    pub fn push_delta_base(&mut self) -> &mut Self {
        self.push_i8(NEW_BASE_VALUE)
    }

    pub fn push_delta(&mut self, delta: i8) -> &mut Self {
        assert_ne!(delta, NEW_BASE_VALUE, "delta collides with the sentinel");
        self.push_i8(delta)
    }

    pub fn build(&self) -> Bytes {
        Bytes::from(self.data.clone())
    }
}

/// Decode a buffer to completion, `None` marking null rows.
pub fn decode_all(buf: &Bytes) -> Vec<Option<Cell>> {
    let mut iter = new_iterator(buf).expect("dispatch column iterator");
    iter.init().expect("init column iterator");
    let mut rows = Vec::new();
    while iter.has_next() {
        iter.next().expect("advance column iterator");
        rows.push(iter.current().cloned());
    }
    rows
}
