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
//! Bounds-checked little-endian cursor over a shared column buffer.
//!
//! The writer emits every multi-byte field little-endian; this cursor is the
//! only place raw bytes are turned into integers and floats. Underflow is a
//! `MalformedBuffer` error carrying the field label and offset, never a panic.
//!
//! The cursor wraps `bytes::Bytes`, so slicing a value window out of the
//! buffer is a refcount bump rather than a copy.

use bytes::{Buf, Bytes};

use super::error::DecodeError;

/// Read cursor over one column buffer.
///
/// Cloning the underlying `Bytes` before constructing a cursor gives an
/// independent read position over the same storage, which is how the
/// dispatcher duplicates caller buffers.
pub(crate) struct ValueCursor {
    buf: Bytes,
    start_len: usize,
}

impl ValueCursor {
    pub(crate) fn new(buf: Bytes) -> Self {
        let start_len = buf.len();
        Self { buf, start_len }
    }

    /// Bytes not yet consumed.
    pub(crate) fn remaining(&self) -> usize {
        self.buf.len()
    }

    pub(crate) fn has_remaining(&self) -> bool {
        !self.buf.is_empty()
    }

    /// Byte offset of the next read, relative to cursor construction.
    pub(crate) fn offset(&self) -> usize {
        self.start_len - self.buf.len()
    }

    fn read_array<const N: usize>(&mut self, field: &'static str) -> Result<[u8; N], DecodeError> {
        if self.buf.len() < N {
            return Err(DecodeError::malformed(format!(
                "value buffer underflow while reading {}: need={}, remaining={}, offset={}",
                field,
                N,
                self.buf.len(),
                self.offset()
            )));
        }
        let mut out = [0_u8; N];
        out.copy_from_slice(&self.buf[..N]);
        self.buf.advance(N);
        Ok(out)
    }

    pub(crate) fn read_i8(&mut self, field: &'static str) -> Result<i8, DecodeError> {
        Ok(self.read_array::<1>(field)?[0] as i8)
    }

    pub(crate) fn read_u8(&mut self, field: &'static str) -> Result<u8, DecodeError> {
        Ok(self.read_array::<1>(field)?[0])
    }

    pub(crate) fn read_i16(&mut self, field: &'static str) -> Result<i16, DecodeError> {
        Ok(i16::from_le_bytes(self.read_array::<2>(field)?))
    }

    pub(crate) fn read_u16(&mut self, field: &'static str) -> Result<u16, DecodeError> {
        Ok(u16::from_le_bytes(self.read_array::<2>(field)?))
    }

    pub(crate) fn read_i32(&mut self, field: &'static str) -> Result<i32, DecodeError> {
        Ok(i32::from_le_bytes(self.read_array::<4>(field)?))
    }

    pub(crate) fn read_u32(&mut self, field: &'static str) -> Result<u32, DecodeError> {
        Ok(u32::from_le_bytes(self.read_array::<4>(field)?))
    }

    pub(crate) fn read_i64(&mut self, field: &'static str) -> Result<i64, DecodeError> {
        Ok(i64::from_le_bytes(self.read_array::<8>(field)?))
    }

    pub(crate) fn read_u64(&mut self, field: &'static str) -> Result<u64, DecodeError> {
        Ok(u64::from_le_bytes(self.read_array::<8>(field)?))
    }

    pub(crate) fn read_f32(&mut self, field: &'static str) -> Result<f32, DecodeError> {
        Ok(f32::from_le_bytes(self.read_array::<4>(field)?))
    }

    pub(crate) fn read_f64(&mut self, field: &'static str) -> Result<f64, DecodeError> {
        Ok(f64::from_le_bytes(self.read_array::<8>(field)?))
    }

    /// Slice `len` bytes out of the buffer as a zero-copy window.
    pub(crate) fn read_bytes(&mut self, len: usize, field: &'static str) -> Result<Bytes, DecodeError> {
        if self.buf.len() < len {
            return Err(DecodeError::malformed(format!(
                "value buffer underflow while reading {}: need={}, remaining={}, offset={}",
                field,
                len,
                self.buf.len(),
                self.offset()
            )));
        }
        Ok(self.buf.split_to(len))
    }

    /// Read a 4-byte length prefix followed by that many raw bytes.
    pub(crate) fn read_len_prefixed(&mut self, field: &'static str) -> Result<Bytes, DecodeError> {
        let len = self.read_i32(field)?;
        if len < 0 {
            return Err(DecodeError::malformed(format!(
                "negative length prefix while reading {}: length={}, offset={}",
                field,
                len,
                self.offset()
            )));
        }
        self.read_bytes(len as usize, field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor_over(bytes: &[u8]) -> ValueCursor {
        ValueCursor::new(Bytes::copy_from_slice(bytes))
    }

    #[test]
    fn reads_little_endian_primitives_in_order() {
        let mut data = Vec::new();
        data.extend_from_slice(&7_i32.to_le_bytes());
        data.extend_from_slice(&(-2_i16).to_le_bytes());
        data.extend_from_slice(&3.5_f64.to_le_bytes());
        let mut cursor = cursor_over(&data);

        assert_eq!(cursor.read_i32("int value").expect("read i32"), 7);
        assert_eq!(cursor.read_i16("short value").expect("read i16"), -2);
        assert_eq!(cursor.read_f64("double value").expect("read f64"), 3.5);
        assert!(!cursor.has_remaining());
        assert_eq!(cursor.offset(), 14);
    }

    #[test]
    fn underflow_reports_field_and_offset() {
        let mut cursor = cursor_over(&[1, 2]);
        let err = cursor
            .read_i32("run length")
            .expect_err("short read should fail");
        assert!(err.message.contains("run length"), "err={err}");
        assert!(err.message.contains("remaining=2"), "err={err}");
    }

    #[test]
    fn len_prefixed_rejects_negative_length() {
        let mut data = Vec::new();
        data.extend_from_slice(&(-1_i32).to_le_bytes());
        let mut cursor = cursor_over(&data);
        let err = cursor
            .read_len_prefixed("string value")
            .expect_err("negative length should fail");
        assert!(err.message.contains("length=-1"), "err={err}");
    }

    #[test]
    fn len_prefixed_slices_window_without_consuming_rest() {
        let mut data = Vec::new();
        data.extend_from_slice(&2_i32.to_le_bytes());
        data.extend_from_slice(b"abXY");
        let mut cursor = cursor_over(&data);
        let window = cursor
            .read_len_prefixed("binary value")
            .expect("read window");
        assert_eq!(&window[..], b"ab");
        assert_eq!(cursor.remaining(), 2);
    }
}
