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
//! DEFAULT (uncompressed) decoder.
//!
//! Drains the buffer body by repeated value extraction; legal for every
//! column type. A VOID body is empty, so a VOID column's rows come entirely
//! from the null header.

use super::super::cell::Cell;
use super::super::cursor::ValueCursor;
use super::super::error::DecodeError;
use super::super::kind::ColumnKind;

pub(crate) struct PlainValueDecoder {
    kind: ColumnKind,
    cursor: ValueCursor,
    cell: Cell,
}

impl PlainValueDecoder {
    pub(crate) fn new(kind: ColumnKind, cursor: ValueCursor) -> Self {
        let cell = kind.new_cell();
        Self { kind, cursor, cell }
    }

    pub(crate) fn has_next(&self) -> bool {
        self.cursor.has_remaining()
    }

    pub(crate) fn advance(&mut self) -> Result<(), DecodeError> {
        self.kind.extract_into(&mut self.cursor, &mut self.cell)
    }

    pub(crate) fn cell(&self) -> &Cell {
        &self.cell
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    fn cursor_over(bytes: &[u8]) -> ValueCursor {
        ValueCursor::new(Bytes::copy_from_slice(bytes))
    }

    #[test]
    fn drains_int_values_in_writer_order() {
        let mut body = Vec::new();
        for v in [7_i32, -3, 0, i32::MAX] {
            body.extend_from_slice(&v.to_le_bytes());
        }
        let mut decoder = PlainValueDecoder::new(ColumnKind::Int, cursor_over(&body));

        let mut decoded = Vec::new();
        while decoder.has_next() {
            decoder.advance().expect("advance plain int");
            match decoder.cell() {
                Cell::Int(v) => decoded.push(*v),
                other => panic!("unexpected cell variant: {other:?}"),
            }
        }
        assert_eq!(decoded, vec![7, -3, 0, i32::MAX]);
        assert!(!decoder.has_next());
    }

    #[test]
    fn variable_length_values_keep_their_windows() {
        let mut body = Vec::new();
        for value in [&b"ab"[..], &b""[..], &b"xyz"[..]] {
            body.extend_from_slice(&(value.len() as i32).to_le_bytes());
            body.extend_from_slice(value);
        }
        let mut decoder = PlainValueDecoder::new(ColumnKind::Binary, cursor_over(&body));

        let mut decoded = Vec::new();
        while decoder.has_next() {
            decoder.advance().expect("advance plain binary");
            decoded.push(decoder.cell().clone());
        }
        assert_eq!(
            decoded,
            vec![
                Cell::Binary(Bytes::from_static(b"ab")),
                Cell::Binary(Bytes::from_static(b"")),
                Cell::Binary(Bytes::from_static(b"xyz")),
            ]
        );
    }

    #[test]
    fn truncated_value_surfaces_malformed_error() {
        let mut body = Vec::new();
        body.extend_from_slice(&1_i64.to_le_bytes());
        body.extend_from_slice(&[0, 1, 2]);
        let mut decoder = PlainValueDecoder::new(ColumnKind::Long, cursor_over(&body));

        decoder.advance().expect("first long value");
        assert!(decoder.has_next());
        let err = decoder.advance().expect_err("truncated long should fail");
        assert!(err.message.contains("LONG value"), "err={err}");
    }
}
