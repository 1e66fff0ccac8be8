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
//! Signed byte-delta decoder for SHORT/INT/LONG columns.
//!
//! Every row starts with a one-byte flag. The writer's `NEW_BASE_VALUE`
//! sentinel announces a full-width value; any other flag is a signed delta
//! in `-127..=127` added to the previous row at the column's natural width.
//! Delta addition wraps; the writer owns overflow semantics.

use super::super::cell::Cell;
use super::super::constants::NEW_BASE_VALUE;
use super::super::cursor::ValueCursor;
use super::super::error::DecodeError;
use super::super::kind::ColumnKind;

pub(crate) struct ByteDeltaDecoder {
    kind: ColumnKind,
    cursor: ValueCursor,
    cell: Cell,
    started: bool,
}

impl ByteDeltaDecoder {
    pub(crate) fn new(kind: ColumnKind, cursor: ValueCursor) -> Self {
        let cell = kind.new_cell();
        Self {
            kind,
            cursor,
            cell,
            started: false,
        }
    }

    pub(crate) fn has_next(&self) -> bool {
        self.cursor.has_remaining()
    }

    pub(crate) fn advance(&mut self) -> Result<(), DecodeError> {
        let flag = self.cursor.read_i8("delta flag")?;
        if flag == NEW_BASE_VALUE || !self.started {
            self.kind.extract_into(&mut self.cursor, &mut self.cell)?;
            self.started = true;
            return Ok(());
        }
        match (self.kind, &mut self.cell) {
            (ColumnKind::Short, Cell::Short(prev)) => *prev = prev.wrapping_add(i16::from(flag)),
            (ColumnKind::Int, Cell::Int(prev)) => *prev = prev.wrapping_add(i32::from(flag)),
            (ColumnKind::Long, Cell::Long(prev)) => *prev = prev.wrapping_add(i64::from(flag)),
            _ => {
                return Err(DecodeError::malformed(format!(
                    "delta flag on non-delta column type: column_type={}, flag={}",
                    self.kind.type_name(),
                    flag
                )));
            }
        }
        Ok(())
    }

    pub(crate) fn cell(&self) -> &Cell {
        &self.cell
    }
}
