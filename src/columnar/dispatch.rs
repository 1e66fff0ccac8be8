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
//! Column buffer dispatch.
//!
//! Single entry point of the decode path: duplicate the caller's buffer,
//! resolve the column-type tag, and hand back a lazy iterator. This module
//! is the only place wire tags become concrete decoder types; a new
//! compression scheme is one tag, one decoder, and one branch in the decoder
//! build switch.

use bytes::Bytes;

use super::cursor::ValueCursor;
use super::error::DecodeError;
use super::iterator::ColumnIterator;
use super::kind::ColumnKind;

/// Build a row iterator over one column buffer.
///
/// The buffer is duplicated (independent read cursor over the same storage),
/// so the caller's view is left untouched and several iterators can decode
/// the same buffer independently. The column-type tag is validated here;
/// everything after it is parsed lazily on first `next`.
pub fn new_iterator(buf: &Bytes) -> Result<ColumnIterator, DecodeError> {
    let mut cursor = ValueCursor::new(buf.clone());
    let tag = cursor.read_i32("column type tag")?;
    let kind = ColumnKind::from_tag(tag).ok_or_else(|| {
        DecodeError::unknown_column_type(format!(
            "unknown column type tag: column_type_tag={}, buffer_size={}",
            tag,
            buf.len()
        ))
    })?;
    tracing::debug!(
        "dispatch column iterator: column_type={}, buffer_size={}",
        kind.type_name(),
        buf.len()
    );
    Ok(ColumnIterator::new(kind, cursor))
}
