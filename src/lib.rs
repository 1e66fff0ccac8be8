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
//! EmberStore native columnar decode path.
//!
//! The engine hands a self-describing column buffer to
//! [`columnar::new_iterator`] and consumes rows through the returned
//! [`columnar::ColumnIterator`].

pub mod columnar;
pub mod common;

// Flat folder layout, with `emberstore_*` convenience aliases.
pub use common::app_config as emberstore_config;
pub use common::logging as emberstore_logging;

pub use columnar::{
    Cell, ColumnIterator, ColumnKind, CompressionKind, DecodeError, DecodeErrorKind,
    TimestampValue, new_iterator,
};
