/*
 * Licensed to the Apache Software Foundation (ASF) under one
 * or more contributor license agreements.  See the NOTICE file
 * distributed with this work for additional information
 * regarding copyright ownership.  The ASF licenses this file
 * to you under the Apache License, Version 2.0 (the
 * "License"); you may not use this file except in compliance
 * with the License.  You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing,
 * software distributed under the License is distributed on an
 * "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
 * KIND, either express or implied.  See the License for the
 * specific language governing permissions and limitations
 * under the License.
 */

//! Hex fill patterns used to seed source-side memory.

use super::error::ConfigurationError;
use serde::Serialize;

/// Size in bytes of one fill cell, the 32-bit float unit the pattern tiles.
pub const FILL_CELL_SIZE: usize = size_of::<f32>();

/// Decoded fill pattern whose length is always a whole number of cells.
///
/// An empty pattern means no pattern was supplied; the transfer engine then
/// seeds source memory with its deterministic pseudo-random sequence
/// (element i = i % 383 + 31).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FillPattern(Vec<u8>);

impl FillPattern {
    /// Decode a hex string and tile it to a whole number of cells.
    ///
    /// The digit count must be even. The decoded bytes are repeated just
    /// enough times to land on a cell boundary: a digit count divisible by 8
    /// needs one copy, a remainder of 4 needs two, anything else needs four.
    pub fn from_hex(text: &str) -> Result<Self, ConfigurationError> {
        if text.len() % 2 != 0 {
            return Err(ConfigurationError::MalformedInput(
                "FILL_PATTERN must contain an even number of hex digits".to_string(),
            ));
        }

        let mut decoded = Vec::with_capacity(text.len() / 2);
        let mut pending_high = None;
        for character in text.chars() {
            let nibble = character.to_digit(16).ok_or_else(|| {
                ConfigurationError::MalformedInput(format!(
                    "FILL_PATTERN must contain only hex digits 0-9/a-f/A-F, found '{character}'"
                ))
            })? as u8;
            pending_high = match pending_high {
                None => Some(nibble),
                Some(high) => {
                    decoded.push(high << 4 | nibble);
                    None
                }
            };
        }

        let copies = match text.len() % 8 {
            0 => 1,
            4 => 2,
            _ => 4,
        };
        Ok(Self(decoded.repeat(copies)))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of whole cells the pattern covers.
    pub fn num_cells(&self) -> usize {
        self.0.len() / FILL_CELL_SIZE
    }
}
