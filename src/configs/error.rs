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

//! Configuration error types.

use thiserror::Error;

/// Errors produced while loading the benchmark configuration.
///
/// Both kinds are unrecoverable at this layer: callers either print the
/// diagnostic and exit, or propagate the error as-is.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// Input text that could not be decoded, such as an odd-length or
    /// non-hex fill pattern.
    #[error("{0}")]
    MalformedInput(String),
    /// A parsed value that violates its documented range or alignment
    /// constraint.
    #[error("{0}")]
    OutOfRangeValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_the_carried_diagnostic() {
        let error = ConfigurationError::OutOfRangeValue(
            "NUM_ITERATIONS must be set to a positive number".to_string(),
        );
        assert_eq!(
            error.to_string(),
            "NUM_ITERATIONS must be set to a positive number"
        );
    }
}
