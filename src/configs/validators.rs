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

use super::benchmark::BenchmarkConfig;
use super::env_mapping::{BYTE_OFFSET, NUM_CPU_PER_LINK, NUM_ITERATIONS, NUM_WARMUPS, SAMPLING_FACTOR};
use super::error::ConfigurationError;
use super::fill_pattern::FILL_CELL_SIZE;
use crate::traits::validatable::Validatable;

impl Validatable<ConfigurationError> for BenchmarkConfig {
    // First violation wins; the diagnostic names the offending variable.
    fn validate(&self) -> Result<(), ConfigurationError> {
        if self.byte_offset % FILL_CELL_SIZE as i32 != 0 {
            return Err(ConfigurationError::OutOfRangeValue(format!(
                "{BYTE_OFFSET} must be set to a multiple of {FILL_CELL_SIZE}"
            )));
        }
        if self.num_warmups < 0 {
            return Err(ConfigurationError::OutOfRangeValue(format!(
                "{NUM_WARMUPS} must be set to a non-negative number"
            )));
        }
        if self.num_iterations <= 0 {
            return Err(ConfigurationError::OutOfRangeValue(format!(
                "{NUM_ITERATIONS} must be set to a positive number"
            )));
        }
        if self.sampling_factor < 1 {
            return Err(ConfigurationError::OutOfRangeValue(format!(
                "{SAMPLING_FACTOR} must be greater or equal to 1"
            )));
        }
        if self.num_cpu_per_link < 1 {
            return Err(ConfigurationError::OutOfRangeValue(format!(
                "{NUM_CPU_PER_LINK} must be greater or equal to 1"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_configuration_is_valid() {
        assert!(BenchmarkConfig::default().validate().is_ok());
    }

    #[test]
    fn misaligned_byte_offset_is_rejected() {
        let config = BenchmarkConfig {
            byte_offset: 3,
            ..Default::default()
        };
        let error = config.validate().unwrap_err();
        assert!(error.to_string().contains("BYTE_OFFSET"));
    }

    #[test]
    fn aligned_byte_offset_is_accepted() {
        let config = BenchmarkConfig {
            byte_offset: 8,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn negative_warmup_count_is_rejected() {
        let config = BenchmarkConfig {
            num_warmups: -1,
            ..Default::default()
        };
        let error = config.validate().unwrap_err();
        assert!(error.to_string().contains("NUM_WARMUPS"));
    }

    #[test]
    fn zero_warmup_count_is_accepted() {
        let config = BenchmarkConfig {
            num_warmups: 0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_iteration_count_is_rejected() {
        let config = BenchmarkConfig {
            num_iterations: 0,
            ..Default::default()
        };
        let error = config.validate().unwrap_err();
        assert!(error.to_string().contains("NUM_ITERATIONS"));
    }

    #[test]
    fn zero_sampling_factor_is_rejected() {
        let config = BenchmarkConfig {
            sampling_factor: 0,
            ..Default::default()
        };
        let error = config.validate().unwrap_err();
        assert!(error.to_string().contains("SAMPLING_FACTOR"));
    }

    #[test]
    fn zero_cpu_threads_per_link_is_rejected() {
        let config = BenchmarkConfig {
            num_cpu_per_link: 0,
            ..Default::default()
        };
        let error = config.validate().unwrap_err();
        assert!(error.to_string().contains("NUM_CPU_PER_LINK"));
    }

    #[test]
    fn byte_offset_is_checked_before_the_counts() {
        let config = BenchmarkConfig {
            byte_offset: 5,
            num_iterations: 0,
            ..Default::default()
        };
        let error = config.validate().unwrap_err();
        assert!(error.to_string().contains("BYTE_OFFSET"));
    }
}
