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

//! The validated configuration snapshot and its loader.

use super::defaults::{
    DEFAULT_BYTE_OFFSET, DEFAULT_NUM_CPU_PER_LINK, DEFAULT_NUM_ITERATIONS, DEFAULT_NUM_WARMUPS,
    DEFAULT_SAMPLING_FACTOR,
};
use super::env_mapping;
use super::env_provider::EnvProvider;
use super::error::ConfigurationError;
use super::fill_pattern::FillPattern;
use crate::traits::validatable::Validatable;
use serde::Serialize;
use tracing::info;

/// Benchmark settings resolved from the environment.
///
/// Built once at startup and never mutated afterwards; every numeric field
/// has already passed validation, so the snapshot can be shared read-only
/// with any number of worker threads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BenchmarkConfig {
    /// Use HIP library calls instead of custom kernels for GPU-executed copies.
    pub use_hip_call: bool,
    /// Perform a memset instead of a copy, ignoring source memory.
    pub use_memset: bool,
    /// Synchronize once after all iterations instead of per iteration.
    pub use_single_sync: bool,
    /// Wait for user input before starting the transfer loop.
    pub use_interactive: bool,
    /// Sleep after each synchronization. Not wired to any environment
    /// variable; always false.
    pub use_sleep: bool,
    /// Combine timing with kernel launch.
    pub combine_timing: bool,
    /// Print source and destination memory addresses for each link.
    pub show_addr: bool,
    /// Emit results in CSV format instead of the console report.
    pub output_to_csv: bool,
    /// Byte offset for memory allocations, a multiple of the cell size.
    pub byte_offset: i32,
    /// Untimed warmup iterations per test.
    pub num_warmups: i32,
    /// Timed iterations per test.
    pub num_iterations: i32,
    /// Extra samples between powers of two when auto-generating sizes.
    pub sampling_factor: i32,
    /// CPU threads per link for CPU-executed copies.
    pub num_cpu_per_link: i32,
    /// Decoded fill pattern; empty when no pattern was supplied.
    pub fill_pattern: FillPattern,
    /// Raw fill-pattern text as supplied, kept for display.
    pub fill_pattern_text: Option<String>,
    /// Raw HSA_ENABLE_SDMA value, kept for display and never validated.
    pub hsa_enable_sdma: Option<String>,
}

impl BenchmarkConfig {
    /// Resolve the configuration from the given environment view.
    ///
    /// Absent variables fall back to their documented defaults. Returns an
    /// error on a malformed fill pattern or on any value that fails range or
    /// alignment validation; no partially valid snapshot is ever returned.
    pub fn load(env: &impl EnvProvider) -> Result<Self, ConfigurationError> {
        let fill_pattern_text = read_raw(env, env_mapping::FILL_PATTERN);
        let fill_pattern = match &fill_pattern_text {
            Some(text) => FillPattern::from_hex(text)?,
            None => FillPattern::default(),
        };

        let config = Self {
            use_hip_call: read_flag(env, env_mapping::USE_HIP_CALL),
            use_memset: read_flag(env, env_mapping::USE_MEMSET),
            use_single_sync: read_flag(env, env_mapping::USE_SINGLE_SYNC),
            use_interactive: read_flag(env, env_mapping::USE_INTERACTIVE),
            use_sleep: false,
            combine_timing: read_flag(env, env_mapping::COMBINE_TIMING),
            show_addr: read_flag(env, env_mapping::SHOW_ADDR),
            output_to_csv: read_flag(env, env_mapping::OUTPUT_TO_CSV),
            byte_offset: read_int(env, env_mapping::BYTE_OFFSET, DEFAULT_BYTE_OFFSET),
            num_warmups: read_int(env, env_mapping::NUM_WARMUPS, DEFAULT_NUM_WARMUPS),
            num_iterations: read_int(env, env_mapping::NUM_ITERATIONS, DEFAULT_NUM_ITERATIONS),
            sampling_factor: read_int(env, env_mapping::SAMPLING_FACTOR, DEFAULT_SAMPLING_FACTOR),
            num_cpu_per_link: read_int(
                env,
                env_mapping::NUM_CPU_PER_LINK,
                DEFAULT_NUM_CPU_PER_LINK,
            ),
            fill_pattern,
            fill_pattern_text,
            hsa_enable_sdma: env.var(env_mapping::HSA_ENABLE_SDMA),
        };
        config.validate()?;
        Ok(config)
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            use_hip_call: false,
            use_memset: false,
            use_single_sync: false,
            use_interactive: false,
            use_sleep: false,
            combine_timing: false,
            show_addr: false,
            output_to_csv: false,
            byte_offset: DEFAULT_BYTE_OFFSET,
            num_warmups: DEFAULT_NUM_WARMUPS,
            num_iterations: DEFAULT_NUM_ITERATIONS,
            sampling_factor: DEFAULT_SAMPLING_FACTOR,
            num_cpu_per_link: DEFAULT_NUM_CPU_PER_LINK,
            fill_pattern: FillPattern::default(),
            fill_pattern_text: None,
            hsa_enable_sdma: None,
        }
    }
}

fn read_raw(env: &impl EnvProvider, name: &str) -> Option<String> {
    let value = env.var(name);
    if let Some(text) = &value {
        info!("{name} set to {text} from environment variable");
    }
    value
}

fn read_int(env: &impl EnvProvider, name: &str, default: i32) -> i32 {
    match read_raw(env, name) {
        Some(text) => parse_int(&text),
        None => default,
    }
}

fn read_flag(env: &impl EnvProvider, name: &str) -> bool {
    read_int(env, name, 0) != 0
}

// Best-effort conversion: malformed numeric text yields 0, not an error.
fn parse_int(text: &str) -> i32 {
    text.trim().parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configs::env_provider::StaticEnvProvider;

    #[test]
    fn absent_variables_load_the_documented_defaults() {
        let config = BenchmarkConfig::load(&StaticEnvProvider::new()).unwrap();
        assert_eq!(config, BenchmarkConfig::default());
        assert_eq!(config.num_warmups, 3);
        assert_eq!(config.num_iterations, 10);
        assert_eq!(config.sampling_factor, 1);
        assert_eq!(config.num_cpu_per_link, 4);
        assert_eq!(config.byte_offset, 0);
        assert!(config.fill_pattern.is_empty());
    }

    #[test]
    fn flags_treat_any_nonzero_value_as_set() {
        let env = StaticEnvProvider::new()
            .with_var("USE_HIP_CALL", "1")
            .with_var("USE_MEMSET", "2")
            .with_var("SHOW_ADDR", "0");
        let config = BenchmarkConfig::load(&env).unwrap();
        assert!(config.use_hip_call);
        assert!(config.use_memset);
        assert!(!config.show_addr);
    }

    #[test]
    fn malformed_integer_text_parses_as_zero() {
        let env = StaticEnvProvider::new().with_var("NUM_WARMUPS", "plenty");
        let config = BenchmarkConfig::load(&env).unwrap();
        assert_eq!(config.num_warmups, 0);
    }

    #[test]
    fn malformed_iteration_count_parses_as_zero_and_fails_validation() {
        let env = StaticEnvProvider::new().with_var("NUM_ITERATIONS", "plenty");
        let error = BenchmarkConfig::load(&env).unwrap_err();
        assert!(matches!(error, ConfigurationError::OutOfRangeValue(_)));
    }

    #[test]
    fn sleep_flag_stays_unset() {
        let config = BenchmarkConfig::load(&StaticEnvProvider::new()).unwrap();
        assert!(!config.use_sleep);
    }

    #[test]
    fn sdma_variable_is_captured_verbatim() {
        let env = StaticEnvProvider::new().with_var("HSA_ENABLE_SDMA", "0");
        let config = BenchmarkConfig::load(&env).unwrap();
        assert_eq!(config.hsa_enable_sdma.as_deref(), Some("0"));
    }

    #[test]
    fn explicit_empty_fill_pattern_behaves_like_unset() {
        let env = StaticEnvProvider::new().with_var("FILL_PATTERN", "");
        let config = BenchmarkConfig::load(&env).unwrap();
        assert!(config.fill_pattern.is_empty());
        assert_eq!(config.fill_pattern_text.as_deref(), Some(""));
    }
}
