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

//! Read-only rendering of the configuration snapshot and the usage listing.

use super::benchmark::BenchmarkConfig;
use super::env_mapping::{self, ENV_VAR_MAPPINGS};
use comfy_table::Table;

/// Render the list of recognized environment variables with descriptions.
pub fn format_usage() -> String {
    let mut table = Table::new();
    table.set_header(vec!["Variable", "Description"]);
    for mapping in ENV_VAR_MAPPINGS {
        table.add_row(vec![mapping.env_name, mapping.description]);
    }
    format!("Environment variables\n{table}")
}

pub fn print_usage() {
    println!("{}", format_usage());
}

/// Render the run-configuration report.
///
/// Returns `None` in CSV output mode, where the external reporter owns all
/// output. Rendering never mutates the snapshot and never fails.
pub fn format_run_configuration(config: &BenchmarkConfig) -> Option<String> {
    if config.output_to_csv {
        return None;
    }

    let mut table = Table::new();
    table.set_header(vec!["Variable", "Value", "Setting"]);

    table.add_row(vec![
        env_mapping::USE_HIP_CALL.to_string(),
        flag(config.use_hip_call),
        format!(
            "Using {} for GPU-executed copies",
            if config.use_hip_call {
                "HIP functions"
            } else {
                "custom kernels"
            }
        ),
    ]);
    table.add_row(vec![
        env_mapping::USE_MEMSET.to_string(),
        flag(config.use_memset),
        format!(
            "Performing {}",
            if config.use_memset { "memset" } else { "memcopy" }
        ),
    ]);
    if config.use_hip_call && !config.use_memset {
        let sdma = config.hsa_enable_sdma.as_deref().unwrap_or("");
        table.add_row(vec![
            env_mapping::HSA_ENABLE_SDMA.to_string(),
            sdma.to_string(),
            if sdma == "0" {
                "Using blit kernels for hipMemcpy".to_string()
            } else {
                "Using DMA copy engines".to_string()
            },
        ]);
    }
    table.add_row(vec![
        env_mapping::USE_SINGLE_SYNC.to_string(),
        flag(config.use_single_sync),
        if config.use_single_sync {
            "Synchronizing only once, after all iterations".to_string()
        } else {
            "Synchronizing per iteration".to_string()
        },
    ]);
    table.add_row(vec![
        env_mapping::USE_INTERACTIVE.to_string(),
        flag(config.use_interactive),
        format!(
            "Running in {} mode",
            if config.use_interactive {
                "interactive"
            } else {
                "non-interactive"
            }
        ),
    ]);
    table.add_row(vec![
        env_mapping::COMBINE_TIMING.to_string(),
        flag(config.combine_timing),
        format!(
            "Using {} timing and launch",
            if config.combine_timing {
                "combined"
            } else {
                "separate"
            }
        ),
    ]);
    table.add_row(vec![
        env_mapping::SHOW_ADDR.to_string(),
        flag(config.show_addr),
        format!(
            "{} src/dst memory addresses",
            if config.show_addr {
                "Displaying"
            } else {
                "Not displaying"
            }
        ),
    ]);
    table.add_row(vec![
        env_mapping::OUTPUT_TO_CSV.to_string(),
        flag(config.output_to_csv),
        "Output to console".to_string(),
    ]);
    table.add_row(vec![
        env_mapping::BYTE_OFFSET.to_string(),
        config.byte_offset.to_string(),
        format!("Using byte offset of {}", config.byte_offset),
    ]);
    table.add_row(vec![
        env_mapping::NUM_WARMUPS.to_string(),
        config.num_warmups.to_string(),
        format!("Running {} warmup iteration(s) per test", config.num_warmups),
    ]);
    table.add_row(vec![
        env_mapping::NUM_ITERATIONS.to_string(),
        config.num_iterations.to_string(),
        format!("Running {} timed iteration(s) per test", config.num_iterations),
    ]);
    table.add_row(vec![
        env_mapping::SAMPLING_FACTOR.to_string(),
        config.sampling_factor.to_string(),
        format!(
            "Adding {} sample(s) between powers of two",
            config.sampling_factor
        ),
    ]);
    table.add_row(vec![
        env_mapping::NUM_CPU_PER_LINK.to_string(),
        config.num_cpu_per_link.to_string(),
        format!(
            "Using {} CPU thread(s) per CPU-based-copy link",
            config.num_cpu_per_link
        ),
    ]);
    table.add_row(vec![
        env_mapping::FILL_PATTERN.to_string(),
        if config.fill_pattern_text.is_some() {
            "(specified)".to_string()
        } else {
            "(unspecified)".to_string()
        },
        if config.fill_pattern.is_empty() {
            "Pseudo-random: element i = i % 383 + 31".to_string()
        } else {
            format!(
                "Pattern: {}",
                config.fill_pattern_text.as_deref().unwrap_or_default()
            )
        },
    ]);

    Some(format!("Run configuration\n{table}"))
}

pub fn print_run_configuration(config: &BenchmarkConfig) {
    if let Some(report) = format_run_configuration(config) {
        println!("{report}");
    }
}

fn flag(value: bool) -> String {
    u8::from(value).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_lists_every_recognized_variable() {
        let usage = format_usage();
        for mapping in ENV_VAR_MAPPINGS {
            assert!(usage.contains(mapping.env_name), "missing {}", mapping.env_name);
        }
    }

    #[test]
    fn usage_does_not_advertise_the_display_only_variable() {
        assert!(!format_usage().contains(env_mapping::HSA_ENABLE_SDMA));
    }

    #[test]
    fn report_is_suppressed_in_csv_mode() {
        let config = BenchmarkConfig {
            output_to_csv: true,
            ..Default::default()
        };
        assert!(format_run_configuration(&config).is_none());
    }

    #[test]
    fn report_shows_defaults() {
        let report = format_run_configuration(&BenchmarkConfig::default()).unwrap();
        assert!(report.contains("Run configuration"));
        assert!(report.contains("NUM_WARMUPS"));
        assert!(report.contains("Pseudo-random"));
        assert!(report.contains("non-interactive"));
    }

    #[test]
    fn report_shows_the_supplied_fill_pattern() {
        let config = BenchmarkConfig {
            fill_pattern: crate::FillPattern::from_hex("DEADBEEF").unwrap(),
            fill_pattern_text: Some("DEADBEEF".to_string()),
            ..Default::default()
        };
        let report = format_run_configuration(&config).unwrap();
        assert!(report.contains("(specified)"));
        assert!(report.contains("Pattern: DEADBEEF"));
    }

    #[test]
    fn sdma_row_appears_only_for_hip_copies() {
        let without_hip = format_run_configuration(&BenchmarkConfig::default()).unwrap();
        assert!(!without_hip.contains("HSA_ENABLE_SDMA"));

        let config = BenchmarkConfig {
            use_hip_call: true,
            hsa_enable_sdma: Some("0".to_string()),
            ..Default::default()
        };
        let with_hip = format_run_configuration(&config).unwrap();
        assert!(with_hip.contains("HSA_ENABLE_SDMA"));
        assert!(with_hip.contains("blit kernels"));
    }

    #[test]
    fn sdma_row_is_hidden_for_memset() {
        let config = BenchmarkConfig {
            use_hip_call: true,
            use_memset: true,
            ..Default::default()
        };
        let report = format_run_configuration(&config).unwrap();
        assert!(!report.contains("HSA_ENABLE_SDMA"));
    }
}
