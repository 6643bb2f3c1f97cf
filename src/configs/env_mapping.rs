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

//! Recognized environment variables and their descriptions.

pub const USE_HIP_CALL: &str = "USE_HIP_CALL";
pub const USE_MEMSET: &str = "USE_MEMSET";
pub const USE_SINGLE_SYNC: &str = "USE_SINGLE_SYNC";
pub const USE_INTERACTIVE: &str = "USE_INTERACTIVE";
pub const COMBINE_TIMING: &str = "COMBINE_TIMING";
pub const SHOW_ADDR: &str = "SHOW_ADDR";
pub const OUTPUT_TO_CSV: &str = "OUTPUT_TO_CSV";
pub const BYTE_OFFSET: &str = "BYTE_OFFSET";
pub const NUM_WARMUPS: &str = "NUM_WARMUPS";
pub const NUM_ITERATIONS: &str = "NUM_ITERATIONS";
pub const SAMPLING_FACTOR: &str = "SAMPLING_FACTOR";
pub const NUM_CPU_PER_LINK: &str = "NUM_CPU_PER_LINK";
pub const FILL_PATTERN: &str = "FILL_PATTERN";

/// Read for display purposes only, never parsed or validated.
pub const HSA_ENABLE_SDMA: &str = "HSA_ENABLE_SDMA";

/// A single environment variable recognized by the configuration loader.
#[derive(Debug, Clone, Copy)]
pub struct EnvVarMapping {
    pub env_name: &'static str,
    pub description: &'static str,
}

/// Every variable the loader consumes, in display order.
pub const ENV_VAR_MAPPINGS: &[EnvVarMapping] = &[
    EnvVarMapping {
        env_name: USE_HIP_CALL,
        description: "Use HIP library calls instead of custom kernels for GPU-executed copies",
    },
    EnvVarMapping {
        env_name: USE_MEMSET,
        description: "Perform a memset instead of a copy (source memory is ignored)",
    },
    EnvVarMapping {
        env_name: USE_SINGLE_SYNC,
        description: "Synchronize once after all iterations instead of per iteration",
    },
    EnvVarMapping {
        env_name: USE_INTERACTIVE,
        description: "Wait for user input before starting the transfer loop",
    },
    EnvVarMapping {
        env_name: COMBINE_TIMING,
        description: "Combine timing with kernel launch to lower timing overhead",
    },
    EnvVarMapping {
        env_name: SHOW_ADDR,
        description: "Print source and destination memory addresses for each link",
    },
    EnvVarMapping {
        env_name: OUTPUT_TO_CSV,
        description: "Emit results in CSV format",
    },
    EnvVarMapping {
        env_name: BYTE_OFFSET,
        description: "Byte offset for memory allocations, must be a multiple of 4 (default 0)",
    },
    EnvVarMapping {
        env_name: NUM_WARMUPS,
        description: "Number of untimed warmup iterations per test (default 3)",
    },
    EnvVarMapping {
        env_name: NUM_ITERATIONS,
        description: "Number of timed iterations per test (default 10)",
    },
    EnvVarMapping {
        env_name: SAMPLING_FACTOR,
        description: "Extra samples between powers of two when auto-generating sizes (default 1)",
    },
    EnvVarMapping {
        env_name: NUM_CPU_PER_LINK,
        description: "Number of CPU threads per link for CPU-executed copies (default 4)",
    },
    EnvVarMapping {
        env_name: FILL_PATTERN,
        description: "Hex digits used to fill source memory, must be an even count (e.g. DEADBEEF)",
    },
];

/// Finds a mapping by environment variable name.
pub fn find_by_env_name(env_name: &str) -> Option<&'static EnvVarMapping> {
    ENV_VAR_MAPPINGS.iter().find(|m| m.env_name == env_name)
}

/// Returns all valid environment variable names.
pub fn all_env_var_names() -> Vec<&'static str> {
    ENV_VAR_MAPPINGS.iter().map(|m| m.env_name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mappings_cover_all_loader_variables() {
        let names = all_env_var_names();
        assert_eq!(names.len(), 13);
        for name in [
            USE_HIP_CALL,
            USE_MEMSET,
            USE_SINGLE_SYNC,
            USE_INTERACTIVE,
            COMBINE_TIMING,
            SHOW_ADDR,
            OUTPUT_TO_CSV,
            BYTE_OFFSET,
            NUM_WARMUPS,
            NUM_ITERATIONS,
            SAMPLING_FACTOR,
            NUM_CPU_PER_LINK,
            FILL_PATTERN,
        ] {
            assert!(names.contains(&name), "missing mapping for {name}");
        }
    }

    #[test]
    fn display_only_variable_is_not_mapped() {
        assert!(find_by_env_name(HSA_ENABLE_SDMA).is_none());
    }

    #[test]
    fn find_by_env_name_returns_description() {
        let mapping = find_by_env_name("NUM_WARMUPS").unwrap();
        assert!(mapping.description.contains("warmup"));
    }
}
