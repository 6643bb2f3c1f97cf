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

//! Configuration module for environment-driven benchmark settings.
//!
//! This module provides:
//! - An injectable environment lookup so loading stays deterministic in tests
//! - Parsing with documented defaults for absent variables
//! - Range and alignment validation producing a fully valid snapshot
//! - Hex fill-pattern decoding into whole 4-byte cells
//! - Read-only rendering of the snapshot and the recognized variables

pub mod benchmark;
pub mod defaults;
pub mod display;
pub mod env_mapping;
pub mod env_provider;
pub mod error;
pub mod fill_pattern;
mod validators;

pub use benchmark::BenchmarkConfig;
pub use env_mapping::EnvVarMapping;
pub use env_provider::{EnvProvider, ProcessEnvProvider, StaticEnvProvider};
pub use error::ConfigurationError;
pub use fill_pattern::FillPattern;
