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

//! Environment lookup abstraction used by the configuration loader.

use std::collections::HashMap;
use std::env;

/// Read-only view of environment variables.
///
/// The loader takes this as an explicit capability so that configuration can
/// be built from a fixed set of values without touching the real process
/// environment.
pub trait EnvProvider {
    fn var(&self, name: &str) -> Option<String>;
}

/// Provider backed by the real process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnvProvider;

impl EnvProvider for ProcessEnvProvider {
    fn var(&self, name: &str) -> Option<String> {
        env::var(name).ok()
    }
}

/// Provider backed by a fixed in-memory map.
#[derive(Debug, Default, Clone)]
pub struct StaticEnvProvider {
    vars: HashMap<String, String>,
}

impl StaticEnvProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_var(mut self, name: &str, value: &str) -> Self {
        self.vars.insert(name.to_string(), value.to_string());
        self
    }
}

impl EnvProvider for StaticEnvProvider {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}
