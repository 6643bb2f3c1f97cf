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

//! Values applied when a configuration variable is absent from the environment.

pub const DEFAULT_BYTE_OFFSET: i32 = 0;

pub const DEFAULT_NUM_WARMUPS: i32 = 3;
pub const DEFAULT_NUM_ITERATIONS: i32 = 10;

pub const DEFAULT_SAMPLING_FACTOR: i32 = 1;
pub const DEFAULT_NUM_CPU_PER_LINK: i32 = 4;
