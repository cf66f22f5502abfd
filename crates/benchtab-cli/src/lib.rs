// benchtab - Criterion comparison tables
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! benchtab CLI library.
//!
//! Argument parsing, configuration assembly and output for the `benchtab`
//! binary. Collection and layout live in the `benchtab` crate.
//!
//! # Exit Status
//!
//! - `0`: the table (or JSON) was printed
//! - `1`: invalid mode argument, or any missing or malformed input
//!
//! # Logging
//!
//! Diagnostics go to stderr through `tracing`. The filter is read from
//! `RUST_LOG` and defaults to `benchtab=warn`, so stdout carries only the
//! report.

pub mod cli;
pub mod error;

use tracing_subscriber::EnvFilter;

/// Log filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "benchtab=warn,benchtab_cli=warn";

/// Install the stderr log subscriber.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
