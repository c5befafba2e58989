// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Logging setup.
//!
//! Library code only emits `tracing` events: `info` for phase transitions,
//! `debug` per query. The binary installs a subscriber writing to stderr, so
//! stdout stays clean for results.
//!
//! `RUST_LOG` takes precedence over the config:
//! ```bash
//! RUST_LOG=siftdex::index=info siftdex search data.tsv tesla
//! ```

use crate::config::LoggingConfig;
use std::sync::Once;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: Once = Once::new();

/// Build the filter directive string for `config`.
///
/// Module keys are relative to the crate root (`index`, `query`, ...).
pub fn filter_directives(config: &LoggingConfig) -> String {
    let mut directives = config.default.clone();
    let mut modules: Vec<_> = config.modules.iter().collect();
    modules.sort();
    for (module, level) in modules {
        directives.push_str(&format!(",siftdex::{module}={level}"));
    }
    directives
}

/// Install the global subscriber. Only the first call takes effect.
pub fn init(config: &LoggingConfig) {
    INIT.call_once(|| {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(filter_directives(config))
        };

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_timer(tracing_subscriber::fmt::time::uptime())
            .with_filter(filter);

        // Another subscriber may already be installed by an embedding program.
        let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
    });
}
