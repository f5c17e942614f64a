// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Resolution of the effective configuration.
//!
//! The profile picks the starting point, a JSON file overrides any keys it
//! names, and `--batch-size` is applied last.

use clap::ValueEnum;
use color_eyre::Result;
use color_eyre::eyre::{Context, bail};
use mentor_alloc_domain::AssignmentConfig;
use serde_json::Value;
use std::path::Path;
use tracing::{debug, info};

/// A named configuration preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Profile {
    /// Overload allowed, no wrap-around.
    Development,
    /// Overload disallowed, mentors reused once all have a batch.
    Production,
}

impl Profile {
    fn preset(self) -> AssignmentConfig {
        match self {
            Self::Development => AssignmentConfig::development(),
            Self::Production => AssignmentConfig::production(),
        }
    }
}

/// Builds the configuration used by every command.
///
/// # Arguments
///
/// * `profile` - The preset to start from
/// * `file` - An optional JSON document whose keys override the preset
/// * `batch_size` - An optional batch size override
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read or is not a JSON object
/// - A key holds a value of the wrong type
/// - The resulting configuration is invalid
pub fn resolve(
    profile: Profile,
    file: Option<&Path>,
    batch_size: Option<usize>,
) -> Result<AssignmentConfig> {
    let mut config: AssignmentConfig = profile.preset();

    if let Some(path) = file {
        let text: String = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read configuration file {}", path.display()))?;
        config = overlay(&config, &text)
            .wrap_err_with(|| format!("Invalid configuration file {}", path.display()))?;
        info!(path = %path.display(), "Loaded configuration file");
    }

    if let Some(size) = batch_size {
        config.set_batch_size(size)?;
        debug!(batch_size = size, "Batch size overridden");
    }

    config.validate()?;
    Ok(config)
}

/// Applies the keys of a JSON document on top of `base`.
///
/// Nested objects are merged key by key, so a document that names a
/// single rule leaves every other rule of `base` in place.
fn overlay(base: &AssignmentConfig, text: &str) -> Result<AssignmentConfig> {
    let document: Value = serde_json::from_str(text)?;
    if !document.is_object() {
        bail!("Configuration must be a JSON object");
    }

    let mut merged: Value = serde_json::to_value(base)?;
    merge(&mut merged, document);
    Ok(serde_json::from_value(merged)?)
}

fn merge(target: &mut Value, source: Value) {
    match (target, source) {
        (Value::Object(target), Value::Object(source)) => {
            for (key, value) in source {
                match target.get_mut(&key) {
                    Some(existing) => merge(existing, value),
                    None => {
                        target.insert(key, value);
                    }
                }
            }
        }
        (target, source) => *target = source,
    }
}
