// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{bail, Result};
use std::env;
use std::str::FromStr;

/// How the binary observes stream changes after startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WatchMode {
    /// Wait for a single event, then exit
    #[default]
    Once,
    /// Forward every change until shutdown
    Follow,
}

impl FromStr for WatchMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "once" => Ok(WatchMode::Once),
            "follow" => Ok(WatchMode::Follow),
            other => bail!("invalid watch mode '{}', expected 'once' or 'follow'", other),
        }
    }
}

/// Binary configuration loaded from environment variables
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub watch_mode: WatchMode,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let watch_mode = match lookup("STREAM_WATCH_MODE") {
            Some(value) => value.parse()?,
            None => WatchMode::default(),
        };

        Ok(Config { watch_mode })
    }
}
