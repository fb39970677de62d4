//! Window preferences kept alongside the history.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::StorageKeys;
use crate::storage::KeyValueStore;

pub const DEFAULT_OPACITY: f64 = 1.0;

/// Pin-on-top flag and window opacity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    pub always_on_top: bool,
    /// In [0, 1].
    pub opacity: f64,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            always_on_top: false,
            opacity: DEFAULT_OPACITY,
        }
    }
}

impl Preferences {
    /// Read both preferences from the store.
    ///
    /// Missing, unreadable or malformed values fall back to the defaults.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S, keys: &StorageKeys) -> Self {
        let read = |key: &str| match store.get(key) {
            Ok(value) => value,
            Err(e) => {
                warn!("Could not read preference {} ({})", key, e);
                None
            }
        };

        Self {
            always_on_top: parse_always_on_top(read(keys.always_on_top.as_str()).as_deref()),
            opacity: parse_opacity(read(keys.opacity.as_str()).as_deref()),
        }
    }

    /// Set the opacity, clamped into [0, 1].
    pub fn set_opacity(&mut self, opacity: f64) {
        self.opacity = clamp_opacity(opacity);
    }

    /// Stored form of the pin-on-top flag.
    pub fn always_on_top_value(&self) -> &'static str {
        if self.always_on_top {
            "true"
        } else {
            "false"
        }
    }

    /// Stored form of the opacity.
    pub fn opacity_value(&self) -> String {
        self.opacity.to_string()
    }
}

/// Only the exact string `"true"` enables pin-on-top.
pub fn parse_always_on_top(raw: Option<&str>) -> bool {
    raw == Some("true")
}

/// Parse a stored opacity, defaulting to fully opaque.
pub fn parse_opacity(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return DEFAULT_OPACITY;
    };

    match raw.trim().parse::<f64>() {
        Ok(value) => clamp_opacity(value),
        Err(_) => {
            warn!("Ignoring malformed opacity {:?}", raw);
            DEFAULT_OPACITY
        }
    }
}

/// Clamp into [0, 1]. Non-finite values become the default.
pub fn clamp_opacity(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        DEFAULT_OPACITY
    }
}
