use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::constants::*;
use crate::element::Node;
use crate::error::{ConfigError, Result};

/// What pointer hover does to autoplay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PauseMode {
    Hover,
    Never,
}

impl From<&str> for PauseMode {
    fn from(value: &str) -> Self {
        // Anything but "hover" leaves autoplay running under the pointer
        if value.trim().eq_ignore_ascii_case("hover") {
            PauseMode::Hover
        } else {
            PauseMode::Never
        }
    }
}

impl From<String> for PauseMode {
    fn from(value: String) -> Self {
        PauseMode::from(value.as_str())
    }
}

impl From<PauseMode> for String {
    fn from(mode: PauseMode) -> Self {
        match mode {
            PauseMode::Hover => "hover".to_string(),
            PauseMode::Never => "never".to_string(),
        }
    }
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

/// Controller configuration. Durations are written as integer milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselOptions {
    /// Autoplay period; zero disables autoplay
    #[serde(with = "millis")]
    pub interval: Duration,
    pub wrap: bool,
    pub pause: PauseMode,
    pub keyboard: bool,
    pub touch: bool,
    pub indicators: bool,
    pub controls: bool,
    /// Length of the swap window during which navigation is ignored
    #[serde(with = "millis")]
    pub transition: Duration,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            wrap: true,
            pause: PauseMode::Hover,
            keyboard: true,
            touch: true,
            indicators: true,
            controls: true,
            transition: TRANSITION_DURATION,
        }
    }
}

impl CarouselOptions {
    pub fn autoplay_enabled(&self) -> bool {
        !self.interval.is_zero()
    }

    pub fn pauses_on_hover(&self) -> bool {
        self.pause == PauseMode::Hover
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    /// Reads `data-*` attributes from a carousel root. Values that do not
    /// parse keep their default and are logged.
    pub fn from_data_attributes(root: &Node) -> Self {
        let mut options = Self::default();

        if let Some(raw) = root.attribute("data-interval") {
            match parse_interval(raw) {
                Some(interval) => options.interval = interval,
                None => warn!(value = raw, "ignoring unparseable data-interval"),
            }
        }
        if let Some(raw) = root.attribute("data-pause") {
            options.pause = PauseMode::from(raw);
        }
        read_flag(root, "data-wrap", &mut options.wrap);
        read_flag(root, "data-keyboard", &mut options.keyboard);
        read_flag(root, "data-touch", &mut options.touch);

        options
    }
}

fn parse_interval(raw: &str) -> Option<Duration> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("false") {
        return Some(Duration::ZERO);
    }
    raw.parse::<u64>().ok().map(Duration::from_millis)
}

fn read_flag(root: &Node, name: &str, flag: &mut bool) {
    let Some(raw) = root.attribute(name) else {
        return;
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        // A bare attribute counts as enabled
        "" | "true" => *flag = true,
        "false" => *flag = false,
        _ => warn!(attribute = name, value = raw, "ignoring unparseable flag"),
    }
}
