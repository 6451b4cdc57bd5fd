use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Config {
    pub scroll: ScrollConfig,
    pub keymap: KeymapConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ScrollConfig {
    /// Rows scrolled down before the header bar may hide.
    pub hide_header_threshold: usize,
    /// Rows added to the raw offset before matching section anchors.
    pub active_look_ahead: usize,
    pub line_step: usize,
    pub wheel_step: usize,
    pub page_overlap: usize,
    pub animation_tick_ms: u64,
    pub animation_ease_divisor: usize,
    pub input_poll_timeout_idle_ms: u64,
    pub input_poll_timeout_busy_ms: u64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            hide_header_threshold: 100,
            active_look_ahead: 100,
            line_step: 3,
            wheel_step: 3,
            page_overlap: 2,
            animation_tick_ms: 16,
            animation_ease_divisor: 4,
            input_poll_timeout_idle_ms: 16,
            input_poll_timeout_busy_ms: 8,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeymapConfig {
    pub preset: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            preset: "default".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> AppResult<Self> {
        let Some(path) = default_config_path() else {
            return Ok(Self::default());
        };
        Self::load_from_path(path)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        if !path.is_file() {
            return Err(AppError::invalid_argument(format!(
                "config path is not a regular file: {}",
                path.display()
            )));
        }

        let raw = fs::read_to_string(path).map_err(|source| {
            AppError::io_with_context(source, format!("failed to read config: {}", path.display()))
        })?;
        let parsed = toml::from_str::<Self>(&raw).map_err(|source| {
            AppError::invalid_argument(format!(
                "failed to parse config {}: {source}",
                path.display()
            ))
        })?;
        Ok(parsed.sanitized())
    }

    fn sanitized(mut self) -> Self {
        self.scroll.line_step = self.scroll.line_step.max(1);
        self.scroll.wheel_step = self.scroll.wheel_step.max(1);
        self.scroll.animation_tick_ms = self.scroll.animation_tick_ms.max(1);
        self.scroll.animation_ease_divisor = self.scroll.animation_ease_divisor.max(1);
        self.scroll.input_poll_timeout_idle_ms = self.scroll.input_poll_timeout_idle_ms.max(1);
        self.scroll.input_poll_timeout_busy_ms = self.scroll.input_poll_timeout_busy_ms.max(1);
        self
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    if let Some(explicit) = std::env::var_os("FOLIO_CONFIG_PATH")
        && !explicit.is_empty()
    {
        return Some(PathBuf::from(explicit));
    }

    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME")
        && !xdg.is_empty()
    {
        return Some(PathBuf::from(xdg).join("folio").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME")
        && !home.is_empty()
    {
        return Some(
            PathBuf::from(home)
                .join(".config")
                .join("folio")
                .join("config.toml"),
        );
    }
    if let Some(appdata) = std::env::var_os("APPDATA")
        && !appdata.is_empty()
    {
        return Some(PathBuf::from(appdata).join("folio").join("config.toml"));
    }
    None
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::process;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::Config;

    fn unique_temp_path(suffix: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!("folio_config_{suffix}_{}_{}", process::id(), nanos));
        path
    }

    #[test]
    fn load_from_path_returns_defaults_for_missing_file() {
        let missing = unique_temp_path("missing.toml");
        let config = Config::load_from_path(&missing).expect("missing config should fallback");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn default_thresholds_match_the_page_policy() {
        let config = Config::default();
        assert_eq!(config.scroll.hide_header_threshold, 100);
        assert_eq!(config.scroll.active_look_ahead, 100);
    }

    #[test]
    fn load_from_path_applies_partial_overrides_and_sanitizes() {
        let path = unique_temp_path("custom.toml");
        fs::write(
            &path,
            r#"
            [scroll]
            hide_header_threshold = 40
            line_step = 0
            wheel_step = 0
            animation_tick_ms = 0
            animation_ease_divisor = 0
            input_poll_timeout_idle_ms = 0
            input_poll_timeout_busy_ms = 0

            [keymap]
            preset = "emacs"
            "#,
        )
        .expect("config file should be written");

        let config = Config::load_from_path(&path).expect("config should parse");
        assert_eq!(config.scroll.hide_header_threshold, 40);
        assert_eq!(config.scroll.active_look_ahead, 100);
        assert_eq!(config.scroll.line_step, 1);
        assert_eq!(config.scroll.wheel_step, 1);
        assert_eq!(config.scroll.animation_tick_ms, 1);
        assert_eq!(config.scroll.animation_ease_divisor, 1);
        assert_eq!(config.scroll.input_poll_timeout_idle_ms, 1);
        assert_eq!(config.scroll.input_poll_timeout_busy_ms, 1);
        assert_eq!(config.keymap.preset, "emacs");

        fs::remove_file(&path).expect("config file should be removed");
    }
}
