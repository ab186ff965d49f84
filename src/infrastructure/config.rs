use crate::presentation::config::keybindings;
use crate::presentation::config::styles;

use config::ConfigError;
use serde::Deserialize;

use crate::utils;

const CONFIG: &str = include_str!("../../.config/config.json5");

/// Clock timing and layout settings
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClockConfig {
    /// How often the wall clock is sampled
    pub sample_interval_ms: u64,
    /// Terminals narrower than this use the compact dial
    pub compact_breakpoint_columns: u16,
    /// Duration of the info overlay enter/exit transition
    pub overlay_transition_ms: u64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            sample_interval_ms: 50,
            compact_breakpoint_columns: 100,
            overlay_transition_ms: 300,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct FullscreenConfig {
    /// Send XTWINOPS fullscreen requests to the terminal
    pub escape_sequences: bool,
}

impl Default for FullscreenConfig {
    fn default() -> Self {
        Self {
            escape_sequences: true,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub keybindings: keybindings::KeyBindings,
    #[serde(default)]
    pub styles: styles::Styles,
    #[serde(default)]
    pub clock: ClockConfig,
    #[serde(default)]
    pub fullscreen: FullscreenConfig,
}

impl Config {
    /// Load the user's config (if any) on top of the embedded defaults.
    pub fn new() -> Result<Self, ConfigError> {
        let default_config = Self::defaults()?;
        let config_dir = utils::get_config_dir();
        let mut builder = config::Config::builder();

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::info!(
                "No configuration file found in {}, using defaults",
                config_dir.display()
            );
            return Ok(default_config);
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;
        cfg.merge_defaults(&default_config);

        Ok(cfg)
    }

    /// The embedded default configuration
    pub fn defaults() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    /// Fill keybindings and styles the user did not override
    pub fn merge_defaults(&mut self, defaults: &Config) {
        // Merge default keybindings into user config (flat mapping)
        for (keyseq, action) in defaults.keybindings.iter() {
            self.keybindings.entry(keyseq.clone()).or_insert(*action);
        }
        for (style_key, style) in defaults.styles.iter() {
            self.styles
                .entry(style_key.clone())
                .or_insert_with(|| *style);
        }
    }

    pub fn sample_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.clock.sample_interval_ms.max(1))
    }
}
