use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::ScoringWeights;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_limit")]
    pub default_limit: u16,
    #[serde(default = "default_max_limit")]
    pub max_limit: u16,
    #[serde(default = "default_transcript_turns")]
    pub transcript_turns: usize,
    #[serde(default)]
    pub seed_demo_profiles: bool,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
            transcript_turns: default_transcript_turns(),
            seed_demo_profiles: false,
        }
    }
}

fn default_limit() -> u16 { 20 }
fn default_max_limit() -> u16 { 100 }
fn default_transcript_turns() -> usize { 6 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_baseline")]
    pub baseline: f64,
    #[serde(default = "default_goal_weight")]
    pub goal: f64,
    #[serde(default = "default_vibe_weight")]
    pub vibe: f64,
    #[serde(default = "default_topic_weight")]
    pub topic: f64,
    #[serde(default = "default_conflict_penalty")]
    pub conflict: f64,
    #[serde(default = "default_introversion_penalty")]
    pub introversion: f64,
    #[serde(default = "default_speed_clash_penalty")]
    pub speed_clash: f64,
    #[serde(default = "default_speed_drift_penalty")]
    pub speed_drift: f64,
    #[serde(default = "default_green_flag_weight")]
    pub green_flag: f64,
    #[serde(default = "default_red_flag_penalty")]
    pub red_flag: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            baseline: default_baseline(),
            goal: default_goal_weight(),
            vibe: default_vibe_weight(),
            topic: default_topic_weight(),
            conflict: default_conflict_penalty(),
            introversion: default_introversion_penalty(),
            speed_clash: default_speed_clash_penalty(),
            speed_drift: default_speed_drift_penalty(),
            green_flag: default_green_flag_weight(),
            red_flag: default_red_flag_penalty(),
        }
    }
}

fn default_baseline() -> f64 { 50.0 }
fn default_goal_weight() -> f64 { 8.0 }
fn default_vibe_weight() -> f64 { 6.0 }
fn default_topic_weight() -> f64 { 4.0 }
fn default_conflict_penalty() -> f64 { 10.0 }
fn default_introversion_penalty() -> f64 { 2.0 }
fn default_speed_clash_penalty() -> f64 { 8.0 }
fn default_speed_drift_penalty() -> f64 { 2.0 }
fn default_green_flag_weight() -> f64 { 3.0 }
fn default_red_flag_penalty() -> f64 { 5.0 }

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            baseline: config.baseline,
            goal: config.goal,
            vibe: config.vibe,
            topic: config.topic,
            conflict: config.conflict,
            introversion: config.introversion,
            speed_clash: config.speed_clash,
            speed_drift: config.speed_drift,
            green_flag: config.green_flag,
            red_flag: config.red_flag,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with AURA_)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., AURA__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    pub fn scoring_weights(&self) -> ScoringWeights {
        ScoringWeights::from(&self.scoring.weights)
    }
}

fn environment() -> Environment {
    Environment::with_prefix("AURA")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
