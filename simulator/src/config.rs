use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use aquatics::{Vec3f, WaterVolume, WetnessSpec};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
    #[error("dt must be positive, got {0}")]
    NonPositiveDt(f32),
    #[error("water volume max must exceed min on every axis")]
    InvertedVolume,
    #[error("unknown scenario `{0}` (expected boat-drop, paddle-strokes or swimmer)")]
    UnknownScenario(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    BoatDrop,
    PaddleStrokes,
    Swimmer,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub scenario: String,
    /// Fixed physics step (s).
    pub dt: f32,
    pub steps: u32,
    /// Telemetry interval in steps.
    pub log_every: u32,
    pub water_min: Vec3f,
    pub water_max: Vec3f,
    pub enter_blend_time: f32,
    pub exit_blend_time: f32,
}

impl Default for Config {
    fn default() -> Self {
        let wetness = WetnessSpec::default();
        Self {
            scenario: "boat-drop".to_string(),
            dt: 1.0 / 60.0,
            steps: 1800,
            log_every: 60,
            water_min: Vec3f::new(-20.0, -4.0, -20.0),
            water_max: Vec3f::new(20.0, 0.0, 20.0),
            enter_blend_time: wetness.enter_blend_time,
            exit_blend_time: wetness.exit_blend_time,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dt <= 0.0 {
            return Err(ConfigError::NonPositiveDt(self.dt));
        }
        if self.water_max.x <= self.water_min.x
            || self.water_max.y <= self.water_min.y
            || self.water_max.z <= self.water_min.z
        {
            return Err(ConfigError::InvertedVolume);
        }
        self.scenario()?;
        Ok(())
    }

    pub fn scenario(&self) -> Result<Scenario, ConfigError> {
        match self.scenario.as_str() {
            "boat-drop" => Ok(Scenario::BoatDrop),
            "paddle-strokes" => Ok(Scenario::PaddleStrokes),
            "swimmer" => Ok(Scenario::Swimmer),
            other => Err(ConfigError::UnknownScenario(other.to_string())),
        }
    }

    pub fn water_volume(&self) -> WaterVolume {
        WaterVolume::new(self.water_min, self.water_max)
    }

    pub fn wetness(&self) -> WetnessSpec {
        WetnessSpec {
            enter_blend_time: self.enter_blend_time,
            exit_blend_time: self.exit_blend_time,
        }
    }
}

/// Load the TOML config; `None` yields the built-in defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let display = path.display().to_string();
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: display.clone(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: display,
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        Config::default().validate().expect("defaults are valid");
    }

    #[test]
    fn rejects_nonpositive_dt() {
        let cfg = Config {
            dt: 0.0,
            ..Config::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::NonPositiveDt(_))));
    }

    #[test]
    fn rejects_inverted_volume() {
        let cfg = Config {
            water_max: Vec3f::new(-30.0, 0.0, 20.0),
            ..Config::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::InvertedVolume)));
    }

    #[test]
    fn rejects_unknown_scenario() {
        let cfg = Config {
            scenario: "submarine".to_string(),
            ..Config::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::UnknownScenario(_))
        ));
    }

    #[test]
    fn parses_a_partial_toml() {
        let cfg: Config = toml::from_str(
            r#"
                scenario = "paddle-strokes"
                steps = 600
            "#,
        )
        .expect("partial config");
        assert_eq!(cfg.scenario().unwrap(), Scenario::PaddleStrokes);
        assert_eq!(cfg.steps, 600);
        assert!((cfg.dt - 1.0 / 60.0).abs() < 1e-9);
    }
}
