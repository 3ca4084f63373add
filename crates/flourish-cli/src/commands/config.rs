//! Config command implementation
//!
//! Resolves a generation config from an optional JSON file plus flag
//! overrides, and prints it.

use anyhow::{Context, Result};
use colored::Colorize;
use flourish_curve::{GenerationConfig, Symmetry};
use std::fs;
use std::process::ExitCode;

/// Flag values that override the loaded config, field by field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub seed: Option<u32>,
    pub pendulums: Option<usize>,
    pub symmetries: Vec<String>,
    pub ramp_stop: Option<f64>,
    pub gallery_size: Option<usize>,
}

/// Loads `path` (or the defaults) and applies `overrides`.
pub fn resolve(path: Option<&str>, overrides: &ConfigOverrides) -> Result<GenerationConfig> {
    let mut config = match path {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path))?;
            GenerationConfig::from_json(&content)
                .with_context(|| format!("Failed to parse config file: {}", path))?
        }
        None => GenerationConfig::default(),
    };

    if let Some(seed) = overrides.seed {
        config.seed = seed;
    }
    if let Some(pendulums) = overrides.pendulums {
        config.pendulums = pendulums;
    }
    if !overrides.symmetries.is_empty() {
        config.symmetries =
            Symmetry::parse_all(&overrides.symmetries).context("Invalid --symmetry value")?;
    }
    if let Some(ramp_stop) = overrides.ramp_stop {
        config.ramp_stop = ramp_stop;
    }
    if let Some(gallery_size) = overrides.gallery_size {
        config.gallery_size = gallery_size;
    }

    config.validate().context("Invalid generation config")?;
    Ok(config)
}

/// Run the config command
///
/// Prints the resolved config as pretty JSON on stdout.
pub fn run(config: &GenerationConfig) -> Result<ExitCode> {
    let json = config
        .to_json_pretty()
        .context("Failed to serialize config")?;
    eprintln!("{} resolved generation config", "Config:".cyan().bold());
    println!("{}", json);
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn temp_config(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("flourish-{}-{}.json", name, std::process::id()));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_resolve_defaults() {
        let config = resolve(None, &ConfigOverrides::default()).unwrap();
        assert_eq!(config, GenerationConfig::default());
    }

    #[test]
    fn test_flags_override_file() {
        let path = temp_config("override", r#"{"seed": 5, "pendulums": 3}"#);
        let overrides = ConfigOverrides {
            seed: Some(9),
            symmetries: vec!["N".to_string()],
            ..Default::default()
        };
        let config = resolve(path.to_str(), &overrides).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(config.seed, 9);
        assert_eq!(config.pendulums, 3);
        assert_eq!(config.symmetries, vec![Symmetry::None]);
    }

    #[test]
    fn test_bad_symmetry_flag() {
        let overrides = ConfigOverrides {
            symmetries: vec!["X".to_string(), "W".to_string()],
            ..Default::default()
        };
        let err = resolve(None, &overrides).unwrap_err();
        assert!(format!("{:#}", err).contains("'W'"));
    }

    #[test]
    fn test_missing_file() {
        let err = resolve(Some("/nonexistent/flourish.json"), &ConfigOverrides::default()).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let overrides = ConfigOverrides {
            pendulums: Some(40),
            ..Default::default()
        };
        assert!(resolve(None, &overrides).is_err());
    }
}
