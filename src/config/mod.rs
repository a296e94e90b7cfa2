mod init;
mod schema;

pub use init::run_init_wizard;
pub use schema::{Config, DEFAULT_LIST_LIMIT};

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Get the config directory path (~/.config/lead-distress/)
pub fn get_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("lead-distress"))
}

/// Get the default config file path (~/.config/lead-distress/config.yaml)
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses the default path
///   (~/.config/lead-distress/config.yaml)
///
/// # Errors
///
/// Returns an error if:
/// - An explicit config path does not exist (a missing default file yields the default config)
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let explicit = path.is_some();
    let config_path = match path {
        Some(p) => p,
        None => get_config_path()?,
    };

    if !config_path.exists() {
        if explicit {
            anyhow::bail!("Config file not found at {}", config_path.display());
        }
        return Ok(Config::default());
    }

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", config_path.display()))?;

    Ok(config)
}

/// Validate configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if config.list_limit == Some(0) {
        errors.push("list_limit: must be greater than zero".to_string());
    }

    if let Some(ref path) = config.store_path {
        if path.as_os_str().is_empty() {
            errors.push("store_path: must not be empty".to_string());
        } else if path.is_dir() {
            errors.push(format!("store_path: {} is a directory", path.display()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_load_explicit_missing_config_fails() {
        let path = env::temp_dir().join("lead_distress_missing_config.yaml");
        let _ = fs::remove_file(&path);
        let result = load_config(Some(path));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not found"));
    }

    #[test]
    fn test_load_explicit_config() {
        let path = env::temp_dir().join("lead_distress_config.yaml");
        fs::write(&path, "list_limit: 7\n").unwrap();
        let config = load_config(Some(path.clone())).unwrap();
        assert_eq!(config.list_limit, Some(7));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_invalid_yaml() {
        let path = env::temp_dir().join("lead_distress_bad_config.yaml");
        fs::write(&path, "list_limit: [not, a, number]\n").unwrap();
        assert!(load_config(Some(path.clone())).is_err());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_validate_default_config() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let config = Config {
            store_path: Some(env::temp_dir()),
            list_limit: Some(0),
            min_band: None,
        };
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("list_limit"));
        assert!(errors[1].contains("store_path"));
    }
}
