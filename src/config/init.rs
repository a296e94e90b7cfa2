use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::config::{get_config_path, Config, DEFAULT_LIST_LIMIT};
use crate::scoring::DistressBand;

/// Prompt user with a message and return their trimmed input.
fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    std::io::stdout()
        .flush()
        .context("Failed to flush stdout")?;
    let mut input = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read input")?;
    Ok(input.trim().to_string())
}

/// Prompt user with a message and a default value. Returns default if input is empty.
fn prompt_with_default(message: &str, default: &str) -> Result<String> {
    let input = prompt(&format!("{} [{}]: ", message, default))?;
    if input.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(input)
    }
}

/// Prompt user with a yes/no question. Returns bool based on input and default.
fn prompt_yes_no(message: &str, default_yes: bool) -> Result<bool> {
    let hint = if default_yes { "Y/n" } else { "y/N" };
    let input = prompt(&format!("{} [{}]: ", message, hint))?;
    let input = input.to_lowercase();
    if input.is_empty() {
        Ok(default_yes)
    } else {
        Ok(input == "y" || input == "yes")
    }
}

/// Run the interactive init wizard to create a config file.
///
/// If `default_path` is Some, uses that as the config file path.
/// Otherwise, prompts the user with the default config path.
pub fn run_init_wizard(default_path: Option<PathBuf>) -> Result<()> {
    println!();
    println!("Lead Distress Configuration Wizard");
    println!("==================================");
    println!();

    // 1. Store location
    let default_store = crate::store::get_store_path()?;
    println!("Overview and financial records are kept in a single JSON file.");
    let store_str = prompt_with_default(
        "Store file",
        &default_store.display().to_string(),
    )?;
    let store_path = PathBuf::from(store_str);
    let store_path = if store_path == default_store {
        None
    } else {
        Some(store_path)
    };

    // 2. List defaults
    println!();
    println!("`list` ranks leads by distress score, highest first.");
    let list_limit: usize = loop {
        let input = prompt_with_default("How many leads to show", &DEFAULT_LIST_LIMIT.to_string())?;
        match input.parse::<usize>() {
            Ok(v) if v > 0 => break v,
            _ => println!("  Invalid: must be a positive whole number. Try again."),
        }
    };

    let min_band = loop {
        let input = prompt_with_default("Lowest band to show (LOW, MEDIUM, HIGH)", "LOW")?;
        match input.parse::<DistressBand>() {
            Ok(DistressBand::Low) => break None,
            Ok(band) => break Some(band),
            Err(e) => println!("  Invalid: {}. Try again.", e),
        }
    };

    // 3. Config path
    let default_config_path = match default_path {
        Some(p) => p,
        None => get_config_path()?,
    };
    println!();
    let path_str = prompt_with_default(
        "Where should the config be saved?",
        &default_config_path.display().to_string(),
    )?;
    let config_path = PathBuf::from(&path_str);

    if config_path.exists() {
        let overwrite = prompt_yes_no(
            &format!(
                "Config already exists at {}. Overwrite?",
                config_path.display()
            ),
            false,
        )?;
        if !overwrite {
            println!("Aborted.");
            return Ok(());
        }
    }

    // 4. Write config
    let config = Config {
        store_path,
        list_limit: (list_limit != DEFAULT_LIST_LIMIT).then_some(list_limit),
        min_band,
    };

    let yaml = serde_saphyr::to_string(&config)
        .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    std::fs::write(&config_path, &yaml)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    println!();
    println!("Config written to {}", config_path.display());
    println!("Run `lead-distress list` to get started.");

    Ok(())
}
