//! Application entry point — ADEM LLM Voice Assistant configuration check.
//!
//! # Startup sequence
//!
//! 1. Load `.env` into the process environment.
//! 2. Build [`AppConfig`] rooted at the executable's directory.
//! 3. Initialise logging from `LOG_LEVEL` / `DEBUG`.
//! 4. Print the selected providers and any validation findings.
//! 5. Write an example configuration file.

use adem_assistant::config::{load_dotenv, AppConfig};
use anyhow::{Context, Result};

const EXAMPLE_FILE: &str = "config_example.json";

fn main() -> Result<()> {
    // 1. .env
    let dotenv_result = load_dotenv();

    // 2. Configuration (environment read once here)
    let config = AppConfig::from_process_env()
        .context("failed to initialise configuration directories")?;

    // 3. Logging
    env_logger::Builder::new()
        .filter_level(config.log_filter())
        .parse_default_env()
        .init();
    match &dotenv_result {
        Ok(Some(path)) => log::debug!("environment loaded from {}", path.display()),
        Ok(None) => {}
        Err(e) => log::warn!("ignoring malformed .env file: {e}"),
    }
    if config.log_level_filter().is_none() {
        log::warn!("unknown log level {:?}, using INFO", config.log_level);
    }
    log::info!("{} v{} starting up", config.app_name, config.version);

    // 4. Summary
    println!("Приложение: {} v{}", config.app_name, config.version);
    println!("STT Provider: {}", config.stt.provider);
    println!("LLM Provider: {}", config.llm.provider);
    println!("TTS Provider: {}", config.tts.provider);

    let errors = config.validate();
    if errors.is_empty() {
        println!("\nКонфигурация валидна!");
    } else {
        println!("\nОшибки конфигурации:");
        for error in &errors {
            println!("  - {error}");
        }
    }

    // 5. Example file
    config
        .save(EXAMPLE_FILE)
        .with_context(|| format!("failed to write {EXAMPLE_FILE}"))?;
    println!("\nПример конфигурации сохранён в {EXAMPLE_FILE}");

    Ok(())
}
