//! Configuration module for the ADEM voice assistant.
//!
//! Provides `AppConfig` (top-level settings), sub-configs for each subsystem,
//! `EnvSnapshot` for the environment variables read at construction time,
//! `AppPaths` for the install-root directory layout, and JSON persistence via
//! `AppConfig::load` / `AppConfig::save`.

pub mod env;
pub mod error;
pub mod paths;
pub mod providers;
pub mod sections;
pub mod settings;
pub mod validate;

pub use env::{load_dotenv, EnvSnapshot};
pub use error::ConfigError;
pub use paths::AppPaths;
pub use providers::{LlmProvider, ManimQuality, SttProvider, TtsProvider};
pub use sections::{AudioConfig, IntegrationConfig, LlmConfig, SttConfig, TtsConfig};
pub use settings::AppConfig;
pub use validate::Finding;
