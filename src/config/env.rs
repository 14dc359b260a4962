//! Environment variables consumed by the configuration.
//!
//! Every variable is read exactly once into an [`EnvSnapshot`], which is then
//! passed explicitly into the section constructors. Nothing re-reads the
//! process environment after construction.

use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Variable names
// ---------------------------------------------------------------------------

pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const GOOGLE_CREDENTIALS_PATH: &str = "GOOGLE_CREDENTIALS_PATH";
pub const AZURE_SPEECH_KEY: &str = "AZURE_SPEECH_KEY";
pub const AZURE_REGION: &str = "AZURE_REGION";
pub const GOOGLE_API_KEY: &str = "GOOGLE_API_KEY";
pub const ANTHROPIC_API_KEY: &str = "ANTHROPIC_API_KEY";
pub const ELEVENLABS_API_KEY: &str = "ELEVENLABS_API_KEY";
pub const DEBUG: &str = "DEBUG";
pub const LOG_LEVEL: &str = "LOG_LEVEL";

/// Log level used when `LOG_LEVEL` is unset.
pub const DEFAULT_LOG_LEVEL: &str = "INFO";

// ---------------------------------------------------------------------------
// EnvSnapshot
// ---------------------------------------------------------------------------

/// Values of all configuration-related environment variables, captured once.
///
/// Credentials are `None` when the variable is unset or empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvSnapshot {
    pub openai_api_key: Option<String>,
    pub google_credentials_path: Option<String>,
    pub azure_speech_key: Option<String>,
    pub azure_region: Option<String>,
    pub google_api_key: Option<String>,
    pub anthropic_api_key: Option<String>,
    pub elevenlabs_api_key: Option<String>,
    /// `true` only when `DEBUG` equals `"true"` ignoring case.
    pub debug: bool,
    /// Raw `LOG_LEVEL` value, `"INFO"` when unset.
    pub log_level: String,
}

impl EnvSnapshot {
    /// Reads the current process environment.
    pub fn from_process() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a snapshot from an arbitrary variable lookup.
    ///
    /// Tests use this to inject values without touching the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let credential = |name: &str| lookup(name).filter(|v| !v.is_empty());

        Self {
            openai_api_key: credential(OPENAI_API_KEY),
            google_credentials_path: credential(GOOGLE_CREDENTIALS_PATH),
            azure_speech_key: credential(AZURE_SPEECH_KEY),
            azure_region: credential(AZURE_REGION),
            google_api_key: credential(GOOGLE_API_KEY),
            anthropic_api_key: credential(ANTHROPIC_API_KEY),
            elevenlabs_api_key: credential(ELEVENLABS_API_KEY),
            debug: lookup(DEBUG).is_some_and(|v| v.eq_ignore_ascii_case("true")),
            log_level: lookup(LOG_LEVEL).unwrap_or_else(|| DEFAULT_LOG_LEVEL.into()),
        }
    }

    /// A snapshot with nothing set.
    pub fn empty() -> Self {
        Self::from_lookup(|_| None)
    }
}

/// Loads `.env` from the working directory (or a parent) into the process
/// environment.
///
/// Returns the file that was loaded, `Ok(None)` when there is none, and an
/// error for a malformed file. Nothing is logged here since this runs before
/// the logger is initialised. Call before [`EnvSnapshot::from_process`].
pub fn load_dotenv() -> Result<Option<PathBuf>, dotenv::Error> {
    match dotenv::dotenv() {
        Ok(path) => Ok(Some(path)),
        Err(dotenv::Error::Io(_)) => Ok(None),
        Err(e) => Err(e),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
