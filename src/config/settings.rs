//! Root application settings, validation and JSON persistence.
//!
//! `AppConfig` owns one of each section record plus application-level
//! scalars. It is always built through [`AppConfig::new`] (fresh, credentials
//! from the environment) or [`AppConfig::load`] (from a JSON file); both
//! create the required directories.

use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use super::env::DEFAULT_LOG_LEVEL;
use super::paths::ensure_dir;
use super::providers::{LlmProvider, SttProvider, TtsProvider};
use super::validate::{has_credential, TEMPERATURE_RANGE, VOLUME_RANGE};
use super::{
    AppPaths, AudioConfig, ConfigError, EnvSnapshot, Finding, IntegrationConfig, LlmConfig,
    SttConfig, TtsConfig,
};

pub const DEFAULT_APP_NAME: &str = "ADEM LLM Voice Assistant";
pub const DEFAULT_VERSION: &str = "0.1.0";

// ---------------------------------------------------------------------------
// AppConfig  (top-level)
// ---------------------------------------------------------------------------

/// Top-level application configuration.
///
/// # Persistence
///
/// ```rust,no_run
/// use adem_assistant::config::{AppConfig, EnvSnapshot};
///
/// let config = AppConfig::new(&EnvSnapshot::from_process(), "/opt/adem").unwrap();
/// for problem in config.validate() {
///     eprintln!("{problem}");
/// }
/// config.save("/opt/adem/config/config.json").unwrap();
///
/// let restored = AppConfig::load("/opt/adem/config/config.json", "/opt/adem").unwrap();
/// assert_eq!(restored.llm.model, config.llm.model);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub stt: SttConfig,
    pub llm: LlmConfig,
    pub tts: TtsConfig,
    pub audio: AudioConfig,
    pub integration: IntegrationConfig,

    pub app_name: String,
    pub version: String,
    pub debug_mode: bool,
    /// Level name (`"DEBUG"`, `"INFO"`, `"WARNING"` …).
    pub log_level: String,

    /// Install root and derived directories. Not persisted.
    pub paths: AppPaths,

    // Performance knobs, not persisted.
    pub max_concurrent_requests: usize,
    pub request_timeout: Duration,
    pub cache_enabled: bool,
    pub cache_ttl: Duration,
}

impl AppConfig {
    /// Builds a fresh configuration from an environment snapshot and creates
    /// the required directories under `base_dir`.
    ///
    /// Missing credentials never fail construction; they show up in
    /// [`AppConfig::validate`].
    pub fn new(env: &EnvSnapshot, base_dir: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let config = Self::assemble(
            SttConfig::from_env(env),
            LlmConfig::from_env(env),
            TtsConfig::from_env(env),
            AudioConfig::default(),
            IntegrationConfig::default(),
            AppScalars {
                app_name: DEFAULT_APP_NAME.into(),
                version: DEFAULT_VERSION.into(),
                debug_mode: env.debug,
                log_level: env.log_level.clone(),
            },
            AppPaths::from_base(base_dir),
        );
        config.ensure_dirs()?;
        Ok(config)
    }

    /// Reads the process environment once and builds a configuration rooted
    /// at the executable's directory.
    pub fn from_process_env() -> Result<Self, ConfigError> {
        Self::new(&EnvSnapshot::from_process(), AppPaths::install_root())
    }

    fn assemble(
        stt: SttConfig,
        llm: LlmConfig,
        tts: TtsConfig,
        audio: AudioConfig,
        integration: IntegrationConfig,
        scalars: AppScalars,
        paths: AppPaths,
    ) -> Self {
        Self {
            stt,
            llm,
            tts,
            audio,
            integration,
            app_name: scalars.app_name,
            version: scalars.version,
            debug_mode: scalars.debug_mode,
            log_level: scalars.log_level,
            paths,
            max_concurrent_requests: 5,
            request_timeout: Duration::from_secs(30),
            cache_enabled: true,
            cache_ttl: Duration::from_secs(3600),
        }
    }

    /// Absolute location of the recordings directory.
    pub fn recordings_dir(&self) -> PathBuf {
        self.paths.resolve(&self.audio.recordings_dir)
    }

    /// Absolute location of the temp directory.
    pub fn temp_dir(&self) -> PathBuf {
        self.paths.resolve(&self.audio.temp_dir)
    }

    /// Creates config, logs, data, recordings and temp directories.
    ///
    /// Safe to call repeatedly.
    pub fn ensure_dirs(&self) -> Result<(), ConfigError> {
        self.paths.ensure_dirs()?;
        ensure_dir(&self.recordings_dir())?;
        ensure_dir(&self.temp_dir())
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    /// Runs every check and returns all findings in check order.
    pub fn findings(&self) -> Vec<Finding> {
        let mut findings = Vec::new();

        if self.stt.provider == SttProvider::Whisper && !has_credential(&self.stt.openai_api_key) {
            findings.push(Finding::WhisperKeyMissing);
        }
        if self.llm.provider == LlmProvider::OpenAi && !has_credential(&self.llm.openai_api_key) {
            findings.push(Finding::OpenAiKeyMissing);
        }
        if self.tts.provider == TtsProvider::ElevenLabs
            && !has_credential(&self.tts.elevenlabs_api_key)
        {
            findings.push(Finding::ElevenLabsKeyMissing);
        }

        if !TEMPERATURE_RANGE.contains(&self.llm.temperature) {
            findings.push(Finding::TemperatureOutOfRange);
        }
        if !VOLUME_RANGE.contains(&self.tts.volume) {
            findings.push(Finding::VolumeOutOfRange);
        }

        findings
    }

    /// Human-readable validation messages; empty means valid.
    pub fn validate(&self) -> Vec<String> {
        self.findings().iter().map(ToString::to_string).collect()
    }

    /// Maps `log_level` to a [`LevelFilter`], or `None` for an unknown name.
    pub fn log_level_filter(&self) -> Option<LevelFilter> {
        let level = match self.log_level.trim().to_ascii_uppercase().as_str() {
            "OFF" => LevelFilter::Off,
            "CRITICAL" | "FATAL" | "ERROR" => LevelFilter::Error,
            "WARNING" | "WARN" => LevelFilter::Warn,
            "INFO" => LevelFilter::Info,
            "DEBUG" => LevelFilter::Debug,
            "TRACE" => LevelFilter::Trace,
            _ => return None,
        };
        Some(level)
    }

    /// Filter to initialise logging with. Unknown names fall back to `Info`;
    /// `debug_mode` raises the result to at least `Debug`.
    ///
    /// Runs before a logger exists, so it reports nothing itself; callers
    /// check [`AppConfig::log_level_filter`] once logging is up.
    pub fn log_filter(&self) -> LevelFilter {
        let level = self.log_level_filter().unwrap_or(LevelFilter::Info);
        if self.debug_mode {
            level.max(LevelFilter::Debug)
        } else {
            level
        }
    }

    /// Name of the first float field holding NaN or an infinity.
    fn non_finite_field(&self) -> Option<&'static str> {
        let floats = [
            ("stt.vad_threshold", self.stt.vad_threshold),
            ("stt.silence_duration", self.stt.silence_duration),
            ("llm.temperature", self.llm.temperature),
            ("llm.top_p", self.llm.top_p),
            ("llm.frequency_penalty", self.llm.frequency_penalty),
            ("llm.presence_penalty", self.llm.presence_penalty),
            ("tts.stability", self.tts.stability),
            ("tts.similarity_boost", self.tts.similarity_boost),
            ("tts.speed", self.tts.speed),
            ("tts.pitch", self.tts.pitch),
            ("tts.volume", self.tts.volume),
        ];
        floats
            .into_iter()
            .find(|(_, value)| !value.is_finite())
            .map(|(field, _)| field)
    }

    // -----------------------------------------------------------------------
    // Persistence
    // -----------------------------------------------------------------------

    /// Writes the persisted subset of the configuration as pretty JSON.
    ///
    /// Non-ASCII text (the Russian system prompt) is written as-is. The
    /// destination is replaced atomically; on error it is left untouched.
    /// NaN and infinite floats are rejected since JSON cannot represent them.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let write_err = |source: std::io::Error| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };

        let document = SavedDocument {
            stt: &self.stt,
            llm: &self.llm,
            tts: &self.tts,
            audio: &self.audio,
            integration: &self.integration,
            app_name: &self.app_name,
            version: &self.version,
            debug_mode: self.debug_mode,
            log_level: &self.log_level,
        };

        if let Some(field) = self.non_finite_field() {
            return Err(ConfigError::NonFinite { field });
        }

        // Encode fully before touching the destination, then swap the new
        // file in so a failure never leaves a truncated config behind.
        let bytes = serde_json::to_vec_pretty(&document).map_err(ConfigError::Serialize)?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut staged = NamedTempFile::new_in(dir).map_err(write_err)?;
        staged.write_all(&bytes).map_err(write_err)?;
        staged.as_file().sync_all().map_err(write_err)?;
        staged.persist(path).map_err(|e| write_err(e.error))?;

        log::info!("configuration saved to {}", path.display());
        Ok(())
    }

    /// Reads a configuration file written by [`AppConfig::save`].
    ///
    /// Missing sections and fields take their fixed defaults; credentials are
    /// not re-read from the environment. The result is not validated. The
    /// required directories are created under `base_dir`.
    pub fn load(path: impl AsRef<Path>, base_dir: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let document: LoadedDocument =
            serde_json::from_reader(BufReader::new(file)).map_err(|e| {
                if e.is_io() {
                    ConfigError::Read {
                        path: path.to_path_buf(),
                        source: e.into(),
                    }
                } else {
                    ConfigError::Parse {
                        path: path.to_path_buf(),
                        source: e,
                    }
                }
            })?;

        let config = Self::assemble(
            document.stt,
            document.llm,
            document.tts,
            document.audio,
            document.integration,
            AppScalars {
                app_name: document.app_name,
                version: document.version,
                debug_mode: document.debug_mode,
                log_level: document.log_level,
            },
            AppPaths::from_base(base_dir),
        );
        config.ensure_dirs()?;

        log::info!("configuration loaded from {}", path.display());
        Ok(config)
    }
}

struct AppScalars {
    app_name: String,
    version: String,
    debug_mode: bool,
    log_level: String,
}

// ---------------------------------------------------------------------------
// On-disk document shape
// ---------------------------------------------------------------------------

/// What [`AppConfig::save`] writes. Field order is the key order in the file.
#[derive(Serialize)]
struct SavedDocument<'a> {
    stt: &'a SttConfig,
    llm: &'a LlmConfig,
    tts: &'a TtsConfig,
    audio: &'a AudioConfig,
    integration: &'a IntegrationConfig,
    app_name: &'a str,
    version: &'a str,
    debug_mode: bool,
    log_level: &'a str,
}

/// What [`AppConfig::load`] accepts. Unknown top-level keys are ignored.
#[derive(Deserialize)]
#[serde(default)]
struct LoadedDocument {
    stt: SttConfig,
    llm: LlmConfig,
    tts: TtsConfig,
    audio: AudioConfig,
    integration: IntegrationConfig,
    app_name: String,
    version: String,
    debug_mode: bool,
    log_level: String,
}

impl Default for LoadedDocument {
    fn default() -> Self {
        Self {
            stt: SttConfig::default(),
            llm: LlmConfig::default(),
            tts: TtsConfig::default(),
            audio: AudioConfig::default(),
            integration: IntegrationConfig::default(),
            app_name: DEFAULT_APP_NAME.into(),
            version: DEFAULT_VERSION.into(),
            debug_mode: false,
            log_level: DEFAULT_LOG_LEVEL.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
