//! Section records: STT, LLM, TTS, audio and integrations.
//!
//! Each section has two sets of defaults:
//!
//! * `Default` — fixed literals, credentials `None`. Used for fields missing
//!   from a loaded JSON file.
//! * `from_env` — the same literals with credentials taken from an
//!   [`EnvSnapshot`]. Used on fresh construction.
//!
//! All sections deny unknown fields so a typo in the JSON file is reported
//! instead of silently ignored.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::providers::{LlmProvider, ManimQuality, SttProvider, TtsProvider};
use super::EnvSnapshot;

/// Default system prompt for the assistant persona.
pub const DEFAULT_SYSTEM_PROMPT: &str = "Ты — голосовой ассистент ADEM для работы с LLM и генеративными паттернами.\n    Помогай пользователю с параметрическим моделированием, 3D-графикой и AI интеграциями.\n    Отвечай кратко и по существу.";

// ---------------------------------------------------------------------------
// SttConfig
// ---------------------------------------------------------------------------

/// Speech-to-text settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SttConfig {
    pub provider: SttProvider,
    /// Whisper model size: tiny, base, small, medium, large.
    pub model: String,
    /// ISO-639-1 language code.
    pub language: String,
    pub sample_rate: u32,
    pub channels: u16,
    pub chunk_size: usize,

    pub openai_api_key: Option<String>,
    /// Path to the Google service-account JSON.
    pub google_credentials: Option<String>,
    pub azure_key: Option<String>,
    pub azure_region: Option<String>,

    /// Voice activity detection.
    pub enable_vad: bool,
    pub vad_threshold: f32,
    /// Seconds of silence before capture stops.
    pub silence_duration: f32,
}

impl Default for SttConfig {
    fn default() -> Self {
        Self {
            provider: SttProvider::default(),
            model: "base".into(),
            language: "ru".into(),
            sample_rate: 16_000,
            channels: 1,
            chunk_size: 1024,
            openai_api_key: None,
            google_credentials: None,
            azure_key: None,
            azure_region: None,
            enable_vad: true,
            vad_threshold: 0.5,
            silence_duration: 1.0,
        }
    }
}

impl SttConfig {
    pub fn from_env(env: &EnvSnapshot) -> Self {
        Self {
            openai_api_key: env.openai_api_key.clone(),
            google_credentials: env.google_credentials_path.clone(),
            azure_key: env.azure_speech_key.clone(),
            azure_region: env.azure_region.clone(),
            ..Self::default()
        }
    }
}

// ---------------------------------------------------------------------------
// LlmConfig
// ---------------------------------------------------------------------------

/// Language-model settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LlmConfig {
    pub provider: LlmProvider,
    /// Model identifier (`"gpt-4"`, `"gemini-pro"`, `"claude-3-opus"` …).
    pub model: String,
    /// Sampling temperature, valid range 0.0 – 2.0.
    pub temperature: f32,
    pub max_tokens: u32,
    pub top_p: f32,
    pub frequency_penalty: f32,
    pub presence_penalty: f32,

    pub openai_api_key: Option<String>,
    pub google_api_key: Option<String>,
    pub anthropic_api_key: Option<String>,
    pub ollama_base_url: String,

    pub system_prompt: String,

    /// Number of messages kept in the conversation history.
    pub max_history_length: usize,
    pub enable_streaming: bool,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: LlmProvider::default(),
            model: "gpt-4".into(),
            temperature: 0.7,
            max_tokens: 500,
            top_p: 0.9,
            frequency_penalty: 0.0,
            presence_penalty: 0.0,
            openai_api_key: None,
            google_api_key: None,
            anthropic_api_key: None,
            ollama_base_url: "http://localhost:11434".into(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.into(),
            max_history_length: 10,
            enable_streaming: false,
        }
    }
}

impl LlmConfig {
    pub fn from_env(env: &EnvSnapshot) -> Self {
        Self {
            openai_api_key: env.openai_api_key.clone(),
            google_api_key: env.google_api_key.clone(),
            anthropic_api_key: env.anthropic_api_key.clone(),
            ..Self::default()
        }
    }
}

// ---------------------------------------------------------------------------
// TtsConfig
// ---------------------------------------------------------------------------

/// Text-to-speech settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TtsConfig {
    pub provider: TtsProvider,
    pub voice_id: String,
    pub model: String,
    pub stability: f32,
    pub similarity_boost: f32,

    pub elevenlabs_api_key: Option<String>,
    pub google_credentials: Option<String>,
    pub azure_key: Option<String>,
    pub azure_region: Option<String>,

    /// ElevenLabs output format string.
    pub output_format: String,
    /// Speech rate multiplier.
    pub speed: f32,
    /// Pitch shift, -20 to 20.
    pub pitch: f32,
    /// Output volume, 0.0 – 1.0.
    pub volume: f32,
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            provider: TtsProvider::default(),
            voice_id: "default".into(),
            model: "eleven_multilingual_v2".into(),
            stability: 0.5,
            similarity_boost: 0.75,
            elevenlabs_api_key: None,
            google_credentials: None,
            azure_key: None,
            azure_region: None,
            output_format: "mp3_44100_128".into(),
            speed: 1.0,
            pitch: 0.0,
            volume: 1.0,
        }
    }
}

impl TtsConfig {
    pub fn from_env(env: &EnvSnapshot) -> Self {
        Self {
            elevenlabs_api_key: env.elevenlabs_api_key.clone(),
            google_credentials: env.google_credentials_path.clone(),
            azure_key: env.azure_speech_key.clone(),
            azure_region: env.azure_region.clone(),
            ..Self::default()
        }
    }
}

// ---------------------------------------------------------------------------
// AudioConfig
// ---------------------------------------------------------------------------

/// Audio device and processing settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AudioConfig {
    /// Input device index — `None` means the system default.
    pub input_device: Option<usize>,
    /// Output device index — `None` means the system default.
    pub output_device: Option<usize>,
    pub sample_rate: u32,
    pub channels: u16,
    pub buffer_size: usize,

    pub enable_noise_reduction: bool,
    pub enable_echo_cancellation: bool,
    pub enable_auto_gain: bool,

    pub recordings_dir: PathBuf,
    pub temp_dir: PathBuf,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            input_device: None,
            output_device: None,
            sample_rate: 44_100,
            channels: 2,
            buffer_size: 2048,
            enable_noise_reduction: true,
            enable_echo_cancellation: true,
            enable_auto_gain: true,
            recordings_dir: PathBuf::from("recordings"),
            temp_dir: PathBuf::from("temp"),
        }
    }
}

// ---------------------------------------------------------------------------
// IntegrationConfig
// ---------------------------------------------------------------------------

/// Connection settings for external tools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IntegrationConfig {
    // Grasshopper / Rhino
    pub grasshopper_enabled: bool,
    pub grasshopper_port: u16,
    pub grasshopper_host: String,

    // TouchDesigner (OSC)
    pub touchdesigner_enabled: bool,
    pub touchdesigner_port: u16,
    pub touchdesigner_osc_ip: String,

    // Manim
    pub manim_enabled: bool,
    pub manim_quality: ManimQuality,
    pub manim_output_dir: PathBuf,

    // Real-time WebSocket endpoint
    pub websocket_enabled: bool,
    pub websocket_port: u16,
    pub websocket_host: String,
}

impl Default for IntegrationConfig {
    fn default() -> Self {
        Self {
            grasshopper_enabled: false,
            grasshopper_port: 8080,
            grasshopper_host: "localhost".into(),
            touchdesigner_enabled: false,
            touchdesigner_port: 9000,
            touchdesigner_osc_ip: "127.0.0.1".into(),
            manim_enabled: false,
            manim_quality: ManimQuality::default(),
            manim_output_dir: PathBuf::from("animations"),
            websocket_enabled: false,
            websocket_port: 8765,
            websocket_host: "0.0.0.0".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_env() -> EnvSnapshot {
        EnvSnapshot {
            openai_api_key: Some("sk-openai".into()),
            google_credentials_path: Some("/etc/gcp.json".into()),
            azure_speech_key: Some("az-key".into()),
            azure_region: Some("westeurope".into()),
            google_api_key: Some("g-key".into()),
            anthropic_api_key: Some("ant-key".into()),
            elevenlabs_api_key: Some("el-key".into()),
            debug: false,
            log_level: "INFO".into(),
        }
    }

    #[test]
    fn class_defaults_have_no_credentials() {
        let stt = SttConfig::default();
        let llm = LlmConfig::default();
        let tts = TtsConfig::default();
        assert!(stt.openai_api_key.is_none() && stt.azure_key.is_none());
        assert!(llm.openai_api_key.is_none() && llm.anthropic_api_key.is_none());
        assert!(tts.elevenlabs_api_key.is_none() && tts.google_credentials.is_none());
    }

    #[test]
    fn from_env_fills_credentials_only() {
        let env = full_env();

        let stt = SttConfig::from_env(&env);
        assert_eq!(stt.openai_api_key.as_deref(), Some("sk-openai"));
        assert_eq!(stt.google_credentials.as_deref(), Some("/etc/gcp.json"));
        assert_eq!(stt.azure_key.as_deref(), Some("az-key"));
        assert_eq!(stt.azure_region.as_deref(), Some("westeurope"));
        assert_eq!(stt.model, "base");

        let llm = LlmConfig::from_env(&env);
        assert_eq!(llm.openai_api_key.as_deref(), Some("sk-openai"));
        assert_eq!(llm.google_api_key.as_deref(), Some("g-key"));
        assert_eq!(llm.anthropic_api_key.as_deref(), Some("ant-key"));
        assert_eq!(llm.temperature, 0.7);

        let tts = TtsConfig::from_env(&env);
        assert_eq!(tts.elevenlabs_api_key.as_deref(), Some("el-key"));
        assert_eq!(tts.azure_region.as_deref(), Some("westeurope"));
        assert_eq!(tts.volume, 1.0);
    }

    #[test]
    fn default_values_match_documented_literals() {
        let stt = SttConfig::default();
        assert_eq!(stt.provider, SttProvider::Whisper);
        assert_eq!(stt.language, "ru");
        assert_eq!(stt.sample_rate, 16_000);
        assert_eq!(stt.chunk_size, 1024);

        let llm = LlmConfig::default();
        assert_eq!(llm.provider, LlmProvider::OpenAi);
        assert_eq!(llm.model, "gpt-4");
        assert_eq!(llm.max_tokens, 500);
        assert_eq!(llm.ollama_base_url, "http://localhost:11434");
        assert!(llm.system_prompt.starts_with("Ты — голосовой ассистент ADEM"));

        let tts = TtsConfig::default();
        assert_eq!(tts.provider, TtsProvider::ElevenLabs);
        assert_eq!(tts.output_format, "mp3_44100_128");

        let audio = AudioConfig::default();
        assert_eq!(audio.sample_rate, 44_100);
        assert_eq!(audio.channels, 2);
        assert!(audio.input_device.is_none());
        assert_eq!(audio.recordings_dir, PathBuf::from("recordings"));

        let integration = IntegrationConfig::default();
        assert_eq!(integration.grasshopper_port, 8080);
        assert_eq!(integration.touchdesigner_osc_ip, "127.0.0.1");
        assert_eq!(integration.manim_quality, ManimQuality::High);
        assert_eq!(integration.websocket_port, 8765);
        assert_eq!(integration.websocket_host, "0.0.0.0");
    }

    #[test]
    fn partial_section_fills_missing_fields_from_defaults() {
        let llm: LlmConfig =
            serde_json::from_str(r#"{"model": "claude-3-opus", "provider": "anthropic"}"#)
                .unwrap();
        assert_eq!(llm.model, "claude-3-opus");
        assert_eq!(llm.provider, LlmProvider::Anthropic);
        assert_eq!(llm.max_tokens, 500);
        assert!(llm.openai_api_key.is_none());
    }

    #[test]
    fn unknown_section_field_is_rejected() {
        let result = serde_json::from_str::<AudioConfig>(r#"{"sample_rat": 48000}"#);
        assert!(result.is_err());
    }

    #[test]
    fn paths_serialise_as_strings() {
        let value = serde_json::to_value(AudioConfig::default()).unwrap();
        assert_eq!(value["recordings_dir"], "recordings");
        assert_eq!(value["temp_dir"], "temp");
        assert!(value["input_device"].is_null());
    }
}
