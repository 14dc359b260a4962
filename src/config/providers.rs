//! Provider selectors for the STT, LLM and TTS stages.
//!
//! Serialised as lowercase names (`"whisper"`, `"openai"`, `"elevenlabs"` …)
//! so the JSON file stays hand-editable.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// SttProvider
// ---------------------------------------------------------------------------

/// Speech-to-text backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SttProvider {
    /// OpenAI Whisper API — requires `OPENAI_API_KEY`.
    #[default]
    Whisper,
    /// Google Cloud Speech — uses `GOOGLE_CREDENTIALS_PATH`.
    Google,
    /// Azure Speech — uses `AZURE_SPEECH_KEY` + `AZURE_REGION`.
    Azure,
}

impl SttProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Whisper => "whisper",
            Self::Google => "google",
            Self::Azure => "azure",
        }
    }
}

// ---------------------------------------------------------------------------
// LlmProvider
// ---------------------------------------------------------------------------

/// Language-model backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    /// OpenAI chat completions — requires `OPENAI_API_KEY`.
    #[default]
    OpenAi,
    /// Google Gemini.
    Google,
    /// Anthropic Claude.
    Anthropic,
    /// Ollama running locally — no authentication, see `ollama_base_url`.
    Ollama,
}

impl LlmProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::Google => "google",
            Self::Anthropic => "anthropic",
            Self::Ollama => "ollama",
        }
    }
}

// ---------------------------------------------------------------------------
// TtsProvider
// ---------------------------------------------------------------------------

/// Text-to-speech backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TtsProvider {
    /// ElevenLabs — requires `ELEVENLABS_API_KEY`.
    #[default]
    ElevenLabs,
    Google,
    Azure,
    /// Offline local engine.
    #[serde(rename = "pyttsx3", alias = "local")]
    Local,
}

impl TtsProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ElevenLabs => "elevenlabs",
            Self::Google => "google",
            Self::Azure => "azure",
            Self::Local => "pyttsx3",
        }
    }
}

// ---------------------------------------------------------------------------
// ManimQuality
// ---------------------------------------------------------------------------

/// Render quality preset for the Manim animation integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ManimQuality {
    Low,
    Medium,
    #[default]
    High,
    #[serde(rename = "4k")]
    UltraHd,
}

impl ManimQuality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::UltraHd => "4k",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

display_as_str!(SttProvider, LlmProvider, TtsProvider, ManimQuality);
