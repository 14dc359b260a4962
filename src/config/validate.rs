//! Validation findings.
//!
//! A finding is a reported problem, not an error: callers decide whether it
//! is fatal. The messages are part of the user-facing contract and are kept
//! in Russian like the rest of the assistant's UI text.

use std::fmt;

/// Inclusive range accepted for `llm.temperature`.
pub const TEMPERATURE_RANGE: std::ops::RangeInclusive<f32> = 0.0..=2.0;
/// Inclusive range accepted for `tts.volume`.
pub const VOLUME_RANGE: std::ops::RangeInclusive<f32> = 0.0..=1.0;

/// One configuration problem reported by [`AppConfig::findings`].
///
/// [`AppConfig::findings`]: crate::config::AppConfig::findings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finding {
    /// Whisper STT selected without an OpenAI key.
    WhisperKeyMissing,
    /// OpenAI LLM selected without an OpenAI key.
    OpenAiKeyMissing,
    /// ElevenLabs TTS selected without an ElevenLabs key.
    ElevenLabsKeyMissing,
    /// `llm.temperature` outside 0 – 2.
    TemperatureOutOfRange,
    /// `tts.volume` outside 0 – 1.
    VolumeOutOfRange,
}

impl Finding {
    /// `true` for missing-credential findings, `false` for range findings.
    pub fn is_credential(&self) -> bool {
        matches!(
            self,
            Self::WhisperKeyMissing | Self::OpenAiKeyMissing | Self::ElevenLabsKeyMissing
        )
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::WhisperKeyMissing => "Whisper STT требует OPENAI_API_KEY",
            Self::OpenAiKeyMissing => "OpenAI LLM требует OPENAI_API_KEY",
            Self::ElevenLabsKeyMissing => "ElevenLabs TTS требует ELEVENLABS_API_KEY",
            Self::TemperatureOutOfRange => "LLM temperature должен быть между 0 и 2",
            Self::VolumeOutOfRange => "TTS volume должен быть между 0 и 1",
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A credential counts as present only when it is a non-empty string.
pub(crate) fn has_credential(key: &Option<String>) -> bool {
    key.as_deref().is_some_and(|k| !k.is_empty())
}
