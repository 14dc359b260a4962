//! ADEM LLM Voice Assistant — configuration library.
//!
//! The [`config`] module defines the typed settings tree (STT, LLM, TTS,
//! audio, integrations), fills credentials from the environment, validates
//! ranges and required keys, and persists everything as JSON.

pub mod config;
