pub mod elevenlabs;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

pub use elevenlabs::ElevenLabsClient;

// Tuning knobs passed through to the speech provider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VoiceSettings {
    pub stability: f32,
    pub similarity_boost: f32,
    pub style: f32,
    pub use_speaker_boost: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speaking_rate: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl VoiceSettings {
    // Very unstable, fast and varied
    pub const ANGRY: VoiceSettings = VoiceSettings {
        stability: 0.05,
        similarity_boost: 1.0,
        style: 1.0,
        use_speaker_boost: true,
        speaking_rate: Some(1.3),
        temperature: Some(1.5),
    };

    pub const HAPPY: VoiceSettings = VoiceSettings {
        stability: 0.7,
        similarity_boost: 0.75,
        style: 0.7,
        use_speaker_boost: true,
        speaking_rate: None,
        temperature: None,
    };

    pub const CRAZY: VoiceSettings = VoiceSettings {
        stability: 0.1,
        similarity_boost: 0.75,
        style: 1.0,
        use_speaker_boost: true,
        speaking_rate: None,
        temperature: None,
    };
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpeechRequest {
    pub text: String,
    pub voice_id: String,
    pub model_id: String,
    pub settings: VoiceSettings,
}

#[derive(Debug, Error)]
pub enum SynthesisError {
    #[error("ELEVENLABS_API_KEY is not set")]
    MissingApiKey,

    #[error("Request to speech provider failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Speech provider rejected the request ({status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("Speech provider returned no audio")]
    EmptyAudio,
}

// Remote text-to-speech capability.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    // Returns the complete audio payload, or an error with no partial audio.
    async fn synthesize(&self, request: &SpeechRequest) -> Result<Vec<u8>, SynthesisError>;
}
