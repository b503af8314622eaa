use std::sync::Arc;

use log::info;
use rand::Rng;

use crate::karen::mood::Mood;
use crate::karen::selector;
use crate::voice::{SpeechRequest, SpeechSynthesizer, SynthesisError};

// One turn of the simulated call. Nothing survives between turns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Turn {
    pub mood: Mood,
    pub is_intro: bool,
    pub last_user_response: Option<String>,
}

pub struct SpeechDispatcher {
    synthesizer: Arc<dyn SpeechSynthesizer>,
    voice_id: String,
    model_id: String,
}

impl SpeechDispatcher {
    pub fn new(
        synthesizer: Arc<dyn SpeechSynthesizer>,
        voice_id: impl Into<String>,
        model_id: impl Into<String>,
    ) -> Self {
        Self {
            synthesizer,
            voice_id: voice_id.into(),
            model_id: model_id.into(),
        }
    }

    pub fn compose<R: Rng>(&self, turn: &Turn, rng: &mut R) -> SpeechRequest {
        let text = selector::select(
            turn.mood,
            turn.is_intro,
            turn.last_user_response.as_deref(),
            rng,
        );

        SpeechRequest {
            text: text.to_string(),
            voice_id: self.voice_id.clone(),
            model_id: self.model_id.clone(),
            settings: turn.mood.voice_settings(),
        }
    }

    // Exactly one provider call per request; no retries, no caching.
    pub async fn speak(&self, request: &SpeechRequest) -> Result<Vec<u8>, SynthesisError> {
        let audio = self.synthesizer.synthesize(request).await?;
        info!("Audio generated successfully ({} bytes)", audio.len());
        Ok(audio)
    }
}
