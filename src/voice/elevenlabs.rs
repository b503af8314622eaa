use anyhow::Result;
use async_trait::async_trait;
use log::{debug, info};
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde::Serialize;

use crate::config::AppConfig;
use crate::voice::{SpeechRequest, SpeechSynthesizer, SynthesisError, VoiceSettings};

#[derive(Debug, Serialize)]
struct ConvertBody<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: &'a VoiceSettings,
}

// A wrapper for the ElevenLabs text-to-speech API
pub struct ElevenLabsClient {
    base_url: String,
    api_key: Option<String>,
    output_format: String,
    client: Client,
}

impl ElevenLabsClient {
    pub fn new(config: &AppConfig) -> Result<Self> {
        info!("Initializing ElevenLabs client at: {}", config.base_url);

        let client = Client::builder()
            .timeout(config.synthesis_timeout)
            .build()?;

        Ok(Self {
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            output_format: config.output_format.clone(),
            client,
        })
    }

    fn convert_url(&self, voice_id: &str) -> String {
        format!(
            "{}/v1/text-to-speech/{}?output_format={}",
            self.base_url, voice_id, self.output_format
        )
    }
}

#[async_trait]
impl SpeechSynthesizer for ElevenLabsClient {
    async fn synthesize(&self, request: &SpeechRequest) -> Result<Vec<u8>, SynthesisError> {
        let api_key = self.api_key.as_deref().ok_or(SynthesisError::MissingApiKey)?;

        let url = self.convert_url(&request.voice_id);
        let body = ConvertBody {
            text: &request.text,
            model_id: &request.model_id,
            voice_settings: &request.settings,
        };

        info!("Sending text-to-speech request ({} chars)", request.text.len());
        debug!("URL: {}", url);

        let mut response = self
            .client
            .post(&url)
            .header("xi-api-key", api_key)
            .header(ACCEPT, "audio/mpeg")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SynthesisError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        // Chunks arrive in playback order
        let mut audio = Vec::new();
        while let Some(chunk) = response.chunk().await? {
            audio.extend_from_slice(&chunk);
        }

        if audio.is_empty() {
            return Err(SynthesisError::EmptyAudio);
        }

        debug!("Received {} bytes of audio", audio.len());
        Ok(audio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn client_with(pairs: &[(&str, &str)]) -> ElevenLabsClient {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let config = AppConfig::from_lookup(|key| map.get(key).cloned());
        ElevenLabsClient::new(&config).unwrap()
    }

    fn request() -> SpeechRequest {
        SpeechRequest {
            text: "I demand to speak to your manager RIGHT NOW!".to_string(),
            voice_id: "voice-1".to_string(),
            model_id: "eleven_multilingual_v2".to_string(),
            settings: VoiceSettings::ANGRY,
        }
    }

    #[test]
    fn convert_url_includes_voice_and_format() {
        let client = client_with(&[("ELEVENLABS_BASE_URL", "http://localhost:9000")]);
        assert_eq!(
            client.convert_url("voice-1"),
            "http://localhost:9000/v1/text-to-speech/voice-1?output_format=mp3_44100_128"
        );
    }

    #[test]
    fn body_carries_text_model_and_settings() {
        let req = request();
        let body = ConvertBody {
            text: &req.text,
            model_id: &req.model_id,
            voice_settings: &req.settings,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["text"], req.text);
        assert_eq!(value["model_id"], "eleven_multilingual_v2");
        assert_eq!(value["voice_settings"]["use_speaker_boost"], true);
    }

    #[tokio::test]
    async fn missing_key_fails_before_any_request() {
        // Unroutable base URL: reaching the network would surface as Transport.
        let client = client_with(&[("ELEVENLABS_BASE_URL", "http://127.0.0.1:1")]);
        let err = client.synthesize(&request()).await.unwrap_err();
        assert!(matches!(err, SynthesisError::MissingApiKey));
    }

    #[tokio::test]
    async fn unreachable_provider_is_a_transport_error() {
        let client = client_with(&[
            ("ELEVENLABS_API_KEY", "sk-test"),
            ("ELEVENLABS_BASE_URL", "http://127.0.0.1:1"),
        ]);
        let err = client.synthesize(&request()).await.unwrap_err();
        assert!(matches!(err, SynthesisError::Transport(_)));
    }
}
