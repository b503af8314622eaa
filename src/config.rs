use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.elevenlabs.io";
// Rachel
pub const DEFAULT_VOICE_ID: &str = "21m00Tcm4TlvDq8ikWAM";
pub const DEFAULT_MODEL_ID: &str = "eleven_multilingual_v2";
pub const DEFAULT_OUTPUT_FORMAT: &str = "mp3_44100_128";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub voice_id: String,
    pub model_id: String,
    pub output_format: String,
    pub synthesis_timeout: Duration,
    pub host: String,
    pub port: u16,
    pub template_dir: String,
    pub static_dir: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    // Builds the config from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let get_or = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());

        Self {
            api_key: get("ELEVENLABS_API_KEY"),
            base_url: get_or("ELEVENLABS_BASE_URL", DEFAULT_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            voice_id: get_or("KAREN_VOICE_ID", DEFAULT_VOICE_ID),
            model_id: get_or("KAREN_MODEL_ID", DEFAULT_MODEL_ID),
            output_format: get_or("KAREN_OUTPUT_FORMAT", DEFAULT_OUTPUT_FORMAT),
            synthesis_timeout: Duration::from_secs(
                get("SYNTHESIS_TIMEOUT_SECS")
                    .and_then(|v| v.parse::<u64>().ok())
                    .unwrap_or(30),
            ),
            host: get_or("HOST", "127.0.0.1"),
            port: get("PORT").and_then(|v| v.parse::<u16>().ok()).unwrap_or(8080),
            template_dir: get_or("TEMPLATE_DIR", "templates"),
            static_dir: get_or("STATIC_DIR", "static"),
        }
    }
}
