use serde::Serialize;
use serde_json::Value;

use crate::karen::{Mood, Turn};

// Body of `POST /get-karen-response`.
// Every field is optional. Missing, malformed or wrongly typed input
// falls back to the defaults instead of failing the request.
#[derive(Debug, Clone, PartialEq)]
pub struct KarenRequest {
    pub mood: String,
    pub is_intro: bool,
    pub last_user_response: String,
}

impl Default for KarenRequest {
    fn default() -> Self {
        Self {
            mood: Mood::Angry.as_str().to_string(),
            is_intro: false,
            last_user_response: String::new(),
        }
    }
}

impl KarenRequest {
    pub fn from_body(body: &[u8]) -> Self {
        let value: Value = match serde_json::from_slice(body) {
            Ok(value) => value,
            Err(_) => return Self::default(),
        };
        let defaults = Self::default();
        Self {
            mood: value
                .get("mood")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or(defaults.mood),
            is_intro: value
                .get("isIntro")
                .and_then(Value::as_bool)
                .unwrap_or(defaults.is_intro),
            last_user_response: value
                .get("lastUserResponse")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or(defaults.last_user_response),
        }
    }

    pub fn into_turn(self) -> Turn {
        Turn {
            mood: Mood::resolve(&self.mood),
            is_intro: self.is_intro,
            last_user_response: Some(self.last_user_response).filter(|s| !s.is_empty()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct AckResponse {
    pub status: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct MoodOption {
    pub value: &'static str,
    pub label: &'static str,
    pub face: &'static str,
}

impl From<Mood> for MoodOption {
    fn from(mood: Mood) -> Self {
        Self {
            value: mood.as_str(),
            label: mood.label(),
            face: mood.face(),
        }
    }
}
