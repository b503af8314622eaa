use std::fmt;
use std::str::FromStr;

use log::warn;
use thiserror::Error;

use crate::karen::responses::{self, ResponsePools};
use crate::voice::VoiceSettings;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown mood: {0}")]
pub struct UnknownMood(pub String);

// Persona preset driving both line selection and voice tuning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Mood {
    #[default]
    Angry,
    Happy,
    Crazy,
}

impl Mood {
    pub const ALL: [Mood; 3] = [Mood::Angry, Mood::Happy, Mood::Crazy];

    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Angry => "angry",
            Mood::Happy => "happy",
            Mood::Crazy => "crazy",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mood::Angry => "Angry Karen",
            Mood::Happy => "Happy Karen",
            Mood::Crazy => "Crazy Karen",
        }
    }

    pub fn face(self) -> &'static str {
        match self {
            Mood::Angry => "😠",
            Mood::Happy => "😊",
            Mood::Crazy => "🤪",
        }
    }

    // Permissive parse: anything unrecognised becomes `Angry`.
    pub fn resolve(raw: &str) -> Mood {
        match raw.parse() {
            Ok(mood) => mood,
            Err(UnknownMood(raw)) => {
                warn!("Unrecognised mood '{}', defaulting to angry", raw);
                Mood::Angry
            }
        }
    }

    pub fn pools(self) -> &'static ResponsePools {
        match self {
            Mood::Angry => &responses::ANGRY,
            Mood::Happy => &responses::HAPPY,
            Mood::Crazy => &responses::CRAZY,
        }
    }

    pub fn voice_settings(self) -> VoiceSettings {
        match self {
            Mood::Angry => VoiceSettings::ANGRY,
            Mood::Happy => VoiceSettings::HAPPY,
            Mood::Crazy => VoiceSettings::CRAZY,
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = UnknownMood;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Mood::ALL
            .into_iter()
            .find(|mood| mood.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownMood(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_moods_case_insensitively() {
        assert_eq!("angry".parse(), Ok(Mood::Angry));
        assert_eq!(" Happy ".parse(), Ok(Mood::Happy));
        assert_eq!("CRAZY".parse(), Ok(Mood::Crazy));
    }

    #[test]
    fn strict_parse_rejects_unknown_mood() {
        assert_eq!("sad".parse::<Mood>(), Err(UnknownMood("sad".to_string())));
        assert!("".parse::<Mood>().is_err());
    }

    #[test]
    fn resolve_defaults_to_angry() {
        assert_eq!(Mood::resolve("sad"), Mood::Angry);
        assert_eq!(Mood::resolve(""), Mood::Angry);
        assert_eq!(Mood::resolve("crazy"), Mood::Crazy);
    }

    #[test]
    fn every_mood_has_varied_pools() {
        for mood in Mood::ALL {
            let pools = mood.pools();
            assert!(pools.intro.len() > 1, "{} intro pool has one line", mood);
            assert!(pools.contextual.len() > 1, "{} contextual pool has one line", mood);
            assert!(pools.fallback_len() > pools.fallback.len(), "{} fallback is too thin", mood);
        }
    }

    #[test]
    fn display_round_trips_through_parse() {
        for mood in Mood::ALL {
            assert_eq!(mood.to_string().parse(), Ok(mood));
        }
    }
}
