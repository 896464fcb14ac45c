//! Audio requests handed to the presentation layer. Synthesis and playback live outside the crate.
use std::fmt;

pub const SPEECH_LANG: &str = "zh-CN";

#[derive(Debug, Clone, PartialEq)]
pub enum AudioCommand {
    Speak { text: String, rate: f32 },
    PlayRecording { item_id: String },
}

impl AudioCommand {
    pub fn speak(text: &str, rate: f32) -> Self {
        AudioCommand::Speak {
            text: text.to_string(),
            rate,
        }
    }
}

impl fmt::Display for AudioCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudioCommand::Speak { text, rate } => {
                write!(f, "speak [{}] '{}' at {:.1}x", SPEECH_LANG, text, rate)
            }
            AudioCommand::PlayRecording { item_id } => write!(f, "play recording for {}", item_id),
        }
    }
}
