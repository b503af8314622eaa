pub mod dispatch;
pub mod mood;
pub mod responses;
pub mod selector;

pub use dispatch::{SpeechDispatcher, Turn};
pub use mood::Mood;
