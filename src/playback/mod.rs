// Purpose: the seam between finished buffers and an audio device
// The library owns no device. A `PlaybackDevice` implementation (the preview
// binary ships a cpal one) receives shared buffers and hands back voices.

pub mod board;
pub mod message;
pub mod mixer;
pub mod settings;

use std::sync::Arc;

use thiserror::Error;

use crate::io::SampleBuffer;

pub use board::SoundBoard;
pub use message::{MessageReceiver, PlaybackMessage};
pub use mixer::Mixer;
pub use settings::AudioSettings;

/// Opaque id of one playing instance of a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VoiceHandle(u64);

impl VoiceHandle {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(self) -> u64 {
        self.0
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlaybackError {
    /// No usable output; playback should be switched off.
    #[error("audio backend unavailable: {0}")]
    BackendUnavailable(String),
    /// This one request could not be honoured (queue full, too many voices).
    #[error("playback request rejected: {0}")]
    Rejected(String),
}

/// Anything that can play shared PCM buffers.
///
/// The same buffer may be submitted again while an earlier voice of it is
/// still playing; implementations must mix overlapping voices.
pub trait PlaybackDevice {
    fn play(
        &mut self,
        buffer: Arc<SampleBuffer>,
        volume: f32,
        looping: bool,
    ) -> Result<VoiceHandle, PlaybackError>;

    /// Stop a voice. Unknown or finished voices are ignored.
    fn stop(&mut self, voice: VoiceHandle);
}
