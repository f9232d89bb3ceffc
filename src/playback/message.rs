use std::sync::Arc;

#[cfg(feature = "rtrb")]
use rtrb::Consumer;

use crate::{io::SampleBuffer, playback::VoiceHandle};

/// Commands sent from the game thread to the audio callback.
#[derive(Debug, Clone)]
pub enum PlaybackMessage {
    Play {
        voice: VoiceHandle,
        buffer: Arc<SampleBuffer>,
        volume: f32,
        looping: bool,
    },
    Stop(VoiceHandle),
}

pub trait MessageReceiver {
    fn pop(&mut self) -> Option<PlaybackMessage>;
}

#[cfg(feature = "rtrb")]
impl MessageReceiver for Consumer<PlaybackMessage> {
    fn pop(&mut self) -> Option<PlaybackMessage> {
        Consumer::pop(self).ok()
    }
}

impl MessageReceiver for std::collections::VecDeque<PlaybackMessage> {
    fn pop(&mut self) -> Option<PlaybackMessage> {
        self.pop_front()
    }
}
