use std::sync::Arc;

use crate::{
    io::{pcm::to_f32, SampleBuffer},
    playback::{
        message::{MessageReceiver, PlaybackMessage},
        VoiceHandle,
    },
};

struct ActiveVoice {
    handle: VoiceHandle,
    buffer: Arc<SampleBuffer>,
    position: usize,
    volume: f32,
    looping: bool,
}

/// Audio-thread side of playback: drains commands, then sums every active
/// voice into an interleaved `f32` block.
///
/// Voices beyond `max_voices` steal the oldest one. Output is hard-clipped to
/// `[-1, 1]` after mixing.
pub struct Mixer<Rx: MessageReceiver> {
    rx: Rx,
    voices: Vec<ActiveVoice>,
    max_voices: usize,
}

impl<Rx: MessageReceiver> Mixer<Rx> {
    pub fn new(rx: Rx, max_voices: usize) -> Self {
        let max_voices = max_voices.max(1);
        Self {
            rx,
            voices: Vec::with_capacity(max_voices),
            max_voices,
        }
    }

    pub fn active_voices(&self) -> usize {
        self.voices.len()
    }

    /// Fill `out` (interleaved, `channels` wide) with the next block.
    pub fn render(&mut self, out: &mut [f32], channels: usize) {
        while let Some(msg) = self.rx.pop() {
            match msg {
                PlaybackMessage::Play {
                    voice,
                    buffer,
                    volume,
                    looping,
                } => {
                    if self.voices.len() == self.max_voices {
                        // steal the oldest
                        self.voices.remove(0);
                    }
                    self.voices.push(ActiveVoice {
                        handle: voice,
                        buffer,
                        position: 0,
                        volume,
                        looping,
                    });
                }
                PlaybackMessage::Stop(handle) => self.voices.retain(|v| v.handle != handle),
            }
        }

        out.fill(0.0);
        let channels = channels.max(1);
        for voice in &mut self.voices {
            let frames = voice.buffer.frames();
            for slot in out.chunks_mut(channels) {
                let Some(frame) = frames.get(voice.position) else {
                    break;
                };
                let left = to_f32(frame.left) * voice.volume;
                let right = to_f32(frame.right) * voice.volume;
                match slot {
                    [mono] => *mono += 0.5 * (left + right),
                    [l, r, ..] => {
                        *l += left;
                        *r += right;
                    }
                    [] => {}
                }

                voice.position += 1;
                if voice.position == frames.len() && voice.looping {
                    voice.position = 0;
                }
            }
        }

        self.voices.retain(|v| v.position < v.buffer.len());
        for sample in out.iter_mut() {
            *sample = sample.clamp(-1.0, 1.0);
        }
    }
}
